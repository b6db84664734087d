//! Employee Roster Simulator
//!
//! A synthetic employee population generator that resolves a loosely-typed
//! configuration value into concrete generation parameters, synthesizes the
//! requested number of employee records, and computes a fixed set of
//! descriptive statistics over the result in one call.
//!
//! # Overview
//!
//! This library is used where a caller needs reproducible-shape (not
//! reproducible-value) test or demo data plus aggregate metrics. Input is
//! never rejected: malformed configuration degrades to an empty roster with
//! default parameters rather than an error.
//!
//! ## Key Features
//!
//! - **Lenient Configuration**: bare counts, structured objects with alias
//!   keys, or nothing at all, resolved by fixed priority tables
//! - **Uniform Sampling**: gender, names, surnames, and workloads drawn
//!   uniformly from an injectable catalog
//! - **Age Windows**: millisecond-precision birthdate sampling inside an
//!   inclusive/exclusive age window
//! - **Surname Coverage**: large populations are adjusted so every catalog
//!   surname appears at least once
//! - **Single-Pass Statistics**: per-workload counts, age extremes and
//!   medians, and gender-conditioned workload averages
//! - **Compatibility Aliases**: the report repeats computed values under
//!   the alias names downstream consumers expect
//!
//! ## Quick Start
//!
//! ```rust
//! use employee_roster_simulator::roster::generate_roster;
//! use serde_json::json;
//!
//! // Generate ten employees in the default age window [18, 65)
//! let report = generate_roster(&json!(10));
//! assert_eq!(report.total, 10);
//!
//! // Structured configuration with alias keys
//! let report = generate_roster(&json!({
//!     "personCount": 5,
//!     "age": {"from": 30, "to": 40},
//! }));
//! assert_eq!(report.employees.len(), 5);
//! ```
//!
//! ## Module Organization
//!
//! - [`types`]: enums, CLI arguments, and the configuration resolver
//! - [`catalog`]: the reference name/surname/workload lists
//! - [`employee`]: the employee record and the generator
//! - [`roster`]: statistics, report assembly, orchestration, errors, logging
#![warn(missing_docs, missing_debug_implementations, unreachable_pub)]

// Module declarations
pub mod catalog;
pub mod employee;
pub mod roster;
pub mod types;

// Re-export the primary types for convenient access

// Core types and configuration
pub use types::{
    config_template,
    CliArgs,
    Gender,
    OutputFormat,
    ResolvedConfig,
    DEFAULT_MAX_AGE,
    DEFAULT_MIN_AGE,
};

// Reference data
pub use catalog::Catalog;

// Employee record and generation
pub use employee::{Employee, EmployeeGenerator};

// Pipeline, statistics, and reporting
pub use roster::{
    generate_roster, population_csv, LoggingConfig, RosterError, RosterOrchestrator,
    RosterReport, RosterResult, RosterStatistics, StatisticsSection,
};
