//! Roster pipeline: orchestration, statistics, reporting, errors, logging
//!
//! This module contains everything downstream of employee generation:
//!
//! - **RosterOrchestrator**: resolve → generate → aggregate → assemble
//! - **RosterStatistics**: the single-pass statistics engine
//! - **RosterReport**: the externally visible result shape with its alias
//!   contract
//! - **RosterError**: boundary errors (the pipeline itself never fails)
//! - **LoggingConfig**: tracing setup for the binary and embedders
//!
//! # Usage Example
//!
//! ```rust
//! use employee_roster_simulator::roster::generate_roster;
//! use serde_json::json;
//!
//! let report = generate_roster(&json!({
//!     "employeeCount": 3,
//!     "ageRange": {"min": 25, "max": 40},
//! }));
//!
//! assert_eq!(report.total, 3);
//! assert_eq!(report.statistics.employee_count, 3);
//! ```

pub mod error;
pub mod logging;
pub mod orchestrator;
pub mod report;
pub mod statistics;

pub use error::{RosterError, RosterResult};
pub use logging::LoggingConfig;
pub use orchestrator::{generate_roster, RosterOrchestrator};
pub use report::{population_csv, RosterReport, StatisticsSection};
pub use statistics::RosterStatistics;
