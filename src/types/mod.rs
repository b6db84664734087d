//! Core types and configuration for the employee roster simulator
//!
//! This module contains the foundational data types for the generation
//! system:
//!
//! - **Enums**: the gender domain and output format switches
//! - **Configuration**: CLI arguments and the loosely-typed configuration
//!   resolver with its alias-key priority tables
//!
//! # Usage Example
//!
//! ```rust
//! use employee_roster_simulator::types::*;
//! use serde_json::json;
//!
//! // Resolve a loosely-typed configuration value
//! let config = ResolvedConfig::from_value(&json!({
//!     "employeeCount": 5,
//!     "ageRange": {"min": 25, "max": 40},
//! }));
//! assert_eq!(config.employee_count, 5);
//!
//! // Malformed input degrades to the defaults instead of failing
//! let fallback = ResolvedConfig::from_value(&json!("not a config"));
//! assert_eq!(fallback.employee_count, 0);
//! assert_eq!(fallback.min_age, DEFAULT_MIN_AGE);
//! ```

pub mod config;
pub mod enums;

pub use config::{config_template, CliArgs, ResolvedConfig, DEFAULT_MAX_AGE, DEFAULT_MIN_AGE};
pub use enums::{Gender, OutputFormat};
