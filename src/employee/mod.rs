//! Employee modeling and generation
//!
//! This module contains the employee record produced by the simulator and
//! the generator that synthesizes populations of them.
//!
//! # Usage Example
//!
//! ```rust
//! use employee_roster_simulator::catalog::Catalog;
//! use employee_roster_simulator::employee::EmployeeGenerator;
//! use employee_roster_simulator::types::ResolvedConfig;
//!
//! let mut generator = EmployeeGenerator::with_seed(42);
//! let config = ResolvedConfig { employee_count: 10, min_age: 25, max_age: 40 };
//!
//! let employees = generator.generate(&config, &Catalog::default());
//! assert_eq!(employees.len(), 10);
//! ```

pub mod generator;
pub mod record;

pub use generator::EmployeeGenerator;
pub use record::{Employee, MILLIS_PER_YEAR};
