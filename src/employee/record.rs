//! Core employee record
//!
//! This module contains the [`Employee`] struct produced by the generator
//! and consumed by the statistics engine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::Gender;

/// Milliseconds in a mean year of 365.25 days
pub const MILLIS_PER_YEAR: i64 = 31_557_600_000;

/// One synthetic employee record
///
/// Records are created once by the generator and treated as immutable
/// afterwards, except for the single surname rewrite the coverage
/// adjustment may perform right after generation. The birthdate is carried
/// as an ISO-8601 instant string: populations supplied by callers may hold
/// unparseable values there, which the statistics engine degrades to age 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// First name, drawn from the gender-matching name list
    pub name: String,
    /// Surname, drawn from the shared surname list
    pub surname: String,
    /// Gender of the employee
    pub gender: Gender,
    /// Birth instant as an ISO-8601 string, millisecond precision, UTC
    pub birthdate: String,
    /// Workload in percent of full-time, one of {10, 20, 30, 40}
    pub workload: u32,
}

impl Employee {
    /// Create a new employee record
    pub fn new(
        name: impl Into<String>,
        surname: impl Into<String>,
        gender: Gender,
        birthdate: impl Into<String>,
        workload: u32,
    ) -> Self {
        Self {
            name: name.into(),
            surname: surname.into(),
            gender,
            birthdate: birthdate.into(),
            workload,
        }
    }

    /// Parse the birth instant, if the birthdate string is well-formed
    pub fn birth_instant(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.birthdate)
            .ok()
            .map(|instant| instant.with_timezone(&Utc))
    }

    /// Decimal age in years at the given instant, 0 for unparseable birthdates
    pub fn decimal_age_at(&self, now: DateTime<Utc>) -> f64 {
        match self.birth_instant() {
            Some(birth) => {
                let elapsed_ms = now.timestamp_millis() - birth.timestamp_millis();
                elapsed_ms as f64 / MILLIS_PER_YEAR as f64
            }
            None => 0.0,
        }
    }

    /// Whole-year age at the given instant (floor of the decimal age)
    pub fn age_at(&self, now: DateTime<Utc>) -> i64 {
        self.decimal_age_at(now).floor() as i64
    }
}
