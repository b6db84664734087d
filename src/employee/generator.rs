//! Employee generation
//!
//! This module contains the generator that synthesizes employee records
//! under a resolved configuration, sampling every attribute independently
//! and uniformly from the injected catalog.

use chrono::{SecondsFormat, TimeZone, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;
use std::fmt;
use tracing::debug;

use crate::catalog::Catalog;
use crate::employee::record::{Employee, MILLIS_PER_YEAR};
use crate::types::{Gender, ResolvedConfig};

/// Generator for synthesizing employee populations
///
/// Randomness is an injected capability: the generator owns a boxed RNG so
/// callers can seed it for reproducible attribute streams or substitute a
/// deterministic source in tests.
pub struct EmployeeGenerator {
    rng: Box<dyn rand::RngCore>,
}

impl fmt::Debug for EmployeeGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmployeeGenerator").finish()
    }
}

impl EmployeeGenerator {
    /// Create a new employee generator
    pub fn new() -> Self {
        Self { rng: Box::new(rand::thread_rng()) }
    }

    /// Create a new employee generator with a specific seed for reproducible results
    pub fn with_seed(seed: u64) -> Self {
        use rand::SeedableRng;
        Self { rng: Box::new(rand::rngs::StdRng::seed_from_u64(seed)) }
    }

    /// Create a new employee generator with an externally supplied RNG
    pub fn with_rng(rng: Box<dyn rand::RngCore>) -> Self {
        Self { rng }
    }

    /// Generate a population under the resolved configuration
    ///
    /// Produces exactly `employee_count` records with independently sampled
    /// gender, name, surname, workload, and a birthdate inside the age
    /// window, then applies the surname-coverage adjustment.
    pub fn generate(&mut self, config: &ResolvedConfig, catalog: &Catalog) -> Vec<Employee> {
        let mut employees = Vec::with_capacity(config.employee_count);
        if config.employee_count == 0 {
            return employees;
        }

        let now_ms = Utc::now().timestamp_millis();
        let (earliest_ms, latest_ms) = birthdate_bounds(now_ms, config.min_age, config.max_age);

        for _ in 0..config.employee_count {
            employees.push(self.generate_employee(earliest_ms, latest_ms, catalog));
        }

        self.ensure_surname_coverage(&mut employees, catalog);

        debug!(
            employee_count = employees.len(),
            min_age = config.min_age,
            max_age = config.max_age,
            "generated employee population"
        );

        employees
    }

    /// Generate one employee with a birthdate in the given bounds
    fn generate_employee(
        &mut self,
        earliest_ms: i64,
        latest_ms: i64,
        catalog: &Catalog,
    ) -> Employee {
        // Empty catalog lists degrade to blank attributes rather than failing.
        let gender = catalog
            .genders
            .choose(&mut *self.rng)
            .copied()
            .unwrap_or(Gender::Male);
        let name = catalog
            .names_for(gender)
            .choose(&mut *self.rng)
            .cloned()
            .unwrap_or_default();
        let surname = catalog
            .surnames
            .choose(&mut *self.rng)
            .cloned()
            .unwrap_or_default();
        let workload = catalog
            .workloads
            .choose(&mut *self.rng)
            .copied()
            .unwrap_or(0);

        let birth_ms = self.rng.gen_range(earliest_ms..=latest_ms);

        Employee::new(name, surname, gender, format_birth_instant(birth_ms), workload)
    }

    /// Rewrite surnames so every catalog surname appears at least once
    ///
    /// Only attempted when the population is at least as large as the
    /// surname catalog. Missing surnames are taken in catalog order and
    /// written over employees in generation order, one employee per
    /// missing surname. Exposed for targeted testing.
    pub fn ensure_surname_coverage(&self, employees: &mut [Employee], catalog: &Catalog) {
        if catalog.surname_count() == 0 || employees.len() < catalog.surname_count() {
            return;
        }

        let missing: Vec<String> = {
            let used: HashSet<&str> =
                employees.iter().map(|employee| employee.surname.as_str()).collect();
            catalog
                .surnames
                .iter()
                .filter(|surname| !used.contains(surname.as_str()))
                .cloned()
                .collect()
        };

        if missing.is_empty() {
            return;
        }

        debug!(missing = missing.len(), "rewriting surnames for catalog coverage");
        for (employee, surname) in employees.iter_mut().zip(missing) {
            employee.surname = surname;
        }
    }
}

impl Default for EmployeeGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Inclusive millisecond bounds for birth instants inside the age window
///
/// The minimum age is inclusive and the maximum exclusive, so the exclusive
/// edge sits at least one year above the inclusive one: a degenerate window
/// with `min_age == max_age` still spans a full year of birth instants
/// minus one millisecond.
fn birthdate_bounds(now_ms: i64, min_age: u32, max_age: u32) -> (i64, i64) {
    let upper_age = i64::from(max_age).max(i64::from(min_age) + 1);
    let earliest = now_ms - upper_age.saturating_mul(MILLIS_PER_YEAR) + 1;
    let latest = now_ms - i64::from(min_age).saturating_mul(MILLIS_PER_YEAR);
    (earliest, latest)
}

/// Format a millisecond timestamp as an ISO-8601 instant string
fn format_birth_instant(birth_ms: i64) -> String {
    match Utc.timestamp_millis_opt(birth_ms).single() {
        Some(instant) => instant.to_rfc3339_opts(SecondsFormat::Millis, true),
        None => String::new(),
    }
}
