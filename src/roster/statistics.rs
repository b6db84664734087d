//! Statistics over employee populations
//!
//! This module contains the single-pass aggregation that turns any employee
//! list into the fixed set of descriptive statistics. The computation is a
//! pure function of the list contents and the evaluation instant; it never
//! fails, and degenerate inputs (an empty population, unparseable
//! birthdates, unknown workload values) degrade to zero defaults.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::employee::Employee;
use crate::types::Gender;

/// Single-pass aggregation state, built and discarded per statistics call
#[derive(Debug, Default)]
struct AggregationContext {
    workload10_count: usize,
    workload20_count: usize,
    workload30_count: usize,
    workload40_count: usize,
    ages: Vec<f64>,
    workloads: Vec<u32>,
    female_workload_sum: u64,
    female_count: usize,
}

impl AggregationContext {
    fn observe(&mut self, employee: &Employee, now: DateTime<Utc>) {
        // Only the four known workload values are tracked per-value;
        // anything else still participates in the list, median, and sort.
        match employee.workload {
            10 => self.workload10_count += 1,
            20 => self.workload20_count += 1,
            30 => self.workload30_count += 1,
            40 => self.workload40_count += 1,
            _ => {}
        }

        self.ages.push(employee.decimal_age_at(now));
        self.workloads.push(employee.workload);

        if employee.gender == Gender::Female {
            self.female_workload_sum += u64::from(employee.workload);
            self.female_count += 1;
        }
    }
}

/// Descriptive statistics computed over one employee population
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterStatistics {
    /// Total number of employees in the population
    pub employee_count: usize,
    /// Number of employees with a 10% workload
    pub workload10_count: usize,
    /// Number of employees with a 20% workload
    pub workload20_count: usize,
    /// Number of employees with a 30% workload
    pub workload30_count: usize,
    /// Number of employees with a 40% workload
    pub workload40_count: usize,
    /// Mean decimal age, rounded to one decimal place
    pub average_age: f64,
    /// Floor of the lowest decimal age
    pub min_age: i64,
    /// Floor of the highest decimal age
    pub max_age: i64,
    /// Median of the decimal ages, floored after the midpoint average
    pub median_age: i64,
    /// Median workload, rounded to the nearest integer
    pub median_workload: i64,
    /// Average workload among female employees, rounded to one decimal place
    pub average_female_workload: f64,
    /// Copy of the population sorted ascending by workload (stable)
    pub sorted_by_workload: Vec<Employee>,
}

impl RosterStatistics {
    /// Compute statistics over a population as of the current instant
    pub fn compute(employees: &[Employee]) -> Self {
        Self::compute_at(employees, Utc::now())
    }

    /// Compute statistics over a population as of an explicit instant
    ///
    /// Ages depend on the evaluation instant, so results are only stable
    /// across calls when computed against the same `now`.
    pub fn compute_at(employees: &[Employee], now: DateTime<Utc>) -> Self {
        let mut context = AggregationContext::default();
        for employee in employees {
            context.observe(employee, now);
        }

        let average_age = if context.ages.is_empty() {
            0.0
        } else {
            round_one_decimal(
                context.ages.iter().sum::<f64>() / context.ages.len() as f64,
            )
        };

        let mut ages = context.ages;
        ages.sort_by(|a, b| a.total_cmp(b));

        // min/max floor each decimal age individually; the median floors
        // only after averaging the two middle values. The order of
        // operations differs and both are part of the contract.
        let min_age = ages.first().map(|age| age.floor() as i64).unwrap_or(0);
        let max_age = ages.last().map(|age| age.floor() as i64).unwrap_or(0);
        let median_age = median(&ages).floor() as i64;

        let mut workloads: Vec<f64> =
            context.workloads.iter().map(|&workload| f64::from(workload)).collect();
        workloads.sort_by(|a, b| a.total_cmp(b));
        let median_workload = median(&workloads).round() as i64;

        let average_female_workload = if context.female_count == 0 {
            0.0
        } else {
            round_one_decimal(
                context.female_workload_sum as f64 / context.female_count as f64,
            )
        };

        let mut sorted_by_workload = employees.to_vec();
        sorted_by_workload.sort_by_key(|employee| employee.workload);

        Self {
            employee_count: employees.len(),
            workload10_count: context.workload10_count,
            workload20_count: context.workload20_count,
            workload30_count: context.workload30_count,
            workload40_count: context.workload40_count,
            average_age,
            min_age,
            max_age,
            median_age,
            median_workload,
            average_female_workload,
            sorted_by_workload,
        }
    }

    /// Generate a compact one-line summary suitable for logging
    pub fn summary(&self) -> String {
        format!(
            "Roster: {} employees | workloads 10/20/30/40: {}/{}/{}/{} | ages {}-{} (avg {:.1}, median {}) | median workload {} | female avg workload {:.1}",
            self.employee_count,
            self.workload10_count,
            self.workload20_count,
            self.workload30_count,
            self.workload40_count,
            self.min_age,
            self.max_age,
            self.average_age,
            self.median_age,
            self.median_workload,
            self.average_female_workload
        )
    }
}

impl fmt::Display for RosterStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Roster Statistics:")?;
        writeln!(f, "  Employees: {}", self.employee_count)?;
        writeln!(
            f,
            "  Workload Counts: 10% -> {}, 20% -> {}, 30% -> {}, 40% -> {}",
            self.workload10_count,
            self.workload20_count,
            self.workload30_count,
            self.workload40_count
        )?;
        writeln!(
            f,
            "  Age: avg {:.1}, min {}, max {}, median {}",
            self.average_age, self.min_age, self.max_age, self.median_age
        )?;
        writeln!(f, "  Median Workload: {}", self.median_workload)?;
        write!(f, "  Average Female Workload: {:.1}", self.average_female_workload)
    }
}

/// Median of an ascending-sorted slice
///
/// Odd lengths take the single middle element; even lengths take the
/// arithmetic mean of the two central elements. Empty slices yield 0.
fn median(sorted: &[f64]) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        sorted[mid]
    } else {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    }
}

/// Round to one decimal place, halves away from zero
fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
