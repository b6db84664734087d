//! Result assembly
//!
//! This module shapes the generated population and its statistics into the
//! externally visible result. The shape carries deliberate duplication:
//! several downstream consumers address the same computed values under
//! different names, so the female-average-workload value appears under six
//! aliases, the workload-sorted population under three, and the nested
//! `statistics` section repeats the flattened fields plus the population
//! itself. All of it is presentation; every value originates in
//! [`RosterStatistics`].

use serde::Serialize;

use crate::employee::Employee;
use crate::roster::statistics::RosterStatistics;

/// Statistics section nested inside the report
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsSection {
    /// Total number of employees
    pub employee_count: usize,
    /// Number of employees with a 10% workload
    pub workload10: usize,
    /// Number of employees with a 20% workload
    pub workload20: usize,
    /// Number of employees with a 30% workload
    pub workload30: usize,
    /// Number of employees with a 40% workload
    pub workload40: usize,
    /// Mean decimal age, one decimal place
    pub average_age: f64,
    /// Floor of the lowest decimal age
    pub min_age: i64,
    /// Floor of the highest decimal age
    pub max_age: i64,
    /// Median age, floored after the midpoint average
    pub median_age: i64,
    /// Median workload, rounded to the nearest integer
    pub median_workload: i64,
    /// Average workload among female employees
    pub average_woman_workload: f64,
    /// Alias of `averageWomanWorkload`
    pub average_women_workload: f64,
    /// Alias of `averageWomanWorkload`
    pub average_female_workload: f64,
    /// Alias of `averageWomanWorkload`
    pub female_average_workload: f64,
    /// Alias of `averageWomanWorkload`
    pub woman_average_workload: f64,
    /// Alias of `averageWomanWorkload`
    pub average_workload_of_women: f64,
    /// Population sorted ascending by workload
    pub sorted_by_workload: Vec<Employee>,
    /// Alias of `sortedByWorkload`
    pub employees_sorted_by_workload: Vec<Employee>,
    /// Alias of `sortedByWorkload`
    pub sorted_employees: Vec<Employee>,
    /// The full population, repeated for consumers reading it from here
    pub employee_list: Vec<Employee>,
}

/// The externally visible roster result
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterReport {
    /// The generated population
    pub employees: Vec<Employee>,
    /// Employee count duplicate kept for legacy consumers
    pub total: usize,
    /// Total number of employees
    pub employee_count: usize,
    /// Number of employees with a 10% workload
    pub workload10: usize,
    /// Number of employees with a 20% workload
    pub workload20: usize,
    /// Number of employees with a 30% workload
    pub workload30: usize,
    /// Number of employees with a 40% workload
    pub workload40: usize,
    /// Mean decimal age, one decimal place
    pub average_age: f64,
    /// Floor of the lowest decimal age
    pub min_age: i64,
    /// Floor of the highest decimal age
    pub max_age: i64,
    /// Median age, floored after the midpoint average
    pub median_age: i64,
    /// Median workload, rounded to the nearest integer
    pub median_workload: i64,
    /// Average workload among female employees
    pub average_woman_workload: f64,
    /// Alias of `averageWomanWorkload`
    pub average_women_workload: f64,
    /// Alias of `averageWomanWorkload`
    pub average_female_workload: f64,
    /// Alias of `averageWomanWorkload`
    pub female_average_workload: f64,
    /// Alias of `averageWomanWorkload`
    pub woman_average_workload: f64,
    /// Alias of `averageWomanWorkload`
    pub average_workload_of_women: f64,
    /// Population sorted ascending by workload
    pub sorted_by_workload: Vec<Employee>,
    /// Alias of `sortedByWorkload`
    pub employees_sorted_by_workload: Vec<Employee>,
    /// Alias of `sortedByWorkload`
    pub sorted_employees: Vec<Employee>,
    /// Nested statistics section repeating the flattened fields
    pub statistics: StatisticsSection,
}

impl RosterReport {
    /// Combine a population and its statistics into the result shape
    pub fn assemble(employees: Vec<Employee>, statistics: RosterStatistics) -> Self {
        let female_workload = statistics.average_female_workload;
        let sorted = statistics.sorted_by_workload;

        let section = StatisticsSection {
            employee_count: statistics.employee_count,
            workload10: statistics.workload10_count,
            workload20: statistics.workload20_count,
            workload30: statistics.workload30_count,
            workload40: statistics.workload40_count,
            average_age: statistics.average_age,
            min_age: statistics.min_age,
            max_age: statistics.max_age,
            median_age: statistics.median_age,
            median_workload: statistics.median_workload,
            average_woman_workload: female_workload,
            average_women_workload: female_workload,
            average_female_workload: female_workload,
            female_average_workload: female_workload,
            woman_average_workload: female_workload,
            average_workload_of_women: female_workload,
            sorted_by_workload: sorted.clone(),
            employees_sorted_by_workload: sorted.clone(),
            sorted_employees: sorted.clone(),
            employee_list: employees.clone(),
        };

        Self {
            total: employees.len(),
            employee_count: statistics.employee_count,
            workload10: statistics.workload10_count,
            workload20: statistics.workload20_count,
            workload30: statistics.workload30_count,
            workload40: statistics.workload40_count,
            average_age: statistics.average_age,
            min_age: statistics.min_age,
            max_age: statistics.max_age,
            median_age: statistics.median_age,
            median_workload: statistics.median_workload,
            average_woman_workload: female_workload,
            average_women_workload: female_workload,
            average_female_workload: female_workload,
            female_average_workload: female_workload,
            woman_average_workload: female_workload,
            average_workload_of_women: female_workload,
            sorted_by_workload: sorted.clone(),
            employees_sorted_by_workload: sorted.clone(),
            sorted_employees: sorted,
            statistics: section,
            employees,
        }
    }
}

/// Render the population as CSV (header plus one line per employee)
pub fn population_csv(employees: &[Employee]) -> String {
    let mut output = String::from("name,surname,gender,birthdate,workload\n");
    for employee in employees {
        output.push_str(&format!(
            "{},{},{},{},{}\n",
            employee.name,
            employee.surname,
            employee.gender,
            employee.birthdate,
            employee.workload
        ));
    }
    output
}
