//! Reference data consumed by employee generation
//!
//! This module contains the [`Catalog`]: the fixed name lists, surname list,
//! workload values, and gender domain that the generator samples from. The
//! catalog is an immutable value injected into the generator rather than
//! module-level state, so tests can substitute smaller or deterministic
//! catalogs.

use serde::{Deserialize, Serialize};

use crate::types::Gender;

/// The four allowed workload values, in percent of full-time
pub const WORKLOADS: [u32; 4] = [10, 20, 30, 40];

/// Reference data for employee generation
///
/// Treated as read-only during generation; nothing in the crate mutates a
/// catalog after construction, so one instance may be shared across calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    /// First names drawn for male employees
    pub male_names: Vec<String>,
    /// First names drawn for female employees
    pub female_names: Vec<String>,
    /// Surnames shared by both genders
    pub surnames: Vec<String>,
    /// Allowed workload values
    pub workloads: Vec<u32>,
    /// The gender domain sampled by the generator
    pub genders: Vec<Gender>,
}

impl Catalog {
    /// Create a catalog from explicit reference lists
    pub fn new(
        male_names: Vec<String>,
        female_names: Vec<String>,
        surnames: Vec<String>,
    ) -> Self {
        Self {
            male_names,
            female_names,
            surnames,
            workloads: WORKLOADS.to_vec(),
            genders: vec![Gender::Male, Gender::Female],
        }
    }

    /// First names for the given gender
    pub fn names_for(&self, gender: Gender) -> &[String] {
        match gender {
            Gender::Male => &self.male_names,
            Gender::Female => &self.female_names,
        }
    }

    /// Number of surnames in the catalog
    pub fn surname_count(&self) -> usize {
        self.surnames.len()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(
            vec![
                "James", "John", "Robert", "Michael", "David", "William", "Richard",
                "Joseph", "Thomas", "Charles", "Daniel", "Matthew",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            vec![
                "Mary", "Patricia", "Jennifer", "Linda", "Elizabeth", "Barbara",
                "Susan", "Jessica", "Sarah", "Karen", "Lisa", "Nancy",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            vec![
                "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller",
                "Davis", "Rodriguez", "Martinez", "Wilson", "Anderson", "Taylor",
                "Moore", "Jackson",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        )
    }
}
