//! Roster generation orchestration
//!
//! This module wires the pipeline together: resolve the loosely-typed
//! request, generate the population, aggregate statistics, assemble the
//! report. The pipeline is infallible by design — malformed requests
//! degrade to defaults instead of failing.

use serde_json::Value;
use tracing::{debug, info};
use uuid::Uuid;

use crate::catalog::Catalog;
use crate::employee::EmployeeGenerator;
use crate::roster::report::RosterReport;
use crate::roster::statistics::RosterStatistics;
use crate::types::ResolvedConfig;

/// Orchestrator owning the generator and the catalog
#[derive(Debug)]
pub struct RosterOrchestrator {
    generator: EmployeeGenerator,
    catalog: Catalog,
}

impl RosterOrchestrator {
    /// Create a new orchestrator with a thread-local RNG and default catalog
    pub fn new() -> Self {
        Self { generator: EmployeeGenerator::new(), catalog: Catalog::default() }
    }

    /// Create a new orchestrator with a seeded RNG for reproducible results
    pub fn with_seed(seed: u64) -> Self {
        Self { generator: EmployeeGenerator::with_seed(seed), catalog: Catalog::default() }
    }

    /// Replace the catalog used for generation
    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// The catalog this orchestrator generates from
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Run the full pipeline for one loosely-typed configuration value
    pub fn generate(&mut self, request: &Value) -> RosterReport {
        let run_id = Uuid::new_v4();
        let config = ResolvedConfig::from_value(request);
        info!(%run_id, %config, "starting roster generation");

        let employees = self.generator.generate(&config, &self.catalog);
        let statistics = RosterStatistics::compute(&employees);
        debug!(%run_id, summary = %statistics.summary(), "roster statistics computed");

        info!(%run_id, employee_count = employees.len(), "roster generation complete");
        RosterReport::assemble(employees, statistics)
    }
}

impl Default for RosterOrchestrator {
    fn default() -> Self {
        Self::new()
    }
}

/// Generate a roster report for one configuration value
///
/// Convenience entry point for one-shot callers; embedders holding a
/// catalog or seed use [`RosterOrchestrator`] directly.
pub fn generate_roster(request: &Value) -> RosterReport {
    RosterOrchestrator::new().generate(request)
}
