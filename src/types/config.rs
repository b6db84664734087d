//! Configuration structures for the employee roster simulator
//!
//! This module contains the command line argument definitions and the
//! configuration resolver that turns an arbitrary, loosely-structured JSON
//! value into concrete generation parameters.
//!
//! Resolution is best-effort by design: no input shape is ever rejected.
//! Malformed or missing values coerce to an employee count of zero and the
//! default age window rather than producing an error.

use super::OutputFormat;
use clap::Parser;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::fs;
use tracing::debug;

use crate::roster::error::{RosterError, RosterResult};

/// Default minimum age (inclusive) when the input carries no usable minimum
pub const DEFAULT_MIN_AGE: u32 = 18;

/// Default maximum age (exclusive) when the input carries no usable maximum
pub const DEFAULT_MAX_AGE: u32 = 65;

/// Accepted employee-count keys, scanned in priority order
const COUNT_KEYS: &[&str] = &["employeeCount", "personCount", "count"];

/// Accepted age-window box keys, scanned in priority order
const RANGE_BOX_KEYS: &[&str] = &["ageRange", "age", "range"];

/// Accepted minimum-age keys, scanned in priority order
const MIN_AGE_KEYS: &[&str] =
    &["min", "minAge", "ageMin", "from", "ageFrom", "fromAge", "lowerAge"];

/// Accepted maximum-age keys, scanned in priority order
const MAX_AGE_KEYS: &[&str] =
    &["max", "maxAge", "ageMax", "to", "ageTo", "toAge", "upperAge"];

/// Concrete generation parameters resolved from a loosely-typed input value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedConfig {
    /// Number of employees to generate
    pub employee_count: usize,
    /// Minimum age in whole years, inclusive
    pub min_age: u32,
    /// Maximum age in whole years, exclusive
    pub max_age: u32,
}

impl ResolvedConfig {
    /// Resolve generation parameters from an arbitrary configuration value
    ///
    /// Accepted shapes: absent/null (zero employees, default window), a bare
    /// non-negative integer (that many employees, default window), or an
    /// object carrying an optional count field and an optional age window,
    /// nested or inline. Anything else degrades to the defaults.
    pub fn from_value(input: &Value) -> Self {
        let employee_count = resolve_count(input);
        let (min_age, max_age) = resolve_age_window(input);

        debug!(
            employee_count,
            min_age, max_age, "resolved generation configuration"
        );

        Self { employee_count, min_age, max_age }
    }
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self { employee_count: 0, min_age: DEFAULT_MIN_AGE, max_age: DEFAULT_MAX_AGE }
    }
}

impl fmt::Display for ResolvedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} employees, ages [{}, {})",
            self.employee_count, self.min_age, self.max_age
        )
    }
}

/// Resolve the employee count from the input value
///
/// A bare non-negative integer is used directly; otherwise the count keys
/// are scanned in priority order and the first non-negative integer wins.
fn resolve_count(input: &Value) -> usize {
    if let Some(count) = input.as_u64() {
        return count as usize;
    }

    if let Some(object) = input.as_object() {
        for key in COUNT_KEYS {
            if let Some(count) = object.get(*key).and_then(Value::as_u64) {
                return count as usize;
            }
        }
    }

    0
}

/// Resolve the age window from the input value
///
/// The window box is the first nested object found under the box keys, or
/// the input itself. A found minimum must be non-negative; a found maximum
/// must not undercut the resolved minimum. Rejected overrides fall back to
/// the defaults, and the window is clamped so that `max_age >= min_age`.
fn resolve_age_window(input: &Value) -> (u32, u32) {
    let range_box = RANGE_BOX_KEYS
        .iter()
        .filter_map(|key| input.get(*key))
        .find(|value| value.is_object())
        .unwrap_or(input);

    let mut min_age = DEFAULT_MIN_AGE;
    if let Some(found) = first_integer(range_box, MIN_AGE_KEYS) {
        if let Ok(minimum) = u32::try_from(found) {
            min_age = minimum;
        }
    }

    let mut max_age = DEFAULT_MAX_AGE;
    if let Some(found) = first_integer(range_box, MAX_AGE_KEYS) {
        if found >= i64::from(min_age) {
            if let Ok(maximum) = u32::try_from(found) {
                max_age = maximum;
            }
        }
    }

    // A rejected maximum override can leave the default below an accepted
    // minimum; the window is clamped rather than rejected.
    if max_age < min_age {
        max_age = min_age;
    }

    (min_age, max_age)
}

/// Scan the keys in priority order and return the first integer value found
fn first_integer(range_box: &Value, keys: &[&str]) -> Option<i64> {
    let object = range_box.as_object()?;
    keys.iter().find_map(|key| object.get(*key).and_then(Value::as_i64))
}

/// A configuration template for `--print-config`
pub fn config_template() -> Value {
    serde_json::json!({
        "employeeCount": 10,
        "ageRange": {
            "min": DEFAULT_MIN_AGE,
            "max": DEFAULT_MAX_AGE,
        }
    })
}

/// Command line arguments structure
#[derive(Debug, Clone, Parser)]
#[command(
    name = "employee-roster-simulator",
    version = "0.1.0",
    about = "Employee Roster Simulator - Generates synthetic employee populations with statistics",
    long_about = "Generates a synthetic population of employee records from a loosely-typed JSON configuration and computes descriptive statistics (per-workload counts, age distribution, gender-conditioned averages) over the result.

EXAMPLES:
    # Generate an empty roster with default settings
    employee-roster-simulator

    # Use a configuration file
    employee-roster-simulator --config roster.json

    # Override specific settings
    employee-roster-simulator --employee-count 50 --min-age 25 --max-age 40

    # Generate a configuration template
    employee-roster-simulator --print-config > roster.json

    # Resolve configuration without generating
    employee-roster-simulator --config roster.json --dry-run

    # Reproducible attribute sampling
    employee-roster-simulator --employee-count 100 --seed 42

CONFIGURATION:
    Configuration can be provided via:
    1. Command line arguments (highest priority)
    2. Configuration file (--config flag)
    3. Default values (lowest priority)

    The configuration file may hold any accepted shape: a bare employee
    count, or an object with an optional count field (employeeCount,
    personCount, count) and an optional age window (ageRange/age/range,
    min/max and their aliases). Malformed values coerce to defaults."
)]
pub struct CliArgs {
    /// Configuration file path (JSON format)
    #[arg(
        short,
        long,
        help = "Configuration file path (JSON format)",
        long_help = "Path to a JSON configuration file. CLI arguments will override file settings."
    )]
    pub config: Option<String>,

    /// Number of employees to generate
    #[arg(
        long,
        help = "Number of employees to generate",
        long_help = "Total number of employee records to generate. Overrides any count found in the configuration file. Default: 0"
    )]
    pub employee_count: Option<u64>,

    /// Minimum age (inclusive) for generated employees
    #[arg(long, help = "Minimum age in whole years, inclusive")]
    pub min_age: Option<i64>,

    /// Maximum age (exclusive) for generated employees
    #[arg(long, help = "Maximum age in whole years, exclusive")]
    pub max_age: Option<i64>,

    /// Random seed for reproducible results
    #[arg(long, help = "Random seed for reproducible results")]
    pub seed: Option<u64>,

    /// Output file path
    #[arg(short, long, help = "Output file path (defaults to stdout)")]
    pub output: Option<String>,

    /// Output format for the generated roster
    #[arg(
        long,
        help = "Output format (json or csv)",
        long_help = "Output format for the generated roster. JSON carries the full report; CSV carries the population only. Default: json"
    )]
    pub output_format: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, help = "Pretty-print JSON output")]
    pub pretty: bool,

    /// Enable verbose logging
    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, help = "Enable debug logging")]
    pub debug: bool,

    /// Dry run mode - resolve configuration without generating a roster
    #[arg(long, help = "Resolve configuration without generating a roster")]
    pub dry_run: bool,

    /// Print a configuration template and exit
    #[arg(long, help = "Print a configuration template in JSON format and exit")]
    pub print_config: bool,
}

impl CliArgs {
    /// Build the loosely-typed request value handed to the resolver
    ///
    /// Starts from the configuration file contents when `--config` is
    /// given, otherwise from null, then layers the CLI overrides on top.
    /// A non-object base is replaced by an object when overrides are
    /// present, since overrides can only live in object fields.
    pub fn to_request(&self) -> RosterResult<Value> {
        let request = match &self.config {
            Some(path) => load_config_file(path)?,
            None => Value::Null,
        };

        let has_overrides =
            self.employee_count.is_some() || self.min_age.is_some() || self.max_age.is_some();
        if !has_overrides {
            return Ok(request);
        }

        let mut object = match request {
            Value::Object(object) => object,
            _ => Map::new(),
        };

        if let Some(count) = self.employee_count {
            object.insert("employeeCount".to_string(), Value::from(count));
        }

        if self.min_age.is_some() || self.max_age.is_some() {
            let range = object
                .entry("ageRange")
                .or_insert_with(|| Value::Object(Map::new()));
            if !range.is_object() {
                *range = Value::Object(Map::new());
            }
            if let Some(range_object) = range.as_object_mut() {
                if let Some(minimum) = self.min_age {
                    range_object.insert("min".to_string(), Value::from(minimum));
                }
                if let Some(maximum) = self.max_age {
                    range_object.insert("max".to_string(), Value::from(maximum));
                }
            }
        }

        Ok(Value::Object(object))
    }

    /// Resolve the output format, defaulting to JSON
    pub fn resolved_output_format(&self) -> RosterResult<OutputFormat> {
        match &self.output_format {
            Some(format) => {
                format.parse().map_err(|e: String| RosterError::configuration_error(e))
            }
            None => Ok(OutputFormat::Json),
        }
    }
}

/// Load and parse a JSON configuration file
fn load_config_file(path: &str) -> RosterResult<Value> {
    let contents = fs::read_to_string(path).map_err(|e| {
        RosterError::configuration_error(format!(
            "Failed to read configuration file '{}': {}",
            path, e
        ))
    })?;

    serde_json::from_str(&contents).map_err(|e| {
        RosterError::configuration_error(format!(
            "Failed to parse configuration file '{}': {}",
            path, e
        ))
    })
}
