// Employee Roster Simulator - Main Entry Point
//
// You can run it via Cargo:
//
// ```console
// $ cargo build --release
// $ ./target/release/employee-roster-simulator --employee-count 25
// ```
//
// Or with custom configuration:
//
// ```console
// $ ./target/release/employee-roster-simulator --config roster.json --seed 42 --pretty
// ```

use clap::Parser;
use employee_roster_simulator::roster::{
    population_csv, LoggingConfig, RosterError, RosterOrchestrator, RosterReport, RosterResult,
};
use employee_roster_simulator::types::{config_template, CliArgs, OutputFormat, ResolvedConfig};
use std::process;
use tracing::{error, info};

fn main() {
    // Parse CLI arguments first to check for special flags
    let args = CliArgs::parse();

    // Handle special CLI flags that don't require full initialization
    if args.print_config {
        match serde_json::to_string_pretty(&config_template()) {
            Ok(json) => {
                println!("{}", json);
                return;
            }
            Err(e) => {
                eprintln!("Failed to serialize configuration template: {}", e);
                process::exit(1);
            }
        }
    }

    // Initialize logging based on CLI flags
    let logging_result = if args.debug {
        LoggingConfig::init_debug()
    } else if args.verbose {
        LoggingConfig::init_verbose()
    } else {
        // Default: minimal logging for normal users
        LoggingConfig::new().with_level(tracing::Level::WARN).init()
    };

    if let Err(e) = logging_result {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("Starting Employee Roster Simulator");

    // The output format is the one CLI value that can actually be invalid
    let output_format = match args.resolved_output_format() {
        Ok(format) => format,
        Err(e) => {
            error!("Invalid output format: {}", e);
            eprintln!("Invalid output format: {}", e);
            process::exit(1);
        }
    };

    // Build the request value from the optional config file plus overrides
    let request = match args.to_request() {
        Ok(request) => request,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            eprintln!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    // Resolution never fails; malformed requests degrade to defaults
    let config = ResolvedConfig::from_value(&request);
    info!("Configuration resolved: {}", config);

    // Handle dry run mode
    if args.dry_run {
        eprintln!("Configuration resolved successfully!");
        eprintln!("Dry run mode - no roster will be generated.");
        print_configuration_summary(&config, args.seed);
        return;
    }

    print_startup_banner(&config, args.seed);

    // Generate the roster
    let mut orchestrator = match args.seed {
        Some(seed) => RosterOrchestrator::with_seed(seed),
        None => RosterOrchestrator::new(),
    };
    let report = orchestrator.generate(&request);

    // Write the result
    if let Err(e) = write_report(&report, output_format, args.pretty, args.output.as_deref()) {
        error!("Failed to write roster output: {}", e);
        eprintln!("Failed to write roster output: {}", e);
        process::exit(1);
    }

    print_roster_summary(&report);
    info!("Employee Roster Simulator completed successfully");
}

/// Render the report in the requested format and write it out
fn write_report(
    report: &RosterReport,
    format: OutputFormat,
    pretty: bool,
    output: Option<&str>,
) -> RosterResult<()> {
    let rendered = match format {
        OutputFormat::Json => {
            if pretty {
                serde_json::to_string_pretty(report)?
            } else {
                serde_json::to_string(report)?
            }
        }
        OutputFormat::Csv => population_csv(&report.employees),
    };

    match output {
        Some(path) => {
            use std::fs::File;
            use std::io::{BufWriter, Write};

            let file = File::create(path).map_err(|e| {
                RosterError::output_error(format!(
                    "Failed to create output file '{}': {}",
                    path, e
                ))
            })?;
            let mut writer = BufWriter::new(file);
            writer.write_all(rendered.as_bytes())?;
            if !rendered.ends_with('\n') {
                writeln!(writer)?;
            }
            writer.flush()?;

            info!("Roster written to: {}", path);
            eprintln!("Roster written to: {}", path);
        }
        None => {
            if rendered.ends_with('\n') {
                print!("{}", rendered);
            } else {
                println!("{}", rendered);
            }
        }
    }

    Ok(())
}

/// Print startup banner and configuration summary
fn print_startup_banner(config: &ResolvedConfig, seed: Option<u64>) {
    eprintln!("Employee Roster Simulator");
    eprintln!("=========================");
    eprintln!("Synthetic employee population generator with workforce statistics");
    eprintln!();

    print_configuration_summary(config, seed);
}

/// Print the resolved configuration
fn print_configuration_summary(config: &ResolvedConfig, seed: Option<u64>) {
    eprintln!("Configuration:");
    eprintln!("  Employee Count: {}", config.employee_count);
    eprintln!("  Age Window: [{}, {})", config.min_age, config.max_age);
    if let Some(seed) = seed {
        eprintln!("  Random Seed: {}", seed);
    }
    eprintln!();
}

/// Print the generated roster's statistics to stderr
fn print_roster_summary(report: &RosterReport) {
    eprintln!();
    eprintln!("Roster Summary:");
    eprintln!("  Employees Generated: {}", report.total);
    eprintln!(
        "  Workload Counts: 10% -> {}, 20% -> {}, 30% -> {}, 40% -> {}",
        report.workload10, report.workload20, report.workload30, report.workload40
    );
    eprintln!(
        "  Age: avg {:.1}, min {}, max {}, median {}",
        report.average_age, report.min_age, report.max_age, report.median_age
    );
    eprintln!("  Median Workload: {}", report.median_workload);
    eprintln!("  Average Female Workload: {:.1}", report.average_woman_workload);
}
