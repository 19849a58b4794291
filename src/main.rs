//! HVAC simulator entry point — CLI wiring and config-driven runs.

use std::path::Path;
use std::process;

use hvac_sim::config::ScenarioConfig;
use hvac_sim::io::export::export_csv;
use hvac_sim::sim::clock::Clock;
use hvac_sim::sim::engine::Engine;
use hvac_sim::sim::report::RuntimeReport;
use hvac_sim::sim::types::StepRecord;

/// Parsed CLI arguments.
struct CliArgs {
    scenario_path: Option<String>,
    preset: Option<String>,
    duration_override: Option<u64>,
    telemetry_out: Option<String>,
}

fn print_help() {
    eprintln!("hvac-sim — Three-room studio HVAC controller simulator");
    eprintln!();
    eprintln!("Usage: hvac-sim [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --scenario <path>        Load scenario from TOML config file");
    eprintln!("  --preset <name>          Use a built-in preset (baseline, heat_wave, purge_drill)");
    eprintln!("  --duration <secs>        Override simulated duration in seconds");
    eprintln!("  --telemetry-out <path>   Export step records to CSV");
    eprintln!("  --help                   Show this help message");
    eprintln!();
    eprintln!("If no --scenario or --preset is given, the baseline preset is used.");
}

fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().collect();
    let mut cli = CliArgs {
        scenario_path: None,
        preset: None,
        duration_override: None,
        telemetry_out: None,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                process::exit(0);
            }
            "--scenario" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --scenario requires a path argument");
                    process::exit(1);
                }
                cli.scenario_path = Some(args[i].clone());
            }
            "--preset" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --preset requires a name argument");
                    process::exit(1);
                }
                cli.preset = Some(args[i].clone());
            }
            "--duration" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --duration requires a seconds argument");
                    process::exit(1);
                }
                if let Ok(d) = args[i].parse::<u64>() {
                    cli.duration_override = Some(d);
                } else {
                    eprintln!("error: --duration value \"{}\" is not a valid u64", args[i]);
                    process::exit(1);
                }
            }
            "--telemetry-out" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --telemetry-out requires a path argument");
                    process::exit(1);
                }
                cli.telemetry_out = Some(args[i].clone());
            }
            other => {
                eprintln!("error: unknown argument \"{other}\"");
                print_help();
                process::exit(1);
            }
        }
        i += 1;
    }

    cli
}

/// Runs the scenario to completion and returns every step record.
fn run_scenario(scenario: &ScenarioConfig) -> Vec<StepRecord> {
    let duration = scenario.simulation.duration_s;
    let log_every = scenario.simulation.log_every_s;

    let mut engine = Engine::new(scenario.initial_state());
    let mut records = Vec::with_capacity(duration as usize);
    let mut clock = Clock::new(duration);

    clock.run(|t| {
        let record = engine.step();
        if log_every > 0 && t % log_every == 0 {
            println!("{record}");
        }
        records.push(record);
    });

    records
}

fn main() {
    let cli = parse_args();

    // Load config: --scenario takes priority, then --preset, then baseline default
    let mut scenario = if let Some(ref path) = cli.scenario_path {
        match ScenarioConfig::from_toml_file(Path::new(path)) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        }
    } else if let Some(ref name) = cli.preset {
        match ScenarioConfig::from_preset(name) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        }
    } else {
        ScenarioConfig::baseline()
    };

    // Apply duration override
    if let Some(duration) = cli.duration_override {
        scenario.simulation.duration_s = duration;
    }

    // Validate
    let errors = scenario.validate();
    if !errors.is_empty() {
        for e in &errors {
            eprintln!("{e}");
        }
        process::exit(1);
    }

    // Run
    let records = run_scenario(&scenario);

    // Print runtime report
    println!("\n{}", RuntimeReport::from_records(&records));

    // Export CSV if requested
    if let Some(ref path) = cli.telemetry_out {
        if let Err(e) = export_csv(&records, Path::new(path)) {
            eprintln!("error: failed to write CSV: {e}");
            process::exit(1);
        }
        eprintln!("Telemetry written to {path}");
    }
}
