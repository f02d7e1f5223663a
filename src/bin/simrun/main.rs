// Simulation Runner — seeded Monte Carlo over the demo baseline.
//
// Usage:
//   cargo run --release --bin simrun -- peak-season
//   cargo run --release --bin simrun -- peak-season --iterations 200
//   cargo run --release --bin simrun -- --list
//   cargo run --release --bin simrun -- baseline --seed 42 --out results.json

mod fixtures;

use std::time::Instant;

use tracing_subscriber::EnvFilter;
use twin_engine::{run_simulation, SimError, SimulationConfig, SimulationResult};

struct CliArgs {
    scenario_id: Option<String>,
    iterations: u32,
    horizon_days: u32,
    seed: u64,
    out: Option<String>,
    list: bool,
}

fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut cli = CliArgs {
        scenario_id: None,
        iterations: 1000,
        horizon_days: 90,
        seed: 0,
        out: None,
        list: false,
    };

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--iterations" => {
                i += 1;
                if i < args.len() {
                    cli.iterations = args[i].parse().unwrap_or(1000);
                }
            }
            "--horizon-days" => {
                i += 1;
                if i < args.len() {
                    cli.horizon_days = args[i].parse().unwrap_or(90);
                }
            }
            "--seed" => {
                i += 1;
                if i < args.len() {
                    cli.seed = args[i].parse().unwrap_or(0);
                }
            }
            "--out" => {
                i += 1;
                if i < args.len() {
                    cli.out = Some(args[i].clone());
                }
            }
            "--list" => {
                cli.list = true;
            }
            arg if !arg.starts_with('-') => {
                cli.scenario_id = Some(arg.to_string());
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
            }
        }
        i += 1;
    }

    cli
}

fn print_result(result: &SimulationResult, elapsed_ms: u128) {
    println!("\n  Scenario: {}", result.scenario_id);
    println!("  {}", "-".repeat(46));
    println!("  {:<28} {:>16.2}", "Total cost", result.total_cost);
    println!("  {:<28} {:>16.2}", "Inventory cost (per day)", result.inventory_cost);
    println!("  {:<28} {:>16.2}", "Stockout cost", result.stockout_cost);
    println!("  {:<28} {:>16}", "Stockout events", result.stockout_events);
    println!("  {:<28} {:>15.2}%", "Service level", result.service_level);
    println!("  {:<28} {:>15.2}%", "On-time delivery", result.on_time_delivery);
    println!("  {:<28} {:>16}", "Total orders", result.total_orders);
    println!("  {:<28} {:>16}", "Fulfilled orders", result.fulfilled_orders);
    println!("  {:<28} {:>16.1}", "Avg inventory level", result.average_inventory_level);
    println!("  {}", "-".repeat(46));
    println!("  Completed in {}ms\n", elapsed_ms);
}

fn run(cli: &CliArgs) -> Result<(), SimError> {
    let source = fixtures::demo_source();

    if cli.list {
        println!("Available scenarios:");
        for id in source.scenario_ids() {
            println!("  {id}");
        }
        return Ok(());
    }

    let scenario_id = cli.scenario_id.as_deref().ok_or_else(|| {
        SimError::Configuration("a scenario id is required (try --list)".into())
    })?;

    let config = SimulationConfig {
        iterations: cli.iterations,
        horizon_days: cli.horizon_days,
        seed: cli.seed,
        start_date: fixtures::demo_start_date(),
        ..SimulationConfig::default()
    };

    let start = Instant::now();
    let result = run_simulation(&source, scenario_id, &config)?;
    print_result(&result, start.elapsed().as_millis());

    if let Some(path) = &cli.out {
        let json = serde_json::to_string_pretty(&result)
            .map_err(|e| SimError::Data(format!("failed to serialize result: {e}")))?;
        std::fs::write(path, &json)
            .map_err(|e| SimError::Data(format!("failed to write {path}: {e}")))?;
        println!("  Result saved to: {path}\n");
    }

    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = parse_args();
    if let Err(err) = run(&cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
