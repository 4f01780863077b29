//! Command-line frontend for the quality degradation simulator
//!
//! This is the rendering collaborator: it gathers the three user
//! parameters, drives the runner one day at a time (optionally paced by a
//! wall-clock interval), prints per-day lines, and finishes with the
//! end-of-run summary and a sampled-day distribution table. All simulation
//! logic lives in the engine crate.

use clap::Parser;
use quality_simulator_core_rs::{
    DailySnapshot, Phase, QualityState, RunnerConfig, SimulationRunner,
};
use std::process::ExitCode;
use std::thread;
use std::time::Duration;

#[derive(Debug, Parser)]
#[command(
    name = "quality-sim",
    version,
    about = "Markov-chain simulation of product quality degradation and cost accrual"
)]
struct Cli {
    /// Simulation horizon in days
    #[arg(long)]
    days: usize,

    /// Number of products in the batch
    #[arg(long)]
    products: usize,

    /// Total batch price
    #[arg(long)]
    price: f64,

    /// RNG seed; omit for a different run each time
    #[arg(long)]
    seed: Option<u64>,

    /// Pause between day lines in milliseconds (0 = run eagerly)
    #[arg(long, default_value_t = 0)]
    interval_ms: u64,

    /// Evenly spaced days in the end-of-run comparison table
    #[arg(long, default_value_t = 5)]
    sampled_days: usize,

    /// Emit JSON lines (snapshots, then the report) instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{message}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), String> {
    let mut config = RunnerConfig::new(cli.days, cli.products, cli.price);
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }

    // Fails before any simulation state exists; the message is the
    // single validation error shown to the user.
    let mut runner = SimulationRunner::new(config).map_err(|e| e.to_string())?;

    while let Some(snapshot) = runner.step() {
        if cli.json {
            println!(
                "{}",
                serde_json::to_string(&snapshot).map_err(|e| e.to_string())?
            );
        } else {
            print_day_line(&snapshot);
        }
        if cli.interval_ms > 0 && runner.phase() != Phase::Completed {
            thread::sleep(Duration::from_millis(cli.interval_ms));
        }
    }

    if cli.json {
        println!(
            "{}",
            serde_json::to_string(&runner.report()).map_err(|e| e.to_string())?
        );
    } else {
        print_summary(&runner, cli.sampled_days);
    }
    Ok(())
}

fn print_day_line(snapshot: &DailySnapshot) {
    let counts = snapshot
        .counts
        .iter()
        .map(|c| format!("{:>5}", c))
        .collect::<Vec<_>>()
        .join(" ");
    println!(
        "day {:>4} | counts [{}] | daily {:>14.2} | total {:>14.2}",
        snapshot.day, counts, snapshot.daily_penalty, snapshot.cumulative_cost
    );
}

fn print_summary(runner: &SimulationRunner, sampled_days: usize) {
    let report = runner.report();

    println!();
    println!("Final summary (run {})", report.run_id);
    println!("  seed: {}", report.seed);
    println!(
        "  days: {} of {}",
        report.days_completed, report.horizon_days
    );
    for (index, state) in QualityState::ALL.iter().enumerate() {
        println!(
            "  {:<10} {:>6} products ({:>5.1}%)  cumulative discount {:>14.2}",
            state.label(),
            report.final_counts[index],
            report.final_shares[index] * 100.0,
            report.cumulative_discounts[index]
        );
    }
    println!("  total cost: {:.2}", report.total_cost);

    let table = runner.sampled_days(sampled_days);
    if table.len() > 1 {
        println!();
        println!("State distribution on sampled days:");
        for (day, counts) in table {
            let row = counts
                .iter()
                .map(|c| format!("{:>5}", c))
                .collect::<Vec<_>>()
                .join(" ");
            println!("  day {:>4}: [{}]", day, row);
        }
    }
}
