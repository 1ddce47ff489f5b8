use std::error::Error;
use std::io;
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::prelude::*;

use workplace_sim::workplace::{CompanyParams, HistoryExport, HistoryStats, WorkplaceSim};

mod menu;

#[derive(Parser, Debug)]
#[command(name = "workplace_sim")]
#[command(about = "Run a small frontier business one day at a time")]
struct Args {
    /// Random seed (uses random seed if not specified)
    #[arg(short, long)]
    seed: Option<u64>,

    /// JSON file with company parameters; missing fields take defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Run this many days without the interactive menus
    #[arg(short, long)]
    days: Option<u32>,

    /// Export the day-by-day history to a JSON file on exit
    #[arg(long)]
    export_history: Option<PathBuf>,

    /// Log debug output to stderr (overridden by RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .without_time(),
        )
        .init();

    let params = match &args.config {
        Some(path) => CompanyParams::from_json_file(path)?,
        None => CompanyParams::default(),
    };

    let seed = args.seed.unwrap_or_else(rand::random);
    println!("Opening for business with seed: {}", seed);
    let mut sim = WorkplaceSim::new(params, seed)?;
    println!("Hired {} employees", sim.company.headcount());

    match args.days {
        Some(days) => run_headless(&mut sim, days),
        None => {
            let stdin = io::stdin();
            menu::Session::new(stdin.lock(), io::stdout()).run(&mut sim)?;
        }
    }

    if let Some(path) = &args.export_history {
        HistoryExport::from_company(&sim.company, seed).write_to(path)?;
        println!("Exported history to: {}", path.display());
    }
    Ok(())
}

/// Run a fixed number of days, printing narration and weekly payroll
fn run_headless(sim: &mut WorkplaceSim, days: u32) {
    for _ in 0..days {
        let day = sim.run_day();
        println!();
        println!("Day {} - {}", day.start.day, day.start.weekday);
        if day.start.understaffed {
            println!("Understaffed!");
        }
        println!("Scheduled: {}", day.start.scheduled.len());
        for narrated in &day.events {
            println!("  {}", narrated.narration);
        }
        if day.events.is_empty() {
            println!("  {}", sim.quiet_day_line());
        }
        println!("Today's productivity: {} labor hours", day.labor_hours);
        if let Some(report) = &day.weekly_report {
            println!();
            println!("{}", report);
        }
    }

    let stats = HistoryStats::from_days(&sim.company.history);
    println!();
    println!(
        "{} days, {} understaffed, {} labor hours, {} call-outs, {} quits, {} arguments, {} gossip, {} injuries",
        stats.days,
        stats.understaffed_days,
        stats.labor_hours,
        stats.call_outs,
        stats.quits,
        stats.arguments,
        stats.gossip,
        stats.injuries,
    );
    println!("{} employees remain", sim.company.headcount());
}
