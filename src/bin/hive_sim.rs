//! Batch honeycomb learning simulation
//! Runs the recommend -> learn -> update loop for one synthetic learner

use clap::Parser;
use hexhive::core::error::Result;
use hexhive::core::tuning::Tuning;
use hexhive::engine::{HiveEngine, RunSummary};
use std::path::PathBuf;
use std::time::Instant;

/// Hive Sim - simulate a learner working through the honeycomb map
#[derive(Parser, Debug)]
#[command(name = "hive_sim")]
#[command(about = "Run a honeycomb learning simulation with a synthetic learner")]
struct Args {
    /// Random seed for reproducible runs
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Maximum number of learning sessions
    #[arg(long, default_value_t = 30)]
    sessions: u32,

    /// Recommendations to display after each session
    #[arg(long, default_value_t = 3)]
    top: usize,

    /// Print every session outcome and recommendation
    #[arg(long, default_value_t = false)]
    verbose: bool,

    /// Write the full run summary as JSON
    #[arg(long)]
    output: Option<PathBuf>,

    /// TOML file overriding the tuning defaults
    #[arg(long)]
    tuning: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("hexhive=warn")
        .init();

    let args = Args::parse();

    let tuning = match &args.tuning {
        Some(path) => Tuning::from_toml_file(path)?,
        None => Tuning::default(),
    };

    let mut engine = HiveEngine::with_tuning(args.seed, tuning);
    let profile = engine.new_learner();

    println!("Starting honeycomb learning simulation");
    println!("======================================");
    println!("Seed: {}", args.seed);
    println!(
        "Learner: {} - explorer {}% / achiever {}% / competitor {}% / creator {}%",
        profile.name,
        profile.traits.explorer,
        profile.traits.achiever,
        profile.traits.competitor,
        profile.traits.creator,
    );
    println!("Simulating up to {} sessions...", args.sessions);
    println!();

    let start = Instant::now();

    for session in 1..=args.sessions {
        let Some(current) = engine.current() else {
            println!("Map exhausted after {} sessions", session - 1);
            break;
        };

        let log = engine.learn_current()?;

        if args.verbose {
            let unit = engine.unit(current);
            let outcome = if log.dropped_out { "dropout" } else { "done" };
            println!(
                "[{session:>3}] {current} {:<8} d{:<2} -> {outcome}: {}s, {} failures, achievement {:.0}%",
                unit.kind.as_str(),
                unit.difficulty,
                log.dwell_secs,
                log.failures,
                log.achievement * 100.0,
            );
            for s in engine.recommendations(args.top)? {
                println!(
                    "      next? {} total {:.3} (difficulty {:.2}, prereq {:.2})",
                    s.cell, s.total, s.difficulty_fit, s.prereq_fit,
                );
            }
        }
    }

    let summary = RunSummary::new(args.seed, &engine, start.elapsed());
    println!();
    println!("{}", summary.summary());

    if let Some(path) = &args.output {
        std::fs::write(path, summary.to_json())?;
        println!("Full output written to {}", path.display());
    }

    Ok(())
}
