//! Hexhive - Entry Point
//!
//! Interactive command loop over the honeycomb learning simulator: the
//! terminal stand-in for the map's two buttons, the clickable cells, and
//! the read-only display panels. All state lives in memory and is gone
//! when the process exits.

use hexhive::core::error::Result;
use hexhive::engine::HiveEngine;
use hexhive::scoring::MatchScore;
use hexhive::session::SessionLog;

use std::io::{self, Write};

fn main() -> Result<()> {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter("hexhive=info")
        .init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(rand::random);

    tracing::info!(seed, "Hexhive starting...");

    let mut engine = HiveEngine::new(seed);

    println!("\n=== HEXHIVE ===");
    println!("Honeycomb skill-map learning simulator (seed {seed})");
    println!();
    println!("Commands:");
    println!("  learner         - Generate a fresh synthetic learner");
    println!("  learn           - Simulate one session on the current cell");
    println!("  pick <id>       - Move to an available cell");
    println!("  top             - Show the top recommended cells");
    println!("  status / s      - Show learner and progress panels");
    println!("  run <n>         - Simulate n sessions");
    println!("  quit / q        - Exit");
    println!();

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        let input = input.trim();
        if input.is_empty() {
            continue;
        }

        let mut parts = input.split_whitespace();
        let command = parts.next().unwrap_or_default();

        match command {
            "learner" => {
                let profile = engine.new_learner();
                println!("Generated learner {} ({})", profile.name, profile.id);
                display_profile(&engine);
            }
            "learn" => match engine.learn_current() {
                Ok(log) => display_log(&log, &engine),
                Err(e) => println!("error: {e}"),
            },
            "pick" => match parts.next().and_then(|s| s.parse::<u32>().ok()) {
                Some(id) => match engine.select_cell(id) {
                    Ok(cell) => println!("Current cell is now {cell}"),
                    Err(e) => println!("error: {e}"),
                },
                None => println!("usage: pick <cell id>"),
            },
            "top" => match engine.recommendations(3) {
                Ok(scores) => display_scores(&scores, &engine),
                Err(e) => println!("error: {e}"),
            },
            "status" | "s" => {
                display_profile(&engine);
                display_progress(&engine);
            }
            "run" => {
                let n = parts.next().and_then(|s| s.parse::<u32>().ok()).unwrap_or(1);
                for _ in 0..n {
                    match engine.learn_current() {
                        Ok(log) => display_log(&log, &engine),
                        Err(e) => {
                            println!("error: {e}");
                            break;
                        }
                    }
                }
            }
            "quit" | "q" => break,
            _ => println!("unknown command: {command}"),
        }
    }

    println!("Goodbye!");
    Ok(())
}

fn display_profile(engine: &HiveEngine) {
    let Some(profile) = engine.profile() else {
        println!("No learner yet - use 'learner' to generate one");
        return;
    };

    println!(
        "--- {} (v{}) ---",
        profile.name, profile.version
    );
    println!(
        "  traits: explorer {}% / achiever {}% / competitor {}% / creator {}%",
        profile.traits.explorer,
        profile.traits.achiever,
        profile.traits.competitor,
        profile.traits.creator,
    );
    println!(
        "  challenge: {}, failure tolerance: {}, dropout threshold: {} failures",
        profile.challenge.as_str(),
        profile.failure_tolerance.as_str(),
        profile.dropout_threshold,
    );
    println!(
        "  media: image {:.2} / text {:.2} / numeric {:.2} / video {:.2}",
        profile.media_affinity.image,
        profile.media_affinity.text,
        profile.media_affinity.numeric,
        profile.media_affinity.video,
    );
}

fn display_progress(engine: &HiveEngine) {
    println!(
        "  progress: {}/61 completed, {} available",
        engine.completed_count(),
        engine.available_cells().len(),
    );
    match engine.current() {
        Some(cell) => {
            let unit = engine.unit(cell);
            println!(
                "  current: {cell} ({}, difficulty {}, {})",
                unit.kind.as_str(),
                unit.difficulty,
                unit.subject.as_str(),
            );
        }
        None => println!("  current: none - the map is exhausted"),
    }
}

fn display_log(log: &SessionLog, engine: &HiveEngine) {
    let outcome = if log.dropped_out { "dropped out" } else { "completed" };
    println!(
        "[{}] cell {} {}: {}s, {} failures{}, reward {}, achievement {:.0}%",
        engine.history().len(),
        log.cell,
        outcome,
        log.dwell_secs,
        log.failures,
        if log.retried { " (retried)" } else { "" },
        log.reward_reaction.as_str(),
        log.achievement * 100.0,
    );
}

fn display_scores(scores: &[MatchScore], engine: &HiveEngine) {
    if scores.is_empty() {
        println!("No recommendable cells");
        return;
    }
    for (rank, s) in scores.iter().enumerate() {
        let unit = engine.unit(s.cell);
        println!(
            "  {}. {} ({}) total {:.3} | difficulty {:.2} kind {:.2} media {:.2} prereq {:.2} disposition {:.2}",
            rank + 1,
            s.cell,
            unit.kind.as_str(),
            s.total,
            s.difficulty_fit,
            s.kind_fit,
            s.media_fit,
            s.prereq_fit,
            s.disposition_fit,
        );
    }
}
