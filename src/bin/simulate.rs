//! Headless shootout batch runner
//!
//! Usage:
//!   simulate [--matches N] [--difficulty easy|medium|hard] [--shots N]
//!            [--seed N] [--parallel N] [--out FILE] [--quiet]
//!
//! Prints an aggregated summary as JSON; per-match results go to the
//! output file when one is given.

use spotkick::settings::Difficulty;
use spotkick::simulation::{ShootoutSummary, SimConfig, run_batch};

fn arg_value(args: &[String], name: &str) -> Option<String> {
    args.iter()
        .position(|a| a == name)
        .and_then(|i| args.get(i + 1).cloned())
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mut config = SimConfig::from_config_files();

    if let Some(matches) = arg_value(&args, "--matches").and_then(|s| s.parse().ok()) {
        config.matches = matches;
    }
    if let Some(difficulty) = arg_value(&args, "--difficulty") {
        config.difficulty = match difficulty.as_str() {
            "easy" => Difficulty::Easy,
            "medium" => Difficulty::Medium,
            "hard" => Difficulty::Hard,
            other => {
                eprintln!("Unknown difficulty '{}', using medium", other);
                Difficulty::Medium
            }
        };
    }
    if let Some(shots) = arg_value(&args, "--shots").and_then(|s| s.parse().ok()) {
        config.max_shots = shots;
    }
    if let Some(seed) = arg_value(&args, "--seed").and_then(|s| s.parse().ok()) {
        config.seed = Some(seed);
    }
    if let Some(parallel) = arg_value(&args, "--parallel").and_then(|s| s.parse().ok()) {
        config.parallel = parallel;
    }
    if let Some(out) = arg_value(&args, "--out") {
        config.output_file = Some(out);
    }
    if args.iter().any(|a| a == "--quiet") {
        config.quiet = true;
    }

    let results = run_batch(&config);
    let summary = ShootoutSummary::from_results(&results);

    if let Some(path) = &config.output_file {
        match serde_json::to_string_pretty(&results) {
            Ok(json) => {
                if let Err(e) = std::fs::write(path, json) {
                    eprintln!("Failed to write {}: {}", path, e);
                }
            }
            Err(e) => eprintln!("Failed to serialize results: {}", e),
        }
    }

    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize summary: {}", e),
    }
}
