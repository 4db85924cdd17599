//! Batch execution of headless shootouts, optionally fanned out with rayon

use bevy::log::info;
use rayon::prelude::*;

use super::config::SimConfig;
use super::metrics::MatchResult;
use super::runner::run_match;

/// Run the configured batch of shootouts. Each match owns its own app and
/// shares nothing, so parallel execution needs no coordination.
pub fn run_batch(config: &SimConfig) -> Vec<MatchResult> {
    let base_seed = config.seed.unwrap_or_else(rand::random::<u64>);
    let seeds: Vec<u64> = (0..config.matches as u64)
        .map(|i| base_seed.wrapping_add(i))
        .collect();

    if config.parallel > 0 {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.parallel)
            .build();
        match pool {
            Ok(pool) => {
                return pool.install(|| {
                    seeds.par_iter().map(|&seed| run_match(config, seed)).collect()
                });
            }
            Err(e) => {
                info!("Thread pool setup failed ({}), running sequentially", e);
            }
        }
    }

    seeds
        .iter()
        .map(|&seed| {
            let result = run_match(config, seed);
            if !config.quiet {
                info!(
                    "seed {}: {} goals / {} saves / {} misses",
                    seed, result.goals, result.saves, result.misses
                );
            }
            result
        })
        .collect()
}
