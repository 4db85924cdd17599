//! Metrics collection for headless shootouts

use serde::{Deserialize, Serialize};

/// Result of a single shootout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    /// RNG seed used for the shot script
    pub seed: u64,
    /// Keeper difficulty label
    pub difficulty: String,
    /// Shots resolved
    pub shots: u32,
    pub goals: u32,
    pub saves: u32,
    pub misses: u32,
    /// Ticks the shootout took
    pub frames: u64,
}

/// Aggregated results from a batch of shootouts
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShootoutSummary {
    pub matches: u32,
    pub shots: u32,
    pub goals: u32,
    pub saves: u32,
    pub misses: u32,
    pub goal_rate: f32,
    pub save_rate: f32,
    pub miss_rate: f32,
}

impl ShootoutSummary {
    pub fn from_results(results: &[MatchResult]) -> Self {
        let mut summary = Self {
            matches: results.len() as u32,
            ..Default::default()
        };
        for result in results {
            summary.shots += result.shots;
            summary.goals += result.goals;
            summary.saves += result.saves;
            summary.misses += result.misses;
        }
        if summary.shots > 0 {
            let shots = summary.shots as f32;
            summary.goal_rate = summary.goals as f32 / shots;
            summary.save_rate = summary.saves as f32 / shots;
            summary.miss_rate = summary.misses as f32 / shots;
        }
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_rates() {
        let results = vec![
            MatchResult {
                seed: 1,
                difficulty: "medium".into(),
                shots: 5,
                goals: 2,
                saves: 2,
                misses: 1,
                frames: 900,
            },
            MatchResult {
                seed: 2,
                difficulty: "medium".into(),
                shots: 5,
                goals: 3,
                saves: 1,
                misses: 1,
                frames: 800,
            },
        ];
        let summary = ShootoutSummary::from_results(&results);
        assert_eq!(summary.matches, 2);
        assert_eq!(summary.shots, 10);
        assert!((summary.goal_rate - 0.5).abs() < 1e-6);
        assert!((summary.save_rate - 0.3).abs() < 1e-6);
        assert!((summary.miss_rate - 0.2).abs() < 1e-6);
    }
}
