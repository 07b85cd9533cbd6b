//! Randomized team partitioning
//!
//! Repeated shuffle-and-split search over the pool: each trial shuffles,
//! takes the first `2 * players_per_team` players, splits them in half,
//! and scores the split by the absolute difference of summed ratings. The
//! first split reaching the minimum observed difference wins.
//!
//! This is a heuristic, not an exact optimum: with enough trials it lands
//! close to the best partition for small pools, but no optimality
//! guarantee is made. The RNG is injected so tests can assert convergence
//! deterministically.

use crate::config::BalanceConfig;
use crate::types::{TeamAssignment, TeamPlayer};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

/// Partition a pool into two equal-size teams minimizing the skill-sum
/// difference.
///
/// Returns the empty assignment when the pool holds fewer than
/// `2 * players_per_team` players; that is the expected "not enough
/// players" outcome, not an error. Scoring uses each player's effective
/// skill when momentum was applied, raw skill otherwise.
pub fn balance_teams(
    pool: &[TeamPlayer],
    players_per_team: usize,
    config: &BalanceConfig,
    rng: &mut impl Rng,
) -> TeamAssignment {
    let needed = players_per_team * 2;
    if players_per_team == 0 || pool.len() < needed {
        return TeamAssignment::empty();
    }

    let mut candidates: Vec<&TeamPlayer> = pool.iter().collect();
    let mut best_split: Vec<&TeamPlayer> = Vec::new();
    let mut best_difference = f64::INFINITY;

    for trial in 0..config.trials.max(1) {
        candidates.shuffle(rng);
        let picked = &candidates[..needed];

        let sum_a: f64 = picked[..players_per_team].iter().map(|p| p.rating()).sum();
        let sum_b: f64 = picked[players_per_team..].iter().map(|p| p.rating()).sum();
        let difference = (sum_a - sum_b).abs();

        // Strict < keeps the first split reaching the minimum.
        if difference < best_difference {
            debug!(trial, difference, "better split found");
            best_difference = difference;
            best_split = picked.to_vec();
        }
    }

    TeamAssignment {
        team_a: best_split[..players_per_team]
            .iter()
            .map(|p| (*p).clone())
            .collect(),
        team_b: best_split[players_per_team..]
            .iter()
            .map(|p| (*p).clone())
            .collect(),
    }
}
