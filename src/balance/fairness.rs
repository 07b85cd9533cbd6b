//! Advisory fairness check on a locked assignment

use crate::config::BalanceConfig;
use crate::types::TeamAssignment;
use serde::{Deserialize, Serialize};

/// Outcome of the fairness check.
///
/// Advisory only: an unfair flag is surfaced to the user but never blocks
/// saving a match.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FairnessReport {
    /// Absolute difference between the two sides' summed ratings
    pub difference: f64,
    /// True when the difference exceeds the configured threshold
    pub unfair: bool,
}

/// Evaluate fairness of a ready assignment.
///
/// Returns `None` until both sides are locked at exactly
/// `players_per_team`; a partially filled assignment has no verdict.
pub fn evaluate_fairness(
    assignment: &TeamAssignment,
    players_per_team: usize,
    config: &BalanceConfig,
) -> Option<FairnessReport> {
    if !assignment.is_ready(players_per_team) {
        return None;
    }

    let difference = assignment.skill_difference();
    Some(FairnessReport {
        difference,
        unfair: difference > config.fairness_threshold,
    })
}
