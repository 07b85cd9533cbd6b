//! Level projection from cumulative experience
//!
//! The cost curve is an arithmetic progression: level n costs
//! `base + (n - 1) * step`. The projection is recomputed in full from the
//! raw total on every call and keeps no memory of prior calls.

use crate::config::LevelingConfig;
use crate::types::LevelState;

/// Project a cumulative experience total onto the level curve.
///
/// Starts at level 1 and peels off whole-level costs until the remainder
/// no longer covers the current level. Deterministic and idempotent;
/// monotone in `total_xp`.
pub fn level_state(total_xp: u64, config: &LevelingConfig) -> LevelState {
    let mut level: u32 = 1;
    let mut remaining = total_xp;
    let mut cost = config.cost_for_level(level);

    while cost > 0 && remaining >= cost {
        remaining -= cost;
        level += 1;
        cost = config.cost_for_level(level);
    }

    let progress = if cost == 0 {
        0.0
    } else {
        remaining as f64 / cost as f64
    };

    LevelState {
        level,
        xp_into_level: remaining,
        xp_for_level: cost,
        progress,
    }
}
