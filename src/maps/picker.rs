//! Non-repeating map selection
//!
//! Bans remove maps outright; the most recently played map and any extra
//! exclusions are only avoided while an alternative exists. When every
//! allowed map is excluded the picker accepts a repeat rather than
//! returning nothing.

use crate::config::MapPickerConfig;
use crate::types::{MapPreferences, MatchRecord, MatchStatus};
use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;
use tracing::debug;

/// Newest in-window map played for `game`, if any.
///
/// Scans for the most recent non-canceled match tagged with this game and
/// a map; matches older than the window or with a missing timestamp are
/// ignored.
pub fn last_played_map(
    matches: &[MatchRecord],
    game: &str,
    now: DateTime<Utc>,
    config: &MapPickerConfig,
) -> Option<String> {
    let window = config.window();
    matches
        .iter()
        .filter(|record| record.status != MatchStatus::Canceled)
        .filter(|record| record.game.as_deref() == Some(game))
        .filter_map(|record| {
            let created_at = record.created_at?;
            let map = record.map.clone()?;
            (now.signed_duration_since(created_at) <= window).then_some((created_at, map))
        })
        .max_by_key(|(created_at, _)| *created_at)
        .map(|(_, map)| map)
}

/// Pick one allowed map from `pool`.
///
/// Returns `None` only when every map in the pool is banned - the
/// recoverable "no maps available" condition the caller surfaces to the
/// user. Otherwise the choice is uniform over the non-recent, non-excluded
/// candidates, falling back to all candidates when none remain.
pub fn pick_map(
    pool: &[String],
    banned: &HashSet<String>,
    last_played: Option<&str>,
    exclude: &HashSet<String>,
    rng: &mut impl Rng,
) -> Option<String> {
    let candidates: Vec<&str> = pool
        .iter()
        .map(String::as_str)
        .filter(|map| !banned.contains(*map))
        .collect();

    if candidates.is_empty() {
        debug!(game_pool = pool.len(), "no maps available after bans");
        return None;
    }

    let preferred: Vec<&str> = candidates
        .iter()
        .copied()
        .filter(|map| Some(*map) != last_played && !exclude.contains(*map))
        .collect();

    let choice = if preferred.is_empty() {
        candidates.choose(rng)
    } else {
        preferred.choose(rng)
    };
    choice.map(|map| (*map).to_string())
}

/// Inputs for an end-to-end map pick: the game, its full map pool, the
/// ban preferences, the shared match history, and any extra exclusions.
#[derive(Debug, Clone, Copy)]
pub struct MapQuery<'a> {
    pub game: &'a str,
    pub pool: &'a [String],
    pub preferences: &'a MapPreferences,
    pub matches: &'a [MatchRecord],
    pub exclude: &'a HashSet<String>,
}

/// Resolve a map for a game end to end: look up its ban list, find the
/// most recently played map, then pick.
pub fn pick_for_game(
    query: &MapQuery<'_>,
    now: DateTime<Utc>,
    config: &MapPickerConfig,
    rng: &mut impl Rng,
) -> Option<String> {
    let banned = query.preferences.banned_for(query.game);
    let last_played = last_played_map(query.matches, query.game, now, config);
    pick_map(query.pool, &banned, last_played.as_deref(), query.exclude, rng)
}
