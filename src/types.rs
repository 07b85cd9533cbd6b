//! Common types used throughout the matchmaking and progression engine

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use uuid::Uuid;

/// Derived identity used to correlate the same person across saved and
/// temporary player records
pub type PlayerKey = String;

/// Unique identifier for matches
pub type MatchId = Uuid;

/// A rated roster entry supplied by the roster collaborator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Persisted identifier; `None` for temporary players that were never saved
    pub id: Option<i64>,
    pub name: String,
    /// Base skill rating on the 0-10 roster scale
    pub skill: u8,
}

impl Player {
    pub fn new(id: Option<i64>, name: impl Into<String>, skill: u8) -> Self {
        Self {
            id,
            name: name.into(),
            skill,
        }
    }

    /// Stable correlation key: the persisted id when present, otherwise a
    /// case-insensitive normalization of the display name.
    ///
    /// This is the only place the id-or-name fallback lives; momentum
    /// lookups and roster equality both go through it.
    pub fn key(&self) -> PlayerKey {
        match self.id {
            Some(id) => id.to_string(),
            None => self.name.trim().to_lowercase(),
        }
    }
}

/// Engine-local view of a player with the momentum adjustment applied.
/// Built per invocation by the momentum calculator and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamPlayer {
    pub player: Player,
    /// Signed rolling adjustment derived from recent results
    pub momentum: f64,
    /// `round2(skill + momentum)`; `None` when momentum was never computed
    pub effective_skill: Option<f64>,
}

impl TeamPlayer {
    /// Rating used for balancing: momentum-aware when available,
    /// raw skill otherwise
    pub fn rating(&self) -> f64 {
        self.effective_skill
            .unwrap_or_else(|| f64::from(self.player.skill))
    }

    pub fn key(&self) -> PlayerKey {
        self.player.key()
    }
}

impl From<Player> for TeamPlayer {
    fn from(player: Player) -> Self {
        Self {
            player,
            momentum: 0.0,
            effective_skill: None,
        }
    }
}

/// Which side won a completed match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchWinner {
    TeamA,
    TeamB,
    Undecided,
}

/// Lifecycle status of a historical match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchStatus {
    Completed,
    Canceled,
}

/// Historical match snapshot supplied by the match-history collaborator.
/// Rosters are copies taken at save time, not live references; the engine
/// treats the whole record as read-only input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRecord {
    pub id: MatchId,
    pub team_a: Vec<Player>,
    pub team_b: Vec<Player>,
    pub score_a: u32,
    pub score_b: u32,
    pub winner: MatchWinner,
    pub game: Option<String>,
    pub map: Option<String>,
    /// `None` when the stored timestamp failed to parse; such matches are
    /// treated as too old everywhere
    #[serde(deserialize_with = "crate::utils::lenient_timestamp", default)]
    pub created_at: Option<DateTime<Utc>>,
    pub status: MatchStatus,
}

impl MatchRecord {
    /// Roster of the winning side, when the match was decided
    pub fn winners(&self) -> Option<&[Player]> {
        match self.winner {
            MatchWinner::TeamA => Some(&self.team_a),
            MatchWinner::TeamB => Some(&self.team_b),
            MatchWinner::Undecided => None,
        }
    }

    /// Roster of the losing side, when the match was decided
    pub fn losers(&self) -> Option<&[Player]> {
        match self.winner {
            MatchWinner::TeamA => Some(&self.team_b),
            MatchWinner::TeamB => Some(&self.team_a),
            MatchWinner::Undecided => None,
        }
    }
}

/// Side selector for roster operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    A,
    B,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::A => write!(f, "teamA"),
            Side::B => write!(f, "teamB"),
        }
    }
}

/// Two ordered rosters produced by the balancer.
///
/// While locked for scoring both sides hold exactly `players_per_team`
/// players; at all other times each side holds at most that many.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamAssignment {
    pub team_a: Vec<TeamPlayer>,
    pub team_b: Vec<TeamPlayer>,
}

impl TeamAssignment {
    /// The "not possible" sentinel returned when the pool is too small
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.team_a.is_empty() && self.team_b.is_empty()
    }

    /// Both sides locked at exactly `players_per_team`
    pub fn is_ready(&self, players_per_team: usize) -> bool {
        players_per_team > 0
            && self.team_a.len() == players_per_team
            && self.team_b.len() == players_per_team
    }

    pub fn side(&self, side: Side) -> &[TeamPlayer] {
        match side {
            Side::A => &self.team_a,
            Side::B => &self.team_b,
        }
    }

    pub fn side_mut(&mut self, side: Side) -> &mut Vec<TeamPlayer> {
        match side {
            Side::A => &mut self.team_a,
            Side::B => &mut self.team_b,
        }
    }

    /// Summed balancing rating of one side
    pub fn side_total(&self, side: Side) -> f64 {
        self.side(side).iter().map(TeamPlayer::rating).sum()
    }

    /// Absolute difference between the two sides' summed ratings
    pub fn skill_difference(&self) -> f64 {
        (self.side_total(Side::A) - self.side_total(Side::B)).abs()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.team_a
            .iter()
            .chain(self.team_b.iter())
            .any(|p| p.key() == key)
    }
}

/// Per-game map ban lists. Mutated only by the preferences collaborator;
/// the engine reads it through `banned_for`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MapPreferences {
    banned: HashMap<String, HashSet<String>>,
}

impl MapPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ban(&mut self, game: impl Into<String>, map: impl Into<String>) {
        self.banned.entry(game.into()).or_default().insert(map.into());
    }

    pub fn unban(&mut self, game: &str, map: &str) {
        if let Some(maps) = self.banned.get_mut(game) {
            maps.remove(map);
        }
    }

    /// Banned maps for a game; empty when the game has no ban list
    pub fn banned_for(&self, game: &str) -> HashSet<String> {
        self.banned.get(game).cloned().unwrap_or_default()
    }
}

/// Projection of a cumulative experience total onto the level curve.
/// Recomputed fully from the raw total on every call, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LevelState {
    /// Current level, starting at 1
    pub level: u32,
    /// Experience accumulated toward the current level
    pub xp_into_level: u64,
    /// Experience cost to complete the current level
    pub xp_for_level: u64,
    /// Fraction of the current level completed, in [0, 1]
    pub progress: f64,
}
