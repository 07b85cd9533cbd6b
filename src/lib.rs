//! Team Forge - matchmaking and progression engine
//!
//! Pure, synchronous routines for deriving time-windowed momentum
//! adjustments from recent match results, partitioning a rated player pool
//! into two balanced teams, picking a non-repeating map under per-game
//! bans, and projecting cumulative experience onto a level curve.
//!
//! The engine performs no I/O of its own: callers supply snapshots of
//! rosters, match history, and preferences together with "now" and an RNG,
//! and consume plain in-memory results.

pub mod balance;
pub mod config;
pub mod error;
pub mod leveling;
pub mod maps;
pub mod momentum;
pub mod types;
pub mod utils;

// Re-export commonly used types and traits
pub use error::{EngineError, Result};
pub use types::*;

// Re-export key components
pub use balance::{balance_teams, evaluate_fairness, move_player, swap_players, FairnessReport};
pub use config::{validate_config, EngineConfig};
pub use leveling::level_state;
pub use maps::{last_played_map, pick_for_game, pick_map, MapQuery};
pub use momentum::{apply_momentum, calculate_momentum};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
