//! Map selection with per-game ban lists and repeat avoidance

pub mod picker;

// Re-export commonly used functions and types
pub use picker::{last_played_map, pick_for_game, pick_map, MapQuery};
