//! Team balancing: randomized partitioning, fairness check, manual overrides

pub mod balancer;
pub mod fairness;
pub mod roster;

// Re-export commonly used functions and types
pub use balancer::balance_teams;
pub use fairness::{evaluate_fairness, FairnessReport};
pub use roster::{move_player, swap_players};
