//! Configuration for the matchmaking and progression engine
//!
//! Each component carries its own config struct with defaults,
//! validation, and serde support; `EngineConfig` aggregates them for
//! hosts that load everything at once.

pub mod app;
pub mod balance;
pub mod leveling;
pub mod maps;
pub mod momentum;

// Re-export commonly used types
pub use app::{validate_config, EngineConfig};
pub use balance::BalanceConfig;
pub use leveling::LevelingConfig;
pub use maps::MapPickerConfig;
pub use momentum::MomentumConfig;
