//! Experience-to-level projection

pub mod calculator;

// Re-export commonly used functions
pub use calculator::level_state;
