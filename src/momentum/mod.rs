//! Momentum: time-windowed skill adjustments from recent results
//!
//! This module derives a per-player rolling adjustment from match history
//! inside a hard trailing window and annotates player pools with the
//! resulting effective skill.

pub mod calculator;

// Re-export commonly used functions
pub use calculator::{apply_momentum, calculate_momentum};
