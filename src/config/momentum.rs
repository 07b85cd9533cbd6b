//! Momentum window configuration

use crate::error::{EngineError, Result};
use chrono::Duration;
use serde::{Deserialize, Serialize};

/// Configuration for the momentum calculator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MomentumConfig {
    /// Trailing window in seconds; matches older than this contribute nothing
    pub window_seconds: i64,
    /// Adjustment per decided match: winners gain it, losers lose it
    pub step: f64,
}

impl Default for MomentumConfig {
    fn default() -> Self {
        Self {
            window_seconds: 4 * 60 * 60, // 4 hours
            step: 0.5,
        }
    }
}

impl MomentumConfig {
    pub fn window(&self) -> Duration {
        Duration::seconds(self.window_seconds)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.window_seconds <= 0 {
            return Err(EngineError::ConfigurationError {
                message: "window_seconds must be positive".to_string(),
            }
            .into());
        }

        if self.step <= 0.0 {
            return Err(EngineError::ConfigurationError {
                message: "step must be positive".to_string(),
            }
            .into());
        }

        Ok(())
    }
}
