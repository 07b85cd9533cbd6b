//! Map picker configuration

use crate::error::{EngineError, Result};
use chrono::Duration;
use serde::{Deserialize, Serialize};

/// Configuration for map selection history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapPickerConfig {
    /// Trailing window in seconds for "recently played" lookups
    pub window_seconds: i64,
}

impl Default for MapPickerConfig {
    fn default() -> Self {
        Self {
            window_seconds: 4 * 60 * 60, // 4 hours
        }
    }
}

impl MapPickerConfig {
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

        Ok(())
    }
}
