//! Leveling curve configuration

use crate::error::{EngineError, Result};
use serde::{Deserialize, Serialize};

/// Configuration for the arithmetic level-cost curve.
/// Level n costs `base_cost + (n - 1) * step` experience.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelingConfig {
    /// Cost to complete level 1
    pub base_cost: u64,
    /// Linear increase in cost per level
    pub step: u64,
}

impl Default for LevelingConfig {
    fn default() -> Self {
        Self {
            base_cost: 120,
            step: 30,
        }
    }
}

impl LevelingConfig {
    /// Experience cost to complete the given level
    pub fn cost_for_level(&self, level: u32) -> u64 {
        self.base_cost + u64::from(level.saturating_sub(1)) * self.step
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.base_cost == 0 {
            return Err(EngineError::ConfigurationError {
                message: "base_cost must be greater than 0".to_string(),
            }
            .into());
        }

        Ok(())
    }
}
