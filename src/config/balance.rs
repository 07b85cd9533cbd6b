//! Team balancer configuration

use crate::error::{EngineError, Result};
use serde::{Deserialize, Serialize};

/// Configuration for the randomized balance search and the advisory
/// fairness check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceConfig {
    /// Number of shuffle-and-split trials per invocation
    pub trials: u32,
    /// Skill-sum difference above which a ready assignment is flagged unfair
    pub fairness_threshold: f64,
}

impl Default for BalanceConfig {
    fn default() -> Self {
        Self {
            trials: 120,
            fairness_threshold: 3.0,
        }
    }
}

impl BalanceConfig {
    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.trials == 0 {
            return Err(EngineError::ConfigurationError {
                message: "trials must be greater than 0".to_string(),
            }
            .into());
        }

        if self.fairness_threshold < 0.0 {
            return Err(EngineError::ConfigurationError {
                message: "fairness_threshold must be non-negative".to_string(),
            }
            .into());
        }

        Ok(())
    }
}
