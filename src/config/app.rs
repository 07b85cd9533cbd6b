//! Top-level engine configuration

use crate::config::{BalanceConfig, LevelingConfig, MapPickerConfig, MomentumConfig};
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Aggregated configuration for all four engine components
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub momentum: MomentumConfig,
    #[serde(default)]
    pub balance: BalanceConfig,
    #[serde(default)]
    pub maps: MapPickerConfig,
    #[serde(default)]
    pub leveling: LevelingConfig,
}

/// Validate every component configuration
pub fn validate_config(config: &EngineConfig) -> Result<()> {
    config.momentum.validate()?;
    config.balance.validate()?;
    config.maps.validate()?;
    config.leveling.validate()?;
    Ok(())
}
