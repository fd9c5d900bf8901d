//! Battle configuration with documented constants
//!
//! The score formula shape is fixed; the numbers feeding it live here so they
//! can be tuned from `data/battle.toml` without touching the resolver.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::error::{MealMaxError, Result};
use crate::core::types::Tier;

/// Penalty subtracted from a meal's raw score, per difficulty tier
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierPenalties {
    pub low: f64,
    pub med: f64,
    pub high: f64,
}

impl TierPenalties {
    pub fn penalty(&self, tier: Tier) -> f64 {
        match tier {
            Tier::Low => self.low,
            Tier::Med => self.med,
            Tier::High => self.high,
        }
    }
}

impl Default for TierPenalties {
    /// Easy meals are penalised hardest: with these values `Meal 1` at 15.0
    /// and LOW scores 15.0 * 6 - 3 = 87.
    fn default() -> Self {
        Self {
            low: 3.0,
            med: 2.0,
            high: 1.0,
        }
    }
}

/// Configuration for battle resolution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattleConfig {
    /// Per-tier penalty table used by the score formula
    #[serde(default)]
    pub tier_penalties: TierPenalties,

    /// Score difference that maps to a certain win
    ///
    /// The absolute score gap is divided by this value and capped at 1.0.
    /// At 100, a gap of 50 points gives the stronger meal a 75% chance.
    #[serde(default = "default_scaling_constant")]
    pub scaling_constant: f64,
}

fn default_scaling_constant() -> f64 {
    100.0
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            tier_penalties: TierPenalties::default(),
            scaling_constant: default_scaling_constant(),
        }
    }
}

impl BattleConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> std::result::Result<(), String> {
        let penalties = &self.tier_penalties;
        if !(penalties.low.is_finite() && penalties.med.is_finite() && penalties.high.is_finite()) {
            return Err("tier penalties must be finite numbers".into());
        }

        if !self.scaling_constant.is_finite() || self.scaling_constant <= 0.0 {
            return Err(format!(
                "scaling_constant ({}) must be a positive finite number",
                self.scaling_constant
            ));
        }

        Ok(())
    }

    /// Parse and validate a config from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: BattleConfig = toml::from_str(contents)?;
        config.validate().map_err(MealMaxError::Config)?;
        Ok(config)
    }
}

/// Load battle config from a TOML file
pub fn load_config(path: &Path) -> Result<BattleConfig> {
    let contents = fs::read_to_string(path)?;
    BattleConfig::from_toml_str(&contents)
}
