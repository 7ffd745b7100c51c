//! Engine configuration

use coverdex_team::{CacheConfig, CachedDex, Dex, StatCalculator};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::estimate::EstimatorConfig;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid reference level: {0} (must be 1-100)")]
    InvalidLevel(u8),

    #[error("coverage.top_n must be at least 1")]
    ZeroTopN,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoverageConfig {
    /// Moves kept per coverage bucket and per reference list
    pub top_n: usize,
    /// Defenders listed in the reference coverage
    pub reference_species: Vec<String>,
}

impl Default for CoverageConfig {
    fn default() -> Self {
        Self {
            top_n: 6,
            reference_species: ["Pikachu", "Eevee", "Charmander", "Bulbasaur", "Squirtle"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

/// Everything the engines can be tuned with. Missing fields take defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub coverage: CoverageConfig,
    pub estimator: EstimatorConfig,
    pub cache: CacheConfig,
}

impl AnalysisConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: AnalysisConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let level = self.estimator.reference_level;
        if !(1..=100).contains(&level) {
            return Err(ConfigError::InvalidLevel(level));
        }
        if self.coverage.top_n == 0 {
            return Err(ConfigError::ZeroTopN);
        }
        Ok(())
    }

    /// A stat calculator bounded by the cache settings
    pub fn stat_calculator(&self) -> StatCalculator {
        StatCalculator::new(&self.cache)
    }

    /// Wrap `dex` in a read-through cache bounded by the cache settings
    pub fn cached_dex<D: Dex>(&self, dex: D) -> CachedDex<D> {
        CachedDex::new(dex, &self.cache)
    }
}
