//! Memoizing stat calculator

use moka::sync::Cache;

use crate::dex::CacheConfig;
use crate::types::{PartialStats, StatError, StatInputs, StatTable, TeamMember};

/// Stat calculator with a bounded, time-limited result cache.
///
/// Cheap to share between threads; construct one and pass it to the engines.
#[derive(Clone)]
pub struct StatCalculator {
    cache: Cache<StatInputs, StatTable>,
}

impl StatCalculator {
    pub fn new(config: &CacheConfig) -> Self {
        Self {
            cache: Cache::builder()
                .max_capacity(config.max_entries)
                .time_to_live(config.ttl())
                .build(),
        }
    }

    /// Compute stats, reusing a cached result for identical normalized inputs.
    ///
    /// The level is validated before the cache is consulted.
    pub fn calculate(
        &self,
        base: Option<&StatTable>,
        ivs: Option<&PartialStats>,
        evs: Option<&PartialStats>,
        level: u8,
        nature: Option<&str>,
    ) -> Result<StatTable, StatError> {
        let inputs = StatInputs::normalize(base, ivs, evs, level, nature)?;
        if let Some(stats) = self.cache.get(&inputs) {
            return Ok(stats);
        }

        tracing::debug!(level, nature = %inputs.nature, "stat cache miss");
        let stats = inputs.compute();
        self.cache.insert(inputs, stats);
        Ok(stats)
    }

    /// Stats of a team member at `level` (the member's own level is ignored)
    pub fn member_stats(&self, member: &TeamMember, level: u8) -> Result<StatTable, StatError> {
        self.calculate(
            member.base_stats.as_ref(),
            member.ivs.as_ref(),
            member.evs.as_ref(),
            level,
            member.nature.as_deref(),
        )
    }

    /// Number of cached results
    pub fn entry_count(&self) -> u64 {
        self.cache.run_pending_tasks();
        self.cache.entry_count()
    }
}

impl Default for StatCalculator {
    fn default() -> Self {
        Self::new(&CacheConfig::default())
    }
}
