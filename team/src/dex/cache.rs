//! Read-through cache over a [`Dex`]

use std::time::Duration;

use moka::sync::Cache;
use serde::{Deserialize, Serialize};

use super::{to_id, Dex, Species};
use crate::types::Move;

/// Size and lifetime bounds for in-memory caches
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Maximum number of cached entries
    pub max_entries: u64,
    /// Seconds an entry stays valid after insertion
    pub ttl_secs: u64,
}

impl CacheConfig {
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_entries: 1000,
            ttl_secs: 60 * 60,
        }
    }
}

/// Memoizing wrapper over any [`Dex`].
///
/// Misses are cached too: the underlying data never changes while the
/// process runs, so a species that was not found stays not found.
pub struct CachedDex<D> {
    inner: D,
    species: Cache<String, Option<Species>>,
    moves: Cache<String, Option<Move>>,
}

impl<D: Dex> CachedDex<D> {
    pub fn new(inner: D, config: &CacheConfig) -> Self {
        Self {
            inner,
            species: Cache::builder()
                .max_capacity(config.max_entries)
                .time_to_live(config.ttl())
                .build(),
            moves: Cache::builder()
                .max_capacity(config.max_entries)
                .time_to_live(config.ttl())
                .build(),
        }
    }

    pub fn inner(&self) -> &D {
        &self.inner
    }

    /// Drop every cached entry
    pub fn clear(&self) {
        self.species.invalidate_all();
        self.moves.invalidate_all();
    }

    /// Number of cached species and move lookups
    pub fn entry_count(&self) -> u64 {
        self.species.run_pending_tasks();
        self.moves.run_pending_tasks();
        self.species.entry_count() + self.moves.entry_count()
    }
}

impl<D: Dex> Dex for CachedDex<D> {
    fn species(&self, name: &str) -> Option<Species> {
        self.species.get_with(to_id(name), || {
            tracing::debug!(species = %name, "dex cache miss");
            self.inner.species(name)
        })
    }

    fn move_data(&self, name: &str) -> Option<Move> {
        self.moves.get_with(to_id(name), || {
            tracing::debug!(move_name = %name, "dex cache miss");
            self.inner.move_data(name)
        })
    }
}
