//! Team data, type chart, stats and species/move lookup for team analysis.
//!
//! # Overview
//!
//! `coverdex-team` is the data layer under the analysis engines:
//!
//! ```text
//! coverdex-team (types, stats, dex) ← THIS CRATE
//!        │
//!        ▼
//! coverdex-analysis (resistance + coverage engines)
//! ```
//!
//! # Main Types
//!
//! - [`Type`] - Pokemon types, with [`TypeChart`] / [`StandardChart`] as the
//!   effectiveness provider
//! - [`TeamMember`], [`Move`] - resolved team data consumed by the engines
//! - [`StatTable`], [`Nature`], [`calculate_stats`] - the stat formula
//! - [`StatCalculator`] - the stat formula behind a bounded TTL cache
//! - [`Dex`], [`MemoryDex`], [`CachedDex`] - species/move repository
//! - [`PokemonSet`], [`resolve_team`] - turn name-only sets into members
//!
//! # Example Usage
//!
//! ```
//! use coverdex_team::{MemoryDex, PokemonSet, resolve_team};
//!
//! let dex = MemoryDex::from_json(r#"{
//!     "species": [{"name": "Pikachu", "types": ["Electric"],
//!                  "baseStats": {"hp": 35, "atk": 55, "def": 40, "spa": 50, "spd": 50, "spe": 90}}],
//!     "moves": [{"name": "Thunderbolt", "type": "Electric", "category": "Special", "basePower": 90}]
//! }"#).unwrap();
//!
//! let set = PokemonSet {
//!     species: "Pikachu".into(),
//!     moves: vec!["Thunderbolt".into()],
//!     level: 50,
//!     ..Default::default()
//! };
//! let team = resolve_team(&dex, &[set]);
//! assert_eq!(team[0].moves.len(), 1);
//! ```

pub mod calc;
pub mod dex;
pub mod types;

// Re-export main types at crate root for convenience
pub use calc::StatCalculator;
pub use dex::{
    resolve_member, resolve_team, to_id, CacheConfig, CachedDex, Dex, DexError, MemoryDex,
    PokemonSet, Species,
};
pub use types::{
    calculate_stats, immunities, resistances, weaknesses, Move, MoveCategory, Nature,
    PartialStats, StandardChart, Stat, StatError, StatTable, TeamMember, Terastallization, Type,
    TypeChart, DEFAULT_BASE_STATS, DEFAULT_EVS, DEFAULT_IVS, DEFAULT_LEVEL,
};
