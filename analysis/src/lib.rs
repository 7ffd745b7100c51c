//! Defensive resistance and offensive coverage analysis for Pokemon teams.
//!
//! # Overview
//!
//! `coverdex-analysis` runs two independent engines over team data resolved
//! by `coverdex-team`:
//!
//! ```text
//! coverdex-team (types, stats, dex)
//!        │
//!        ▼
//! coverdex-analysis (engines) ← THIS CRATE
//!        │
//!        ├─> ResistanceAnalyzer (type chart + modifier rules + weather/terrain)
//!        └─> CoverageAnalyzer (type chart + damage estimator + dex)
//! ```
//!
//! # Main Types
//!
//! ## Resistance
//! - [`ResistanceAnalyzer`] - per attacking type, per member multipliers
//! - [`ResistanceOptions`] - weather, terrain and a one-off terastallization
//! - [`ResistanceAnalysis`] - rows, summary and member references
//! - [`ModifierRules`] - ability/item/weather/terrain tables
//!
//! ## Coverage
//! - [`CoverageAnalyzer`] - best moves per defending type combination
//! - [`CoverageMatrix`], [`CoverageUnit`] - the 171-entry combination matrix
//! - [`DamageEstimator`] - the ranking heuristic
//!
//! ## Configuration
//! - [`AnalysisConfig`] - bucket cap, reference species, estimator and cache settings
//!
//! # Example Usage
//!
//! ```
//! use coverdex_analysis::{ResistanceAnalyzer, ResistanceOptions, Weather};
//! use coverdex_team::{TeamMember, Type};
//!
//! let team = vec![
//!     TeamMember::new("Charizard", [Type::Fire, Type::Flying]),
//!     TeamMember::new("Rotom-Wash", [Type::Electric, Type::Water]).with_ability("Levitate"),
//! ];
//!
//! let analyzer = ResistanceAnalyzer::default();
//! let result = analyzer.analyze(&team, &ResistanceOptions::default().with_weather(Weather::Rain));
//!
//! assert_eq!(result.member_multiplier(0, Type::Ground), Some(0.0));
//! assert_eq!(result.member_multiplier(0, Type::Water), Some(3.0));
//! assert_eq!(result.resistance_level(Type::Ground), Some(2));
//! ```

pub mod conditions;
pub mod config;
pub mod coverage;
pub mod estimate;
pub mod resistance;
pub mod rules;

// Re-export main types at crate root for convenience
pub use conditions::{ConditionError, Terrain, Weather};
pub use config::{AnalysisConfig, ConfigError, CoverageConfig};
pub use coverage::{
    type_combinations, CategoryCoverage, CoverageAnalysis, CoverageAnalyzer, CoverageLevel,
    CoverageMatrix, CoverageOptions, CoverageUnit, MoveBucket, MoveEffectiveness,
    ReferenceCoverage,
};
pub use estimate::{DamageEstimator, DamageModel, EstimatorConfig, STAB_MULTIPLIER};
pub use resistance::{
    base_universal_type_multiplier, resistance_level, AttackType, MemberRef, MultiplierGroup,
    ResistanceAnalysis, ResistanceAnalyzer, ResistanceOptions, ResistanceSummary, SummaryEntry,
    TeraOverride, TypeResistanceRow,
};
pub use rules::{AbilityEffect, ItemEffect, ModifierRules, RulesError, SpecialHandling, TerrainEffect};
