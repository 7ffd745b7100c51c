//! Domain types for team analysis

mod matchup;
mod member;
mod nature;
mod pokemon_type;
mod stats;

pub use matchup::{immunities, resistances, weaknesses};
pub use member::{Move, MoveCategory, TeamMember, Terastallization};
pub use nature::{Nature, NATURE_BOOST, NATURE_NEUTRAL, NATURE_REDUCTION};
pub use pokemon_type::{StandardChart, Type, TypeChart, TYPE_CHART};
pub use stats::{
    calculate_stats, PartialStats, Stat, StatError, StatInputs, StatTable, DEFAULT_BASE_STATS,
    DEFAULT_EVS, DEFAULT_IVS, DEFAULT_LEVEL,
};
