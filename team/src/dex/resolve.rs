//! Resolve name-only team sets into analyzable team members

use serde::{Deserialize, Serialize};

use super::Dex;
use crate::types::{PartialStats, TeamMember, Terastallization, Type, DEFAULT_LEVEL};

/// A team slot as a player writes it: names only, no species data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PokemonSet {
    pub name: Option<String>,
    pub species: String,
    pub ability: Option<String>,
    pub item: Option<String>,
    pub moves: Vec<String>,
    pub evs: Option<PartialStats>,
    pub ivs: Option<PartialStats>,
    pub nature: Option<String>,
    pub level: u8,
    pub tera_type: Option<Type>,
    pub terastallized: bool,
}

impl Default for PokemonSet {
    fn default() -> Self {
        Self {
            name: None,
            species: String::new(),
            ability: None,
            item: None,
            moves: Vec::new(),
            evs: None,
            ivs: None,
            nature: None,
            level: DEFAULT_LEVEL,
            tera_type: None,
            terastallized: false,
        }
    }
}

/// Look up species and moves for one set.
///
/// A species miss keeps the member with default base stats and no types;
/// a move miss drops that move. A level outside 1..=100 falls back to
/// [`DEFAULT_LEVEL`]. All of these are logged, none aborts.
pub fn resolve_member(dex: &dyn Dex, set: &PokemonSet) -> TeamMember {
    let level = if (1..=100).contains(&set.level) {
        set.level
    } else {
        tracing::warn!(species = %set.species, level = set.level, "invalid level, using default");
        DEFAULT_LEVEL
    };

    let (types, base_stats) = match dex.species(&set.species) {
        Some(species) => (species.types, Some(species.base_stats)),
        None => {
            tracing::warn!(species = %set.species, "species not found, using default stats");
            (Vec::new(), None)
        }
    };

    let moves = set
        .moves
        .iter()
        .filter_map(|name| {
            let found = dex.move_data(name);
            if found.is_none() {
                tracing::warn!(species = %set.species, move_name = %name, "move not found, skipping");
            }
            found
        })
        .collect();

    TeamMember {
        name: set.name.clone(),
        species: set.species.clone(),
        ability: set.ability.clone(),
        item: set.item.clone(),
        types,
        moves,
        base_stats,
        ivs: set.ivs,
        evs: set.evs,
        nature: set.nature.clone(),
        level,
        tera: set.tera_type.map(|tera_type| Terastallization {
            is_active: set.terastallized,
            tera_type,
        }),
    }
}

/// Resolve every set of a team, in order
pub fn resolve_team(dex: &dyn Dex, sets: &[PokemonSet]) -> Vec<TeamMember> {
    sets.iter().map(|set| resolve_member(dex, set)).collect()
}
