//! Team member and move types

use serde::{Deserialize, Serialize};

use super::pokemon_type::Type;
use super::stats::{PartialStats, StatTable, DEFAULT_LEVEL};

/// Damage category of a move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveCategory {
    Physical,
    Special,
    Status,
}

/// Move data needed for analysis
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Move {
    pub name: String,
    #[serde(rename = "type")]
    pub move_type: Type,
    pub category: MoveCategory,
    #[serde(default)]
    pub base_power: u16,
}

impl Move {
    pub fn new(name: impl Into<String>, move_type: Type, category: MoveCategory, base_power: u16) -> Self {
        Self {
            name: name.into(),
            move_type,
            category,
            base_power,
        }
    }

    /// Whether the move deals damage (not a Status move)
    pub fn is_damaging(&self) -> bool {
        self.category != MoveCategory::Status
    }
}

/// Terastallization marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Terastallization {
    pub is_active: bool,
    pub tera_type: Type,
}

fn default_level() -> u8 {
    DEFAULT_LEVEL
}

/// One Pokemon of a team, with species data already resolved
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    /// Nickname (if any)
    #[serde(default)]
    pub name: Option<String>,

    /// Species name (including forme, e.g. "Landorus-Therian")
    pub species: String,

    #[serde(default)]
    pub ability: Option<String>,

    #[serde(default)]
    pub item: Option<String>,

    /// Natural types of the species (1 or 2; empty if the species was not found)
    pub types: Vec<Type>,

    #[serde(default)]
    pub moves: Vec<Move>,

    #[serde(default)]
    pub base_stats: Option<StatTable>,

    #[serde(default)]
    pub ivs: Option<PartialStats>,

    #[serde(default)]
    pub evs: Option<PartialStats>,

    #[serde(default)]
    pub nature: Option<String>,

    /// Carried with the set. Stat estimates use the configured reference
    /// level instead.
    #[serde(default = "default_level")]
    pub level: u8,

    #[serde(default)]
    pub tera: Option<Terastallization>,
}

impl TeamMember {
    /// Create a member with no ability, item, moves or spread
    pub fn new(species: impl Into<String>, types: impl Into<Vec<Type>>) -> Self {
        Self {
            name: None,
            species: species.into(),
            ability: None,
            item: None,
            types: types.into(),
            moves: Vec::new(),
            base_stats: None,
            ivs: None,
            evs: None,
            nature: None,
            level: DEFAULT_LEVEL,
            tera: None,
        }
    }

    pub fn with_ability(mut self, ability: impl Into<String>) -> Self {
        self.ability = Some(ability.into());
        self
    }

    pub fn with_item(mut self, item: impl Into<String>) -> Self {
        self.item = Some(item.into());
        self
    }

    pub fn with_move(mut self, mv: Move) -> Self {
        self.moves.push(mv);
        self
    }

    pub fn with_base_stats(mut self, base_stats: StatTable) -> Self {
        self.base_stats = Some(base_stats);
        self
    }

    pub fn with_nature(mut self, nature: impl Into<String>) -> Self {
        self.nature = Some(nature.into());
        self
    }

    pub fn with_evs(mut self, evs: PartialStats) -> Self {
        self.evs = Some(evs);
        self
    }

    /// Mark the member as terastallized into `tera_type`
    pub fn terastallized(mut self, tera_type: Type) -> Self {
        self.tera = Some(Terastallization {
            is_active: true,
            tera_type,
        });
        self
    }

    /// Get display name (nickname or species)
    pub fn name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.is_empty())
            .unwrap_or(&self.species)
    }

    /// The active tera type, if terastallized
    pub fn active_tera_type(&self) -> Option<Type> {
        self.tera.filter(|t| t.is_active).map(|t| t.tera_type)
    }

    pub fn is_terastallized(&self) -> bool {
        self.active_tera_type().is_some()
    }

    /// Defensive types: the tera type alone when terastallized, else natural
    /// types. A Stellar tera keeps the natural types.
    pub fn current_types(&self) -> Vec<Type> {
        match self.active_tera_type() {
            None | Some(Type::Stellar) => self.types.clone(),
            Some(tera) => vec![tera],
        }
    }

    /// Natural types; terastallization never changes these
    pub fn original_types(&self) -> &[Type] {
        &self.types
    }

    /// Same-type attack bonus: natural types, plus an active non-Stellar tera type
    pub fn has_stab(&self, move_type: Type) -> bool {
        self.types.contains(&move_type)
            || self
                .active_tera_type()
                .is_some_and(|tera| !tera.is_stellar() && tera == move_type)
    }

    /// Damaging (non-Status) moves
    pub fn damaging_moves(&self) -> impl Iterator<Item = &Move> {
        self.moves.iter().filter(|m| m.is_damaging())
    }
}
