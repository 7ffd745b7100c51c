//! Species and move lookup
//!
//! The analysis engines never talk to a concrete data library. They see the
//! narrow [`Dex`] trait, which any backing store can implement.

mod cache;
mod resolve;

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{Move, StatTable, Type};

pub use cache::{CacheConfig, CachedDex};
pub use resolve::{resolve_member, resolve_team, PokemonSet};

#[derive(Error, Debug)]
pub enum DexError {
    #[error("Failed to parse dex data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid species {name}: {reason}")]
    InvalidSpecies { name: String, reason: String },
}

/// Species data needed for analysis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Species {
    pub name: String,
    pub types: Vec<Type>,
    pub base_stats: StatTable,
}

impl Species {
    pub fn new(name: impl Into<String>, types: impl Into<Vec<Type>>, base_stats: StatTable) -> Self {
        Self {
            name: name.into(),
            types: types.into(),
            base_stats,
        }
    }
}

/// Read access to species and move data
pub trait Dex: Send + Sync {
    fn species(&self, name: &str) -> Option<Species>;
    fn move_data(&self, name: &str) -> Option<Move>;
}

impl<D: Dex + ?Sized> Dex for &D {
    fn species(&self, name: &str) -> Option<Species> {
        (**self).species(name)
    }

    fn move_data(&self, name: &str) -> Option<Move> {
        (**self).move_data(name)
    }
}

impl<D: Dex + ?Sized> Dex for Arc<D> {
    fn species(&self, name: &str) -> Option<Species> {
        (**self).species(name)
    }

    fn move_data(&self, name: &str) -> Option<Move> {
        (**self).move_data(name)
    }
}

/// Normalize a display name to a lookup id ("Iron Ball" -> "ironball")
pub fn to_id(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

#[derive(Debug, Default, Deserialize)]
struct DexDocument {
    #[serde(default)]
    species: Vec<Species>,
    #[serde(default)]
    moves: Vec<Move>,
}

/// In-memory dex keyed by normalized id
#[derive(Debug, Clone, Default)]
pub struct MemoryDex {
    species: HashMap<String, Species>,
    moves: HashMap<String, Move>,
}

impl MemoryDex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from a JSON document of the form `{"species": [...], "moves": [...]}`
    pub fn from_json(json: &str) -> Result<Self, DexError> {
        let doc: DexDocument = serde_json::from_str(json)?;
        let mut dex = Self::new();
        for species in doc.species {
            dex.insert_species(species)?;
        }
        for mv in doc.moves {
            dex.insert_move(mv);
        }
        Ok(dex)
    }

    /// Add a species; it must have one or two standard types
    pub fn insert_species(&mut self, species: Species) -> Result<(), DexError> {
        if species.types.is_empty() || species.types.len() > 2 {
            return Err(DexError::InvalidSpecies {
                name: species.name,
                reason: format!("expected 1 or 2 types, got {}", species.types.len()),
            });
        }
        if species.types.contains(&Type::Stellar) {
            return Err(DexError::InvalidSpecies {
                name: species.name,
                reason: "Stellar is not a natural type".to_string(),
            });
        }
        self.species.insert(to_id(&species.name), species);
        Ok(())
    }

    pub fn insert_move(&mut self, mv: Move) {
        self.moves.insert(to_id(&mv.name), mv);
    }

    pub fn species_count(&self) -> usize {
        self.species.len()
    }

    pub fn move_count(&self) -> usize {
        self.moves.len()
    }
}

impl Dex for MemoryDex {
    fn species(&self, name: &str) -> Option<Species> {
        self.species.get(&to_id(name)).cloned()
    }

    fn move_data(&self, name: &str) -> Option<Move> {
        self.moves.get(&to_id(name)).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MoveCategory;

    const DEX_JSON: &str = r#"{
        "species": [
            {"name": "Garchomp", "types": ["Dragon", "Ground"],
             "baseStats": {"hp": 108, "atk": 130, "def": 95, "spa": 80, "spd": 85, "spe": 102}}
        ],
        "moves": [
            {"name": "Earthquake", "type": "Ground", "category": "Physical", "basePower": 100},
            {"name": "Swords Dance", "type": "Normal", "category": "Status"}
        ]
    }"#;

    #[test]
    fn test_to_id() {
        assert_eq!(to_id("Iron Ball"), "ironball");
        assert_eq!(to_id("U-turn"), "uturn");
        assert_eq!(to_id("Landorus-Therian"), "landorustherian");
    }

    #[test]
    fn test_from_json() {
        let dex = MemoryDex::from_json(DEX_JSON).unwrap();
        assert_eq!(dex.species_count(), 1);
        assert_eq!(dex.move_count(), 2);

        let chomp = dex.species("garchomp").unwrap();
        assert_eq!(chomp.types, vec![Type::Dragon, Type::Ground]);
        assert_eq!(chomp.base_stats.atk, 130);

        let sd = dex.move_data("swords-dance").unwrap();
        assert_eq!(sd.category, MoveCategory::Status);
        assert_eq!(sd.base_power, 0);
    }

    #[test]
    fn test_lookup_miss() {
        let dex = MemoryDex::from_json(DEX_JSON).unwrap();
        assert!(dex.species("Missingno").is_none());
        assert!(dex.move_data("Splash").is_none());
    }

    #[test]
    fn test_rejects_bad_species() {
        let mut dex = MemoryDex::new();
        let three = Species::new("Tri", [Type::Fire, Type::Water, Type::Grass], StatTable::uniform(80));
        assert!(matches!(
            dex.insert_species(three),
            Err(DexError::InvalidSpecies { .. })
        ));

        let stellar = Species::new("Star", [Type::Stellar], StatTable::uniform(80));
        assert!(dex.insert_species(stellar).is_err());
    }

    #[test]
    fn test_from_json_rejects_malformed() {
        assert!(matches!(
            MemoryDex::from_json("{\"species\": [{\"name\": 1}]}"),
            Err(DexError::Json(_))
        ));
    }
}
