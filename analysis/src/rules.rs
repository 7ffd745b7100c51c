//! Modifier rule tables
//!
//! Abilities, items, weather, terrain and the Ring Target exemptions that
//! adjust a defender's multiplier on top of the type chart. Tables are keyed
//! by lookup id (see [`to_id`]), so "Air Balloon" and "airballoon" match.

use std::collections::HashMap;
use std::sync::OnceLock;

use coverdex_team::{to_id, TeamMember, Type};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::conditions::{Terrain, Weather};

#[derive(Error, Debug)]
pub enum RulesError {
    #[error("Failed to parse modifier rules: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid multiplier {factor} for {attack} in {table} entry {name}")]
    InvalidMultiplier {
        table: &'static str,
        name: String,
        attack: Type,
        factor: f32,
    },
}

/// Defensive effect of an ability
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AbilityEffect {
    /// Attacking types the ability makes the holder immune to
    pub immunities: Vec<Type>,
    /// Per-type multipliers for attacks not covered by `immunities`
    pub multipliers: HashMap<Type, f32>,
    /// Lifts the holder off the ground (Levitate)
    pub airborne: bool,
}

/// Items that need their own code path in the resistance engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SpecialHandling {
    /// Grounds the holder and cancels its Ground immunity
    IronBall,
    /// Removes the type-based immunity listed in the Ring Target map
    RingTarget,
    /// Ignores plain sun and rain
    UtilityUmbrella,
}

/// Defensive effect of a held item
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ItemEffect {
    pub immunities: Vec<Type>,
    pub multipliers: HashMap<Type, f32>,
    pub special: Option<SpecialHandling>,
    /// Lifts the holder off the ground (Air Balloon)
    pub airborne: bool,
}

/// What a terrain does to grounded Pokemon
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "effect", rename_all = "camelCase")]
pub enum TerrainEffect {
    /// Grounded attackers hit harder with `attack` moves. Shown as an extra
    /// "(Grounded)" row in the resistance table.
    GroundedBoost { attack: Type, factor: f32 },
    /// Grounded defenders take reduced damage from `attack` moves
    GroundedGuard { attack: Type, factor: f32 },
}

impl TerrainEffect {
    pub fn attack(&self) -> Type {
        match self {
            TerrainEffect::GroundedBoost { attack, .. } | TerrainEffect::GroundedGuard { attack, .. } => {
                *attack
            }
        }
    }

    pub fn factor(&self) -> f32 {
        match self {
            TerrainEffect::GroundedBoost { factor, .. } | TerrainEffect::GroundedGuard { factor, .. } => {
                *factor
            }
        }
    }
}

/// All modifier tables used by the resistance engine
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ModifierRules {
    pub abilities: HashMap<String, AbilityEffect>,
    pub items: HashMap<String, ItemEffect>,
    pub weather: HashMap<Weather, HashMap<Type, f32>>,
    pub terrain: HashMap<Terrain, TerrainEffect>,
    /// Attacking type -> defending type whose immunity Ring Target removes
    pub ring_target: HashMap<Type, Type>,
}

impl ModifierRules {
    /// Built-in generation 9 tables, built on first use
    pub fn standard() -> &'static ModifierRules {
        static STANDARD: OnceLock<ModifierRules> = OnceLock::new();
        STANDARD.get_or_init(build_standard)
    }

    /// Load tables from a JSON document. Names are normalized to lookup ids.
    pub fn from_json(json: &str) -> Result<Self, RulesError> {
        let rules: ModifierRules = serde_json::from_str(json)?;
        rules.validate()?;
        Ok(rules.normalized())
    }

    fn validate(&self) -> Result<(), RulesError> {
        let check = |table: &'static str, name: &str, multipliers: &HashMap<Type, f32>| {
            for (&attack, &factor) in multipliers {
                if !factor.is_finite() || factor < 0.0 {
                    return Err(RulesError::InvalidMultiplier {
                        table,
                        name: name.to_string(),
                        attack,
                        factor,
                    });
                }
            }
            Ok(())
        };

        for (name, effect) in &self.abilities {
            check("ability", name, &effect.multipliers)?;
        }
        for (name, effect) in &self.items {
            check("item", name, &effect.multipliers)?;
        }
        for (weather, multipliers) in &self.weather {
            check("weather", weather.as_str(), multipliers)?;
        }
        for (terrain, effect) in &self.terrain {
            let factor = effect.factor();
            if !factor.is_finite() || factor < 0.0 {
                return Err(RulesError::InvalidMultiplier {
                    table: "terrain",
                    name: terrain.as_str().to_string(),
                    attack: effect.attack(),
                    factor,
                });
            }
        }
        Ok(())
    }

    fn normalized(self) -> Self {
        Self {
            abilities: self
                .abilities
                .into_iter()
                .map(|(name, effect)| (to_id(&name), effect))
                .collect(),
            items: self
                .items
                .into_iter()
                .map(|(name, effect)| (to_id(&name), effect))
                .collect(),
            ..self
        }
    }

    pub fn ability(&self, name: Option<&str>) -> Option<&AbilityEffect> {
        self.abilities.get(&to_id(name?))
    }

    pub fn item(&self, name: Option<&str>) -> Option<&ItemEffect> {
        self.items.get(&to_id(name?))
    }

    pub fn ability_grants_immunity(&self, ability: Option<&str>, attack: Type) -> bool {
        self.ability(ability)
            .is_some_and(|effect| effect.immunities.contains(&attack))
    }

    /// 0 if the ability grants immunity, its listed multiplier if any, else 1
    pub fn ability_multiplier(&self, ability: Option<&str>, attack: Type) -> f32 {
        let Some(effect) = self.ability(ability) else {
            return 1.0;
        };
        if effect.immunities.contains(&attack) {
            return 0.0;
        }
        effect.multipliers.get(&attack).copied().unwrap_or(1.0)
    }

    /// 0 if the item grants immunity, its listed multiplier if any, else 1
    pub fn item_multiplier(&self, item: Option<&str>, attack: Type) -> f32 {
        let Some(effect) = self.item(item) else {
            return 1.0;
        };
        if effect.immunities.contains(&attack) {
            return 0.0;
        }
        effect.multipliers.get(&attack).copied().unwrap_or(1.0)
    }

    pub fn item_special(&self, item: Option<&str>) -> Option<SpecialHandling> {
        self.item(item).and_then(|effect| effect.special)
    }

    pub fn weather_factor(&self, weather: Weather, attack: Type) -> f32 {
        self.weather
            .get(&weather)
            .and_then(|factors| factors.get(&attack))
            .copied()
            .unwrap_or(1.0)
    }

    pub fn terrain_effect(&self, terrain: Terrain) -> Option<TerrainEffect> {
        self.terrain.get(&terrain).copied()
    }

    /// Defending type that loses its immunity to `attack` under Ring Target
    pub fn ring_target_exemption(&self, attack: Type) -> Option<Type> {
        self.ring_target.get(&attack).copied()
    }

    /// Whether the member touches the ground.
    ///
    /// Uses natural types: terastallizing never lifts or grounds a Pokemon.
    /// Iron Ball grounds its holder regardless of anything else.
    pub fn is_grounded(&self, member: &TeamMember) -> bool {
        let item = self.item(member.item.as_deref());
        if item.is_some_and(|effect| effect.special == Some(SpecialHandling::IronBall)) {
            return true;
        }

        let flying = member.original_types().contains(&Type::Flying);
        let levitating = self
            .ability(member.ability.as_deref())
            .is_some_and(|effect| effect.airborne);
        let floating = item.is_some_and(|effect| effect.airborne);

        !flying && !levitating && !floating
    }
}

fn immune_to(attack: Type) -> AbilityEffect {
    AbilityEffect {
        immunities: vec![attack],
        ..Default::default()
    }
}

fn build_standard() -> ModifierRules {
    let mut abilities = HashMap::new();
    abilities.insert(
        to_id("Levitate"),
        AbilityEffect {
            airborne: true,
            ..immune_to(Type::Ground)
        },
    );
    for (name, attack) in [
        ("Volt Absorb", Type::Electric),
        ("Motor Drive", Type::Electric),
        ("Lightning Rod", Type::Electric),
        ("Storm Drain", Type::Water),
        ("Water Absorb", Type::Water),
        ("Flash Fire", Type::Fire),
        ("Well-Baked Body", Type::Fire),
        ("Sap Sipper", Type::Grass),
        ("Earth Eater", Type::Ground),
    ] {
        abilities.insert(to_id(name), immune_to(attack));
    }
    abilities.insert(
        to_id("Dry Skin"),
        AbilityEffect {
            multipliers: HashMap::from([(Type::Water, 0.0), (Type::Fire, 1.25)]),
            ..Default::default()
        },
    );

    let mut items = HashMap::new();
    items.insert(
        to_id("Air Balloon"),
        ItemEffect {
            immunities: vec![Type::Ground],
            airborne: true,
            ..Default::default()
        },
    );
    for (name, special) in [
        ("Iron Ball", SpecialHandling::IronBall),
        ("Ring Target", SpecialHandling::RingTarget),
        ("Utility Umbrella", SpecialHandling::UtilityUmbrella),
    ] {
        items.insert(
            to_id(name),
            ItemEffect {
                special: Some(special),
                ..Default::default()
            },
        );
    }

    let weather = HashMap::from([
        (Weather::Rain, HashMap::from([(Type::Water, 1.5), (Type::Fire, 0.5)])),
        (Weather::HeavyRain, HashMap::from([(Type::Water, 1.5), (Type::Fire, 0.0)])),
        (Weather::Sun, HashMap::from([(Type::Fire, 1.5), (Type::Water, 0.5)])),
        (Weather::HarshSun, HashMap::from([(Type::Fire, 1.5), (Type::Water, 0.0)])),
        // Delta Stream only blunts super effective hits on Flying; every factor is neutral
        (
            Weather::StrongWinds,
            HashMap::from([(Type::Electric, 1.0), (Type::Ice, 1.0), (Type::Rock, 1.0)]),
        ),
    ]);

    let terrain = HashMap::from([
        (
            Terrain::Electric,
            TerrainEffect::GroundedBoost {
                attack: Type::Electric,
                factor: 1.3,
            },
        ),
        (
            Terrain::Grassy,
            TerrainEffect::GroundedBoost {
                attack: Type::Grass,
                factor: 1.3,
            },
        ),
        (
            Terrain::Psychic,
            TerrainEffect::GroundedBoost {
                attack: Type::Psychic,
                factor: 1.3,
            },
        ),
        (
            Terrain::Misty,
            TerrainEffect::GroundedGuard {
                attack: Type::Dragon,
                factor: 0.5,
            },
        ),
    ]);

    let ring_target = HashMap::from([
        (Type::Psychic, Type::Dark),
        (Type::Poison, Type::Steel),
        (Type::Fighting, Type::Ghost),
        (Type::Normal, Type::Ghost),
        (Type::Ghost, Type::Normal),
        (Type::Electric, Type::Ground),
        (Type::Dragon, Type::Fairy),
        (Type::Ground, Type::Flying),
    ]);

    ModifierRules {
        abilities,
        items,
        weather,
        terrain,
        ring_target,
    }
}
