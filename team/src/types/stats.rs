//! Stat tables and the stat formula

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::nature::Nature;

/// The six permanent stats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stat {
    Hp,
    Atk,
    Def,
    Spa,
    Spd,
    Spe,
}

impl Stat {
    pub const ALL: [Stat; 6] = [Stat::Hp, Stat::Atk, Stat::Def, Stat::Spa, Stat::Spd, Stat::Spe];
}

/// A complete stat table (base stats, IVs, EVs or final stats)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StatTable {
    pub hp: u16,
    pub atk: u16,
    pub def: u16,
    pub spa: u16,
    pub spd: u16,
    pub spe: u16,
}

impl StatTable {
    /// Same value for every stat
    pub const fn uniform(value: u16) -> Self {
        Self {
            hp: value,
            atk: value,
            def: value,
            spa: value,
            spd: value,
            spe: value,
        }
    }

    pub fn get(&self, stat: Stat) -> u16 {
        match stat {
            Stat::Hp => self.hp,
            Stat::Atk => self.atk,
            Stat::Def => self.def,
            Stat::Spa => self.spa,
            Stat::Spd => self.spd,
            Stat::Spe => self.spe,
        }
    }

    pub fn set(&mut self, stat: Stat, value: u16) {
        match stat {
            Stat::Hp => self.hp = value,
            Stat::Atk => self.atk = value,
            Stat::Def => self.def = value,
            Stat::Spa => self.spa = value,
            Stat::Spd => self.spd = value,
            Stat::Spe => self.spe = value,
        }
    }
}

/// A stat table where any stat may be left out (e.g. "EVs: 252 Atk / 252 Spe")
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct PartialStats {
    pub hp: Option<u16>,
    pub atk: Option<u16>,
    pub def: Option<u16>,
    pub spa: Option<u16>,
    pub spd: Option<u16>,
    pub spe: Option<u16>,
}

impl PartialStats {
    /// Fill missing stats from `defaults`
    pub fn fill(&self, defaults: &StatTable) -> StatTable {
        StatTable {
            hp: self.hp.unwrap_or(defaults.hp),
            atk: self.atk.unwrap_or(defaults.atk),
            def: self.def.unwrap_or(defaults.def),
            spa: self.spa.unwrap_or(defaults.spa),
            spd: self.spd.unwrap_or(defaults.spd),
            spe: self.spe.unwrap_or(defaults.spe),
        }
    }
}

impl From<StatTable> for PartialStats {
    fn from(table: StatTable) -> Self {
        Self {
            hp: Some(table.hp),
            atk: Some(table.atk),
            def: Some(table.def),
            spa: Some(table.spa),
            spd: Some(table.spd),
            spe: Some(table.spe),
        }
    }
}

/// Base stats used when a species cannot be resolved
pub const DEFAULT_BASE_STATS: StatTable = StatTable::uniform(100);

/// IVs used when none are given
pub const DEFAULT_IVS: StatTable = StatTable::uniform(31);

/// EVs used when none are given
pub const DEFAULT_EVS: StatTable = StatTable::uniform(0);

pub const DEFAULT_LEVEL: u8 = 50;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StatError {
    #[error("Invalid level: {0}. Level must be between 1 and 100")]
    InvalidLevel(u8),
}

/// Stat formula inputs after defaults have been applied
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StatInputs {
    pub base: StatTable,
    pub ivs: StatTable,
    pub evs: StatTable,
    pub level: u8,
    pub nature: Nature,
}

impl StatInputs {
    /// Apply the documented defaults to possibly-missing inputs.
    ///
    /// Missing base stats and unknown natures are logged; neither is an error.
    pub fn normalize(
        base: Option<&StatTable>,
        ivs: Option<&PartialStats>,
        evs: Option<&PartialStats>,
        level: u8,
        nature: Option<&str>,
    ) -> Result<Self, StatError> {
        if !(1..=100).contains(&level) {
            return Err(StatError::InvalidLevel(level));
        }

        let base = match base {
            Some(base) => *base,
            None => {
                tracing::warn!("base stats missing, using default values");
                DEFAULT_BASE_STATS
            }
        };

        let nature = match nature {
            None => Nature::Hardy,
            Some(name) => Nature::from_name(name).unwrap_or_else(|| {
                tracing::warn!(nature = %name, "unknown nature, using neutral modifier");
                Nature::Hardy
            }),
        };

        Ok(Self {
            base,
            ivs: ivs.map_or(DEFAULT_IVS, |ivs| ivs.fill(&DEFAULT_IVS)),
            evs: evs.map_or(DEFAULT_EVS, |evs| evs.fill(&DEFAULT_EVS)),
            level,
            nature,
        })
    }

    /// Run the stat formula
    pub fn compute(&self) -> StatTable {
        let mut stats = StatTable::default();
        for stat in Stat::ALL {
            let value = stat_value(
                stat,
                self.base.get(stat),
                self.ivs.get(stat),
                self.evs.get(stat),
                self.level,
                self.nature,
            );
            stats.set(stat, value);
        }
        stats
    }
}

/// Compute final stats.
///
/// HP: `floor(floor(2*base + iv + floor(ev/4)) * level/100 + 10 + level)`.
/// Others: `floor((floor(2*base + iv + floor(ev/4)) * level/100 + 5) * nature)`.
pub fn calculate_stats(
    base: Option<&StatTable>,
    ivs: Option<&PartialStats>,
    evs: Option<&PartialStats>,
    level: u8,
    nature: Option<&str>,
) -> Result<StatTable, StatError> {
    Ok(StatInputs::normalize(base, ivs, evs, level, nature)?.compute())
}

fn stat_value(stat: Stat, base: u16, iv: u16, ev: u16, level: u8, nature: Nature) -> u16 {
    let core = (2 * base as u32 + iv as u32 + ev as u32 / 4) as f64;
    let scaled = core * level as f64 / 100.0;

    let value = match stat {
        Stat::Hp => (scaled + 10.0 + level as f64).floor(),
        _ => ((scaled + 5.0) * nature.modifier(stat)).floor(),
    };
    value.clamp(0.0, u16::MAX as f64) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neutral_level_50() {
        let base = StatTable::uniform(100);
        let stats = calculate_stats(Some(&base), None, None, 50, Some("Hardy")).unwrap();

        // floor(231 * 50 / 100 + 60) = floor(175.5)
        assert_eq!(stats.hp, 175);
        // floor(115.5 + 5)
        assert_eq!(stats.atk, 120);
        assert_eq!(stats, StatTable { hp: 175, ..StatTable::uniform(120) });
    }

    #[test]
    fn test_adamant_boosts_atk_and_lowers_spa() {
        let base = StatTable::uniform(100);
        let stats = calculate_stats(Some(&base), None, None, 50, Some("Adamant")).unwrap();

        // pre-nature value is 120.5
        assert_eq!(stats.atk, 132);
        assert_eq!(stats.spa, 108);
        assert_eq!(stats.def, 120);
        assert_eq!(stats.hp, 175);
    }

    #[test]
    fn test_level_100_with_evs() {
        let base = StatTable { hp: 108, atk: 130, def: 95, spa: 80, spd: 85, spe: 102 };
        let evs = PartialStats { atk: Some(252), spe: Some(252), hp: Some(4), ..Default::default() };
        let stats = calculate_stats(Some(&base), None, Some(&evs), 100, Some("Jolly")).unwrap();

        // 2*108 + 31 + 1 = 248 -> 248 + 110
        assert_eq!(stats.hp, 358);
        // 2*130 + 31 + 63 = 354 -> 359
        assert_eq!(stats.atk, 359);
        // 2*102 + 31 + 63 = 298 -> 303 * 1.1
        assert_eq!(stats.spe, 333);
        // 2*80 + 31 = 191 -> 196 * 0.9
        assert_eq!(stats.spa, 176);
    }

    #[test]
    fn test_invalid_level() {
        assert_eq!(
            calculate_stats(None, None, None, 0, None),
            Err(StatError::InvalidLevel(0))
        );
        assert_eq!(
            calculate_stats(None, None, None, 101, None),
            Err(StatError::InvalidLevel(101))
        );
    }

    #[test]
    fn test_missing_inputs_use_defaults() {
        let stats = calculate_stats(None, None, None, 50, None).unwrap();
        assert_eq!(stats, StatTable { hp: 175, ..StatTable::uniform(120) });
    }

    #[test]
    fn test_unknown_nature_is_neutral() {
        let base = StatTable::uniform(100);
        let stats = calculate_stats(Some(&base), None, None, 50, Some("Grumpy")).unwrap();
        assert_eq!(stats.atk, 120);
        assert_eq!(stats.spa, 120);
    }

    #[test]
    fn test_partial_ivs_fill_missing() {
        let ivs = PartialStats { spe: Some(0), ..Default::default() };
        let filled = ivs.fill(&DEFAULT_IVS);
        assert_eq!(filled.spe, 0);
        assert_eq!(filled.atk, 31);
    }
}
