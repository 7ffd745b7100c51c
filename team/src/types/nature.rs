//! Natures and their stat modifiers

use serde::{Deserialize, Serialize};

use super::stats::Stat;

pub const NATURE_BOOST: f64 = 1.1;
pub const NATURE_REDUCTION: f64 = 0.9;
pub const NATURE_NEUTRAL: f64 = 1.0;

/// The 25 natures: 20 that raise one stat and lower another, 5 neutral
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Nature {
    // +Atk
    Lonely,
    Adamant,
    Naughty,
    Brave,
    // +Def
    Bold,
    Impish,
    Lax,
    Relaxed,
    // +SpA
    Modest,
    Mild,
    Rash,
    Quiet,
    // +SpD
    Calm,
    Gentle,
    Careful,
    Sassy,
    // +Spe
    Timid,
    Hasty,
    Jolly,
    Naive,
    // Neutral
    Hardy,
    Docile,
    Bashful,
    Quirky,
    Serious,
}

impl Nature {
    pub const ALL: [Nature; 25] = [
        Nature::Lonely,
        Nature::Adamant,
        Nature::Naughty,
        Nature::Brave,
        Nature::Bold,
        Nature::Impish,
        Nature::Lax,
        Nature::Relaxed,
        Nature::Modest,
        Nature::Mild,
        Nature::Rash,
        Nature::Quiet,
        Nature::Calm,
        Nature::Gentle,
        Nature::Careful,
        Nature::Sassy,
        Nature::Timid,
        Nature::Hasty,
        Nature::Jolly,
        Nature::Naive,
        Nature::Hardy,
        Nature::Docile,
        Nature::Bashful,
        Nature::Quirky,
        Nature::Serious,
    ];

    /// Parse a nature name (case-insensitive)
    pub fn from_name(s: &str) -> Option<Self> {
        let name = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|n| n.as_str().eq_ignore_ascii_case(name))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Nature::Lonely => "Lonely",
            Nature::Adamant => "Adamant",
            Nature::Naughty => "Naughty",
            Nature::Brave => "Brave",
            Nature::Bold => "Bold",
            Nature::Impish => "Impish",
            Nature::Lax => "Lax",
            Nature::Relaxed => "Relaxed",
            Nature::Modest => "Modest",
            Nature::Mild => "Mild",
            Nature::Rash => "Rash",
            Nature::Quiet => "Quiet",
            Nature::Calm => "Calm",
            Nature::Gentle => "Gentle",
            Nature::Careful => "Careful",
            Nature::Sassy => "Sassy",
            Nature::Timid => "Timid",
            Nature::Hasty => "Hasty",
            Nature::Jolly => "Jolly",
            Nature::Naive => "Naive",
            Nature::Hardy => "Hardy",
            Nature::Docile => "Docile",
            Nature::Bashful => "Bashful",
            Nature::Quirky => "Quirky",
            Nature::Serious => "Serious",
        }
    }

    /// The (raised, lowered) stat pair, `None` for neutral natures
    pub fn effect(&self) -> Option<(Stat, Stat)> {
        use Stat::*;
        match self {
            Nature::Lonely => Some((Atk, Def)),
            Nature::Adamant => Some((Atk, Spa)),
            Nature::Naughty => Some((Atk, Spd)),
            Nature::Brave => Some((Atk, Spe)),
            Nature::Bold => Some((Def, Atk)),
            Nature::Impish => Some((Def, Spa)),
            Nature::Lax => Some((Def, Spd)),
            Nature::Relaxed => Some((Def, Spe)),
            Nature::Modest => Some((Spa, Atk)),
            Nature::Mild => Some((Spa, Def)),
            Nature::Rash => Some((Spa, Spd)),
            Nature::Quiet => Some((Spa, Spe)),
            Nature::Calm => Some((Spd, Atk)),
            Nature::Gentle => Some((Spd, Def)),
            Nature::Careful => Some((Spd, Spa)),
            Nature::Sassy => Some((Spd, Spe)),
            Nature::Timid => Some((Spe, Atk)),
            Nature::Hasty => Some((Spe, Def)),
            Nature::Jolly => Some((Spe, Spa)),
            Nature::Naive => Some((Spe, Spd)),
            Nature::Hardy | Nature::Docile | Nature::Bashful | Nature::Quirky | Nature::Serious => {
                None
            }
        }
    }

    /// Multiplier this nature applies to `stat`
    pub fn modifier(&self, stat: Stat) -> f64 {
        match self.effect() {
            Some((up, _)) if up == stat => NATURE_BOOST,
            Some((_, down)) if down == stat => NATURE_REDUCTION,
            _ => NATURE_NEUTRAL,
        }
    }
}

impl std::fmt::Display for Nature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
