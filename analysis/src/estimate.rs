//! Damage score used to rank moves
//!
//! Not battle math: no abilities, items, crits or random rolls. The score
//! only has to order moves sensibly.

use coverdex_team::{Move, MoveCategory, StatCalculator, StatTable, TeamMember, DEFAULT_LEVEL};
use serde::{Deserialize, Serialize};

pub const STAB_MULTIPLIER: f64 = 1.5;

/// Formula used for [`DamageEstimator::score`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DamageModel {
    /// `base power x effectiveness x STAB x attack / 100`
    #[default]
    Simple,
    /// The standard damage formula at the reference level against the
    /// reference defenses, floored
    Level50,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimatorConfig {
    /// Level at which attacker stats are computed
    pub reference_level: u8,
    pub reference_defense: u16,
    pub reference_special_defense: u16,
    pub model: DamageModel,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            reference_level: DEFAULT_LEVEL,
            reference_defense: 120,
            reference_special_defense: 120,
            model: DamageModel::Simple,
        }
    }
}

/// Scores moves of team members against the reference defender
pub struct DamageEstimator<'a> {
    calculator: &'a StatCalculator,
    config: &'a EstimatorConfig,
}

impl<'a> DamageEstimator<'a> {
    pub fn new(calculator: &'a StatCalculator, config: &'a EstimatorConfig) -> Self {
        Self { calculator, config }
    }

    /// Attacker stats at the reference level.
    ///
    /// An out-of-range reference level falls back to the default level.
    pub fn attacker_stats(&self, member: &TeamMember) -> StatTable {
        match self.calculator.member_stats(member, self.config.reference_level) {
            Ok(stats) => stats,
            Err(err) => {
                tracing::warn!(species = %member.species, error = %err, "using default level for damage estimate");
                self.calculator
                    .member_stats(member, DEFAULT_LEVEL)
                    .unwrap_or_else(|_| StatTable::uniform(0))
            }
        }
    }

    pub fn score(&self, mv: &Move, attacker: &StatTable, stab: bool, effectiveness: f32) -> f64 {
        let (attack, defense) = match mv.category {
            MoveCategory::Physical => (attacker.atk, self.config.reference_defense),
            _ => (attacker.spa, self.config.reference_special_defense),
        };
        let stab_mult = if stab { STAB_MULTIPLIER } else { 1.0 };
        let total_mult = stab_mult * f64::from(effectiveness);
        let power = f64::from(mv.base_power);

        match self.config.model {
            DamageModel::Simple => power * total_mult * f64::from(attack) / 100.0,
            DamageModel::Level50 => {
                let level = f64::from(self.config.reference_level);
                let ratio = f64::from(attack) / f64::from(defense.max(1));
                (((2.0 * level + 10.0) / 250.0 * ratio * power + 2.0) * total_mult).floor()
            }
        }
    }
}
