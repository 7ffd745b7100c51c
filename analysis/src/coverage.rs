//! Offensive coverage analysis
//!
//! For every defending type combination, the team's damaging moves are
//! sorted into eight buckets (physical/special by effectiveness tier) and
//! ranked by estimated damage.

use coverdex_team::{Dex, Move, MoveCategory, StatCalculator, StatTable, TeamMember, Type, TypeChart};
use serde::{Deserialize, Serialize};

use crate::config::AnalysisConfig;
use crate::estimate::DamageEstimator;

/// Effectiveness tier, best first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CoverageLevel {
    Effective,
    Neutral,
    Resistant,
    Immune,
}

impl CoverageLevel {
    pub const PRIORITY: [CoverageLevel; 4] = [
        CoverageLevel::Effective,
        CoverageLevel::Neutral,
        CoverageLevel::Resistant,
        CoverageLevel::Immune,
    ];

    pub fn of(effectiveness: f32) -> Self {
        if effectiveness == 0.0 {
            CoverageLevel::Immune
        } else if effectiveness < 1.0 {
            CoverageLevel::Resistant
        } else if effectiveness == 1.0 {
            CoverageLevel::Neutral
        } else {
            CoverageLevel::Effective
        }
    }
}

/// A move annotated for one defender
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveEffectiveness {
    #[serde(rename = "move")]
    pub move_data: Move,
    pub effectiveness: f32,
    /// Index of the move's user in the analyzed team
    pub member_index: usize,
    pub species: String,
    pub stab: bool,
    pub damage_score: f64,
}

/// Moves of one tier, best first, capped
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MoveBucket {
    pub moves: Vec<MoveEffectiveness>,
    /// Number of moves before the cap was applied
    pub total: usize,
}

impl MoveBucket {
    fn finish(&mut self, top_n: usize) {
        self.moves
            .sort_by(|a, b| b.damage_score.total_cmp(&a.damage_score));
        self.total = self.moves.len();
        self.moves.truncate(top_n);
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    pub fn top_score(&self) -> Option<f64> {
        self.moves.first().map(|m| m.damage_score)
    }
}

/// The four tiers for one damage category
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CategoryCoverage {
    pub effective: MoveBucket,
    pub neutral: MoveBucket,
    pub resistant: MoveBucket,
    pub immune: MoveBucket,
}

impl CategoryCoverage {
    pub fn bucket(&self, level: CoverageLevel) -> &MoveBucket {
        match level {
            CoverageLevel::Effective => &self.effective,
            CoverageLevel::Neutral => &self.neutral,
            CoverageLevel::Resistant => &self.resistant,
            CoverageLevel::Immune => &self.immune,
        }
    }

    fn bucket_mut(&mut self, level: CoverageLevel) -> &mut MoveBucket {
        match level {
            CoverageLevel::Effective => &mut self.effective,
            CoverageLevel::Neutral => &mut self.neutral,
            CoverageLevel::Resistant => &mut self.resistant,
            CoverageLevel::Immune => &mut self.immune,
        }
    }

    /// Best non-empty tier
    pub fn level(&self) -> Option<CoverageLevel> {
        CoverageLevel::PRIORITY
            .into_iter()
            .find(|&level| !self.bucket(level).is_empty())
    }

    /// Size of the best tier times its top damage score (0 when immune or empty)
    pub fn score(&self) -> f64 {
        match self.level() {
            None | Some(CoverageLevel::Immune) => 0.0,
            Some(level) => {
                let bucket = self.bucket(level);
                bucket.total as f64 * bucket.top_score().unwrap_or(0.0)
            }
        }
    }

    fn finish(&mut self, top_n: usize) {
        for level in CoverageLevel::PRIORITY {
            self.bucket_mut(level).finish(top_n);
        }
    }
}

/// Coverage of one defending type combination
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverageUnit {
    pub type1: Type,
    /// Equal to `type1` for a monotype defender
    pub type2: Type,
    pub physical: CategoryCoverage,
    pub special: CategoryCoverage,
    pub level: Option<CoverageLevel>,
    pub score: f64,
    pub level_physical: Option<CoverageLevel>,
    pub score_physical: f64,
    pub level_special: Option<CoverageLevel>,
    pub score_special: f64,
}

impl CoverageUnit {
    fn new(type1: Type, type2: Type) -> Self {
        Self {
            type1,
            type2,
            physical: CategoryCoverage::default(),
            special: CategoryCoverage::default(),
            level: None,
            score: 0.0,
            level_physical: None,
            score_physical: 0.0,
            level_special: None,
            score_special: 0.0,
        }
    }

    pub fn defending_types(&self) -> Vec<Type> {
        if self.type1 == self.type2 {
            vec![self.type1]
        } else {
            vec![self.type1, self.type2]
        }
    }

    pub fn category(&self, category: MoveCategory) -> Option<&CategoryCoverage> {
        match category {
            MoveCategory::Physical => Some(&self.physical),
            MoveCategory::Special => Some(&self.special),
            MoveCategory::Status => None,
        }
    }

    fn push(&mut self, info: MoveEffectiveness) {
        let level = CoverageLevel::of(info.effectiveness);
        let category = match info.move_data.category {
            MoveCategory::Physical => &mut self.physical,
            MoveCategory::Special => &mut self.special,
            MoveCategory::Status => return,
        };
        category.bucket_mut(level).moves.push(info);
    }

    fn finish(&mut self, top_n: usize) {
        self.physical.finish(top_n);
        self.special.finish(top_n);

        self.level_physical = self.physical.level();
        self.score_physical = self.physical.score();
        self.level_special = self.special.level();
        self.score_special = self.special.score();

        self.level = CoverageLevel::PRIORITY.into_iter().find(|&level| {
            !self.physical.bucket(level).is_empty() || !self.special.bucket(level).is_empty()
        });
        self.score = match self.level {
            None | Some(CoverageLevel::Immune) => 0.0,
            Some(level) => {
                let physical = self.physical.bucket(level);
                let special = self.special.bucket(level);
                let top = physical
                    .top_score()
                    .unwrap_or(0.0)
                    .max(special.top_score().unwrap_or(0.0));
                (physical.total + special.total) as f64 * top
            }
        };
    }
}

/// Units for every unordered pair of standard types
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CoverageMatrix {
    units: Vec<CoverageUnit>,
}

impl CoverageMatrix {
    /// Unit for a type combination, in either order
    pub fn unit(&self, a: Type, b: Type) -> Option<&CoverageUnit> {
        let (type1, type2) = ordered(a, b);
        self.units
            .iter()
            .find(|unit| unit.type1 == type1 && unit.type2 == type2)
    }

    pub fn units(&self) -> &[CoverageUnit] {
        &self.units
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

/// Best moves of the team against one reference species
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReferenceCoverage {
    pub species: String,
    pub types: Vec<Type>,
    pub physical: Vec<MoveEffectiveness>,
    pub special: Vec<MoveEffectiveness>,
    pub overall: Vec<MoveEffectiveness>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverageAnalysis {
    pub type_coverage_matrix: CoverageMatrix,
    pub popular_pokemon_coverage: Vec<ReferenceCoverage>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoverageOptions {
    /// Only analyze this combination instead of the full matrix
    pub combination: Option<(Type, Type)>,
}

impl CoverageOptions {
    pub fn combination(a: Type, b: Type) -> Self {
        Self {
            combination: Some((a, b)),
        }
    }
}

fn ordered(a: Type, b: Type) -> (Type, Type) {
    if a <= b { (a, b) } else { (b, a) }
}

/// All 171 combinations `(t1, t2)` with `t1 <= t2` in canonical order
pub fn type_combinations() -> Vec<(Type, Type)> {
    let types = Type::all();
    types
        .iter()
        .enumerate()
        .flat_map(|(i, &t1)| types[i..].iter().map(move |&t2| (t1, t2)))
        .collect()
}

struct Attacker<'t> {
    index: usize,
    member: &'t TeamMember,
    stats: StatTable,
}

/// Coverage engine over a type chart and a species/move source
pub struct CoverageAnalyzer<'a> {
    chart: &'a dyn TypeChart,
    dex: &'a dyn Dex,
    calculator: &'a StatCalculator,
    config: &'a AnalysisConfig,
}

impl<'a> CoverageAnalyzer<'a> {
    pub fn new(
        chart: &'a dyn TypeChart,
        dex: &'a dyn Dex,
        calculator: &'a StatCalculator,
        config: &'a AnalysisConfig,
    ) -> Self {
        Self {
            chart,
            dex,
            calculator,
            config,
        }
    }

    pub fn analyze(&self, team: &[TeamMember], options: &CoverageOptions) -> CoverageAnalysis {
        tracing::debug!(
            team_size = team.len(),
            combination = ?options.combination,
            "analyzing coverage"
        );

        let estimator = DamageEstimator::new(self.calculator, &self.config.estimator);
        let attackers: Vec<Attacker<'_>> = team
            .iter()
            .enumerate()
            .map(|(index, member)| Attacker {
                index,
                member,
                stats: estimator.attacker_stats(member),
            })
            .collect();

        let combinations = match options.combination {
            Some((a, b)) if a.is_stellar() || b.is_stellar() => {
                tracing::warn!(type1 = %a, type2 = %b, "Stellar is not a defending type");
                Vec::new()
            }
            Some((a, b)) => vec![ordered(a, b)],
            None => type_combinations(),
        };

        let units = combinations
            .into_iter()
            .map(|(type1, type2)| self.unit(&estimator, &attackers, type1, type2))
            .collect();

        CoverageAnalysis {
            type_coverage_matrix: CoverageMatrix { units },
            popular_pokemon_coverage: self.reference_coverage(&estimator, &attackers),
        }
    }

    fn unit(&self, estimator: &DamageEstimator<'_>, attackers: &[Attacker<'_>], type1: Type, type2: Type) -> CoverageUnit {
        let mut unit = CoverageUnit::new(type1, type2);
        let defending = unit.defending_types();

        for attacker in attackers {
            for mv in attacker.member.damaging_moves() {
                unit.push(self.annotate(estimator, attacker, mv, &defending));
            }
        }

        unit.finish(self.config.coverage.top_n);
        unit
    }

    fn annotate(
        &self,
        estimator: &DamageEstimator<'_>,
        attacker: &Attacker<'_>,
        mv: &Move,
        defending: &[Type],
    ) -> MoveEffectiveness {
        let effectiveness = self.chart.effectiveness(mv.move_type, defending);
        let stab = attacker.member.has_stab(mv.move_type);
        MoveEffectiveness {
            move_data: mv.clone(),
            effectiveness,
            member_index: attacker.index,
            species: attacker.member.species.clone(),
            stab,
            damage_score: estimator.score(mv, &attacker.stats, stab, effectiveness),
        }
    }

    fn reference_coverage(&self, estimator: &DamageEstimator<'_>, attackers: &[Attacker<'_>]) -> Vec<ReferenceCoverage> {
        let top_n = self.config.coverage.top_n;
        let mut coverage = Vec::new();

        for name in &self.config.coverage.reference_species {
            let Some(species) = self.dex.species(name) else {
                tracing::warn!(species = %name, "reference species not found");
                continue;
            };

            let mut physical = Vec::new();
            let mut special = Vec::new();
            let mut overall = Vec::new();
            for attacker in attackers {
                for mv in attacker.member.damaging_moves() {
                    let info = self.annotate(estimator, attacker, mv, &species.types);
                    match mv.category {
                        MoveCategory::Physical => physical.push(info.clone()),
                        _ => special.push(info.clone()),
                    }
                    overall.push(info);
                }
            }

            for list in [&mut physical, &mut special, &mut overall] {
                list.sort_by(|a, b| {
                    b.effectiveness
                        .total_cmp(&a.effectiveness)
                        .then_with(|| b.damage_score.total_cmp(&a.damage_score))
                });
                list.truncate(top_n);
            }

            coverage.push(ReferenceCoverage {
                species: species.name,
                types: species.types,
                physical,
                special,
                overall,
            });
        }

        coverage
    }
}
