//! Defensive resistance analysis
//!
//! For every attacking type and every team member, the final damage
//! multiplier is the type chart result adjusted by ability, held item,
//! weather and terrain. Rows are then grouped by multiplier and summarized
//! into team-wide weaknesses, resistances and immunities.

use std::borrow::Cow;
use std::fmt;

use coverdex_team::{StandardChart, TeamMember, Type, TypeChart};
use serde::{Deserialize, Serialize};

use crate::conditions::{Terrain, Weather};
use crate::rules::{ModifierRules, SpecialHandling, TerrainEffect};

/// One attacking row of the resistance table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttackType {
    Plain(Type),
    /// `Type` moves used by a grounded attacker on a boosting terrain
    Grounded(Type),
}

impl AttackType {
    pub fn base_type(&self) -> Type {
        match self {
            AttackType::Plain(t) | AttackType::Grounded(t) => *t,
        }
    }

    pub fn is_grounded(&self) -> bool {
        matches!(self, AttackType::Grounded(_))
    }
}

impl From<Type> for AttackType {
    fn from(t: Type) -> Self {
        AttackType::Plain(t)
    }
}

impl fmt::Display for AttackType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttackType::Plain(t) => write!(f, "{t}"),
            AttackType::Grounded(t) => write!(f, "{t} (Grounded)"),
        }
    }
}

/// Terastallize one member for a single analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeraOverride {
    pub index: usize,
    pub tera_type: Type,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResistanceOptions {
    pub weather: Option<Weather>,
    pub terrain: Option<Terrain>,
    pub terastallization: Option<TeraOverride>,
}

impl ResistanceOptions {
    pub fn with_weather(mut self, weather: Weather) -> Self {
        self.weather = Some(weather);
        self
    }

    pub fn with_terrain(mut self, terrain: Terrain) -> Self {
        self.terrain = Some(terrain);
        self
    }

    pub fn with_terastallization(mut self, index: usize, tera_type: Type) -> Self {
        self.terastallization = Some(TeraOverride { index, tera_type });
        self
    }
}

/// A team member as referenced by the result
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberRef {
    /// Position in the analyzed team
    pub index: usize,
    pub name: String,
    pub species: String,
    pub ability: Option<String>,
    pub item: Option<String>,
    pub tera_type: Option<Type>,
}

impl MemberRef {
    fn new(index: usize, member: &TeamMember) -> Self {
        Self {
            index,
            name: member.name().to_string(),
            species: member.species.clone(),
            ability: member.ability.clone(),
            item: member.item.clone(),
            tera_type: member.active_tera_type(),
        }
    }

    pub fn is_terastallized(&self) -> bool {
        self.tera_type.is_some()
    }
}

/// Members sharing one multiplier
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MultiplierGroup {
    pub multiplier: f32,
    /// Member indices, ascending
    pub members: Vec<usize>,
}

/// Multipliers of every member against one attacking type
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeResistanceRow {
    pub attack: AttackType,
    /// Final multiplier per member, indexed like the team
    pub multipliers: Vec<f32>,
    /// Members grouped by multiplier, ascending
    pub groups: Vec<MultiplierGroup>,
    /// Members resisting (including immune) minus members weak
    pub resistance_level: i32,
}

impl TypeResistanceRow {
    fn new(attack: AttackType, multipliers: Vec<f32>) -> Self {
        let mut row = Self {
            attack,
            multipliers,
            groups: Vec::new(),
            resistance_level: 0,
        };
        row.regroup();
        row
    }

    /// Rebuild groups and level after the multipliers changed
    fn regroup(&mut self) {
        let mut order: Vec<usize> = (0..self.multipliers.len()).collect();
        order.sort_by(|&a, &b| self.multipliers[a].total_cmp(&self.multipliers[b]));

        let mut groups: Vec<MultiplierGroup> = Vec::new();
        for index in order {
            let multiplier = self.multipliers[index];
            match groups.last_mut() {
                Some(group) if group.multiplier == multiplier => group.members.push(index),
                _ => groups.push(MultiplierGroup {
                    multiplier,
                    members: vec![index],
                }),
            }
        }

        self.groups = groups;
        self.resistance_level = resistance_level(&self.multipliers);
    }

    pub fn multiplier(&self, index: usize) -> Option<f32> {
        self.multipliers.get(index).copied()
    }
}

/// +1 per member taking less than neutral damage (immune included), -1 per weak member
pub fn resistance_level(multipliers: &[f32]) -> i32 {
    multipliers
        .iter()
        .map(|&m| {
            if m < 1.0 {
                1
            } else if m > 1.0 {
                -1
            } else {
                0
            }
        })
        .sum()
}

/// One attacking type in a summary list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryEntry {
    pub attack: AttackType,
    pub members: Vec<usize>,
    pub weight: f32,
}

impl SummaryEntry {
    fn new(attack: AttackType) -> Self {
        Self {
            attack,
            members: Vec::new(),
            weight: 0.0,
        }
    }

    pub fn count(&self) -> usize {
        self.members.len()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResistanceSummary {
    pub total_types: usize,
    pub team_size: usize,
    pub weaknesses: Vec<SummaryEntry>,
    pub resistances: Vec<SummaryEntry>,
    pub immunities: Vec<SummaryEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResistanceAnalysis {
    pub summary: ResistanceSummary,
    pub type_resistances: Vec<TypeResistanceRow>,
    pub pokemon_data: Vec<MemberRef>,
}

impl ResistanceAnalysis {
    pub fn row(&self, attack: impl Into<AttackType>) -> Option<&TypeResistanceRow> {
        let attack = attack.into();
        self.type_resistances.iter().find(|row| row.attack == attack)
    }

    /// Final multiplier of the member at `index` against `attack`
    pub fn member_multiplier(&self, index: usize, attack: impl Into<AttackType>) -> Option<f32> {
        self.row(attack)?.multiplier(index)
    }

    /// Team resistance level against `attack`
    pub fn resistance_level(&self, attack: impl Into<AttackType>) -> Option<i32> {
        self.row(attack).map(|row| row.resistance_level)
    }
}

/// Base multiplier of a member against a Stellar attack: doubled once
/// terastallized (into any type, Stellar included), neutral otherwise
pub fn base_universal_type_multiplier(member: &TeamMember) -> f32 {
    if member.is_terastallized() { 2.0 } else { 1.0 }
}

/// Resistance engine over a type chart and a set of modifier rules
pub struct ResistanceAnalyzer<'a> {
    chart: &'a dyn TypeChart,
    rules: &'a ModifierRules,
}

impl Default for ResistanceAnalyzer<'static> {
    fn default() -> Self {
        Self::new(&StandardChart, ModifierRules::standard())
    }
}

impl<'a> ResistanceAnalyzer<'a> {
    pub fn new(chart: &'a dyn TypeChart, rules: &'a ModifierRules) -> Self {
        Self { chart, rules }
    }

    pub fn analyze(&self, team: &[TeamMember], options: &ResistanceOptions) -> ResistanceAnalysis {
        tracing::debug!(
            team_size = team.len(),
            weather = ?options.weather,
            terrain = ?options.terrain,
            "analyzing resistances"
        );

        let members = with_tera_override(team, options.terastallization);
        let boost = options
            .terrain
            .and_then(|terrain| self.rules.terrain_effect(terrain))
            .and_then(|effect| match effect {
                TerrainEffect::GroundedBoost { attack, factor } => Some((attack, factor)),
                TerrainEffect::GroundedGuard { .. } => None,
            });

        let mut rows: Vec<TypeResistanceRow> = attack_types(boost.map(|(attack, _)| attack))
            .into_iter()
            .map(|attack| {
                let multipliers = members
                    .iter()
                    .map(|member| match attack {
                        AttackType::Plain(t) => self.multiplier(member, t),
                        AttackType::Grounded(t) => {
                            let m = self.multiplier(member, t);
                            match boost {
                                Some((_, factor)) if self.rules.is_grounded(member) => m * factor,
                                _ => m,
                            }
                        }
                    })
                    .collect();
                TypeResistanceRow::new(attack, multipliers)
            })
            .collect();

        if let Some(weather) = options.weather {
            for row in &mut rows {
                self.apply_weather(row, &members, weather);
            }
        }
        if let Some(terrain) = options.terrain {
            for row in &mut rows {
                self.apply_terrain_guard(row, &members, terrain);
            }
        }

        let pokemon_data = members
            .iter()
            .enumerate()
            .map(|(index, member)| MemberRef::new(index, member))
            .collect();

        ResistanceAnalysis {
            summary: summarize(&rows, members.len()),
            type_resistances: rows,
            pokemon_data,
        }
    }

    /// Multiplier of one member against one attacking type, before weather
    /// and terrain
    pub fn multiplier(&self, member: &TeamMember, attack: Type) -> f32 {
        let ability = member.ability.as_deref();
        let item = member.item.as_deref();

        if attack.is_stellar() {
            return base_universal_type_multiplier(member)
                * self.rules.ability_multiplier(ability, attack)
                * self.rules.item_multiplier(item, attack);
        }

        let defending = member.current_types();
        let special = self.rules.item_special(item);

        let mut base = if special == Some(SpecialHandling::RingTarget) {
            self.ring_target_multiplier(attack, &defending)
        } else {
            self.chart.effectiveness(attack, &defending)
        };
        let mut ability_mult = self.rules.ability_multiplier(ability, attack);

        if attack == Type::Ground && special == Some(SpecialHandling::IronBall) {
            if member.original_types().contains(&Type::Flying) {
                base = 1.0;
            } else if self.rules.ability_grants_immunity(ability, Type::Ground) {
                ability_mult = 1.0;
            }
        }

        base * ability_mult * self.rules.item_multiplier(item, attack)
    }

    fn ring_target_multiplier(&self, attack: Type, defending: &[Type]) -> f32 {
        match self.rules.ring_target_exemption(attack) {
            Some(exempt) if defending.contains(&exempt) => {
                let remaining: Vec<Type> = defending.iter().copied().filter(|&t| t != exempt).collect();
                self.chart.effectiveness(attack, &remaining)
            }
            _ => self.chart.effectiveness(attack, defending),
        }
    }

    fn apply_weather(&self, row: &mut TypeResistanceRow, members: &[Cow<'_, TeamMember>], weather: Weather) {
        let factor = self.rules.weather_factor(weather, row.attack.base_type());
        if factor == 1.0 {
            return;
        }

        for (multiplier, member) in row.multipliers.iter_mut().zip(members) {
            let shielded = weather.is_sun_or_rain()
                && self.rules.item_special(member.item.as_deref()) == Some(SpecialHandling::UtilityUmbrella);
            if !shielded {
                *multiplier *= factor;
            }
        }
        row.regroup();
    }

    fn apply_terrain_guard(&self, row: &mut TypeResistanceRow, members: &[Cow<'_, TeamMember>], terrain: Terrain) {
        let Some(TerrainEffect::GroundedGuard { attack, factor }) = self.rules.terrain_effect(terrain) else {
            return;
        };
        if row.attack != AttackType::Plain(attack) || factor == 1.0 {
            return;
        }

        for (multiplier, member) in row.multipliers.iter_mut().zip(members) {
            if self.rules.is_grounded(member) {
                *multiplier *= factor;
            }
        }
        row.regroup();
    }
}

fn with_tera_override(team: &[TeamMember], tera: Option<TeraOverride>) -> Vec<Cow<'_, TeamMember>> {
    if let Some(o) = tera.filter(|o| o.index >= team.len()) {
        tracing::warn!(index = o.index, team_size = team.len(), "terastallization index out of range");
    }

    team.iter()
        .enumerate()
        .map(|(index, member)| match tera {
            Some(o) if o.index == index => Cow::Owned(member.clone().terastallized(o.tera_type)),
            _ => Cow::Borrowed(member),
        })
        .collect()
}

/// Row order: the 18 standard types then Stellar, with the terrain-boosted
/// row right after its base type
fn attack_types(boosted: Option<Type>) -> Vec<AttackType> {
    let mut attacks = Vec::with_capacity(Type::ALL.len() + 2);
    for t in Type::ALL.into_iter().chain([Type::Stellar]) {
        attacks.push(AttackType::Plain(t));
        if boosted == Some(t) {
            attacks.push(AttackType::Grounded(t));
        }
    }
    attacks
}

fn summarize(rows: &[TypeResistanceRow], team_size: usize) -> ResistanceSummary {
    let mut weaknesses = Vec::new();
    let mut resistances = Vec::new();
    let mut immunities = Vec::new();

    for row in rows {
        let mut weak = SummaryEntry::new(row.attack);
        let mut resist = SummaryEntry::new(row.attack);
        let mut immune = SummaryEntry::new(row.attack);

        for group in &row.groups {
            let m = group.multiplier;
            let n = group.members.len() as f32;
            if m == 0.0 {
                immune.members.extend(&group.members);
            } else if m < 1.0 {
                resist.members.extend(&group.members);
                resist.weight += n * (1.0 - m);
            } else if m > 1.0 {
                weak.members.extend(&group.members);
                weak.weight += n * (m - 1.0);
            }
        }
        immune.weight = immune.count() as f32;

        for (entry, list) in [
            (weak, &mut weaknesses),
            (resist, &mut resistances),
            (immune, &mut immunities),
        ] {
            if entry.count() > 0 {
                list.push(entry);
            }
        }
    }

    for list in [&mut weaknesses, &mut resistances, &mut immunities] {
        list.sort_by(|a, b| {
            b.count()
                .cmp(&a.count())
                .then_with(|| b.weight.total_cmp(&a.weight))
        });
    }

    ResistanceSummary {
        total_types: rows.len(),
        team_size,
        weaknesses,
        resistances,
        immunities,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyze(team: &[TeamMember], options: &ResistanceOptions) -> ResistanceAnalysis {
        ResistanceAnalyzer::default().analyze(team, options)
    }

    fn single(member: TeamMember, attack: Type) -> f32 {
        ResistanceAnalyzer::default().multiplier(&member, attack)
    }

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    fn charizard() -> TeamMember {
        TeamMember::new("Charizard", [Type::Fire, Type::Flying])
    }

    fn garchomp() -> TeamMember {
        TeamMember::new("Garchomp", [Type::Dragon, Type::Ground])
    }

    fn dragonite() -> TeamMember {
        TeamMember::new("Dragonite", [Type::Dragon, Type::Flying])
    }

    #[test]
    fn test_attack_type_display() {
        assert_eq!(AttackType::Plain(Type::Fire).to_string(), "Fire");
        assert_eq!(
            AttackType::Grounded(Type::Electric).to_string(),
            "Electric (Grounded)"
        );
    }

    #[test]
    fn test_flying_is_immune_to_ground() {
        assert_eq!(single(charizard(), Type::Ground), 0.0);
        assert_eq!(single(charizard(), Type::Rock), 4.0);
    }

    #[test]
    fn test_stellar_attacks() {
        assert_eq!(single(charizard(), Type::Stellar), 1.0);
        assert_eq!(single(charizard().terastallized(Type::Water), Type::Stellar), 2.0);
        assert_eq!(single(charizard().terastallized(Type::Stellar), Type::Stellar), 2.0);
    }

    #[test]
    fn test_stellar_tera_keeps_natural_types() {
        let stellar = charizard().terastallized(Type::Stellar);
        assert_eq!(single(stellar.clone(), Type::Rock), 4.0);
        assert_eq!(single(stellar, Type::Ground), 0.0);
    }

    #[test]
    fn test_tera_replaces_types() {
        let tera = charizard().terastallized(Type::Water);
        assert_eq!(single(tera.clone(), Type::Rock), 1.0);
        assert_eq!(single(tera.clone(), Type::Electric), 2.0);
        assert_eq!(single(tera, Type::Ground), 1.0);
    }

    #[test]
    fn test_ability_immunity_and_dry_skin() {
        let rotom = TeamMember::new("Rotom-Wash", [Type::Electric, Type::Water]);
        assert_eq!(single(rotom.clone(), Type::Ground), 2.0);
        assert_eq!(single(rotom.with_ability("Levitate"), Type::Ground), 0.0);

        let toxicroak = TeamMember::new("Toxicroak", [Type::Poison, Type::Fighting]).with_ability("Dry Skin");
        assert_eq!(single(toxicroak.clone(), Type::Water), 0.0);
        assert_eq!(single(toxicroak, Type::Fire), 1.25);
    }

    #[test]
    fn test_iron_ball() {
        let rotom = TeamMember::new("Rotom-Wash", [Type::Electric, Type::Water])
            .with_ability("Levitate")
            .with_item("Iron Ball");
        assert_eq!(single(rotom, Type::Ground), 2.0);

        let corviknight = TeamMember::new("Corviknight", [Type::Flying, Type::Steel]);
        assert_eq!(single(corviknight.clone(), Type::Ground), 0.0);
        assert_eq!(single(corviknight.clone().with_item("Iron Ball"), Type::Ground), 1.0);
        // Only Ground moves are affected
        assert_eq!(single(corviknight.with_item("Iron Ball"), Type::Fire), 2.0);
    }

    #[test]
    fn test_ring_target() {
        let gengar = TeamMember::new("Gengar", [Type::Ghost, Type::Poison]);
        assert_eq!(single(gengar.clone(), Type::Normal), 0.0);
        assert_eq!(single(gengar.clone(), Type::Fighting), 0.0);

        let target = gengar.with_item("Ring Target");
        assert_eq!(single(target.clone(), Type::Normal), 1.0);
        assert_eq!(single(target.clone(), Type::Fighting), 0.5);
        assert_eq!(single(target, Type::Ghost), 2.0);
    }

    #[test]
    fn test_air_balloon() {
        let heatran = TeamMember::new("Heatran", [Type::Fire, Type::Steel]);
        assert_eq!(single(heatran.clone(), Type::Ground), 4.0);
        assert_eq!(single(heatran.with_item("Air Balloon"), Type::Ground), 0.0);
    }

    #[test]
    fn test_row_order_and_terrain_row() {
        let plain = analyze(&[garchomp()], &ResistanceOptions::default());
        assert_eq!(plain.type_resistances.len(), 19);
        assert_eq!(plain.type_resistances[0].attack, AttackType::Plain(Type::Normal));
        assert_eq!(plain.type_resistances[18].attack, AttackType::Plain(Type::Stellar));

        let electric = analyze(
            &[garchomp()],
            &ResistanceOptions::default().with_terrain(Terrain::Electric),
        );
        assert_eq!(electric.summary.total_types, 20);
        assert_eq!(electric.type_resistances[3].attack, AttackType::Plain(Type::Electric));
        assert_eq!(electric.type_resistances[4].attack, AttackType::Grounded(Type::Electric));
        assert_eq!(electric.type_resistances[5].attack, AttackType::Plain(Type::Grass));

        let misty = analyze(&[garchomp()], &ResistanceOptions::default().with_terrain(Terrain::Misty));
        assert_eq!(misty.type_resistances.len(), 19);
    }

    #[test]
    fn test_grounded_row_only_boosts_grounded_members() {
        let toxapex = TeamMember::new("Toxapex", [Type::Poison, Type::Water]);
        let gyarados = TeamMember::new("Gyarados", [Type::Water, Type::Flying]);
        let result = analyze(
            &[toxapex, gyarados],
            &ResistanceOptions::default().with_terrain(Terrain::Electric),
        );

        let grounded = AttackType::Grounded(Type::Electric);
        assert!(approx(result.member_multiplier(0, grounded).unwrap(), 2.6));
        assert_eq!(result.member_multiplier(1, grounded), Some(4.0));
        assert_eq!(result.member_multiplier(0, Type::Electric), Some(2.0));
    }

    #[test]
    fn test_misty_terrain_guards_grounded() {
        let result = analyze(
            &[garchomp(), dragonite()],
            &ResistanceOptions::default().with_terrain(Terrain::Misty),
        );
        assert_eq!(result.member_multiplier(0, Type::Dragon), Some(1.0));
        assert_eq!(result.member_multiplier(1, Type::Dragon), Some(2.0));
        assert_eq!(result.resistance_level(Type::Dragon), Some(-1));
    }

    #[test]
    fn test_weather_and_umbrella() {
        let umbrella = charizard().with_item("Utility Umbrella");
        let team = [charizard(), umbrella];

        let rain = analyze(&team, &ResistanceOptions::default().with_weather(Weather::Rain));
        assert_eq!(rain.member_multiplier(0, Type::Water), Some(3.0));
        assert_eq!(rain.member_multiplier(0, Type::Fire), Some(0.25));
        assert_eq!(rain.member_multiplier(1, Type::Water), Some(2.0));
        assert_eq!(rain.member_multiplier(1, Type::Fire), Some(0.5));

        let heavy = analyze(&team, &ResistanceOptions::default().with_weather(Weather::HeavyRain));
        assert_eq!(heavy.member_multiplier(0, Type::Fire), Some(0.0));
        assert_eq!(heavy.member_multiplier(1, Type::Fire), Some(0.0));
        assert_eq!(heavy.member_multiplier(1, Type::Water), Some(3.0));
    }

    #[test]
    fn test_groups_and_resistance_level() {
        let result = analyze(&[garchomp(), dragonite()], &ResistanceOptions::default());

        let electric = result.row(Type::Electric).unwrap();
        assert_eq!(electric.multipliers, vec![0.0, 1.0]);
        assert_eq!(electric.groups.len(), 2);
        assert_eq!(electric.groups[0].members, vec![0]);
        assert_eq!(electric.resistance_level, 1);

        let ice = result.row(Type::Ice).unwrap();
        assert_eq!(ice.groups.len(), 1);
        assert_eq!(ice.groups[0].multiplier, 4.0);
        assert_eq!(ice.groups[0].members, vec![0, 1]);
        assert_eq!(ice.resistance_level, -2);
    }

    #[test]
    fn test_summary_ordering() {
        let result = analyze(&[garchomp(), dragonite()], &ResistanceOptions::default());
        let summary = &result.summary;

        assert_eq!(summary.team_size, 2);
        assert_eq!(summary.total_types, 19);

        let top: Vec<AttackType> = summary.weaknesses.iter().take(3).map(|e| e.attack).collect();
        assert_eq!(
            top,
            vec![
                AttackType::Plain(Type::Ice),
                AttackType::Plain(Type::Dragon),
                AttackType::Plain(Type::Fairy)
            ]
        );
        assert_eq!(summary.weaknesses[0].weight, 6.0);

        let immune: Vec<AttackType> = summary.immunities.iter().map(|e| e.attack).collect();
        assert_eq!(
            immune,
            vec![AttackType::Plain(Type::Electric), AttackType::Plain(Type::Ground)]
        );
        assert_eq!(summary.immunities[0].weight, 1.0);
    }

    #[test]
    fn test_tera_override_option() {
        let team = [charizard(), garchomp()];
        let result = analyze(&team, &ResistanceOptions::default().with_terastallization(0, Type::Water));

        assert!(result.pokemon_data[0].is_terastallized());
        assert!(!result.pokemon_data[1].is_terastallized());
        assert_eq!(result.member_multiplier(0, Type::Rock), Some(1.0));
        assert_eq!(result.member_multiplier(0, Type::Stellar), Some(2.0));
        assert_eq!(result.member_multiplier(1, Type::Stellar), Some(1.0));
    }

    #[test]
    fn test_tera_override_out_of_range_is_ignored() {
        let team = [charizard()];
        let result = analyze(&team, &ResistanceOptions::default().with_terastallization(4, Type::Water));
        assert_eq!(result.member_multiplier(0, Type::Rock), Some(4.0));
    }

    #[test]
    fn test_empty_team() {
        let result = analyze(&[], &ResistanceOptions::default().with_weather(Weather::Sun));
        assert_eq!(result.summary.team_size, 0);
        assert_eq!(result.type_resistances.len(), 19);
        assert!(result.summary.weaknesses.is_empty());
        assert!(result.summary.resistances.is_empty());
        assert!(result.summary.immunities.is_empty());
        assert!(result.type_resistances.iter().all(|row| row.resistance_level == 0));
        assert_eq!(result.member_multiplier(0, Type::Fire), None);
    }

    #[test]
    fn test_missing_species_is_neutral() {
        let unknown = TeamMember::new("MissingNo", Vec::<Type>::new());
        let result = analyze(&[unknown, charizard()], &ResistanceOptions::default());
        assert!(result.row(Type::Rock).unwrap().multipliers[0] == 1.0);
        assert_eq!(result.member_multiplier(1, Type::Rock), Some(4.0));
    }

    #[test]
    fn test_options_accept_display_names() {
        let options: ResistanceOptions =
            serde_json::from_str(r#"{"weather": "Harsh Sunlight", "terrain": "Misty Terrain"}"#).unwrap();
        assert_eq!(options.weather, Some(Weather::Sun));
        assert_eq!(options.terrain, Some(Terrain::Misty));

        let result = analyze(&[charizard()], &options);
        assert!(approx(result.member_multiplier(0, Type::Fire).unwrap(), 0.75));

        assert!(serde_json::from_str::<ResistanceOptions>(r#"{"weather": "Fog"}"#).is_err());
    }
}
