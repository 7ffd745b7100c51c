//! End-to-end scenarios: resolve a team from a dex, then run both engines.

use coverdex_analysis::{
    AnalysisConfig, AttackType, CoverageAnalyzer, CoverageLevel, CoverageOptions, ModifierRules,
    ResistanceAnalyzer, ResistanceOptions, Terrain, Weather,
};
use coverdex_team::{resolve_team, MemoryDex, PokemonSet, StandardChart, TeamMember, Type};

const DEX: &str = r#"{
    "species": [
        {"name": "Garchomp", "types": ["Dragon", "Ground"],
         "baseStats": {"hp": 108, "atk": 130, "def": 95, "spa": 80, "spd": 85, "spe": 102}},
        {"name": "Rotom-Wash", "types": ["Electric", "Water"],
         "baseStats": {"hp": 50, "atk": 65, "def": 107, "spa": 105, "spd": 107, "spe": 86}},
        {"name": "Corviknight", "types": ["Flying", "Steel"],
         "baseStats": {"hp": 98, "atk": 87, "def": 105, "spa": 53, "spd": 85, "spe": 67}},
        {"name": "Pikachu", "types": ["Electric"],
         "baseStats": {"hp": 35, "atk": 55, "def": 40, "spa": 50, "spd": 50, "spe": 90}}
    ],
    "moves": [
        {"name": "Earthquake", "type": "Ground", "category": "Physical", "basePower": 100},
        {"name": "Outrage", "type": "Dragon", "category": "Physical", "basePower": 120},
        {"name": "Stone Edge", "type": "Rock", "category": "Physical", "basePower": 100},
        {"name": "Swords Dance", "type": "Normal", "category": "Status"},
        {"name": "Hydro Pump", "type": "Water", "category": "Special", "basePower": 110},
        {"name": "Volt Switch", "type": "Electric", "category": "Special", "basePower": 70},
        {"name": "Will-O-Wisp", "type": "Fire", "category": "Status"},
        {"name": "Brave Bird", "type": "Flying", "category": "Physical", "basePower": 120},
        {"name": "Iron Head", "type": "Steel", "category": "Physical", "basePower": 80}
    ]
}"#;

const TEAM: &str = r#"[
    {"species": "Garchomp", "nature": "Jolly", "evs": {"atk": 252, "spe": 252},
     "moves": ["Earthquake", "Outrage", "Stone Edge", "Swords Dance"]},
    {"species": "Rotom-Wash", "ability": "Levitate",
     "moves": ["Hydro Pump", "Volt Switch", "Will-O-Wisp"]},
    {"species": "Corviknight", "item": "Iron Ball", "teraType": "Fire",
     "moves": ["Brave Bird", "Iron Head"]},
    {"species": "MissingNo", "moves": ["Splash Dance"]}
]"#;

fn team(config: &AnalysisConfig) -> Vec<TeamMember> {
    let dex = config.cached_dex(MemoryDex::from_json(DEX).unwrap());
    let sets: Vec<PokemonSet> = serde_json::from_str(TEAM).unwrap();
    let team = resolve_team(&dex, &sets);
    assert!(dex.entry_count() > 0);
    team
}

#[test]
fn resolved_team_keeps_unknown_entries() {
    let team = team(&AnalysisConfig::default());
    assert_eq!(team.len(), 4);
    assert_eq!(team[0].moves.len(), 4);
    assert!(team[3].types.is_empty());
    assert!(team[3].moves.is_empty());
    assert!(team[3].base_stats.is_none());
    // Tera type is known but not active
    assert!(!team[2].is_terastallized());
}

#[test]
fn resistance_of_resolved_team() {
    let team = team(&AnalysisConfig::default());
    let result = ResistanceAnalyzer::default().analyze(&team, &ResistanceOptions::default());

    assert_eq!(result.summary.team_size, 4);
    assert_eq!(result.pokemon_data[3].species, "MissingNo");

    // Levitate immune, Iron Ball makes Corviknight neutral
    let ground = result.row(Type::Ground).unwrap();
    assert_eq!(ground.multipliers, vec![1.0, 0.0, 1.0, 1.0]);
    assert_eq!(ground.resistance_level, 1);

    let electric = result.row(Type::Electric).unwrap();
    assert_eq!(electric.multipliers, vec![0.0, 1.0, 2.0, 1.0]);
    assert_eq!(electric.resistance_level, 0);
}

#[test]
fn resistance_under_sun_with_tera() {
    let team = team(&AnalysisConfig::default());
    let options = ResistanceOptions::default()
        .with_weather(Weather::Sun)
        .with_terastallization(2, Type::Fire);
    let result = ResistanceAnalyzer::default().analyze(&team, &options);

    // Garchomp 0.5 x 1.5, tera Fire Corviknight 0.5 x 1.5
    assert_eq!(result.member_multiplier(0, Type::Fire), Some(0.75));
    assert_eq!(result.member_multiplier(2, Type::Fire), Some(0.75));
    // Water is halved in sun: Garchomp 1 x 0.5, Rotom 0.5 x 0.5, tera Fire 2 x 0.5
    assert_eq!(result.member_multiplier(0, Type::Water), Some(0.5));
    assert_eq!(result.member_multiplier(1, Type::Water), Some(0.25));
    assert_eq!(result.member_multiplier(2, Type::Water), Some(1.0));
    assert_eq!(result.member_multiplier(2, Type::Stellar), Some(2.0));
}

#[test]
fn grounded_rows_follow_terrain() {
    let team = team(&AnalysisConfig::default());
    let result = ResistanceAnalyzer::default().analyze(
        &team,
        &ResistanceOptions::default().with_terrain(Terrain::Grassy),
    );

    let grassy = AttackType::Grounded(Type::Grass);
    assert!(result.row(grassy).is_some());
    assert!(result.row(AttackType::Grounded(Type::Electric)).is_none());
    // Corviknight is grounded by Iron Ball: Grass 0.25 x 1.3
    let corviknight = result.member_multiplier(2, grassy).unwrap();
    assert!((corviknight - 0.325).abs() < 1e-6);
    // Rotom levitates, so no boost on its 2x
    assert_eq!(result.member_multiplier(1, grassy), Some(2.0));
}

#[test]
fn coverage_of_resolved_team() {
    let config = AnalysisConfig::default();
    let team = team(&config);
    let dex = MemoryDex::from_json(DEX).unwrap();
    let calc = config.stat_calculator();
    let result = CoverageAnalyzer::new(&StandardChart, &dex, &calc, &config)
        .analyze(&team, &CoverageOptions::default());

    let water = result.type_coverage_matrix.unit(Type::Water, Type::Water).unwrap();
    assert_eq!(water.level, Some(CoverageLevel::Effective));
    assert_eq!(water.special.effective.moves[0].move_data.name, "Volt Switch");
    assert_eq!(water.special.resistant.moves[0].move_data.name, "Hydro Pump");
    assert_eq!(water.physical.neutral.total, 4);
    // Status moves never show up
    assert!(result.type_coverage_matrix.units().iter().all(|unit| {
        [&unit.physical, &unit.special].iter().all(|category| {
            CoverageLevel::PRIORITY
                .iter()
                .all(|&level| category.bucket(level).moves.iter().all(|m| m.move_data.is_damaging()))
        })
    }));

    // Only Pikachu of the reference list is in the dex
    assert_eq!(result.popular_pokemon_coverage.len(), 1);
    let pikachu = &result.popular_pokemon_coverage[0];
    assert_eq!(pikachu.overall[0].move_data.name, "Earthquake");
    assert!(pikachu.overall[0].stab);
}

#[test]
fn coverage_respects_configured_cap() {
    let config = AnalysisConfig::from_json(r#"{ "coverage": { "top_n": 2 } }"#).unwrap();
    let team = team(&config);
    let dex = MemoryDex::new();
    let calc = config.stat_calculator();
    let result = CoverageAnalyzer::new(&StandardChart, &dex, &calc, &config)
        .analyze(&team, &CoverageOptions::combination(Type::Water, Type::Water));

    let unit = &result.type_coverage_matrix.units()[0];
    assert_eq!(unit.physical.neutral.total, 4);
    assert_eq!(unit.physical.neutral.moves.len(), 2);
    assert!(result.popular_pokemon_coverage.is_empty());
}

#[test]
fn custom_rules_replace_standard_tables() {
    let rules = ModifierRules::from_json(
        r#"{ "abilities": { "Thick Fat": { "multipliers": { "Fire": 0.5, "Ice": 0.5 } } } }"#,
    )
    .unwrap();
    let analyzer = ResistanceAnalyzer::new(&StandardChart, &rules);

    let snorlax = TeamMember::new("Snorlax", [Type::Normal]).with_ability("Thick Fat");
    assert_eq!(analyzer.multiplier(&snorlax, Type::Fire), 0.5);

    // Levitate is not in the custom tables
    let rotom = TeamMember::new("Rotom-Wash", [Type::Electric, Type::Water]).with_ability("Levitate");
    assert_eq!(analyzer.multiplier(&rotom, Type::Ground), 2.0);
}

#[test]
fn fire_flying_is_immune_to_ground() {
    let charizard = TeamMember::new("Charizard", [Type::Fire, Type::Flying]);
    let result = ResistanceAnalyzer::default().analyze(&[charizard], &ResistanceOptions::default());
    assert_eq!(result.member_multiplier(0, Type::Ground), Some(0.0));
}

#[test]
fn stellar_attacks_double_on_any_tera() {
    let analyzer = ResistanceAnalyzer::default();
    let stellar = TeamMember::new("Terapagos", [Type::Normal]).terastallized(Type::Stellar);
    let water = TeamMember::new("Terapagos", [Type::Normal]).terastallized(Type::Water);
    let natural = TeamMember::new("Terapagos", [Type::Normal]);

    assert_eq!(analyzer.multiplier(&stellar, Type::Stellar), 2.0);
    assert_eq!(analyzer.multiplier(&water, Type::Stellar), 2.0);
    assert_eq!(analyzer.multiplier(&natural, Type::Stellar), 1.0);
    // Stellar tera keeps Normal's Ghost immunity
    assert_eq!(analyzer.multiplier(&stellar, Type::Ghost), 0.0);
}
