//! Team Report Example
//!
//! Resolves a team against a JSON dex and prints each member's chart
//! matchups, the team's resistance summary and its weakest coverage spots.
//!
//! Usage: cargo run --example team_report -- [dex.json] [team.json] [config.json]
//!
//! Without arguments a small built-in dex and team are used. Set
//! `RUST_LOG=debug` to see engine diagnostics.

use anyhow::{Context, Result};
use coverdex_analysis::{
    AnalysisConfig, CoverageAnalyzer, CoverageOptions, ResistanceAnalyzer, ResistanceOptions,
    Weather,
};
use coverdex_team::{
    immunities, resolve_team, weaknesses, MemoryDex, PokemonSet, StandardChart, Type,
};
use tracing_subscriber::EnvFilter;

const DEMO_DEX: &str = r#"{
    "species": [
        {"name": "Garchomp", "types": ["Dragon", "Ground"],
         "baseStats": {"hp": 108, "atk": 130, "def": 95, "spa": 80, "spd": 85, "spe": 102}},
        {"name": "Rotom-Wash", "types": ["Electric", "Water"],
         "baseStats": {"hp": 50, "atk": 65, "def": 107, "spa": 105, "spd": 107, "spe": 86}},
        {"name": "Pikachu", "types": ["Electric"],
         "baseStats": {"hp": 35, "atk": 55, "def": 40, "spa": 50, "spd": 50, "spe": 90}},
        {"name": "Squirtle", "types": ["Water"],
         "baseStats": {"hp": 44, "atk": 48, "def": 65, "spa": 50, "spd": 64, "spe": 43}}
    ],
    "moves": [
        {"name": "Earthquake", "type": "Ground", "category": "Physical", "basePower": 100},
        {"name": "Outrage", "type": "Dragon", "category": "Physical", "basePower": 120},
        {"name": "Hydro Pump", "type": "Water", "category": "Special", "basePower": 110},
        {"name": "Volt Switch", "type": "Electric", "category": "Special", "basePower": 70}
    ]
}"#;

const DEMO_TEAM: &str = r#"[
    {"species": "Garchomp", "nature": "Jolly", "evs": {"atk": 252, "spe": 252},
     "moves": ["Earthquake", "Outrage"]},
    {"species": "Rotom-Wash", "ability": "Levitate", "item": "Leftovers", "nature": "Bold",
     "moves": ["Hydro Pump", "Volt Switch"]}
]"#;

fn read_or(path: Option<&String>, fallback: &str) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path).with_context(|| format!("reading {path}")),
        None => Ok(fallback.to_string()),
    }
}

fn join(types: &[Type]) -> String {
    if types.is_empty() {
        return "-".to_string();
    }
    types.iter().map(|t| t.to_string()).collect::<Vec<_>>().join("/")
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let dex = MemoryDex::from_json(&read_or(args.first(), DEMO_DEX)?).context("loading dex")?;
    let sets: Vec<PokemonSet> =
        serde_json::from_str(&read_or(args.get(1), DEMO_TEAM)?).context("loading team")?;
    let config = match args.get(2) {
        Some(path) => AnalysisConfig::from_json(&read_or(Some(path), "")?).context("loading config")?,
        None => AnalysisConfig::default(),
    };

    let dex = config.cached_dex(dex);
    let team = resolve_team(&dex, &sets);

    println!("=== Team ===");
    for member in &team {
        let defending = member.current_types();
        println!("  {} [{}]", member.name(), join(&defending));
        println!("    weak to:   {}", join(&weaknesses(&StandardChart, &defending)));
        println!("    immune to: {}", join(&immunities(&StandardChart, &defending)));
    }

    let resistance = ResistanceAnalyzer::default().analyze(
        &team,
        &ResistanceOptions::default().with_weather(Weather::Rain),
    );

    println!("\n=== Weaknesses (rain) ===");
    for entry in &resistance.summary.weaknesses {
        println!("  {:<20} {} member(s), weight {:.2}", entry.attack.to_string(), entry.count(), entry.weight);
    }
    println!("\n=== Immunities (rain) ===");
    for entry in &resistance.summary.immunities {
        println!("  {:<20} {} member(s)", entry.attack.to_string(), entry.count());
    }

    let calc = config.stat_calculator();
    let coverage = CoverageAnalyzer::new(&StandardChart, &dex, &calc, &config)
        .analyze(&team, &CoverageOptions::default());

    let mut units: Vec<_> = coverage.type_coverage_matrix.units().iter().collect();
    units.sort_by(|a, b| a.score.total_cmp(&b.score));

    println!("\n=== Hardest type combinations ===");
    for unit in units.iter().take(5) {
        let level = unit
            .level
            .map_or_else(|| "None".to_string(), |level| format!("{level:?}"));
        println!("  {}/{}: {} (score {:.1})", unit.type1, unit.type2, level, unit.score);
    }

    println!("\n=== Reference species ===");
    for target in &coverage.popular_pokemon_coverage {
        match target.overall.first() {
            Some(best) => println!(
                "  {}: {} from {} ({}x, score {:.1})",
                target.species, best.move_data.name, best.species, best.effectiveness, best.damage_score
            ),
            None => println!("  {}: no damaging moves", target.species),
        }
    }

    Ok(())
}
