//! Type matchup helpers over a [`TypeChart`]

use super::pokemon_type::{Type, TypeChart};

/// Get all standard types that are super effective against the defender
pub fn weaknesses(chart: &dyn TypeChart, defender_types: &[Type]) -> Vec<Type> {
    Type::all()
        .iter()
        .copied()
        .filter(|t| chart.effectiveness(*t, defender_types) > 1.0)
        .collect()
}

/// Get all standard types the defender resists (0 < effectiveness < 1)
pub fn resistances(chart: &dyn TypeChart, defender_types: &[Type]) -> Vec<Type> {
    Type::all()
        .iter()
        .copied()
        .filter(|t| {
            let eff = chart.effectiveness(*t, defender_types);
            eff > 0.0 && eff < 1.0
        })
        .collect()
}

/// Get all standard types the defender is immune to
pub fn immunities(chart: &dyn TypeChart, defender_types: &[Type]) -> Vec<Type> {
    Type::all()
        .iter()
        .copied()
        .filter(|t| chart.effectiveness(*t, defender_types) == 0.0)
        .collect()
}
