//! Weather and terrain
//!
//! Both deserialize from their variant names as well as the display names
//! used in team tools ("Harsh Sunlight", "Grassy Terrain").

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConditionError {
    #[error("unknown weather: {0}")]
    UnknownWeather(String),

    #[error("unknown terrain: {0}")]
    UnknownTerrain(String),
}

/// Weather conditions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Weather {
    Sun,
    Rain,
    Sand,
    Hail,
    Snow,        // Gen 9 replacement for Hail
    HarshSun,    // Desolate Land (Primal Groudon)
    HeavyRain,   // Primordial Sea (Primal Kyogre)
    StrongWinds, // Delta Stream (Mega Rayquaza)
}

impl Weather {
    pub const ALL: [Weather; 8] = [
        Weather::Sun,
        Weather::Rain,
        Weather::Sand,
        Weather::Hail,
        Weather::Snow,
        Weather::HarshSun,
        Weather::HeavyRain,
        Weather::StrongWinds,
    ];

    /// Parse a weather name (case, spaces and dashes ignored)
    pub fn from_name(s: &str) -> Option<Self> {
        let normalized = s.to_lowercase().replace([' ', '-', '_'], "");

        match normalized.as_str() {
            "sun" | "harshsunlight" => Some(Weather::Sun),
            "rain" => Some(Weather::Rain),
            "sand" | "sandstorm" => Some(Weather::Sand),
            "hail" => Some(Weather::Hail),
            "snow" => Some(Weather::Snow),
            "harshsun" | "extremelyharshsunlight" => Some(Weather::HarshSun),
            "heavyrain" => Some(Weather::HeavyRain),
            "strongwinds" => Some(Weather::StrongWinds),
            _ => None,
        }
    }

    /// Plain sun or rain. Utility Umbrella only shields against these two.
    pub fn is_sun_or_rain(&self) -> bool {
        matches!(self, Weather::Sun | Weather::Rain)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Weather::Sun => "Sun",
            Weather::Rain => "Rain",
            Weather::Sand => "Sandstorm",
            Weather::Hail => "Hail",
            Weather::Snow => "Snow",
            Weather::HarshSun => "Harsh Sun",
            Weather::HeavyRain => "Heavy Rain",
            Weather::StrongWinds => "Strong Winds",
        }
    }
}

impl TryFrom<String> for Weather {
    type Error = ConditionError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Weather::from_name(&s).ok_or(ConditionError::UnknownWeather(s))
    }
}

impl std::fmt::Display for Weather {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Terrain conditions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Terrain {
    Electric,
    Grassy,
    Misty,
    Psychic,
}

impl Terrain {
    pub const ALL: [Terrain; 4] = [
        Terrain::Electric,
        Terrain::Grassy,
        Terrain::Misty,
        Terrain::Psychic,
    ];

    /// Parse a terrain name, with or without the "Terrain" suffix
    pub fn from_name(s: &str) -> Option<Self> {
        let normalized = s.to_lowercase().replace([' ', '-', '_'], "");

        match normalized.strip_suffix("terrain").unwrap_or(normalized.as_str()) {
            "electric" => Some(Terrain::Electric),
            "grassy" => Some(Terrain::Grassy),
            "misty" => Some(Terrain::Misty),
            "psychic" => Some(Terrain::Psychic),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Terrain::Electric => "Electric Terrain",
            Terrain::Grassy => "Grassy Terrain",
            Terrain::Misty => "Misty Terrain",
            Terrain::Psychic => "Psychic Terrain",
        }
    }
}

impl TryFrom<String> for Terrain {
    type Error = ConditionError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Terrain::from_name(&s).ok_or(ConditionError::UnknownTerrain(s))
    }
}

impl std::fmt::Display for Terrain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
