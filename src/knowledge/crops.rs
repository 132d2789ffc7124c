//! Crop and season knowledge base for Indian agriculture

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::matching::title_case;
use crate::models::Season;

/// Relative irrigation need of a crop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WaterRequirement {
    Low,
    Medium,
    High,
}

impl WaterRequirement {
    /// Baseline irrigation volume in litres per acre
    #[must_use]
    pub fn base_water_per_acre(&self) -> f64 {
        match self {
            WaterRequirement::High => 15_000.0,
            WaterRequirement::Medium => 12_000.0,
            WaterRequirement::Low => 8_000.0,
        }
    }
}

impl fmt::Display for WaterRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            WaterRequirement::Low => "LOW",
            WaterRequirement::Medium => "MEDIUM",
            WaterRequirement::High => "HIGH",
        };
        write!(f, "{label}")
    }
}

/// Temperature and water parameters for one crop
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CropProfile {
    pub name: &'static str,
    pub name_hi: &'static str,
    pub season: Season,
    pub ideal_temp_min: i32,
    pub ideal_temp_max: i32,
    pub heat_stress_threshold: i32,
    pub water_requirement: WaterRequirement,
}

/// Fallback parameters for a whole season
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonRules {
    pub season: Season,
    pub ideal_temp_min: i32,
    pub ideal_temp_max: i32,
    pub heat_stress_threshold: i32,
    pub water_requirement: WaterRequirement,
}

const fn crop(
    name: &'static str,
    name_hi: &'static str,
    season: Season,
    ideal: (i32, i32),
    heat_stress_threshold: i32,
    water_requirement: WaterRequirement,
) -> CropProfile {
    CropProfile {
        name,
        name_hi,
        season,
        ideal_temp_min: ideal.0,
        ideal_temp_max: ideal.1,
        heat_stress_threshold,
        water_requirement,
    }
}

use Season::{Kharif, Rabi, Zaid};
use WaterRequirement::{High, Low, Medium};

pub static CROP_KNOWLEDGE_BASE: &[CropProfile] = &[
    // Rabi, winter season
    crop("Wheat", "गेहूं", Rabi, (10, 25), 30, Medium),
    crop("Mustard", "सरसों", Rabi, (10, 27), 32, Low),
    crop("Chickpea", "चना", Rabi, (15, 30), 35, Low),
    crop("Chana", "चना", Rabi, (15, 30), 35, Low),
    crop("Barley", "जौ", Rabi, (12, 25), 30, Low),
    // Kharif, monsoon season
    crop("Rice", "धान", Kharif, (20, 35), 40, High),
    crop("Paddy", "धान", Kharif, (20, 35), 40, High),
    crop("Cotton", "कपास", Kharif, (21, 35), 38, Medium),
    crop("Maize", "मक्का", Kharif, (18, 32), 37, Medium),
    crop("Soybean", "सोयाबीन", Kharif, (20, 32), 37, Medium),
    // Zaid, summer season
    crop("Watermelon", "तरबूज", Zaid, (24, 35), 40, High),
    crop("Cucumber", "खीरा", Zaid, (18, 30), 35, Medium),
    crop("Bitter Gourd", "करेला", Zaid, (24, 35), 38, Medium),
    crop("Karela", "करेला", Zaid, (24, 35), 38, Medium),
];

static SEASON_RULES: [SeasonRules; 3] = [
    SeasonRules {
        season: Rabi,
        ideal_temp_min: 10,
        ideal_temp_max: 25,
        heat_stress_threshold: 30,
        water_requirement: Medium,
    },
    SeasonRules {
        season: Kharif,
        ideal_temp_min: 20,
        ideal_temp_max: 35,
        heat_stress_threshold: 38,
        water_requirement: High,
    },
    SeasonRules {
        season: Zaid,
        ideal_temp_min: 22,
        ideal_temp_max: 33,
        heat_stress_threshold: 38,
        water_requirement: Medium,
    },
];

/// Look up a crop by name, ignoring surrounding whitespace and case
#[must_use]
pub fn crop_profile(name: &str) -> Option<&'static CropProfile> {
    let normalized = title_case(name.trim());
    CROP_KNOWLEDGE_BASE
        .iter()
        .find(|profile| profile.name == normalized)
}

#[must_use]
pub fn season_rules(season: Season) -> &'static SeasonRules {
    match season {
        Rabi => &SEASON_RULES[0],
        Kharif => &SEASON_RULES[1],
        Zaid => &SEASON_RULES[2],
    }
}

/// Look up season rules by name, ignoring surrounding whitespace and case
#[must_use]
pub fn season_rules_by_name(name: &str) -> Option<&'static SeasonRules> {
    name.parse::<Season>().ok().map(season_rules)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Wheat", "गेहूं", 30)]
    #[case("  wheat ", "गेहूं", 30)]
    #[case("bitter gourd", "करेला", 38)]
    #[case("PADDY", "धान", 40)]
    fn test_crop_lookup(#[case] name: &str, #[case] name_hi: &str, #[case] heat: i32) {
        let profile = crop_profile(name).unwrap();
        assert_eq!(profile.name_hi, name_hi);
        assert_eq!(profile.heat_stress_threshold, heat);
    }

    #[test]
    fn test_unknown_crop() {
        assert!(crop_profile("Dragonfruit").is_none());
        assert!(crop_profile("").is_none());
    }

    #[test]
    fn test_season_rules() {
        let kharif = season_rules_by_name(" kharif").unwrap();
        assert_eq!(kharif.season, Kharif);
        assert_eq!(kharif.heat_stress_threshold, 38);
        assert_eq!(kharif.water_requirement, High);
        assert_eq!(season_rules(Zaid).ideal_temp_min, 22);
        assert!(season_rules_by_name("monsoon").is_none());
    }

    #[test]
    fn test_knowledge_base_is_consistent() {
        for profile in CROP_KNOWLEDGE_BASE {
            assert!(profile.ideal_temp_min < profile.ideal_temp_max, "{}", profile.name);
            assert!(profile.ideal_temp_max < profile.heat_stress_threshold, "{}", profile.name);
        }
    }

    #[test]
    fn test_base_water() {
        assert_eq!(High.base_water_per_acre(), 15_000.0);
        assert_eq!(Medium.base_water_per_acre(), 12_000.0);
        assert_eq!(Low.base_water_per_acre(), 8_000.0);
    }
}
