//! Climate zones and their resource factors

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ClimateZone {
    Coastal,
    Inland,
    Arid,
}

impl ClimateZone {
    /// Zone for a place name; unmapped places are treated as inland
    #[must_use]
    pub fn for_place(place: &str) -> Self {
        match place.trim().to_lowercase().as_str() {
            "chennai" | "mumbai" | "kolkata" => ClimateZone::Coastal,
            "jaipur" | "jodhpur" | "bikaner" => ClimateZone::Arid,
            _ => ClimateZone::Inland,
        }
    }

    #[must_use]
    pub fn water_factor(&self) -> f64 {
        match self {
            ClimateZone::Coastal => 0.85,
            ClimateZone::Inland => 1.0,
            ClimateZone::Arid => 1.25,
        }
    }

    #[must_use]
    pub fn urea_factor(&self) -> f64 {
        match self {
            ClimateZone::Coastal => 0.9,
            ClimateZone::Inland => 1.0,
            ClimateZone::Arid => 1.1,
        }
    }
}

impl fmt::Display for ClimateZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ClimateZone::Coastal => "coastal",
            ClimateZone::Inland => "inland",
            ClimateZone::Arid => "arid",
        };
        write!(f, "{name}")
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// Scale water and urea quantities by the climate zone of `place`.
///
/// An empty place name leaves both values untouched. Results are rounded to
/// two decimals.
#[must_use]
pub fn apply_location_adjustment(base_water: f64, base_urea: f64, place: &str) -> (f64, f64) {
    if place.trim().is_empty() {
        return (base_water, base_urea);
    }
    let zone = ClimateZone::for_place(place);
    (
        round2(base_water * zone.water_factor()),
        round2(base_urea * zone.urea_factor()),
    )
}
