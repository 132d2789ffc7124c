//! Farmer, profile and crop records

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::AdvisoryError;
use crate::matching::title_case;

/// Location assigned to a profile when registration leaves it blank
pub const DEFAULT_LOCATION: &str = "Delhi";

/// Largest plot area accepted for a single crop, in acres
pub const MAX_CROP_AREA: f64 = 999.99;

/// Indian cropping season
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    /// Winter crops, October to March
    Rabi,
    /// Monsoon crops, June to October
    Kharif,
    /// Summer crops, March to June
    Zaid,
}

impl Season {
    #[must_use]
    pub fn name_hi(&self) -> &'static str {
        match self {
            Season::Rabi => "रबी",
            Season::Kharif => "खरीफ",
            Season::Zaid => "जायद",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Season::Rabi => "Rabi",
            Season::Kharif => "Kharif",
            Season::Zaid => "Zaid",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Season {
    type Err = AdvisoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match title_case(s.trim()).as_str() {
            "Rabi" => Ok(Season::Rabi),
            "Kharif" => Ok(Season::Kharif),
            "Zaid" => Ok(Season::Zaid),
            other => Err(AdvisoryError::validation(format!(
                "Unknown season '{other}'. Must be one of: Rabi, Kharif, Zaid"
            ))),
        }
    }
}

/// A crop grown by a farmer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Crop {
    pub name: String,
    pub season: Season,
    pub area_acres: f64,
}

impl Crop {
    pub fn new(name: &str, season: Season, area_acres: f64) -> crate::Result<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AdvisoryError::validation("Crop name cannot be empty"));
        }
        if !(area_acres > 0.0 && area_acres <= MAX_CROP_AREA) {
            return Err(AdvisoryError::validation(format!(
                "Crop area must be between 0 and {MAX_CROP_AREA} acres, got {area_acres}"
            )));
        }
        Ok(Self {
            name: name.to_string(),
            season,
            area_acres,
        })
    }
}

/// Parses `NAME:SEASON:AREA`, e.g. `Wheat:Rabi:2.5`
impl FromStr for Crop {
    type Err = AdvisoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(':').collect();
        let [name, season, area] = parts.as_slice() else {
            return Err(AdvisoryError::validation(format!(
                "Expected NAME:SEASON:AREA, got '{s}'"
            )));
        };
        let area: f64 = area
            .trim()
            .parse()
            .map_err(|_| AdvisoryError::validation(format!("Invalid crop area '{area}'")))?;
        Crop::new(name, season.parse()?, area)
    }
}

/// Where a farmer farms
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FarmerProfile {
    pub state: String,
    pub city: String,
}

impl Default for FarmerProfile {
    fn default() -> Self {
        Self {
            state: DEFAULT_LOCATION.to_string(),
            city: DEFAULT_LOCATION.to_string(),
        }
    }
}

/// A registered farmer with their profile and crops
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Farmer {
    pub username: String,
    pub profile: FarmerProfile,
    pub crops: Vec<Crop>,
}

impl Farmer {
    /// Create the account together with its profile. Blank locations fall back to Delhi.
    pub fn register(username: &str, state: Option<&str>, city: Option<&str>) -> crate::Result<Self> {
        let username = username.trim();
        if username.is_empty() {
            return Err(AdvisoryError::validation("Username cannot be empty"));
        }

        let pick = |value: Option<&str>| {
            value
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map_or_else(|| DEFAULT_LOCATION.to_string(), str::to_string)
        };

        Ok(Self {
            username: username.to_string(),
            profile: FarmerProfile {
                state: pick(state),
                city: pick(city),
            },
            crops: Vec::new(),
        })
    }

    pub fn add_crop(&mut self, crop: Crop) {
        self.crops.push(crop);
    }

    /// Removes every crop with the given name (case-insensitive); returns how many were removed
    pub fn remove_crop(&mut self, name: &str) -> usize {
        let before = self.crops.len();
        let name = name.trim().to_lowercase();
        self.crops.retain(|crop| crop.name.to_lowercase() != name);
        before - self.crops.len()
    }

    #[must_use]
    pub fn total_area(&self) -> f64 {
        self.crops.iter().map(|crop| crop.area_acres).sum()
    }
}
