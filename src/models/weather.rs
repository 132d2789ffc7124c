//! Weather snapshot and forecast sample models

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::matching::title_case;

/// Geographic coordinates reported by the provider
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
}

/// One 3-hour forecast reading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawSample {
    /// Local provider timestamp of the reading
    pub timestamp: NaiveDateTime,
    /// Temperature in Celsius
    pub temperature: f64,
    /// Relative humidity in percent
    pub humidity: f64,
    /// Whether the provider attached a rain block to this reading
    pub rain: bool,
    /// Free-text condition, e.g. "light rain"
    pub description: String,
}

impl RawSample {
    /// Calendar date used for daily grouping
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }
}

/// Current conditions used for advisories
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    /// Temperature in whole degrees Celsius
    pub temp: i32,
    /// Relative humidity in percent
    pub humidity: i32,
    pub description: String,
    /// City name as shown to the farmer
    pub city: String,
    /// Present only when the provider answered; required for forecasts
    pub coordinates: Option<Coordinates>,
}

impl CurrentWeather {
    pub const FALLBACK_TEMP: i32 = 25;
    pub const FALLBACK_HUMIDITY: i32 = 60;
    pub const FALLBACK_DESCRIPTION: &'static str = "clear sky";

    /// Safe snapshot used whenever the provider cannot be reached
    #[must_use]
    pub fn fallback(city: &str) -> Self {
        Self {
            temp: Self::FALLBACK_TEMP,
            humidity: Self::FALLBACK_HUMIDITY,
            description: Self::FALLBACK_DESCRIPTION.to_string(),
            city: title_case(city),
            coordinates: None,
        }
    }

    #[must_use]
    pub fn mentions_rain(&self) -> bool {
        self.description.to_lowercase().contains("rain")
    }

    #[must_use]
    pub fn mentions_drizzle(&self) -> bool {
        self.description.to_lowercase().contains("drizzle")
    }

    /// Format temperature with unit
    #[must_use]
    pub fn format_temperature(&self) -> String {
        format!("{}°C", self.temp)
    }
}

/// Python-style rounding used for every displayed reading: ties go to the even integer.
pub(crate) fn round_half_even(value: f64) -> i32 {
    value.round_ties_even() as i32
}
