//! Data models for the advisory engine
//!
//! This module contains the core domain models organized by concern:
//! - Weather: current conditions and raw 3-hourly samples
//! - Forecast: daily aggregates derived from samples
//! - Advisory: bilingual advisory records
//! - Farm: farmers, profiles and crops

pub mod advisory;
pub mod farm;
pub mod forecast;
pub mod weather;

// Re-export all public types for convenient access
pub use advisory::{Advisory, AdvisoryKey, AlertType};
pub use farm::{Crop, Farmer, FarmerProfile, Season};
pub use forecast::DailyAggregate;
pub use weather::{Coordinates, CurrentWeather, RawSample};
