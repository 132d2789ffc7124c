//! `kisan-mausam` - Weather-based crop advisories for Indian farmers
//!
//! This library turns current weather and 3-hourly forecasts into bilingual
//! (English/Hindi) farming guidance: daily forecast aggregation, forecast
//! stability scoring, crop advisories, regional risk calendars and resource
//! planning.

pub mod advisory;
pub mod config;
pub mod error;
pub mod forecast;
pub mod knowledge;
pub mod logging;
pub mod matching;
pub mod models;
pub mod report;
pub mod weather;

// Re-export core types for public API
pub use advisory::{CropInsights, DailyFarmInsights, FarmPlan, crop_insights};
pub use config::AppConfig;
pub use error::AdvisoryError;
pub use forecast::{Stability, StabilityAnalysis, aggregate_daily};
pub use models::{
    Advisory, AlertType, Crop, CurrentWeather, DailyAggregate, Farmer, RawSample, Season,
};
pub use report::{AdvisoryReport, PlanReport, build_plan, build_report};
pub use weather::{OpenWeatherClient, WeatherProvider};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, AdvisoryError>;
