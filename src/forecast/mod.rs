//! Forecast module
//!
//! Turns raw 3-hourly provider samples into daily aggregates and scores the
//! resulting window for stability:
//! - Daily aggregation with the provider's day-boundary semantics
//! - Temperature swing, heat streak and rain pattern heuristics
//! - Bilingual stability summaries

pub mod aggregate;
pub mod stability;

pub use aggregate::{MAX_FORECAST_DAYS, aggregate_daily};
pub use stability::{
    FLUCTUATION_THRESHOLD_C, FluctuationEvent, HOT_DAY_THRESHOLD_C, MIN_ANALYSIS_DAYS, RiskLevel,
    Stability, StabilityAnalysis, WIDE_RANGE_THRESHOLD_C, forecast_summary_en,
    forecast_summary_hi,
};
