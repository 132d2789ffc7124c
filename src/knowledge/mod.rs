//! Static agricultural knowledge
//!
//! Crop and season parameters, the city to state map, the regional risk
//! calendar and climate zone factors. Everything here is immutable lookup data.

pub mod cities;
pub mod climate;
pub mod crops;
pub mod risks;

pub use cities::{KNOWN_STATES, state_for_city};
pub use climate::{ClimateZone, apply_location_adjustment};
pub use crops::{
    CROP_KNOWLEDGE_BASE, CropProfile, SeasonRules, WaterRequirement, crop_profile, season_rules,
    season_rules_by_name,
};
pub use risks::{
    RiskAdvisory, RiskKind, current_month, month_risks, risk_summary_en, risk_summary_hi,
    state_risk_advisories,
};
