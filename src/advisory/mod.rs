//! Advisory module
//!
//! Rule-based bilingual guidance for farmers:
//! - Per-crop advisories from weather and forecast stability
//! - Farm-wide daily summary and priority actions
//! - Resource planning for water, urea and seeds

pub mod crop;
pub mod farm;
pub mod planner;

pub use crop::{EXTENDED_HEAT_DAYS, FUNGAL_HUMIDITY_PCT, crop_insights};
pub use farm::{
    CropInsights, DailyFarmInsights, FarmCondition, FarmStatus, FarmSummary, MAX_PRIORITY_ACTIONS,
    PrimaryAction, PriorityAction, Urgency, daily_farm_insights, farm_status,
};
pub use planner::{CropPlan, FarmPlan, PlanAlert, PlanningContext, plan_crop, plan_farm};
