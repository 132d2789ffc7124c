//! Farm reports
//!
//! Fetches weather once per request and runs every analysis over it. Provider
//! failures degrade the report (fallback snapshot, no forecast) instead of
//! failing it.

use chrono::Month;
use serde::Serialize;
use tracing::info;

use crate::advisory::{
    CropInsights, DailyFarmInsights, FarmPlan, FarmStatus, PlanningContext, crop_insights,
    daily_farm_insights, farm_status, plan_farm,
};
use crate::forecast::{StabilityAnalysis, forecast_summary_en, forecast_summary_hi};
use crate::knowledge::{
    KNOWN_STATES, RiskAdvisory, risk_summary_en, risk_summary_hi, state_for_city,
    state_risk_advisories,
};
use crate::matching::normalize_input;
use crate::models::{CurrentWeather, DailyAggregate, Farmer};
use crate::weather::{WeatherProvider, current_or_default, daily_forecast};

/// Pick the state for a farm: an explicit state is normalized against the
/// known state names, otherwise the city's state is looked up.
#[must_use]
pub fn resolve_state(city: &str, explicit: Option<&str>) -> Option<String> {
    match explicit.map(str::trim).filter(|s| !s.is_empty()) {
        Some(state) => normalize_input(Some(state), Some(KNOWN_STATES)),
        None => state_for_city(city).map(str::to_string),
    }
}

/// Weather shared by every part of a report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherOutlook {
    pub current: CurrentWeather,
    pub forecast: Option<Vec<DailyAggregate>>,
    pub analysis: Option<StabilityAnalysis>,
    pub summary_en: String,
    pub summary_hi: String,
}

impl WeatherOutlook {
    /// Current conditions plus, when coordinates are known, the analysed forecast
    pub async fn fetch<P: WeatherProvider>(provider: &P, city: &str) -> Self {
        let current = current_or_default(provider, city).await;
        let forecast = match current.coordinates {
            Some(coordinates) => daily_forecast(provider, coordinates).await,
            None => None,
        };
        let analysis = forecast.as_deref().and_then(StabilityAnalysis::analyze);

        Self {
            summary_en: forecast_summary_en(analysis.as_ref()),
            summary_hi: forecast_summary_hi(analysis.as_ref()),
            current,
            forecast,
            analysis,
        }
    }
}

/// Regional risks for one state and month
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StateRisks {
    pub state: String,
    pub month: Month,
    pub risks: Vec<&'static RiskAdvisory>,
    pub summary_en: String,
    pub summary_hi: String,
}

impl StateRisks {
    #[must_use]
    pub fn lookup(state: &str, month: Month) -> Self {
        Self {
            state: state.to_string(),
            month,
            risks: state_risk_advisories(state, month),
            summary_en: risk_summary_en(state, month),
            summary_hi: risk_summary_hi(state, month),
        }
    }
}

/// Everything shown to a farmer for today
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdvisoryReport {
    pub farmer: String,
    pub outlook: WeatherOutlook,
    pub state_risks: StateRisks,
    pub crops: Vec<CropInsights>,
    pub daily: DailyFarmInsights,
    pub status: FarmStatus,
}

/// Resource plan together with the weather it was made for
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanReport {
    pub outlook: WeatherOutlook,
    pub state_risks: StateRisks,
    pub plan: FarmPlan,
}

pub async fn build_report<P: WeatherProvider>(
    provider: &P,
    farmer: &Farmer,
    month: Month,
) -> AdvisoryReport {
    let outlook = WeatherOutlook::fetch(provider, &farmer.profile.city).await;
    let state_risks = StateRisks::lookup(&farmer.profile.state, month);

    let crops: Vec<CropInsights> = farmer
        .crops
        .iter()
        .map(|crop| CropInsights {
            crop: crop.clone(),
            insights: crop_insights(&crop.name, &outlook.current, outlook.analysis.as_ref()),
        })
        .collect();
    let daily = daily_farm_insights(&crops, &outlook.current);
    let status = farm_status(&outlook.current, farmer.crops.len());

    info!(
        farmer = %farmer.username,
        city = %outlook.current.city,
        crops = crops.len(),
        primary_action = %daily.summary.primary_action,
        "Built advisory report"
    );

    AdvisoryReport {
        farmer: farmer.username.clone(),
        outlook,
        state_risks,
        crops,
        daily,
        status,
    }
}

pub async fn build_plan<P: WeatherProvider>(
    provider: &P,
    farmer: &Farmer,
    month: Month,
) -> PlanReport {
    let outlook = WeatherOutlook::fetch(provider, &farmer.profile.city).await;
    let state_risks = StateRisks::lookup(&farmer.profile.state, month);

    let ctx = PlanningContext {
        weather: &outlook.current,
        forecast: outlook.forecast.as_deref(),
        analysis: outlook.analysis.as_ref(),
        state_risks: &state_risks.risks,
    };
    let plan = plan_farm(&farmer.crops, Some(&farmer.profile.state), &ctx);

    info!(
        farmer = %farmer.username,
        crops = plan.crops.len(),
        water_saved = plan.total_water_saved_litres,
        "Built resource plan"
    );

    PlanReport {
        outlook,
        state_risks,
        plan,
    }
}
