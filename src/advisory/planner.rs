//! Farm resource planner
//!
//! Estimates water, urea and seed quantities per crop and adjusts the water
//! estimate for today's weather, the short-term forecast and the climate
//! zone of the farm.

use serde::Serialize;
use tracing::debug;

use super::crop::EXTENDED_HEAT_DAYS;
use crate::forecast::StabilityAnalysis;
use crate::knowledge::{RiskAdvisory, apply_location_adjustment, crop_profile};
use crate::models::{AlertType, Crop, CurrentWeather, DailyAggregate, Season};

/// Litres per acre for crops missing from the knowledge base
pub const DEFAULT_WATER_PER_ACRE: f64 = 12_000.0;
/// Kilograms of urea per acre
pub const UREA_PER_ACRE: f64 = 45.0;
/// Kilograms of seed per acre
pub const SEEDS_PER_ACRE: f64 = 40.0;

const FORECAST_LOOKAHEAD_DAYS: usize = 3;
const FORECAST_RAIN_DAYS: usize = 2;
const FORECAST_RAIN_MULTIPLIER: f64 = 0.7;
const HOT_MULTIPLIER: f64 = 1.2;
const EXTENDED_HEAT_MULTIPLIER: f64 = 1.3;
const HUMID_FACTOR: f64 = 0.9;
const COOL_FACTOR: f64 = 0.8;

const NORMAL_ADVICE_EN: &str = "Normal irrigation schedule";

/// Weather note attached to a crop plan
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanAlert {
    pub alert: AlertType,
    pub icon: &'static str,
    pub message_en: String,
    pub message_hi: String,
}

impl PlanAlert {
    fn new(alert: AlertType, icon: &'static str, message_en: String, message_hi: String) -> Self {
        Self {
            alert,
            icon,
            message_en,
            message_hi,
        }
    }
}

/// Resource estimate for a single crop
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CropPlan {
    pub crop: String,
    pub area_acres: f64,
    pub season: Season,
    /// Litres, truncated to whole litres
    pub water_litres: u64,
    pub urea_kg: f64,
    pub seeds_kg: f64,
    pub water_multiplier: f64,
    /// Absolute change against the unadjusted requirement, 0 when irrigation is skipped
    pub water_change_percent: u32,
    pub water_saved_litres: u64,
    pub efficiency_score: u8,
    pub irrigation_advice_en: String,
    pub irrigation_advice_hi: String,
    pub weather_alerts: Vec<PlanAlert>,
    /// First active state risk that affects farm plans
    pub state_alert: Option<&'static RiskAdvisory>,
}

/// Plans for every crop on the farm
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FarmPlan {
    pub city: String,
    pub state: Option<String>,
    pub crops: Vec<CropPlan>,
    pub total_area: f64,
    pub total_water_saved_litres: u64,
}

/// Everything the planner knows about conditions at the farm
#[derive(Debug, Clone, Copy)]
pub struct PlanningContext<'a> {
    pub weather: &'a CurrentWeather,
    pub forecast: Option<&'a [DailyAggregate]>,
    pub analysis: Option<&'a StabilityAnalysis>,
    pub state_risks: &'a [&'static RiskAdvisory],
}

fn efficiency_score(multiplier: f64) -> u8 {
    if multiplier == 0.0 {
        98
    } else if multiplier < 1.0 {
        95
    } else if multiplier > HOT_MULTIPLIER {
        75
    } else {
        88
    }
}

/// Plan resources for one crop
#[must_use]
pub fn plan_crop(crop: &Crop, ctx: &PlanningContext<'_>) -> CropPlan {
    let area = crop.area_acres;
    let temp = ctx.weather.temp;
    let humidity = ctx.weather.humidity;

    let (season, base_water) = match crop_profile(&crop.name) {
        Some(profile) => (profile.season, profile.water_requirement.base_water_per_acre()),
        None => (crop.season, DEFAULT_WATER_PER_ACRE),
    };
    let (base_water, base_urea) =
        apply_location_adjustment(base_water, UREA_PER_ACRE, &ctx.weather.city);

    let mut multiplier = 1.0;
    let mut alerts = Vec::new();
    let mut advice_en = NORMAL_ADVICE_EN.to_string();
    let mut advice_hi = "सामान्य सिंचाई कार्यक्रम".to_string();
    let mut water_saved = 0.0;

    if ctx.weather.mentions_rain() || ctx.weather.mentions_drizzle() {
        multiplier = 0.0;
        alerts.push(PlanAlert::new(
            AlertType::Info,
            "🌧️",
            "Rain expected - Skip irrigation today".to_string(),
            "बारिश की उम्मीद - आज सिंचाई छोड़ें".to_string(),
        ));
        advice_en = "SKIP IRRIGATION - Rain will provide water".to_string();
        advice_hi = "सिंचाई छोड़ें - बारिश पानी देगी".to_string();
        water_saved = base_water * area;
    } else if let Some(forecast) = ctx.forecast {
        let rain_days = forecast
            .iter()
            .take(FORECAST_LOOKAHEAD_DAYS)
            .filter(|day| day.rain)
            .count();
        if rain_days >= FORECAST_RAIN_DAYS {
            multiplier = FORECAST_RAIN_MULTIPLIER;
            alerts.push(PlanAlert::new(
                AlertType::Info,
                "🌦️",
                format!("Rain expected in next {rain_days} days - Reduce irrigation"),
                format!("अगले {rain_days} दिनों में बारिश की उम्मीद - सिंचाई कम करें"),
            ));
            advice_en = "Light irrigation only - Rain coming soon".to_string();
            advice_hi = "हल्की सिंचाई - जल्द बारिश आएगी".to_string();
        }
    }

    if temp > 35 && multiplier > 0.0 {
        multiplier = f64::max(multiplier, HOT_MULTIPLIER);
        alerts.push(PlanAlert::new(
            AlertType::Warning,
            "🔥",
            format!("High temperature ({temp}°C) - Increase watering by 20%"),
            format!("उच्च तापमान ({temp}°C) - पानी 20% बढ़ाएं"),
        ));
        if advice_en == NORMAL_ADVICE_EN {
            advice_en = "EXTRA watering needed - Water early morning (before 7 AM)".to_string();
            advice_hi = "अतिरिक्त पानी चाहिए - सुबह जल्दी पानी दें (7 बजे से पहले)".to_string();
        }
    }

    if let Some(days) = ctx
        .analysis
        .map(|a| a.max_consecutive_hot)
        .filter(|&streak| streak >= EXTENDED_HEAT_DAYS)
        && multiplier > 0.0
    {
        multiplier = f64::max(multiplier, EXTENDED_HEAT_MULTIPLIER);
        alerts.push(PlanAlert::new(
            AlertType::Danger,
            "🌡️",
            format!("Extended heat ({days} days) - Plan extra water"),
            format!("लंबी गर्मी ({days} दिन) - अतिरिक्त पानी की योजना बनाएं"),
        ));
    }

    if humidity > 80 && multiplier > 0.0 {
        multiplier *= HUMID_FACTOR;
        alerts.push(PlanAlert::new(
            AlertType::Info,
            "💧",
            format!("High humidity ({humidity}%) - Reduce watering slightly"),
            format!("अधिक नमी ({humidity}%) - पानी थोड़ा कम करें"),
        ));
    }

    if temp < 15 && multiplier > 0.0 {
        multiplier *= COOL_FACTOR;
        alerts.push(PlanAlert::new(
            AlertType::Info,
            "❄️",
            format!("Cool weather ({temp}°C) - Less water needed"),
            format!("ठंडा मौसम ({temp}°C) - कम पानी चाहिए"),
        ));
    }

    let state_alert = ctx
        .state_risks
        .iter()
        .copied()
        .find(|risk| risk.kind.affects_farm_plan());

    let water_change_percent = if multiplier == 0.0 {
        0
    } else {
        ((multiplier - 1.0).abs() * 100.0).round() as u32
    };

    let plan = CropPlan {
        crop: crop.name.clone(),
        area_acres: area,
        season,
        water_litres: (area * base_water * multiplier) as u64,
        urea_kg: area * base_urea,
        seeds_kg: area * SEEDS_PER_ACRE,
        water_multiplier: multiplier,
        water_change_percent,
        water_saved_litres: water_saved as u64,
        efficiency_score: efficiency_score(multiplier),
        irrigation_advice_en: advice_en,
        irrigation_advice_hi: advice_hi,
        weather_alerts: alerts,
        state_alert,
    };
    debug!(
        crop = %plan.crop,
        water = plan.water_litres,
        multiplier = plan.water_multiplier,
        "Planned crop resources"
    );
    plan
}

/// Plan every crop and total up area and water saved
#[must_use]
pub fn plan_farm(crops: &[Crop], state: Option<&str>, ctx: &PlanningContext<'_>) -> FarmPlan {
    let plans: Vec<CropPlan> = crops.iter().map(|crop| plan_crop(crop, ctx)).collect();

    FarmPlan {
        city: ctx.weather.city.clone(),
        state: state.map(str::to_string),
        total_area: crops.iter().map(|crop| crop.area_acres).sum(),
        total_water_saved_litres: plans.iter().map(|plan| plan.water_saved_litres).sum(),
        crops: plans,
    }
}
