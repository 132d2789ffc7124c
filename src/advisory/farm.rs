//! Farm-wide summaries built from per-crop advisories

use serde::Serialize;
use std::fmt;

use crate::models::{Advisory, AlertType, Crop, CurrentWeather};

/// Number of priority actions surfaced for a day
pub const MAX_PRIORITY_ACTIONS: usize = 5;

const HOT_C: i32 = 35;
const COLD_C: i32 = 15;
const HUMID_PCT: i32 = 80;

/// Advisories selected for one of the farmer's crops
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CropInsights {
    pub crop: Crop,
    pub insights: Vec<Advisory>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    High,
    Medium,
    Low,
}

/// One thing the farmer should do today, ranked by `priority` (1 is most urgent)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriorityAction {
    pub priority: u8,
    pub crop: String,
    pub crop_area: f64,
    pub action_en: String,
    pub action_hi: String,
    pub urgency: Urgency,
    pub icon: &'static str,
}

impl PriorityAction {
    fn from_advisory(priority: u8, urgency: Urgency, crop: &Crop, advisory: &Advisory) -> Self {
        Self {
            priority,
            crop: crop.name.clone(),
            crop_area: crop.area_acres,
            action_en: advisory.action_en.clone(),
            action_hi: advisory.action_hi.clone(),
            urgency,
            icon: advisory.icon,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PrimaryAction {
    Irrigate,
    Monitor,
    Protect,
    UrgentAction,
    Normal,
}

impl fmt::Display for PrimaryAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PrimaryAction::Irrigate => "IRRIGATE",
            PrimaryAction::Monitor => "MONITOR",
            PrimaryAction::Protect => "PROTECT",
            PrimaryAction::UrgentAction => "URGENT_ACTION",
            PrimaryAction::Normal => "NORMAL",
        };
        write!(f, "{label}")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FarmSummary {
    pub primary_action: PrimaryAction,
    pub primary_action_en: String,
    pub primary_action_hi: String,
    pub crops_under_stress: usize,
    pub crops_needing_monitoring: usize,
    pub crops_doing_well: usize,
    pub total_crops: usize,
    pub weather_tip_en: String,
    pub weather_tip_hi: String,
    pub temp: i32,
    pub humidity: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyFarmInsights {
    pub summary: FarmSummary,
    pub priority_actions: Vec<PriorityAction>,
}

/// Summarise the day across every crop.
///
/// A crop with any danger advisory counts as stressed, one with a warning
/// as needing monitoring, anything else as doing well. Danger and warning
/// advisories become priority 1 and 2 actions; a healthy crop contributes
/// its first advisory as a priority 3 action. The list is stably sorted by
/// priority and cut to [`MAX_PRIORITY_ACTIONS`].
#[must_use]
pub fn daily_farm_insights(crops: &[CropInsights], weather: &CurrentWeather) -> DailyFarmInsights {
    let mut stressed = 0;
    let mut monitoring = 0;
    let mut doing_well = 0;
    let mut actions = Vec::new();

    for CropInsights { crop, insights } in crops {
        let mut has_danger = false;
        let mut has_warning = false;

        for advisory in insights {
            match advisory.alert {
                AlertType::Danger => {
                    has_danger = true;
                    actions.push(PriorityAction::from_advisory(1, Urgency::High, crop, advisory));
                }
                AlertType::Warning => {
                    has_warning = true;
                    actions.push(PriorityAction::from_advisory(2, Urgency::Medium, crop, advisory));
                }
                AlertType::Success | AlertType::Info => {}
            }
        }

        if has_danger {
            stressed += 1;
        } else if has_warning {
            monitoring += 1;
        } else {
            doing_well += 1;
            if let Some(first) = insights.first() {
                actions.push(PriorityAction::from_advisory(3, Urgency::Low, crop, first));
            }
        }
    }

    // sort_by_key is stable, equal priorities keep crop order
    actions.sort_by_key(|action| action.priority);
    actions.truncate(MAX_PRIORITY_ACTIONS);

    let temp = weather.temp;
    let humidity = weather.humidity;
    let (primary_action, primary_action_en, primary_action_hi, weather_tip_en, weather_tip_hi) =
        if temp > HOT_C {
            (
                PrimaryAction::Irrigate,
                "Focus on irrigation today",
                "आज सिंचाई पर ध्यान दें",
                format!("High temperature ({temp}°C) - water crops early morning (before 7 AM)."),
                format!("उच्च तापमान ({temp}°C) - सुबह जल्दी (7 बजे से पहले) फसलों को पानी दें।"),
            )
        } else if humidity > HUMID_PCT {
            (
                PrimaryAction::Monitor,
                "Monitor crops for disease",
                "फसलों में बीमारी की निगरानी करें",
                format!("High humidity ({humidity}%) increases fungal disease risk."),
                format!("अधिक नमी ({humidity}%) से फफूंद रोग का खतरा बढ़ता है।"),
            )
        } else if weather.mentions_rain() {
            (
                PrimaryAction::Protect,
                "Prepare for rain",
                "बारिश के लिए तैयार रहें",
                "Rain expected - skip irrigation and ensure drainage.".to_string(),
                "बारिश की संभावना - सिंचाई छोड़ें।".to_string(),
            )
        } else if temp < COLD_C {
            (
                PrimaryAction::Protect,
                "Protect from cold",
                "ठंड से बचाएं",
                format!("Low temperature ({temp}°C) - protect from frost."),
                format!("कम तापमान ({temp}°C) - पाले से बचाएं।"),
            )
        } else if stressed > 0 {
            (
                PrimaryAction::UrgentAction,
                "Urgent action required",
                "तत्काल कार्रवाई आवश्यक",
                format!("{stressed} crop(s) under stress."),
                format!("{stressed} फसल(ें) तनाव में हैं।"),
            )
        } else {
            (
                PrimaryAction::Normal,
                "Continue regular farm operations",
                "नियमित खेती जारी रखें",
                "Weather conditions are stable today.".to_string(),
                "मौसम की स्थिति आज स्थिर है।".to_string(),
            )
        };

    DailyFarmInsights {
        summary: FarmSummary {
            primary_action,
            primary_action_en: primary_action_en.to_string(),
            primary_action_hi: primary_action_hi.to_string(),
            crops_under_stress: stressed,
            crops_needing_monitoring: monitoring,
            crops_doing_well: doing_well,
            total_crops: crops.len(),
            weather_tip_en,
            weather_tip_hi,
            temp,
            humidity,
        },
        priority_actions: actions,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FarmCondition {
    Hot,
    Humid,
    Normal,
}

/// Dashboard headline for the farm
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FarmStatus {
    pub status: FarmCondition,
    pub advice_en: &'static str,
    pub advice_hi: &'static str,
    pub total_crops: usize,
    pub temp: i32,
    pub humidity: i32,
}

#[must_use]
pub fn farm_status(weather: &CurrentWeather, crop_count: usize) -> FarmStatus {
    let (status, advice_en, advice_hi) = if weather.temp > HOT_C {
        (
            FarmCondition::Hot,
            "High temperature – irrigation needed.",
            "अधिक तापमान – सिंचाई आवश्यक है।",
        )
    } else if weather.humidity > HUMID_PCT {
        (
            FarmCondition::Humid,
            "High humidity – monitor for disease.",
            "अधिक नमी – रोगों पर नजर रखें।",
        )
    } else {
        (
            FarmCondition::Normal,
            "Farm conditions are stable.",
            "खेत की स्थिति सामान्य है।",
        )
    };

    FarmStatus {
        status,
        advice_en,
        advice_hi,
        total_crops: crop_count,
        temp: weather.temp,
        humidity: weather.humidity,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisory::crop_insights;
    use crate::models::Season;
    use rstest::rstest;

    fn weather(temp: i32, humidity: i32, description: &str) -> CurrentWeather {
        CurrentWeather {
            temp,
            humidity,
            description: description.to_string(),
            city: "Jaipur".to_string(),
            coordinates: None,
        }
    }

    fn insights_for(name: &str, season: Season, area: f64, weather: &CurrentWeather) -> CropInsights {
        CropInsights {
            crop: Crop::new(name, season, area).unwrap(),
            insights: crop_insights(name, weather, None),
        }
    }

    #[test]
    fn test_crop_buckets_and_actions() {
        let today = weather(31, 70, "clear sky");
        let crops = vec![
            insights_for("Wheat", Season::Rabi, 2.0, &today),
            insights_for("Maize", Season::Kharif, 1.5, &today),
            insights_for("Rice", Season::Kharif, 3.0, &today),
        ];

        let result = daily_farm_insights(&crops, &today);
        let summary = &result.summary;
        assert_eq!(summary.crops_under_stress, 1);
        assert_eq!(summary.crops_needing_monitoring, 0);
        assert_eq!(summary.crops_doing_well, 2);
        assert_eq!(summary.total_crops, 3);
        assert_eq!(summary.primary_action, PrimaryAction::UrgentAction);
        assert_eq!(summary.weather_tip_en, "1 crop(s) under stress.");

        let order: Vec<(u8, &str)> = result
            .priority_actions
            .iter()
            .map(|a| (a.priority, a.crop.as_str()))
            .collect();
        assert_eq!(order, vec![(1, "Wheat"), (3, "Maize"), (3, "Rice")]);
        assert_eq!(result.priority_actions[0].urgency, Urgency::High);
        assert_eq!(result.priority_actions[0].crop_area, 2.0);
    }

    #[test]
    fn test_priority_actions_are_capped() {
        let today = weather(31, 85, "clear sky");
        let crops: Vec<CropInsights> = ["Wheat", "Barley", "Mustard"]
            .into_iter()
            .map(|name| insights_for(name, Season::Rabi, 1.0, &today))
            .collect();

        let result = daily_farm_insights(&crops, &today);
        assert_eq!(result.priority_actions.len(), MAX_PRIORITY_ACTIONS);
        assert!(result.priority_actions.windows(2).all(|w| w[0].priority <= w[1].priority));
        assert_eq!(result.summary.crops_under_stress, 2);
        assert_eq!(result.summary.crops_needing_monitoring, 1);
        assert_eq!(result.summary.primary_action, PrimaryAction::Monitor);
    }

    #[rstest]
    #[case(36, 90, "clear sky", PrimaryAction::Irrigate, "Focus on irrigation today")]
    #[case(30, 81, "light rain", PrimaryAction::Monitor, "Monitor crops for disease")]
    #[case(22, 70, "Light Rain", PrimaryAction::Protect, "Prepare for rain")]
    #[case(12, 50, "mist", PrimaryAction::Protect, "Protect from cold")]
    #[case(22, 50, "clear sky", PrimaryAction::Normal, "Continue regular farm operations")]
    fn test_primary_action_order(
        #[case] temp: i32,
        #[case] humidity: i32,
        #[case] description: &str,
        #[case] expected: PrimaryAction,
        #[case] expected_en: &str,
    ) {
        let result = daily_farm_insights(&[], &weather(temp, humidity, description));
        assert_eq!(result.summary.primary_action, expected);
        assert_eq!(result.summary.primary_action_en, expected_en);
        assert!(result.priority_actions.is_empty());
    }

    #[test]
    fn test_weather_tips_are_bilingual() {
        let result = daily_farm_insights(&[], &weather(37, 40, "clear sky"));
        assert_eq!(
            result.summary.weather_tip_en,
            "High temperature (37°C) - water crops early morning (before 7 AM)."
        );
        assert_eq!(
            result.summary.weather_tip_hi,
            "उच्च तापमान (37°C) - सुबह जल्दी (7 बजे से पहले) फसलों को पानी दें।"
        );
    }

    #[rstest]
    #[case(36, 90, FarmCondition::Hot)]
    #[case(35, 81, FarmCondition::Humid)]
    #[case(35, 80, FarmCondition::Normal)]
    fn test_farm_status(#[case] temp: i32, #[case] humidity: i32, #[case] expected: FarmCondition) {
        let status = farm_status(&weather(temp, humidity, "haze"), 4);
        assert_eq!(status.status, expected);
        assert_eq!(status.total_crops, 4);
    }
}
