//! Crop advisory rules
//!
//! Selects canned bilingual advisories for one crop from the current weather
//! snapshot and, when available, the forecast stability analysis.

use tracing::debug;

use crate::forecast::{Stability, StabilityAnalysis};
use crate::knowledge::{CropProfile, WaterRequirement, crop_profile};
use crate::models::{Advisory, AdvisoryKey, AlertType, CurrentWeather};

/// Heat streak length that turns a hot day into an extended heat period
pub const EXTENDED_HEAT_DAYS: usize = 3;
/// Humidity above which fungal disease becomes likely
pub const FUNGAL_HUMIDITY_PCT: i32 = 80;

const GENERIC_HEAT_C: i32 = 35;
const GENERIC_COLD_C: i32 = 15;

struct Text<'a> {
    message_en: &'a str,
    message_hi: &'a str,
    action_en: &'a str,
    action_hi: &'a str,
}

fn advisory(key: AdvisoryKey, alert: AlertType, icon: &'static str, text: Text<'_>) -> Advisory {
    Advisory {
        key,
        message_en: text.message_en.to_string(),
        message_hi: text.message_hi.to_string(),
        alert,
        action_en: text.action_en.to_string(),
        action_hi: text.action_hi.to_string(),
        icon,
    }
}

/// Advisories for `crop_name` under the given weather.
///
/// Crops found in the knowledge base get the full rule chain: temperature,
/// forecast stability, irrigation and disease risk. Any other crop gets the
/// generic heat/cold/rain rules.
#[must_use]
pub fn crop_insights(
    crop_name: &str,
    weather: &CurrentWeather,
    analysis: Option<&StabilityAnalysis>,
) -> Vec<Advisory> {
    let insights = match crop_profile(crop_name) {
        Some(profile) => known_crop_insights(crop_name, profile, weather, analysis),
        None => generic_insights(crop_name, weather),
    };
    debug!(crop = crop_name, count = insights.len(), "Selected crop advisories");
    insights
}

fn known_crop_insights(
    crop_name: &str,
    profile: &CropProfile,
    weather: &CurrentWeather,
    analysis: Option<&StabilityAnalysis>,
) -> Vec<Advisory> {
    let temp = weather.temp;
    let humidity = weather.humidity;
    let name_hi = profile.name_hi;
    let mut insights = Vec::new();

    // Temperature
    let hot_streak = analysis
        .map(|a| a.max_consecutive_hot)
        .filter(|&streak| streak >= EXTENDED_HEAT_DAYS);

    if let Some(days) = hot_streak {
        insights.push(advisory(
            AdvisoryKey::ExtendedHeatStress,
            AlertType::Danger,
            "🔥",
            Text {
                message_en: &format!("⚠️ Extended heat period ({days} days) will stress {crop_name}"),
                message_hi: &format!("⚠️ लंबी गर्मी की अवधि ({days} दिन) {name_hi} को तनाव देगी"),
                action_en: &format!(
                    "Plan increased irrigation for next {days} days. Consider mulching to retain moisture."
                ),
                action_hi: &format!(
                    "अगले {days} दिनों के लिए बढ़ी हुई सिंचाई की योजना बनाएं। नमी बनाए रखने के लिए मल्चिंग पर विचार करें।"
                ),
            },
        ));
    }

    if temp >= profile.heat_stress_threshold && hot_streak.is_none() {
        insights.push(advisory(
            AdvisoryKey::HeatStressCritical,
            AlertType::Danger,
            "🔥",
            Text {
                message_en: &format!("⚠️ Critical heat stress for {crop_name}"),
                message_hi: &format!("⚠️ {name_hi} के लिए गंभीर गर्मी का तनाव"),
                action_en: "Irrigate early morning (before 7 AM). Provide shade if possible.",
                action_hi: "सुबह जल्दी (7 बजे से पहले) सिंचाई करें। संभव हो तो छाया दें।",
            },
        ));
    } else if temp > profile.ideal_temp_max {
        insights.push(advisory(
            AdvisoryKey::HeatStressModerate,
            AlertType::Warning,
            "🌡️",
            Text {
                message_en: &format!("High temperature may stress {crop_name}"),
                message_hi: &format!("अधिक तापमान {name_hi} को नुकसान पहुँचा सकता है"),
                action_en: "Avoid irrigation during afternoon. Water in evening or early morning.",
                action_hi: "दोपहर में सिंचाई न करें। शाम या सुबह पानी दें।",
            },
        ));
    } else if temp < profile.ideal_temp_min {
        insights.push(advisory(
            AdvisoryKey::ColdStress,
            AlertType::Info,
            "❄️",
            Text {
                message_en: &format!("Temperature below ideal for {crop_name}"),
                message_hi: &format!("{name_hi} के लिए तापमान कम है"),
                action_en: "Growth may slow down. No immediate action needed.",
                action_hi: "विकास धीमा हो सकता है। तुरंत कोई कार्रवाई जरूरी नहीं।",
            },
        ));
    } else {
        insights.push(advisory(
            AdvisoryKey::TempFavorable,
            AlertType::Success,
            "✅",
            Text {
                message_en: &format!("Favorable temperature for {crop_name}"),
                message_hi: &format!("{name_hi} के लिए अनुकूल तापमान"),
                action_en: "Continue normal farming practices.",
                action_hi: "सामान्य खेती जारी रखें।",
            },
        ));
    }

    // Forecast stability
    if analysis.is_some_and(|a| a.stability == Stability::HighlyUnstable) {
        insights.push(advisory(
            AdvisoryKey::WeatherUnpredictable,
            AlertType::Warning,
            "⚠️",
            Text {
                message_en: &format!("Unstable weather pattern this week - risky for {crop_name}"),
                message_hi: &format!("इस सप्ताह अस्थिर मौसम पैटर्न - {name_hi} के लिए जोखिम भरा"),
                action_en: "Delay major farming decisions (spraying, fertilizing). Monitor daily weather.",
                action_hi: "प्रमुख खेती के निर्णयों (छिड़काव, उर्वरक) में देरी करें। दैनिक मौसम की निगरानी करें।",
            },
        ));
    }

    // Irrigation
    if weather.mentions_rain() || weather.mentions_drizzle() {
        insights.push(advisory(
            AdvisoryKey::RainDetected,
            AlertType::Info,
            "🌧️",
            Text {
                message_en: "Rain expected or ongoing",
                message_hi: "बारिश होने वाली है या हो रही है",
                action_en: "Skip irrigation today. Save water and costs.",
                action_hi: "आज सिंचाई छोड़ दें। पानी और खर्च बचाएं।",
            },
        ));
    } else {
        match profile.water_requirement {
            WaterRequirement::High if humidity < 60 => insights.push(advisory(
                AdvisoryKey::IrrigationHighNeed,
                AlertType::Warning,
                "💧",
                Text {
                    message_en: &format!("{crop_name} needs regular watering"),
                    message_hi: &format!("{name_hi} को नियमित पानी चाहिए"),
                    action_en: "Irrigate daily. Check soil moisture regularly.",
                    action_hi: "रोज़ाना सिंचाई करें। मिट्टी की नमी जांचें।",
                },
            )),
            WaterRequirement::Medium if humidity < 50 && temp > 30 => insights.push(advisory(
                AdvisoryKey::IrrigationMediumNeed,
                AlertType::Info,
                "💧",
                Text {
                    message_en: "Moderate irrigation required",
                    message_hi: "मध्यम सिंचाई आवश्यक है",
                    action_en: "Irrigate every 2-3 days based on soil condition.",
                    action_hi: "मिट्टी की स्थिति के अनुसार 2-3 दिन में सिंचाई करें।",
                },
            )),
            WaterRequirement::Low if temp > 35 => insights.push(advisory(
                AdvisoryKey::IrrigationLowNeed,
                AlertType::Info,
                "💧",
                Text {
                    message_en: &format!("{crop_name} is drought-tolerant but needs care in heat"),
                    message_hi: &format!("{name_hi} सूखा सहनशील है पर गर्मी में देखभाल चाहिए"),
                    action_en: "Light irrigation every 4-5 days is sufficient.",
                    action_hi: "हर 4-5 दिन में हल्की सिंचाई काफी है।",
                },
            )),
            _ => {}
        }
    }

    // Disease
    if humidity > FUNGAL_HUMIDITY_PCT {
        insights.push(advisory(
            AdvisoryKey::FungalRisk,
            AlertType::Warning,
            "🍄",
            Text {
                message_en: "High humidity increases fungal disease risk",
                message_hi: "अधिक नमी से फफूंद रोग का खतरा बढ़ता है",
                action_en: "Monitor for leaf spots. Ensure good air circulation.",
                action_hi: "पत्तियों पर धब्बे देखें। हवा का संचार अच्छा रखें।",
            },
        ));
    }

    insights
}

fn generic_insights(crop_name: &str, weather: &CurrentWeather) -> Vec<Advisory> {
    let mut insights = Vec::new();

    if weather.temp > GENERIC_HEAT_C {
        insights.push(advisory(
            AdvisoryKey::GenericHeat,
            AlertType::Warning,
            "🔥",
            Text {
                message_en: &format!("High heat may affect {crop_name}"),
                message_hi: &format!("अधिक गर्मी {crop_name} को प्रभावित कर सकती है"),
                action_en: "Increase watering frequency. Avoid midday activities.",
                action_hi: "पानी देने की आवृत्ति बढ़ाएं। दोपहर में काम न करें।",
            },
        ));
    } else if weather.temp < GENERIC_COLD_C {
        insights.push(advisory(
            AdvisoryKey::GenericCold,
            AlertType::Info,
            "❄️",
            Text {
                message_en: &format!("Cool weather for {crop_name}"),
                message_hi: &format!("{crop_name} के लिए ठंडा मौसम"),
                action_en: "Monitor growth. Protect from frost if needed.",
                action_hi: "विकास पर नजर रखें। जरूरत हो तो पाले से बचाएं।",
            },
        ));
    } else {
        insights.push(advisory(
            AdvisoryKey::GenericNormal,
            AlertType::Success,
            "✅",
            Text {
                message_en: &format!("Weather conditions suitable for {crop_name}"),
                message_hi: &format!("{crop_name} के लिए मौसम उपयुक्त है"),
                action_en: "Continue regular farm operations.",
                action_hi: "नियमित खेती जारी रखें।",
            },
        ));
    }

    // Drizzle alone does not count here
    if weather.mentions_rain() {
        insights.push(advisory(
            AdvisoryKey::GenericRain,
            AlertType::Info,
            "🌧️",
            Text {
                message_en: "Rain expected",
                message_hi: "बारिश की संभावना",
                action_en: "Skip irrigation. Prepare drainage if heavy rain.",
                action_hi: "सिंचाई छोड़ें। भारी बारिश हो तो जल निकासी तैयार रखें।",
            },
        ));
    }

    insights
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forecast::RiskLevel;
    use rstest::rstest;

    fn weather(temp: i32, humidity: i32, description: &str) -> CurrentWeather {
        CurrentWeather {
            temp,
            humidity,
            description: description.to_string(),
            city: "Delhi".to_string(),
            coordinates: None,
        }
    }

    fn analysis(max_consecutive_hot: usize, stability: Stability) -> StabilityAnalysis {
        StabilityAnalysis {
            fluctuation_count: 0,
            fluctuation_days: Vec::new(),
            max_consecutive_hot,
            rain_days: 0,
            temp_range: 0,
            instability_points: 0,
            stability,
            risk_level: RiskLevel::Low,
            warnings: Vec::new(),
        }
    }

    fn keys(insights: &[Advisory]) -> Vec<AdvisoryKey> {
        insights.iter().map(|a| a.key).collect()
    }

    #[rstest]
    #[case(31, vec![AdvisoryKey::HeatStressCritical])]
    #[case(30, vec![AdvisoryKey::HeatStressCritical])]
    #[case(27, vec![AdvisoryKey::HeatStressModerate])]
    #[case(5, vec![AdvisoryKey::ColdStress])]
    #[case(20, vec![AdvisoryKey::TempFavorable])]
    fn test_wheat_temperature_rules(#[case] temp: i32, #[case] expected: Vec<AdvisoryKey>) {
        // humidity 70 keeps the irrigation and fungal rules quiet for Wheat
        let insights = crop_insights("Wheat", &weather(temp, 70, "clear sky"), None);
        assert_eq!(keys(&insights), expected);
    }

    #[test]
    fn test_extended_heat_replaces_critical_heat() {
        let hot = analysis(4, Stability::ModeratelyUnstable);
        let insights = crop_insights("Wheat", &weather(40, 70, "clear sky"), Some(&hot));
        assert_eq!(keys(&insights), vec![AdvisoryKey::ExtendedHeatStress, AdvisoryKey::HeatStressModerate]);
        assert_eq!(insights[0].alert, AlertType::Danger);
        assert_eq!(insights[0].message_en, "⚠️ Extended heat period (4 days) will stress Wheat");
        assert_eq!(insights[0].message_hi, "⚠️ लंबी गर्मी की अवधि (4 दिन) गेहूं को तनाव देगी");
    }

    #[test]
    fn test_short_heat_streak_is_ignored() {
        let warm = analysis(2, Stability::Stable);
        let insights = crop_insights("Wheat", &weather(31, 70, "clear sky"), Some(&warm));
        assert_eq!(keys(&insights), vec![AdvisoryKey::HeatStressCritical]);
    }

    #[test]
    fn test_unstable_week_warning() {
        let unstable = analysis(0, Stability::HighlyUnstable);
        let insights = crop_insights("wheat", &weather(20, 70, "clear sky"), Some(&unstable));
        assert_eq!(keys(&insights), vec![AdvisoryKey::TempFavorable, AdvisoryKey::WeatherUnpredictable]);
        assert_eq!(insights[1].message_en, "Unstable weather pattern this week - risky for wheat");
    }

    #[rstest]
    #[case("light rain")]
    #[case("Drizzle")]
    fn test_rain_skips_irrigation(#[case] description: &str) {
        let insights = crop_insights("Rice", &weather(28, 40, description), None);
        assert_eq!(keys(&insights), vec![AdvisoryKey::TempFavorable, AdvisoryKey::RainDetected]);
    }

    #[rstest]
    #[case("Rice", 28, 40, Some(AdvisoryKey::IrrigationHighNeed))]
    #[case("Rice", 28, 60, None)]
    #[case("Maize", 31, 45, Some(AdvisoryKey::IrrigationMediumNeed))]
    #[case("Maize", 30, 45, None)]
    #[case("Mustard", 36, 70, Some(AdvisoryKey::IrrigationLowNeed))]
    #[case("Mustard", 35, 70, None)]
    fn test_irrigation_rules(
        #[case] crop: &str,
        #[case] temp: i32,
        #[case] humidity: i32,
        #[case] expected: Option<AdvisoryKey>,
    ) {
        let insights = crop_insights(crop, &weather(temp, humidity, "haze"), None);
        let irrigation = insights.iter().map(|a| a.key).find(|key| {
            matches!(
                key,
                AdvisoryKey::IrrigationHighNeed
                    | AdvisoryKey::IrrigationMediumNeed
                    | AdvisoryKey::IrrigationLowNeed
            )
        });
        assert_eq!(irrigation, expected);
    }

    #[test]
    fn test_fungal_risk() {
        let insights = crop_insights("Cotton", &weather(28, 85, "overcast clouds"), None);
        assert_eq!(insights.last().map(|a| a.key), Some(AdvisoryKey::FungalRisk));

        let insights = crop_insights("Cotton", &weather(28, 80, "overcast clouds"), None);
        assert!(!keys(&insights).contains(&AdvisoryKey::FungalRisk));
    }

    #[rstest]
    #[case(36, "clear sky", vec![AdvisoryKey::GenericHeat])]
    #[case(14, "moderate rain", vec![AdvisoryKey::GenericCold, AdvisoryKey::GenericRain])]
    #[case(25, "drizzle", vec![AdvisoryKey::GenericNormal])]
    fn test_unknown_crop_rules(
        #[case] temp: i32,
        #[case] description: &str,
        #[case] expected: Vec<AdvisoryKey>,
    ) {
        let insights = crop_insights("Dragonfruit", &weather(temp, 90, description), None);
        assert_eq!(keys(&insights), expected);
        assert!(insights[0].message_en.contains("Dragonfruit"));
    }
}
