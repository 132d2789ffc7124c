//! Forecast stability analysis
//!
//! Scores a 3-7 day window of [`DailyAggregate`]s for unpredictability using
//! four additive heuristics (temperature range, day-to-day swings, hot-day
//! streaks and intermittent rain) and classifies the total into a coarse
//! stability label with a matching risk level.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::models::DailyAggregate;

/// Fewest days worth analysing
pub const MIN_ANALYSIS_DAYS: usize = 3;
/// Day-to-day change in max temperature that counts as a swing
pub const FLUCTUATION_THRESHOLD_C: i32 = 6;
/// Max temperature at or above which a day is hot
pub const HOT_DAY_THRESHOLD_C: i32 = 38;
/// Window temperature range above which the week is called wide
pub const WIDE_RANGE_THRESHOLD_C: i32 = 15;

/// Ordinal stability classification of a forecast window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Stability {
    Stable,
    ModeratelyUnstable,
    HighlyUnstable,
}

impl Stability {
    /// Classify total instability points
    #[must_use]
    pub fn from_points(points: u32) -> Self {
        match points {
            5.. => Stability::HighlyUnstable,
            3..=4 => Stability::ModeratelyUnstable,
            _ => Stability::Stable,
        }
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Stability::Stable => "STABLE",
            Stability::ModeratelyUnstable => "MODERATELY UNSTABLE",
            Stability::HighlyUnstable => "HIGHLY UNSTABLE",
        }
    }

    #[must_use]
    pub fn label_hi(&self) -> &'static str {
        match self {
            Stability::Stable => "स्थिर",
            Stability::ModeratelyUnstable => "मध्यम अस्थिर",
            Stability::HighlyUnstable => "अत्यधिक अस्थिर",
        }
    }

    /// Display color class
    #[must_use]
    pub fn color(&self) -> &'static str {
        match self {
            Stability::Stable => "success",
            Stability::ModeratelyUnstable => "warning",
            Stability::HighlyUnstable => "danger",
        }
    }

    #[must_use]
    pub fn risk_level(&self) -> RiskLevel {
        match self {
            Stability::Stable => RiskLevel::Low,
            Stability::ModeratelyUnstable => RiskLevel::Medium,
            Stability::HighlyUnstable => RiskLevel::High,
        }
    }
}

impl fmt::Display for Stability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
        };
        write!(f, "{label}")
    }
}

/// A day-to-day max-temperature swing of at least [`FLUCTUATION_THRESHOLD_C`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FluctuationEvent {
    /// 1-based position of the pair within the window
    pub day: usize,
    /// Absolute change in °C
    pub change: i32,
}

/// Scored summary of a forecast window
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StabilityAnalysis {
    pub fluctuation_count: usize,
    pub fluctuation_days: Vec<FluctuationEvent>,
    /// Longest run of consecutive hot days
    pub max_consecutive_hot: usize,
    pub rain_days: usize,
    /// Spread of daily max temperatures across the window
    pub temp_range: i32,
    pub instability_points: u32,
    pub stability: Stability,
    pub risk_level: RiskLevel,
    pub warnings: Vec<String>,
}

impl StabilityAnalysis {
    /// Analyse a window of days; `None` when fewer than [`MIN_ANALYSIS_DAYS`] are given.
    #[must_use]
    pub fn analyze(days: &[DailyAggregate]) -> Option<Self> {
        if days.len() < MIN_ANALYSIS_DAYS {
            debug!(days = days.len(), "Not enough forecast days for analysis");
            return None;
        }

        let temp_range = temperature_range(days);
        let fluctuation_days = fluctuation_events(days);
        let fluctuation_count = fluctuation_days.len();
        let max_consecutive_hot = longest_hot_streak(days);
        let rain_days = days.iter().filter(|day| day.rain).count();

        let mut points = 0;
        let mut warnings = Vec::new();

        if temp_range > WIDE_RANGE_THRESHOLD_C {
            points += 2;
            warnings.push("Wide temperature variation this week".to_string());
        }

        if fluctuation_count >= 3 {
            points += 3;
            warnings.push(format!(
                "{fluctuation_count} sudden temperature changes expected"
            ));
        } else if fluctuation_count >= 1 {
            points += 1;
        }

        if max_consecutive_hot >= 3 {
            points += 2;
            warnings.push(format!(
                "{max_consecutive_hot} consecutive days above {HOT_DAY_THRESHOLD_C}°C"
            ));
        }

        // zero or more than three rain days both score nothing
        if (1..=3).contains(&rain_days) {
            points += 1;
            warnings.push(
                "Intermittent rain expected - irrigation planning difficult".to_string(),
            );
        }

        let stability = Stability::from_points(points);
        debug!(
            points,
            stability = %stability,
            fluctuation_count,
            max_consecutive_hot,
            rain_days,
            temp_range,
            "Forecast stability analysed"
        );

        Some(Self {
            fluctuation_count,
            fluctuation_days,
            max_consecutive_hot,
            rain_days,
            temp_range,
            instability_points: points,
            stability,
            risk_level: stability.risk_level(),
            warnings,
        })
    }

    /// English one-paragraph summary
    #[must_use]
    pub fn summary_en(&self) -> String {
        let mut summary = format!("Weather pattern: {}. ", self.stability.label());

        if self.fluctuation_count > 0 {
            summary.push_str(&format!(
                "Expect {} sudden temperature changes. ",
                self.fluctuation_count
            ));
        }
        if self.max_consecutive_hot >= 2 {
            summary.push_str(&format!(
                "Extended heat period of {} days. ",
                self.max_consecutive_hot
            ));
        }
        if self.rain_days > 0 {
            summary.push_str(&format!("Rain expected on {} days. ", self.rain_days));
        }

        summary.trim().to_string()
    }

    /// Hindi one-paragraph summary
    #[must_use]
    pub fn summary_hi(&self) -> String {
        let mut summary = format!("मौसम पैटर्न: {}। ", self.stability.label_hi());

        if self.fluctuation_count > 0 {
            summary.push_str(&format!(
                "{} अचानक तापमान परिवर्तन की उम्मीद। ",
                self.fluctuation_count
            ));
        }
        if self.max_consecutive_hot >= 2 {
            summary.push_str(&format!(
                "{} दिनों तक गर्मी की अवधि। ",
                self.max_consecutive_hot
            ));
        }
        if self.rain_days > 0 {
            summary.push_str(&format!("{} दिन बारिश की संभावना। ", self.rain_days));
        }

        summary.trim().to_string()
    }
}

/// English summary, or the unavailable notice when there is no analysis
#[must_use]
pub fn forecast_summary_en(analysis: Option<&StabilityAnalysis>) -> String {
    analysis.map_or_else(
        || "Forecast data unavailable".to_string(),
        StabilityAnalysis::summary_en,
    )
}

/// Hindi summary, or the unavailable notice when there is no analysis
#[must_use]
pub fn forecast_summary_hi(analysis: Option<&StabilityAnalysis>) -> String {
    analysis.map_or_else(
        || "पूर्वानुमान डेटा उपलब्ध नहीं".to_string(),
        StabilityAnalysis::summary_hi,
    )
}

fn temperature_range(days: &[DailyAggregate]) -> i32 {
    let max = days.iter().map(|day| day.temp_max).max().unwrap_or_default();
    let min = days.iter().map(|day| day.temp_max).min().unwrap_or_default();
    max - min
}

fn fluctuation_events(days: &[DailyAggregate]) -> Vec<FluctuationEvent> {
    days.windows(2)
        .enumerate()
        .filter_map(|(i, pair)| {
            let change = (pair[1].temp_max - pair[0].temp_max).abs();
            (change >= FLUCTUATION_THRESHOLD_C).then_some(FluctuationEvent { day: i + 1, change })
        })
        .collect()
}

fn longest_hot_streak(days: &[DailyAggregate]) -> usize {
    let mut streak = 0;
    let mut longest = 0;
    for day in days {
        if day.is_hot() {
            streak += 1;
            longest = longest.max(streak);
        } else {
            streak = 0;
        }
    }
    longest
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Days, NaiveDate};
    use rstest::rstest;

    fn window(max_temps: &[i32], rain: &[bool]) -> Vec<DailyAggregate> {
        let start = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        max_temps
            .iter()
            .enumerate()
            .map(|(i, &temp_max)| DailyAggregate {
                date: start.checked_add_days(Days::new(i as u64)).unwrap(),
                temp_max,
                temp_min: temp_max - 10,
                temp_avg: temp_max - 5,
                humidity_avg: 50,
                rain: rain.get(i).copied().unwrap_or(false),
                description: "clear sky".to_string(),
            })
            .collect()
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(2)]
    fn test_too_few_days(#[case] n: usize) {
        let days = window(&vec![30; n], &[]);
        assert!(StabilityAnalysis::analyze(&days).is_none());
    }

    #[test]
    fn test_reference_window() {
        let days = window(&[30, 37, 38, 39, 25], &[]);
        let analysis = StabilityAnalysis::analyze(&days).unwrap();

        assert_eq!(analysis.fluctuation_count, 2);
        assert_eq!(
            analysis.fluctuation_days,
            vec![
                FluctuationEvent { day: 1, change: 7 },
                FluctuationEvent { day: 4, change: 14 },
            ]
        );
        assert_eq!(analysis.max_consecutive_hot, 2);
        assert_eq!(analysis.rain_days, 0);
        assert_eq!(analysis.temp_range, 14);
        assert_eq!(analysis.instability_points, 1);
        assert_eq!(analysis.stability, Stability::Stable);
        assert_eq!(analysis.risk_level, RiskLevel::Low);
        assert!(analysis.warnings.is_empty());
    }

    #[test]
    fn test_all_rules_fire() {
        // range 20, four swings, four-day hot streak, two rain days
        let days = window(
            &[40, 47, 40, 41, 30, 27, 33],
            &[true, false, false, false, false, true, false],
        );
        let analysis = StabilityAnalysis::analyze(&days).unwrap();

        assert_eq!(analysis.temp_range, 20);
        assert_eq!(analysis.fluctuation_count, 4);
        assert_eq!(analysis.max_consecutive_hot, 4);
        assert_eq!(analysis.rain_days, 2);
        assert_eq!(analysis.instability_points, 8);
        assert_eq!(analysis.stability, Stability::HighlyUnstable);
        assert_eq!(analysis.risk_level, RiskLevel::High);
        assert_eq!(
            analysis.warnings,
            vec![
                "Wide temperature variation this week".to_string(),
                "4 sudden temperature changes expected".to_string(),
                "4 consecutive days above 38°C".to_string(),
                "Intermittent rain expected - irrigation planning difficult".to_string(),
            ]
        );
    }

    #[rstest]
    #[case(0, 0)]
    #[case(1, 1)]
    #[case(3, 1)]
    #[case(4, 0)]
    #[case(7, 0)]
    fn test_rain_band(#[case] rain_days: usize, #[case] expected_points: u32) {
        let rain: Vec<bool> = (0..7).map(|i| i < rain_days).collect();
        let days = window(&[30; 7], &rain);
        let analysis = StabilityAnalysis::analyze(&days).unwrap();
        assert_eq!(analysis.rain_days, rain_days);
        assert_eq!(analysis.instability_points, expected_points);
    }

    #[test]
    fn test_streak_resets_on_mild_day() {
        let days = window(&[38, 39, 30, 40, 41, 42, 30], &[]);
        let analysis = StabilityAnalysis::analyze(&days).unwrap();
        assert_eq!(analysis.max_consecutive_hot, 3);
        assert!(analysis
            .warnings
            .contains(&"3 consecutive days above 38°C".to_string()));
    }

    #[test]
    fn test_range_of_exactly_fifteen_is_not_wide() {
        let days = window(&[25, 28, 31, 34, 37, 40], &[]);
        let analysis = StabilityAnalysis::analyze(&days).unwrap();
        assert_eq!(analysis.temp_range, 15);
        assert_eq!(analysis.fluctuation_count, 0);
        assert_eq!(analysis.instability_points, 0);
    }

    #[rstest]
    #[case(0, Stability::Stable)]
    #[case(2, Stability::Stable)]
    #[case(3, Stability::ModeratelyUnstable)]
    #[case(4, Stability::ModeratelyUnstable)]
    #[case(5, Stability::HighlyUnstable)]
    #[case(8, Stability::HighlyUnstable)]
    fn test_classification_thresholds(#[case] points: u32, #[case] expected: Stability) {
        assert_eq!(Stability::from_points(points), expected);
    }

    #[test]
    fn test_analysis_is_deterministic() {
        let days = window(&[30, 44, 29, 41, 40, 39], &[false, true, true, false]);
        let first = StabilityAnalysis::analyze(&days);
        let second = StabilityAnalysis::analyze(&days);
        assert_eq!(first, second);
    }

    #[test]
    fn test_summaries() {
        let days = window(&[30, 37, 38, 39, 25], &[false, true]);
        let analysis = StabilityAnalysis::analyze(&days).unwrap();
        assert_eq!(
            analysis.summary_en(),
            "Weather pattern: STABLE. Expect 2 sudden temperature changes. \
             Extended heat period of 2 days. Rain expected on 1 days."
        );
        assert_eq!(
            analysis.summary_hi(),
            "मौसम पैटर्न: स्थिर। 2 अचानक तापमान परिवर्तन की उम्मीद। \
             2 दिनों तक गर्मी की अवधि। 1 दिन बारिश की संभावना।"
        );
    }

    #[test]
    fn test_missing_analysis_summaries() {
        assert_eq!(forecast_summary_en(None), "Forecast data unavailable");
        assert_eq!(forecast_summary_hi(None), "पूर्वानुमान डेटा उपलब्ध नहीं");
    }
}
