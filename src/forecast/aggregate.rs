//! Daily aggregation of 3-hourly forecast samples
//!
//! Samples are grouped by calendar date in the order received. A day is only
//! emitted once a sample with a different date closes it, so the last group
//! of the window is never flushed. The closing sample's description becomes
//! the day's representative description.

use chrono::NaiveDate;
use tracing::debug;

use crate::models::weather::round_half_even;
use crate::models::{DailyAggregate, RawSample};

/// Upper bound on emitted days
pub const MAX_FORECAST_DAYS: usize = 7;

/// Samples collected for the day currently open
struct DayAccumulator {
    date: NaiveDate,
    temperatures: Vec<f64>,
    humidity: Vec<f64>,
    rain: bool,
}

impl DayAccumulator {
    fn new(date: NaiveDate) -> Self {
        Self {
            date,
            temperatures: Vec::with_capacity(8),
            humidity: Vec::with_capacity(8),
            rain: false,
        }
    }

    fn push(&mut self, sample: &RawSample) {
        self.temperatures.push(sample.temperature);
        self.humidity.push(sample.humidity);
        self.rain |= sample.rain;
    }

    /// Never called on an empty accumulator: every group starts with its first sample.
    fn close(self, description: &str) -> DailyAggregate {
        let max = self.temperatures.iter().copied().fold(f64::MIN, f64::max);
        let min = self.temperatures.iter().copied().fold(f64::MAX, f64::min);

        DailyAggregate {
            date: self.date,
            temp_max: round_half_even(max),
            temp_min: round_half_even(min),
            temp_avg: round_half_even(mean(&self.temperatures)),
            humidity_avg: round_half_even(mean(&self.humidity)),
            rain: self.rain,
            description: description.to_string(),
        }
    }
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Condense chronologically sorted samples into at most [`MAX_FORECAST_DAYS`] days.
///
/// Input order is trusted; nothing is re-sorted.
#[must_use]
pub fn aggregate_daily(samples: &[RawSample]) -> Vec<DailyAggregate> {
    let mut days = Vec::new();
    let mut open: Option<DayAccumulator> = None;

    for sample in samples {
        let date = sample.date();
        let day = match open.take() {
            Some(day) if day.date == date => day,
            Some(day) => {
                days.push(day.close(&sample.description));
                DayAccumulator::new(date)
            }
            None => DayAccumulator::new(date),
        };
        open.insert(day).push(sample);
    }

    if let Some(day) = open {
        debug!(
            date = %day.date,
            samples = day.temperatures.len(),
            "Dropping trailing day without a closing sample"
        );
    }

    days.truncate(MAX_FORECAST_DAYS);
    debug!(days = days.len(), samples = samples.len(), "Aggregated forecast");
    days
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDateTime, NaiveTime};

    fn sample(date: &str, hour: u32, temperature: f64, rain: bool, description: &str) -> RawSample {
        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap();
        RawSample {
            timestamp: NaiveDateTime::new(date, NaiveTime::from_hms_opt(hour, 0, 0).unwrap()),
            temperature,
            humidity: 50.0,
            rain,
            description: description.to_string(),
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(aggregate_daily(&[]).is_empty());
    }

    #[test]
    fn test_single_day_is_never_flushed() {
        let samples: Vec<RawSample> = (0..8)
            .map(|i| sample("2024-05-01", i * 3, 30.0, false, "clear sky"))
            .collect();
        assert!(aggregate_daily(&samples).is_empty());
    }

    #[test]
    fn test_day_statistics() {
        let mut samples = vec![
            sample("2024-05-01", 0, 20.4, false, "clear sky"),
            sample("2024-05-01", 12, 34.6, false, "few clouds"),
            sample("2024-05-01", 18, 27.0, false, "scattered clouds"),
        ];
        samples[0].humidity = 70.0;
        samples[1].humidity = 40.0;
        samples[2].humidity = 55.0;
        samples.push(sample("2024-05-02", 0, 22.0, true, "light rain"));

        let days = aggregate_daily(&samples);
        assert_eq!(days.len(), 1);
        let day = &days[0];
        assert_eq!(day.date, NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
        assert_eq!(day.temp_max, 35);
        assert_eq!(day.temp_min, 20);
        assert_eq!(day.temp_avg, 27);
        assert_eq!(day.humidity_avg, 55);
        assert!(!day.rain);
    }

    #[test]
    fn test_description_comes_from_closing_sample() {
        let samples = vec![
            sample("2024-05-01", 0, 30.0, false, "clear sky"),
            sample("2024-05-01", 21, 30.0, false, "broken clouds"),
            sample("2024-05-02", 0, 30.0, false, "light rain"),
        ];
        let days = aggregate_daily(&samples);
        assert_eq!(days[0].description, "light rain");
    }

    #[test]
    fn test_rain_is_any_sample() {
        let samples = vec![
            sample("2024-05-01", 0, 30.0, false, "clear sky"),
            sample("2024-05-01", 3, 30.0, true, "light rain"),
            sample("2024-05-01", 6, 30.0, false, "clear sky"),
            sample("2024-05-02", 0, 30.0, false, "clear sky"),
            sample("2024-05-02", 3, 30.0, false, "clear sky"),
            sample("2024-05-03", 0, 30.0, false, "clear sky"),
        ];
        let days = aggregate_daily(&samples);
        assert_eq!(days.len(), 2);
        assert!(days[0].rain);
        assert!(!days[1].rain);
    }

    #[test]
    fn test_emits_one_fewer_than_distinct_dates() {
        let samples: Vec<RawSample> = (1..=5)
            .flat_map(|d| {
                (0..8).map(move |h| sample(&format!("2024-05-0{d}"), h * 3, 30.0, false, "clear sky"))
            })
            .collect();
        assert_eq!(samples.len(), 40);
        assert_eq!(aggregate_daily(&samples).len(), 4);
    }

    #[test]
    fn test_caps_at_seven_days() {
        let samples: Vec<RawSample> = (1..=10)
            .map(|d| sample(&format!("2024-05-{d:02}"), 12, 30.0, false, "clear sky"))
            .collect();
        let days = aggregate_daily(&samples);
        assert_eq!(days.len(), MAX_FORECAST_DAYS);
        assert_eq!(days[0].date, NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
        assert_eq!(days[6].date, NaiveDate::from_ymd_opt(2024, 5, 7).unwrap());
    }

    #[test]
    fn test_returning_date_starts_new_group() {
        let samples = vec![
            sample("2024-05-01", 0, 30.0, false, "a"),
            sample("2024-05-02", 0, 31.0, false, "b"),
            sample("2024-05-01", 3, 32.0, false, "c"),
            sample("2024-05-03", 0, 33.0, false, "d"),
        ];
        let days = aggregate_daily(&samples);
        assert_eq!(days.len(), 3);
        assert_eq!(days[2].date, NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
        assert_eq!(days[2].temp_max, 32);
    }
}
