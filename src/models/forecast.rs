//! Daily forecast summary model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One calendar day condensed from its 3-hourly samples
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyAggregate {
    pub date: NaiveDate,
    /// Highest sample temperature, whole °C
    pub temp_max: i32,
    /// Lowest sample temperature, whole °C
    pub temp_min: i32,
    /// Mean sample temperature, whole °C
    pub temp_avg: i32,
    /// Mean relative humidity, whole percent
    pub humidity_avg: i32,
    /// True if any sample of the day carried rain
    pub rain: bool,
    /// Condition text of the sample that closed the day
    pub description: String,
}

impl DailyAggregate {
    /// Hot days drive the heat-streak heuristic
    #[must_use]
    pub fn is_hot(&self) -> bool {
        self.temp_max >= crate::forecast::HOT_DAY_THRESHOLD_C
    }

    /// Format temperature range with unit
    #[must_use]
    pub fn format_temperature_range(&self) -> String {
        format!("{}°C / {}°C", self.temp_min, self.temp_max)
    }
}
