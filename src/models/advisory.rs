//! Bilingual advisory records

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity shown next to an advisory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertType {
    Success,
    Info,
    Warning,
    Danger,
}

impl fmt::Display for AlertType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AlertType::Success => "success",
            AlertType::Info => "info",
            AlertType::Warning => "warning",
            AlertType::Danger => "danger",
        };
        write!(f, "{label}")
    }
}

/// Condition an advisory was raised for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AdvisoryKey {
    ExtendedHeatStress,
    HeatStressCritical,
    HeatStressModerate,
    ColdStress,
    TempFavorable,
    WeatherUnpredictable,
    RainDetected,
    IrrigationHighNeed,
    IrrigationMediumNeed,
    IrrigationLowNeed,
    FungalRisk,
    GenericHeat,
    GenericCold,
    GenericNormal,
    GenericRain,
}

/// A canned message plus suggested action, in English and Hindi
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Advisory {
    pub key: AdvisoryKey,
    pub message_en: String,
    pub message_hi: String,
    pub alert: AlertType,
    pub action_en: String,
    pub action_hi: String,
    pub icon: &'static str,
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} [{}] {}", self.icon, self.alert, self.message_en)?;
        writeln!(f, "   {}", self.message_hi)?;
        writeln!(f, "   → {}", self.action_en)?;
        write!(f, "   → {}", self.action_hi)
    }
}
