//! Configuration management for the advisory engine
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings.

use crate::AdvisoryError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Weather provider configuration
    pub weather: WeatherConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
    /// Default farmer location
    pub defaults: DefaultsConfig,
}

/// Weather provider settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherConfig {
    /// OpenWeather API key
    pub api_key: Option<String>,
    /// Current-weather endpoint
    pub current_url: String,
    /// 3-hourly forecast endpoint
    pub forecast_url: String,
    /// Request timeout in seconds
    pub timeout_seconds: u32,
    /// Unit system requested from the provider
    pub units: String,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    pub level: String,
    /// Log format (pretty or json)
    pub format: String,
}

/// Location used when the farmer gives none
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    pub city: String,
    pub state: String,
}

// Default value functions
fn default_current_url() -> String {
    "https://api.openweathermap.org/data/2.5/weather".to_string()
}

fn default_forecast_url() -> String {
    "https://api.openweathermap.org/data/2.5/forecast".to_string()
}

fn default_weather_timeout() -> u32 {
    5
}

fn default_units() -> String {
    "metric".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_location() -> String {
    "Delhi".to_string()
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            current_url: default_current_url(),
            forecast_url: default_forecast_url(),
            timeout_seconds: default_weather_timeout(),
            units: default_units(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            city: default_location(),
            state: default_location(),
        }
    }
}

impl AppConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // KISAN_WEATHER__API_KEY -> weather.api_key
        builder = builder.add_source(
            Environment::with_prefix("KISAN")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: AppConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.apply_defaults();
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("kisan-mausam").join("config.toml"))
    }

    /// Apply default values to missing configuration fields
    pub fn apply_defaults(&mut self) {
        // a blank key means no key, the CLI then runs on fallback weather
        if self
            .weather
            .api_key
            .as_deref()
            .is_some_and(|key| key.trim().is_empty())
        {
            self.weather.api_key = None;
        }
        if self.weather.current_url.is_empty() {
            self.weather.current_url = default_current_url();
        }
        if self.weather.forecast_url.is_empty() {
            self.weather.forecast_url = default_forecast_url();
        }
        if self.weather.timeout_seconds == 0 {
            self.weather.timeout_seconds = default_weather_timeout();
        }
        if self.weather.units.is_empty() {
            self.weather.units = default_units();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
        if self.defaults.city.trim().is_empty() {
            self.defaults.city = default_location();
        }
        if self.defaults.state.trim().is_empty() {
            self.defaults.state = default_location();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_api_key()?;
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    /// Validate the provider API key if one is set
    pub fn validate_api_key(&self) -> Result<()> {
        if let Some(api_key) = &self.weather.api_key {
            if api_key.is_empty() {
                return Err(AdvisoryError::config(
                    "Weather API key cannot be empty if provided. Either remove it or provide a valid key."
                ).into());
            }

            if api_key.len() < 8 || api_key.len() > 100 {
                return Err(AdvisoryError::config(
                    "Weather API key appears to be invalid. Please check your API key.",
                )
                .into());
            }
        }

        Ok(())
    }

    fn validate_numeric_ranges(&self) -> Result<()> {
        if self.weather.timeout_seconds > 60 {
            return Err(
                AdvisoryError::config("Weather API timeout cannot exceed 60 seconds").into(),
            );
        }

        Ok(())
    }

    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(AdvisoryError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(AdvisoryError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        let valid_units = ["metric", "imperial", "standard"];
        if !valid_units.contains(&self.weather.units.as_str()) {
            return Err(AdvisoryError::config(format!(
                "Invalid units '{}'. Must be one of: {}",
                self.weather.units,
                valid_units.join(", ")
            ))
            .into());
        }

        for url in [&self.weather.current_url, &self.weather.forecast_url] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(AdvisoryError::config(
                    "Weather API URLs must be valid HTTP or HTTPS URLs",
                )
                .into());
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(
            config.weather.current_url,
            "https://api.openweathermap.org/data/2.5/weather"
        );
        assert_eq!(config.weather.timeout_seconds, 5);
        assert_eq!(config.weather.units, "metric");
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.defaults.city, "Delhi");
        assert_eq!(config.defaults.state, "Delhi");
        assert!(config.weather.api_key.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_short_api_key() {
        let mut config = AppConfig::default();
        config.weather.api_key = Some("abc".to_string());
        let result = config.validate_api_key();
        assert!(result.is_err());
    }

    #[test]
    fn test_config_validation_invalid_log_level() {
        let mut config = AppConfig::default();
        config.logging.level = "loud".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid log level"));
    }

    #[test]
    fn test_config_validation_timeout() {
        let mut config = AppConfig::default();
        config.weather.timeout_seconds = 500;
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("timeout cannot exceed"));
    }

    #[test]
    fn test_config_validation_rejects_non_http_url() {
        let mut config = AppConfig::default();
        config.weather.forecast_url = "ftp://example.org/forecast".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_apply_defaults_fills_blanks() {
        let mut config = AppConfig::default();
        config.weather.timeout_seconds = 0;
        config.defaults.city = "  ".to_string();
        config.logging.format = String::new();
        config.apply_defaults();
        assert_eq!(config.weather.timeout_seconds, 5);
        assert_eq!(config.defaults.city, "Delhi");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_apply_defaults_drops_blank_api_key() {
        let mut config = AppConfig::default();
        config.weather.api_key = Some("   ".to_string());
        assert!(config.validate_api_key().is_err());

        config.apply_defaults();
        assert!(config.weather.api_key.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_toml_file_with_blank_api_key() {
        let dir = std::env::temp_dir().join(format!("kisan-mausam-blank-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        std::fs::write(&path, "[weather]\napi_key = \"\"\n").unwrap();

        let config = AppConfig::load_from_path(Some(path)).unwrap();
        assert!(config.weather.api_key.is_none());

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_load_from_toml_file() {
        let dir = std::env::temp_dir().join(format!("kisan-mausam-cfg-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        std::fs::write(
            &path,
            "[defaults]\ncity = \"Jaipur\"\nstate = \"Rajasthan\"\n\n[weather]\ntimeout_seconds = 10\n",
        )
        .unwrap();

        let config = AppConfig::load_from_path(Some(path)).unwrap();
        assert_eq!(config.defaults.city, "Jaipur");
        assert_eq!(config.defaults.state, "Rajasthan");
        assert_eq!(config.weather.timeout_seconds, 10);
        assert_eq!(config.weather.units, "metric");

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_config_path_generation() {
        if let Some(path) = AppConfig::get_config_path() {
            assert!(path.to_string_lossy().contains("kisan-mausam"));
            assert!(path.to_string_lossy().contains("config.toml"));
        }
    }
}
