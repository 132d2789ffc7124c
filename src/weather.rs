//! Weather provider access
//!
//! [`WeatherProvider`] abstracts the upstream service. [`OpenWeatherClient`]
//! talks to OpenWeather over HTTP with a single timeout and no retries.
//! Callers that must never fail use [`current_or_default`] and
//! [`daily_forecast`], which log the failure and fall back.

use chrono::NaiveDateTime;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, instrument, warn};

use crate::config::WeatherConfig;
use crate::forecast::aggregate_daily;
use crate::matching::title_case;
use crate::models::weather::round_half_even;
use crate::models::{Coordinates, CurrentWeather, DailyAggregate, RawSample};
use crate::{AdvisoryError, Result};

/// Forecast entries consumed from a single response (5 days of 3-hour steps)
pub const MAX_FORECAST_ENTRIES: usize = 40;

/// Source of current conditions and 3-hourly forecast samples
pub trait WeatherProvider {
    async fn current(&self, city: &str) -> Result<CurrentWeather>;
    async fn forecast_samples(&self, coordinates: Coordinates) -> Result<Vec<RawSample>>;
}

pub struct OpenWeatherClient {
    client: Client,
    api_key: String,
    current_url: String,
    forecast_url: String,
    units: String,
}

impl OpenWeatherClient {
    pub fn new(config: &WeatherConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| AdvisoryError::config("OpenWeather API key is not configured"))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(u64::from(config.timeout_seconds)))
            .user_agent(concat!("kisan-mausam/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            api_key,
            current_url: config.current_url.clone(),
            forecast_url: config.forecast_url.clone(),
            units: config.units.clone(),
        })
    }

    async fn get<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AdvisoryError::api(format!(
                "OpenWeather returned {status}: {body}"
            )));
        }

        response
            .json()
            .await
            .map_err(|e| AdvisoryError::parse(format!("Failed to parse OpenWeather response: {e}")))
    }
}

impl WeatherProvider for OpenWeatherClient {
    #[instrument(level = "debug", skip(self))]
    async fn current(&self, city: &str) -> Result<CurrentWeather> {
        let url = format!(
            "{}?q={}&appid={}&units={}",
            self.current_url,
            urlencoding::encode(city.trim()),
            urlencoding::encode(&self.api_key),
            self.units
        );
        let response: openweather::CurrentResponse = self.get(&url).await?;
        let weather = response.into_current(city)?;
        debug!(temp = weather.temp, humidity = weather.humidity, "Fetched current weather");
        Ok(weather)
    }

    #[instrument(level = "debug", skip(self))]
    async fn forecast_samples(&self, coordinates: Coordinates) -> Result<Vec<RawSample>> {
        let url = format!(
            "{}?lat={}&lon={}&appid={}&units={}",
            self.forecast_url,
            coordinates.latitude,
            coordinates.longitude,
            urlencoding::encode(&self.api_key),
            self.units
        );
        let response: openweather::ForecastResponse = self.get(&url).await?;
        let samples = response.into_samples()?;
        debug!(samples = samples.len(), "Fetched forecast samples");
        Ok(samples)
    }
}

/// Provider used when no API key is configured. Every call fails, so reports
/// are built from the fallback snapshot without a forecast.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unconfigured;

impl WeatherProvider for Unconfigured {
    async fn current(&self, _city: &str) -> Result<CurrentWeather> {
        Err(AdvisoryError::config("OpenWeather API key is not configured"))
    }

    async fn forecast_samples(&self, _coordinates: Coordinates) -> Result<Vec<RawSample>> {
        Err(AdvisoryError::config("OpenWeather API key is not configured"))
    }
}

/// Current weather, or the fallback snapshot if the provider fails
pub async fn current_or_default<P: WeatherProvider>(provider: &P, city: &str) -> CurrentWeather {
    match provider.current(city).await {
        Ok(weather) => weather,
        Err(e) => {
            warn!(city, error = %e, "Weather lookup failed, using fallback snapshot");
            CurrentWeather::fallback(city)
        }
    }
}

/// Daily aggregates for the next days, or `None` when no forecast is available
pub async fn daily_forecast<P: WeatherProvider>(
    provider: &P,
    coordinates: Coordinates,
) -> Option<Vec<DailyAggregate>> {
    match provider.forecast_samples(coordinates).await {
        Ok(samples) => {
            let days = aggregate_daily(&samples);
            (!days.is_empty()).then_some(days)
        }
        Err(e) => {
            warn!(
                latitude = coordinates.latitude,
                longitude = coordinates.longitude,
                error = %e,
                "Forecast lookup failed"
            );
            None
        }
    }
}

/// OpenWeather response structures and conversion
mod openweather {
    use super::{
        AdvisoryError, Coordinates, CurrentWeather, MAX_FORECAST_ENTRIES, NaiveDateTime,
        RawSample, Result, round_half_even, title_case,
    };
    use serde::Deserialize;

    const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    #[derive(Debug, Deserialize)]
    pub struct Main {
        pub temp: f64,
        pub humidity: f64,
    }

    #[derive(Debug, Deserialize)]
    pub struct Condition {
        pub description: String,
    }

    #[derive(Debug, Deserialize)]
    pub struct Coord {
        pub lat: f64,
        pub lon: f64,
    }

    #[derive(Debug, Deserialize)]
    pub struct CurrentResponse {
        pub main: Main,
        pub weather: Vec<Condition>,
        pub coord: Option<Coord>,
    }

    #[derive(Debug, Deserialize)]
    pub struct ForecastEntry {
        pub dt_txt: String,
        pub main: Main,
        pub weather: Vec<Condition>,
        /// Only present when rain is forecast for the step
        pub rain: Option<serde_json::Value>,
    }

    #[derive(Debug, Deserialize)]
    pub struct ForecastResponse {
        pub list: Vec<ForecastEntry>,
    }

    fn first_description(conditions: Vec<Condition>) -> Result<String> {
        conditions
            .into_iter()
            .next()
            .map(|c| c.description)
            .ok_or_else(|| AdvisoryError::parse("Weather entry has no description"))
    }

    impl CurrentResponse {
        pub fn into_current(self, city: &str) -> Result<CurrentWeather> {
            Ok(CurrentWeather {
                temp: round_half_even(self.main.temp),
                humidity: round_half_even(self.main.humidity),
                description: first_description(self.weather)?,
                city: title_case(city.trim()),
                coordinates: self.coord.map(|c| Coordinates {
                    latitude: c.lat,
                    longitude: c.lon,
                }),
            })
        }
    }

    impl ForecastResponse {
        pub fn into_samples(self) -> Result<Vec<RawSample>> {
            self.list
                .into_iter()
                .take(MAX_FORECAST_ENTRIES)
                .map(|entry| {
                    let timestamp = NaiveDateTime::parse_from_str(&entry.dt_txt, TIMESTAMP_FORMAT)
                        .map_err(|e| {
                            AdvisoryError::parse(format!("Invalid dt_txt '{}': {e}", entry.dt_txt))
                        })?;
                    Ok(RawSample {
                        timestamp,
                        temperature: entry.main.temp,
                        humidity: entry.main.humidity,
                        rain: entry.rain.is_some(),
                        description: first_description(entry.weather)?,
                    })
                })
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WeatherConfig;
    use chrono::NaiveDate;

    const CURRENT_JSON: &str = r#"{
        "coord": {"lon": 77.2167, "lat": 28.6667},
        "weather": [{"id": 721, "main": "Haze", "description": "haze", "icon": "50d"}],
        "main": {"temp": 32.5, "feels_like": 35.1, "humidity": 48, "pressure": 1008},
        "name": "Delhi",
        "cod": 200
    }"#;

    const FORECAST_JSON: &str = r#"{
        "cod": "200",
        "cnt": 3,
        "list": [
            {"dt": 1, "main": {"temp": 30.4, "humidity": 60}, "weather": [{"description": "clear sky"}], "dt_txt": "2024-05-01 18:00:00"},
            {"dt": 2, "main": {"temp": 27.9, "humidity": 70}, "weather": [{"description": "light rain"}], "rain": {"3h": 0.4}, "dt_txt": "2024-05-01 21:00:00"},
            {"dt": 3, "main": {"temp": 26.1, "humidity": 75}, "weather": [{"description": "broken clouds"}], "dt_txt": "2024-05-02 00:00:00"}
        ]
    }"#;

    #[test]
    fn test_parse_current_response() {
        let response: openweather::CurrentResponse = serde_json::from_str(CURRENT_JSON).unwrap();
        let weather = response.into_current(" new delhi ").unwrap();
        assert_eq!(weather.temp, 32);
        assert_eq!(weather.humidity, 48);
        assert_eq!(weather.description, "haze");
        assert_eq!(weather.city, "New Delhi");
        let coordinates = weather.coordinates.unwrap();
        assert!((coordinates.latitude - 28.6667).abs() < 1e-9);
    }

    #[test]
    fn test_parse_forecast_response() {
        let response: openweather::ForecastResponse = serde_json::from_str(FORECAST_JSON).unwrap();
        let samples = response.into_samples().unwrap();
        assert_eq!(samples.len(), 3);
        assert!(!samples[0].rain);
        assert!(samples[1].rain);
        assert_eq!(samples[2].date(), NaiveDate::from_ymd_opt(2024, 5, 2).unwrap());
    }

    #[test]
    fn test_forecast_entries_are_capped() {
        let entries: Vec<String> = (0..50)
            .map(|i| {
                format!(
                    r#"{{"main": {{"temp": 30.0, "humidity": 50}}, "weather": [{{"description": "clear sky"}}], "dt_txt": "2024-05-{:02} {:02}:00:00"}}"#,
                    1 + i / 8,
                    (i % 8) * 3
                )
            })
            .collect();
        let json = format!(r#"{{"list": [{}]}}"#, entries.join(","));
        let response: openweather::ForecastResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(response.into_samples().unwrap().len(), MAX_FORECAST_ENTRIES);
    }

    #[test]
    fn test_bad_timestamp_is_parse_error() {
        let json = r#"{"list": [{"main": {"temp": 30.0, "humidity": 50}, "weather": [{"description": "clear sky"}], "dt_txt": "yesterday"}]}"#;
        let response: openweather::ForecastResponse = serde_json::from_str(json).unwrap();
        assert!(matches!(response.into_samples(), Err(AdvisoryError::Parse { .. })));
    }

    #[test]
    fn test_missing_description_is_parse_error() {
        let json = r#"{"main": {"temp": 30.0, "humidity": 50}, "weather": []}"#;
        let response: openweather::CurrentResponse = serde_json::from_str(json).unwrap();
        assert!(matches!(response.into_current("Delhi"), Err(AdvisoryError::Parse { .. })));
    }

    #[tokio::test]
    async fn test_unconfigured_provider_falls_back() {
        let weather = current_or_default(&Unconfigured, "jaipur").await;
        assert_eq!(weather, CurrentWeather::fallback("jaipur"));

        let coordinates = Coordinates {
            latitude: 26.9,
            longitude: 75.8,
        };
        assert!(daily_forecast(&Unconfigured, coordinates).await.is_none());
    }

    #[test]
    fn test_client_requires_api_key() {
        let config = WeatherConfig::default();
        assert!(matches!(
            OpenWeatherClient::new(&config),
            Err(AdvisoryError::Config { .. })
        ));

        let config = WeatherConfig {
            api_key: Some("abcdef0123456789".to_string()),
            ..WeatherConfig::default()
        };
        assert!(OpenWeatherClient::new(&config).is_ok());
    }
}
