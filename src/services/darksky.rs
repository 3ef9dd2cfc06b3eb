use serde::Deserialize;

use crate::config::Config;
use crate::models::{
    error::AppError,
    forecast::{DailyRecord, HourlyRecord},
};
use crate::services::{http, provider::ForecastProvider};

// CONSTANTS
const BASE_URL: &str = "https://api.darksky.net";
const DEFAULT_API_KEY: Option<&str> = option_env!("DARKSKY_API_KEY");

/// Unit system for returned values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Units {
    /// Fahrenheit, miles per hour, millibars
    #[default]
    Us,
    /// Celsius, metres per second, hectopascals
    Si,
    /// Like `Si` with kilometres per hour
    Ca,
    /// Like `Si` with miles per hour
    Uk2,
}

impl Units {
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Us => "us",
            Self::Si => "si",
            Self::Ca => "ca",
            Self::Uk2 => "uk2",
        }
    }
}

/// Forecast blocks the API can return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Block {
    Currently,
    Minutely,
    Hourly,
    Daily,
    Alerts,
    Flags,
}

impl Block {
    const ALL: [Self; 6] = [
        Self::Currently,
        Self::Minutely,
        Self::Hourly,
        Self::Daily,
        Self::Alerts,
        Self::Flags,
    ];

    const fn code(self) -> &'static str {
        match self {
            Self::Currently => "currently",
            Self::Minutely => "minutely",
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Alerts => "alerts",
            Self::Flags => "flags",
        }
    }
}

// API CONFIGURATION
/// Configuration for the Dark Sky forecast client.
#[derive(Debug, Clone, PartialEq)]
pub struct DarkSkyConfig {
    base_url: String,
    api_key: String,
    latitude: f64,
    longitude: f64,
    units: Units,
}

impl DarkSkyConfig {
    /// Creates a builder for constructing a `DarkSkyConfig`.
    pub fn builder() -> DarkSkyConfigBuilder {
        DarkSkyConfigBuilder::default()
    }

    pub const fn location(&self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }

    /// URL returning only the hourly block.
    pub fn hourly_url(&self) -> String {
        self.forecast_url(Block::Hourly)
    }

    /// URL returning only the daily block.
    pub fn daily_url(&self) -> String {
        self.forecast_url(Block::Daily)
    }

    fn forecast_url(&self, keep: Block) -> String {
        let exclude = Block::ALL
            .iter()
            .filter(|block| **block != keep)
            .map(|block| block.code())
            .collect::<Vec<_>>()
            .join(",");

        format!(
            "{}/forecast/{}/{},{}?units={}&exclude={exclude}",
            self.base_url,
            self.api_key,
            self.latitude,
            self.longitude,
            self.units.code()
        )
    }
}

impl Default for DarkSkyConfig {
    fn default() -> Self {
        DarkSkyConfigBuilder::default().build()
    }
}

// API CONFIGURATION BUILDER
/// Builder for constructing a `DarkSkyConfig` with custom settings.
#[derive(Debug, Default)]
pub struct DarkSkyConfigBuilder {
    base_url: Option<String>,
    api_key: Option<String>,
    location: Option<(f64, f64)>,
    units: Option<Units>,
}

impl DarkSkyConfigBuilder {
    /// Sets a custom base URL (a CORS proxy, or a mock server in tests).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn location(mut self, latitude: f64, longitude: f64) -> Self {
        self.location = Some((latitude, longitude));
        self
    }

    pub fn units(mut self, units: Units) -> Self {
        self.units = Some(units);
        self
    }

    /// Builds the `DarkSkyConfig`.
    pub fn build(self) -> DarkSkyConfig {
        let (latitude, longitude) = self
            .location
            .unwrap_or((Config::DEFAULT_LATITUDE, Config::DEFAULT_LONGITUDE));

        DarkSkyConfig {
            base_url: self.base_url.unwrap_or_else(|| BASE_URL.to_string()),
            api_key: self
                .api_key
                .unwrap_or_else(|| DEFAULT_API_KEY.unwrap_or_default().to_string()),
            latitude,
            longitude,
            units: self.units.unwrap_or_default(),
        }
    }
}

// API RESPONSE TYPES
#[derive(Deserialize, Debug)]
struct DataBlock<T> {
    data: Vec<T>,
}

#[derive(Deserialize, Debug)]
struct ForecastResponse {
    #[serde(default)]
    hourly: Option<DataBlock<HourlyRecord>>,
    #[serde(default)]
    daily: Option<DataBlock<DailyRecord>>,
}

impl ForecastResponse {
    fn into_hourly(self) -> Result<Vec<HourlyRecord>, AppError> {
        self.hourly
            .map(|block| block.data)
            .ok_or(AppError::MissingBlock("hourly"))
    }

    fn into_daily(self) -> Result<Vec<DailyRecord>, AppError> {
        self.daily
            .map(|block| block.data)
            .ok_or(AppError::MissingBlock("daily"))
    }
}

// DARK SKY CLIENT
/// HTTP client for the Dark Sky forecast API.
pub struct DarkSkyClient {
    http: reqwest::Client,
    config: DarkSkyConfig,
}

impl DarkSkyClient {
    /// Creates a new client with the specified configuration.
    pub fn with_config(config: DarkSkyConfig) -> Result<Self, AppError> {
        if config.api_key.is_empty() {
            return Err(AppError::MissingApiKey("Dark Sky"));
        }

        Ok(Self {
            http: http::client()?,
            config,
        })
    }

    /// Fetches the daily block (the week ahead).
    pub async fn fetch_daily(&self) -> Result<Vec<DailyRecord>, AppError> {
        let response: ForecastResponse =
            http::get_json(&self.http, &self.config.daily_url()).await?;
        response.into_daily()
    }
}

impl ForecastProvider for DarkSkyClient {
    async fn fetch_hourly(&self) -> Result<Vec<HourlyRecord>, AppError> {
        let response: ForecastResponse =
            http::get_json(&self.http, &self.config.hourly_url()).await?;
        response.into_hourly()
    }
}

/// Fetches the week ahead using the given configuration.
pub async fn fetch_seven_day(config: DarkSkyConfig) -> Result<Vec<DailyRecord>, AppError> {
    DarkSkyClient::with_config(config)?.fetch_daily().await
}
