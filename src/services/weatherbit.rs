use serde::Deserialize;

use crate::config::Config;
use crate::models::{error::AppError, forecast::HourlyRecord};
use crate::services::{http, provider::ForecastProvider};
use crate::utils::time::from_epoch;

const BASE_URL: &str = "https://api.weatherbit.io/v2.0";
const DEFAULT_API_KEY: Option<&str> = option_env!("WEATHERBIT_API_KEY");

/// Configuration for the Weatherbit hourly forecast client.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherbitConfig {
    base_url: String,
    api_key: String,
    latitude: f64,
    longitude: f64,
    hours: u32,
    /// `I` for imperial, `M` for metric
    units: char,
}

impl WeatherbitConfig {
    pub fn builder() -> WeatherbitConfigBuilder {
        WeatherbitConfigBuilder::default()
    }

    pub fn hourly_url(&self) -> String {
        format!(
            "{}/forecast/hourly?lat={}&lon={}&key={}&hours={}&units={}",
            self.base_url, self.latitude, self.longitude, self.api_key, self.hours, self.units
        )
    }
}

impl Default for WeatherbitConfig {
    fn default() -> Self {
        WeatherbitConfigBuilder::default().build()
    }
}

#[derive(Debug, Default)]
pub struct WeatherbitConfigBuilder {
    base_url: Option<String>,
    api_key: Option<String>,
    location: Option<(f64, f64)>,
    hours: Option<u32>,
    metric: bool,
}

impl WeatherbitConfigBuilder {
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

    /// Forecast horizon; Weatherbit allows 1 to 240.
    pub fn hours(mut self, hours: u32) -> Self {
        self.hours = Some(hours);
        self
    }

    pub fn metric(mut self, metric: bool) -> Self {
        self.metric = metric;
        self
    }

    pub fn build(self) -> WeatherbitConfig {
        let (latitude, longitude) = self
            .location
            .unwrap_or((Config::DEFAULT_LATITUDE, Config::DEFAULT_LONGITUDE));

        WeatherbitConfig {
            base_url: self.base_url.unwrap_or_else(|| BASE_URL.to_string()),
            api_key: self
                .api_key
                .unwrap_or_else(|| DEFAULT_API_KEY.unwrap_or_default().to_string()),
            latitude,
            longitude,
            hours: self.hours.unwrap_or(Config::FORECAST_HOURS).clamp(1, 240),
            units: if self.metric { 'M' } else { 'I' },
        }
    }
}

#[derive(Deserialize, Debug)]
struct HourlyResponse {
    data: Vec<WeatherbitHour>,
}

/// One hour as Weatherbit reports it. Percentages are 0-100.
#[derive(Deserialize, Debug)]
struct WeatherbitHour {
    ts: i64,
    temp: Option<f64>,
    dewpt: Option<f64>,
    rh: Option<f64>,
    clouds: Option<f64>,
    pop: Option<f64>,
    precip: Option<f64>,
    pres: Option<f64>,
    wind_spd: Option<f64>,
    wind_gust_spd: Option<f64>,
    wind_dir: Option<f64>,
}

impl TryFrom<WeatherbitHour> for HourlyRecord {
    type Error = AppError;

    fn try_from(hour: WeatherbitHour) -> Result<Self, Self::Error> {
        let fraction = |percent: Option<f64>| percent.map(|p| p / 100.0);

        Ok(Self {
            time: from_epoch(hour.ts)?,
            temperature: hour.temp,
            dew_point: hour.dewpt,
            humidity: fraction(hour.rh),
            cloud_cover: fraction(hour.clouds),
            precip_probability: fraction(hour.pop),
            precip_intensity: hour.precip,
            pressure: hour.pres,
            wind_speed: hour.wind_spd,
            wind_gust: hour.wind_gust_spd,
            wind_bearing: hour.wind_dir,
        })
    }
}

/// HTTP client for the Weatherbit hourly forecast.
pub struct WeatherbitClient {
    http: reqwest::Client,
    config: WeatherbitConfig,
}

impl WeatherbitClient {
    pub fn with_config(config: WeatherbitConfig) -> Result<Self, AppError> {
        if config.api_key.is_empty() {
            return Err(AppError::MissingApiKey("Weatherbit"));
        }

        Ok(Self {
            http: http::client()?,
            config,
        })
    }
}

impl ForecastProvider for WeatherbitClient {
    async fn fetch_hourly(&self) -> Result<Vec<HourlyRecord>, AppError> {
        let response: HourlyResponse =
            http::get_json(&self.http, &self.config.hourly_url()).await?;
        response.data.into_iter().map(TryInto::try_into).collect()
    }
}
