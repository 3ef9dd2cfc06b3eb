use crate::models::{error::AppError, forecast::HourlyRecord};
use crate::services::darksky::{DarkSkyClient, DarkSkyConfig};
use crate::services::weatherbit::{WeatherbitClient, WeatherbitConfig};

/// A source of hourly forecast data.
#[allow(async_fn_in_trait)]
pub trait ForecastProvider {
    /// Fetches the next page of hourly records, ordered by time.
    async fn fetch_hourly(&self) -> Result<Vec<HourlyRecord>, AppError>;
}

/// Which provider to use and how to reach it.
#[derive(Debug, Clone, PartialEq)]
pub enum ProviderConfig {
    DarkSky(DarkSkyConfig),
    Weatherbit(WeatherbitConfig),
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self::DarkSky(DarkSkyConfig::default())
    }
}

impl ProviderConfig {
    /// Builds the client for this configuration.
    pub fn connect(&self) -> Result<Provider, AppError> {
        match self {
            Self::DarkSky(config) => Ok(Provider::DarkSky(DarkSkyClient::with_config(
                config.clone(),
            )?)),
            Self::Weatherbit(config) => Ok(Provider::Weatherbit(WeatherbitClient::with_config(
                config.clone(),
            )?)),
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Self::DarkSky(_) => "Dark Sky",
            Self::Weatherbit(_) => "Weatherbit",
        }
    }
}

/// A connected provider.
pub enum Provider {
    DarkSky(DarkSkyClient),
    Weatherbit(WeatherbitClient),
}

impl ForecastProvider for Provider {
    async fn fetch_hourly(&self) -> Result<Vec<HourlyRecord>, AppError> {
        match self {
            Self::DarkSky(client) => client.fetch_hourly().await,
            Self::Weatherbit(client) => client.fetch_hourly().await,
        }
    }
}
