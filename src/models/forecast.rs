use std::fmt::Display;

use chrono::{DateTime, TimeZone, Utc};
use serde::Deserialize;

use crate::utils::time::hour_label;

/// One hourly forecast sample. Metrics the provider left out are `None`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HourlyRecord {
    #[serde(with = "chrono::serde::ts_seconds")]
    pub time: DateTime<Utc>,
    #[serde(default)]
    pub temperature: Option<f64>,
    #[serde(default)]
    pub dew_point: Option<f64>,
    /// Fraction in 0-1
    #[serde(default)]
    pub humidity: Option<f64>,
    /// Fraction in 0-1
    #[serde(default)]
    pub cloud_cover: Option<f64>,
    /// Fraction in 0-1
    #[serde(default)]
    pub precip_probability: Option<f64>,
    #[serde(default)]
    pub precip_intensity: Option<f64>,
    #[serde(default)]
    pub pressure: Option<f64>,
    #[serde(default)]
    pub wind_speed: Option<f64>,
    #[serde(default)]
    pub wind_gust: Option<f64>,
    /// Degrees, direction the wind blows from
    #[serde(default)]
    pub wind_bearing: Option<f64>,
}

impl HourlyRecord {
    /// A record at `time` with every metric missing.
    pub const fn empty(time: DateTime<Utc>) -> Self {
        Self {
            time,
            temperature: None,
            dew_point: None,
            humidity: None,
            cloud_cover: None,
            precip_probability: None,
            precip_intensity: None,
            pressure: None,
            wind_speed: None,
            wind_gust: None,
            wind_bearing: None,
        }
    }
}

/// Daily record supplied by the dashboard shell.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyRecord {
    #[serde(with = "chrono::serde::ts_seconds")]
    pub time: DateTime<Utc>,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub sunrise_time: Option<DateTime<Utc>>,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub sunset_time: Option<DateTime<Utc>>,
    /// Fraction of the lunation in 0-1
    pub moon_phase: f64,
}

/// Numeric fields of an [`HourlyRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Temperature,
    DewPoint,
    Humidity,
    CloudCover,
    PrecipProbability,
    PrecipIntensity,
    Pressure,
    WindSpeed,
    WindGust,
    WindBearing,
}

impl Metric {
    pub const fn value(&self, record: &HourlyRecord) -> Option<f64> {
        match self {
            Self::Temperature => record.temperature,
            Self::DewPoint => record.dew_point,
            Self::Humidity => record.humidity,
            Self::CloudCover => record.cloud_cover,
            Self::PrecipProbability => record.precip_probability,
            Self::PrecipIntensity => record.precip_intensity,
            Self::Pressure => record.pressure,
            Self::WindSpeed => record.wind_speed,
            Self::WindGust => record.wind_gust,
            Self::WindBearing => record.wind_bearing,
        }
    }
}

/// `record[metric] * 100`, NaN when the field is missing.
pub fn to_percent(metric: Metric, record: &HourlyRecord) -> f64 {
    metric.value(record).map_or(f64::NAN, |value| value * 100.0)
}

/// Hourly forecast ordered by time ascending.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Hourly {
    data: Vec<HourlyRecord>,
}

impl Hourly {
    pub fn new(mut data: Vec<HourlyRecord>) -> Self {
        data.sort_by_key(|r| r.time);
        Self { data }
    }

    pub fn records(&self) -> &[HourlyRecord] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn values(&self, metric: Metric) -> Vec<f64> {
        self.data
            .iter()
            .map(|r| metric.value(r).unwrap_or(f64::NAN))
            .collect()
    }

    pub fn percent_values(&self, metric: Metric) -> Vec<f64> {
        self.data.iter().map(|r| to_percent(metric, r)).collect()
    }

    pub fn hour_labels<Tz>(&self, tz: &Tz) -> Vec<String>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        self.data.iter().map(|r| hour_label(&r.time, tz)).collect()
    }
}
