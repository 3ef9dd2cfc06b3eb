use std::fmt::Display;

use chrono::TimeZone;

use super::forecast::DailyRecord;
use crate::utils::time::timestamp_label;

#[derive(Debug, Clone, PartialEq)]
pub struct AstronomySummary {
    pub time: String,
    pub sunrise_time: Option<String>,
    pub sunset_time: Option<String>,
    pub moon_phase: f64,
}

/// Formats each daily record's timestamps in `tz`, keeping input order.
pub fn summarize<Tz>(days: &[DailyRecord], tz: &Tz) -> Vec<AstronomySummary>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    days.iter()
        .map(|day| AstronomySummary {
            time: timestamp_label(&day.time, tz),
            sunrise_time: day.sunrise_time.map(|t| timestamp_label(&t, tz)),
            sunset_time: day.sunset_time.map(|t| timestamp_label(&t, tz)),
            moon_phase: day.moon_phase,
        })
        .collect()
}
