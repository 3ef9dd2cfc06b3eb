use std::fmt::Display;

use chrono::{DateTime, TimeZone, Utc};

use crate::models::error::AppError;

/// Converts provider epoch seconds into a UTC timestamp.
pub fn from_epoch(secs: i64) -> Result<DateTime<Utc>, AppError> {
    DateTime::from_timestamp(secs, 0)
        .ok_or_else(|| AppError::DataError(format!("Timestamp out of range: {secs}")))
}

/// Hour-of-day axis label, e.g. `3PM`.
pub fn hour_label<Tz>(time: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    time.with_timezone(tz).format("%-I%p").to_string()
}

/// Full timestamp label, e.g. `Mon Oct 19 2026 06:42`.
pub fn timestamp_label<Tz>(time: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    time.with_timezone(tz).format("%a %b %-d %Y %H:%M").to_string()
}
