pub mod use_hourly;
pub mod use_seven_day;
