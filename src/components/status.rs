use std::fmt::Display;

use chrono::{Local, TimeZone};
use yew::prelude::*;

use crate::hooks::use_seven_day::DailyState;
use crate::models::forecast::DailyRecord;

#[derive(Properties, PartialEq)]
pub struct StatusProps {
    pub state: DailyState,
}

#[function_component(Status)]
pub fn status(props: &StatusProps) -> Html {
    match &props.state {
        DailyState::Loading => html! {
            <div class="status loading">
                <div class="spinner"></div>
                <p>{"Loading forecast..."}</p>
            </div>
        },
        DailyState::Loaded(days) => html! {
            <div class="status success">
                <p>{outlook_label(days, &Local)}</p>
            </div>
        },
        DailyState::Error(msg) => html! {
            <div class="status error">
                <p>{"Daily outlook unavailable: "}{msg}</p>
            </div>
        },
    }
}

/// "7 day outlook, Mon Oct 19 to Sun Oct 25" for the loaded days.
fn outlook_label<Tz>(days: &[DailyRecord], tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let day = |record: &DailyRecord| record.time.with_timezone(tz).format("%a %b %-d").to_string();

    let first = days.iter().min_by_key(|d| d.time);
    let last = days.iter().max_by_key(|d| d.time);

    match (first, last) {
        (Some(first), Some(last)) if first.time != last.time => {
            format!("{} day outlook, {} to {}", days.len(), day(first), day(last))
        }
        (Some(only), _) => format!("1 day outlook, {}", day(only)),
        _ => "No daily outlook returned".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn week() -> Vec<DailyRecord> {
        let start = Utc.with_ymd_and_hms(2026, 10, 19, 4, 0, 0).unwrap();
        (0..7)
            .map(|i| DailyRecord {
                time: start + Duration::days(i),
                sunrise_time: None,
                sunset_time: None,
                moon_phase: 0.5,
            })
            .rev()
            .collect()
    }

    #[test]
    fn test_outlook_label_spans_loaded_days() {
        assert_eq!(
            outlook_label(&week(), &Utc),
            "7 day outlook, Mon Oct 19 to Sun Oct 25"
        );
    }

    #[test]
    fn test_outlook_label_edge_cases() {
        assert_eq!(outlook_label(&week()[6..], &Utc), "1 day outlook, Mon Oct 19");
        assert_eq!(outlook_label(&[], &Utc), "No daily outlook returned");
    }
}
