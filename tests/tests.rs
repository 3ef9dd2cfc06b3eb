#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};
    use std::rc::Rc;
    use weather_graph::config::ChartConfig;
    use weather_graph::hooks::use_hourly::{FetchOutcome, apply_fetch, fetch_unless_cancelled};
    use weather_graph::hooks::use_seven_day::DailyState;
    use weather_graph::models::{
        astronomy::summarize,
        error::AppError,
        forecast::{DailyRecord, Hourly, HourlyRecord, Metric, to_percent},
        panel::{PanelLayout, panels},
        plot::wind_arrow_rotation,
    };
    use weather_graph::services::darksky::DarkSkyConfig;
    use weather_graph::services::provider::{ForecastProvider, ProviderConfig};
    use weather_graph::utils::cancel::CancellationToken;
    use weather_graph::utils::number::{TooltipValue, format_tooltip_value};
    use weather_graph::utils::time::timestamp_label;

    // Helper function to create a day of hourly records
    fn create_test_hours(count: usize) -> Vec<HourlyRecord> {
        let start = Utc.with_ymd_and_hms(2026, 10, 19, 0, 0, 0).unwrap();

        (0..count)
            .map(|hour| {
                let i = hour as f64;
                HourlyRecord {
                    temperature: Some(50.0 + i),
                    dew_point: Some(40.0 + i / 2.0),
                    humidity: Some(0.5 + i / 100.0),
                    cloud_cover: Some(0.25),
                    precip_probability: Some(0.1),
                    precip_intensity: Some(0.01),
                    pressure: Some(1012.0 + i / 10.0),
                    wind_speed: Some(5.0 + i / 4.0),
                    wind_gust: Some(10.0 + i / 4.0),
                    wind_bearing: Some(90.0),
                    ..HourlyRecord::empty(start + Duration::hours(hour as i64))
                }
            })
            .collect()
    }

    struct MockProvider {
        records: Option<Vec<HourlyRecord>>,
        cancel_during_fetch: Option<CancellationToken>,
    }

    impl ForecastProvider for MockProvider {
        async fn fetch_hourly(&self) -> Result<Vec<HourlyRecord>, AppError> {
            if let Some(token) = &self.cancel_during_fetch {
                token.cancel();
            }
            self.records
                .clone()
                .ok_or_else(|| AppError::ApiError("connection refused".to_string()))
        }
    }

    // ===== Error Type Tests =====

    #[test]
    fn test_app_error_api_display() {
        let error = AppError::ApiError("Connection failed".to_string());
        assert_eq!(error.to_string(), "API error: Connection failed");
    }

    #[test]
    fn test_app_error_data_display() {
        let error = AppError::DataError("missing hourly block".to_string());
        assert_eq!(error.to_string(), "Data error: missing hourly block");
    }

    // ===== Record Model Tests =====

    #[test]
    fn test_hourly_record_deserialization() {
        let json = r#"{
            "time": 1760832000,
            "temperature": 61.2,
            "dewPoint": 48.0,
            "humidity": 0.62,
            "windBearing": 270
        }"#;

        let record: HourlyRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.time, Utc.timestamp_opt(1_760_832_000, 0).unwrap());
        assert_eq!(record.temperature, Some(61.2));
        assert_eq!(record.dew_point, Some(48.0));
        assert_eq!(record.wind_bearing, Some(270.0));
        assert_eq!(record.cloud_cover, None);
    }

    #[test]
    fn test_daily_record_without_sun_times() {
        let json = r#"{ "time": 1760832000, "moonPhase": 0.93 }"#;

        let day: DailyRecord = serde_json::from_str(json).unwrap();
        assert_eq!(day.sunrise_time, None);
        assert_eq!(day.sunset_time, None);
        assert_eq!(day.moon_phase, 0.93);
    }

    // ===== Daily State Tests =====

    #[test]
    fn test_daily_state_data_extraction() {
        let days = Rc::new(vec![]);

        let loaded = DailyState::Loaded(days.clone());
        assert!(loaded.data().is_some());
        assert_eq!(loaded.data().unwrap(), &days);

        let loading = DailyState::Loading;
        assert!(loading.is_loading());
        assert!(loading.data().is_none());

        let error = DailyState::Error("timeout".to_string());
        assert!(!error.is_loading());
        assert!(error.data().is_none());
    }

    #[test]
    fn test_daily_state_equality() {
        assert_eq!(DailyState::Loading, DailyState::Loading);
        assert_eq!(
            DailyState::Error("a".to_string()),
            DailyState::Error("a".to_string())
        );
        assert_ne!(DailyState::Loading, DailyState::Error("a".to_string()));
    }

    // ===== Fetch Tests =====

    #[test]
    fn test_failed_fetch_keeps_existing_data() {
        let current = Rc::new(Hourly::new(create_test_hours(3)));

        let outcome = apply_fetch(&current, Err(AppError::ApiError("503".to_string())));
        assert!(matches!(outcome, FetchOutcome::Kept(_, AppError::ApiError(_))));
        assert!(Rc::ptr_eq(outcome.data(), &current));
    }

    #[test]
    fn test_successful_fetch_replaces_data() {
        let current = Rc::new(Hourly::new(create_test_hours(3)));

        let outcome = apply_fetch(&current, Ok(create_test_hours(24)));
        assert!(matches!(outcome, FetchOutcome::Replaced(_)));
        assert_eq!(outcome.data().len(), 24);
    }

    #[test]
    fn test_successful_fetch_orders_records_by_time() {
        let mut records = create_test_hours(4);
        records.reverse();

        let outcome = apply_fetch(&Rc::new(Hourly::default()), Ok(records));
        let times: Vec<_> = outcome.data().records().iter().map(|r| r.time).collect();
        let mut sorted = times.clone();
        sorted.sort();
        assert_eq!(times, sorted);
    }

    #[tokio::test]
    async fn test_fetch_passes_result_through() {
        let provider = MockProvider {
            records: Some(create_test_hours(24)),
            cancel_during_fetch: None,
        };

        let result = fetch_unless_cancelled(&provider, &CancellationToken::new()).await;
        assert_eq!(result.unwrap().unwrap().len(), 24);
    }

    #[tokio::test]
    async fn test_fetch_error_passes_through() {
        let provider = MockProvider {
            records: None,
            cancel_during_fetch: None,
        };

        let result = fetch_unless_cancelled(&provider, &CancellationToken::new()).await;
        assert!(matches!(result, Some(Err(AppError::ApiError(_)))));
    }

    #[tokio::test]
    async fn test_fetch_dropped_after_cancel() {
        let token = CancellationToken::new();
        let provider = MockProvider {
            records: Some(create_test_hours(24)),
            cancel_during_fetch: Some(token.clone()),
        };

        let result = fetch_unless_cancelled(&provider, &token).await;
        assert!(result.is_none());
    }

    #[test]
    fn test_provider_requires_api_key() {
        let source = ProviderConfig::DarkSky(DarkSkyConfig::builder().api_key("").build());
        assert!(matches!(source.connect(), Err(AppError::MissingApiKey(_))));
    }

    // ===== Data Shaping Tests =====

    #[test]
    fn test_percent_conversion() {
        let record = HourlyRecord {
            humidity: Some(0.42),
            ..HourlyRecord::empty(Utc::now())
        };

        assert!((to_percent(Metric::Humidity, &record) - 42.0).abs() < 1e-9);
        assert!(to_percent(Metric::CloudCover, &record).is_nan());
    }

    #[test]
    fn test_tooltip_formatting() {
        assert_eq!(format_tooltip_value(&TooltipValue::from(1.23456)), "1.23");
        assert_eq!(format_tooltip_value(&TooltipValue::from("12.3456")), "12.3");
        assert_eq!(
            format_tooltip_value(&TooltipValue::from(vec![7.0, 99.0])),
            "7.00"
        );
    }

    #[test]
    fn test_wind_rotation() {
        assert_eq!(wind_arrow_rotation(0.0), 135.0);
        assert_eq!(wind_arrow_rotation(90.0), 225.0);
    }

    #[test]
    fn test_astronomy_time_matches_formatted_day() {
        let time = Utc.with_ymd_and_hms(2026, 10, 19, 11, 0, 0).unwrap();
        let days = vec![DailyRecord {
            time,
            sunrise_time: Some(time - Duration::hours(4)),
            sunset_time: None,
            moon_phase: 0.5,
        }];

        let summary = summarize(&days, &Utc);
        assert_eq!(summary.len(), 1);
        assert_eq!(summary[0].time, timestamp_label(&time, &Utc));
        assert_eq!(summary[0].sunrise_time.as_deref(), Some("Mon Oct 19 2026 07:00"));
        assert_eq!(summary[0].sunset_time, None);
        assert_eq!(summary[0].moon_phase, 0.5);
    }

    // ===== End-to-end Layout Tests =====

    #[tokio::test]
    async fn test_panels_share_positions_for_mocked_day() {
        let provider = MockProvider {
            records: Some(create_test_hours(24)),
            cancel_during_fetch: None,
        };
        let result = fetch_unless_cancelled(&provider, &CancellationToken::new())
            .await
            .expect("fetch should not be cancelled");
        let outcome = apply_fetch(&Rc::new(Hourly::default()), result);
        assert!(matches!(outcome, FetchOutcome::Replaced(_)));

        let hourly = outcome.data().clone();
        let labels = hourly.hour_labels(&Utc);
        let config = ChartConfig::default();

        let layouts: Vec<PanelLayout> = panels(&config)
            .iter()
            .map(|spec| PanelLayout::compute(spec, &hourly, &labels, 960.0, 180.0))
            .collect();

        assert_eq!(layouts.len(), 3);
        for layout in &layouts {
            assert_eq!(layout.xs.len(), 24);
            assert_eq!(layout.xs, layouts[0].xs);
        }

        // Hovering any band selects the same record in every panel
        for (i, x) in layouts[0].xs.iter().enumerate() {
            for layout in &layouts {
                assert_eq!(layout.index_at(*x), Some(i));
                assert_eq!(layout.tooltip_rows(i).len(), layout.series.len());
            }
        }

        assert_eq!(layouts[0].x_labels.len(), 24);
        assert_eq!(layouts[0].x_labels[0], "12AM");
        assert!(layouts[1].x_labels.is_empty());
    }

    #[test]
    fn test_wind_markers_on_even_hours() {
        let hourly = Hourly::new(create_test_hours(24));
        let labels = hourly.hour_labels(&Utc);
        let config = ChartConfig::default();
        let [_, _, wind] = panels(&config);

        let layout = PanelLayout::compute(&wind, &hourly, &labels, 960.0, 180.0);
        let markers = &layout.series[0].markers;

        assert_eq!(markers.len(), 12);
        assert!(markers.iter().all(|m| m.index % 2 == 0));
        assert!(markers.iter().all(|m| m.rotation == 225.0));
        assert!(layout.series[1].markers.is_empty());
    }

    #[test]
    fn test_missing_values_do_not_break_series() {
        let mut records = create_test_hours(5);
        records[2].temperature = None;
        let hourly = Hourly::new(records);
        let labels = hourly.hour_labels(&Utc);
        let config = ChartConfig::default();
        let [temperature, _, _] = panels(&config);

        let layout = PanelLayout::compute(&temperature, &hourly, &labels, 600.0, 200.0);

        assert!(layout.series[0].path.starts_with('M'));
        assert!(!layout.series[0].path.contains("NaN"));
        assert_eq!(layout.tooltip_rows(2)[0].value, "NaN");
    }
}
