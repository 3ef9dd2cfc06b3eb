use super::forecast::{Hourly, Metric};
use super::plot::{
    Domain, Margins, PlotArea, Scale, WindArrow, monotone_path, plot_points, step_area_path,
    step_path,
};
use crate::config::{ChartConfig, Config};
use crate::utils::number::{TooltipValue, format_tooltip_value};

/// Minimum horizontal room, in pixels, for one hour label
const MIN_LABEL_SPACING: f64 = 40.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesKind {
    /// Smooth monotone line
    Line,
    /// Filled area stepping halfway between samples
    StepArea,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisSide {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    None,
    WindArrow,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AxisScale {
    /// Data range padded by a fixed amount on both ends
    Padded(f64),
    /// Data range stretched to include zero
    FromZero,
}

impl AxisScale {
    pub fn domain(&self, values: impl IntoIterator<Item = f64>) -> Domain {
        match self {
            Self::Padded(padding) => Domain::padded(values, *padding),
            Self::FromZero => Domain::from_zero(values),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SeriesSpec {
    pub name: String,
    pub metric: Metric,
    pub percent: bool,
    pub kind: SeriesKind,
    pub axis: AxisSide,
    pub stroke: &'static str,
    pub fill: Option<&'static str>,
    pub stroke_width: f64,
    pub marker: Marker,
}

impl SeriesSpec {
    fn line(name: &str, metric: Metric, stroke: &'static str) -> Self {
        Self {
            name: name.to_string(),
            metric,
            percent: false,
            kind: SeriesKind::Line,
            axis: AxisSide::Left,
            stroke,
            fill: None,
            stroke_width: 2.0,
            marker: Marker::None,
        }
    }

    fn step_area(name: &str, metric: Metric, stroke: &'static str, fill: &'static str) -> Self {
        Self {
            kind: SeriesKind::StepArea,
            fill: Some(fill),
            stroke_width: 1.0,
            percent: true,
            ..Self::line(name, metric, stroke)
        }
    }

    fn percent(mut self) -> Self {
        self.percent = true;
        self
    }

    fn on_right(mut self) -> Self {
        self.axis = AxisSide::Right;
        self
    }

    fn with_marker(mut self, marker: Marker) -> Self {
        self.marker = marker;
        self
    }

    /// One value per hourly record, NaN where the metric is missing.
    pub fn values(&self, hourly: &Hourly) -> Vec<f64> {
        if self.percent {
            hourly.percent_values(self.metric)
        } else {
            hourly.values(self.metric)
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PanelSpec {
    pub id: &'static str,
    pub series: Vec<SeriesSpec>,
    pub show_x_ticks: bool,
    pub left: AxisScale,
    /// Drawn even when no series is plotted against it
    pub right: Option<AxisScale>,
}

/// The three stacked panels: temperature, percentages, wind.
pub fn panels(config: &ChartConfig) -> [PanelSpec; 3] {
    let labels = &config.labels;

    [
        PanelSpec {
            id: "temperature",
            series: vec![
                SeriesSpec::line(&labels.temperature, Metric::Temperature, "navy"),
                SeriesSpec::line(&labels.dew_point, Metric::DewPoint, "orange"),
            ],
            show_x_ticks: true,
            left: AxisScale::Padded(config.temperature_padding),
            right: Some(AxisScale::FromZero),
        },
        PanelSpec {
            id: "percent",
            series: vec![
                SeriesSpec::step_area(&labels.cloud_cover, Metric::CloudCover, "grey", "lightgrey"),
                SeriesSpec::step_area(
                    &labels.precip_probability,
                    Metric::PrecipProbability,
                    "steelblue",
                    "#99d6f7",
                ),
                SeriesSpec::step_area(
                    &labels.precip_intensity,
                    Metric::PrecipIntensity,
                    "violet",
                    "violet",
                ),
                SeriesSpec::line(&labels.humidity, Metric::Humidity, "indianred").percent(),
                SeriesSpec::line(&labels.pressure, Metric::Pressure, "black").on_right(),
            ],
            show_x_ticks: false,
            left: AxisScale::FromZero,
            right: Some(AxisScale::Padded(config.pressure_padding)),
        },
        PanelSpec {
            id: "wind",
            series: vec![
                SeriesSpec::line(&labels.wind_speed, Metric::WindSpeed, "#000")
                    .with_marker(Marker::WindArrow),
                SeriesSpec::line(&labels.wind_gust, Metric::WindGust, "teal"),
            ],
            show_x_ticks: false,
            left: AxisScale::FromZero,
            right: Some(AxisScale::FromZero),
        },
    ]
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub y: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AxisLayout {
    pub domain: Domain,
    pub ticks: Vec<Tick>,
}

impl AxisLayout {
    fn new(domain: Domain, scale: &Scale) -> Self {
        let decimals = usize::from(domain.span() < 5.0);
        let ticks = domain
            .ticks(Config::Y_TICKS)
            .into_iter()
            .map(|value| Tick {
                y: scale.y(value),
                label: format!("{value:.decimals$}"),
            })
            .collect();

        Self { domain, ticks }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SeriesLayout {
    pub name: String,
    pub stroke: &'static str,
    pub fill: Option<&'static str>,
    pub stroke_width: f64,
    /// Outline (or line) path
    pub path: String,
    /// Closed fill path for areas
    pub area: Option<String>,
    pub markers: Vec<WindArrow>,
    values: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TooltipRow {
    pub name: String,
    pub value: String,
    pub color: &'static str,
}

/// Everything a panel draws, in pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelLayout {
    pub area: PlotArea,
    pub xs: Vec<f64>,
    /// Empty when the panel hides its x ticks
    pub x_labels: Vec<String>,
    pub left: AxisLayout,
    pub right: Option<AxisLayout>,
    pub series: Vec<SeriesLayout>,
}

impl PanelLayout {
    pub fn compute(
        spec: &PanelSpec,
        hourly: &Hourly,
        labels: &[String],
        width: f64,
        height: f64,
    ) -> Self {
        let margins = if spec.show_x_ticks {
            Margins::LABELLED
        } else {
            Margins::BARE
        };
        let area = PlotArea::new(width, height, &margins);
        let xs = area.x_positions(hourly.len());

        let values: Vec<Vec<f64>> = spec.series.iter().map(|s| s.values(hourly)).collect();

        let left_scale = Scale::new(
            spec.left.domain(axis_values(spec, &values, AxisSide::Left)),
            &area,
        );
        let right_scale = spec.right.map(|axis| {
            Scale::new(
                axis.domain(axis_values(spec, &values, AxisSide::Right)),
                &area,
            )
        });

        let series = spec
            .series
            .iter()
            .zip(values)
            .map(|(series, values)| {
                let scale = match (series.axis, &right_scale) {
                    (AxisSide::Right, Some(right)) => right,
                    _ => &left_scale,
                };
                layout_series(series, values, &xs, scale, hourly)
            })
            .collect();

        Self {
            area,
            x_labels: if spec.show_x_ticks {
                labels.to_vec()
            } else {
                vec![]
            },
            xs,
            left: AxisLayout::new(left_scale.domain, &left_scale),
            right: right_scale.map(|scale| AxisLayout::new(scale.domain, &scale)),
            series,
        }
    }

    /// Band under a pointer at `x`.
    pub fn index_at(&self, x: f64) -> Option<usize> {
        self.area.index_at(x, self.xs.len())
    }

    /// Draw every n-th hour label so neighbours do not overlap.
    pub fn x_label_step(&self) -> usize {
        let count = self.xs.len();
        if count == 0 || self.area.width <= 0.0 {
            return 1;
        }
        let band = self.area.width / count as f64;
        (MIN_LABEL_SPACING / band).ceil().max(1.0) as usize
    }

    /// One row per series for the sample at `index`.
    pub fn tooltip_rows(&self, index: usize) -> Vec<TooltipRow> {
        self.series
            .iter()
            .filter_map(|series| {
                let value = *series.values.get(index)?;
                Some(TooltipRow {
                    name: series.name.clone(),
                    value: format_tooltip_value(&TooltipValue::Number(value)),
                    color: series.stroke,
                })
            })
            .collect()
    }
}

/// Values of every series plotted against `side`.
fn axis_values<'a>(
    spec: &'a PanelSpec,
    values: &'a [Vec<f64>],
    side: AxisSide,
) -> impl Iterator<Item = f64> + 'a {
    spec.series
        .iter()
        .zip(values)
        .filter(move |(series, _)| series.axis == side)
        .flat_map(|(_, v)| v.iter().copied())
}

fn layout_series(
    series: &SeriesSpec,
    values: Vec<f64>,
    xs: &[f64],
    scale: &Scale,
    hourly: &Hourly,
) -> SeriesLayout {
    let points = plot_points(&values, xs, scale);

    let (path, area) = match series.kind {
        SeriesKind::Line => (monotone_path(&points), None),
        SeriesKind::StepArea => {
            let baseline = scale.y(scale.domain.min.max(0.0));
            (step_path(&points), Some(step_area_path(&points, baseline)))
        }
    };

    let markers = match series.marker {
        Marker::None => vec![],
        Marker::WindArrow => hourly
            .records()
            .iter()
            .zip(xs)
            .zip(&values)
            .enumerate()
            .filter_map(|(index, ((record, &x), &value))| {
                let cy = value.is_finite().then(|| scale.y(value));
                WindArrow::at(index, Some(x), cy, record.wind_bearing)
            })
            .collect(),
    };

    SeriesLayout {
        name: series.name.clone(),
        stroke: series.stroke,
        fill: series.fill,
        stroke_width: series.stroke_width,
        path,
        area,
        markers,
        values,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::forecast::HourlyRecord;
    use chrono::{Duration, TimeZone, Utc};

    fn hourly(count: usize) -> Hourly {
        let start = Utc.with_ymd_and_hms(2026, 10, 19, 0, 0, 0).unwrap();
        Hourly::new(
            (0..count)
                .map(|i| HourlyRecord {
                    temperature: Some(50.0 + i as f64),
                    dew_point: Some(40.0),
                    humidity: Some(0.6),
                    cloud_cover: Some(0.2),
                    precip_probability: Some(0.1),
                    precip_intensity: Some(0.01),
                    pressure: Some(1012.0 + i as f64 / 10.0),
                    wind_speed: Some(5.0),
                    wind_gust: Some(9.0),
                    wind_bearing: Some(90.0),
                    ..HourlyRecord::empty(start + Duration::hours(i as i64))
                })
                .collect(),
        )
    }

    #[test]
    fn test_panels_shape() {
        let [temperature, percent, wind] = panels(&ChartConfig::default());

        assert_eq!(temperature.series.len(), 2);
        assert!(temperature.show_x_ticks);
        assert_eq!(temperature.left, AxisScale::Padded(10.0));
        assert!(temperature.right.is_some());

        assert_eq!(percent.series.len(), 5);
        assert!(!percent.show_x_ticks);
        let areas = percent
            .series
            .iter()
            .filter(|s| s.kind == SeriesKind::StepArea)
            .count();
        assert_eq!(areas, 3);
        assert!(percent.series.iter().take(4).all(|s| s.percent));
        assert_eq!(percent.series[4].axis, AxisSide::Right);
        assert_eq!(percent.right, Some(AxisScale::Padded(3.0)));

        assert_eq!(wind.series[0].marker, Marker::WindArrow);
        assert_eq!(wind.series[1].marker, Marker::None);
    }

    #[test]
    fn test_temperature_axis_is_padded() {
        let [temperature, ..] = panels(&ChartConfig::default());
        let layout = PanelLayout::compute(&temperature, &hourly(5), &[], 400.0, 150.0);
        assert_eq!(layout.left.domain, Domain { min: 30.0, max: 64.0 });
    }

    #[test]
    fn test_x_labels_only_on_labelled_panel() {
        let data = hourly(3);
        let labels = data.hour_labels(&Utc);
        let [temperature, percent, _] = panels(&ChartConfig::default());

        let top = PanelLayout::compute(&temperature, &data, &labels, 400.0, 150.0);
        assert_eq!(top.x_labels, vec!["12AM", "1AM", "2AM"]);

        let middle = PanelLayout::compute(&percent, &data, &labels, 400.0, 150.0);
        assert!(middle.x_labels.is_empty());
    }

    #[test]
    fn test_percent_series_use_percent_values() {
        let [_, percent, _] = panels(&ChartConfig::default());
        let layout = PanelLayout::compute(&percent, &hourly(2), &[], 400.0, 150.0);

        let rows = layout.tooltip_rows(0);
        assert_eq!(rows[0].name, "Cloud cover");
        assert_eq!(rows[0].value, "20.0");
        assert_eq!(rows[3].value, "60.0");
        assert_eq!(rows[4].value, "1.01e+3");
        assert!(layout.series[0].area.is_some());
        assert!(layout.series[3].area.is_none());
    }

    #[test]
    fn test_wind_markers_every_other_sample() {
        let [_, _, wind] = panels(&ChartConfig::default());
        let layout = PanelLayout::compute(&wind, &hourly(6), &[], 400.0, 150.0);

        let indices: Vec<usize> = layout.series[0].markers.iter().map(|m| m.index).collect();
        assert_eq!(indices, vec![0, 2, 4]);
        assert!(layout.series[0].markers.iter().all(|m| m.rotation == 225.0));
        assert!(layout.series[1].markers.is_empty());
    }

    #[test]
    fn test_missing_values_show_nan_in_tooltip() {
        let start = Utc.with_ymd_and_hms(2026, 10, 19, 0, 0, 0).unwrap();
        let data = Hourly::new(vec![HourlyRecord::empty(start)]);
        let [temperature, ..] = panels(&ChartConfig::default());
        let layout = PanelLayout::compute(&temperature, &data, &[], 400.0, 150.0);

        let rows = layout.tooltip_rows(0);
        assert_eq!(rows[0].value, "NaN");
        assert!(layout.tooltip_rows(1).is_empty());
        assert!(layout.series[0].path.is_empty());
    }

    #[test]
    fn test_x_label_step() {
        let [temperature, ..] = panels(&ChartConfig::default());
        let narrow = PanelLayout::compute(&temperature, &hourly(24), &[], 400.0, 150.0);
        assert_eq!(narrow.x_label_step(), 4);

        let wide = PanelLayout::compute(&temperature, &hourly(6), &[], 400.0, 150.0);
        assert_eq!(wide.x_label_step(), 1);

        let empty = PanelLayout::compute(&temperature, &Hourly::default(), &[], 400.0, 150.0);
        assert_eq!(empty.x_label_step(), 1);
    }

    #[test]
    fn test_tick_labels() {
        let [temperature, ..] = panels(&ChartConfig::default());
        let layout = PanelLayout::compute(&temperature, &hourly(5), &[], 400.0, 150.0);
        let labels: Vec<&str> = layout.left.ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels.len(), 5);
        assert_eq!(labels[0], "30");
        assert_eq!(labels[2], "47");
        assert_eq!(labels[4], "64");
        assert!(layout.left.ticks[0].y > layout.left.ticks[4].y);
    }
}
