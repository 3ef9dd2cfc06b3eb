/// Configuration constants for the application
pub struct Config;

impl Config {
    /// Quiet period before chart panels re-measure after a window resize
    pub const RESIZE_DEBOUNCE_MS: u32 = 150;

    /// Forecast location used when none is configured
    pub const DEFAULT_LATITUDE: f64 = 42.3601;
    pub const DEFAULT_LONGITUDE: f64 = -71.0589;

    /// Hours requested from providers that take an explicit horizon
    pub const FORECAST_HOURS: u32 = 48;

    /// Number of y axis ticks per panel
    pub const Y_TICKS: usize = 5;
}

/// Legend and tooltip names for every plotted series.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesLabels {
    pub temperature: String,
    pub dew_point: String,
    pub cloud_cover: String,
    pub precip_probability: String,
    pub precip_intensity: String,
    pub humidity: String,
    pub pressure: String,
    pub wind_speed: String,
    pub wind_gust: String,
}

impl Default for SeriesLabels {
    fn default() -> Self {
        Self {
            temperature: "Temperature".to_string(),
            dew_point: "Dew point".to_string(),
            cloud_cover: "Cloud cover".to_string(),
            precip_probability: "Chance precip".to_string(),
            precip_intensity: "Qty precip".to_string(),
            humidity: "Humidity".to_string(),
            pressure: "Pressure".to_string(),
            wind_speed: "Wind speed".to_string(),
            wind_gust: "Wind gust".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TooltipStyle {
    pub background: String,
    pub border: String,
    /// Placed between a series name and its value
    pub separator: String,
}

impl Default for TooltipStyle {
    fn default() -> Self {
        Self {
            background: "rgba(255,255,255,.7)".to_string(),
            border: "none".to_string(),
            separator: " ".to_string(),
        }
    }
}

impl TooltipStyle {
    /// Inline CSS for the tooltip box.
    pub fn css(&self) -> String {
        format!(
            "background-color: {}; border: {};",
            self.background, self.border
        )
    }
}

/// Everything the chart panels need to know about presentation.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    pub labels: SeriesLabels,
    pub tooltip: TooltipStyle,
    pub grid_stroke: String,
    pub axis_color: String,
    pub cursor_stroke: String,
    /// Added above and below the temperature range
    pub temperature_padding: f64,
    /// Added above and below the pressure range
    pub pressure_padding: f64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            labels: SeriesLabels::default(),
            tooltip: TooltipStyle::default(),
            grid_stroke: "#eee".to_string(),
            axis_color: "#666".to_string(),
            cursor_stroke: "#ccc".to_string(),
            temperature_padding: 10.0,
            pressure_padding: 3.0,
        }
    }
}
