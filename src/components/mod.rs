pub mod chart_panel;
pub mod status;
pub mod tooltip;
pub mod weather_graph;
pub mod wind_arrow;

pub use chart_panel::ChartPanel;
pub use weather_graph::WeatherGraph;
