use std::rc::Rc;

use chrono::Local;
use yew::prelude::*;

use crate::components::chart_panel::ChartPanel;
use crate::config::ChartConfig;
use crate::hooks::use_hourly::use_hourly;
use crate::models::astronomy::summarize;
use crate::models::forecast::DailyRecord;
use crate::models::panel::panels;
use crate::services::provider::ProviderConfig;

#[derive(Properties, PartialEq)]
pub struct WeatherGraphProps {
    /// Week-ahead records feeding the astronomy summary
    pub seven_day: Rc<Vec<DailyRecord>>,
    #[prop_or_default]
    pub source: ProviderConfig,
    #[prop_or_default]
    pub config: Rc<ChartConfig>,
}

/// Three stacked hourly charts sharing one hover cursor.
#[function_component(WeatherGraph)]
pub fn weather_graph(props: &WeatherGraphProps) -> Html {
    let hourly = use_hourly(props.source.clone());
    let cursor = use_state_eq(|| None::<usize>);

    let specs = use_memo(props.config.clone(), |config| panels(config).map(Rc::new));
    let labels = use_memo(hourly.clone(), |hourly| hourly.hour_labels(&Local));

    let astronomy = summarize(&props.seven_day, &Local);
    gloo::console::log!(format!("Astronomy: {astronomy:?}"));

    let on_cursor = {
        let cursor = cursor.clone();
        Callback::from(move |index: Option<usize>| cursor.set(index))
    };

    html! {
        <div class="weather-graph">
            {
                specs.iter().map(|spec| html! {
                    <ChartPanel
                        key={spec.id}
                        spec={spec.clone()}
                        hourly={hourly.clone()}
                        labels={labels.clone()}
                        config={props.config.clone()}
                        cursor={*cursor}
                        on_cursor={on_cursor.clone()}
                    />
                }).collect::<Html>()
            }
        </div>
    }
}
