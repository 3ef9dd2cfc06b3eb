use std::rc::Rc;

use yew::prelude::*;

use weather_graph::components::WeatherGraph;
use weather_graph::components::status::Status;
use weather_graph::hooks::use_seven_day::use_seven_day;
use weather_graph::services::darksky::DarkSkyConfig;
use weather_graph::services::provider::ProviderConfig;

#[function_component(App)]
fn app() -> Html {
    let config = DarkSkyConfig::default();
    let state = use_seven_day(config.clone());
    let seven_day = state.data().cloned().unwrap_or_else(|| Rc::new(Vec::new()));

    html! {
        <div class="app-container">
            <header class="app-header">
                <h1>{"Hourly Forecast"}</h1>
            </header>

            <main class="app-main">
                <section class="status-section">
                    <Status state={(*state).clone()} />
                </section>

                <section class="chart-section">
                    <WeatherGraph {seven_day} source={ProviderConfig::DarkSky(config)} />
                </section>
            </main>

            <style>
                {include_str!("style.css")}
            </style>
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
