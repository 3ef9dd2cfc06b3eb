use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::models::{
    error::AppError,
    forecast::{Hourly, HourlyRecord},
};
use crate::services::provider::{ForecastProvider, ProviderConfig};
use crate::utils::cancel::CancellationToken;

/// Result of folding a fetch into the current chart data.
#[derive(Debug)]
pub enum FetchOutcome {
    /// The fetch succeeded and its records replace the data set
    Replaced(Rc<Hourly>),
    /// The fetch failed; the previous data set stays in place
    Kept(Rc<Hourly>, AppError),
}

impl FetchOutcome {
    pub const fn data(&self) -> &Rc<Hourly> {
        match self {
            Self::Replaced(data) | Self::Kept(data, _) => data,
        }
    }
}

/// Applies a fetch result to the current data set.
pub fn apply_fetch(
    current: &Rc<Hourly>,
    result: Result<Vec<HourlyRecord>, AppError>,
) -> FetchOutcome {
    match result {
        Ok(records) => FetchOutcome::Replaced(Rc::new(Hourly::new(records))),
        Err(e) => FetchOutcome::Kept(current.clone(), e),
    }
}

/// Awaits one fetch, discarding the result if `token` was cancelled while
/// the request was in flight.
pub async fn fetch_unless_cancelled<P: ForecastProvider>(
    provider: &P,
    token: &CancellationToken,
) -> Option<Result<Vec<HourlyRecord>, AppError>> {
    let result = provider.fetch_hourly().await;
    (!token.is_cancelled()).then_some(result)
}

/// Fetches the hourly forecast once per mount.
///
/// Starts empty. Failures are logged and leave the current data untouched;
/// results arriving after unmount are dropped.
#[hook]
pub fn use_hourly(source: ProviderConfig) -> Rc<Hourly> {
    let hourly = use_state(|| Rc::new(Hourly::default()));

    {
        let hourly = hourly.clone();

        use_effect_with((), move |_| {
            let token = CancellationToken::new();
            let task_token = token.clone();

            spawn_local(async move {
                let result = match source.connect() {
                    Ok(provider) => fetch_unless_cancelled(&provider, &task_token).await,
                    Err(e) => Some(Err(e)),
                };
                let Some(result) = result else {
                    return; // Unmounted while fetching
                };

                match apply_fetch(&hourly, result) {
                    FetchOutcome::Replaced(data) => {
                        gloo::console::log!(format!(
                            "Fetched {} hourly records from {}",
                            data.len(),
                            source.name()
                        ));
                        hourly.set(data);
                    }
                    FetchOutcome::Kept(_, e) => {
                        gloo::console::error!(format!("Hourly forecast fetch failed: {e}"));
                    }
                }
            });

            move || token.cancel()
        });
    }

    (*hourly).clone()
}
