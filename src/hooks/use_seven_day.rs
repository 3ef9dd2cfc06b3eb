use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::models::forecast::DailyRecord;
use crate::services::darksky::{DarkSkyConfig, fetch_seven_day};
use crate::utils::cancel::CancellationToken;

#[derive(Clone, PartialEq, Debug)]
pub enum DailyState {
    Loading,
    Loaded(Rc<Vec<DailyRecord>>),
    Error(String),
}

impl DailyState {
    /// Returns true if the state is loading
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Returns the data if it is loaded
    pub const fn data(&self) -> Option<&Rc<Vec<DailyRecord>>> {
        match self {
            Self::Loaded(days) => Some(days),
            _ => None,
        }
    }
}

/// Fetches the week-ahead daily records once per mount.
#[hook]
pub fn use_seven_day(config: DarkSkyConfig) -> UseStateHandle<DailyState> {
    let state = use_state(|| DailyState::Loading);

    {
        let state = state.clone();

        use_effect_with((), move |_| {
            let token = CancellationToken::new();
            let task_token = token.clone();

            spawn_local(async move {
                let result = fetch_seven_day(config).await;
                if task_token.is_cancelled() {
                    return;
                }

                match result {
                    Ok(days) => state.set(DailyState::Loaded(Rc::new(days))),
                    Err(e) => {
                        gloo::console::warn!(format!("Daily forecast fetch failed: {e}"));
                        state.set(DailyState::Error(e.to_string()));
                    }
                }
            });

            move || token.cancel()
        });
    }

    state
}
