//! The request/response/render state machine: `(state, action) -> result`.
//!
//! All transitions live here. The reducer is pure; the one outbound fetch
//! it may decide on is returned as an [`Effect`] for the run loop to spawn.

use tracing::warn;

use crate::action::Action;
use crate::api::FetchError;
use crate::effect::Effect;
use crate::state::{AppState, Banner, Phase};
use crate::store::DispatchResult;

/// Shown when a fetch is requested without a selection.
pub const MSG_SELECT_A_CITY: &str = "Please select a city.";
/// Info banner after the display is reset.
pub const MSG_DISPLAY_CLEARED: &str = "Weather display cleared.";

pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        Action::CitySelect(index) => {
            if index >= state.catalog.len() || state.selected == Some(index) {
                return DispatchResult::unchanged();
            }
            state.selected = Some(index);
            DispatchResult::changed()
        }

        Action::WeatherFetch => {
            let Some(city) = state.selected_city() else {
                state.banner = Some(Banner::error(MSG_SELECT_A_CITY));
                return DispatchResult::changed();
            };

            // Hide any stale message before the new request; Loading is the
            // phase that disables both action controls.
            state.banner = None;
            state.phase = Phase::Loading { city: city.clone() };
            DispatchResult::changed_with(Effect::FetchWeather { city })
        }

        Action::WeatherDidLoad(report) => {
            let Phase::Loading { city } = &state.phase else {
                // Late result for a request the UI no longer cares about.
                return DispatchResult::unchanged();
            };
            let city = city.clone();

            if report.has_data() {
                state.banner = Some(Banner::success(format!(
                    "Weather data for {city} loaded successfully!"
                )));
                state.phase = Phase::Ready { city, report };
            } else {
                state.banner = None;
                state.phase = Phase::NoData { city };
            }
            DispatchResult::changed()
        }

        Action::WeatherDidError(err) => {
            let Phase::Loading { city } = &state.phase else {
                return DispatchResult::unchanged();
            };
            let city = city.clone();
            warn!(city = %city, error = %err, "weather fetch failed");

            let message = match &err {
                FetchError::Status(_) => {
                    format!("Failed to retrieve weather for {city}. {err}")
                }
                // The transport layer cannot tell a CORS-style rejection
                // from a plain network failure, so the hint stays hedged.
                FetchError::Transport(_) => format!(
                    "Failed to retrieve weather for {city}. \
                     This might be due to network or CORS issues."
                ),
            };

            state.banner = Some(Banner::error(message.clone()));
            state.phase = Phase::Failed { city, message };
            DispatchResult::changed()
        }

        Action::DisplayClear => {
            state.phase = Phase::Idle;
            state.banner = Some(Banner::info(MSG_DISPLAY_CLEARED));
            DispatchResult::changed()
        }

        Action::Tick => {
            state.tick_count = state.tick_count.wrapping_add(1);
            // Only the spinner needs the frame.
            if state.phase.is_loading() {
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        Action::Quit => DispatchResult::unchanged(),
    }
}
