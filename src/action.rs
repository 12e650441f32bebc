//! Application actions.
//!
//! Naming convention: intent actions trigger work (`WeatherFetch`), `Did*`
//! actions carry an async result back through the action channel.

use crate::api::FetchError;
use crate::state::WeatherReport;

/// Everything that can be dispatched to the store.
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    /// Record the chosen catalog index; no network effect.
    CitySelect(usize),
    /// Intent: request weather for the selected city.
    WeatherFetch,
    /// Result: the service answered with a parsed report.
    WeatherDidLoad(WeatherReport),
    /// Result: the request failed.
    WeatherDidError(FetchError),
    /// Reset the display to its initial placeholder.
    DisplayClear,
    /// Spinner frame advance while loading.
    Tick,
    /// Exit the application; handled by the run loop, not the reducer.
    Quit,
}

impl crate::store::Action for Action {
    fn name(&self) -> &'static str {
        match self {
            Action::CitySelect(_) => "CitySelect",
            Action::WeatherFetch => "WeatherFetch",
            Action::WeatherDidLoad(_) => "WeatherDidLoad",
            Action::WeatherDidError(_) => "WeatherDidError",
            Action::DisplayClear => "DisplayClear",
            Action::Tick => "Tick",
            Action::Quit => "Quit",
        }
    }
}
