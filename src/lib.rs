//! Terminal weather widget for European capitals.
//!
//! A small redux-style TUI: components translate key events into actions,
//! a reducer folds actions into [`state::AppState`] and declares effects,
//! and the runtime executes those effects as managed async tasks against
//! the goweather service.
//!
//! The flow for one fetch:
//!
//! 1. Enter on the city list emits [`action::Action::WeatherFetch`].
//! 2. The reducer moves the phase to `Loading` and returns
//!    [`effect::Effect::FetchWeather`].
//! 3. The runtime spawns the HTTP request under the `"weather"` task key,
//!    aborting any previous request.
//! 4. The result comes back as `WeatherDidLoad` or `WeatherDidError` and the
//!    reducer settles into `Ready`, `NoData`, or `Failed`.

pub mod action;
pub mod api;
pub mod catalog;
pub mod component;
pub mod components;
pub mod effect;
pub mod event;
pub mod reducer;
pub mod runtime;
pub mod state;
pub mod store;
pub mod tasks;
pub mod testing;

pub use action::Action;
pub use api::{FetchError, WeatherClient};
pub use catalog::CityCatalog;
pub use component::Component;
pub use effect::Effect;
pub use reducer::reducer;
pub use runtime::{App, Ui};
pub use state::{AppState, Banner, City, ForecastDay, Phase, Severity, WeatherReport};
pub use store::{DispatchResult, EffectStore, EffectStoreWithMiddleware, LoggingMiddleware};
