//! Application state - single source of truth.
//!
//! Components receive `&AppState` as props and never mutate it; all
//! transitions go through the reducer.

use std::fmt::{self, Display, Formatter};

use serde::Deserialize;

use crate::catalog::CityCatalog;

/// A capital from the catalog. The display name doubles as the lookup key
/// sent to the weather service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct City(String);

impl City {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for City {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Weather payload returned by the service.
///
/// Every field may be absent. A report without a temperature counts as
/// "no data available" for the city, which is informational rather than an
/// error; absent fields render as a placeholder, never panic.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct WeatherReport {
    #[serde(default)]
    pub temperature: Option<String>,
    #[serde(default)]
    pub wind: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub forecast: Vec<ForecastDay>,
}

impl WeatherReport {
    pub fn has_data(&self) -> bool {
        self.temperature.is_some()
    }
}

/// One entry of the short forecast (up to three days).
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ForecastDay {
    #[serde(default)]
    pub day: Option<String>,
    #[serde(default)]
    pub temperature: Option<String>,
    #[serde(default)]
    pub wind: Option<String>,
}

/// Severity of a banner message. The banner component maps severity to a
/// style through [`BannerTheme`](crate::components::BannerTheme).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
}

/// The shared message box: one optional message with a severity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Banner {
    pub message: String,
    pub severity: Severity,
}

impl Banner {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Info,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Error,
        }
    }
}

/// Request lifecycle of the widget. Exactly one value lives at a time.
///
/// `Loading` is the only phase in which the two action controls (fetch and
/// clear) are disabled; that gate is the widget's single-flight guard.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Loading {
        city: City,
    },
    Ready {
        city: City,
        report: WeatherReport,
    },
    /// Well-formed response without a temperature: informational, not an
    /// error.
    NoData {
        city: City,
    },
    Failed {
        city: City,
        message: String,
    },
}

impl Phase {
    pub fn is_loading(&self) -> bool {
        matches!(self, Phase::Loading { .. })
    }
}

/// Everything the UI needs to render.
#[derive(Clone, Debug, PartialEq)]
pub struct AppState {
    /// Fixed city catalog, supplied at startup.
    pub catalog: CityCatalog,
    /// Currently chosen catalog index, if any.
    pub selected: Option<usize>,
    /// Request lifecycle.
    pub phase: Phase,
    /// Message box content, hidden when `None`.
    pub banner: Option<Banner>,
    /// Frame counter for the loading spinner.
    pub tick_count: u32,
}

impl AppState {
    /// Create state over the given catalog, preselecting the default city.
    pub fn new(catalog: CityCatalog) -> Self {
        let selected = catalog.default_index();
        Self {
            catalog,
            selected,
            phase: Phase::Idle,
            banner: None,
            tick_count: 0,
        }
    }

    pub fn selected_city(&self) -> Option<City> {
        self.selected
            .and_then(|index| self.catalog.get(index))
            .map(City::new)
    }

    /// Whether the fetch and clear controls accept input. False only while
    /// a request is in flight.
    pub fn controls_enabled(&self) -> bool {
        !self.phase.is_loading()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(CityCatalog::european_capitals())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_preselects_london() {
        let state = AppState::default();
        assert_eq!(state.selected_city(), Some(City::new("London")));
        assert_eq!(state.phase, Phase::Idle);
        assert!(state.controls_enabled());
    }

    #[test]
    fn report_without_temperature_has_no_data() {
        let report = WeatherReport {
            wind: Some("5 km/h".into()),
            ..Default::default()
        };
        assert!(!report.has_data());

        let report = WeatherReport {
            temperature: Some("14 °C".into()),
            ..Default::default()
        };
        assert!(report.has_data());
    }

    #[test]
    fn controls_disabled_only_while_loading() {
        let mut state = AppState::default();
        state.phase = Phase::Loading {
            city: City::new("Oslo"),
        };
        assert!(!state.controls_enabled());

        state.phase = Phase::Failed {
            city: City::new("Oslo"),
            message: "boom".into(),
        };
        assert!(state.controls_enabled());
    }
}
