//! HTTP client for the weather service.
//!
//! Async side effects stay out of the reducer: the runtime spawns
//! [`WeatherClient::current`] as a task and routes the outcome back through
//! the action channel as `WeatherDidLoad` / `WeatherDidError`.

use std::fmt::{self, Display, Formatter};

use crate::state::WeatherReport;

/// Base URL of the public goweather service.
pub const DEFAULT_HOST: &str = "http://goweather.xyz";

/// Failure of a single weather request, typed at the transport layer so the
/// reducer never has to sniff message text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FetchError {
    /// The service answered with a non-2xx status.
    Status(u16),
    /// The request never completed: connect, DNS, or body-read failure.
    /// A CORS-style rejection is indistinguishable from these, so no
    /// variant claims to detect one.
    Transport(String),
}

impl FetchError {
    fn transport(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

impl Display for FetchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Status(code) => write!(f, "HTTP error! status: {code}"),
            FetchError::Transport(msg) => f.write_str(msg),
        }
    }
}

impl std::error::Error for FetchError {}

/// Thin reqwest wrapper bound to one service host.
#[derive(Clone, Debug)]
pub struct WeatherClient {
    base_url: String,
    http: reqwest::Client,
}

impl WeatherClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: reqwest::Client::new(),
        }
    }

    /// Request URL for a city. The city name is percent-encoded; the
    /// catalog only holds plain ASCII names today, but the service key is
    /// user-visible text and deserves a correct path segment.
    pub fn url_for(&self, city: &str) -> String {
        format!(
            "{}/weather/{}",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(city)
        )
    }

    /// Fetch current weather and the short forecast for a city.
    pub async fn current(&self, city: &str) -> Result<WeatherReport, FetchError> {
        let url = self.url_for(city);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(FetchError::transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        response.json().await.map_err(FetchError::transport)
    }
}

impl Default for WeatherClient {
    fn default() -> Self {
        Self::new(DEFAULT_HOST)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_host_and_city() {
        let client = WeatherClient::new("http://example.test/");
        assert_eq!(client.url_for("Oslo"), "http://example.test/weather/Oslo");
    }

    #[test]
    fn url_percent_encodes_city() {
        let client = WeatherClient::new("http://example.test");
        assert_eq!(
            client.url_for("New Town"),
            "http://example.test/weather/New%20Town"
        );
    }

    #[test]
    fn status_error_message_carries_the_code() {
        assert_eq!(FetchError::Status(500).to_string(), "HTTP error! status: 500");
    }
}
