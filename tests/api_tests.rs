//! End-to-end fetch behavior against a mock weather service: request paths,
//! payload decoding, and how the reducer settles each outcome.

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use eurocast::action::Action;
use eurocast::api::{FetchError, WeatherClient};
use eurocast::catalog::CityCatalog;
use eurocast::reducer::reducer;
use eurocast::state::{AppState, Phase};

fn full_payload() -> serde_json::Value {
    serde_json::json!({
        "temperature": "+11 °C",
        "wind": "13 km/h",
        "description": "Partly cloudy",
        "forecast": [
            { "day": "1", "temperature": "+10 °C", "wind": "15 km/h" },
            { "day": "2", "temperature": "+9 °C", "wind": "18 km/h" },
            { "day": "3", "temperature": "+12 °C", "wind": "10 km/h" }
        ]
    })
}

/// Drive the reducer through a fetch for the given city against a live
/// client, the way the runtime does.
async fn fetch_into_state(state: &mut AppState, client: &WeatherClient) {
    reducer(state, Action::WeatherFetch);
    let city = match &state.phase {
        Phase::Loading { city } => city.clone(),
        other => panic!("Expected Loading after WeatherFetch, got {other:?}"),
    };

    let action = match client.current(city.as_str()).await {
        Ok(report) => Action::WeatherDidLoad(report),
        Err(e) => Action::WeatherDidError(e),
    };
    reducer(state, action);
}

#[tokio::test]
async fn requests_use_the_catalog_name_in_the_path() {
    let server = MockServer::start().await;
    let catalog = CityCatalog::european_capitals();

    for name in catalog.names() {
        Mock::given(method("GET"))
            .and(path(format!("/weather/{name}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(full_payload()))
            .expect(1)
            .mount(&server)
            .await;
    }

    let client = WeatherClient::new(server.uri());
    for name in catalog.names() {
        client
            .current(name)
            .await
            .unwrap_or_else(|e| panic!("Fetch for {name} failed: {e}"));
    }

    server.verify().await;
}

#[tokio::test]
async fn successful_fetch_lands_in_ready_with_the_payload() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/weather/London"))
        .respond_with(ResponseTemplate::new(200).set_body_json(full_payload()))
        .mount(&server)
        .await;

    let client = WeatherClient::new(server.uri());
    let mut state = AppState::default();
    fetch_into_state(&mut state, &client).await;

    let Phase::Ready { city, report } = &state.phase else {
        panic!("Expected Ready, got {:?}", state.phase);
    };
    assert_eq!(city.as_str(), "London");
    assert_eq!(report.temperature.as_deref(), Some("+11 °C"));
    assert_eq!(report.wind.as_deref(), Some("13 km/h"));
    assert_eq!(report.description.as_deref(), Some("Partly cloudy"));
    assert_eq!(report.forecast.len(), 3);
    assert_eq!(report.forecast[0].day.as_deref(), Some("1"));

    let banner = state.banner.as_ref().expect("success banner");
    assert_eq!(banner.message, "Weather data for London loaded successfully!");
}

#[tokio::test]
async fn empty_payload_lands_in_no_data() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/weather/London"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&server)
        .await;

    let client = WeatherClient::new(server.uri());
    let mut state = AppState::default();
    fetch_into_state(&mut state, &client).await;

    assert!(matches!(&state.phase, Phase::NoData { city } if city.as_str() == "London"));
    assert!(state.banner.is_none());
}

#[tokio::test]
async fn http_error_surfaces_the_status_code() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/weather/London"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = WeatherClient::new(server.uri());
    let mut state = AppState::default();
    fetch_into_state(&mut state, &client).await;

    let Phase::Failed { city, message } = &state.phase else {
        panic!("Expected Failed, got {:?}", state.phase);
    };
    assert_eq!(city.as_str(), "London");
    assert!(message.contains("Failed to retrieve weather for London."));
    assert!(message.contains("HTTP error! status: 500"));
    assert!(!message.contains("network or CORS"));
}

#[tokio::test]
async fn connection_failure_mentions_network_issues() {
    // Nothing listens here, so the request fails before any HTTP status.
    let client = WeatherClient::new("http://127.0.0.1:1");
    let mut state = AppState::default();
    fetch_into_state(&mut state, &client).await;

    let Phase::Failed { message, .. } = &state.phase else {
        panic!("Expected Failed, got {:?}", state.phase);
    };
    assert!(message.contains("Failed to retrieve weather for London."));
    assert!(message.contains("This might be due to network or CORS issues."));
}

#[tokio::test]
async fn transport_error_is_typed_not_sniffed() {
    let client = WeatherClient::new("http://127.0.0.1:1");
    let err = client.current("London").await.unwrap_err();
    assert!(matches!(err, FetchError::Transport(_)));

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/weather/London"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    let client = WeatherClient::new(server.uri());
    let err = client.current("London").await.unwrap_err();
    assert_eq!(err, FetchError::Status(404));
    assert_eq!(err.to_string(), "HTTP error! status: 404");
}

#[tokio::test]
async fn malformed_body_is_a_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/weather/London"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = WeatherClient::new(server.uri());
    let err = client.current("London").await.unwrap_err();
    assert!(matches!(err, FetchError::Transport(_)));
}
