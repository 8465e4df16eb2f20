use std::time::Duration;

use pinlist::core::config::FALLBACK_QUOTE;
use pinlist::quote::{HttpQuoteProvider, QuoteError, QuoteProvider, fetch_or_fallback};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

// ============================================================================
// Helper Functions
// ============================================================================

const QUOTE_PATH: &str = "/api/yiyan/index.php";

fn provider_for(server: &MockServer, timeout: Duration) -> HttpQuoteProvider {
    HttpQuoteProvider::new(format!("{}{}", server.uri(), QUOTE_PATH), timeout)
}

async fn mount(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(QUOTE_PATH))
        .respond_with(response)
        .mount(server)
        .await;
}

// ============================================================================
// HttpQuoteProvider Tests
// ============================================================================

#[tokio::test]
async fn test_successful_fetch_returns_data_field() {
    let mock_server = MockServer::start().await;
    mount(
        &mock_server,
        ResponseTemplate::new(200)
            .set_body_string(r#"{"code":200,"data":"  Stay curious.  ","author":"x"}"#),
    )
    .await;

    let provider = provider_for(&mock_server, Duration::from_secs(3));
    let quote = provider.fetch().await.unwrap();

    assert_eq!(quote, "Stay curious.");
}

#[tokio::test]
async fn test_server_error_is_reported_with_status() {
    let mock_server = MockServer::start().await;
    mount(&mock_server, ResponseTemplate::new(500)).await;

    let provider = provider_for(&mock_server, Duration::from_secs(3));
    let result = provider.fetch().await;

    assert!(matches!(result, Err(QuoteError::Api { status: 500 })));
}

#[tokio::test]
async fn test_invalid_json_is_parse_error() {
    let mock_server = MockServer::start().await;
    mount(
        &mock_server,
        ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"),
    )
    .await;

    let provider = provider_for(&mock_server, Duration::from_secs(3));

    assert!(matches!(provider.fetch().await, Err(QuoteError::Parse(_))));
}

#[tokio::test]
async fn test_missing_data_field_is_parse_error() {
    let mock_server = MockServer::start().await;
    mount(
        &mock_server,
        ResponseTemplate::new(200).set_body_string(r#"{"code":200,"msg":"ok"}"#),
    )
    .await;

    let provider = provider_for(&mock_server, Duration::from_secs(3));

    assert!(matches!(provider.fetch().await, Err(QuoteError::Parse(_))));
}

#[tokio::test]
async fn test_blank_data_is_empty_error() {
    let mock_server = MockServer::start().await;
    mount(
        &mock_server,
        ResponseTemplate::new(200).set_body_string(r#"{"data":"   "}"#),
    )
    .await;

    let provider = provider_for(&mock_server, Duration::from_secs(3));

    assert!(matches!(provider.fetch().await, Err(QuoteError::Empty)));
}

#[tokio::test]
async fn test_unreachable_host_is_network_error() {
    let provider = HttpQuoteProvider::new("http://127.0.0.1:1/quote", Duration::from_secs(1));

    assert!(matches!(provider.fetch().await, Err(QuoteError::Network(_))));
}

// ============================================================================
// Fallback Tests
// ============================================================================

#[tokio::test]
async fn test_slow_service_falls_back_after_timeout() {
    let mock_server = MockServer::start().await;
    mount(
        &mock_server,
        ResponseTemplate::new(200)
            .set_body_string(r#"{"data":"too late"}"#)
            .set_delay(Duration::from_secs(2)),
    )
    .await;

    let provider = provider_for(&mock_server, Duration::from_millis(200));
    let quote = fetch_or_fallback(&provider, FALLBACK_QUOTE).await;

    assert_eq!(quote, FALLBACK_QUOTE);
}

#[tokio::test]
async fn test_error_response_falls_back() {
    let mock_server = MockServer::start().await;
    mount(&mock_server, ResponseTemplate::new(503)).await;

    let provider = provider_for(&mock_server, Duration::from_secs(3));
    let quote = fetch_or_fallback(&provider, "fallback").await;

    assert_eq!(quote, "fallback");
}

#[tokio::test]
async fn test_good_response_is_not_replaced() {
    let mock_server = MockServer::start().await;
    mount(
        &mock_server,
        ResponseTemplate::new(200).set_body_string(r#"{"data":"Carpe diem"}"#),
    )
    .await;

    let provider = provider_for(&mock_server, Duration::from_secs(3));
    let quote = fetch_or_fallback(&provider, FALLBACK_QUOTE).await;

    assert_eq!(quote, "Carpe diem");
}
