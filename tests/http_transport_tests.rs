//! End-to-end tests through the default `reqwest` transport.
//!
//! A local `wiremock` server stands in for the API; the client is pointed at
//! it through the configured API base.

use serde_json::json;
use stripe_api::{
    ApiBase, ApiResource, Charge, Client, Creatable, Customer, Listable, Retrievable, Savable, StripeConfig,
    StripeError,
};
use wiremock::matchers::{body_string, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn setup(api_key: &str) -> (MockServer, Client) {
    let server = MockServer::start().await;
    let config = StripeConfig::builder()
        .api_key(api_key)
        .api_base(ApiBase::new(server.uri()).unwrap())
        .build();
    let client = Client::new(config).unwrap();
    (server, client)
}

// ============================================================================
// Successful exchanges
// ============================================================================

#[tokio::test]
async fn test_retrieve_sends_bearer_token_and_parses_object() {
    let (server, client) = setup("sk_test_123").await;

    Mock::given(method("GET"))
        .and(path("/v1/customers/cus_1"))
        .and(header("Authorization", "Bearer sk_test_123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "cus_1",
            "object": "customer",
            "email": "jenny@example.com"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut customer = Customer::retrieve(&client, "cus_1", None).await.unwrap();

    assert_eq!(customer.email().await.unwrap(), Some("jenny@example.com"));
}

#[tokio::test]
async fn test_create_posts_form_body() {
    let (server, client) = setup("sk_test_123").await;

    Mock::given(method("POST"))
        .and(path("/v1/charges"))
        .and(header("Content-Type", "application/x-www-form-urlencoded"))
        .and(body_string("amount=100&currency=usd&card=tok_visa"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "ch_1",
            "object": "charge",
            "amount": 100
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut charge = Charge::create(
        &client,
        json!({"amount": 100, "currency": "usd", "card": "tok_visa"}),
        None,
    )
    .await
    .unwrap();

    assert_eq!(charge.amount().await.unwrap(), Some(100));
}

#[tokio::test]
async fn test_list_sends_query_parameters() {
    let (server, client) = setup("sk_test_123").await;

    Mock::given(method("GET"))
        .and(path("/v1/charges"))
        .and(query_param("limit", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "object": "list",
            "has_more": true,
            "data": [
                {"id": "ch_1", "object": "charge"},
                {"id": "ch_2", "object": "charge"}
            ]
        })))
        .mount(&server)
        .await;

    let charges = Charge::all(&client, Some(json!({"limit": 2})), None)
        .await
        .unwrap();

    assert_eq!(charges.len(), 2);
    assert!(charges.has_more());
    assert_eq!(charges[1].id(), Some("ch_2"));
}

#[tokio::test]
async fn test_save_posts_only_dirty_fields() {
    let (server, client) = setup("sk_test_123").await;

    Mock::given(method("POST"))
        .and(path("/v1/customers/cus_1"))
        .and(body_string("description=vip"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "cus_1",
            "object": "customer",
            "description": "vip",
            "email": "jenny@example.com"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut customer = Customer::construct_from(
        &client,
        json!({"id": "cus_1", "object": "customer", "email": "jenny@example.com"}),
        None,
    )
    .unwrap();
    customer.set_description("vip").unwrap();
    customer.save().await.unwrap();

    assert!(customer.dirty_fields().is_empty());
}

// ============================================================================
// Failures
// ============================================================================

#[tokio::test]
async fn test_card_error_over_http() {
    let (server, client) = setup("sk_test_123").await;

    Mock::given(method("POST"))
        .and(path("/v1/charges"))
        .respond_with(ResponseTemplate::new(402).set_body_json(json!({
            "error": {
                "type": "card_error",
                "message": "Your card was declined.",
                "code": "card_declined"
            }
        })))
        .mount(&server)
        .await;

    let error = Charge::create(&client, json!({"amount": 100}), None)
        .await
        .unwrap_err();

    assert!(matches!(error, StripeError::Card(_)));
    assert_eq!(error.http_status(), Some(402));
    assert_eq!(error.code(), Some("card_declined"));
}

#[tokio::test]
async fn test_server_error_with_html_body() {
    let (server, client) = setup("sk_test_123").await;

    Mock::given(method("GET"))
        .and(path("/v1/customers/cus_1"))
        .respond_with(ResponseTemplate::new(503).set_body_string("<html>unavailable</html>"))
        .mount(&server)
        .await;

    let error = Customer::retrieve(&client, "cus_1", None).await.unwrap_err();

    assert!(matches!(error, StripeError::Api(_)));
    assert_eq!(error.http_status(), Some(503));
    assert_eq!(error.http_body(), Some("<html>unavailable</html>"));
    assert!(error.json_body().is_none());
}

#[tokio::test]
async fn test_connection_failure_is_transport_error() {
    let config = StripeConfig::builder()
        .api_key("sk_test_123")
        .api_base(ApiBase::new("http://127.0.0.1:1").unwrap())
        .build();
    let client = Client::new(config).unwrap();

    let error = Customer::retrieve(&client, "cus_1", None).await.unwrap_err();

    assert!(matches!(error, StripeError::Transport(_)));
}
