//! Integration tests for the HTTP backend against a mock API server.
//!
//! These tests verify authentication, payload placement for each method,
//! and how error responses map to `HttpError`.

use std::net::TcpListener;

use stripe_cards::clients::{
    Backend, HttpClient, HttpError, HttpMethod, HttpRequest, Payload, ResponseShape,
};
use stripe_cards::{
    ApiBase, ApiKey, CardDeleteParams, CardGetParams, CardListParams, CardParams, Cards,
    StripeConfig,
};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a config whose API base points at the mock server.
fn config_for(server: &MockServer, key: &str) -> StripeConfig {
    StripeConfig::builder()
        .api_key(ApiKey::new(key).unwrap())
        .api_base(ApiBase::new(format!("{}/v1", server.uri())).unwrap())
        .api_version("2014-08-04".parse().unwrap())
        .build()
        .unwrap()
}

fn pairs(payload: &Payload) -> Vec<(String, String)> {
    payload
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

// ============================================================================
// Transport
// ============================================================================

#[tokio::test]
async fn test_requests_carry_bearer_key_and_version() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/customers/cus_1/cards/card_A"))
        .and(header("authorization", "Bearer sk_test_1"))
        .and(header("stripe-version", "2014-08-04"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "card_A",
            "object": "card"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpClient::new(&config_for(&server, "sk_test_1"));
    let request = HttpRequest::builder(
        HttpMethod::Get,
        "/customers/cus_1/cards/card_A",
        ApiKey::new("sk_test_1").unwrap(),
    )
    .response_shape(ResponseShape::Card)
    .build()
    .unwrap();

    let response = client.call(request).await.unwrap();
    assert_eq!(response.code, 200);
    assert_eq!(response.body["id"], "card_A");
}

#[tokio::test]
async fn test_post_payload_is_form_encoded() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/customers/cus_1/cards"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"id": "card_A"})))
        .mount(&server)
        .await;

    let client = HttpClient::new(&config_for(&server, "sk_test_1"));
    let mut payload = Payload::new();
    payload.push("number", "4242424242424242");
    payload.push("exp_month", "12");
    payload.push("exp_year", "24");

    let request = HttpRequest::builder(
        HttpMethod::Post,
        "/customers/cus_1/cards",
        ApiKey::new("sk_test_1").unwrap(),
    )
    .payload(payload.clone())
    .response_shape(ResponseShape::Card)
    .build()
    .unwrap();
    client.call(request).await.unwrap();

    let received = server.received_requests().await.unwrap();
    assert_eq!(received.len(), 1);
    let body = String::from_utf8(received[0].body.clone()).unwrap();
    assert_eq!(pairs(&Payload::parse(&body)), pairs(&payload));
    assert!(received[0].url.query().is_none());
}

#[tokio::test]
async fn test_get_payload_is_sent_as_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/recipients/rp_1/cards"))
        .and(query_param("limit", "10"))
        .and(query_param("starting_after", "card_1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "object": "list",
            "data": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpClient::new(&config_for(&server, "sk_test_1"));
    let mut payload = Payload::new();
    payload.push("limit", "10");
    payload.push("starting_after", "card_1");

    let request = HttpRequest::builder(
        HttpMethod::Get,
        "/recipients/rp_1/cards",
        ApiKey::new("sk_test_1").unwrap(),
    )
    .payload(payload)
    .response_shape(ResponseShape::CardList)
    .build()
    .unwrap();

    let response = client.call(request).await.unwrap();
    assert_eq!(response.body["object"], "list");
}

#[tokio::test]
async fn test_error_response_maps_to_response_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/customers/cus_1/cards/card_X"))
        .respond_with(
            ResponseTemplate::new(404)
                .insert_header("request-id", "req_404")
                .set_body_json(serde_json::json!({
                    "error": {
                        "type": "invalid_request_error",
                        "message": "No such card: card_X"
                    }
                })),
        )
        .mount(&server)
        .await;

    let client = HttpClient::new(&config_for(&server, "sk_test_1"));
    let request = HttpRequest::builder(
        HttpMethod::Get,
        "/customers/cus_1/cards/card_X",
        ApiKey::new("sk_test_1").unwrap(),
    )
    .response_shape(ResponseShape::Card)
    .build()
    .unwrap();

    let error = client.call(request).await.unwrap_err();
    assert_eq!(error.status(), Some(404));
    assert_eq!(error.request_id(), Some("req_404"));
    match error {
        HttpError::Response(e) => {
            assert_eq!(e.message, "No such card: card_X");
            assert_eq!(e.error_type.as_deref(), Some("invalid_request_error"));
        }
        other => panic!("expected response error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_non_json_error_body_is_kept() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&server)
        .await;

    let client = HttpClient::new(&config_for(&server, "sk_test_1"));
    let request = HttpRequest::builder(
        HttpMethod::Get,
        "/customers/cus_1/cards",
        ApiKey::new("sk_test_1").unwrap(),
    )
    .build()
    .unwrap();

    let error = client.call(request).await.unwrap_err();
    assert_eq!(error.status(), Some(502));
    assert!(error.to_string().contains("Bad Gateway"));
}

#[tokio::test]
async fn test_unreachable_server_is_network_error() {
    // Reserve a free port, then release it so nothing is listening there.
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let config = StripeConfig::builder()
        .api_key(ApiKey::new("sk_test_1").unwrap())
        .api_base(ApiBase::new(format!("http://127.0.0.1:{port}/v1")).unwrap())
        .build()
        .unwrap();

    let client = HttpClient::new(&config);
    let request = HttpRequest::builder(
        HttpMethod::Get,
        "/customers/cus_1/cards",
        ApiKey::new("sk_test_1").unwrap(),
    )
    .build()
    .unwrap();

    let error = client.call(request).await.unwrap_err();
    assert!(matches!(error, HttpError::Network(_)));
    assert_eq!(error.status(), None);
}

// ============================================================================
// End to end through the facade
// ============================================================================

#[tokio::test]
async fn test_facade_round_trip_against_mock_server() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/customers/cus_1/cards"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "card_A",
            "object": "card",
            "last4": "4242",
            "exp_month": 12,
            "exp_year": 24,
            "customer": "cus_1"
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/recipients/rp_1/cards/card_A"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "card_A",
            "recipient": "rp_1"
        })))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/v1/customers/cus_1/cards/card_A"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/customers/cus_1/cards"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "object": "list",
            "has_more": false,
            "data": [{"id": "card_A"}]
        })))
        .mount(&server)
        .await;

    let config = config_for(&server, "sk_test_1");
    let cards = Cards::new(&config);

    let card = cards
        .create(&CardParams {
            customer: Some("cus_1".to_string()),
            number: Some("4242424242424242".to_string()),
            exp_month: Some(12),
            exp_year: Some(24),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(card.id, "card_A");
    assert_eq!(card.last4.as_deref(), Some("4242"));

    let card = cards
        .get(
            "card_A",
            &CardGetParams {
                recipient: Some("rp_1".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(card.recipient.as_deref(), Some("rp_1"));

    let page = cards
        .list(&CardListParams {
            customer: Some("cus_1".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(page.len(), 1);

    cards
        .delete(
            "card_A",
            &CardDeleteParams {
                customer: Some("cus_1".to_string()),
                recipient: None,
            },
        )
        .await
        .unwrap();

    let received = server.received_requests().await.unwrap();
    let create_body = String::from_utf8(received[0].body.clone()).unwrap();
    let create_payload = Payload::parse(&create_body);
    assert_eq!(create_payload.get("number"), Some("4242424242424242"));
    assert_eq!(create_payload.get("exp_month"), Some("12"));
    assert_eq!(create_payload.get("exp_year"), Some("24"));
    assert!(!create_payload.contains_key("customer"));
}

#[tokio::test]
async fn test_facade_sends_rotated_key() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(header("authorization", "Bearer sk_test_new"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"id": "card_A"})))
        .expect(1)
        .mount(&server)
        .await;

    let config = config_for(&server, "sk_test_old");
    let cards = Cards::new(&config);
    config.rotate_api_key(ApiKey::new("sk_test_new").unwrap());

    let card = cards
        .get(
            "card_A",
            &CardGetParams {
                customer: Some("cus_1".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(card.id, "card_A");
}
