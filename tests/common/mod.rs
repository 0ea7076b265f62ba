//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::{json, Value};
use stripe_api::clients::{HttpResponse, Transport, TransportError, TransportRequest};
use stripe_api::{Client, StripeConfig};

/// A transport that replays queued responses and records every request.
#[derive(Debug, Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<Result<HttpResponse, TransportError>>>,
    requests: Mutex<Vec<TransportRequest>>,
}

impl MockTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Queues a JSON response with the given status.
    pub fn respond(&self, status: u16, body: Value) {
        self.respond_raw(status, body.to_string());
    }

    pub fn respond_raw(&self, status: u16, body: impl Into<String>) {
        self.responses
            .lock()
            .push_back(Ok(HttpResponse::new(status, body)));
    }

    pub fn fail(&self, message: &str) {
        self.responses
            .lock()
            .push_back(Err(TransportError::new(message)));
    }

    pub fn requests(&self) -> Vec<TransportRequest> {
        self.requests.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().len()
    }

    pub fn last_request(&self) -> TransportRequest {
        self.requests
            .lock()
            .last()
            .cloned()
            .expect("no request was made")
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn execute(&self, request: TransportRequest) -> Result<HttpResponse, TransportError> {
        self.requests.lock().push(request);
        self.responses
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::new("no response queued")))
    }
}

/// Creates a client backed by a fresh mock transport.
pub fn create_test_client(api_key: Option<&str>) -> (Client, Arc<MockTransport>) {
    let transport = MockTransport::new();
    let mut builder = StripeConfig::builder();
    if let Some(key) = api_key {
        builder = builder.api_key(key);
    }
    let client = Client::with_transport(builder.build(), transport.clone());
    (client, transport)
}

/// Returns the `Authorization` header of a request.
pub fn authorization(request: &TransportRequest) -> Option<&str> {
    request.headers.get("Authorization").map(String::as_str)
}

/// Decodes a form or query string into sorted key/value pairs.
pub fn form_pairs(encoded: &str) -> Vec<(String, String)> {
    let mut pairs: Vec<(String, String)> = encoded
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (
                urlencoding::decode(key).unwrap().into_owned(),
                urlencoding::decode(value).unwrap().into_owned(),
            )
        })
        .collect();
    pairs.sort();
    pairs
}

pub fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
    let mut pairs: Vec<(String, String)> = items
        .iter()
        .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
        .collect();
    pairs.sort();
    pairs
}

// ============================================================================
// Fixtures
// ============================================================================

pub fn test_customer(id: &str) -> Value {
    json!({
        "id": id,
        "object": "customer",
        "created": 1_304_114_758,
        "description": "test customer",
        "email": "test@example.com",
        "livemode": false,
        "account_balance": 0,
        "active_card": null
    })
}

pub fn test_charge(id: &str) -> Value {
    json!({
        "id": id,
        "object": "charge",
        "amount": 100,
        "currency": "usd",
        "paid": true,
        "refunded": false,
        "livemode": false,
        "created": 1_304_114_826,
        "card": {
            "id": "card_test",
            "object": "card",
            "last4": "4242",
            "exp_month": 11,
            "exp_year": 2030,
            "type": "Visa"
        }
    })
}

pub fn test_charge_array() -> Value {
    json!({
        "object": "list",
        "url": "/v1/charges",
        "has_more": false,
        "data": [test_charge("ch_1"), test_charge("ch_2"), test_charge("ch_3")]
    })
}

pub fn test_invoice_customer_array(customer: &str) -> Value {
    json!({
        "object": "list",
        "url": "/v1/invoices",
        "data": [{
            "id": "in_test",
            "object": "invoice",
            "customer": customer,
            "total": 1000,
            "paid": false
        }]
    })
}

pub fn error_body(kind: &str, message: &str) -> Value {
    json!({"error": {"type": kind, "message": message}})
}
