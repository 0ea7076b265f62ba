//! Default transport backed by `reqwest`.
//!
//! This module provides [`ReqwestTransport`], the [`Transport`] used by
//! [`Client::new`](crate::Client::new).

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;

use crate::clients::errors::TransportError;
use crate::clients::http_request::{HttpMethod, TransportRequest};
use crate::clients::http_response::HttpResponse;
use crate::clients::transport::Transport;

/// HTTP transport using a pooled `reqwest` client with rustls.
///
/// # Thread Safety
///
/// `ReqwestTransport` is `Send + Sync` and cheap to share behind an `Arc`.
///
/// # Example
///
/// ```rust,ignore
/// use std::time::Duration;
/// use stripe_api::clients::{HttpMethod, ReqwestTransport, Transport, TransportRequest};
///
/// let transport = ReqwestTransport::new(Duration::from_secs(30))?;
/// let request = TransportRequest::new(HttpMethod::Get, "https://api.stripe.com/v1/charges")
///     .header("Authorization", "Bearer sk_test_123");
/// let response = transport.execute(request).await?;
/// println!("{} {}", response.code, response.body);
/// ```
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

// Verify ReqwestTransport is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ReqwestTransport>();
};

impl ReqwestTransport {
    /// Creates a transport whose requests time out after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if the underlying client cannot be built
    /// (e.g. TLS initialization failure).
    pub fn new(timeout: Duration) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }

    /// Wraps an existing `reqwest` client.
    #[must_use]
    pub const fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: TransportRequest) -> Result<HttpResponse, TransportError> {
        let mut req_builder = match request.method {
            HttpMethod::Get => self.client.get(&request.url),
            HttpMethod::Post => self.client.post(&request.url),
            HttpMethod::Delete => self.client.delete(&request.url),
        };

        for (key, value) in &request.headers {
            req_builder = req_builder.header(key, value);
        }

        if let Some(payload) = request.payload {
            req_builder = req_builder.body(payload);
        }

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let headers = Self::parse_response_headers(res.headers());
        let body = res.text().await?;

        Ok(HttpResponse {
            code,
            headers,
            body,
        })
    }
}
