//! HTTP response types for the Stripe API SDK.
//!
//! This module provides the [`HttpResponse`] type returned by a
//! [`Transport`](crate::clients::Transport).

use std::collections::HashMap;

/// A raw HTTP response.
///
/// The body is kept as the raw text returned by the server so that error
/// values can carry it even when it is not valid JSON.
///
/// # Example
///
/// ```rust
/// use stripe_api::clients::HttpResponse;
///
/// let response = HttpResponse::new(200, r#"{"id":"cus_1","object":"customer"}"#)
///     .with_header("Request-Id", "req_123");
///
/// assert!(response.is_ok());
/// assert_eq!(response.request_id(), Some("req_123"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, keyed by lowercase name (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body.
    pub body: String,
}

impl HttpResponse {
    /// Creates a response with no headers.
    #[must_use]
    pub fn new(code: u16, body: impl Into<String>) -> Self {
        Self {
            code,
            headers: HashMap::new(),
            body: body.into(),
        }
    }

    /// Adds a header value. The name is stored lowercase.
    #[must_use]
    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers
            .entry(name.to_lowercase())
            .or_default()
            .push(value.into());
        self
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the first value of a header, looked up case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the `Request-Id` header value, if present.
    ///
    /// This ID is useful for debugging and should be included in error reports.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.header("request-id")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_ok_returns_true_for_2xx() {
        for code in 200..=299 {
            let response = HttpResponse::new(code, "{}");
            assert!(
                response.is_ok(),
                "Expected is_ok() to be true for code {code}"
            );
        }
    }

    #[test]
    fn test_is_ok_returns_false_for_4xx_and_5xx() {
        for code in [400, 401, 402, 404, 429, 500, 503] {
            assert!(!HttpResponse::new(code, "{}").is_ok());
        }
    }

    #[test]
    fn test_headers_are_case_insensitive() {
        let response = HttpResponse::new(200, "{}")
            .with_header("Request-Id", "req_abc")
            .with_header("Content-Type", "application/json");

        assert_eq!(response.request_id(), Some("req_abc"));
        assert_eq!(response.header("content-type"), Some("application/json"));
        assert_eq!(response.header("CONTENT-TYPE"), Some("application/json"));
        assert!(response.header("x-missing").is_none());
    }
}
