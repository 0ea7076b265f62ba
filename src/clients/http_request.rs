//! HTTP request types for the Stripe API SDK.
//!
//! This module provides [`HttpMethod`] and [`TransportRequest`], the fully
//! resolved request handed to a [`Transport`](crate::clients::Transport).

use std::collections::HashMap;
use std::fmt;

/// HTTP methods used by the Stripe API.
///
/// Updates are sent as `POST` to the instance URL, so there is no `PUT`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving and listing resources.
    Get,
    /// HTTP POST method for creating and updating resources, and actions.
    Post,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl HttpMethod {
    /// Returns `true` if requests with this method carry a form payload.
    #[must_use]
    pub const fn has_payload(&self) -> bool {
        matches!(self, Self::Post)
    }

    /// Returns the uppercase method name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Post => write!(f, "post"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

/// Content type of form payloads.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// A fully resolved request ready for the transport.
///
/// The URL already contains the query string for GET and DELETE requests.
/// `payload` is `Some` only for methods that carry a body.
///
/// # Example
///
/// ```rust
/// use stripe_api::clients::{HttpMethod, TransportRequest};
///
/// let request = TransportRequest::new(HttpMethod::Get, "https://api.stripe.com/v1/charges?limit=1")
///     .header("Authorization", "Bearer sk_test_123");
///
/// assert_eq!(request.query(), Some("limit=1"));
/// assert_eq!(request.headers.get("Authorization").map(String::as_str), Some("Bearer sk_test_123"));
/// assert!(request.payload.is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransportRequest {
    /// The HTTP method for this request.
    pub method: HttpMethod,
    /// The absolute URL, including any query string.
    pub url: String,
    /// Headers to send.
    pub headers: HashMap<String, String>,
    /// The encoded form body, if any.
    pub payload: Option<String>,
}

impl TransportRequest {
    /// Creates a request with no headers and no payload.
    #[must_use]
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: HashMap::new(),
            payload: None,
        }
    }

    /// Adds a header.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Sets the encoded payload.
    #[must_use]
    pub fn payload(mut self, payload: impl Into<String>) -> Self {
        self.payload = Some(payload.into());
        self
    }

    /// Returns the URL without its query string.
    #[must_use]
    pub fn path(&self) -> &str {
        self.url.split_once('?').map_or(&self.url, |(path, _)| path)
    }

    /// Returns the query string, if the URL has one.
    #[must_use]
    pub fn query(&self) -> Option<&str> {
        self.url.split_once('?').map(|(_, query)| query)
    }
}
