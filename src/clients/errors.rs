//! Error taxonomy for Stripe API calls.
//!
//! Every failure produced by the SDK is a [`StripeError`]. HTTP status codes
//! are mapped to variants so callers can branch on the kind of failure:
//!
//! - **400, 404**: [`StripeError::InvalidRequest`]
//! - **401**: [`StripeError::Authentication`]
//! - **402**: [`StripeError::Card`]
//! - **Other non-2xx, malformed bodies**: [`StripeError::Api`]
//! - **Connection failures**: [`StripeError::Transport`]
//!
//! Local validation failures (missing identifier, missing or malformed API
//! key) use the same variants but carry no HTTP status, and are raised
//! before the transport is invoked.
//!
//! # Example
//!
//! ```rust,ignore
//! use stripe_api::{Charge, Creatable, StripeError};
//!
//! match Charge::create(&client, params, None).await {
//!     Ok(charge) => println!("Charged: {:?}", charge.id()),
//!     Err(StripeError::Card(details)) => {
//!         println!("Card declined ({:?}): {}", details.code, details.message);
//!     }
//!     Err(StripeError::Authentication(details)) => prompt_for_key(details.message),
//!     Err(e) => println!("Other error: {e}"),
//! }
//! ```

use std::fmt;

use serde_json::Value;
use thiserror::Error;

use crate::error::ConfigError;

/// Diagnostic data carried by every API-level error.
///
/// For errors raised from an HTTP response, `http_status` and `http_body`
/// are always present; `json_body` is `None` when the body could not be
/// parsed as JSON. For local validation errors all three are `None`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ErrorDetails {
    /// Human readable message.
    pub message: String,
    /// The parameter the error relates to, when the API reports one.
    pub param: Option<String>,
    /// Machine readable error code (card errors).
    pub code: Option<String>,
    /// HTTP status code of the response.
    pub http_status: Option<u16>,
    /// Raw response body.
    pub http_body: Option<String>,
    /// Parsed response body.
    pub json_body: Option<Value>,
}

impl ErrorDetails {
    /// Creates details for an error detected locally, before any request.
    #[must_use]
    pub fn local(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }
}

impl fmt::Display for ErrorDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.http_status {
            Some(status) => write!(f, "(Status {status}) {}", self.message),
            None => f.write_str(&self.message),
        }
    }
}

/// Error returned when the transport could not complete an HTTP exchange.
///
/// These failures are fatal to the current call and are never retried.
#[derive(Debug, Error)]
#[error("Could not connect to Stripe: {message}")]
pub struct TransportError {
    /// Description of the failure.
    pub message: String,
    /// The underlying error, if any.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl TransportError {
    /// Creates a transport error from a message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(error: reqwest::Error) -> Self {
        let message = if error.is_timeout() {
            "request timed out".to_string()
        } else if error.is_connect() {
            "connection failed".to_string()
        } else {
            error.to_string()
        };
        Self {
            message,
            source: Some(Box::new(error)),
        }
    }
}

/// Unified error type for Stripe API operations.
#[derive(Debug, Error)]
pub enum StripeError {
    /// Invalid or missing credentials (HTTP 401 or local key validation).
    #[error("{0}")]
    Authentication(ErrorDetails),

    /// The card could not be charged (HTTP 402).
    #[error("{0}")]
    Card(ErrorDetails),

    /// The request was invalid (HTTP 400/404 or local validation).
    #[error("{0}")]
    InvalidRequest(ErrorDetails),

    /// Any other API failure, including unparseable responses.
    #[error("{0}")]
    Api(ErrorDetails),

    /// The HTTP exchange itself failed.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The field is not present on the object.
    #[error("undefined field '{field}' for {object}")]
    UnknownField {
        /// The requested field name.
        field: String,
        /// The object's kind tag, or `object` when untagged.
        object: String,
    },

    /// An object could not be viewed as the requested resource kind.
    #[error("expected a {expected} object but found {found}")]
    UnexpectedObject {
        /// The kind tag of the requested resource.
        expected: &'static str,
        /// The kind tag that was found.
        found: String,
    },
}

impl StripeError {
    /// Builds the error for a non-2xx response.
    ///
    /// The body is inspected for an `error` object. When it is missing or the
    /// body is not JSON, an [`StripeError::Api`] is returned that still
    /// carries the status and the raw body.
    #[must_use]
    pub fn from_response(status: u16, body: &str) -> Self {
        let json: Option<Value> = serde_json::from_str(body).ok();
        let error = json
            .as_ref()
            .and_then(|value| value.get("error"))
            .filter(|error| error.is_object());

        let Some(error) = error else {
            return Self::Api(ErrorDetails {
                message: invalid_response_message(status, body),
                http_status: Some(status),
                http_body: Some(body.to_string()),
                json_body: json,
                ..ErrorDetails::default()
            });
        };

        let text = |key: &str| error.get(key).and_then(Value::as_str).map(str::to_string);
        let details = ErrorDetails {
            message: text("message").unwrap_or_default(),
            param: text("param"),
            code: text("code"),
            http_status: Some(status),
            http_body: Some(body.to_string()),
            json_body: json.clone(),
        };

        match status {
            400 | 404 => Self::InvalidRequest(details),
            401 => Self::Authentication(details),
            402 => Self::Card(details),
            _ => Self::Api(details),
        }
    }

    /// Builds the error for a 2xx response whose body is not a JSON value.
    #[must_use]
    pub fn invalid_response(status: u16, body: &str) -> Self {
        Self::Api(ErrorDetails {
            message: invalid_response_message(status, body),
            http_status: Some(status),
            http_body: Some(body.to_string()),
            ..ErrorDetails::default()
        })
    }

    /// Builds a locally detected invalid request error.
    #[must_use]
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest(ErrorDetails::local(message))
    }

    /// Returns the diagnostic details for API-level variants.
    #[must_use]
    pub const fn details(&self) -> Option<&ErrorDetails> {
        match self {
            Self::Authentication(d) | Self::Card(d) | Self::InvalidRequest(d) | Self::Api(d) => {
                Some(d)
            }
            _ => None,
        }
    }

    /// Returns the HTTP status, if the error came from a response.
    #[must_use]
    pub fn http_status(&self) -> Option<u16> {
        self.details().and_then(|d| d.http_status)
    }

    /// Returns the raw response body, if the error came from a response.
    #[must_use]
    pub fn http_body(&self) -> Option<&str> {
        self.details().and_then(|d| d.http_body.as_deref())
    }

    /// Returns the parsed response body, if it was valid JSON.
    #[must_use]
    pub fn json_body(&self) -> Option<&Value> {
        self.details().and_then(|d| d.json_body.as_ref())
    }

    /// Returns the parameter the error relates to.
    #[must_use]
    pub fn param(&self) -> Option<&str> {
        self.details().and_then(|d| d.param.as_deref())
    }

    /// Returns the machine readable error code.
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        self.details().and_then(|d| d.code.as_deref())
    }
}

/// Credential problems become [`StripeError::Authentication`]; other
/// configuration problems are invalid requests.
impl From<ConfigError> for StripeError {
    fn from(error: ConfigError) -> Self {
        let details = ErrorDetails::local(error.to_string());
        match error {
            ConfigError::EmptyApiKey | ConfigError::ApiKeyContainsWhitespace => {
                Self::Authentication(details)
            }
            ConfigError::InvalidApiBase { .. } | ConfigError::InvalidApiVersion { .. } => {
                Self::InvalidRequest(details)
            }
        }
    }
}

fn invalid_response_message(status: u16, body: &str) -> String {
    format!("Invalid response object from API: {body:?} (HTTP response code was {status})")
}

// Verify StripeError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StripeError>();
};
