//! Error types for the Stripe API SDK configuration.
//!
//! This module contains the error type raised while building configuration
//! values such as API keys, the API base URL and the API version segment.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Credential problems discovered while a request is
//! being prepared are surfaced as
//! [`StripeError::Authentication`](crate::StripeError::Authentication)
//! instead, so callers can branch on a single error kind.
//!
//! # Example
//!
//! ```rust
//! use stripe_api::{ApiKey, ConfigError};
//!
//! let result = ApiKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyApiKey)));
//! ```

use thiserror::Error;

/// Errors that can occur during SDK configuration.
///
/// Each variant provides a clear, actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// No API key was provided.
    #[error(
        "No API key provided. (HINT: set your API key using `client.set_api_key(<API-KEY>)` \
         or pass one to the call. You can generate API keys from the Stripe web interface.)"
    )]
    EmptyApiKey,

    /// The API key contains whitespace.
    #[error(
        "Your API key is invalid, as it contains whitespace. (HINT: You can double-check \
         your API key from the Stripe web interface.)"
    )]
    ApiKeyContainsWhitespace,

    /// The API base URL is invalid.
    #[error("Invalid API base '{url}'. Please provide a URL with scheme (e.g., 'https://api.stripe.com').")]
    InvalidApiBase {
        /// The invalid URL that was provided.
        url: String,
    },

    /// The API version path segment is invalid.
    #[error("Invalid API version '{version}'. Expected a single path segment such as 'v1'.")]
    InvalidApiVersion {
        /// The invalid version string that was provided.
        version: String,
    },
}
