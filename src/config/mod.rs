//! Configuration types for the Stripe API SDK.
//!
//! This module provides the configuration used to build a
//! [`Client`](crate::Client).
//!
//! # Overview
//!
//! - [`StripeConfig`]: The configuration struct holding all SDK settings
//! - [`StripeConfigBuilder`]: A builder for constructing [`StripeConfig`] instances
//! - [`ApiKey`]: A validated API key newtype with masked debug output
//! - [`ApiBase`]: A validated API base URL
//! - [`ApiVersion`]: The version path segment (`v1`)
//!
//! # Example
//!
//! ```rust
//! use stripe_api::{StripeConfig, ApiBase, ApiVersion};
//!
//! let config = StripeConfig::builder()
//!     .api_key("sk_test_123")
//!     .api_base(ApiBase::new("https://api.stripe.com").unwrap())
//!     .api_version(ApiVersion::latest())
//!     .build();
//!
//! assert_eq!(config.api_key(), Some("sk_test_123"));
//! ```

mod newtypes;
mod version;

use std::fmt;
use std::time::Duration;

pub use newtypes::{ApiBase, ApiKey};
pub use version::ApiVersion;

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(80);

/// Configuration for the Stripe API SDK.
///
/// The API key is stored as the raw string it was configured with. It is
/// validated when a request is prepared, so a malformed key surfaces as an
/// [`AuthenticationError`](crate::StripeError::Authentication) before any
/// network call rather than at configuration time.
///
/// # Example
///
/// ```rust
/// use stripe_api::StripeConfig;
///
/// let config = StripeConfig::builder().build();
/// assert!(config.api_key().is_none());
/// assert_eq!(config.api_base().as_ref(), "https://api.stripe.com");
/// ```
#[derive(Clone, Default)]
pub struct StripeConfig {
    api_key: Option<String>,
    api_base: ApiBase,
    api_version: ApiVersion,
    timeout: Option<Duration>,
    user_agent_prefix: Option<String>,
}

impl StripeConfig {
    /// Creates a new builder for constructing a `StripeConfig`.
    #[must_use]
    pub fn builder() -> StripeConfigBuilder {
        StripeConfigBuilder::new()
    }

    /// Returns the default API key, if configured.
    #[must_use]
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    /// Returns the API base URL.
    #[must_use]
    pub const fn api_base(&self) -> &ApiBase {
        &self.api_base
    }

    /// Returns the API version segment.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the request timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout.unwrap_or(DEFAULT_TIMEOUT)
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

impl fmt::Debug for StripeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StripeConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "*****"))
            .field("api_base", &self.api_base)
            .field("api_version", &self.api_version)
            .field("timeout", &self.timeout())
            .field("user_agent_prefix", &self.user_agent_prefix)
            .finish()
    }
}

// Verify StripeConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StripeConfig>();
};

/// Builder for constructing [`StripeConfig`] instances.
///
/// # Defaults
///
/// - `api_key`: `None` (must be supplied per call or set on the client later)
/// - `api_base`: `https://api.stripe.com`
/// - `api_version`: `v1`
/// - `timeout`: 80 seconds
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct StripeConfigBuilder {
    api_key: Option<String>,
    api_base: Option<ApiBase>,
    api_version: Option<ApiVersion>,
    timeout: Option<Duration>,
    user_agent_prefix: Option<String>,
}

impl StripeConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the default API key.
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Sets the API base URL.
    #[must_use]
    pub fn api_base(mut self, base: ApiBase) -> Self {
        self.api_base = Some(base);
        self
    }

    /// Sets the API version segment.
    #[must_use]
    pub fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Sets the request timeout used by the default transport.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`StripeConfig`].
    #[must_use]
    pub fn build(self) -> StripeConfig {
        StripeConfig {
            api_key: self.api_key,
            api_base: self.api_base.unwrap_or_default(),
            api_version: self.api_version.unwrap_or_else(ApiVersion::latest),
            timeout: self.timeout,
            user_agent_prefix: self.user_agent_prefix,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = StripeConfig::builder().build();

        assert!(config.api_key().is_none());
        assert_eq!(config.api_base().as_ref(), ApiBase::DEFAULT);
        assert_eq!(config.api_version(), &ApiVersion::V1);
        assert_eq!(config.timeout(), DEFAULT_TIMEOUT);
        assert!(config.user_agent_prefix().is_none());
    }

    #[test]
    fn test_builder_with_all_optional_fields() {
        let base = ApiBase::new("http://localhost:12111").unwrap();
        let config = StripeConfig::builder()
            .api_key("sk_test_123")
            .api_base(base.clone())
            .api_version(ApiVersion::Custom("v2".to_string()))
            .timeout(Duration::from_secs(5))
            .user_agent_prefix("MyApp/1.0")
            .build();

        assert_eq!(config.api_key(), Some("sk_test_123"));
        assert_eq!(config.api_base(), &base);
        assert_eq!(config.api_version().as_segment(), "v2");
        assert_eq!(config.timeout(), Duration::from_secs(5));
        assert_eq!(config.user_agent_prefix(), Some("MyApp/1.0"));
    }

    #[test]
    fn test_builder_keeps_malformed_key_for_request_time_validation() {
        let config = StripeConfig::builder().api_key("key ").build();
        assert_eq!(config.api_key(), Some("key "));
    }

    #[test]
    fn test_config_is_clone_and_debug() {
        let config = StripeConfig::builder().api_key("sk_test_123").build();
        let cloned = config.clone();
        assert_eq!(cloned.api_key(), config.api_key());
        let debug_str = format!("{config:?}");
        assert!(debug_str.contains("StripeConfig"));
        assert!(!debug_str.contains("sk_test_123"));
    }
}
