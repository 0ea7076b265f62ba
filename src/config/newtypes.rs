//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use std::fmt;

/// A validated Stripe API key.
///
/// The key must be non-empty and must not contain whitespace. Keys are sent
/// as bearer tokens, so the `Debug` implementation masks everything but the
/// key prefix (`sk_test_`, `sk_live_`, ...) to keep secrets out of logs.
///
/// # Example
///
/// ```rust
/// use stripe_api::ApiKey;
///
/// let key = ApiKey::new("sk_test_123").unwrap();
/// assert_eq!(key.as_ref(), "sk_test_123");
/// assert_eq!(key.bearer(), "Bearer sk_test_123");
/// assert!(ApiKey::new("sk_test_123 ").is_err());
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Creates a new validated API key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiKey`] if the key is empty and
    /// [`ConfigError::ApiKeyContainsWhitespace`] if it contains any whitespace.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }
        if key.chars().any(char::is_whitespace) {
            return Err(ConfigError::ApiKeyContainsWhitespace);
        }
        Ok(Self(key))
    }

    /// Returns the value of the `Authorization` header for this key.
    #[must_use]
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }

    fn visible_prefix(&self) -> &str {
        // "sk_test_abc" -> "sk_test_"
        self.0
            .rfind('_')
            .map_or("", |end| &self.0[..=end])
    }
}

impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ApiKey({}*****)", self.visible_prefix())
    }
}

/// A validated API base URL (scheme and host, optional port).
///
/// Trailing slashes are stripped so paths can be appended directly.
///
/// # Example
///
/// ```rust
/// use stripe_api::ApiBase;
///
/// let base = ApiBase::new("https://api.stripe.com/").unwrap();
/// assert_eq!(base.as_ref(), "https://api.stripe.com");
/// assert_eq!(base.scheme(), "https");
/// assert_eq!(base.host_name(), "api.stripe.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiBase {
    url: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
}

impl ApiBase {
    /// The production Stripe API host.
    pub const DEFAULT: &'static str = "https://api.stripe.com";

    /// Creates a new validated API base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidApiBase`] if the URL has no `http` or
    /// `https` scheme, has no host, or carries a query or fragment.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();
        let invalid = || ConfigError::InvalidApiBase { url: url.clone() };

        let scheme_end = url.find("://").ok_or_else(invalid)?;
        let scheme = &url[..scheme_end];
        if !matches!(scheme, "http" | "https") {
            return Err(invalid());
        }

        let host_start = scheme_end + 3;
        let remainder = &url[host_start..];
        if remainder.contains(['?', '#']) {
            return Err(invalid());
        }

        // Host ends at port, path, or end of string
        let host_end = remainder
            .find([':', '/'])
            .map_or(url.len(), |i| host_start + i);
        if host_end == host_start {
            return Err(invalid());
        }

        Ok(Self {
            url,
            scheme_end,
            host_start,
            host_end,
        })
    }

    /// Returns the URL scheme (`http` or `https`).
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.url[self.host_start..self.host_end]
    }
}

impl Default for ApiBase {
    fn default() -> Self {
        Self {
            url: Self::DEFAULT.to_string(),
            scheme_end: 5,
            host_start: 8,
            host_end: Self::DEFAULT.len(),
        }
    }
}

impl AsRef<str> for ApiBase {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for ApiBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_key_rejects_empty_string() {
        assert!(matches!(ApiKey::new(""), Err(ConfigError::EmptyApiKey)));
    }

    #[test]
    fn test_api_key_rejects_whitespace() {
        assert!(matches!(
            ApiKey::new("key "),
            Err(ConfigError::ApiKeyContainsWhitespace)
        ));
        assert!(matches!(
            ApiKey::new("sk\ttest"),
            Err(ConfigError::ApiKeyContainsWhitespace)
        ));
    }

    #[test]
    fn test_api_key_masks_value_in_debug() {
        let key = ApiKey::new("sk_test_supersecret").unwrap();
        let debug_output = format!("{key:?}");
        assert_eq!(debug_output, "ApiKey(sk_test_*****)");
        assert!(!debug_output.contains("supersecret"));

        let key = ApiKey::new("local").unwrap();
        assert_eq!(format!("{key:?}"), "ApiKey(*****)");
    }

    #[test]
    fn test_api_base_default_matches_constant() {
        let default = ApiBase::default();
        let parsed = ApiBase::new(ApiBase::DEFAULT).unwrap();
        assert_eq!(default, parsed);
        assert_eq!(default.host_name(), "api.stripe.com");
    }

    #[test]
    fn test_api_base_accepts_local_server() {
        let base = ApiBase::new("http://127.0.0.1:8080/").unwrap();
        assert_eq!(base.as_ref(), "http://127.0.0.1:8080");
        assert_eq!(base.scheme(), "http");
        assert_eq!(base.host_name(), "127.0.0.1");
    }

    #[test]
    fn test_api_base_rejects_invalid() {
        assert!(ApiBase::new("api.stripe.com").is_err());
        assert!(ApiBase::new("https://").is_err());
        assert!(ApiBase::new("ftp://api.stripe.com").is_err());
        assert!(ApiBase::new("https://api.stripe.com?x=1").is_err());
    }
}
