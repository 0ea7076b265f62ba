//! API version path segment.
//!
//! Every resource path is namespaced under a version segment such as
//! `/v1/customers`. This module provides [`ApiVersion`] for that segment.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// The API version segment prefixed to every resource path.
///
/// # Example
///
/// ```rust
/// use stripe_api::ApiVersion;
///
/// let version = ApiVersion::latest();
/// assert_eq!(version.to_string(), "v1");
///
/// let version: ApiVersion = "v2".parse().unwrap();
/// assert_eq!(version, ApiVersion::Custom("v2".to_string()));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum ApiVersion {
    /// The `v1` API.
    #[default]
    V1,
    /// Any other single path segment.
    Custom(String),
}

impl ApiVersion {
    /// Returns the version used when none is configured.
    #[must_use]
    pub const fn latest() -> Self {
        Self::V1
    }

    /// Returns the path segment for this version.
    #[must_use]
    pub fn as_segment(&self) -> &str {
        match self {
            Self::V1 => "v1",
            Self::Custom(segment) => segment,
        }
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_segment())
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let segment = s.trim().trim_matches('/');
        if segment.is_empty()
            || !segment
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.')
        {
            return Err(ConfigError::InvalidApiVersion {
                version: s.to_string(),
            });
        }
        if segment == "v1" {
            return Ok(Self::V1);
        }
        Ok(Self::Custom(segment.to_string()))
    }
}
