//! URL paths for REST resources.
//!
//! Resource kinds live either under a collection (`customers`, with
//! instances at `customers/{id}`) or at a single fixed path (`account`).
//! [`Endpoint`] captures which, and builds instance and action paths.
//!
//! # Identifier Escaping
//!
//! Identifiers are opaque strings. Before they are placed in a path they
//! are percent-encoded as UTF-8, leaving only the RFC 3986 unreserved
//! characters (`A-Z a-z 0-9 - _ . ~`) as-is. Numeric identifiers therefore
//! appear unchanged, while `/`, `?`, spaces and non-ASCII characters can
//! never alter the path structure.
//!
//! # Example
//!
//! ```rust
//! use stripe_api::rest::{escape_id, Endpoint};
//!
//! let endpoint = Endpoint::Collection("customers");
//! assert_eq!(endpoint.instance_path(Some("cus_123")).unwrap(), "customers/cus_123");
//! assert_eq!(endpoint.instance_path(Some("a/b")).unwrap(), "customers/a%2Fb");
//! assert_eq!(escape_id("☃"), "%E2%98%83");
//! assert!(endpoint.instance_path(None).is_err());
//!
//! let account = Endpoint::Singleton("account");
//! assert_eq!(account.instance_path(None).unwrap(), "account");
//! ```

use crate::clients::{HttpMethod, StripeError};

/// Operations that can be performed on a REST resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceOperation {
    /// Fetch a single resource (GET /resources/{id}).
    Retrieve,
    /// List resources (GET /resources).
    List,
    /// Create a resource (POST /resources).
    Create,
    /// Update an existing resource (POST /resources/{id}).
    Update,
    /// Delete a resource (DELETE /resources/{id}).
    Delete,
    /// Invoke an instance action (POST /resources/{id}/{action}).
    Action,
}

impl ResourceOperation {
    /// Returns the HTTP method for this operation.
    #[must_use]
    pub const fn http_method(&self) -> HttpMethod {
        match self {
            Self::Retrieve | Self::List => HttpMethod::Get,
            Self::Create | Self::Update | Self::Action => HttpMethod::Post,
            Self::Delete => HttpMethod::Delete,
        }
    }

    /// Returns the operation name as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Retrieve => "retrieve",
            Self::List => "list",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::Action => "action",
        }
    }
}

/// Where a resource kind lives in the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// A collection; instances are addressed by identifier.
    Collection(&'static str),
    /// A single object at a fixed path.
    Singleton(&'static str),
}

impl Endpoint {
    /// Returns the collection (or singleton) path.
    #[must_use]
    pub const fn base(&self) -> &'static str {
        match self {
            Self::Collection(path) | Self::Singleton(path) => *path,
        }
    }

    /// Returns the path of one instance.
    ///
    /// # Errors
    ///
    /// Returns [`StripeError::InvalidRequest`] if this is a collection and
    /// `id` is `None` or empty.
    pub fn instance_path(&self, id: Option<&str>) -> Result<String, StripeError> {
        match (self, id) {
            (Self::Singleton(path), _) => Ok((*path).to_string()),
            (Self::Collection(path), Some(id)) if !id.is_empty() => {
                Ok(format!("{path}/{}", escape_id(id)))
            }
            (Self::Collection(path), _) => Err(StripeError::invalid_request(format!(
                "Could not determine which URL to request: {path} instance has invalid ID: none"
            ))),
        }
    }

    /// Returns the path of an instance action such as `charges/{id}/refund`.
    ///
    /// # Errors
    ///
    /// Same as [`instance_path`](Self::instance_path).
    pub fn action_path(&self, id: Option<&str>, action: &str) -> Result<String, StripeError> {
        Ok(format!("{}/{action}", self.instance_path(id)?))
    }
}

/// Percent-encodes an identifier for use as a single path segment.
#[must_use]
pub fn escape_id(id: &str) -> String {
    urlencoding::encode(id).into_owned()
}

// Verify types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceOperation>();
    assert_send_sync::<Endpoint>();
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_methods() {
        assert_eq!(ResourceOperation::Retrieve.http_method(), HttpMethod::Get);
        assert_eq!(ResourceOperation::List.http_method(), HttpMethod::Get);
        assert_eq!(ResourceOperation::Create.http_method(), HttpMethod::Post);
        assert_eq!(ResourceOperation::Update.http_method(), HttpMethod::Post);
        assert_eq!(ResourceOperation::Action.http_method(), HttpMethod::Post);
        assert_eq!(ResourceOperation::Delete.http_method(), HttpMethod::Delete);
        assert_eq!(ResourceOperation::Update.as_str(), "update");
    }

    #[test]
    fn test_escape_id_keeps_unreserved_characters() {
        assert_eq!(escape_id("cus_4QFJOjw2pOmAGJ"), "cus_4QFJOjw2pOmAGJ");
        assert_eq!(escape_id("12345"), "12345");
        assert_eq!(escape_id("a-b.c~d"), "a-b.c~d");
    }

    #[test]
    fn test_escape_id_encodes_reserved_and_unicode() {
        assert_eq!(escape_id("a b"), "a%20b");
        assert_eq!(escape_id("../x?y#z"), "..%2Fx%3Fy%23z");
        assert_eq!(escape_id("☃"), "%E2%98%83");
        assert_eq!(escape_id("true"), "true");
    }

    #[test]
    fn test_collection_instance_requires_id() {
        let endpoint = Endpoint::Collection("charges");
        assert_eq!(endpoint.base(), "charges");
        assert_eq!(endpoint.instance_path(Some("ch_1")).unwrap(), "charges/ch_1");

        for id in [None, Some("")] {
            let error = endpoint.instance_path(id).unwrap_err();
            assert!(matches!(error, StripeError::InvalidRequest(_)));
            assert!(error.http_status().is_none());
        }
    }

    #[test]
    fn test_action_path() {
        let endpoint = Endpoint::Collection("charges");
        assert_eq!(
            endpoint.action_path(Some("ch_1"), "refund").unwrap(),
            "charges/ch_1/refund"
        );
        assert!(endpoint.action_path(None, "refund").is_err());
    }

    #[test]
    fn test_singleton_ignores_id() {
        let endpoint = Endpoint::Singleton("account");
        assert_eq!(endpoint.instance_path(None).unwrap(), "account");
        assert_eq!(endpoint.instance_path(Some("acct_1")).unwrap(), "account");
    }
}
