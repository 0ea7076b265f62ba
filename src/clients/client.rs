//! The request pipeline.
//!
//! [`Client`] turns a resource operation into a [`TransportRequest`]:
//! it resolves the API key, composes the URL from the API base, version
//! segment and resource path, encodes parameters into the query string or
//! the form payload, invokes the [`Transport`], and converts the raw
//! response into JSON or a typed [`StripeError`].

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use serde_json::Value;

use crate::clients::encoding::{encode_params, Params};
use crate::clients::errors::StripeError;
use crate::clients::http_request::{HttpMethod, TransportRequest, FORM_CONTENT_TYPE};
use crate::clients::http_transport::ReqwestTransport;
use crate::clients::transport::Transport;
use crate::config::{ApiKey, StripeConfig};

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// A successful API response.
#[derive(Clone, Debug)]
pub struct ApiResponse {
    /// The parsed response body.
    pub json: Value,
    /// The API key the request was made with.
    ///
    /// Objects built from the response bind this key so that follow-up
    /// calls use the same credential.
    pub api_key: ApiKey,
}

/// Client for the Stripe API.
///
/// The client owns the configuration and the transport. Its API key is the
/// process-wide default: every resource created through a client shares it,
/// and changing it with [`set_api_key`](Self::set_api_key) affects all
/// subsequent calls that do not carry their own key.
///
/// Cloning is cheap; clones share the same configuration and key.
///
/// # Key Resolution
///
/// For every call the key is chosen in this order:
///
/// 1. the key passed to the call
/// 2. the key bound to the object the call is made on
/// 3. the client's default key
///
/// If none is available, or the chosen key is malformed, an
/// [`AuthenticationError`](StripeError::Authentication) is returned and the
/// transport is never invoked.
///
/// # Example
///
/// ```rust,ignore
/// use stripe_api::{Client, StripeConfig, Customer, Retrievable};
///
/// let client = Client::new(StripeConfig::builder().api_key("sk_test_123").build())?;
/// let customer = Customer::retrieve(&client, "cus_123", None).await?;
///
/// // Switch the default key for all later calls
/// client.set_api_key("sk_test_456");
/// ```
#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    config: StripeConfig,
    api_key: RwLock<Option<String>>,
    transport: Arc<dyn Transport>,
    user_agent: String,
}

// Verify Client is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Client>();
};

impl Client {
    /// Creates a client using the default [`ReqwestTransport`].
    ///
    /// # Errors
    ///
    /// Returns [`StripeError::Transport`] if the HTTP client cannot be built.
    pub fn new(config: StripeConfig) -> Result<Self, StripeError> {
        let transport = ReqwestTransport::new(config.timeout())?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Creates a client that sends requests through `transport`.
    #[must_use]
    pub fn with_transport(config: StripeConfig, transport: Arc<dyn Transport>) -> Self {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let user_agent = format!("{user_agent_prefix}Stripe/v1 RustBindings/{SDK_VERSION}");

        Self {
            inner: Arc::new(ClientInner {
                api_key: RwLock::new(config.api_key().map(str::to_string)),
                config,
                transport,
                user_agent,
            }),
        }
    }

    /// Returns the configuration the client was built with.
    #[must_use]
    pub fn config(&self) -> &StripeConfig {
        &self.inner.config
    }

    /// Returns the current default API key.
    #[must_use]
    pub fn api_key(&self) -> Option<String> {
        self.inner.api_key.read().clone()
    }

    /// Replaces the default API key.
    pub fn set_api_key(&self, key: impl Into<String>) {
        *self.inner.api_key.write() = Some(key.into());
    }

    /// Removes the default API key.
    pub fn clear_api_key(&self) {
        *self.inner.api_key.write() = None;
    }

    /// Restores the default API key from the configuration.
    pub fn reset(&self) {
        *self.inner.api_key.write() = self.inner.config.api_key().map(str::to_string);
    }

    /// Returns the user agent sent with every request.
    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.inner.user_agent
    }

    /// Returns the absolute URL for a resource path (e.g. `customers/cus_1`).
    #[must_use]
    pub fn api_url(&self, path: &str) -> String {
        format!(
            "{}/{}/{}",
            self.inner.config.api_base(),
            self.inner.config.api_version(),
            path.trim_start_matches('/')
        )
    }

    /// Chooses and validates the API key for a call.
    ///
    /// `preferred` is the key passed to the call or bound to the object; when
    /// it is `None` the client's default key is used.
    ///
    /// # Errors
    ///
    /// Returns [`StripeError::Authentication`] if no key is available or the
    /// key is malformed.
    pub fn resolve_api_key(&self, preferred: Option<&str>) -> Result<ApiKey, StripeError> {
        let key = match preferred {
            Some(key) => key.to_string(),
            None => self.api_key().unwrap_or_default(),
        };
        Ok(ApiKey::new(key)?)
    }

    /// Builds the transport request for a call without sending it.
    ///
    /// GET and DELETE parameters go to the query string; POST parameters go
    /// to the form payload.
    #[must_use]
    pub fn build_request(
        &self,
        method: HttpMethod,
        path: &str,
        params: &Params,
        api_key: &ApiKey,
    ) -> TransportRequest {
        let mut url = self.api_url(path);
        let encoded = encode_params(params);

        if !method.has_payload() && !encoded.is_empty() {
            url.push('?');
            url.push_str(&encoded);
        }

        let request = TransportRequest::new(method, url)
            .header("Authorization", api_key.bearer())
            .header("User-Agent", self.inner.user_agent.as_str())
            .header("Accept", "application/json");

        if method.has_payload() {
            request
                .header("Content-Type", FORM_CONTENT_TYPE)
                .payload(encoded)
        } else {
            request
        }
    }

    /// Sends a request and parses the JSON response.
    ///
    /// # Errors
    ///
    /// - [`StripeError::Authentication`] if no valid key can be resolved
    ///   (the transport is not invoked)
    /// - [`StripeError::Transport`] if the exchange fails
    /// - the variant matching the status code for non-2xx responses
    /// - [`StripeError::Api`] if a 2xx body is not valid JSON
    pub async fn request(
        &self,
        method: HttpMethod,
        path: &str,
        params: &Params,
        api_key: Option<&str>,
    ) -> Result<ApiResponse, StripeError> {
        let api_key = self.resolve_api_key(api_key)?;
        let request = self.build_request(method, path, params, &api_key);

        tracing::debug!(method = %method.as_str(), url = %request.url, "Sending Stripe API request");

        let response = self.inner.transport.execute(request).await?;

        if !response.is_ok() {
            tracing::warn!(
                status = response.code,
                request_id = response.request_id().unwrap_or_default(),
                "Stripe API request to {path} failed"
            );
            return Err(StripeError::from_response(response.code, &response.body));
        }

        let json = serde_json::from_str(&response.body)
            .map_err(|_| StripeError::invalid_response(response.code, &response.body))?;

        Ok(ApiResponse { json, api_key })
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("config", &self.inner.config)
            .field("transport", &self.inner.transport)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::encoding::to_params;
    use crate::config::ApiBase;
    use serde_json::json;

    fn create_test_client(api_key: Option<&str>) -> Client {
        let mut builder = StripeConfig::builder();
        if let Some(key) = api_key {
            builder = builder.api_key(key);
        }
        Client::new(builder.build()).unwrap()
    }

    #[test]
    fn test_api_url_includes_version_segment() {
        let client = create_test_client(None);
        assert_eq!(
            client.api_url("customers/cus_1"),
            "https://api.stripe.com/v1/customers/cus_1"
        );
        assert_eq!(
            client.api_url("/charges"),
            "https://api.stripe.com/v1/charges"
        );
    }

    #[test]
    fn test_api_url_uses_configured_base() {
        let config = StripeConfig::builder()
            .api_base(ApiBase::new("http://localhost:12111/").unwrap())
            .build();
        let client = Client::new(config).unwrap();
        assert_eq!(client.api_url("charges"), "http://localhost:12111/v1/charges");
    }

    #[test]
    fn test_resolve_prefers_explicit_key() {
        let client = create_test_client(Some("global"));
        assert_eq!(client.resolve_api_key(Some("local")).unwrap().as_ref(), "local");
        assert_eq!(client.resolve_api_key(None).unwrap().as_ref(), "global");
    }

    #[test]
    fn test_resolve_without_any_key_is_authentication_error() {
        let client = create_test_client(None);
        let error = client.resolve_api_key(None).unwrap_err();
        assert!(matches!(error, StripeError::Authentication(_)));
        assert!(error.to_string().contains("No API key provided"));
    }

    #[test]
    fn test_resolve_rejects_whitespace_key() {
        let client = create_test_client(Some("key "));
        let error = client.resolve_api_key(None).unwrap_err();
        assert!(matches!(error, StripeError::Authentication(_)));
    }

    #[test]
    fn test_default_key_lifecycle() {
        let client = create_test_client(Some("sk_test_initial"));
        let clone = client.clone();

        client.set_api_key("sk_test_other");
        assert_eq!(clone.api_key().as_deref(), Some("sk_test_other"));

        client.clear_api_key();
        assert!(clone.api_key().is_none());

        client.reset();
        assert_eq!(clone.api_key().as_deref(), Some("sk_test_initial"));
    }

    #[test]
    fn test_get_request_has_query_and_no_payload() {
        let client = create_test_client(None);
        let key = ApiKey::new("sk_test_123").unwrap();
        let params = to_params(json!({"limit": 1})).unwrap();

        let request = client.build_request(HttpMethod::Get, "charges", &params, &key);

        assert_eq!(request.url, "https://api.stripe.com/v1/charges?limit=1");
        assert!(request.payload.is_none());
        assert_eq!(
            request.headers.get("Authorization").map(String::as_str),
            Some("Bearer sk_test_123")
        );
        assert!(!request.headers.contains_key("Content-Type"));
    }

    #[test]
    fn test_get_request_without_params_has_no_question_mark() {
        let client = create_test_client(None);
        let key = ApiKey::new("sk_test_123").unwrap();

        let request = client.build_request(HttpMethod::Get, "account", &Params::new(), &key);
        assert_eq!(request.url, "https://api.stripe.com/v1/account");
    }

    #[test]
    fn test_post_request_has_payload_and_no_query() {
        let client = create_test_client(None);
        let key = ApiKey::new("sk_test_123").unwrap();
        let params = to_params(json!({"amount": 100, "currency": "usd"})).unwrap();

        let request = client.build_request(HttpMethod::Post, "charges", &params, &key);

        assert!(request.query().is_none());
        assert_eq!(request.payload.as_deref(), Some("amount=100&currency=usd"));
        assert_eq!(
            request.headers.get("Content-Type").map(String::as_str),
            Some(FORM_CONTENT_TYPE)
        );
    }

    #[test]
    fn test_user_agent_format() {
        let config = StripeConfig::builder().user_agent_prefix("MyApp/1.0").build();
        let client = Client::new(config).unwrap();

        assert!(client.user_agent().starts_with("MyApp/1.0 | "));
        assert!(client.user_agent().contains("RustBindings/"));
    }

    #[test]
    fn test_debug_does_not_leak_key() {
        let client = create_test_client(Some("sk_test_secret"));
        assert!(!format!("{client:?}").contains("sk_test_secret"));
    }
}
