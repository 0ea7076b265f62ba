//! The transport boundary.
//!
//! A [`Transport`] performs one HTTP exchange: it receives a fully resolved
//! [`TransportRequest`] (method, absolute URL, headers, encoded payload) and
//! returns the status code and raw body, or a [`TransportError`] when the
//! exchange could not be completed.
//!
//! The SDK ships [`ReqwestTransport`](crate::clients::ReqwestTransport).
//! Custom transports (proxies, recorders, test doubles) implement this trait
//! and are passed to [`Client::with_transport`](crate::Client::with_transport).
//!
//! # Example
//!
//! ```rust
//! use async_trait::async_trait;
//! use stripe_api::clients::{HttpResponse, Transport, TransportError, TransportRequest};
//!
//! #[derive(Debug)]
//! struct Offline;
//!
//! #[async_trait]
//! impl Transport for Offline {
//!     async fn execute(&self, _request: TransportRequest) -> Result<HttpResponse, TransportError> {
//!         Err(TransportError::new("offline"))
//!     }
//! }
//! ```

use std::fmt::Debug;

use async_trait::async_trait;

use crate::clients::errors::TransportError;
use crate::clients::http_request::TransportRequest;
use crate::clients::http_response::HttpResponse;

/// Executes HTTP requests on behalf of the [`Client`](crate::Client).
///
/// Implementations must not retry: any response, whatever its status, is
/// returned as-is, and connection-level failures are reported as
/// [`TransportError`]. Timeouts and cancellation are the transport's concern.
#[async_trait]
pub trait Transport: Debug + Send + Sync {
    /// Performs the request and returns the raw response.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if no response could be obtained.
    async fn execute(&self, request: TransportRequest) -> Result<HttpResponse, TransportError>;
}
