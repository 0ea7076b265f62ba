//! HTTP client types for Stripe API communication.
//!
//! This module provides the request pipeline between resource objects and
//! the network.
//!
//! # Overview
//!
//! - [`Client`]: Resolves credentials, builds URLs, encodes parameters and
//!   maps responses to JSON or [`StripeError`]
//! - [`Transport`]: The HTTP execution boundary
//! - [`ReqwestTransport`]: The default `reqwest` transport
//! - [`TransportRequest`] / [`HttpResponse`]: What crosses that boundary
//! - [`StripeError`]: The error taxonomy
//! - [`encode_params`] / [`merge_params`]: Parameter encoding
//!
//! # Example
//!
//! ```rust,ignore
//! use serde_json::json;
//! use stripe_api::clients::{to_params, HttpMethod};
//! use stripe_api::{Client, StripeConfig};
//!
//! let client = Client::new(StripeConfig::builder().api_key("sk_test_123").build())?;
//! let params = to_params(json!({"limit": 3}))?;
//! let response = client.request(HttpMethod::Get, "charges", &params, None).await?;
//! println!("{}", response.json);
//! ```

mod client;
mod encoding;
mod errors;
mod http_request;
mod http_response;
mod http_transport;
mod transport;

pub use client::{ApiResponse, Client, SDK_VERSION};
pub use encoding::{encode_params, merge_params, to_params, Params};
pub use errors::{ErrorDetails, StripeError, TransportError};
pub use http_request::{HttpMethod, TransportRequest, FORM_CONTENT_TYPE};
pub use http_response::HttpResponse;
pub use http_transport::ReqwestTransport;
pub use transport::Transport;
