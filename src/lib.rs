//! # Stripe API Rust SDK
//!
//! A client-side object model for the Stripe REST API. Remote resources are
//! manipulated as local objects: network access is deferred until a field
//! is actually needed, local edits are tracked so updates send only what
//! changed, and failures are reported through a typed error taxonomy.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`StripeConfig`] and [`StripeConfigBuilder`]
//! - A [`Client`] owning the process-wide API key, base URL and transport
//! - Lazily loaded, dirty-tracking objects via [`StripeObject`]
//! - Resource kinds ([`Customer`], [`Charge`], [`Invoice`], [`Account`]) with
//!   capability traits ([`Retrievable`], [`Creatable`], [`Listable`],
//!   [`Savable`], [`Deletable`])
//! - [`StripeError`], mapping HTTP status codes to error kinds
//!
//! ## Quick Start
//!
//! ```rust
//! use stripe_api::{ApiBase, Client, StripeConfig};
//!
//! let config = StripeConfig::builder()
//!     .api_key("sk_test_123")
//!     .api_base(ApiBase::new("https://api.stripe.com").unwrap())
//!     .build();
//!
//! let client = Client::new(config).unwrap();
//! assert_eq!(client.api_url("charges"), "https://api.stripe.com/v1/charges");
//! ```
//!
//! ## Working With Resources
//!
//! ```rust,ignore
//! use serde_json::json;
//! use stripe_api::{Charge, Client, Creatable, Customer, Retrievable, Savable};
//!
//! // Create with a per-call key; follow-up calls on the charge reuse it
//! let mut charge = Charge::create(
//!     &client,
//!     json!({"amount": 400, "currency": "usd", "card": "tok_visa"}),
//!     Some("sk_test_other"),
//! )
//! .await?;
//! charge.refund(None).await?;
//!
//! // Nothing is fetched until a field other than `id` is read
//! let mut customer = Customer::new(&client, "cus_123");
//! customer.set_description("VIP")?;
//! customer.save().await?; // POST /v1/customers/cus_123 with description=VIP
//! ```
//!
//! ## Error Handling
//!
//! ```rust,ignore
//! use stripe_api::{Charge, Retrievable, StripeError};
//!
//! match Charge::retrieve(&client, "ch_missing", None).await {
//!     Err(StripeError::InvalidRequest(details)) => {
//!         println!("{:?}: {}", details.http_status, details.message);
//!     }
//!     Err(StripeError::Authentication(_)) => println!("check your API key"),
//!     Err(e) => println!("{e}"),
//!     Ok(_) => {}
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **Explicit configuration**: The process-wide key lives in a [`Client`]
//!   that is passed to every call, so tests never share global state
//! - **Validation before I/O**: Missing identifiers and malformed keys fail
//!   without touching the network
//! - **Pluggable transport**: Anything implementing [`clients::Transport`]
//! - **Async-first**: Designed for use with the Tokio async runtime

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use config::{ApiBase, ApiKey, ApiVersion, StripeConfig, StripeConfigBuilder};
pub use error::ConfigError;

pub use clients::{Client, ErrorDetails, HttpMethod, HttpResponse, StripeError, TransportError};

pub use rest::resources::{Account, Charge, Customer, Invoice};
pub use rest::{
    ApiResource, Creatable, Deletable, FieldValue, ListObject, Listable, ObjectState,
    Retrievable, Savable, StripeObject,
};
