//! Resource kinds.
//!
//! Each kind wraps a [`StripeObject`](crate::rest::StripeObject) and declares
//! its capabilities:
//!
//! | Kind | Endpoint | Capabilities | Actions |
//! |------|----------|--------------|---------|
//! | [`Customer`] | `customers` | retrieve, create, list, save, delete | `charges()`, `invoices()` |
//! | [`Charge`] | `charges` | retrieve, create, list, save | `refund()`, `capture()` |
//! | [`Invoice`] | `invoices` | retrieve, create, list, save | `pay()`, `Invoice::upcoming()` |
//! | [`Account`] | `account` (singleton) | `Account::retrieve()` | |
//!
//! Nested objects whose `object` tag names one of these kinds get that
//! kind's endpoint, so they can be refreshed and saved like top-level ones.
//!
//! # Example
//!
//! ```rust,ignore
//! use serde_json::json;
//! use stripe_api::rest::resources::{Charge, Customer};
//! use stripe_api::rest::{Creatable, Retrievable, Savable};
//!
//! let mut customer = Customer::retrieve(&client, "cus_123", None).await?;
//! customer.set_description("VIP")?;
//! customer.save().await?;
//!
//! let mut charge = Charge::create(
//!     &client,
//!     json!({"amount": 400, "currency": "usd", "customer": "cus_123"}),
//!     None,
//! ).await?;
//! charge.refund(None).await?;
//! ```

/// Declares a resource newtype over `StripeObject`.
macro_rules! api_resource {
    ($(#[$meta:meta])* $name:ident, $object:literal, $endpoint:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name($crate::rest::StripeObject);

        impl $crate::rest::ApiResource for $name {
            const OBJECT_NAME: &'static str = $object;
            const ENDPOINT: $crate::rest::Endpoint = $endpoint;

            fn from_object(object: $crate::rest::StripeObject) -> Self {
                Self(object)
            }

            fn into_object(self) -> $crate::rest::StripeObject {
                self.0
            }
        }

        impl ::std::ops::Deref for $name {
            type Target = $crate::rest::StripeObject;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl ::std::ops::DerefMut for $name {
            fn deref_mut(&mut self) -> &mut Self::Target {
                &mut self.0
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                ::serde::Serialize::serialize(&self.0, serializer)
            }
        }
    };
}

mod account;
mod charge;
mod customer;
mod invoice;

pub use account::Account;
pub use charge::Charge;
pub use customer::Customer;
pub use invoice::Invoice;

use crate::rest::path::Endpoint;
use crate::rest::resource::ApiResource;

const REGISTRY: [(&str, Endpoint); 4] = [
    (Customer::OBJECT_NAME, Customer::ENDPOINT),
    (Charge::OBJECT_NAME, Charge::ENDPOINT),
    (Invoice::OBJECT_NAME, Invoice::ENDPOINT),
    (Account::OBJECT_NAME, Account::ENDPOINT),
];

/// Returns the endpoint registered for a kind tag.
#[must_use]
pub fn endpoint_for(kind: &str) -> Option<Endpoint> {
    REGISTRY
        .iter()
        .find(|(name, _)| *name == kind)
        .map(|(_, endpoint)| *endpoint)
}

/// Converts a Unix timestamp field to a UTC datetime.
pub(crate) fn timestamp(value: &crate::rest::FieldValue) -> Option<chrono::DateTime<chrono::Utc>> {
    value
        .as_i64()
        .and_then(|seconds| chrono::DateTime::from_timestamp(seconds, 0))
}
