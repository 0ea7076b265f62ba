//! Customer resource.

use chrono::{DateTime, Utc};
use serde_json::json;

use crate::clients::StripeError;
use crate::rest::list::ListObject;
use crate::rest::path::Endpoint;
use crate::rest::resource::{Creatable, Deletable, Listable, Retrievable, Savable};

use super::{timestamp, Charge, Invoice};

api_resource!(
    /// A customer.
    ///
    /// Typed accessors read the same fields as [`get`](crate::rest::StripeObject::get)
    /// and follow the same lazy-loading rules.
    Customer,
    "customer",
    Endpoint::Collection("customers")
);

impl Retrievable for Customer {}
impl Creatable for Customer {}
impl Listable for Customer {}
impl Savable for Customer {}
impl Deletable for Customer {}

impl Customer {
    pub async fn email(&mut self) -> Result<Option<&str>, StripeError> {
        Ok(self.get("email").await?.as_str())
    }

    pub fn set_email(&mut self, email: impl Into<String>) -> Result<(), StripeError> {
        self.set("email", email.into())
    }

    pub async fn description(&mut self) -> Result<Option<&str>, StripeError> {
        Ok(self.get("description").await?.as_str())
    }

    pub fn set_description(&mut self, description: impl Into<String>) -> Result<(), StripeError> {
        self.set("description", description.into())
    }

    /// Returns when the customer was created.
    pub async fn created(&mut self) -> Result<Option<DateTime<Utc>>, StripeError> {
        Ok(timestamp(self.get("created").await?))
    }

    pub async fn livemode(&mut self) -> Result<Option<bool>, StripeError> {
        Ok(self.get("livemode").await?.as_bool())
    }

    /// Returns the customer's account balance in the smallest currency unit.
    pub async fn account_balance(&mut self) -> Result<Option<i64>, StripeError> {
        Ok(self.get("account_balance").await?.as_i64())
    }

    /// Lists this customer's charges (`GET /v1/charges?customer={id}`).
    ///
    /// Uses the API key bound to the customer.
    ///
    /// # Errors
    ///
    /// Returns [`StripeError::InvalidRequest`] without a request if the
    /// customer has no identifier.
    pub async fn charges(&self) -> Result<ListObject<Charge>, StripeError> {
        let id = self.require_id()?;
        Charge::all(self.client(), Some(json!({ "customer": id })), self.api_key()).await
    }

    /// Lists this customer's invoices (`GET /v1/invoices?customer={id}`).
    ///
    /// # Errors
    ///
    /// Returns [`StripeError::InvalidRequest`] without a request if the
    /// customer has no identifier.
    pub async fn invoices(&self) -> Result<ListObject<Invoice>, StripeError> {
        let id = self.require_id()?;
        Invoice::all(self.client(), Some(json!({ "customer": id })), self.api_key()).await
    }

    fn require_id(&self) -> Result<&str, StripeError> {
        self.id().ok_or_else(|| {
            StripeError::invalid_request(
                "Could not determine which URL to request: customer instance has invalid ID: none",
            )
        })
    }
}
