//! Charge resource.

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::clients::{to_params, StripeError};
use crate::rest::path::Endpoint;
use crate::rest::resource::{Creatable, Listable, Retrievable, Savable};
use crate::rest::StripeObject;

use super::timestamp;

api_resource!(
    /// A charge against a card.
    ///
    /// Charges cannot be deleted; they are refunded instead.
    Charge,
    "charge",
    Endpoint::Collection("charges")
);

impl Retrievable for Charge {}
impl Creatable for Charge {}
impl Listable for Charge {}
impl Savable for Charge {}

impl Charge {
    /// Returns the amount in the smallest currency unit.
    pub async fn amount(&mut self) -> Result<Option<i64>, StripeError> {
        Ok(self.get("amount").await?.as_i64())
    }

    pub async fn currency(&mut self) -> Result<Option<&str>, StripeError> {
        Ok(self.get("currency").await?.as_str())
    }

    pub async fn paid(&mut self) -> Result<Option<bool>, StripeError> {
        Ok(self.get("paid").await?.as_bool())
    }

    pub async fn refunded(&mut self) -> Result<Option<bool>, StripeError> {
        Ok(self.get("refunded").await?.as_bool())
    }

    pub async fn captured(&mut self) -> Result<Option<bool>, StripeError> {
        Ok(self.get("captured").await?.as_bool())
    }

    /// Returns the identifier of the charged customer.
    pub async fn customer(&mut self) -> Result<Option<&str>, StripeError> {
        Ok(self.get("customer").await?.as_str())
    }

    /// Returns the card that was charged.
    pub async fn card(&mut self) -> Result<Option<&StripeObject>, StripeError> {
        Ok(self.get("card").await?.as_object())
    }

    pub async fn created(&mut self) -> Result<Option<DateTime<Utc>>, StripeError> {
        Ok(timestamp(self.get("created").await?))
    }

    pub async fn description(&mut self) -> Result<Option<&str>, StripeError> {
        Ok(self.get("description").await?.as_str())
    }

    pub fn set_description(&mut self, description: impl Into<String>) -> Result<(), StripeError> {
        self.set("description", description.into())
    }

    /// Refunds the charge (`POST /v1/charges/{id}/refund`).
    ///
    /// Pass `{"amount": n}` for a partial refund. The charge is replaced with
    /// the response.
    ///
    /// # Errors
    ///
    /// Returns [`StripeError::InvalidRequest`] without a request if the charge
    /// has no identifier, or any error from the request pipeline.
    pub async fn refund(&mut self, params: Option<Value>) -> Result<(), StripeError> {
        let params = to_params(params.unwrap_or(Value::Null))?;
        self.post_action("refund", &params, None).await
    }

    /// Captures an uncaptured charge (`POST /v1/charges/{id}/capture`).
    ///
    /// # Errors
    ///
    /// Same as [`refund`](Self::refund).
    pub async fn capture(&mut self, params: Option<Value>) -> Result<(), StripeError> {
        let params = to_params(params.unwrap_or(Value::Null))?;
        self.post_action("capture", &params, None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::Client;
    use crate::config::StripeConfig;
    use crate::rest::ApiResource;
    use serde_json::json;

    fn client() -> Client {
        Client::new(StripeConfig::builder().build()).unwrap()
    }

    #[tokio::test]
    async fn test_card_is_nested_object() {
        let mut charge = Charge::construct_from(
            &client(),
            json!({
                "id": "ch_1",
                "object": "charge",
                "amount": 100,
                "currency": "usd",
                "paid": true,
                "card": {"id": "card_1", "object": "card", "last4": "4242"}
            }),
            Some("sk_test_local"),
        )
        .unwrap();

        assert_eq!(charge.amount().await.unwrap(), Some(100));
        assert_eq!(charge.currency().await.unwrap(), Some("usd"));
        assert_eq!(charge.paid().await.unwrap(), Some(true));

        let card = charge.card().await.unwrap().expect("card");
        assert_eq!(card.kind(), Some("card"));
        assert_eq!(card.api_key(), Some("sk_test_local"));
        assert_eq!(card.values()["last4"].as_str(), Some("4242"));
    }

    #[tokio::test]
    async fn test_refund_without_id_makes_no_request() {
        let mut charge = Charge::construct_from(&client(), json!({"amount": 100}), None).unwrap();
        assert!(matches!(
            charge.refund(None).await,
            Err(StripeError::InvalidRequest(_))
        ));
    }

    #[tokio::test]
    async fn test_refund_rejects_non_object_params() {
        let mut charge = Charge::new(&client(), "ch_1");
        assert!(matches!(
            charge.refund(Some(json!(50))).await,
            Err(StripeError::InvalidRequest(_))
        ));
    }
}
