//! Invoice resource.

use serde_json::{json, Value};

use crate::clients::{to_params, Client, HttpMethod, StripeError};
use crate::rest::path::Endpoint;
use crate::rest::resource::{ApiResource, Creatable, Listable, Retrievable, Savable};
use crate::rest::StripeObject;

api_resource!(
    /// An invoice.
    Invoice,
    "invoice",
    Endpoint::Collection("invoices")
);

impl Retrievable for Invoice {}
impl Creatable for Invoice {}
impl Listable for Invoice {}
impl Savable for Invoice {}

impl Invoice {
    /// Previews the next invoice for a customer
    /// (`GET /v1/invoices/upcoming?customer={customer}`).
    ///
    /// The preview has no identifier, so it cannot be refreshed or saved.
    ///
    /// # Errors
    ///
    /// Returns any error from the request pipeline. A customer without
    /// upcoming charges yields [`StripeError::InvalidRequest`] with status 404.
    pub async fn upcoming(
        client: &Client,
        customer: &str,
        api_key: Option<&str>,
    ) -> Result<Self, StripeError> {
        let params = to_params(json!({ "customer": customer }))?;
        let path = format!("{}/upcoming", Self::ENDPOINT.base());
        let response = client
            .request(HttpMethod::Get, &path, &params, api_key)
            .await?;
        StripeObject::from_response(client, response)?.into_resource()
    }

    /// Pays the invoice (`POST /v1/invoices/{id}/pay`).
    ///
    /// # Errors
    ///
    /// Returns [`StripeError::InvalidRequest`] without a request if the
    /// invoice has no identifier, or any error from the request pipeline.
    pub async fn pay(&mut self) -> Result<(), StripeError> {
        self.post_action("pay", &to_params(Value::Null)?, None).await
    }

    /// Returns the total in the smallest currency unit.
    pub async fn total(&mut self) -> Result<Option<i64>, StripeError> {
        Ok(self.get("total").await?.as_i64())
    }

    pub async fn paid(&mut self) -> Result<Option<bool>, StripeError> {
        Ok(self.get("paid").await?.as_bool())
    }

    pub async fn closed(&mut self) -> Result<Option<bool>, StripeError> {
        Ok(self.get("closed").await?.as_bool())
    }

    /// Returns the identifier of the invoiced customer.
    pub async fn customer(&mut self) -> Result<Option<&str>, StripeError> {
        Ok(self.get("customer").await?.as_str())
    }

    /// Closes or reopens the invoice on the next save.
    pub fn set_closed(&mut self, closed: bool) -> Result<(), StripeError> {
        self.set("closed", closed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StripeConfig;

    #[tokio::test]
    async fn test_accessors() {
        let client = Client::new(StripeConfig::builder().build()).unwrap();
        let mut invoice = Invoice::construct_from(
            &client,
            json!({"id": "in_1", "object": "invoice", "total": 1000, "paid": false, "closed": false}),
            None,
        )
        .unwrap();

        assert_eq!(invoice.total().await.unwrap(), Some(1000));
        assert_eq!(invoice.paid().await.unwrap(), Some(false));

        invoice.set_closed(true).unwrap();
        assert_eq!(invoice.closed().await.unwrap(), Some(true));
        assert_eq!(invoice.dirty_fields(), ["closed"]);
    }

    #[tokio::test]
    async fn test_upcoming_requires_api_key() {
        let client = Client::new(StripeConfig::builder().build()).unwrap();
        let error = Invoice::upcoming(&client, "cus_1", None).await.unwrap_err();
        assert!(matches!(error, StripeError::Authentication(_)));
    }
}
