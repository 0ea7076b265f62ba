//! Account resource.
//!
//! The account is a singleton at `/v1/account`: it has no collection and is
//! addressed without an identifier.

use crate::clients::{Client, StripeError};
use crate::rest::path::Endpoint;
use crate::rest::resource::ApiResource;
use crate::rest::StripeObject;

api_resource!(
    /// The account that owns the API key.
    Account,
    "account",
    Endpoint::Singleton("account")
);

impl Account {
    /// Fetches the account for `api_key`, or for the client's default key.
    ///
    /// # Errors
    ///
    /// Returns any error from the request pipeline.
    pub async fn retrieve(client: &Client, api_key: Option<&str>) -> Result<Self, StripeError> {
        let mut account = Self::identity_only(client, api_key);
        account.refresh().await?;
        Ok(account)
    }

    /// Creates an unfetched account. The first field read fetches it.
    #[must_use]
    pub fn identity_only(client: &Client, api_key: Option<&str>) -> Self {
        Self::from_object(StripeObject::construct(
            client,
            Some(Self::OBJECT_NAME),
            None,
            api_key,
        ))
    }

    pub async fn email(&mut self) -> Result<Option<&str>, StripeError> {
        Ok(self.get("email").await?.as_str())
    }

    /// Returns whether the account can create live charges.
    pub async fn charge_enabled(&mut self) -> Result<Option<bool>, StripeError> {
        Ok(self.get("charge_enabled").await?.as_bool())
    }

    /// Returns whether account details have been submitted.
    pub async fn details_submitted(&mut self) -> Result<Option<bool>, StripeError> {
        Ok(self.get("details_submitted").await?.as_bool())
    }

    pub async fn currencies_supported(&mut self) -> Result<Vec<String>, StripeError> {
        Ok(self
            .get("currencies_supported")
            .await?
            .as_list()
            .unwrap_or_default()
            .iter()
            .filter_map(|currency| currency.as_str().map(str::to_string))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StripeConfig;

    #[test]
    fn test_identity_only_account_has_singleton_endpoint() {
        let client = Client::new(StripeConfig::builder().build()).unwrap();
        let account = Account::identity_only(&client, Some("sk_test_local"));

        assert!(account.id().is_none());
        assert!(!account.is_loaded());
        assert_eq!(account.endpoint(), Some(Endpoint::Singleton("account")));
        assert_eq!(account.api_key(), Some("sk_test_local"));
    }
}
