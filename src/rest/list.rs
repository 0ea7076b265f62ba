//! List envelopes.
//!
//! [`ListObject<T>`] holds one page of results together with the filters that
//! produced it, so the same query can be issued again with more filters:
//!
//! ```rust,ignore
//! use serde_json::json;
//! use stripe_api::{Invoice, Listable};
//!
//! let invoices = Invoice::all(&client, Some(json!({"customer": "cus_1"})), None).await?;
//! // GET /v1/invoices?customer=cus_1&paid=true
//! let paid = invoices.all(Some(json!({"paid": true}))).await?;
//! ```
//!
//! The list dereferences to `[T]`.

use std::fmt;
use std::ops::Deref;

use serde_json::Value;

use crate::clients::{merge_params, to_params, Client, Params, StripeError};
use crate::rest::path::ResourceOperation;
use crate::rest::resource::ApiResource;
use crate::rest::StripeObject;

/// One page of a collection.
#[derive(Clone)]
pub struct ListObject<T> {
    client: Client,
    path: String,
    filters: Params,
    api_key: String,
    data: Vec<T>,
    has_more: bool,
}

impl<T: ApiResource> ListObject<T> {
    /// Issues `GET path` with `filters` and parses the result.
    ///
    /// The body may be a list envelope (`{"object": "list", "data": [...]}`)
    /// or a bare array.
    pub(crate) async fn fetch(
        client: &Client,
        path: &str,
        filters: Params,
        api_key: Option<&str>,
    ) -> Result<Self, StripeError> {
        let response = client
            .request(ResourceOperation::List.http_method(), path, &filters, api_key)
            .await?;
        let api_key = response.api_key.as_ref().to_string();

        let (items, has_more) = match response.json {
            Value::Array(items) => (items, false),
            Value::Object(mut map) => {
                let has_more = map.get("has_more").and_then(Value::as_bool).unwrap_or(false);
                match map.remove("data") {
                    Some(Value::Array(items)) => (items, has_more),
                    _ => return Err(missing_data(&Value::Object(map))),
                }
            }
            other => return Err(missing_data(&other)),
        };

        let data = items
            .into_iter()
            .map(|item| {
                StripeObject::construct_from(client, item, Some(&api_key))
                    .and_then(StripeObject::into_resource)
            })
            .collect::<Result<Vec<T>, _>>()?;

        tracing::debug!(path, count = data.len(), has_more, "Listed objects");

        Ok(Self {
            client: client.clone(),
            path: path.to_string(),
            filters,
            api_key,
            data,
            has_more,
        })
    }

    /// Lists again with `more` merged into this list's filters.
    ///
    /// Keys in `more` override existing filters. The new list uses the same
    /// API key as this one.
    ///
    /// # Errors
    ///
    /// Returns [`StripeError::InvalidRequest`] if `more` is not an object, or
    /// any error from the request pipeline.
    pub async fn all(&self, more: Option<Value>) -> Result<Self, StripeError> {
        let more = more.map(to_params).transpose()?.unwrap_or_default();
        let filters = merge_params(&self.filters, &more);
        Self::fetch(&self.client, &self.path, filters, Some(&self.api_key)).await
    }
}

impl<T> ListObject<T> {
    /// Returns the filters that produced this list.
    #[must_use]
    pub const fn filters(&self) -> &Params {
        &self.filters
    }

    /// Returns the collection path (e.g. `invoices`).
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the API key the list was fetched with.
    #[must_use]
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Returns `true` if more results are available.
    #[must_use]
    pub const fn has_more(&self) -> bool {
        self.has_more
    }

    #[must_use]
    pub fn data(&self) -> &[T] {
        &self.data
    }

    #[must_use]
    pub fn into_data(self) -> Vec<T> {
        self.data
    }
}

impl<T: fmt::Debug> fmt::Debug for ListObject<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListObject")
            .field("path", &self.path)
            .field("filters", &self.filters)
            .field("data", &self.data)
            .field("has_more", &self.has_more)
            .finish_non_exhaustive()
    }
}

impl<T> Deref for ListObject<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl<T> IntoIterator for ListObject<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a ListObject<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

fn missing_data(json: &Value) -> StripeError {
    StripeError::Api(crate::clients::ErrorDetails::local(format!(
        "Invalid response object from API: {json} (expected a list)"
    )))
}
