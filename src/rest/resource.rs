//! Resource kinds and their capabilities.
//!
//! A resource kind (Customer, Charge, ...) is a newtype over
//! [`StripeObject`] that implements [`ApiResource`]. What a kind can do is
//! declared by implementing capability traits, each of which comes with a
//! default implementation:
//!
//! | Trait | Operation | Request |
//! |-------|-----------|---------|
//! | [`Retrievable`] | `retrieve(id)` | `GET /v1/{collection}/{id}` |
//! | [`Creatable`] | `create(params)` | `POST /v1/{collection}` |
//! | [`Listable`] | `all(filters)` | `GET /v1/{collection}` |
//! | [`Savable`] | `save()` | `POST /v1/{collection}/{id}` |
//! | [`Deletable`] | `delete()` | `DELETE /v1/{collection}/{id}` |
//!
//! Refreshing is available on every object through
//! [`StripeObject::refresh`].
//!
//! # Example
//!
//! ```rust,ignore
//! use stripe_api::rest::{ApiResource, Endpoint, Retrievable, Savable, StripeObject};
//!
//! pub struct Coupon(StripeObject);
//!
//! impl ApiResource for Coupon {
//!     const OBJECT_NAME: &'static str = "coupon";
//!     const ENDPOINT: Endpoint = Endpoint::Collection("coupons");
//!
//!     fn from_object(object: StripeObject) -> Self { Self(object) }
//!     fn into_object(self) -> StripeObject { self.0 }
//! }
//! // plus Deref/DerefMut to StripeObject
//!
//! impl Retrievable for Coupon {}
//! impl Savable for Coupon {}
//!
//! let mut coupon = Coupon::retrieve(&client, "25OFF", None).await?;
//! coupon.set("metadata", serde_json::json!({"campaign": "spring"}))?;
//! coupon.save().await?;
//! ```

use std::ops::{Deref, DerefMut};

use serde_json::Value;

use crate::clients::{to_params, Client, Params, StripeError};
use crate::rest::list::ListObject;
use crate::rest::path::{Endpoint, ResourceOperation};
use crate::rest::StripeObject;

/// A typed view of a [`StripeObject`] of one kind.
///
/// Field access, dirty tracking and refresh come from the wrapped object
/// through `Deref`.
pub trait ApiResource: Deref<Target = StripeObject> + DerefMut + Sized {
    /// The `object` tag of this kind (e.g. `"customer"`).
    const OBJECT_NAME: &'static str;

    /// Where objects of this kind live.
    const ENDPOINT: Endpoint;

    /// Wraps an object. The kind has already been checked.
    fn from_object(object: StripeObject) -> Self;

    /// Unwraps the object.
    fn into_object(self) -> StripeObject;

    /// Creates an identity-only instance. No request is made.
    fn new(client: &Client, id: &str) -> Self {
        Self::from_object(StripeObject::construct(
            client,
            Some(Self::OBJECT_NAME),
            Some(id),
            None,
        ))
    }

    /// Creates an identity-only instance bound to `api_key`.
    fn with_api_key(client: &Client, id: &str, api_key: &str) -> Self {
        Self::from_object(StripeObject::construct(
            client,
            Some(Self::OBJECT_NAME),
            Some(id),
            Some(api_key),
        ))
    }

    /// Creates a materialized instance from raw JSON. No request is made.
    ///
    /// # Errors
    ///
    /// Returns an error if `value` is not an object or is tagged with a
    /// different kind.
    fn construct_from(
        client: &Client,
        value: Value,
        api_key: Option<&str>,
    ) -> Result<Self, StripeError> {
        StripeObject::construct_from(client, value, api_key)?.into_resource()
    }
}

/// Kinds that can be fetched by identifier.
#[allow(async_fn_in_trait)]
pub trait Retrievable: ApiResource {
    /// Fetches an object by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`StripeError::InvalidRequest`] for an empty `id` (no request
    /// is made), or any error from the request pipeline.
    async fn retrieve(
        client: &Client,
        id: &str,
        api_key: Option<&str>,
    ) -> Result<Self, StripeError> {
        let mut object =
            StripeObject::construct(client, Some(Self::OBJECT_NAME), Some(id), api_key);
        object.refresh().await?;
        object.into_resource()
    }
}

/// Kinds that can be created.
#[allow(async_fn_in_trait)]
pub trait Creatable: ApiResource {
    /// Creates an object from `params`.
    ///
    /// The returned object is materialized, has no dirty fields, and is bound
    /// to the API key the request was made with.
    ///
    /// # Errors
    ///
    /// Returns [`StripeError::InvalidRequest`] if `params` is not an object,
    /// or any error from the request pipeline.
    async fn create(
        client: &Client,
        params: Value,
        api_key: Option<&str>,
    ) -> Result<Self, StripeError> {
        let params = to_params(params)?;
        let response = client
            .request(
                ResourceOperation::Create.http_method(),
                Self::ENDPOINT.base(),
                &params,
                api_key,
            )
            .await?;
        StripeObject::from_response(client, response)?.into_resource()
    }
}

/// Kinds that can be listed.
#[allow(async_fn_in_trait)]
pub trait Listable: ApiResource {
    /// Lists objects matching `filters`.
    ///
    /// The returned list remembers `filters`; see [`ListObject::all`].
    ///
    /// # Errors
    ///
    /// Returns [`StripeError::InvalidRequest`] if `filters` is not an
    /// object, or any error from the request pipeline.
    async fn all(
        client: &Client,
        filters: Option<Value>,
        api_key: Option<&str>,
    ) -> Result<ListObject<Self>, StripeError> {
        let filters = filters.map(to_params).transpose()?.unwrap_or_default();
        ListObject::fetch(client, Self::ENDPOINT.base(), filters, api_key).await
    }
}

/// Kinds whose changes can be saved.
#[allow(async_fn_in_trait)]
pub trait Savable: ApiResource {
    /// Sends the dirty fields as an update.
    ///
    /// The payload holds exactly the dirty fields. The response is merged
    /// into the object and the dirty set is cleared. With no dirty fields no
    /// request is made.
    ///
    /// # Errors
    ///
    /// Returns [`StripeError::InvalidRequest`] without a request if the object
    /// has no identifier or was deleted, or any error from the pipeline.
    async fn save(&mut self) -> Result<(), StripeError> {
        self.deref_mut().save_changes().await
    }
}

/// Kinds that can be deleted.
#[allow(async_fn_in_trait)]
pub trait Deletable: ApiResource {
    /// Deletes the object.
    ///
    /// Afterwards the object holds exactly `id` and `deleted: true`; reading
    /// any other field fails with [`StripeError::UnknownField`].
    ///
    /// # Errors
    ///
    /// Returns [`StripeError::InvalidRequest`] without a request if the object
    /// has no identifier or was already deleted, or any error from the
    /// pipeline.
    async fn delete(&mut self) -> Result<(), StripeError> {
        self.deref_mut().delete_remote(&Params::new()).await
    }
}
