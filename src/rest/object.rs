//! The resource object model.
//!
//! A [`StripeObject`] is the client-side representation of one remote entity.
//! It stores fields in a generic field store and tracks three things:
//!
//! - **State**: whether the object is identity-only (an id and nothing else),
//!   materialized, or deleted
//! - **Dirty fields**: the names of fields set locally since the last fetch
//!   or save, in the order they were first set
//! - **Bound credential**: the API key used for the request the object came
//!   from, reused by every follow-up call on the object
//!
//! # Lazy Loading
//!
//! Constructing an object never performs I/O. Reading any field other than
//! `id` from an identity-only object fetches the object first; all reads go
//! through the same guard. Fields set before the fetch keep their local
//! values. Reading `id` never fetches.
//!
//! # Example
//!
//! ```rust,ignore
//! use stripe_api::rest::StripeObject;
//!
//! let mut customer = StripeObject::construct(&client, Some("customer"), Some("cus_123"), None);
//! assert!(!customer.is_loaded());
//!
//! // Triggers GET /v1/customers/cus_123
//! let email = customer.get("email").await?.as_str().map(str::to_string);
//!
//! customer.set("description", "VIP")?;
//! assert_eq!(customer.dirty_fields(), ["description"]);
//! ```

use std::fmt;

use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};

use crate::clients::{ApiResponse, Client, ErrorDetails, Params, StripeError};
use crate::rest::path::{Endpoint, ResourceOperation};
use crate::rest::resource::ApiResource;
use crate::rest::resources::endpoint_for;
use crate::rest::value::{FieldValue, NULL};

/// Lifecycle state of a [`StripeObject`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectState {
    /// Only the identifier is known; the next field read fetches the object.
    IdentityOnly,
    /// Fields were populated from a response or constructed locally.
    Materialized,
    /// The object was deleted. Only `id` and `deleted` remain.
    Deleted,
}

/// How a response body is folded into the field store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Apply {
    /// Replace every value and clear the dirty set.
    Replace,
    /// Replace every value but keep local edits that were not sent.
    KeepUnsaved,
    /// Overlay the response on the current values and clear the dirty set.
    Merge,
}

/// A client-side resource object.
///
/// See the [module documentation](self) for the lifecycle rules.
#[derive(Clone)]
pub struct StripeObject {
    client: Client,
    kind: Option<String>,
    endpoint: Option<Endpoint>,
    values: IndexMap<String, FieldValue>,
    unsaved: Vec<String>,
    state: ObjectState,
    api_key: Option<String>,
}

impl StripeObject {
    /// Creates an identity-only object. No request is made.
    ///
    /// `kind` selects the endpoint for registered resource kinds such as
    /// `"customer"`. `api_key` is bound to the object and used for every
    /// call made through it.
    #[must_use]
    pub fn construct(
        client: &Client,
        kind: Option<&str>,
        id: Option<&str>,
        api_key: Option<&str>,
    ) -> Self {
        let mut values = IndexMap::new();
        if let Some(id) = id {
            values.insert("id".to_string(), FieldValue::from(id));
        }

        Self {
            client: client.clone(),
            kind: kind.map(str::to_string),
            endpoint: kind.and_then(endpoint_for),
            values,
            unsaved: Vec::new(),
            state: ObjectState::IdentityOnly,
            api_key: api_key.map(str::to_string),
        }
    }

    /// Creates a materialized object from raw JSON. No request is made.
    ///
    /// Nested objects carrying an `object` tag are instantiated recursively
    /// and bound to the same `api_key`. The new object has no dirty fields.
    ///
    /// # Errors
    ///
    /// Returns [`StripeError::Api`] if `value` is not a JSON object.
    pub fn construct_from(
        client: &Client,
        value: Value,
        api_key: Option<&str>,
    ) -> Result<Self, StripeError> {
        match value {
            Value::Object(map) => Ok(Self::from_map(client, map, api_key)),
            other => Err(unexpected_response(&other)),
        }
    }

    pub(crate) fn from_map(client: &Client, map: Map<String, Value>, api_key: Option<&str>) -> Self {
        let kind = map.get("object").and_then(Value::as_str).map(str::to_string);
        let values = map
            .into_iter()
            .map(|(key, value)| (key, FieldValue::from_json(client, value, api_key)))
            .collect();

        Self {
            client: client.clone(),
            endpoint: kind.as_deref().and_then(endpoint_for),
            kind,
            values,
            unsaved: Vec::new(),
            state: ObjectState::Materialized,
            api_key: api_key.map(str::to_string),
        }
    }

    pub(crate) fn from_response(client: &Client, response: ApiResponse) -> Result<Self, StripeError> {
        Self::construct_from(client, response.json, Some(response.api_key.as_ref()))
    }

    /// Returns the identifier, if any.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.values.get("id").and_then(FieldValue::as_str)
    }

    /// Returns the kind tag (the `object` field), if known.
    #[must_use]
    pub fn kind(&self) -> Option<&str> {
        self.kind.as_deref()
    }

    /// Returns the endpoint the object is fetched from and saved to.
    #[must_use]
    pub const fn endpoint(&self) -> Option<Endpoint> {
        self.endpoint
    }

    /// Returns the API key bound to this object.
    #[must_use]
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    #[must_use]
    pub const fn client(&self) -> &Client {
        &self.client
    }

    #[must_use]
    pub const fn state(&self) -> ObjectState {
        self.state
    }

    /// Returns `false` while the object is identity-only.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.state != ObjectState::IdentityOnly
    }

    #[must_use]
    pub fn is_deleted(&self) -> bool {
        self.state == ObjectState::Deleted
    }

    /// Returns the fields set locally since the last fetch or save, in the
    /// order they were first set.
    #[must_use]
    pub fn dirty_fields(&self) -> &[String] {
        &self.unsaved
    }

    #[must_use]
    pub fn is_dirty(&self) -> bool {
        !self.unsaved.is_empty()
    }

    /// Returns the names of the fields currently held. Never fetches.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Returns the field store. Never fetches.
    #[must_use]
    pub const fn values(&self) -> &IndexMap<String, FieldValue> {
        &self.values
    }

    /// Returns the fields as a JSON object. Never fetches.
    #[must_use]
    pub fn to_json(&self) -> Value {
        Value::Object(
            self.values
                .iter()
                .map(|(key, value)| (key.clone(), value.to_json()))
                .collect(),
        )
    }

    /// Reads a field.
    ///
    /// If the object is identity-only, it is fetched first, even when the
    /// field was set locally. Reading `id` never fetches and yields
    /// [`FieldValue::Null`] when there is no identifier.
    ///
    /// # Errors
    ///
    /// - [`StripeError::InvalidRequest`] if a fetch is needed but the object
    ///   has no identifier (no request is made)
    /// - any error from the fetch
    /// - [`StripeError::UnknownField`] if the field does not exist
    pub async fn get(&mut self, key: &str) -> Result<&FieldValue, StripeError> {
        if key == "id" {
            return Ok(self.values.get("id").unwrap_or(&NULL));
        }
        self.ensure_loaded().await?;
        self.field(key)
    }

    /// Sets a field locally and marks it dirty. No request is made.
    ///
    /// Setting `id` changes the identity and is not tracked as a change.
    ///
    /// # Errors
    ///
    /// Returns [`StripeError::InvalidRequest`] if the object was deleted; the
    /// field store is left untouched.
    pub fn set(&mut self, key: &str, value: impl Into<FieldValue>) -> Result<(), StripeError> {
        self.ensure_not_deleted()?;
        self.values.insert(key.to_string(), value.into());
        if key != "id" && !self.unsaved.iter().any(|field| field == key) {
            self.unsaved.push(key.to_string());
        }
        Ok(())
    }

    /// Fetches the object and replaces all fields with the response.
    ///
    /// The dirty set is cleared. Always issues a request.
    ///
    /// # Errors
    ///
    /// Returns [`StripeError::InvalidRequest`] without a request if the object
    /// has no identifier, has no endpoint, or was deleted.
    pub async fn refresh(&mut self) -> Result<(), StripeError> {
        self.fetch(Apply::Replace).await
    }

    /// The single guard all field reads go through.
    async fn ensure_loaded(&mut self) -> Result<(), StripeError> {
        if self.state == ObjectState::IdentityOnly {
            tracing::debug!(kind = ?self.kind, id = ?self.id(), "Lazily loading object");
            self.fetch(Apply::KeepUnsaved).await?;
        }
        Ok(())
    }

    async fn fetch(&mut self, apply: Apply) -> Result<(), StripeError> {
        let path = self.instance_path()?;
        let response = self
            .send(ResourceOperation::Retrieve, &path, &Params::new(), None)
            .await?;
        self.apply_response(response, apply)
    }

    /// Sends the dirty fields as an update and merges the response.
    ///
    /// With no dirty fields nothing is sent.
    pub(crate) async fn save_changes(&mut self) -> Result<(), StripeError> {
        if self.unsaved.is_empty() {
            tracing::debug!(kind = ?self.kind, id = ?self.id(), "No changes to save");
            return Ok(());
        }

        let path = self.instance_path()?;
        let params: Params = self
            .unsaved
            .iter()
            .filter_map(|key| self.values.get(key).map(|value| (key.clone(), value.to_json())))
            .collect();

        let response = self
            .send(ResourceOperation::Update, &path, &params, None)
            .await?;
        self.apply_response(response, Apply::Merge)
    }

    /// Deletes the remote object. Only `id` and `deleted` remain afterwards.
    pub(crate) async fn delete_remote(&mut self, params: &Params) -> Result<(), StripeError> {
        let path = self.instance_path()?;
        let response = self
            .send(ResourceOperation::Delete, &path, params, None)
            .await?;

        let mut values = IndexMap::new();
        if let Some(id) = self.values.shift_remove("id") {
            values.insert("id".to_string(), id);
        }
        values.insert("deleted".to_string(), FieldValue::Bool(true));

        self.values = values;
        self.unsaved.clear();
        self.state = ObjectState::Deleted;
        self.api_key = Some(response.api_key.as_ref().to_string());
        Ok(())
    }

    /// Posts to an instance action such as `refund` and replaces all fields
    /// with the response.
    pub(crate) async fn post_action(
        &mut self,
        action: &str,
        params: &Params,
        api_key: Option<&str>,
    ) -> Result<(), StripeError> {
        self.ensure_not_deleted()?;
        let path = self.require_endpoint()?.action_path(self.id(), action)?;
        let response = self
            .send(ResourceOperation::Action, &path, params, api_key)
            .await?;
        self.apply_response(response, Apply::Replace)
    }

    /// Converts into a typed resource.
    ///
    /// # Errors
    ///
    /// Returns [`StripeError::UnexpectedObject`] if the kind tag does not
    /// match `T`.
    pub fn into_resource<T: ApiResource>(mut self) -> Result<T, StripeError> {
        if let Some(kind) = self.kind.as_deref() {
            if kind != T::OBJECT_NAME {
                return Err(StripeError::UnexpectedObject {
                    expected: T::OBJECT_NAME,
                    found: kind.to_string(),
                });
            }
        }
        self.kind = Some(T::OBJECT_NAME.to_string());
        self.endpoint = Some(T::ENDPOINT);
        Ok(T::from_object(self))
    }

    async fn send(
        &self,
        operation: ResourceOperation,
        path: &str,
        params: &Params,
        api_key: Option<&str>,
    ) -> Result<ApiResponse, StripeError> {
        let api_key = api_key.or(self.api_key.as_deref());
        self.client
            .request(operation.http_method(), path, params, api_key)
            .await
    }

    fn apply_response(&mut self, response: ApiResponse, apply: Apply) -> Result<(), StripeError> {
        let ApiResponse { json, api_key } = response;
        let Value::Object(map) = json else {
            return Err(unexpected_response(&json));
        };

        let api_key = api_key.as_ref().to_string();
        let fresh: IndexMap<String, FieldValue> = map
            .into_iter()
            .map(|(key, value)| (key, FieldValue::from_json(&self.client, value, Some(&api_key))))
            .collect();

        if self.kind.is_none() {
            self.kind = fresh.get("object").and_then(FieldValue::as_str).map(str::to_string);
            self.endpoint = self.endpoint.or_else(|| self.kind.as_deref().and_then(endpoint_for));
        }

        match apply {
            Apply::Replace => {
                self.values = fresh;
                self.unsaved.clear();
            }
            Apply::KeepUnsaved => {
                let pending: Vec<(String, FieldValue)> = self
                    .unsaved
                    .iter()
                    .filter_map(|key| self.values.get(key).map(|value| (key.clone(), value.clone())))
                    .collect();
                self.values = fresh;
                self.values.extend(pending);
            }
            Apply::Merge => {
                self.values.extend(fresh);
                self.unsaved.clear();
            }
        }

        self.state = ObjectState::Materialized;
        self.api_key = Some(api_key);
        Ok(())
    }

    fn field(&self, key: &str) -> Result<&FieldValue, StripeError> {
        self.values.get(key).ok_or_else(|| StripeError::UnknownField {
            field: key.to_string(),
            object: self.kind.clone().unwrap_or_else(|| "object".to_string()),
        })
    }

    fn require_endpoint(&self) -> Result<Endpoint, StripeError> {
        self.endpoint.ok_or_else(|| {
            StripeError::invalid_request(format!(
                "Could not determine which URL to request: {} has no URL",
                self.kind.as_deref().unwrap_or("object")
            ))
        })
    }

    fn instance_path(&self) -> Result<String, StripeError> {
        self.ensure_not_deleted()?;
        self.require_endpoint()?.instance_path(self.id())
    }

    fn ensure_not_deleted(&self) -> Result<(), StripeError> {
        if self.state == ObjectState::Deleted {
            return Err(StripeError::invalid_request(format!(
                "{} {} has been deleted",
                self.kind.as_deref().unwrap_or("object"),
                self.id().unwrap_or_default()
            )));
        }
        Ok(())
    }
}

fn unexpected_response(json: &Value) -> StripeError {
    StripeError::Api(ErrorDetails::local(format!(
        "Invalid response object from API: {json}"
    )))
}

impl PartialEq for StripeObject {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
            && self.state == other.state
            && self.values == other.values
            && self.unsaved == other.unsaved
    }
}

impl fmt::Debug for StripeObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StripeObject")
            .field("kind", &self.kind)
            .field("state", &self.state)
            .field("values", &self.values)
            .field("unsaved", &self.unsaved)
            .field("api_key", &self.api_key.as_ref().map(|_| "*****"))
            .finish_non_exhaustive()
    }
}

impl Serialize for StripeObject {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_map(Some(self.values.len()))?;
        for (key, value) in &self.values {
            state.serialize_entry(key, value)?;
        }
        state.end()
    }
}

// Verify StripeObject is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StripeObject>();
    assert_send_sync::<FieldValue>();
};
