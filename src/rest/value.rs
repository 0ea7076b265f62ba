//! Field values held by resource objects.
//!
//! Fields are discovered at runtime, so every field is stored as a
//! [`FieldValue`]: a scalar, a nested resource object, an untagged map, or a
//! list. Nested values are built recursively from the server's JSON by
//! [`StripeObject::construct_from`](crate::rest::StripeObject::construct_from).

use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Number, Value};

use crate::clients::Client;
use crate::rest::StripeObject;

/// The value of a single field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// JSON `null`.
    Null,
    /// A boolean.
    Bool(bool),
    /// An integer or floating point number.
    Number(Number),
    /// A string.
    String(String),
    /// A nested object carrying an `object` kind tag.
    Object(Box<StripeObject>),
    /// A nested structure without a kind tag, in insertion order.
    Map(IndexMap<String, FieldValue>),
    /// An ordered list of values.
    List(Vec<FieldValue>),
}

/// Shared `null`, returned for absent identifiers.
pub(crate) static NULL: FieldValue = FieldValue::Null;

impl FieldValue {
    /// Builds a field value from server JSON.
    ///
    /// Objects with a string `object` field become [`FieldValue::Object`]
    /// and inherit `api_key`; other objects become [`FieldValue::Map`].
    /// Arrays and maps are converted element by element.
    pub(crate) fn from_json(client: &Client, value: Value, api_key: Option<&str>) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => Self::Number(n),
            Value::String(s) => Self::String(s),
            Value::Array(items) => Self::List(
                items
                    .into_iter()
                    .map(|item| Self::from_json(client, item, api_key))
                    .collect(),
            ),
            Value::Object(map) => {
                if map.get("object").is_some_and(Value::is_string) {
                    Self::Object(Box::new(StripeObject::from_map(client, map, api_key)))
                } else {
                    Self::Map(
                        map.into_iter()
                            .map(|(key, item)| (key, Self::from_json(client, item, api_key)))
                            .collect(),
                    )
                }
            }
        }
    }

    /// Converts the value back to JSON.
    #[must_use]
    pub fn to_json(&self) -> Value {
        match self {
            Self::Null => Value::Null,
            Self::Bool(b) => Value::Bool(*b),
            Self::Number(n) => Value::Number(n.clone()),
            Self::String(s) => Value::String(s.clone()),
            Self::Object(object) => object.to_json(),
            Self::Map(map) => Value::Object(
                map.iter()
                    .map(|(key, item)| (key.clone(), item.to_json()))
                    .collect(),
            ),
            Self::List(items) => Value::Array(items.iter().map(Self::to_json).collect()),
        }
    }

    /// Returns `true` for [`FieldValue::Null`].
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the string, if this is a string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Returns the integer, if this is a number representable as `i64`.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    /// Returns the number as `f64`.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => n.as_f64(),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the nested resource object.
    #[must_use]
    pub fn as_object(&self) -> Option<&StripeObject> {
        match self {
            Self::Object(object) => Some(object.as_ref()),
            _ => None,
        }
    }

    /// Returns the nested resource object mutably.
    pub fn as_object_mut(&mut self) -> Option<&mut StripeObject> {
        match self {
            Self::Object(object) => Some(object.as_mut()),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_map(&self) -> Option<&IndexMap<String, Self>> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_list(&self) -> Option<&[Self]> {
        match self {
            Self::List(items) => Some(items.as_slice()),
            _ => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Number(value.into())
    }
}

impl From<u64> for FieldValue {
    fn from(value: u64) -> Self {
        Self::Number(value.into())
    }
}

impl From<StripeObject> for FieldValue {
    fn from(value: StripeObject) -> Self {
        Self::Object(Box::new(value))
    }
}

impl<T: Into<Self>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// Converts plain JSON. Tagged objects are kept as untagged maps because
/// no client is available to bind them to.
impl From<Value> for FieldValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => Self::Number(n),
            Value::String(s) => Self::String(s),
            Value::Array(items) => Self::List(items.into_iter().map(Self::from).collect()),
            Value::Object(map) => Self::Map(
                map.into_iter()
                    .map(|(key, item)| (key, Self::from(item)))
                    .collect(),
            ),
        }
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Number(n) => n.serialize(serializer),
            Self::String(s) => serializer.serialize_str(s),
            Self::Object(object) => object.serialize(serializer),
            Self::Map(map) => {
                let mut state = serializer.serialize_map(Some(map.len()))?;
                for (key, item) in map {
                    state.serialize_entry(key, item)?;
                }
                state.end()
            }
            Self::List(items) => items.serialize(serializer),
        }
    }
}
