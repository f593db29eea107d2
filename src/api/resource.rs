//! Response normalization.
//!
//! The API answers in two styles: an envelope that wraps the resource under
//! a `data` key, and a bare object that is the resource itself. List
//! endpoints wrap an array under `data` next to a `has_more` flag.
//! [`NormalizedResponse`] turns all of them into one view.

use serde_json::{Map, Value};

/// Which shape a decoded payload turned out to have.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseShape {
    /// A single resource: `id` and `attributes` hoisted to the top level.
    Single {
        /// The resource id, if the payload had a string `id`.
        id: Option<String>,
        /// The resource attributes; empty when the payload held `null`.
        attributes: Map<String, Value>,
    },
    /// A list of resources.
    List {
        /// The continuation flag, present only when the payload had `has_more`.
        has_more: Option<bool>,
    },
    /// Anything else (error envelopes, acknowledgements), left untouched.
    PassThrough,
}

/// A uniform view over single-resource, list and other JSON responses.
///
/// Built once from a decoded payload and never mutated afterwards.
///
/// # Example
///
/// ```
/// use paymongo::api::NormalizedResponse;
/// use serde_json::json;
///
/// let enveloped = NormalizedResponse::from_value(json!({
///     "data": {"id": "pay_1", "attributes": {"amount": 10000}}
/// }));
/// let bare = NormalizedResponse::from_value(json!({
///     "id": "pay_1", "attributes": {"amount": 10000}
/// }));
///
/// assert_eq!(enveloped.id(), Some("pay_1"));
/// assert_eq!(enveloped.id(), bare.id());
/// assert_eq!(enveloped.attributes(), bare.attributes());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedResponse {
    payload: Value,
    shape: ResponseShape,
}

impl NormalizedResponse {
    /// Normalizes a decoded JSON payload.
    ///
    /// A top-level `data` key (with a non-null value) selects the working
    /// payload; otherwise the whole document is the working payload. The
    /// working payload is then classified:
    /// - an object with an `attributes` key is a single resource
    /// - an array is a list, with `has_more` read from the original document
    /// - anything else passes through unchanged
    #[must_use]
    pub fn from_value(decoded: Value) -> Self {
        let has_more = decoded.get("has_more").map(is_truthy_flag);

        let payload = match decoded {
            Value::Object(mut top) => match top.remove("data") {
                Some(data) if !data.is_null() => data,
                Some(data) => {
                    top.insert("data".to_string(), data);
                    Value::Object(top)
                }
                None => Value::Object(top),
            },
            other => other,
        };

        let shape = match &payload {
            Value::Object(object) if object.contains_key("attributes") => ResponseShape::Single {
                id: object.get("id").and_then(Value::as_str).map(str::to_string),
                attributes: match object.get("attributes") {
                    Some(Value::Object(attributes)) => attributes.clone(),
                    _ => Map::new(),
                },
            },
            Value::Array(_) => ResponseShape::List { has_more },
            _ => ResponseShape::PassThrough,
        };

        Self { payload, shape }
    }

    /// Returns the working payload: the `data` value or the whole document.
    #[must_use]
    pub const fn payload(&self) -> &Value {
        &self.payload
    }

    /// Consumes the view and returns the working payload.
    #[must_use]
    pub fn into_payload(self) -> Value {
        self.payload
    }

    /// Returns the detected shape.
    #[must_use]
    pub const fn shape(&self) -> &ResponseShape {
        &self.shape
    }

    /// Returns the resource id for single-resource responses.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        match &self.shape {
            ResponseShape::Single { id, .. } => id.as_deref(),
            _ => None,
        }
    }

    /// Returns the hoisted attributes for single-resource responses.
    #[must_use]
    pub const fn attributes(&self) -> Option<&Map<String, Value>> {
        match &self.shape {
            ResponseShape::Single { attributes, .. } => Some(attributes),
            _ => None,
        }
    }

    /// Returns one attribute of a single-resource response.
    #[must_use]
    pub fn attribute(&self, key: &str) -> Option<&Value> {
        self.attributes().and_then(|attributes| attributes.get(key))
    }

    /// Returns the continuation flag for list responses.
    #[must_use]
    pub const fn has_more(&self) -> Option<bool> {
        match self.shape {
            ResponseShape::List { has_more } => has_more,
            _ => None,
        }
    }

    /// Returns true if this is a list response.
    #[must_use]
    pub const fn is_list(&self) -> bool {
        matches!(self.shape, ResponseShape::List { .. })
    }

    /// Normalizes every row of a list response, in order.
    ///
    /// Returns an empty vector for non-list responses.
    #[must_use]
    pub fn items(&self) -> Vec<Self> {
        match &self.payload {
            Value::Array(rows) if self.is_list() => {
                rows.iter().cloned().map(Self::from_value).collect()
            }
            _ => Vec::new(),
        }
    }
}

/// The API encodes `has_more` as either `true` or `1`; nothing else counts.
pub(crate) fn is_truthy_flag(value: &Value) -> bool {
    value.as_bool() == Some(true) || value.as_i64() == Some(1)
}
