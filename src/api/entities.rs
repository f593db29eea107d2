//! Typed views over normalized responses.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use super::resource::NormalizedResponse;

/// A single API resource: an id plus its attributes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Resource {
    /// Resource id, e.g. `pay_...`.
    pub id: Option<String>,
    /// Resource attributes as returned by the API.
    pub attributes: Map<String, Value>,
}

impl Resource {
    /// Builds a resource from a normalized response.
    ///
    /// Responses that are not single resources yield an empty resource.
    #[must_use]
    pub fn from_response(response: &NormalizedResponse) -> Self {
        Self {
            id: response.id().map(str::to_string),
            attributes: response.attributes().cloned().unwrap_or_default(),
        }
    }

    /// Returns one attribute.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    /// Deserializes the attributes into a typed entity.
    ///
    /// # Errors
    ///
    /// Returns the serde error if an attribute has an unexpected type.
    pub fn deserialize_attributes<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_value(Value::Object(self.attributes.clone()))
    }
}

impl From<NormalizedResponse> for Resource {
    fn from(response: NormalizedResponse) -> Self {
        Self::from_response(&response)
    }
}

/// One page of a list response.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Listing {
    /// True if more resources are available after this page.
    pub has_more: bool,
    /// The resources on this page, in API order.
    pub data: Vec<Resource>,
}

impl Listing {
    /// Builds a listing from a normalized list response.
    ///
    /// A missing `has_more` flag reads as `false`; a non-list response
    /// yields an empty page.
    #[must_use]
    pub fn from_response(response: &NormalizedResponse) -> Self {
        Self {
            has_more: response.has_more().unwrap_or(false),
            data: response
                .items()
                .iter()
                .map(Resource::from_response)
                .collect(),
        }
    }
}

/// A webhook endpoint registration.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Webhook {
    /// Webhook id (`hook_...`). Not part of the attributes.
    #[serde(skip)]
    pub id: Option<String>,
    /// True for live-mode webhooks.
    pub livemode: Option<bool>,
    /// Secret used to sign deliveries; pass it to the webhook verifier.
    pub secret_key: Option<String>,
    /// Delivery URL.
    pub url: Option<String>,
    /// `enabled` or `disabled`.
    pub status: Option<String>,
    /// Event types delivered to this endpoint.
    pub events: Option<Vec<String>>,
    /// Unix timestamp of creation.
    pub created_at: Option<i64>,
    /// Unix timestamp of last update.
    pub updated_at: Option<i64>,
}

impl Webhook {
    /// Reads a webhook from a resource returned by the webhooks service.
    ///
    /// # Errors
    ///
    /// Returns the serde error if an attribute has an unexpected type.
    pub fn from_resource(resource: &Resource) -> Result<Self, serde_json::Error> {
        let mut webhook: Self = resource.deserialize_attributes()?;
        webhook.id.clone_from(&resource.id);
        Ok(webhook)
    }
}
