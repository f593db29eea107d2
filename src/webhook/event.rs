//! Events delivered by webhooks.

use serde_json::Value;

use crate::api::NormalizedResponse;

/// A webhook event, e.g. `payment.paid` or `source.chargeable`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Event {
    /// Event id (`evt_...`).
    pub id: Option<String>,
    /// Event type, from `attributes.type`.
    pub event_type: Option<String>,
    /// The resource the event is about, from `attributes.data`.
    ///
    /// Its shape depends on the event type, so it is kept as raw JSON.
    pub resource: Option<Value>,
}

impl Event {
    /// Builds an event from a normalized event payload.
    #[must_use]
    pub fn from_response(response: &NormalizedResponse) -> Self {
        Self {
            id: response.id().map(str::to_string),
            event_type: response
                .attribute("type")
                .and_then(Value::as_str)
                .map(str::to_string),
            resource: response.attribute("data").filter(|v| !v.is_null()).cloned(),
        }
    }

    /// Returns the nested resource normalized like an API response.
    #[must_use]
    pub fn resource_view(&self) -> Option<NormalizedResponse> {
        self.resource.clone().map(NormalizedResponse::from_value)
    }
}
