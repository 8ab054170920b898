//! Webhook event-type list container

use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::resources::link_description::LinkDescription;
use crate::resources::webhook_event_type::WebhookEventType;

/// Ordered sequence of event-types plus request-related link metadata, as
/// returned by the list endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookEventList {
    /// Event-type entries in server order
    #[serde(default)]
    pub event_types: Vec<WebhookEventType>,
    /// An array of request-related HATEOAS links
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<LinkDescription>>,
}

impl WebhookEventList {
    /// Deserialize a raw response body into a list
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.event_types.len()
    }

    /// Whether the list has no entries
    pub fn is_empty(&self) -> bool {
        self.event_types.is_empty()
    }
}
