//! Webhook event-type resource
//!
//! Contains the information for a webhooks event-type.

use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::client::rest::RestClient;
use crate::errors::Result;
use crate::resources::webhook_event_list::WebhookEventList;
use crate::utils::validation::require_non_empty;

/// A named category of platform event that a webhook can subscribe to
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookEventType {
    /// Unique event-type name, e.g. `PAYMENT.SALE.COMPLETED`
    pub name: String,
    /// Human readable description of the event-type
    #[serde(default)]
    pub description: String,
}

impl WebhookEventType {
    /// Create
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
        }
    }

    /// Unique event-type name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Human readable description of the event-type
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Settings
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Settings
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Retrieves the list of event-types subscribed by the given webhook.
    ///
    /// Fails with [`crate::SDKError::InvalidArgument`] before any network
    /// call when `webhook_id` is empty. Transport, HTTP, and
    /// deserialization errors propagate unchanged.
    pub async fn subscribed_event_types(
        client: &RestClient,
        webhook_id: &str,
    ) -> Result<WebhookEventList> {
        require_non_empty(webhook_id, "webhook_id")?;

        let json = client
            .execute_call(
                &format!("/v1/notifications/webhooks/{webhook_id}/event-types"),
                Method::GET,
                None,
                None,
            )
            .await?;

        WebhookEventList::from_json(&json)
    }

    /// Retrieves the master list of available event-types that any webhook
    /// can subscribe to.
    pub async fn available_event_types(client: &RestClient) -> Result<WebhookEventList> {
        let json = client
            .execute_call(
                "/v1/notifications/webhooks-event-types",
                Method::GET,
                None,
                None,
            )
            .await?;

        WebhookEventList::from_json(&json)
    }
}
