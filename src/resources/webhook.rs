//! Webhook resource
//!
//! A webhook is a server-side subscription that pushes event notifications
//! to a caller-specified URL. This model owns the id consumed by
//! [`crate::WebhookEventType::subscribed_event_types`].

use serde::{Deserialize, Serialize};

use crate::client::rest::RestClient;
use crate::errors::Result;
use crate::resources::link_description::LinkDescription;
use crate::resources::webhook_event_type::WebhookEventType;
use crate::utils::validation::require_non_empty;

/// A webhook subscription
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Webhook {
    /// Server-assigned webhook id; empty until created
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    /// The URL notification messages are POSTed to
    pub url: String,
    /// The event-types this webhook subscribes to
    #[serde(default)]
    pub event_types: Vec<WebhookEventType>,
    /// An array of request-related HATEOAS links
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<LinkDescription>>,
}

/// List of webhooks registered for the app
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookList {
    /// Webhook entries
    #[serde(default)]
    pub webhooks: Vec<Webhook>,
    /// An array of request-related HATEOAS links
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<LinkDescription>>,
}

impl Webhook {
    /// Create
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// Subscribe this webhook to an event-type
    pub fn with_event_type(mut self, event_type: WebhookEventType) -> Self {
        self.event_types.push(event_type);
        self
    }

    /// Creates the webhook subscription.
    pub async fn create(client: &RestClient, webhook: &Webhook) -> Result<Webhook> {
        require_non_empty(&webhook.url, "url")?;

        let payload = serde_json::to_string(webhook)?;
        let json = client.post("/v1/notifications/webhooks", &payload).await?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Lists the webhooks registered for the app.
    pub async fn list(client: &RestClient) -> Result<WebhookList> {
        let json = client.get("/v1/notifications/webhooks").await?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Shows details for a webhook.
    pub async fn get(client: &RestClient, webhook_id: &str) -> Result<Webhook> {
        require_non_empty(webhook_id, "webhook_id")?;

        let json = client
            .get(&format!("/v1/notifications/webhooks/{webhook_id}"))
            .await?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Deletes a webhook.
    pub async fn delete(client: &RestClient, webhook_id: &str) -> Result<()> {
        require_non_empty(webhook_id, "webhook_id")?;

        client
            .delete(&format!("/v1/notifications/webhooks/{webhook_id}"))
            .await?;
        Ok(())
    }
}
