//! # paypal-webhooks-rs
//!
//! An async Rust client SDK for the PayPal REST Webhooks API.
//!
//! ## Features
//!
//! - **Resource models**: plain typed records mapping 1:1 to the wire
//!   representation of each API entity
//! - **Shared transport**: one authenticated REST executor reused by every
//!   resource model
//! - **OAuth2 client credentials**: token acquisition and caching handled
//!   behind the client
//! - **Fail-fast validation**: bad arguments are rejected before a request
//!   is ever sent
//! - **Sandbox and live**: environment selection via [`Mode`], overridable
//!   base URL for testing
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use paypal_webhooks_rs::{ApiContext, RestClient, WebhookEventType};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Reads PAYPAL_CLIENT_ID / PAYPAL_CLIENT_SECRET
//!     let context = ApiContext::from_env()?;
//!     let client = RestClient::new(context)?;
//!
//!     // Master catalog of event-types the platform can emit
//!     let catalog = WebhookEventType::available_event_types(&client).await?;
//!     for event_type in &catalog.event_types {
//!         println!("{}: {}", event_type.name, event_type.description);
//!     }
//!
//!     // Event-types a specific webhook subscribes to
//!     let subscribed =
//!         WebhookEventType::subscribed_event_types(&client, "WH-8PT597110X687430LKGECATA")
//!             .await?;
//!     println!("{} subscribed event-types", subscribed.len());
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod errors;
pub mod resources;
pub mod utils;

// Re-exports for convenience
pub use client::{ApiContext, Mode, RestClient};
pub use errors::{Result, SDKError};
pub use resources::{LinkDescription, Webhook, WebhookEventList, WebhookEventType, WebhookList};

/// SDK version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the SDK with default logging
pub fn init() {
    tracing_subscriber::fmt::init();
}
