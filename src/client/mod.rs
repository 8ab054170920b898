//! Shared SDK layer
//!
//! Everything a resource model needs to talk to the API: credentials and
//! endpoint configuration ([`ApiContext`]), OAuth2 token handling
//! ([`TokenStore`]), and the REST call executor ([`RestClient`]). Resource
//! models stay thin; serialization, auth, and transport live here once.

pub mod auth;
pub mod context;
pub mod rest;

// Re-exports for convenience
pub use auth::{AccessToken, TokenStore};
pub use context::{ApiContext, Mode};
pub use rest::RestClient;
