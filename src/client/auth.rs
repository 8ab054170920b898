//! OAuth2 client-credentials authentication
//!
//! The API issues short-lived bearer tokens against the client id/secret
//! pair. Tokens are cached and reused until shortly before expiry; there is
//! no background refresh, the next call after expiry pays for the fetch.

use std::sync::Arc;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;
use tokio::sync::RwLock;
use tracing::debug;

use crate::client::context::ApiContext;
use crate::errors::{Result, SDKError};

/// Slack subtracted from the reported lifetime (seconds)
const EXPIRY_MARGIN_SECS: i64 = 60;

/// OAuth2 token with expiration
#[derive(Debug, Clone)]
pub struct AccessToken {
    /// Bearer token value
    pub token: String,
    /// Token type as reported by the server, normally `Bearer`
    pub token_type: String,
    /// Absolute expiry instant
    pub expires_at: DateTime<Utc>,
}

impl AccessToken {
    /// Whether the token is expired or about to expire
    pub fn is_expired(&self) -> bool {
        Utc::now() + Duration::seconds(EXPIRY_MARGIN_SECS) >= self.expires_at
    }
}

/// Wire shape of the token endpoint response
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    token_type: String,
    expires_in: i64,
}

/// Cached token store, shared between clones of a client
#[derive(Debug, Clone, Default)]
pub struct TokenStore {
    cached: Arc<RwLock<Option<AccessToken>>>,
}

impl TokenStore {
    /// Create
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a valid bearer token, fetching a fresh one when the cache is
    /// empty or expired.
    pub async fn access_token(
        &self,
        http_client: &reqwest::Client,
        context: &ApiContext,
    ) -> Result<AccessToken> {
        {
            let cached = self.cached.read().await;
            if let Some(token) = cached.as_ref() {
                if !token.is_expired() {
                    return Ok(token.clone());
                }
            }
        }

        let mut cached = self.cached.write().await;
        // Another task may have refreshed while we waited for the lock
        if let Some(token) = cached.as_ref() {
            if !token.is_expired() {
                return Ok(token.clone());
            }
        }

        let token = fetch_token(http_client, context).await?;
        *cached = Some(token.clone());
        Ok(token)
    }

    /// Drop the cached token, forcing a fetch on next use
    pub async fn invalidate(&self) {
        *self.cached.write().await = None;
    }
}

/// Request a fresh token from `/v1/oauth2/token`
async fn fetch_token(http_client: &reqwest::Client, context: &ApiContext) -> Result<AccessToken> {
    let url = format!("{}/v1/oauth2/token", context.endpoint().trim_end_matches('/'));
    let credentials = BASE64.encode(format!("{}:{}", context.client_id, context.client_secret));

    debug!("Requesting access token from {}", url);

    let response = http_client
        .post(&url)
        .header("Authorization", format!("Basic {credentials}"))
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body("grant_type=client_credentials")
        .send()
        .await
        .map_err(|e| SDKError::Network(format!("Token request failed: {e}")))?;

    let status = response.status().as_u16();
    let body = response
        .text()
        .await
        .map_err(|e| SDKError::Network(format!("Failed to read token response: {e}")))?;

    if !(200..300).contains(&status) {
        return Err(SDKError::Auth(format!(
            "Token request rejected ({status}): {body}"
        )));
    }

    let parsed: TokenResponse = serde_json::from_str(&body)?;

    Ok(AccessToken {
        token: parsed.access_token,
        token_type: parsed.token_type,
        expires_at: Utc::now() + Duration::seconds(parsed.expires_in),
    })
}
