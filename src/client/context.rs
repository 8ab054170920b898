//! API context
//!
//! Configuration

use std::collections::HashMap;
use std::env;

use url::Url;

use crate::errors::{Result, SDKError};

/// Default REST endpoint for the sandbox environment
pub const SANDBOX_ENDPOINT: &str = "https://api-m.sandbox.paypal.com";

/// Default REST endpoint for the live environment
pub const LIVE_ENDPOINT: &str = "https://api-m.paypal.com";

/// Target environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Sandbox environment (default)
    #[default]
    Sandbox,
    /// Live environment
    Live,
}

impl From<&str> for Mode {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "live" | "production" => Mode::Live,
            _ => Mode::Sandbox,
        }
    }
}

/// Credentials, endpoint configuration, and per-call overrides for REST
/// calls. Injected explicitly into [`crate::RestClient`]; there is no
/// process-wide default context.
#[derive(Debug, Clone)]
pub struct ApiContext {
    /// OAuth2 client id
    pub client_id: String,
    /// OAuth2 client secret
    pub client_secret: String,
    /// Environment
    pub mode: Mode,
    /// Base URL override (tests, proxies); `None` uses the mode default
    pub base_url: Option<String>,
    /// Request timeout (seconds)
    pub request_timeout: u64,
    /// Connection timeout (seconds)
    pub connect_timeout: u64,
    /// Extra headers attached to every call
    pub custom_headers: HashMap<String, String>,
    /// User agent
    pub user_agent: String,
}

impl Default for ApiContext {
    fn default() -> Self {
        Self {
            client_id: String::new(),
            client_secret: String::new(),
            mode: Mode::Sandbox,
            base_url: None,
            request_timeout: 30,
            connect_timeout: 10,
            custom_headers: HashMap::new(),
            user_agent: format!("paypal-webhooks-rs/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ApiContext {
    /// Create
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            ..Default::default()
        }
    }

    /// Configuration from `PAYPAL_*` environment variables.
    ///
    /// `PAYPAL_CLIENT_ID` and `PAYPAL_CLIENT_SECRET` are required;
    /// `PAYPAL_MODE`, `PAYPAL_BASE_URL` and `PAYPAL_TIMEOUT` are optional.
    pub fn from_env() -> Result<Self> {
        let client_id = env::var("PAYPAL_CLIENT_ID").map_err(|_| {
            SDKError::Config("PAYPAL_CLIENT_ID environment variable is required".to_string())
        })?;
        let client_secret = env::var("PAYPAL_CLIENT_SECRET").map_err(|_| {
            SDKError::Config("PAYPAL_CLIENT_SECRET environment variable is required".to_string())
        })?;

        let mut context = Self::new(client_id, client_secret);

        if let Ok(mode) = env::var("PAYPAL_MODE") {
            context.mode = Mode::from(mode.as_str());
        }

        if let Ok(base_url) = env::var("PAYPAL_BASE_URL") {
            context.base_url = Some(base_url);
        }

        if let Ok(timeout) = env::var("PAYPAL_TIMEOUT") {
            context.request_timeout = timeout.parse().unwrap_or(30);
        }

        Ok(context)
    }

    /// Settings
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Settings
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Settings
    pub fn with_timeout(mut self, timeout: u64) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Settings
    pub fn with_connect_timeout(mut self, timeout: u64) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Attach a header to every call made with this context
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.custom_headers.insert(name.into(), value.into());
        self
    }

    /// The effective base URL for this context
    pub fn endpoint(&self) -> &str {
        match &self.base_url {
            Some(base_url) => base_url,
            None => match self.mode {
                Mode::Sandbox => SANDBOX_ENDPOINT,
                Mode::Live => LIVE_ENDPOINT,
            },
        }
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.client_id.trim().is_empty() {
            return Err(SDKError::Config("client_id is required".to_string()));
        }
        if self.client_secret.trim().is_empty() {
            return Err(SDKError::Config("client_secret is required".to_string()));
        }
        Url::parse(self.endpoint())
            .map_err(|e| SDKError::Config(format!("Invalid base URL {}: {}", self.endpoint(), e)))?;
        Ok(())
    }
}
