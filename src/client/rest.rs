//! REST call executor
//!
//! One authenticated request/response cycle per call. Retries, backoff, and
//! rate limiting are deliberately absent from this layer; callers that want
//! resilience wrap these calls themselves.

use std::time::Duration;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue, USER_AGENT};
use reqwest::{Client, ClientBuilder, Method, Response};
use tracing::{debug, warn};

use crate::client::auth::TokenStore;
use crate::client::context::ApiContext;
use crate::errors::{Result, SDKError};

/// REST client bound to one [`ApiContext`].
///
/// Cloning is cheap: clones share the connection pool and the token cache,
/// so a clone-per-caller setup still fetches one token.
#[derive(Debug, Clone)]
pub struct RestClient {
    context: ApiContext,
    http_client: Client,
    tokens: TokenStore,
}

impl RestClient {
    /// Create
    pub fn new(context: ApiContext) -> Result<Self> {
        context.validate()?;

        let http_client = ClientBuilder::new()
            .timeout(Duration::from_secs(context.request_timeout))
            .connect_timeout(Duration::from_secs(context.connect_timeout))
            .build()
            .map_err(|e| SDKError::Config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            context,
            http_client,
            tokens: TokenStore::new(),
        })
    }

    /// Context this client was built from
    pub fn context(&self) -> &ApiContext {
        &self.context
    }

    /// Execute one authenticated REST call and return the raw response body.
    ///
    /// `payload` is sent verbatim as the request body when present and
    /// non-empty. `headers` are per-call overrides layered on top of the
    /// context headers. A non-2xx status fails with [`SDKError::Api`]
    /// carrying the status and unmodified body.
    pub async fn execute_call(
        &self,
        path: &str,
        method: Method,
        payload: Option<&str>,
        headers: Option<HeaderMap>,
    ) -> Result<String> {
        let url = format!(
            "{}/{}",
            self.context.endpoint().trim_end_matches('/'),
            path.trim_start_matches('/')
        );

        let token = self
            .tokens
            .access_token(&self.http_client, &self.context)
            .await?;

        let mut request_headers = self.build_headers(&token.token)?;
        if let Some(extra) = headers {
            request_headers.extend(extra);
        }

        debug!("{} {}", method, url);

        let mut request = self
            .http_client
            .request(method.clone(), &url)
            .headers(request_headers);
        if let Some(body) = payload {
            if !body.is_empty() {
                request = request.body(body.to_string());
            }
        }

        let response = request
            .send()
            .await
            .map_err(|e| SDKError::Network(format!("Request to {url} failed: {e}")))?;

        self.handle_response(response, &method, &url).await
    }

    /// GET with an empty body
    pub async fn get(&self, path: &str) -> Result<String> {
        self.execute_call(path, Method::GET, None, None).await
    }

    /// POST with a JSON payload
    pub async fn post(&self, path: &str, payload: &str) -> Result<String> {
        self.execute_call(path, Method::POST, Some(payload), None)
            .await
    }

    /// DELETE with an empty body
    pub async fn delete(&self, path: &str) -> Result<String> {
        self.execute_call(path, Method::DELETE, None, None).await
    }

    fn build_headers(&self, token: &str) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();

        // Authentication header
        let bearer = format!("Bearer {token}");
        headers.insert(
            AUTHORIZATION,
            bearer.parse().map_err(|_| {
                SDKError::Auth("Access token is not a valid header value".to_string())
            })?,
        );

        // Content type
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        // User agent
        headers.insert(
            USER_AGENT,
            self.context
                .user_agent
                .parse()
                .map_err(|_| SDKError::Config("Invalid user agent".to_string()))?,
        );

        // Custom headers
        for (key, value) in &self.context.custom_headers {
            if let (Ok(header_name), Ok(header_value)) =
                (key.parse::<HeaderName>(), value.parse::<HeaderValue>())
            {
                headers.insert(header_name, header_value);
            }
        }

        Ok(headers)
    }

    /// Handle
    async fn handle_response(&self, response: Response, method: &Method, url: &str) -> Result<String> {
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| SDKError::Network(format!("Failed to read response: {e}")))?;

        if !(200..300).contains(&status) {
            warn!("{} {} returned {}", method, url, status);
            return Err(SDKError::Api { status, body });
        }

        Ok(body)
    }
}
