//! REST access layer for the TubeMusic API
//!
//! This module provides the low-level interface: JSON POST requests with
//! the client context injected into every body, and status/error-envelope
//! handling. Typed endpoint wrappers live in the submodules.

pub mod browse;
pub mod next;
pub mod search;

use crate::error::{Result, TubeError};
use reqwest::{header, Client, Response};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use std::time::Duration;
use tracing::{debug, warn};

/// Default base URL of the TubeMusic API
const API_BASE_URL: &str = "https://api.tubemusic.net/v1";

/// Client identification sent in the request context
const CLIENT_NAME: &str = "NAVI_WEB";
const CLIENT_VERSION: &str = "1.2024.08";

/// Default request timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Low-level API client for TubeMusic
#[derive(Debug, Clone)]
pub struct TubeApi {
    /// HTTP client
    client: Client,
    /// Base URL, overridable so tests can point at a local mock server
    base_url: String,
    /// Content language (BCP-47 primary tag)
    language: String,
    /// Content region (ISO 3166 alpha-2)
    region: String,
    /// Anonymous visitor identifier, when one has been assigned
    visitor_id: Option<String>,
    /// Account cookie for authenticated requests
    cookie: Option<String>,
}

impl TubeApi {
    /// Creates a new API client against the production endpoint
    pub fn new() -> Result<Self> {
        Self::with_base_url(API_BASE_URL)
    }

    /// Creates a new API client against a specific base URL
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        Self::with_options(base_url, DEFAULT_TIMEOUT)
    }

    /// Creates a new API client with an explicit request timeout
    pub fn with_options(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(
                "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:128.0) Gecko/20100101 Firefox/128.0",
            )
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            language: "en".to_string(),
            region: "US".to_string(),
            visitor_id: None,
            cookie: None,
        })
    }

    /// Sets the content language and region
    pub fn set_locale(&mut self, language: impl Into<String>, region: impl Into<String>) {
        self.language = language.into();
        self.region = region.into();
    }

    /// Sets the anonymous visitor identifier
    pub fn set_visitor_id(&mut self, visitor_id: Option<String>) {
        self.visitor_id = visitor_id;
    }

    /// Sets the account cookie used for authenticated requests
    pub fn set_cookie(&mut self, cookie: Option<String>) {
        self.cookie = cookie;
    }

    /// Returns the base URL in use
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the configured content language
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Returns the configured content region
    pub fn region(&self) -> &str {
        &self.region
    }

    /// Builds the client context injected into every request body
    fn context(&self) -> Value {
        json!({
            "client": {
                "name": CLIENT_NAME,
                "version": CLIENT_VERSION,
                "language": self.language,
                "region": self.region,
                "visitor_id": self.visitor_id,
            }
        })
    }

    /// Performs a POST request to the API
    ///
    /// The `body` must be a JSON object; the client context is merged into
    /// it before sending.
    pub(crate) async fn post<T: DeserializeOwned>(&self, endpoint: &str, body: Value) -> Result<T> {
        let url = format!("{}{}", self.base_url, endpoint);

        debug!("POST {}", url);

        let mut payload = body;
        match payload.as_object_mut() {
            Some(map) => {
                map.insert("context".to_string(), self.context());
            }
            None => {
                return Err(TubeError::Other(
                    "Request body must be a JSON object".to_string(),
                ))
            }
        }

        let mut request = self.client.post(&url).json(&payload);
        if let Some(ref cookie) = self.cookie {
            request = request.header(header::COOKIE, cookie);
        }

        let response = request.send().await?;
        self.handle_response(response).await
    }

    /// Processes the HTTP response
    async fn handle_response<T: DeserializeOwned>(&self, response: Response) -> Result<T> {
        let status = response.status();
        let status_code = status.as_u16();

        debug!("Response status: {}", status);

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!("API error ({}): {}", status_code, error_text);
            return Err(TubeError::from_status_code(status_code, error_text));
        }

        let text = response.text().await?;

        // A 2xx body can still carry a structured error envelope
        if let Ok(json) = serde_json::from_str::<Value>(&text) {
            if let Some(error_obj) = json.get("error") {
                let code = error_obj
                    .get("code")
                    .and_then(|c| c.as_u64())
                    .unwrap_or(status_code as u64) as u16;
                let message = error_obj
                    .get("message")
                    .and_then(|m| m.as_str())
                    .unwrap_or("Unknown error");
                warn!("TubeMusic API error: {}", message);
                return Err(TubeError::from_status_code(code, message));
            }
        }

        serde_json::from_str(&text).map_err(|e| {
            warn!("Failed to parse response: {}", e);
            TubeError::JsonParse(e)
        })
    }
}
