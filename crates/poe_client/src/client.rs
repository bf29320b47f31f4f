//! Client for the Poe chat completions endpoint.

use poe_core::{ChatMessage, ChatRequest};
use poe_error::{ConfigurationError, RequestError};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use std::time::Duration;
use tracing::{debug, error, instrument};

/// Production endpoint for the Poe API.
pub const DEFAULT_BASE_URL: &str = "https://api.poe.com/v1";
/// Environment variable consulted by [`PoeClient::from_env`].
pub const API_KEY_VAR: &str = "POE_API_KEY";
const COMPLETIONS_PATH: &str = "/chat/completions";

/// Client for the Poe chat completions API.
///
/// Configuration (base URL, credential, headers) is fixed at
/// construction; each call is independent, so a single instance can be
/// shared across concurrent callers.
///
/// # Examples
///
/// ```no_run
/// use poe_client::PoeClient;
/// use poe_core::ChatMessage;
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let client = PoeClient::from_env()?;
///
/// let response = client
///     .chat_completion("cole-bennet-gpt", vec![ChatMessage::user("Hello world")])
///     .await?;
///
/// println!("{response:#}");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct PoeClient {
    client: reqwest::Client,
    /// Precomputed request headers: content type and bearer authorization.
    headers: HeaderMap,
    /// Base URL without a trailing slash.
    base_url: String,
}

impl PoeClient {
    /// Creates a client with an explicit API key.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigurationError`] if the key is empty or not a
    /// valid header value.
    pub fn new(api_key: impl Into<String>) -> Result<Self, ConfigurationError> {
        let api_key: String = api_key.into();
        if api_key.is_empty() {
            return Err(ConfigurationError::new(format!(
                "{API_KEY_VAR} must be provided or set as environment variable"
            )));
        }

        let mut auth = HeaderValue::from_str(&format!("Bearer {api_key}")).map_err(|e| {
            ConfigurationError::new(format!("API key is not a valid header value: {e}"))
        })?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(AUTHORIZATION, auth);

        debug!(url = DEFAULT_BASE_URL, "Created Poe client");

        Ok(Self {
            client: reqwest::Client::new(),
            headers,
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Creates a client from the `POE_API_KEY` environment variable.
    ///
    /// The variable is read once, here; it is never re-read afterward.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigurationError`] naming `POE_API_KEY` when the
    /// variable is unset or empty.
    pub fn from_env() -> Result<Self, ConfigurationError> {
        let api_key = std::env::var(API_KEY_VAR)
            .ok()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                ConfigurationError::new(format!(
                    "{API_KEY_VAR} must be provided or set as environment variable"
                ))
            })?;
        Self::new(api_key)
    }

    /// Overrides the base URL, e.g. to target a mock server in tests.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base: String = base_url.into();
        self.base_url = base.trim_end_matches('/').to_string();
        self
    }

    /// Sets a request timeout on the underlying HTTP client.
    ///
    /// Without this, reqwest's default (no timeout) applies.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();
        self
    }

    /// Returns the precomputed request headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Returns the configured base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Sends a chat completion request and returns the decoded JSON
    /// response verbatim.
    ///
    /// Exactly one POST is issued per call; an empty `messages` sequence
    /// is passed through for the server to judge.
    ///
    /// # Errors
    ///
    /// Returns a [`RequestError`] on transport failure, non-success
    /// status (with the response body text attached), or an undecodable
    /// response body. Failed calls are never retried.
    #[instrument(skip(self, messages), fields(model = %model, message_count = messages.len()))]
    pub async fn chat_completion(
        &self,
        model: &str,
        messages: Vec<ChatMessage>,
    ) -> Result<serde_json::Value, RequestError> {
        let request = ChatRequest::builder()
            .model(model)
            .messages(messages)
            .build()
            .map_err(|e| RequestError::Builder(format!("Failed to build request: {}", e)))?;

        let url = format!("{}{}", self.base_url, COMPLETIONS_PATH);

        debug!(url = %url, "Sending request");

        let response = self
            .client
            .post(&url)
            .headers(self.headers.clone())
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "HTTP request failed");
                RequestError::Http(format!("Request failed: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "API error");

            return Err(RequestError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let value: serde_json::Value = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse response");
            RequestError::ResponseParsing(format!("Failed to parse JSON: {}", e))
        })?;

        debug!("Received response");

        Ok(value)
    }
}
