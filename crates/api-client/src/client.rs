//! HTTP client for the FinTrack REST API.
//!
//! Every resource repository shares one `ApiClient`. The bearer token comes
//! from the `SessionContext` passed to each call rather than from any
//! ambient store.

use log::debug;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;

use fintrack_core::errors::{Error, Result, ValidationError};
use fintrack_core::session::SessionContext;

use crate::config::ApiConfig;

/// Error body returned by the API, e.g. `{"msg": "Invalid credentials"}`.
#[derive(Debug, serde::Deserialize)]
struct ApiErrorResponse {
    #[serde(default)]
    msg: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Turns a non-success response into an [`Error::Api`], preferring the server's message.
pub(crate) fn api_error(status: StatusCode, body: &str) -> Error {
    let message = serde_json::from_str::<ApiErrorResponse>(body)
        .ok()
        .and_then(|err| err.msg.or(err.message).or(err.error))
        .unwrap_or_else(|| {
            let snippet: String = body.chars().take(200).collect();
            if snippet.trim().is_empty() {
                format!("HTTP {}", status)
            } else {
                snippet
            }
        });
    Error::Api {
        status: status.as_u16(),
        message,
    }
}

/// Joins a collection path and a record id. The id is percent-encoded as a
/// single path segment, so `/` or `?` inside it cannot change the route.
pub(crate) fn resource_path(collection: &str, id: &str) -> Result<String> {
    if id.trim().is_empty() {
        return Err(ValidationError::MissingField("id".to_string()).into());
    }
    if id == "." || id == ".." {
        return Err(ValidationError::InvalidInput(format!("'{}' is not a record id", id)).into());
    }
    let mut url = Url::parse("http://localhost")
        .map_err(|e| Error::Unexpected(format!("Failed to build request path: {}", e)))?;
    url.set_path(collection);
    url.path_segments_mut()
        .map_err(|_| Error::Unexpected("Request path cannot have segments".to_string()))?
        .push(id);
    Ok(url.path().to_string())
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| Error::Transport(format!("Failed to initialize HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn headers(&self, session: Option<&SessionContext>) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(session) = session {
            let auth = HeaderValue::from_str(&format!("Bearer {}", session.token))
                .map_err(|e| Error::Unexpected(format!("Invalid access token format: {}", e)))?;
            headers.insert(AUTHORIZATION, auth);
        }
        Ok(headers)
    }

    /// Sends a request and returns the raw body of a successful response.
    async fn send(
        &self,
        method: Method,
        path: &str,
        session: Option<&SessionContext>,
        body: Option<&Value>,
    ) -> Result<String> {
        let url = format!("{}{}", self.base_url, path);
        debug!("[FinTrackApi] {} {}", method, url);

        let mut request = self
            .client
            .request(method, &url)
            .headers(self.headers(session)?);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| Error::Transport(format!("Request failed: {}", e)))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| Error::Transport(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            return Err(api_error(status, &text));
        }
        Ok(text)
    }

    fn parse<T: DeserializeOwned>(body: &str) -> Result<T> {
        serde_json::from_str(body)
            .map_err(|e| Error::Unexpected(format!("Failed to parse response: {} - {}", e, body)))
    }

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        session: Option<&SessionContext>,
    ) -> Result<T> {
        let body = self.send(Method::GET, path, session, None).await?;
        Self::parse(&body)
    }

    pub(crate) async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        session: Option<&SessionContext>,
        payload: &Value,
    ) -> Result<T> {
        let body = self.send(Method::POST, path, session, Some(payload)).await?;
        Self::parse(&body)
    }

    /// POST, PUT or DELETE where only the status matters.
    pub(crate) async fn execute(
        &self,
        method: Method,
        path: &str,
        session: Option<&SessionContext>,
        payload: Option<&Value>,
    ) -> Result<()> {
        self.send(method, path, session, payload).await?;
        Ok(())
    }
}
