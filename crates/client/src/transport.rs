//! HTTP transport layer for the overtime API.

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use reqwest::{header, Client, RequestBuilder};
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

/// Business code some gateways return with HTTP 200 when the token is stale.
const TOKEN_EXPIRED_CODE: i64 = 401;

/// Status and decoded body of a completed request.
///
/// Non-JSON bodies are kept as a JSON string.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: serde_json::Value,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// HTTP transport for making API requests.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    config: Arc<ClientConfig>,
}

impl HttpTransport {
    /// Create a new HTTP transport with the given configuration.
    pub fn new(config: Arc<ClientConfig>) -> ClientResult<Self> {
        let mut headers = header::HeaderMap::new();

        if let Some(ref token) = config.api_token {
            headers.insert(
                header::AUTHORIZATION,
                header::HeaderValue::from_str(&format!("Bearer {}", token))
                    .map_err(|_| ClientError::Config("Invalid API token format".to_string()))?,
            );
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("jiaban-client/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .build()?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Build a URL for the given path.
    fn build_url(&self, path: &str) -> ClientResult<url::Url> {
        Ok(self.config.base_url.join(path)?)
    }

    /// Send a request and decode the response, rejecting unauthorized replies.
    async fn send(&self, request: RequestBuilder) -> ClientResult<ApiResponse> {
        let response = request.send().await?;
        let status = response.status().as_u16();
        let text = response.text().await?;
        let body = if text.trim().is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_str(&text).unwrap_or(serde_json::Value::String(text))
        };

        if status == 401 || status == 403 || body_signals_expired_token(&body) {
            return Err(ClientError::Unauthorized {
                status,
                message: describe_body(&body),
            });
        }

        debug!(status, "Response received");
        Ok(ApiResponse { status, body })
    }

    /// Execute a GET request.
    pub async fn get(&self, path: &str) -> ClientResult<ApiResponse> {
        let url = self.build_url(path)?;
        debug!(url = %url, "GET request");

        self.send(self.client.get(url)).await
    }

    /// Execute a GET request with query parameters.
    pub async fn get_with_query<Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> ClientResult<ApiResponse> {
        let url = self.build_url(path)?;
        debug!(url = %url, "GET request with query");

        self.send(self.client.get(url).query(query)).await
    }

    /// Execute a POST request with a JSON body.
    pub async fn post_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<ApiResponse> {
        let url = self.build_url(path)?;
        debug!(url = %url, "POST request");

        self.send(self.client.post(url).json(body)).await
    }
}

fn body_signals_expired_token(body: &serde_json::Value) -> bool {
    body.get("code").and_then(|c| c.as_i64()) == Some(TOKEN_EXPIRED_CODE)
}

/// Short human-readable summary of a response body.
pub(crate) fn describe_body(body: &serde_json::Value) -> String {
    let message = ["message", "msg", "error"]
        .iter()
        .find_map(|key| body.get(*key).and_then(|v| v.as_str()));

    match (message, body) {
        (Some(message), _) => message.to_string(),
        (None, serde_json::Value::String(text)) if !text.is_empty() => text.clone(),
        (None, serde_json::Value::Null) => "empty response".to_string(),
        (None, other) => other.to_string(),
    }
}
