//! HTTP client for the Digitext OCR API.
//!
//! Provides a thin transport wrapper with a fixed base URL and timeout,
//! domain methods (upload, result fetch, health, cleanup), and the bounded
//! polling loop that adapts the server's asynchronous job contract into a
//! single awaited outcome. The CLI uses this client directly.

pub mod api;
pub mod poll;

use reqwest::Client;
use serde::de::DeserializeOwned;

use digitext_core::{ClientConfig, ClientError};

/// HTTP client for the OCR API. Cheap to clone; no retry logic of its own.
#[derive(Clone, Debug)]
pub struct OcrClient {
    client: Client,
    base_url: String,
    config: ClientConfig,
}

impl OcrClient {
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| ClientError::Transport {
                message: format!("Failed to create HTTP client: {}", e),
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            config,
        })
    }

    /// Create a client from environment: DIGITEXT_API_URL (or API_URL).
    pub fn from_env() -> Result<Self, ClientError> {
        Self::new(ClientConfig::from_env())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn build_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET request, deserializing the JSON response.
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let url = self.build_url(path);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(transport_error)?;
        deserialize_response(response).await
    }

    /// POST multipart form, deserializing the JSON response.
    pub(crate) async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<T, ClientError> {
        let url = self.build_url(path);
        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(transport_error)?;
        deserialize_response(response).await
    }

    /// DELETE request. Returns Ok(()) on success.
    pub(crate) async fn delete(&self, path: &str) -> Result<(), ClientError> {
        let url = self.build_url(path);
        let response = self
            .client
            .delete(&url)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(error_from_response(status, response).await);
        }
        Ok(())
    }
}

fn transport_error(err: reqwest::Error) -> ClientError {
    ClientError::Transport {
        message: err.to_string(),
    }
}

async fn deserialize_response<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    let status = response.status();
    if !status.is_success() {
        return Err(error_from_response(status, response).await);
    }

    response.json().await.map_err(|e| ClientError::Transport {
        message: format!("Failed to parse response as JSON: {}", e),
    })
}

/// Map a non-success response to a transport error carrying the server's
/// message. The server wraps its message as `{"detail": "..."}`; fall back
/// to the raw body, then to the status alone.
async fn error_from_response(status: reqwest::StatusCode, response: reqwest::Response) -> ClientError {
    let body = response.text().await.unwrap_or_default();
    let detail = serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|v| v.get("detail").and_then(|d| d.as_str()).map(str::to_string));

    let message = match detail {
        Some(detail) => detail,
        None if !body.is_empty() => format!("API request failed with status {}: {}", status, body),
        None => format!("API request failed with status {}", status),
    };

    ClientError::Transport { message }
}
