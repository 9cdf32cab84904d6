use crate::{Error, Result};
use bytes::Bytes;
use reqwest::{Method, Proxy, StatusCode};
use std::env;
use std::time::Duration;
use tracing::{debug, warn};

/// Placeholder message when a non-2xx body carries no decodable error field.
const UNKNOWN_ERROR: &str = "Unknown error";

/// HTTP transport over a shared reqwest connection pool.
///
/// Holds no per-call state; every method acquires the pool for the duration
/// of one round trip and never retains it beyond that.
#[derive(Debug)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_client(base_url, None)
    }

    /// Build a transport, optionally reusing a preconstructed reqwest client
    /// (primarily for tests).
    pub(crate) fn with_client(
        base_url: impl Into<String>,
        client: Option<reqwest::Client>,
    ) -> Result<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        let client = match client {
            Some(client) => client,
            None => {
                // Minimal production-friendly defaults (env-overridable).
                let timeout_secs = env::var("SIGNAL_HTTP_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse::<u64>().ok())
                    .unwrap_or(30);

                let mut builder = reqwest::Client::builder()
                    .timeout(Duration::from_secs(timeout_secs))
                    .pool_max_idle_per_host(
                        env::var("SIGNAL_HTTP_POOL_MAX_IDLE_PER_HOST")
                            .ok()
                            .and_then(|s| s.parse::<usize>().ok())
                            .unwrap_or(32),
                    )
                    .pool_idle_timeout(Some(Duration::from_secs(
                        env::var("SIGNAL_HTTP_POOL_IDLE_TIMEOUT_SECS")
                            .ok()
                            .and_then(|s| s.parse::<u64>().ok())
                            .unwrap_or(90),
                    )));

                if let Ok(proxy_url) = env::var("SIGNAL_PROXY_URL") {
                    if let Ok(proxy) = Proxy::all(&proxy_url) {
                        builder = builder.proxy(proxy);
                    }
                }

                builder
                    .build()
                    .map_err(|e| Error::Transport(TransportError::Other(e.to_string())))?
            }
        };

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Issue one JSON request and classify the response.
    ///
    /// 2xx with an empty body decodes to `Value::Null`; 2xx with a non-JSON
    /// body is [`Error::MalformedResponse`]; non-2xx is [`Error::Remote`]
    /// with a best-effort message from an `{"error": ...}` body.
    pub async fn execute(
        &self,
        method: Method,
        path: &str,
        query: Option<&[(&str, String)]>,
        body: Option<&serde_json::Value>,
    ) -> Result<serde_json::Value> {
        let url = self.url(path);
        debug!(%method, %url, "executing request");

        let mut request = self.client.request(method, &url);
        if let Some(params) = query {
            request = request.query(params);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| Error::Transport(TransportError::Http(e)))?;
        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| Error::Transport(TransportError::Http(e)))?;
        debug!(%url, status = status.as_u16(), "response received");

        classify(status, &bytes)
    }

    /// Binary download path: the 2xx body is returned untouched, bypassing
    /// JSON decoding entirely. Non-2xx is classified as in [`execute`].
    ///
    /// [`execute`]: HttpTransport::execute
    pub async fn execute_bytes(&self, path: &str) -> Result<Bytes> {
        let url = self.url(path);
        debug!(%url, "downloading binary payload");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::Transport(TransportError::Http(e)))?;
        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| Error::Transport(TransportError::Http(e)))?;

        if status.is_success() {
            return Ok(bytes);
        }
        Err(remote_error(status, &bytes))
    }

    /// Binary upload path: POST an opaque body with the caller's content
    /// type. The response is a decoded JSON acknowledgement.
    pub async fn execute_raw(
        &self,
        path: &str,
        payload: Vec<u8>,
        content_type: &str,
    ) -> Result<serde_json::Value> {
        let url = self.url(path);
        debug!(%url, content_type, len = payload.len(), "uploading binary payload");

        let response = self
            .client
            .post(&url)
            .header("content-type", content_type)
            .body(payload)
            .send()
            .await
            .map_err(|e| Error::Transport(TransportError::Http(e)))?;
        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| Error::Transport(TransportError::Http(e)))?;

        classify(status, &bytes)
    }

    /// Multipart upload path (sticker pack uploads).
    pub async fn execute_multipart(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<serde_json::Value> {
        let url = self.url(path);
        debug!(%url, "uploading multipart form");

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| Error::Transport(TransportError::Http(e)))?;
        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| Error::Transport(TransportError::Http(e)))?;

        classify(status, &bytes)
    }
}

/// Classify one response into a decoded payload or a typed failure.
fn classify(status: StatusCode, body: &[u8]) -> Result<serde_json::Value> {
    if status.is_success() {
        if body.is_empty() {
            return Ok(serde_json::Value::Null);
        }
        return serde_json::from_slice(body).map_err(|e| Error::MalformedResponse {
            status: status.as_u16(),
            detail: e.to_string(),
        });
    }
    Err(remote_error(status, body))
}

fn remote_error(status: StatusCode, body: &[u8]) -> Error {
    let message = serde_json::from_slice::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.get("error")
                .and_then(|m| m.as_str())
                .map(|m| m.to_string())
        })
        .unwrap_or_else(|| {
            warn!(status = status.as_u16(), "error body carried no decodable message");
            UNKNOWN_ERROR.to_string()
        });
    Error::Remote {
        status: status.as_u16(),
        message,
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Transport error: {0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_decodes_success_body() {
        let value = classify(StatusCode::OK, br#"{"id": "g1"}"#).unwrap();
        assert_eq!(value["id"], "g1");
    }

    #[test]
    fn classify_maps_empty_success_body_to_null() {
        let value = classify(StatusCode::NO_CONTENT, b"").unwrap();
        assert!(value.is_null());
    }

    #[test]
    fn classify_surfaces_non_json_success_body() {
        let err = classify(StatusCode::OK, b"<html>gateway</html>").unwrap_err();
        match err {
            Error::MalformedResponse { status, .. } => assert_eq!(status, 200),
            other => panic!("expected MalformedResponse, got {other:?}"),
        }
    }

    #[test]
    fn classify_extracts_error_message() {
        let err = classify(StatusCode::NOT_FOUND, br#"{"error": "not found"}"#).unwrap_err();
        match err {
            Error::Remote { status, message } => {
                assert_eq!(status, 404);
                assert_eq!(message, "not found");
            }
            other => panic!("expected Remote, got {other:?}"),
        }
    }

    #[test]
    fn classify_falls_back_to_placeholder_message() {
        let err = classify(StatusCode::INTERNAL_SERVER_ERROR, b"oops").unwrap_err();
        match err {
            Error::Remote { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, UNKNOWN_ERROR);
            }
            other => panic!("expected Remote, got {other:?}"),
        }
    }

    #[test]
    fn classify_ignores_non_string_error_field() {
        let err = classify(StatusCode::BAD_REQUEST, br#"{"error": 42}"#).unwrap_err();
        match err {
            Error::Remote { message, .. } => assert_eq!(message, UNKNOWN_ERROR),
            other => panic!("expected Remote, got {other:?}"),
        }
    }
}
