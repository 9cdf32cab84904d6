use crate::client::core::SignalClient;
use crate::transport::HttpTransport;
use crate::{Error, Result};
use std::sync::Arc;
use std::time::Duration;

/// Builder for creating clients with custom configuration.
///
/// The only required setting is the gateway base URL; everything else has
/// production-friendly defaults (see the transport's env overrides).
pub struct SignalClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    /// Preconstructed HTTP client (primarily for testing).
    http_client: Option<reqwest::Client>,
}

impl SignalClientBuilder {
    pub fn new() -> Self {
        Self {
            base_url: None,
            timeout: None,
            connect_timeout: None,
            http_client: None,
        }
    }

    /// Set the gateway base URL, e.g. `http://localhost:8080`.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set the per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the connection timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Inject a preconstructed reqwest client, bypassing the transport's
    /// defaults and the timeout settings above.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    pub fn build(self) -> Result<SignalClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| Error::configuration("base_url must be specified"))?;

        let parsed = url::Url::parse(&base_url)
            .map_err(|e| Error::configuration(format!("invalid base URL: {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::configuration(format!(
                "unsupported base URL scheme: {}",
                parsed.scheme()
            )));
        }

        let client = match self.http_client {
            Some(client) => Some(client),
            None if self.timeout.is_some() || self.connect_timeout.is_some() => {
                let mut builder = reqwest::Client::builder();
                if let Some(timeout) = self.timeout {
                    builder = builder.timeout(timeout);
                }
                if let Some(timeout) = self.connect_timeout {
                    builder = builder.connect_timeout(timeout);
                }
                Some(builder.build().map_err(|e| {
                    Error::configuration(format!("failed to create HTTP client: {e}"))
                })?)
            }
            None => None,
        };

        let transport = Arc::new(HttpTransport::with_client(base_url, client)?);
        Ok(SignalClient { transport })
    }
}

impl Default for SignalClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_requires_base_url() {
        let err = SignalClientBuilder::new().build().unwrap_err();
        assert!(matches!(err, Error::Configuration { .. }));
    }

    #[test]
    fn build_rejects_invalid_base_url() {
        let err = SignalClientBuilder::new()
            .base_url("not a url")
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::Configuration { .. }));
    }

    #[test]
    fn build_rejects_non_http_scheme() {
        let err = SignalClientBuilder::new()
            .base_url("ftp://localhost:8080")
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::Configuration { .. }));
    }

    #[test]
    fn build_strips_trailing_slash() {
        let client = SignalClientBuilder::new()
            .base_url("http://localhost:8080/")
            .build()
            .expect("client");
        assert_eq!(client.base_url(), "http://localhost:8080");
    }
}
