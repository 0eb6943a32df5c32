//! HTTP backend probe
//!
//! Polls the backend health endpoint until it answers with a success status.

use crate::client::BackendProbe;
use anyhow::{Context, Result};
use async_trait::async_trait;
use log::{debug, info};
use reqwest::Url;
use std::time::Duration;

/// Health endpoint, resolved relative to the backend base address
const HEALTH_PATH: &str = "healthz";

/// Default delay between two health checks
pub const DEFAULT_PROBE_INTERVAL: Duration = Duration::from_millis(3000);

/// Backend probe that polls `{uri}/healthz` over HTTP
///
/// The first request goes out after one interval. Connection errors and
/// non-success responses are retried until `max_attempts` is reached, or
/// forever when no limit is set.
#[derive(Debug, Clone)]
pub struct HttpBackendProbe {
    http: reqwest::Client,
    interval: Duration,
    max_attempts: Option<u32>,
}

impl Default for HttpBackendProbe {
    fn default() -> Self {
        Self::new(DEFAULT_PROBE_INTERVAL)
    }
}

impl HttpBackendProbe {
    pub fn new(interval: Duration) -> Self {
        Self {
            http: reqwest::Client::new(),
            interval,
            max_attempts: None,
        }
    }

    /// Give up after `attempts` failed health checks
    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = Some(attempts);
        self
    }

    /// Use a preconfigured HTTP client (proxy, TLS roots, timeouts)
    pub fn with_client(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self
    }

    async fn check(&self, url: &Url) -> bool {
        match self.http.get(url.clone()).send().await {
            Ok(response) if response.status().is_success() => true,
            Ok(response) => {
                debug!("Backend probe: {} answered {}", url, response.status());
                false
            }
            Err(e) => {
                debug!("Backend probe: {} unreachable: {}", url, e);
                false
            }
        }
    }
}

/// Resolve the health endpoint against the backend base address
///
/// Follows URL reference resolution, so `https://host/api/` probes
/// `https://host/api/healthz` while `https://host/api` probes `https://host/healthz`.
pub fn health_url(uri: &str) -> Result<Url> {
    let base = Url::parse(uri).with_context(|| format!("Invalid backend uri '{}'", uri))?;
    base.join(HEALTH_PATH)
        .with_context(|| format!("Cannot resolve health endpoint for '{}'", uri))
}

#[async_trait]
impl BackendProbe for HttpBackendProbe {
    async fn probe(&self, uri: &str) -> Result<()> {
        let url = health_url(uri)?;
        let mut attempts = 0u32;

        loop {
            tokio::time::sleep(self.interval).await;
            attempts += 1;

            if self.check(&url).await {
                info!("Backend probe: backend found at {}", url);
                return Ok(());
            }

            if let Some(max) = self.max_attempts {
                if attempts >= max {
                    anyhow::bail!("Backend at {} not reachable after {} attempts", url, attempts);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_url_with_trailing_slash() {
        let url = health_url("https://localhost:40443/").unwrap();
        assert_eq!(url.as_str(), "https://localhost:40443/healthz");
    }

    #[test]
    fn test_health_url_replaces_last_segment() {
        let url = health_url("https://example.com/api").unwrap();
        assert_eq!(url.as_str(), "https://example.com/healthz");

        let url = health_url("https://example.com/api/").unwrap();
        assert_eq!(url.as_str(), "https://example.com/api/healthz");
    }

    #[test]
    fn test_health_url_rejects_garbage() {
        assert!(health_url("not a url").is_err());
    }

    #[tokio::test]
    async fn test_probe_gives_up_after_max_attempts() {
        // Port 9 (discard) on loopback is not expected to run an HTTP server
        let probe = HttpBackendProbe::new(Duration::from_millis(1)).with_max_attempts(2);
        let result = probe.probe("http://127.0.0.1:9/").await;
        assert!(result.is_err());
    }
}
