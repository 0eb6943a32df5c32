//! Application configuration
//!
//! Configuration loaded from `.copilot-session.toml`, with the backend base
//! address overridable through the `BACKEND_URI` environment variable
//! (a `.env` file in the working directory is honored).

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Environment variable that overrides `backend_uri`
pub const BACKEND_URI_ENV: &str = "BACKEND_URI";

/// Application configuration loaded from `.copilot-session.toml`
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Base address of the chat backend
    #[serde(default = "default_backend_uri")]
    pub backend_uri: String,

    /// Email domain of the internal organization
    #[serde(default = "default_internal_domain")]
    pub internal_domain: String,

    /// Notice shown to accounts of the internal organization
    #[serde(default = "default_internal_use_notice")]
    pub internal_use_notice: String,

    /// Delay between two backend health checks in milliseconds
    #[serde(default = "default_probe_interval_ms")]
    pub probe_interval_ms: u64,

    /// Retry policy for loading the chat list
    #[serde(default)]
    pub chat_load_retry: RetryPolicy,

    /// Maximum number of alerts kept in the queue
    #[serde(default = "default_max_alerts")]
    pub max_alerts: usize,
}

fn default_backend_uri() -> String {
    "https://localhost:40443/".to_string()
}

fn default_internal_domain() -> String {
    "microsoft.com".to_string()
}

fn default_internal_use_notice() -> String {
    "By using Chat Copilot, you agree to protect sensitive data, not store it in chat, \
     and allow chat history collection for service improvements. \
     This tool is for internal use only."
        .to_string()
}

fn default_probe_interval_ms() -> u64 {
    3000
}

fn default_max_alerts() -> usize {
    100
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_uri: default_backend_uri(),
            internal_domain: default_internal_domain(),
            internal_use_notice: default_internal_use_notice(),
            probe_interval_ms: default_probe_interval_ms(),
            chat_load_retry: RetryPolicy::default(),
            max_alerts: default_max_alerts(),
        }
    }
}

impl AppConfig {
    /// Load config from CWD first, then home directory, or use defaults
    ///
    /// `BACKEND_URI` from the environment (or `.env`) wins over the file.
    pub fn load() -> Self {
        let mut config = Self::from_file();

        match dotenvy::dotenv() {
            Ok(path) => log::debug!("Loaded .env file from: {:?}", path),
            Err(_) => log::debug!(".env file not found, relying on environment variables"),
        }
        config.apply_backend_uri_override(std::env::var(BACKEND_URI_ENV).ok());

        config
    }

    fn from_file() -> Self {
        if let Some(content) = crate::load_config_file() {
            match toml::from_str(&content) {
                Ok(config) => {
                    log::info!("Loaded app config from file");
                    return config;
                }
                Err(e) => {
                    log::warn!("Failed to parse config file: {}", e);
                }
            }
        }

        log::debug!("Using default app config");
        Self::default()
    }

    /// Replace `backend_uri` with a non-empty override value
    pub fn apply_backend_uri_override(&mut self, value: Option<String>) {
        if let Some(uri) = value.map(|v| v.trim().to_string()) {
            if !uri.is_empty() {
                log::debug!("Using backend uri from {}: {}", BACKEND_URI_ENV, uri);
                self.backend_uri = uri;
            }
        }
    }

    pub fn probe_interval(&self) -> Duration {
        Duration::from_millis(self.probe_interval_ms)
    }
}

/// Bounded retry with exponential backoff
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts including the first one (0 behaves like 1)
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Delay before the second attempt in milliseconds
    #[serde(default = "default_initial_delay_ms")]
    pub initial_delay_ms: u64,

    /// Upper bound for any single delay in milliseconds
    #[serde(default = "default_max_delay_ms")]
    pub max_delay_ms: u64,
}

fn default_max_attempts() -> u32 {
    3
}

fn default_initial_delay_ms() -> u64 {
    1000
}

fn default_max_delay_ms() -> u64 {
    30_000
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            initial_delay_ms: default_initial_delay_ms(),
            max_delay_ms: default_max_delay_ms(),
        }
    }
}

impl RetryPolicy {
    /// Single attempt, no retries
    pub fn none() -> Self {
        Self {
            max_attempts: 1,
            ..Self::default()
        }
    }

    /// Attempts to make, never less than one
    pub fn attempts(&self) -> u32 {
        self.max_attempts.max(1)
    }

    /// Delay to wait after the given failed attempt (1-based)
    pub fn delay_after(&self, attempt: u32) -> Duration {
        let factor = 1u64 << attempt.saturating_sub(1).min(20);
        let delay = self.initial_delay_ms.saturating_mul(factor);
        Duration::from_millis(delay.min(self.max_delay_ms))
    }
}
