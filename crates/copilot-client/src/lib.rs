//! Collaborator capabilities for the chat copilot session bootstrap
//!
//! The session controller talks to the outside world only through the
//! traits defined here:
//!
//! ```text
//! ┌──────────────────────┐   auth status, active account, sign-out
//! │  IdentityProvider    │
//! ├──────────────────────┤   resolves when the backend is reachable
//! │  BackendProbe        │◄── HttpBackendProbe (polls /healthz)
//! ├──────────────────────┤   chat list, service options
//! │  ChatDataService     │
//! ├──────────────────────┤   content safety availability
//! │  ContentSafetyProbe  │
//! └──────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use copilot_client::{BackendProbe, HttpBackendProbe};
//! use std::time::Duration;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let probe = HttpBackendProbe::new(Duration::from_secs(3));
//! probe.probe("https://localhost:40443/").await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod http_probe;
pub mod types;

pub use client::{BackendProbe, ChatDataService, ContentSafetyProbe, IdentityProvider};
pub use http_probe::{health_url, HttpBackendProbe, DEFAULT_PROBE_INTERVAL};
pub use types::{AccountInfo, AuthStatus, ContentSafetyStatus, ServiceOptions};
