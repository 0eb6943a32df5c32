//! Configuration and file management for the chat copilot session bootstrap
//!
//! This crate provides:
//! - Configuration file loading (TOML)
//! - Application configuration (AppConfig, RetryPolicy)
//! - Cache and log directory locations

pub mod app_config;
pub mod config_file;
pub mod paths;

pub use app_config::{AppConfig, RetryPolicy, BACKEND_URI_ENV};
pub use config_file::load_config_file;
pub use paths::{cache_dir, log_dir};
