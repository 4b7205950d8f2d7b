//! # Application Configuration
//!
//! This module defines the configuration structure for the `billrag-server`
//! and provides the logic for loading it from the process environment. The
//! upstream credential is optional at load time: its absence is a detectable,
//! reportable condition surfaced per request, not a startup crash.

use config::{Config as ConfigBuilder, Environment};
use serde::Deserialize;
use std::env;
use std::fmt;

/// A custom error type for configuration issues.
#[derive(Debug)]
pub enum ConfigError {
    /// Indicates an error from the underlying `config` crate.
    General(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::General(msg) => write!(f, "Configuration error: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::General(err.to_string())
    }
}

/// The server configuration, loaded from environment variables.
#[derive(Deserialize, Clone)]
pub struct AppConfig {
    /// The port for the server to listen on. Loaded from `PORT`.
    #[serde(default = "default_port")]
    pub port: u16,
    /// The OpenAI-compatible chat completions endpoint. Loaded from `AI_API_URL`.
    #[serde(default = "default_ai_api_url")]
    pub ai_api_url: String,
    /// The model identifier sent upstream. Loaded from `AI_MODEL`.
    #[serde(default = "default_ai_model")]
    pub ai_model: String,
    /// The upstream credential. Loaded from `OPENAI_API_KEY`; may be absent.
    #[serde(default)]
    pub openai_api_key: Option<String>,
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("port", &self.port)
            .field("ai_api_url", &self.ai_api_url)
            .field("ai_model", &self.ai_model)
            .field("openai_api_key_set", &self.openai_api_key.is_some())
            .finish()
    }
}

/// Provides a default value for the `port` field if not set in the environment.
fn default_port() -> u16 {
    8080
}

/// Provides a default value for the `ai_api_url` field.
fn default_ai_api_url() -> String {
    "https://api.openai.com/v1/chat/completions".to_string()
}

/// Provides a default value for the `ai_model` field.
fn default_ai_model() -> String {
    "gpt-4o-mini".to_string()
}

/// Loads the application configuration from environment variables.
///
/// Top-level keys are overridden by their upper-cased variable names
/// (`PORT`, `AI_API_URL`, `AI_MODEL`).
pub fn get_config() -> Result<AppConfig, ConfigError> {
    let settings = ConfigBuilder::builder()
        .add_source(Environment::default())
        .build()?;

    let mut config: AppConfig = settings.try_deserialize()?;

    // After the environment layer, explicitly check for OPENAI_API_KEY so
    // the key is picked up regardless of the source naming scheme.
    if config.openai_api_key.is_none() {
        if let Ok(key) = env::var("OPENAI_API_KEY") {
            if !key.is_empty() {
                config.openai_api_key = Some(key);
            }
        }
    }

    Ok(config)
}
