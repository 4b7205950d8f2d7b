//! # Application State
//!
//! This module defines the shared application state (`AppState`) and the
//! logic for building it at startup. The state holds the configuration and
//! the chat client wrapping the upstream AI provider; it is read-only after
//! construction, so requests share nothing mutable.

use crate::config::AppConfig;
use billrag::{providers::ai::openai::OpenAiProvider, ChatClient, ChatClientBuilder};
use std::sync::Arc;

/// The shared application state, accessible from all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// The application's configuration, loaded from the environment.
    pub config: Arc<AppConfig>,
    /// The chat client wrapping the upstream AI provider.
    pub chat_client: Arc<ChatClient>,
}

/// Builds the shared application state from the configuration.
pub fn build_app_state(config: AppConfig) -> anyhow::Result<AppState> {
    let provider = OpenAiProvider::new(
        config.ai_api_url.clone(),
        config.openai_api_key.clone(),
        Some(config.ai_model.clone()),
    )?;

    let chat_client = ChatClientBuilder::new()
        .ai_provider(Box::new(provider))
        .build()?;

    Ok(AppState {
        config: Arc::new(config),
        chat_client: Arc::new(chat_client),
    })
}
