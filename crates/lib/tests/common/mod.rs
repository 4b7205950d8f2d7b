#![allow(dead_code)]
//! # Common Test Utilities
//!
//! This module provides shared utilities for testing, such as tracing setup
//! and a mock AI provider that records every call it receives.

use async_trait::async_trait;
use billrag::providers::ai::{AiProvider, TokenStream};
use billrag::{ChatMessage, GenerationParams, PromptError};
use dotenvy::dotenv;
use futures::stream;
use std::sync::{Arc, Once, RwLock};

static INIT: Once = Once::new();

/// Initializes the tracing subscriber and loads .env for tests.
pub fn setup_tracing() {
    INIT.call_once(|| {
        dotenv().ok();
        tracing_subscriber::fmt::init();
    });
}

/// One recorded provider call: system prompt, history, and params.
pub type RecordedCall = (String, Vec<ChatMessage>, GenerationParams);

// --- Mock AI Provider for Logic Testing ---
#[derive(Clone, Debug)]
pub struct MockAiProvider {
    pub call_history: Arc<RwLock<Vec<RecordedCall>>>,
    pub tokens: Vec<String>,
}

impl MockAiProvider {
    pub fn new(tokens: Vec<&str>) -> Self {
        Self {
            call_history: Arc::new(RwLock::new(Vec::new())),
            tokens: tokens.into_iter().map(String::from).collect(),
        }
    }
}

#[async_trait]
impl AiProvider for MockAiProvider {
    async fn stream_chat(
        &self,
        system_prompt: &str,
        history: &[ChatMessage],
        params: GenerationParams,
    ) -> Result<TokenStream, PromptError> {
        self.call_history.write().unwrap().push((
            system_prompt.to_string(),
            history.to_vec(),
            params,
        ));

        let tokens = self.tokens.clone();
        Ok(Box::pin(stream::iter(tokens.into_iter().map(Ok))))
    }
}
