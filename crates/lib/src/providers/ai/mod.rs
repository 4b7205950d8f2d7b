pub mod openai;

use crate::{
    errors::PromptError,
    types::{ChatMessage, GenerationParams},
};
use async_trait::async_trait;
use dyn_clone::DynClone;
use futures::Stream;
use std::{fmt::Debug, pin::Pin};

/// A stream of text tokens produced by an AI provider.
pub type TokenStream = Pin<Box<dyn Stream<Item = Result<String, PromptError>> + Send>>;

/// A trait for interacting with an AI provider.
///
/// This trait defines a common interface for streaming chat completions from
/// different Large Language Model backends.
#[async_trait]
pub trait AiProvider: Send + Sync + Debug + DynClone {
    /// Starts a chat completion and returns the provider's token stream.
    ///
    /// The returned stream yields text chunks in arrival order and ends when
    /// the upstream call completes.
    async fn stream_chat(
        &self,
        system_prompt: &str,
        history: &[ChatMessage],
        params: GenerationParams,
    ) -> Result<TokenStream, PromptError>;
}

dyn_clone::clone_trait_object!(AiProvider);
