//! # Legislative Impact Chat
//!
//! This crate provides a client that turns a business profile and a running
//! conversation into a streamed legislative-impact analysis of H.R. 1, using
//! a configurable AI provider. The retrieval step is a deterministic keyword
//! filter over a fixed bill summary, not a search index: the selected
//! sections and canned impact narratives are assembled into one system
//! instruction, and the provider's token stream is returned unmodified.

pub mod bill;
pub mod errors;
pub mod impact;
pub mod mappings;
pub mod prompts;
pub mod providers;
pub mod retrieval;
pub mod types;

pub use errors::PromptError;
pub use types::{
    AnalysisMode, AnalysisOptions, BusinessProfile, ChatClient, ChatClientBuilder, ChatMessage,
    GenerationParams, MessageRole,
};

use providers::ai::TokenStream;
use tracing::{debug, info};

impl ChatClient {
    /// Builds the system instruction for `options` and starts the upstream
    /// completion, returning the provider's token stream unmodified.
    ///
    /// The response-length budget is derived from the analysis mode; the
    /// sampling temperature is fixed. The conversation history is forwarded
    /// in full.
    pub async fn stream_analysis(
        &self,
        options: AnalysisOptions,
    ) -> Result<TokenStream, PromptError> {
        let system_prompt =
            prompts::build_system_prompt(options.business_overview.as_ref(), options.analysis_mode);
        let params = GenerationParams {
            temperature: prompts::ANALYSIS_TEMPERATURE,
            max_tokens: options.analysis_mode.max_tokens(),
        };

        info!(
            mode = ?options.analysis_mode,
            turns = options.messages.len(),
            has_profile = options.business_overview.is_some(),
            "[stream_analysis] starting upstream completion"
        );
        debug!(system_prompt = %system_prompt, "--> Sending system prompt to AI provider");

        self.ai_provider
            .stream_chat(&system_prompt, &options.messages, params)
            .await
    }
}
