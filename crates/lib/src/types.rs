use crate::{errors::PromptError, providers::ai::AiProvider};
use serde::{Deserialize, Serialize};

/// The role of one turn in the running conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
}

impl MessageRole {
    /// The wire name of the role.
    pub fn as_str(self) -> &'static str {
        match self {
            MessageRole::User => "user",
            MessageRole::Assistant => "assistant",
        }
    }
}

/// One turn of the conversation. The client owns the history and sends it in
/// full on every request; nothing is persisted server-side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

/// The user-supplied descriptor of the company asking for analysis.
///
/// `industry` and `size` are free text on the wire; unknown values degrade
/// to "no extra content selected" rather than an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessProfile {
    pub company_name: String,
    pub industry: String,
    pub size: String,
    pub description: String,
}

/// Controls the response-length budget only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisMode {
    #[default]
    Quick,
    Detailed,
}

impl AnalysisMode {
    /// The max-token budget for the upstream call.
    pub fn max_tokens(self) -> u32 {
        match self {
            AnalysisMode::Detailed => 2000,
            AnalysisMode::Quick => 1500,
        }
    }
}

/// Sampling parameters forwarded to the AI provider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationParams {
    pub temperature: f32,
    pub max_tokens: u32,
}

/// Options for a single analysis request.
///
/// This maps directly onto the JSON payload of the chat endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisOptions {
    pub messages: Vec<ChatMessage>,
    #[serde(default)]
    pub business_overview: Option<BusinessProfile>,
    #[serde(default)]
    pub analysis_mode: AnalysisMode,
}

/// A client that turns a business conversation into a streamed
/// legislative-impact analysis via a configurable AI provider.
#[derive(Clone, Debug)]
pub struct ChatClient {
    pub ai_provider: Box<dyn AiProvider>,
}

/// A builder for creating `ChatClient` instances.
#[derive(Default)]
pub struct ChatClientBuilder {
    ai_provider: Option<Box<dyn AiProvider>>,
}

impl ChatClientBuilder {
    /// Creates a new `ChatClientBuilder`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the AI provider.
    pub fn ai_provider(mut self, ai_provider: Box<dyn AiProvider>) -> Self {
        self.ai_provider = Some(ai_provider);
        self
    }

    /// Builds the `ChatClient`, failing when no provider was configured.
    pub fn build(self) -> Result<ChatClient, PromptError> {
        let ai_provider = self.ai_provider.ok_or(PromptError::MissingAiProvider)?;
        Ok(ChatClient { ai_provider })
    }
}
