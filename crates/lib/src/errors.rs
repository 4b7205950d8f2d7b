use thiserror::Error;

/// Custom error types for the application.
#[derive(Error, Debug)]
pub enum PromptError {
    #[error("Failed to build Reqwest client: {0}")]
    ReqwestClientBuild(reqwest::Error),
    #[error("Failed to send request to the AI provider: {0}")]
    AiRequest(reqwest::Error),
    #[error("Failed to deserialize AI provider response: {0}")]
    AiDeserialization(#[from] serde_json::Error),
    #[error("AI provider returned an error: {0}")]
    AiApi(String),
    #[error("AI provider stream failed: {0}")]
    AiStream(reqwest::Error),
    #[error("An AI provider is required")]
    MissingAiProvider,
    #[error("API key is missing")]
    MissingApiKey,
}
