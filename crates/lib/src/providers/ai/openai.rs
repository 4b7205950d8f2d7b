use crate::{
    errors::PromptError,
    providers::ai::{AiProvider, TokenStream},
    types::{ChatMessage, GenerationParams},
};
use async_trait::async_trait;
use futures::{stream, TryStreamExt};
use reqwest::Client as ReqwestClient;
use serde::{Deserialize, Serialize};

// --- OpenAI-compatible request and response structures ---

#[derive(Serialize)]
struct OpenAiRequest<'a> {
    messages: Vec<OpenAiMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    model: Option<&'a str>,
    temperature: f32,
    max_tokens: u32,
    stream: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
struct OpenAiMessage {
    role: String,
    content: String,
}

#[derive(Deserialize, Debug)]
struct StreamChunk {
    choices: Vec<StreamChoice>,
}

#[derive(Deserialize, Debug)]
struct StreamChoice {
    delta: StreamDelta,
}

#[derive(Deserialize, Debug, Default)]
struct StreamDelta {
    #[serde(default)]
    content: Option<String>,
}

// --- Incremental SSE decoding ---

/// Incremental decoder for an OpenAI-style `text/event-stream` body.
///
/// Raw bytes are buffered until complete lines are available, so events split
/// across transport chunks decode correctly. Each `data:` event yields its
/// `delta.content` text; the `[DONE]` sentinel ends decoding; blank and
/// comment lines yield nothing.
#[derive(Default)]
struct SseDecoder {
    buffer: String,
    done: bool,
}

impl SseDecoder {
    fn push(&mut self, chunk: &[u8]) -> Vec<Result<String, PromptError>> {
        if self.done {
            return Vec::new();
        }
        self.buffer.push_str(&String::from_utf8_lossy(chunk));

        let mut tokens = Vec::new();
        while let Some(newline) = self.buffer.find('\n') {
            let line: String = self.buffer.drain(..=newline).collect();
            let Some(data) = line.trim().strip_prefix("data:") else {
                continue;
            };
            let data = data.trim();
            if data == "[DONE]" {
                self.done = true;
                break;
            }
            match serde_json::from_str::<StreamChunk>(data) {
                Ok(event) => {
                    let text = event
                        .choices
                        .into_iter()
                        .next()
                        .and_then(|choice| choice.delta.content);
                    if let Some(text) = text {
                        if !text.is_empty() {
                            tokens.push(Ok(text));
                        }
                    }
                }
                Err(e) => tokens.push(Err(PromptError::AiDeserialization(e))),
            }
        }
        tokens
    }
}

// --- OpenAI Provider implementation ---

/// A provider for the OpenAI API or any OpenAI-compatible endpoint.
#[derive(Clone, Debug)]
pub struct OpenAiProvider {
    client: ReqwestClient,
    api_url: String,
    api_key: Option<String>,
    model: Option<String>,
}

impl OpenAiProvider {
    /// Creates a new `OpenAiProvider`.
    pub fn new(
        api_url: String,
        api_key: Option<String>,
        model: Option<String>,
    ) -> Result<Self, PromptError> {
        let client = ReqwestClient::builder()
            .build()
            .map_err(PromptError::ReqwestClientBuild)?;
        Ok(Self {
            client,
            api_url,
            api_key,
            model,
        })
    }
}

#[async_trait]
impl AiProvider for OpenAiProvider {
    /// Streams a chat completion from an OpenAI-compatible API.
    async fn stream_chat(
        &self,
        system_prompt: &str,
        history: &[ChatMessage],
        params: GenerationParams,
    ) -> Result<TokenStream, PromptError> {
        let mut messages = Vec::with_capacity(history.len() + 1);
        messages.push(OpenAiMessage {
            role: "system".to_string(),
            content: system_prompt.to_string(),
        });
        messages.extend(history.iter().map(|message| OpenAiMessage {
            role: message.role.as_str().to_string(),
            content: message.content.clone(),
        }));

        let request_body = OpenAiRequest {
            messages,
            model: self.model.as_deref(),
            temperature: params.temperature,
            max_tokens: params.max_tokens,
            stream: true,
        };

        let mut request_builder = self.client.post(&self.api_url);

        if let Some(key) = &self.api_key {
            request_builder = request_builder.bearer_auth(key);
        }

        let response = request_builder
            .json(&request_body)
            .send()
            .await
            .map_err(PromptError::AiRequest)?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(PromptError::AiApi(error_text));
        }

        let mut decoder = SseDecoder::default();
        let tokens = response
            .bytes_stream()
            .map_err(PromptError::AiStream)
            .map_ok(move |chunk| stream::iter(decoder.push(&chunk)))
            .try_flatten();

        Ok(Box::pin(tokens))
    }
}
