//! Request and response bodies for the OpenAI endpoints jotter calls.

use serde::{Deserialize, Serialize};

/// One message of a chat-completion exchange.
#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Body for `POST /chat/completions`.
#[derive(Debug, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

/// Token accounting reported by the service.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// Wire shape of a chat-completion response.
#[derive(Debug, Deserialize)]
pub(crate) struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
    pub usage: Option<TokenUsage>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatChoice {
    pub message: AssistantMessage,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AssistantMessage {
    pub content: Option<String>,
}

/// The parts of a chat completion the rest of the program consumes.
#[derive(Debug, Clone)]
pub struct ChatCompletion {
    /// Generated text; the service may legitimately return none.
    pub content: Option<String>,
    /// "stop", "length", "content_filter" and friends.
    pub finish_reason: Option<String>,
    pub usage: Option<TokenUsage>,
}

impl ChatCompletion {
    /// True when generation ended at a natural stopping point rather than
    /// being cut off by a token limit or a filter.
    pub fn stopped_cleanly(&self) -> bool {
        matches!(self.finish_reason.as_deref(), Some("stop"))
    }
}

impl From<ChatResponse> for ChatCompletion {
    fn from(response: ChatResponse) -> Self {
        match response.choices.into_iter().next() {
            Some(choice) => Self {
                content: choice.message.content,
                finish_reason: choice.finish_reason,
                usage: response.usage,
            },
            None => Self {
                content: None,
                finish_reason: None,
                usage: response.usage,
            },
        }
    }
}

/// Wire shape of a transcription response when `response_format` is json.
#[derive(Debug, Deserialize)]
pub(crate) struct TranscriptionResponse {
    pub text: String,
}
