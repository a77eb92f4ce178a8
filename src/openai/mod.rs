//! OpenAI API access shared by the transcription and summarization stages.

mod client;
mod types;

pub use client::{OpenAiClient, OpenAiError};
pub use types::{ChatCompletion, ChatMessage, ChatRequest, TokenUsage};
