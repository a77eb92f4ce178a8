//! Chat-completion backed summarizer.

use anyhow::{Context, Result};
use async_trait::async_trait;

use crate::config::Settings;
use crate::openai::{ChatCompletion, ChatMessage, ChatRequest, OpenAiClient};

use super::prompts;
use super::Summarizer;

/// Summarizes transcripts with an OpenAI chat model.
pub struct OpenAiSummarizer {
    client: OpenAiClient,
    model: String,
    temperature: Option<f32>,
    max_output_tokens: Option<u32>,
}

impl OpenAiSummarizer {
    pub fn new(client: OpenAiClient, settings: &Settings) -> Self {
        Self {
            client,
            model: settings.openai.summarizer_model.clone(),
            temperature: settings.openai.temperature,
            max_output_tokens: settings.openai.max_output_tokens,
        }
    }

    fn request_for(&self, transcript: &str) -> ChatRequest {
        ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage::system(prompts::SUMMARIZATION_SYSTEM_PROMPT),
                ChatMessage::user(prompts::transcript_prompt(transcript)),
            ],
            temperature: self.temperature,
            max_tokens: self.max_output_tokens,
        }
    }
}

#[async_trait]
impl Summarizer for OpenAiSummarizer {
    async fn summarize(&self, transcript: &str) -> Result<String> {
        tracing::info!(
            "Summarizing transcript ({} chars) with {}",
            transcript.len(),
            self.model
        );

        let completion = self
            .client
            .chat_completion(&self.request_for(transcript))
            .await
            .context("Summarization request failed")?;

        extract_notes(completion)
    }
}

/// Pull the note text out of a completion, warning when the model was cut
/// off before a natural stop. Truncated content is still used.
fn extract_notes(completion: ChatCompletion) -> Result<String> {
    if let Some(note) = truncation_note(&completion) {
        tracing::warn!("{}", note);
    }

    completion
        .content
        .filter(|content| !content.is_empty())
        .context("Summarization response did not contain any content")
}

/// Describes an early cut-off, or `None` for a clean stop.
fn truncation_note(completion: &ChatCompletion) -> Option<String> {
    if completion.stopped_cleanly() {
        return None;
    }

    let reason = completion.finish_reason.as_deref().unwrap_or("unknown");
    let generated = completion
        .usage
        .as_ref()
        .map(|usage| usage.completion_tokens.to_string())
        .unwrap_or_else(|| "UNKNOWN".to_string());

    Some(format!(
        "Summary was cut off before completing (finish reason: {reason}, output tokens: {generated})"
    ))
}
