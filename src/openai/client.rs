//! HTTP client for the OpenAI API.

use reqwest::multipart;
use reqwest::StatusCode;
use thiserror::Error;

use crate::config::Settings;

use super::types::{ChatCompletion, ChatRequest, ChatResponse, TranscriptionResponse};

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

#[derive(Debug, Error)]
pub enum OpenAiError {
    #[error("OpenAI API key is missing. Set OPENAI_API_KEY or openai.api_key in the config file.")]
    MissingApiKey,

    #[error("OpenAI request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("OpenAI returned {status}: {message}")]
    Api { status: StatusCode, message: String },
}

/// Shared client for the hosted transcription and chat endpoints.
///
/// Built once at startup so a missing credential fails before any stage
/// runs. Requests carry no timeout; transcription uploads of long talks
/// are legitimately slow.
#[derive(Clone)]
pub struct OpenAiClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl OpenAiClient {
    pub fn from_settings(settings: &Settings) -> Result<Self, OpenAiError> {
        let api_key = settings.openai.api_key.trim().to_string();
        if api_key.is_empty() {
            return Err(OpenAiError::MissingApiKey);
        }

        let base_url = if settings.openai.base_url.trim().is_empty() {
            DEFAULT_BASE_URL.to_string()
        } else {
            settings
                .openai
                .base_url
                .trim()
                .trim_end_matches('/')
                .to_string()
        };

        Ok(Self {
            http: reqwest::Client::new(),
            api_key,
            base_url,
        })
    }

    /// Upload a whole audio file for transcription and return its text
    /// verbatim, whitespace included.
    pub async fn transcribe_audio(
        &self,
        audio: Vec<u8>,
        filename: &str,
        model: &str,
    ) -> Result<String, OpenAiError> {
        let file = multipart::Part::bytes(audio).file_name(filename.to_string());
        let form = multipart::Form::new()
            .part("file", file)
            .text("model", model.to_string())
            .text("response_format", "json");

        tracing::debug!("Uploading {} for transcription", filename);

        let response = self
            .http
            .post(format!("{}/audio/transcriptions", self.base_url))
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await?;

        let response = Self::check_status(response).await?;
        let payload: TranscriptionResponse = response.json().await?;
        Ok(payload.text)
    }

    /// Run one chat-completion exchange.
    pub async fn chat_completion(
        &self,
        request: &ChatRequest,
    ) -> Result<ChatCompletion, OpenAiError> {
        let response = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await?;

        let response = Self::check_status(response).await?;
        let payload: ChatResponse = response.json().await?;
        Ok(payload.into())
    }

    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, OpenAiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "unknown error".to_string());
        Err(OpenAiError::Api { status, message })
    }

    #[cfg(test)]
    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }
}
