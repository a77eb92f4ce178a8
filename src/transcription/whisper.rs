//! Hosted Whisper transcription.

use std::path::Path;

use anyhow::{Context, Result};
use async_trait::async_trait;

use crate::config::Settings;
use crate::openai::OpenAiClient;

use super::Transcriber;

/// Transcribes audio files through the OpenAI transcription endpoint.
///
/// The whole file goes up in a single request; there is no chunking, so the
/// service's upload limit applies to the input as-is.
pub struct WhisperApiTranscriber {
    client: OpenAiClient,
    model: String,
}

impl WhisperApiTranscriber {
    pub fn new(client: OpenAiClient, settings: &Settings) -> Self {
        Self {
            client,
            model: settings.openai.transcriber_model.clone(),
        }
    }
}

#[async_trait]
impl Transcriber for WhisperApiTranscriber {
    async fn transcribe(&self, audio_path: &Path) -> Result<String> {
        let audio = tokio::fs::read(audio_path)
            .await
            .with_context(|| format!("Failed to read audio file: {}", audio_path.display()))?;

        // The service sniffs the container format from the file name.
        let filename = audio_path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("audio.mp3")
            .to_string();

        tracing::info!(
            "Transcribing {} ({} bytes) with {}",
            audio_path.display(),
            audio.len(),
            self.model
        );

        let text = self
            .client
            .transcribe_audio(audio, &filename, &self.model)
            .await
            .context("Transcription request failed")?;

        Ok(text)
    }
}
