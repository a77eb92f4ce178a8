//! Transcription module for jotter
//!
//! Speech-to-text is delegated to a hosted model; the trait keeps the
//! pipeline testable without network access.

mod whisper;

pub use whisper::WhisperApiTranscriber;

use std::path::Path;

use anyhow::Result;
use async_trait::async_trait;

/// Converts an audio file into plain text.
#[async_trait]
pub trait Transcriber: Send + Sync {
    async fn transcribe(&self, audio_path: &Path) -> Result<String>;
}
