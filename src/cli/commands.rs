//! CLI command implementations

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::config::Settings;
use crate::llm::OpenAiSummarizer;
use crate::openai::OpenAiClient;
use crate::pipeline::NotesPipeline;
use crate::source::AudioFetcher;
use crate::transcription::WhisperApiTranscriber;

/// Run the notes pipeline for a source and report the result.
pub async fn take_notes(
    settings: &Settings,
    source: &str,
    dest: &Path,
    transcript: Option<PathBuf>,
) -> Result<()> {
    // Built before any stage runs so a missing credential fails at startup,
    // not after a long download.
    let client = OpenAiClient::from_settings(settings)?;

    let pipeline = NotesPipeline::new(
        AudioFetcher::from_settings(settings),
        Box::new(WhisperApiTranscriber::new(client.clone(), settings)),
        Box::new(OpenAiSummarizer::new(client, settings)),
    )
    .with_transcript_dest(transcript);

    pipeline.run(source, dest).await?;

    println!("Notes saved to: {}", dest.display());

    Ok(())
}
