//! The notes pipeline: acquire audio, transcribe, summarize, write.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tempfile::TempDir;

use crate::llm::Summarizer;
use crate::source::{AudioFetcher, MediaSource};
use crate::transcription::Transcriber;

/// Single-pass orchestrator for one notes run.
///
/// Stages run strictly in order and the first failure aborts the run. The
/// temporary workspace used for downloaded audio is removed on every exit
/// path, success or error.
pub struct NotesPipeline {
    fetcher: AudioFetcher,
    transcriber: Box<dyn Transcriber>,
    summarizer: Box<dyn Summarizer>,
    transcript_dest: Option<PathBuf>,
}

impl NotesPipeline {
    pub fn new(
        fetcher: AudioFetcher,
        transcriber: Box<dyn Transcriber>,
        summarizer: Box<dyn Summarizer>,
    ) -> Self {
        Self {
            fetcher,
            transcriber,
            summarizer,
            transcript_dest: None,
        }
    }

    /// Also write the raw transcript to `path` before summarizing.
    pub fn with_transcript_dest(mut self, path: Option<PathBuf>) -> Self {
        self.transcript_dest = path;
        self
    }

    /// Run the full pipeline for `source`, writing the notes to `dest`.
    pub async fn run(&self, source: &str, dest: &Path) -> Result<()> {
        let source = MediaSource::resolve(source);

        // The guard keeps a downloaded file alive until the run is over;
        // dropping it removes the directory on success and on early returns.
        let (audio_path, _workspace) = self.acquire_audio(&source)?;

        let transcript = self.transcriber.transcribe(&audio_path).await?;

        if let Some(transcript_dest) = &self.transcript_dest {
            std::fs::write(transcript_dest, &transcript).with_context(|| {
                format!(
                    "Failed to write transcript to {}",
                    transcript_dest.display()
                )
            })?;
            tracing::info!("Transcript saved to {}", transcript_dest.display());
        }

        let notes = self.summarizer.summarize(&transcript).await?;

        std::fs::write(dest, &notes)
            .with_context(|| format!("Failed to write notes to {}", dest.display()))?;

        Ok(())
    }

    /// Produce the audio file for a source. Local files are used in place;
    /// remote URLs are downloaded into a fresh temporary workspace whose
    /// guard is returned alongside the path.
    fn acquire_audio(&self, source: &MediaSource) -> Result<(PathBuf, Option<TempDir>)> {
        match source {
            MediaSource::Local(path) => {
                tracing::debug!("Using local audio file {}", path.display());
                Ok((path.clone(), None))
            }
            MediaSource::Remote(url) => {
                let workspace = TempDir::new().context("Failed to create temporary workspace")?;
                let audio_path = self.fetcher.fetch(url, workspace.path())?;
                Ok((audio_path, Some(workspace)))
            }
        }
    }
}
