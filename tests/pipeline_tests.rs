//! Pipeline behavior with stubbed transcription and summarization stages.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use anyhow::Result;
use async_trait::async_trait;

use jotter::llm::Summarizer;
use jotter::pipeline::NotesPipeline;
use jotter::source::AudioFetcher;
use jotter::transcription::Transcriber;

const NOTES: &str = "**Summary:** A walkthrough of the quantile trick.\n";

/// Transcriber stub that records the audio path it was handed.
#[derive(Clone)]
struct RecordingTranscriber {
    seen: Arc<Mutex<Option<PathBuf>>>,
    text: String,
}

impl RecordingTranscriber {
    fn new(text: &str) -> Self {
        Self {
            seen: Arc::new(Mutex::new(None)),
            text: text.to_string(),
        }
    }

    fn seen_path(&self) -> Option<PathBuf> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transcriber for RecordingTranscriber {
    async fn transcribe(&self, audio_path: &Path) -> Result<String> {
        *self.seen.lock().unwrap() = Some(audio_path.to_path_buf());
        Ok(self.text.clone())
    }
}

struct FixedSummarizer(String);

#[async_trait]
impl Summarizer for FixedSummarizer {
    async fn summarize(&self, _transcript: &str) -> Result<String> {
        Ok(self.0.clone())
    }
}

struct FailingSummarizer;

#[async_trait]
impl Summarizer for FailingSummarizer {
    async fn summarize(&self, _transcript: &str) -> Result<String> {
        anyhow::bail!("service rejected the request")
    }
}

#[tokio::test]
async fn local_run_writes_notes_verbatim() {
    let workdir = tempfile::tempdir().unwrap();
    let dest = workdir.path().join("notes.md");
    // Pre-existing content must be replaced, not appended to.
    std::fs::write(&dest, "stale notes from an earlier run, much longer than the new ones").unwrap();

    let transcriber = RecordingTranscriber::new("the transcript");
    let pipeline = NotesPipeline::new(
        AudioFetcher::new("unused-downloader", "mp3"),
        Box::new(transcriber.clone()),
        Box::new(FixedSummarizer(NOTES.to_string())),
    );

    pipeline
        .run("samples/quantile-trick.mp3", &dest)
        .await
        .unwrap();

    let written = std::fs::read_to_string(&dest).unwrap();
    assert_eq!(written, NOTES, "destination should hold the summarizer output exactly");

    // Local sources are handed to the transcriber in place.
    assert_eq!(
        transcriber.seen_path().as_deref(),
        Some(Path::new("samples/quantile-trick.mp3"))
    );
}

#[tokio::test]
async fn transcript_artifact_is_written_when_requested() {
    let workdir = tempfile::tempdir().unwrap();
    let dest = workdir.path().join("notes.md");
    let transcript_dest = workdir.path().join("talk.txt");

    let pipeline = NotesPipeline::new(
        AudioFetcher::new("unused-downloader", "mp3"),
        Box::new(RecordingTranscriber::new("the raw transcript")),
        Box::new(FixedSummarizer(NOTES.to_string())),
    )
    .with_transcript_dest(Some(transcript_dest.clone()));

    pipeline.run("talk.mp3", &dest).await.unwrap();

    assert_eq!(
        std::fs::read_to_string(&transcript_dest).unwrap(),
        "the raw transcript"
    );
    assert_eq!(std::fs::read_to_string(&dest).unwrap(), NOTES);
}

#[tokio::test]
async fn summarizer_failure_leaves_the_destination_unwritten() {
    let workdir = tempfile::tempdir().unwrap();
    let dest = workdir.path().join("notes.md");

    let pipeline = NotesPipeline::new(
        AudioFetcher::new("unused-downloader", "mp3"),
        Box::new(RecordingTranscriber::new("the transcript")),
        Box::new(FailingSummarizer),
    );

    let err = pipeline.run("talk.mp3", &dest).await.unwrap_err();

    assert!(err.to_string().contains("service rejected"));
    assert!(!dest.exists(), "failed runs must not write the destination");
}

#[cfg(unix)]
mod remote {
    use super::*;
    use std::os::unix::fs::PermissionsExt;

    fn install_fake_downloader(dir: &Path) -> PathBuf {
        // Touches whatever file follows -o, like the real tool would.
        let script = dir.join("yt-dlp");
        std::fs::write(
            &script,
            "#!/bin/sh\nprev=\"\"\nfor a in \"$@\"; do\n  if [ \"$prev\" = \"-o\" ]; then : > \"$a\"; fi\n  prev=\"$a\"\ndone\n",
        )
        .unwrap();
        let mut perms = std::fs::metadata(&script).unwrap().permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&script, perms).unwrap();
        script
    }

    #[tokio::test]
    async fn remote_workspace_is_removed_after_success() {
        let bin_dir = tempfile::tempdir().unwrap();
        let script = install_fake_downloader(bin_dir.path());
        let workdir = tempfile::tempdir().unwrap();
        let dest = workdir.path().join("notes.md");

        let transcriber = RecordingTranscriber::new("the transcript");
        let pipeline = NotesPipeline::new(
            AudioFetcher::new(script.to_str().unwrap(), "mp3"),
            Box::new(transcriber.clone()),
            Box::new(FixedSummarizer(NOTES.to_string())),
        );

        pipeline
            .run("https://www.youtube.com/watch?v=XXXX", &dest)
            .await
            .unwrap();

        let audio_path = transcriber.seen_path().expect("transcriber ran");
        assert!(audio_path.ends_with("audio.mp3"));

        let workspace = audio_path.parent().unwrap();
        assert!(
            !workspace.exists(),
            "temporary workspace should be removed after the run"
        );
        assert_eq!(std::fs::read_to_string(&dest).unwrap(), NOTES);
    }

    #[tokio::test]
    async fn remote_workspace_is_removed_after_failure() {
        let bin_dir = tempfile::tempdir().unwrap();
        let script = install_fake_downloader(bin_dir.path());
        let workdir = tempfile::tempdir().unwrap();
        let dest = workdir.path().join("notes.md");

        let transcriber = RecordingTranscriber::new("the transcript");
        let pipeline = NotesPipeline::new(
            AudioFetcher::new(script.to_str().unwrap(), "mp3"),
            Box::new(transcriber.clone()),
            Box::new(FailingSummarizer),
        );

        let err = pipeline
            .run("https://www.youtube.com/watch?v=XXXX", &dest)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("service rejected"));

        let audio_path = transcriber.seen_path().expect("transcriber ran");
        let workspace = audio_path.parent().unwrap();
        assert!(
            !workspace.exists(),
            "temporary workspace should be removed after a failed run"
        );
        assert!(!dest.exists());
    }
}
