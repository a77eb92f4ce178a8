//! Audio download via an external yt-dlp style tool.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use thiserror::Error;

use crate::config::Settings;

/// Errors raised while materializing remote audio.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("downloader '{bin}' not found on PATH; install it to use URL sources")]
    ToolMissing { bin: String },

    #[error("downloader exited with {status}")]
    DownloadFailed { status: std::process::ExitStatus },

    #[error("failed to run downloader '{bin}'")]
    Spawn {
        bin: String,
        #[source]
        source: std::io::Error,
    },
}

/// Downloads the audio track of a remote video into a working directory.
///
/// Invokes `<bin> -x --audio-format <fmt> -o <path> <url>` and leaves the
/// tool's stderr attached to the terminal so its progress output stays
/// visible.
pub struct AudioFetcher {
    bin: String,
    audio_format: String,
}

impl AudioFetcher {
    pub fn new(bin: impl Into<String>, audio_format: impl Into<String>) -> Self {
        Self {
            bin: bin.into(),
            audio_format: audio_format.into(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(&settings.downloader.bin, &settings.downloader.audio_format)
    }

    /// True when the downloader binary can be spawned at all.
    pub fn is_available(&self) -> bool {
        Command::new(&self.bin)
            .arg("--help")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .is_ok()
    }

    /// Extract the audio of `url` into `workdir` and return the resulting
    /// file path. The tool's presence is probed first so a missing install
    /// fails before any network activity.
    pub fn fetch(&self, url: &str, workdir: &Path) -> Result<PathBuf, FetchError> {
        if !self.is_available() {
            return Err(FetchError::ToolMissing {
                bin: self.bin.clone(),
            });
        }

        let audio_path = workdir.join(format!("audio.{}", self.audio_format));

        tracing::info!("Downloading audio from {} via {}", url, self.bin);

        let status = Command::new(&self.bin)
            .args(["-x", "--audio-format", self.audio_format.as_str(), "-o"])
            .arg(&audio_path)
            .arg(url)
            .stdout(Stdio::null())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| FetchError::Spawn {
                bin: self.bin.clone(),
                source,
            })?;

        if !status.success() {
            tracing::warn!("Downloader exited with {}", status);
            return Err(FetchError::DownloadFailed { status });
        }

        Ok(audio_path)
    }
}
