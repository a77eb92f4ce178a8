//! Media source handling for jotter
//!
//! Classifies input references and, for remote URLs, fetches audio through an
//! external downloader.

mod fetcher;

pub use fetcher::{AudioFetcher, FetchError};

use std::path::PathBuf;

/// Where the audio for a run comes from.
///
/// Produced once by [`MediaSource::resolve`] and matched exhaustively by the
/// pipeline; no later stage re-derives the classification from the raw string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaSource {
    /// A file that is already on disk.
    Local(PathBuf),
    /// A video URL whose audio must be downloaded first.
    Remote(String),
}

impl MediaSource {
    /// Classify an input reference. `http://` and `https://` prefixes mean
    /// remote; everything else is treated as a local path. Classification
    /// never fails: bad paths and bad URLs surface in the stages that use
    /// them.
    pub fn resolve(input: &str) -> Self {
        if input.starts_with("http://") || input.starts_with("https://") {
            Self::Remote(input.to_string())
        } else {
            Self::Local(PathBuf::from(input))
        }
    }
}
