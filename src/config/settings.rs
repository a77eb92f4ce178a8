//! Application settings management

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Hosted model access
    #[serde(default)]
    pub openai: OpenAiSettings,

    /// External audio downloader for URL sources
    #[serde(default)]
    pub downloader: DownloaderSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAiSettings {
    /// API key; falls back to the OPENAI_API_KEY environment variable
    #[serde(default)]
    pub api_key: String,

    /// API endpoint override (empty = api.openai.com)
    #[serde(default)]
    pub base_url: String,

    /// Speech-to-text model
    #[serde(default = "default_transcriber_model")]
    pub transcriber_model: String,

    /// Chat model used for note generation
    #[serde(default = "default_summarizer_model")]
    pub summarizer_model: String,

    /// Sampling temperature for note generation (unset = service default)
    #[serde(default)]
    pub temperature: Option<f32>,

    /// Output token cap for note generation (unset = service default)
    #[serde(default)]
    pub max_output_tokens: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DownloaderSettings {
    /// Downloader executable, looked up on PATH
    #[serde(default = "default_downloader_bin")]
    pub bin: String,

    /// Audio format requested from the downloader
    #[serde(default = "default_audio_format")]
    pub audio_format: String,
}

// Default value functions

fn default_transcriber_model() -> String {
    "whisper-1".to_string()
}

fn default_summarizer_model() -> String {
    "gpt-3.5-turbo".to_string()
}

fn default_downloader_bin() -> String {
    "yt-dlp".to_string()
}

fn default_audio_format() -> String {
    "mp3".to_string()
}

impl Default for OpenAiSettings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: String::new(),
            transcriber_model: default_transcriber_model(),
            summarizer_model: default_summarizer_model(),
            temperature: None,
            max_output_tokens: None,
        }
    }
}

impl Default for DownloaderSettings {
    fn default() -> Self {
        Self {
            bin: default_downloader_bin(),
            audio_format: default_audio_format(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            openai: OpenAiSettings::default(),
            downloader: DownloaderSettings::default(),
        }
    }
}

impl Settings {
    /// Load settings from the configuration file
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            tracing::debug!("No config file found, using defaults");
            let mut settings = Self::default();
            settings.apply_env_overrides();
            return Ok(settings);
        }

        let content = std::fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

        let mut settings: Settings = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", config_path.display()))?;

        settings.apply_env_overrides();

        Ok(settings)
    }

    /// Fill credentials from the environment when the config leaves them out.
    fn apply_env_overrides(&mut self) {
        if self.openai.api_key.trim().is_empty() {
            if let Ok(key) = std::env::var("OPENAI_API_KEY") {
                if !key.trim().is_empty() {
                    self.openai.api_key = key;
                }
            }
        }
    }

    /// Get the path to the configuration file
    pub fn config_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("com", "jotter", "jotter")
            .context("Could not determine config directory")?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}
