//! Note generation for jotter
//!
//! Wraps transcripts in a fixed summarization prompt and sends them to a
//! hosted chat model.

mod openai;
pub mod prompts;

pub use openai::OpenAiSummarizer;

use anyhow::Result;
use async_trait::async_trait;

/// Turns a raw transcript into markdown note text.
#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(&self, transcript: &str) -> Result<String>;
}
