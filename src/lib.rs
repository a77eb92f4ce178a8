//! jotter - Turn talks, lectures, and videos into markdown notes
//!
//! Takes a local audio file or a video URL, transcribes the speech through a
//! hosted model, and distills the transcript into a structured markdown note.

pub mod cli;
pub mod config;
pub mod llm;
pub mod openai;
pub mod pipeline;
pub mod source;
pub mod transcription;
