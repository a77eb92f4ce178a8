//! CLI argument definitions using clap

use clap::Parser;
use clap_complete::Shell;
use std::path::PathBuf;

/// jotter - Turn talks, lectures, and videos into markdown notes
#[derive(Parser, Debug)]
#[command(name = "jotter")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Media to take notes from: a local audio file or an http(s) video URL
    #[arg(value_name = "SOURCE", required_unless_present = "completions")]
    pub source: Option<String>,

    /// Where to write the generated notes
    #[arg(short, long, default_value = "notes.md", value_name = "PATH")]
    pub dest: PathBuf,

    /// Also save the raw transcript to this path
    #[arg(long, value_name = "PATH")]
    pub transcript: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Print a shell completion script and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn dest_defaults_to_notes_md() {
        let cli = Cli::parse_from(["jotter", "talk.mp3"]);
        assert_eq!(cli.source.as_deref(), Some("talk.mp3"));
        assert_eq!(cli.dest, PathBuf::from("notes.md"));
        assert!(cli.transcript.is_none());
    }

    #[test]
    fn dest_and_transcript_accept_paths() {
        let cli = Cli::parse_from([
            "jotter",
            "https://example.com/v",
            "--dest",
            "out/lecture.md",
            "--transcript",
            "out/lecture.txt",
        ]);
        assert_eq!(cli.dest, PathBuf::from("out/lecture.md"));
        assert_eq!(cli.transcript, Some(PathBuf::from("out/lecture.txt")));
    }
}
