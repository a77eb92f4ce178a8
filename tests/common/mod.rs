use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

pub fn run_jotter(args: &[&str]) -> Output {
    TestEnv::new().run(args)
}

/// Sandboxed environment for driving the jotter binary.
///
/// Uses throwaway HOME/XDG directories so a developer's real config cannot
/// leak into assertions, keeps OPENAI_API_KEY unset unless a test provides
/// one, and runs the binary inside a scratch working directory so relative
/// destinations like the default notes.md stay contained.
pub struct TestEnv {
    home: TempDir,
    config: TempDir,
    work: TempDir,
    api_key: Option<String>,
    path_override: Option<PathBuf>,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            home: tempfile::tempdir().expect("create temporary HOME dir"),
            config: tempfile::tempdir().expect("create temporary XDG config dir"),
            work: tempfile::tempdir().expect("create temporary working dir"),
            api_key: None,
            path_override: None,
        }
    }

    #[allow(dead_code)]
    pub fn with_api_key(mut self, key: &str) -> Self {
        self.api_key = Some(key.to_string());
        self
    }

    /// Restrict PATH to `dir`, hiding every real tool from the binary.
    #[allow(dead_code)]
    pub fn with_path(mut self, dir: &Path) -> Self {
        self.path_override = Some(dir.to_path_buf());
        self
    }

    #[allow(dead_code)]
    pub fn workdir(&self) -> &Path {
        self.work.path()
    }

    pub fn run(&self, args: &[&str]) -> Output {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_jotter"));
        cmd.args(args)
            .current_dir(self.work.path())
            .env("HOME", self.home.path())
            .env("XDG_CONFIG_HOME", self.config.path());

        match &self.api_key {
            Some(key) => cmd.env("OPENAI_API_KEY", key),
            None => cmd.env_remove("OPENAI_API_KEY"),
        };

        if let Some(path) = &self.path_override {
            cmd.env("PATH", path);
        }

        cmd.output().expect("failed to execute jotter binary")
    }

    #[allow(dead_code)]
    pub fn write_config(&self, contents: &str) {
        let config_dir = self.config.path().join("jotter");
        std::fs::create_dir_all(&config_dir).expect("create config directory");
        std::fs::write(config_dir.join("config.toml"), contents).expect("write config file");
    }
}
