//! Shared testing utilities for reelprompt CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const CREDENTIAL: &str = "test-api-key";
pub const GENERATE_PATH: &str = "/models/gemini-2.5-pro:generateContent";

/// Testing harness providing an isolated `$HOME` for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        Self { root }
    }

    /// Absolute path to the emulated `$HOME` directory.
    pub fn home(&self) -> &Path {
        self.root.path()
    }

    /// Data directory the binary resolves from `$HOME`.
    pub fn data_dir(&self) -> PathBuf {
        self.home().join(".reelprompt")
    }

    /// Build a command for invoking the compiled `reelprompt` binary.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("reelprompt").expect("Failed to locate reelprompt binary");
        cmd.current_dir(self.home())
            .env("HOME", self.home())
            .env_remove("REELPROMPT_HOME")
            .env_remove("RUST_LOG");
        cmd
    }

    /// Point the Gemini client at a local mock server.
    pub fn use_api_url(&self, url: &str) {
        self.write_data_file("config.toml", &format!("[gemini]\napi_url = \"{}\"\n", url));
    }

    pub fn save_credential(&self) {
        self.write_data_file("credential", CREDENTIAL);
    }

    pub fn write_data_file(&self, key: &str, content: &str) {
        fs::create_dir_all(self.data_dir()).expect("Failed to create data directory");
        fs::write(self.data_dir().join(key), content).expect("Failed to write data file");
    }

    pub fn read_data_file(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.data_dir().join(key)).ok()
    }

    /// Parsed `history` slot, or an empty list when absent.
    pub fn history(&self) -> Vec<serde_json::Value> {
        self.read_data_file("history")
            .map(|raw| serde_json::from_str(&raw).expect("history should be valid JSON"))
            .unwrap_or_default()
    }
}

/// Gemini response body carrying `text` as the only part.
#[allow(dead_code)]
pub fn response_body(text: &str) -> String {
    serde_json::json!({ "candidates": [{ "content": { "parts": [{ "text": text }] } }] })
        .to_string()
}
