#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

use forecourt::Listing;
use tempfile::TempDir;

/// Path to the compiled `forecourt` binary.
pub fn forecourt_binary() -> &'static str {
    env!("CARGO_BIN_EXE_forecourt")
}

/// Helper struct to run forecourt commands in an isolated temp directory
pub struct ForecourtTest {
    pub temp_dir: TempDir,
}

impl ForecourtTest {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        ForecourtTest { temp_dir }
    }

    pub fn root(&self) -> PathBuf {
        self.temp_dir.path().join(".forecourt")
    }

    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(forecourt_binary())
            .args(args)
            .current_dir(self.temp_dir.path())
            .env_remove("FORECOURT_ROOT")
            .env_remove("FORECOURT_LOG")
            .env("NO_COLOR", "1")
            .output()
            .expect("Failed to execute forecourt command")
    }

    pub fn run_success(&self, args: &[&str]) -> String {
        let output = self.run(args);
        if !output.status.success() {
            panic!(
                "Command {:?} failed with status {:?}\nstdout: {}\nstderr: {}",
                args,
                output.status,
                String::from_utf8_lossy(&output.stdout),
                String::from_utf8_lossy(&output.stderr)
            );
        }
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    pub fn run_failure(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            !output.status.success(),
            "Expected command {:?} to fail, but it succeeded",
            args
        );
        String::from_utf8_lossy(&output.stderr).to_string()
    }

    /// Run with `--json` appended and parse stdout.
    pub fn run_json(&self, args: &[&str]) -> serde_json::Value {
        let mut args = args.to_vec();
        args.push("--json");
        let stdout = self.run_success(&args);
        serde_json::from_str(&stdout).expect("Failed to parse JSON output")
    }

    /// `ls --json` plus any extra arguments, as listings.
    pub fn ls(&self, extra: &[&str]) -> Vec<Listing> {
        let mut args = vec!["ls"];
        args.extend_from_slice(extra);
        serde_json::from_value(self.run_json(&args)).expect("ls output is not a listing array")
    }

    pub fn blob_path(&self, storage_key: &str) -> PathBuf {
        self.root().join("data").join(format!("{storage_key}.json"))
    }

    pub fn read_blob(&self, storage_key: &str) -> String {
        fs::read_to_string(self.blob_path(storage_key)).expect("Failed to read listings blob")
    }

    pub fn write_blob(&self, storage_key: &str, content: &str) {
        let dir = self.root().join("data");
        fs::create_dir_all(&dir).expect("Failed to create .forecourt/data directory");
        fs::write(self.blob_path(storage_key), content).expect("Failed to write listings blob");
    }

    pub fn write_config(&self, content: &str) {
        fs::create_dir_all(self.root()).expect("Failed to create .forecourt directory");
        fs::write(self.root().join("config.yaml"), content).expect("Failed to write config file");
    }
}

impl Default for ForecourtTest {
    fn default() -> Self {
        Self::new()
    }
}
