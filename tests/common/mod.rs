//! Shared integration-test helpers for running the `airgate` binary.

#![allow(dead_code)]

use std::path::PathBuf;
use std::process::{Command, Output};

/// Helpers for invoking the built `airgate` binary.
pub struct Airgate;

impl Airgate {
    /// Runs `airgate` with the given arguments and waits for it to exit.
    #[allow(clippy::missing_panics_doc)]
    pub fn spawn_command(args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_airgate"))
            .args(args)
            .env_remove("AIRGATE_LOG_LEVEL")
            .env_remove("AIRGATE_MAX_CONFIG_SIZE")
            .env_remove("AIRGATE_LOG_FORMAT")
            .env_remove("AIRGATE_COLOR")
            .env("NO_COLOR", "1")
            .output()
            .expect("failed to run airgate")
    }

    /// Returns the path to a file under `tests/fixtures`.
    pub fn fixture_path(name: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests/fixtures")
            .join(name)
    }

    /// Returns a fixture path as a `String` for use as an argument.
    pub fn fixture(name: &str) -> String {
        Self::fixture_path(name).display().to_string()
    }
}
