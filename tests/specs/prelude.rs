//! Shared helpers for CLI specs

pub use predicates::prelude::*;

use assert_cmd::assert::Assert;
use assert_cmd::Command;

/// `jw` with none of the developer's JW_* settings
pub fn jw() -> Cmd {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("jw").unwrap();
    for var in [
        "JW_API_URL",
        "JW_AUTH_TOKEN",
        "JW_TIMEOUT_MS",
        "JW_POLL_INTERVAL_MS",
        "RUST_LOG",
    ] {
        cmd.env_remove(var);
    }
    Cmd(cmd)
}

pub struct Cmd(Command);

impl Cmd {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.0.args(args);
        self
    }

    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.0.env(key, value);
        self
    }

    pub fn passes(mut self) -> Outcome {
        Outcome(self.0.assert().success())
    }

    pub fn fails(mut self) -> Outcome {
        Outcome(self.0.assert().failure())
    }

    /// Fails as a usage error
    pub fn misused(mut self) -> Outcome {
        Outcome(self.0.assert().code(2))
    }
}

pub struct Outcome(Assert);

impl Outcome {
    pub fn stdout_has(self, needle: &str) -> Self {
        Outcome(self.0.stdout(predicate::str::contains(needle)))
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        Outcome(self.0.stderr(predicate::str::contains(needle)))
    }

    pub fn stdout_eq(self, expected: &str) -> Self {
        let actual = String::from_utf8_lossy(&self.0.get_output().stdout).to_string();
        similar_asserts::assert_eq!(actual, expected);
        self
    }
}
