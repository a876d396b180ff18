//! Test utilities and mocks for netan unit tests.
//!
//! [`MockExecutor`] stands in for [`SystemExecutor`](crate::util::process::SystemExecutor):
//! it records every command line and answers with canned outputs, so
//! provisioning and launching can be tested without a compiler or binaries.
//!
//! # Example
//!
//! ```rust,ignore
//! let exec = MockExecutor::new();
//! exec.expect("g++ --version", MockProcessOutput::success("g++ 12.2.0"));
//! exec.set_default(MockProcessOutput::success(""));
//!
//! // run code taking `&dyn Executor`...
//! assert_eq!(exec.calls()[0], "g++ --version");
//! ```

use std::io;
use std::path::Path;
use std::sync::Mutex;

use tempfile::TempDir;

use crate::core::PlatformProfile;
use crate::util::config::Config;
use crate::util::process::{Executor, ProcessBuilder, ProcessOutput, ProcessResult};
use crate::util::GlobalContext;

/// Mock process output for testing command execution.
#[derive(Debug, Clone)]
pub struct MockProcessOutput {
    /// Exit status code (0 = success).
    pub status: i32,
    /// Standard output.
    pub stdout: String,
    /// Standard error.
    pub stderr: String,
    /// When set, the process fails to spawn with this error kind.
    pub spawn_error: Option<io::ErrorKind>,
}

impl MockProcessOutput {
    /// Create a successful output with the given stdout.
    pub fn success(stdout: impl Into<String>) -> Self {
        MockProcessOutput {
            status: 0,
            stdout: stdout.into(),
            stderr: String::new(),
            spawn_error: None,
        }
    }

    /// Create a failure output with the given stderr and status code.
    pub fn failure(status: i32, stderr: impl Into<String>) -> Self {
        MockProcessOutput {
            status,
            stdout: String::new(),
            stderr: stderr.into(),
            spawn_error: None,
        }
    }

    /// The program does not exist.
    pub fn not_found() -> Self {
        MockProcessOutput {
            status: -1,
            stdout: String::new(),
            stderr: String::new(),
            spawn_error: Some(io::ErrorKind::NotFound),
        }
    }

    fn to_result(&self) -> io::Result<ProcessResult> {
        match self.spawn_error {
            Some(kind) => Err(io::Error::new(kind, "mock spawn failure")),
            None => Ok(ProcessResult::exited(self.status)),
        }
    }
}

impl Default for MockProcessOutput {
    fn default() -> Self {
        MockProcessOutput::success("")
    }
}

/// Pattern for matching commands in MockExecutor.
#[derive(Debug, Clone)]
pub enum CommandPattern {
    /// Exact match on full command string.
    Exact(String),
    /// Match if command starts with prefix.
    StartsWith(String),
    /// Match if command contains substring.
    Contains(String),
}

impl CommandPattern {
    pub fn matches(&self, cmd: &str) -> bool {
        match self {
            CommandPattern::Exact(s) => cmd == s,
            CommandPattern::StartsWith(s) => cmd.starts_with(s),
            CommandPattern::Contains(s) => cmd.contains(s),
        }
    }
}

#[derive(Debug, Clone)]
struct CommandExpectation {
    pattern: CommandPattern,
    output: MockProcessOutput,
}

/// A command seen by the mock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    /// Full command line.
    pub command: String,
    /// Whether stdio was inherited rather than captured.
    pub inherited: bool,
}

/// Mock process executor.
///
/// The first expectation whose pattern matches wins; unmatched commands fall
/// back to the default output, or fail to spawn when none is set.
#[derive(Debug, Default)]
pub struct MockExecutor {
    expectations: Mutex<Vec<CommandExpectation>>,
    calls: Mutex<Vec<RecordedCall>>,
    default_output: Mutex<Option<MockProcessOutput>>,
}

impl MockExecutor {
    pub fn new() -> Self {
        MockExecutor::default()
    }

    /// Add an expectation for an exact command match.
    pub fn expect(&self, cmd: &str, output: MockProcessOutput) -> &Self {
        self.expect_pattern(CommandPattern::Exact(cmd.to_string()), output)
    }

    /// Add an expectation for a command starting with a prefix.
    pub fn expect_prefix(&self, prefix: &str, output: MockProcessOutput) -> &Self {
        self.expect_pattern(CommandPattern::StartsWith(prefix.to_string()), output)
    }

    /// Add an expectation for a command containing a substring.
    pub fn expect_contains(&self, substring: &str, output: MockProcessOutput) -> &Self {
        self.expect_pattern(CommandPattern::Contains(substring.to_string()), output)
    }

    pub fn expect_pattern(&self, pattern: CommandPattern, output: MockProcessOutput) -> &Self {
        self.expectations
            .lock()
            .unwrap()
            .push(CommandExpectation { pattern, output });
        self
    }

    /// Set a default output for commands that don't match any expectation.
    pub fn set_default(&self, output: MockProcessOutput) -> &Self {
        *self.default_output.lock().unwrap() = Some(output);
        self
    }

    /// Every command line, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.recorded().into_iter().map(|c| c.command).collect()
    }

    /// Command lines run with inherited stdio, in call order.
    pub fn inherited_calls(&self) -> Vec<String> {
        self.recorded()
            .into_iter()
            .filter(|c| c.inherited)
            .map(|c| c.command)
            .collect()
    }

    pub fn recorded(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    fn respond(&self, cmd: &ProcessBuilder, inherited: bool) -> MockProcessOutput {
        let command = cmd.display_command();
        self.calls.lock().unwrap().push(RecordedCall {
            command: command.clone(),
            inherited,
        });

        let expectations = self.expectations.lock().unwrap();
        if let Some(exp) = expectations.iter().find(|e| e.pattern.matches(&command)) {
            return exp.output.clone();
        }

        self.default_output
            .lock()
            .unwrap()
            .clone()
            .unwrap_or_else(MockProcessOutput::not_found)
    }
}

impl Executor for MockExecutor {
    fn exec(&self, cmd: &ProcessBuilder) -> io::Result<ProcessOutput> {
        let output = self.respond(cmd, false);
        let status = output.to_result()?;
        Ok(ProcessOutput {
            status,
            stdout: output.stdout.into_bytes(),
            stderr: output.stderr.into_bytes(),
        })
    }

    fn exec_inherited(&self, cmd: &ProcessBuilder) -> io::Result<ProcessResult> {
        self.respond(cmd, true).to_result()
    }
}

/// Context rooted at `root` with default config.
pub fn test_context(root: &Path, platform: PlatformProfile) -> GlobalContext {
    GlobalContext::from_parts(root.to_path_buf(), platform, Config::default())
}

/// Scratch project directory plus a Unix context rooted in it.
pub fn scratch_project() -> (TempDir, GlobalContext) {
    let tmp = TempDir::new().unwrap();
    let ctx = test_context(tmp.path(), PlatformProfile::Unix);
    (tmp, ctx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_matching_expectation_wins() {
        let exec = MockExecutor::new();
        exec.expect("g++ --version", MockProcessOutput::success("g++ 12"))
            .expect_prefix("g++", MockProcessOutput::failure(1, "boom"));

        let out = exec.exec(&ProcessBuilder::new("g++").arg("--version")).unwrap();
        assert!(out.status.success());

        let out = exec.exec(&ProcessBuilder::new("g++").arg("-c")).unwrap();
        assert_eq!(out.status.code(), Some(1));
        assert_eq!(exec.calls(), vec!["g++ --version", "g++ -c"]);
    }

    #[test]
    fn test_unmatched_command_fails_to_spawn() {
        let exec = MockExecutor::new();
        let err = exec.exec(&ProcessBuilder::new("cl")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
        assert_eq!(exec.calls(), vec!["cl"]);
    }

    #[test]
    fn test_inherited_calls_are_tracked() {
        let exec = MockExecutor::new();
        exec.set_default(MockProcessOutput::success(""));
        exec.exec(&ProcessBuilder::new("g++").arg("--version")).unwrap();
        exec.exec_inherited(&ProcessBuilder::new("./enhanced_analyzer")).unwrap();

        assert_eq!(exec.inherited_calls(), vec!["./enhanced_analyzer"]);
    }
}
