//! Subprocess execution utilities.

use std::ffi::OsStr;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};

/// Builder for subprocess execution.
#[derive(Debug, Clone)]
pub struct ProcessBuilder {
    program: PathBuf,
    args: Vec<String>,
    cwd: Option<PathBuf>,
}

impl ProcessBuilder {
    /// Create a new process builder for the given program.
    pub fn new(program: impl AsRef<Path>) -> Self {
        ProcessBuilder {
            program: program.as_ref().to_path_buf(),
            args: Vec::new(),
            cwd: None,
        }
    }

    /// Add a single argument.
    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_string_lossy().into_owned());
        self
    }

    /// Add multiple arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.args.extend(
            args.into_iter()
                .map(|s| s.as_ref().to_string_lossy().into_owned()),
        );
        self
    }

    /// Set the working directory.
    pub fn cwd(mut self, cwd: impl AsRef<Path>) -> Self {
        self.cwd = Some(cwd.as_ref().to_path_buf());
        self
    }

    /// Get the working directory, if one was set.
    pub fn get_cwd(&self) -> Option<&Path> {
        self.cwd.as_deref()
    }

    fn build_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);

        if let Some(ref cwd) = self.cwd {
            cmd.current_dir(cwd);
        }

        cmd
    }

    /// Display the command for error messages.
    pub fn display_command(&self) -> String {
        let mut parts = vec![self.program.display().to_string()];
        parts.extend(self.args.iter().cloned());
        parts.join(" ")
    }
}

/// How a child process terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessResult {
    code: Option<i32>,
    signal: Option<i32>,
}

impl ProcessResult {
    /// A process that exited normally with `code`.
    pub fn exited(code: i32) -> Self {
        ProcessResult {
            code: Some(code),
            signal: None,
        }
    }

    /// A process terminated by `signal`.
    pub fn signaled(signal: i32) -> Self {
        ProcessResult {
            code: None,
            signal: Some(signal),
        }
    }

    pub fn from_status(status: ExitStatus) -> Self {
        ProcessResult {
            code: status.code(),
            signal: terminating_signal(&status),
        }
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    pub fn code(&self) -> Option<i32> {
        self.code
    }

    pub fn signal(&self) -> Option<i32> {
        self.signal
    }
}

impl fmt::Display for ProcessResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.code, self.signal) {
            (Some(code), _) => write!(f, "exit code {}", code),
            (None, Some(sig)) => write!(f, "signal {}", sig),
            (None, None) => write!(f, "unknown exit status"),
        }
    }
}

#[cfg(unix)]
fn terminating_signal(status: &ExitStatus) -> Option<i32> {
    use std::os::unix::process::ExitStatusExt;
    status.signal()
}

#[cfg(not(unix))]
fn terminating_signal(_status: &ExitStatus) -> Option<i32> {
    None
}

/// Captured result of a process run to completion.
#[derive(Debug, Clone)]
pub struct ProcessOutput {
    pub status: ProcessResult,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

impl ProcessOutput {
    /// Compiler-style diagnostics: stderr, or stdout when stderr is empty.
    pub fn diagnostics(&self) -> String {
        let stderr = String::from_utf8_lossy(&self.stderr);
        if !stderr.trim().is_empty() {
            return stderr.trim_end().to_string();
        }
        String::from_utf8_lossy(&self.stdout).trim_end().to_string()
    }
}

/// Runs external processes.
///
/// Operations take an `Executor` so tests can record command lines without
/// spawning anything.
pub trait Executor {
    /// Run to completion with stdout and stderr captured.
    ///
    /// `Err` means the process could not be spawned or waited on.
    fn exec(&self, cmd: &ProcessBuilder) -> io::Result<ProcessOutput>;

    /// Run with stdin, stdout and stderr inherited from this process.
    ///
    /// Returns only after the child has terminated.
    fn exec_inherited(&self, cmd: &ProcessBuilder) -> io::Result<ProcessResult>;
}

/// Executor backed by `std::process`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemExecutor;

impl Executor for SystemExecutor {
    fn exec(&self, cmd: &ProcessBuilder) -> io::Result<ProcessOutput> {
        tracing::debug!("exec: {}", cmd.display_command());

        let output = cmd
            .build_command()
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()?;

        Ok(ProcessOutput {
            status: ProcessResult::from_status(output.status),
            stdout: output.stdout,
            stderr: output.stderr,
        })
    }

    fn exec_inherited(&self, cmd: &ProcessBuilder) -> io::Result<ProcessResult> {
        tracing::debug!("spawn: {}", cmd.display_command());

        let mut child = cmd
            .build_command()
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()?;

        let status = child.wait()?;
        Ok(ProcessResult::from_status(status))
    }
}

/// Find an executable in PATH.
pub fn find_executable(name: &str) -> Option<PathBuf> {
    which::which(name).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_command() {
        let pb = ProcessBuilder::new("g++").args(["-std=c++11", "-O2", "-o", "out", "main.cpp"]);

        assert_eq!(pb.display_command(), "g++ -std=c++11 -O2 -o out main.cpp");
    }

    #[test]
    fn test_process_result_display() {
        assert!(ProcessResult::exited(0).success());
        assert!(!ProcessResult::exited(2).success());
        assert!(!ProcessResult::signaled(9).success());
        assert_eq!(ProcessResult::exited(3).to_string(), "exit code 3");
        assert_eq!(ProcessResult::signaled(15).to_string(), "signal 15");
    }

    #[test]
    fn test_diagnostics_prefers_stderr() {
        let out = ProcessOutput {
            status: ProcessResult::exited(1),
            stdout: b"ignored\n".to_vec(),
            stderr: b"main.cpp:1: error\n".to_vec(),
        };
        assert_eq!(out.diagnostics(), "main.cpp:1: error");

        let out = ProcessOutput {
            status: ProcessResult::exited(1),
            stdout: b"only stdout\n".to_vec(),
            stderr: Vec::new(),
        };
        assert_eq!(out.diagnostics(), "only stdout");
    }

    #[cfg(unix)]
    #[test]
    fn test_system_executor_captures_output() {
        let output = SystemExecutor
            .exec(&ProcessBuilder::new("sh").args(["-c", "echo hello; exit 3"]))
            .unwrap();

        assert_eq!(output.status.code(), Some(3));
        assert!(String::from_utf8_lossy(&output.stdout).contains("hello"));
    }

    #[test]
    fn test_missing_program_is_spawn_error() {
        let result = SystemExecutor.exec(&ProcessBuilder::new("netan-definitely-not-a-program"));
        assert!(result.is_err());
    }
}
