//! Centralized shell output.
//!
//! All operator-facing output goes through [`Shell`]:
//! - Status messages with consistent formatting (`{status:>12} {message}`)
//! - Actionable diagnostics with suggestions
//! - Scoped timing spans
//!
//! Output is written to stderr so that a launched program owns stdout.

use std::fmt::Display;
use std::io::{self, IsTerminal};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use super::diagnostic::Diagnostic;

/// Output verbosity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// --quiet: errors only
    Quiet,
    #[default]
    Normal,
    /// --verbose: debug logging and full command lines
    Verbose,
}

/// Color output mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorChoice {
    /// Detect TTY and use colors if available.
    #[default]
    Auto,
    /// Always use ANSI colors.
    Always,
    /// Never use ANSI colors.
    Never,
}

impl std::str::FromStr for ColorChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(ColorChoice::Auto),
            "always" => Ok(ColorChoice::Always),
            "never" => Ok(ColorChoice::Never),
            _ => Err(format!(
                "invalid color choice '{}'; expected 'auto', 'always', or 'never'",
                s
            )),
        }
    }
}

/// Status types for output messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    // Success statuses (green)
    Created,
    Found,
    Finished,

    // In-progress statuses (cyan)
    Compiling,
    Running,

    // Info status (blue)
    Hint,

    // Error status (red)
    Error,
}

impl Status {
    fn as_str(&self) -> &'static str {
        match self {
            Status::Created => "Created",
            Status::Found => "Found",
            Status::Finished => "Finished",
            Status::Compiling => "Compiling",
            Status::Running => "Running",
            Status::Hint => "Hint",
            Status::Error => "error",
        }
    }

    fn color_code(&self) -> &'static str {
        match self {
            Status::Created | Status::Found | Status::Finished => "\x1b[1;32m",
            Status::Compiling | Status::Running => "\x1b[1;36m",
            Status::Hint => "\x1b[1;34m",
            Status::Error => "\x1b[1;31m",
        }
    }
}

const STATUS_WIDTH: usize = 12;

/// Central shell for all CLI output.
#[derive(Debug)]
pub struct Shell {
    verbosity: Verbosity,
    use_color: bool,
    /// Lines recorded instead of printed (tests only set this)
    captured: Option<Mutex<Vec<String>>>,
}

impl Shell {
    pub fn new(verbosity: Verbosity, color: ColorChoice) -> Self {
        let use_color = match color {
            ColorChoice::Auto => io::stderr().is_terminal(),
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        };

        Shell {
            verbosity,
            use_color,
            captured: None,
        }
    }

    /// Create a shell from CLI flags. Quiet wins over verbose.
    pub fn from_flags(quiet: bool, verbose: bool, color: ColorChoice) -> Self {
        let verbosity = if quiet {
            Verbosity::Quiet
        } else if verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        };
        Shell::new(verbosity, color)
    }

    /// A colorless shell that records every line instead of printing it.
    pub fn capture(verbosity: Verbosity) -> Self {
        Shell {
            verbosity,
            use_color: false,
            captured: Some(Mutex::new(Vec::new())),
        }
    }

    /// Lines recorded by a capturing shell.
    pub fn captured(&self) -> Vec<String> {
        self.captured
            .as_ref()
            .and_then(|c| c.lock().ok().map(|lines| lines.clone()))
            .unwrap_or_default()
    }

    pub fn is_quiet(&self) -> bool {
        self.verbosity == Verbosity::Quiet
    }

    pub fn is_verbose(&self) -> bool {
        self.verbosity == Verbosity::Verbose
    }

    pub fn use_color(&self) -> bool {
        self.use_color
    }

    /// Print a status message.
    ///
    /// In quiet mode, only Error status is printed.
    pub fn status(&self, status: Status, msg: impl Display) {
        if self.is_quiet() && status != Status::Error {
            return;
        }

        let prefix = self.format_status(status);
        self.write_line(format!("{} {}", prefix, msg));
    }

    /// Print a status message only with `--verbose`.
    pub fn verbose(&self, status: Status, msg: impl Display) {
        if self.is_verbose() {
            self.status(status, msg);
        }
    }

    pub fn error(&self, msg: impl Display) {
        self.status(Status::Error, msg);
    }

    /// Print a diagnostic block. Shown in every verbosity.
    pub fn diagnostic(&self, diag: &Diagnostic) {
        self.write_line(diag.format(self.use_color).trim_end().to_string());
    }

    fn write_line(&self, line: String) {
        match &self.captured {
            Some(buffer) => {
                if let Ok(mut lines) = buffer.lock() {
                    lines.push(line);
                }
            }
            None => eprintln!("{}", line),
        }
    }

    fn format_status(&self, status: Status) -> String {
        let text = status.as_str();

        if self.use_color {
            format!(
                "{}{:>width$}\x1b[0m",
                status.color_code(),
                text,
                width = STATUS_WIDTH
            )
        } else {
            format!("{:>width$}", text, width = STATUS_WIDTH)
        }
    }

    /// Create a scoped span for timing operations.
    pub fn span(self: &Arc<Self>, status: Status, msg: impl Display) -> Span {
        Span::new(Arc::clone(self), status, msg.to_string())
    }
}

impl Default for Shell {
    fn default() -> Self {
        Shell::new(Verbosity::Normal, ColorChoice::Auto)
    }
}

/// A scoped timing span.
///
/// The start line is printed on creation. The end line with the elapsed time
/// is only printed by `finish_with_message`, so an abandoned span (an early
/// return on error) leaves no `Finished` line behind.
pub struct Span {
    shell: Arc<Shell>,
    start: Instant,
}

impl Span {
    fn new(shell: Arc<Shell>, status: Status, message: String) -> Self {
        shell.status(status, message);

        Span {
            shell,
            start: Instant::now(),
        }
    }

    /// Mark the span as finished with a custom message.
    pub fn finish_with_message(self, msg: impl Display) {
        let duration_str = format_duration(self.start.elapsed());
        self.shell
            .status(Status::Finished, format!("{} in {}", msg, duration_str));
    }
}

/// Format a duration in a human-readable way.
fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs_f64();
    if secs < 60.0 {
        format!("{:.2}s", secs)
    } else {
        format!("{:.1}m", secs / 60.0)
    }
}
