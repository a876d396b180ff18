//! User-friendly diagnostic messages.
//!
//! Every failure reported to the operator carries its root cause plus the
//! next step to take.

use std::fmt;
use std::path::PathBuf;

/// Common suggestion messages for consistent error handling.
pub mod suggestions {
    /// The analyzer has not been built yet.
    pub const RUN_SETUP: &str = "Run `netan setup` to build the programs";

    /// After a successful analysis.
    pub const RUN_VIZ: &str = "Run the visualizations with `netan viz`";

    /// Compiler output was not enough.
    pub const BUILD_VERBOSE: &str = "Run `netan setup --verbose` to see the full compiler command";

    /// Configured compiler override is wrong.
    pub const CHECK_CONFIG: &str =
        "Check the `[toolchain] cxx` setting in `.netan/config.toml` or `~/.netan/config.toml`";
}

/// A diagnostic message with optional suggestions.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// Primary message
    pub message: String,
    /// Additional context lines
    pub context: Vec<String>,
    /// Suggested fixes
    pub suggestions: Vec<String>,
    /// Related location (file path)
    pub location: Option<PathBuf>,
}

impl Diagnostic {
    /// Create a new error diagnostic.
    pub fn error(message: impl Into<String>) -> Self {
        Diagnostic {
            message: message.into(),
            context: Vec::new(),
            suggestions: Vec::new(),
            location: None,
        }
    }

    /// Add context to the diagnostic.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context.push(context.into());
        self
    }

    /// Add a suggestion for fixing the issue.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    /// Add a file location.
    pub fn with_location(mut self, path: impl Into<PathBuf>) -> Self {
        self.location = Some(path.into());
        self
    }

    /// Format the diagnostic for terminal output.
    pub fn format(&self, color: bool) -> String {
        let mut output = String::new();

        let error_prefix = if color {
            "\x1b[1;31merror\x1b[0m"
        } else {
            "error"
        };
        output.push_str(&format!("{}: {}\n", error_prefix, self.message));

        if let Some(ref path) = self.location {
            output.push_str(&format!("  --> {}\n", path.display()));
        }

        for ctx in &self.context {
            for line in ctx.lines() {
                output.push_str(&format!("  | {}\n", line));
            }
        }

        let help_prefix = if color {
            "\x1b[1;32mhelp\x1b[0m"
        } else {
            "help"
        };
        match self.suggestions.as_slice() {
            [] => {}
            [only] => output.push_str(&format!("{}: {}\n", help_prefix, only)),
            many => {
                output.push_str(&format!("{}: consider:\n", help_prefix));
                for (i, suggestion) in many.iter().enumerate() {
                    output.push_str(&format!("  {}. {}\n", i + 1, suggestion));
                }
            }
        }

        output
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format(false))
    }
}
