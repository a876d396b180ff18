//! Provisioning error types and diagnostics.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::core::PlatformProfile;
use crate::util::diagnostic::{suggestions, Diagnostic};
use crate::util::process::ProcessResult;

/// Error raised while preparing directories or building programs.
#[derive(Debug, Error)]
pub enum ProvisionError {
    #[error("failed to create directory `{}`", path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("C++ compiler `{}` not found", program.display())]
    ToolchainNotFound {
        program: PathBuf,
        platform: PlatformProfile,
        /// Spawn error or the version query's failure output
        reason: String,
        /// Whether the program came from a config override
        configured: bool,
    },

    #[error("failed to compile `{target}` ({status})")]
    Compilation {
        target: String,
        command: String,
        status: ProcessResult,
        diagnostics: String,
    },

    #[error("could not start the compiler for `{target}`")]
    CompilerSpawn {
        target: String,
        command: String,
        #[source]
        source: io::Error,
    },
}

impl ProvisionError {
    /// Convert to an operator-facing diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            ProvisionError::Filesystem { path, source } => Diagnostic::error(self.to_string())
                .with_location(path)
                .with_context(source.to_string())
                .with_suggestion(
                    "Make sure the path is not an existing file and that you can write to it",
                ),

            ProvisionError::ToolchainNotFound {
                platform,
                reason,
                configured,
                ..
            } => {
                let mut diag = Diagnostic::error(self.to_string()).with_context(reason.clone());
                diag = if *configured {
                    diag.with_suggestion(suggestions::CHECK_CONFIG)
                } else {
                    diag.with_suggestion(platform.install_hint())
                };
                diag
            }

            ProvisionError::Compilation {
                command,
                diagnostics,
                ..
            } => {
                let mut diag = Diagnostic::error(self.to_string());
                if !diagnostics.is_empty() {
                    diag = diag.with_context(diagnostics.clone());
                }
                diag.with_context(format!("command: {}", command))
                    .with_suggestion("Fix the compiler errors above and run `netan setup` again")
            }

            ProvisionError::CompilerSpawn {
                command, source, ..
            } => Diagnostic::error(self.to_string())
                .with_context(source.to_string())
                .with_context(format!("command: {}", command))
                .with_suggestion(suggestions::BUILD_VERBOSE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toolchain_not_found_suggests_install() {
        let err = ProvisionError::ToolchainNotFound {
            program: PathBuf::from("g++"),
            platform: PlatformProfile::Unix,
            reason: "No such file or directory (os error 2)".into(),
            configured: false,
        };

        let out = err.to_diagnostic().format(false);
        assert!(out.starts_with("error: C++ compiler `g++` not found"));
        assert!(out.contains("build-essential"));
    }

    #[test]
    fn test_configured_compiler_points_at_config() {
        let err = ProvisionError::ToolchainNotFound {
            program: PathBuf::from("/opt/bad/clang++"),
            platform: PlatformProfile::Windows,
            reason: "exit code 1".into(),
            configured: true,
        };

        let out = err.to_diagnostic().format(false);
        assert!(out.contains(".netan/config.toml"));
        assert!(!out.contains("MinGW"));
    }

    #[test]
    fn test_compilation_error_keeps_compiler_output() {
        let err = ProvisionError::Compilation {
            target: "data_visualizer".into(),
            command: "g++ -std=c++11 -O2 -o data_visualizer data_visualizer.cpp".into(),
            status: ProcessResult::exited(1),
            diagnostics: "data_visualizer.cpp:1:1: error: expected declaration".into(),
        };

        assert_eq!(err.to_string(), "failed to compile `data_visualizer` (exit code 1)");
        let out = err.to_diagnostic().format(false);
        assert!(out.contains("expected declaration"));
        assert!(out.contains("command: g++ -std=c++11 -O2 -o data_visualizer"));
    }
}
