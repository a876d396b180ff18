//! C++ toolchain detection and compile commands.
//!
//! Detection priority:
//! 1. `[toolchain] cxx` from config
//! 2. The platform default (`g++.exe` on Windows, `g++` elsewhere)
//!
//! A toolchain is usable when `<compiler> --version` exits with status 0.

use std::path::{Path, PathBuf};

use crate::core::{BuildTarget, PlatformProfile};
use crate::util::config::ToolchainSettings;
use crate::util::process::{find_executable, Executor, ProcessBuilder};

use super::errors::ProvisionError;

/// A compiler that answered the version query.
#[derive(Debug, Clone)]
pub struct Toolchain {
    program: PathBuf,
    platform: PlatformProfile,
    /// First line of `--version` output
    version: String,
    extra_flags: Vec<String>,
}

impl Toolchain {
    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn platform(&self) -> PlatformProfile {
        self.platform
    }

    /// Command compiling `target` inside `root`.
    ///
    /// Shape: `<compiler> <flags...> <extra flags...> -o <output><suffix> <sources...>`
    pub fn compile_command(&self, target: &BuildTarget, root: &Path) -> ProcessBuilder {
        ProcessBuilder::new(&self.program)
            .args(target.flags)
            .args(&self.extra_flags)
            .arg("-o")
            .arg(target.output_name(self.platform))
            .args(target.sources)
            .cwd(root)
    }
}

/// Query the platform compiler (or configured override) for its version.
///
/// Any spawn failure or non-zero exit is reported as
/// [`ProvisionError::ToolchainNotFound`]; the version output is discarded
/// apart from the first line, which is kept for logging.
pub fn detect_toolchain(
    platform: PlatformProfile,
    settings: &ToolchainSettings,
    exec: &dyn Executor,
) -> Result<Toolchain, ProvisionError> {
    let configured = settings.cxx.is_some();
    let program = settings
        .cxx
        .clone()
        .unwrap_or_else(|| PathBuf::from(platform.compiler_name()));

    let probe = ProcessBuilder::new(&program).arg("--version");
    let not_found = |reason: String| ProvisionError::ToolchainNotFound {
        program: program.clone(),
        platform,
        reason,
        configured,
    };

    let output = match exec.exec(&probe) {
        Ok(output) => output,
        Err(e) => {
            tracing::debug!("`{}` could not be spawned: {}", probe.display_command(), e);
            return Err(not_found(e.to_string()));
        }
    };

    if !output.status.success() {
        let mut reason = format!("`{}` failed with {}", probe.display_command(), output.status);
        let diagnostics = output.diagnostics();
        if !diagnostics.is_empty() {
            reason.push('\n');
            reason.push_str(&diagnostics);
        }
        return Err(not_found(reason));
    }

    let version = String::from_utf8_lossy(&output.stdout)
        .lines()
        .next()
        .unwrap_or_default()
        .trim()
        .to_string();

    match find_executable(&program.to_string_lossy()) {
        Some(path) => tracing::debug!("using compiler at {} ({})", path.display(), version),
        None => tracing::debug!("using compiler {} ({})", program.display(), version),
    }

    Ok(Toolchain {
        program,
        platform,
        version,
        extra_flags: settings.extra_flags().to_vec(),
    })
}
