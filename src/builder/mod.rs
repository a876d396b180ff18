//! Compiling the analyzer and visualizers.
//!
//! Each [`BuildTarget`] is compiled by a single compiler invocation; there is
//! no object caching or dependency tracking.

use std::path::{Path, PathBuf};

use crate::core::BuildTarget;
use crate::util::process::Executor;

mod errors;
pub mod toolchain;

pub use errors::ProvisionError;
pub use toolchain::{detect_toolchain, Toolchain};

/// A program produced by [`build`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildResult {
    /// Target name (no suffix)
    pub target: &'static str,
    /// Location of the built binary
    pub path: PathBuf,
}

/// Compile one target inside `root`.
///
/// The compiler's output is captured; on failure it is carried in
/// [`ProvisionError::Compilation`].
pub fn build(
    target: &BuildTarget,
    toolchain: &Toolchain,
    root: &Path,
    exec: &dyn Executor,
) -> Result<BuildResult, ProvisionError> {
    let cmd = toolchain.compile_command(target, root);
    tracing::debug!("compiling `{}`: {}", target.name, cmd.display_command());

    let output = exec.exec(&cmd).map_err(|source| ProvisionError::CompilerSpawn {
        target: target.name.to_string(),
        command: cmd.display_command(),
        source,
    })?;

    if !output.status.success() {
        return Err(ProvisionError::Compilation {
            target: target.name.to_string(),
            command: cmd.display_command(),
            status: output.status,
            diagnostics: output.diagnostics(),
        });
    }

    // Warnings still go to the log
    let diagnostics = output.diagnostics();
    if !diagnostics.is_empty() {
        tracing::warn!("`{}` compiled with warnings:\n{}", target.name, diagnostics);
    }

    Ok(BuildResult {
        target: target.name,
        path: target.output_path(root, toolchain.platform()),
    })
}
