//! Implementation of `netan run` and `netan viz`.
//!
//! A built program is run as a child process with the parent's stdin, stdout
//! and stderr. Nothing is captured; the child owns the terminal until it
//! exits, and only then is its status reported.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::{BuildTarget, ANALYZER, VISUALIZERS};
use crate::util::diagnostic::{suggestions, Diagnostic};
use crate::util::process::{Executor, ProcessBuilder, ProcessResult};
use crate::util::shell::{Shell, Status};
use crate::util::GlobalContext;

/// Error raised while launching a built program.
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("program `{target}` not found at {}", path.display())]
    ExecutableNotFound { target: String, path: PathBuf },

    #[error("failed to start `{}`", path.display())]
    SpawnFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("`{target}` finished unsuccessfully ({status})")]
    NonZeroExit { target: String, status: ProcessResult },
}

impl LaunchError {
    /// Convert to an operator-facing diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            LaunchError::ExecutableNotFound { .. } => {
                Diagnostic::error(self.to_string()).with_suggestion(suggestions::RUN_SETUP)
            }
            LaunchError::SpawnFailed { path, source } => Diagnostic::error(self.to_string())
                .with_location(path)
                .with_context(source.to_string())
                .with_suggestion(
                    "Rebuild with `netan setup`; the file may be corrupt or not executable",
                ),
            LaunchError::NonZeroExit { .. } => Diagnostic::error(self.to_string()),
        }
    }

    /// Process exit code for this failure.
    ///
    /// A child's own non-zero code is forwarded; a child killed by a signal
    /// maps to `128 + signal` as shells do.
    pub fn exit_code(&self) -> i32 {
        match self {
            LaunchError::NonZeroExit { status, .. } => match (status.code(), status.signal()) {
                (Some(code), _) if code != 0 => code,
                (None, Some(sig)) => 128 + sig,
                _ => 1,
            },
            _ => 1,
        }
    }
}

/// Expected location of `target`'s binary, if it exists.
///
/// A pure existence check: permissions are not inspected.
pub fn locate_executable(target: &BuildTarget, ctx: &GlobalContext) -> Option<PathBuf> {
    let path = target.output_path(ctx.cwd(), ctx.platform());
    if path.is_file() {
        Some(path)
    } else {
        tracing::debug!("{} does not exist", path.display());
        None
    }
}

/// Spawn `exec_path` with inherited stdio inside `root` and wait for it.
///
/// Returns once the child has terminated, whatever its exit status.
pub fn run(exec_path: &Path, root: &Path, exec: &dyn Executor) -> Result<ProcessResult, LaunchError> {
    let cmd = ProcessBuilder::new(exec_path).cwd(root);
    let result = exec
        .exec_inherited(&cmd)
        .map_err(|source| LaunchError::SpawnFailed {
            path: exec_path.to_path_buf(),
            source,
        })?;
    tracing::debug!("{} exited with {}", exec_path.display(), result);
    Ok(result)
}

/// Locate and run one target; a non-zero exit is an error.
pub fn launch(
    target: &BuildTarget,
    ctx: &GlobalContext,
    shell: &Shell,
    exec: &dyn Executor,
) -> Result<ProcessResult, LaunchError> {
    let path = locate_executable(target, ctx).ok_or_else(|| LaunchError::ExecutableNotFound {
        target: target.name.to_string(),
        path: target.output_path(ctx.cwd(), ctx.platform()),
    })?;

    shell.status(Status::Running, format!("`{}`", path.display()));
    let result = run(&path, ctx.cwd(), exec)?;

    if !result.success() {
        return Err(LaunchError::NonZeroExit {
            target: target.name.to_string(),
            status: result,
        });
    }
    Ok(result)
}

/// `netan run`: run the analyzer, then point at the visualizers.
pub fn run_analyzer(
    ctx: &GlobalContext,
    shell: &Shell,
    exec: &dyn Executor,
) -> Result<(), LaunchError> {
    launch(&ANALYZER, ctx, shell, exec)?;

    shell.status(Status::Finished, "analysis completed");
    shell.status(Status::Hint, suggestions::RUN_VIZ);
    Ok(())
}

/// `netan viz`: run each visualizer in order, stopping at the first failure.
pub fn run_visualizers(
    ctx: &GlobalContext,
    shell: &Shell,
    exec: &dyn Executor,
) -> Result<(), LaunchError> {
    for target in &VISUALIZERS {
        launch(target, ctx, shell, exec)?;
    }

    shell.status(Status::Finished, "visualizations completed");
    Ok(())
}
