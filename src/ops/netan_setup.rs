//! Implementation of `netan setup`.
//!
//! A linear pipeline: create the data directories, detect the compiler,
//! then compile every target in order. The first failure ends the run and
//! no later step is attempted.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::builder::{build, detect_toolchain, BuildResult, ProvisionError, Toolchain};
use crate::core::BUILD_TARGETS;
use crate::util::fs::ensure_dir;
use crate::util::process::Executor;
use crate::util::shell::{Shell, Status};
use crate::util::GlobalContext;

/// Directories the analyzer reads from and writes to, relative to the root.
pub const DATA_DIRS: [&str; 4] = [
    "data/raw",
    "data/processed",
    "data/results",
    "docs/visualizations",
];

/// Outcome of ensuring one directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnsuredDir {
    pub path: PathBuf,
    /// False when the directory already existed
    pub created: bool,
}

/// Outcome of a successful setup.
#[derive(Debug)]
pub struct SetupResult {
    /// Every directory ensured, in order
    pub directories: Vec<EnsuredDir>,
    pub toolchain: Toolchain,
    /// Built programs, in build order
    pub artifacts: Vec<BuildResult>,
}

/// Create each directory under `root` along with missing ancestors.
///
/// Existing directories are left alone, so calling this twice is harmless.
pub fn ensure_directories(root: &Path, dirs: &[&str]) -> Result<Vec<EnsuredDir>, ProvisionError> {
    let mut ensured = Vec::with_capacity(dirs.len());
    for dir in dirs {
        let path = root.join(dir);
        let created = ensure_dir(&path).map_err(|source| ProvisionError::Filesystem {
            path: path.clone(),
            source,
        })?;
        tracing::debug!(
            "{} directory {}",
            if created { "created" } else { "found" },
            path.display()
        );
        ensured.push(EnsuredDir { path, created });
    }
    Ok(ensured)
}

/// Run the whole setup pipeline.
pub fn setup(
    ctx: &GlobalContext,
    shell: &Arc<Shell>,
    exec: &dyn Executor,
) -> Result<SetupResult, ProvisionError> {
    let root = ctx.cwd();

    let directories = ensure_directories(root, &DATA_DIRS)?;
    let created: Vec<&str> = DATA_DIRS
        .iter()
        .zip(&directories)
        .filter(|(_, dir)| dir.created)
        .map(|(name, _)| *name)
        .collect();
    if !created.is_empty() {
        shell.status(Status::Created, created.join(", "));
    }

    let toolchain = detect_toolchain(ctx.platform(), &ctx.config().toolchain, exec)?;
    shell.status(
        Status::Found,
        format!("{} ({})", toolchain.program().display(), toolchain.version()),
    );

    let mut artifacts = Vec::with_capacity(BUILD_TARGETS.len());
    for target in &BUILD_TARGETS {
        let span = shell.span(Status::Compiling, target.name);
        shell.verbose(
            Status::Running,
            format!("`{}`", toolchain.compile_command(target, root).display_command()),
        );
        let artifact = build(target, &toolchain, root, exec)?;
        span.finish_with_message(target.output_name(ctx.platform()));
        artifacts.push(artifact);
    }

    tracing::debug!("setup complete: {} programs built", artifacts.len());

    Ok(SetupResult {
        directories,
        toolchain,
        artifacts,
    })
}
