//! Global context for netan operations.
//!
//! Captured once at startup and passed explicitly to every operation.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::config::{global_config_path, load_config, project_config_path, Config};
use crate::core::PlatformProfile;

/// Project root, platform naming and merged configuration.
#[derive(Debug, Clone)]
pub struct GlobalContext {
    /// Project root; sources, outputs and data directories live here
    cwd: PathBuf,

    platform: PlatformProfile,

    config: Config,
}

impl GlobalContext {
    /// Context for the current directory on the host platform.
    pub fn new() -> Result<Self> {
        let cwd = std::env::current_dir().context("failed to get current directory")?;
        Ok(Self::with_cwd(cwd))
    }

    /// Context rooted at `cwd`, reading global and project config.
    pub fn with_cwd(cwd: PathBuf) -> Self {
        let config = load_config(
            global_config_path().as_deref(),
            &project_config_path(&cwd),
        );
        GlobalContext {
            cwd,
            platform: PlatformProfile::host(),
            config,
        }
    }

    /// Fully specified context, without touching config files.
    pub fn from_parts(cwd: PathBuf, platform: PlatformProfile, config: Config) -> Self {
        GlobalContext {
            cwd,
            platform,
            config,
        }
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    pub fn platform(&self) -> PlatformProfile {
        self.platform
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
