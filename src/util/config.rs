//! Configuration file support for netan.
//!
//! Two configuration file locations are read:
//! - Global: `~/.netan/config.toml` - User-wide defaults
//! - Project: `.netan/config.toml` - Project-specific overrides
//!
//! Project config takes precedence over global config. With no files present
//! the defaults reproduce the fixed `g++ -std=c++11 -O2` contract.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// netan configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Toolchain settings
    pub toolchain: ToolchainSettings,
}

/// Compiler overrides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolchainSettings {
    /// Compiler program replacing the platform default (`g++` / `g++.exe`)
    pub cxx: Option<PathBuf>,

    /// Extra flags appended after the fixed flags. An empty list is an
    /// explicit setting and clears flags from a lower-precedence file.
    pub cxxflags: Option<Vec<String>>,
}

impl ToolchainSettings {
    /// Extra compiler flags, empty when none are configured.
    pub fn extra_flags(&self) -> &[String] {
        self.cxxflags.as_deref().unwrap_or_default()
    }
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    /// Load configuration with fallback to defaults if the file is missing or broken.
    pub fn load_or_default(path: &Path) -> Self {
        if path.exists() {
            Self::load(path).unwrap_or_else(|e| {
                tracing::warn!("Failed to load config from {}: {:#}", path.display(), e);
                Self::default()
            })
        } else {
            Self::default()
        }
    }

    /// Merge another config into this one (other takes precedence).
    pub fn merge(&mut self, other: Config) {
        if other.toolchain.cxx.is_some() {
            self.toolchain.cxx = other.toolchain.cxx;
        }
        if other.toolchain.cxxflags.is_some() {
            self.toolchain.cxxflags = other.toolchain.cxxflags;
        }
    }
}

/// Load merged configuration from global and project locations.
///
/// Order of precedence (highest to lowest):
/// 1. Project config (.netan/config.toml)
/// 2. Global config (~/.netan/config.toml)
/// 3. Defaults
pub fn load_config(global_path: Option<&Path>, project_path: &Path) -> Config {
    let mut config = Config::default();

    if let Some(global) = global_path {
        config.merge(Config::load_or_default(global));
    }

    config.merge(Config::load_or_default(project_path));

    config
}

/// Get the global netan config directory (~/.netan).
pub fn global_config_dir() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|b| b.home_dir().join(".netan"))
}

/// Get the global config path (~/.netan/config.toml).
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("config.toml"))
}

/// Get the project config path (.netan/config.toml).
pub fn project_config_path(project_root: &Path) -> PathBuf {
    project_root.join(".netan").join("config.toml")
}
