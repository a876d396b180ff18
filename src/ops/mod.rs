//! High-level operations.
//!
//! This module contains the implementation of netan commands.

pub mod netan_run;
pub mod netan_setup;

pub use netan_run::{
    launch, locate_executable, run, run_analyzer, run_visualizers, LaunchError,
};
pub use netan_setup::{ensure_directories, setup, EnsuredDir, SetupResult, DATA_DIRS};
