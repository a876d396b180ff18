//! Build target descriptors.
//!
//! The set of programs is fixed: the analyzer and two visualizers. Sources
//! and outputs are relative to the project root.

use std::path::{Path, PathBuf};

use super::platform::PlatformProfile;

/// Flags passed to the compiler for every target.
pub const BASE_FLAGS: &[&str] = &["-std=c++11", "-O2"];

/// A named output binary plus the sources it is compiled from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildTarget {
    /// Output binary stem (no platform suffix).
    pub name: &'static str,
    /// Source files, in the order handed to the compiler.
    pub sources: &'static [&'static str],
    /// Compiler flags, placed before `-o`.
    pub flags: &'static [&'static str],
}

/// The network analyzer, the binary `netan run` launches.
pub const ANALYZER: BuildTarget = BuildTarget {
    name: "enhanced_analyzer",
    sources: &["src/main.cpp", "src/network_analyzer.cpp"],
    flags: BASE_FLAGS,
};

pub const DATA_VISUALIZER: BuildTarget = BuildTarget {
    name: "data_visualizer",
    sources: &["data_visualizer.cpp"],
    flags: BASE_FLAGS,
};

pub const SIMPLE_VISUALIZER: BuildTarget = BuildTarget {
    name: "simple_visualizer",
    sources: &["simple_visualizer.cpp"],
    flags: BASE_FLAGS,
};

/// Build order. The analyzer always comes first.
pub const BUILD_TARGETS: [BuildTarget; 3] = [ANALYZER, DATA_VISUALIZER, SIMPLE_VISUALIZER];

/// Programs run by `netan viz`, in order.
pub const VISUALIZERS: [BuildTarget; 2] = [DATA_VISUALIZER, SIMPLE_VISUALIZER];

impl BuildTarget {
    /// Output file name with the platform suffix.
    pub fn output_name(&self, platform: PlatformProfile) -> String {
        platform.exe_name(self.name)
    }

    /// Absolute location of the built binary under `root`.
    pub fn output_path(&self, root: &Path, platform: PlatformProfile) -> PathBuf {
        root.join(self.output_name(platform))
    }
}
