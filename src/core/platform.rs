//! Host platform naming conventions.

use std::fmt;

/// Platform-dependent naming used by both setup and launch.
///
/// Exactly two profiles exist. Everything that is not Windows-class is
/// treated as Unix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformProfile {
    /// Windows-class hosts (`.exe` suffix, `g++.exe`).
    Windows,
    /// Every other host (no suffix, `g++`).
    Unix,
}

impl PlatformProfile {
    /// Profile of the host this binary was compiled for.
    pub fn host() -> Self {
        Self::from_os(std::env::consts::OS)
    }

    /// Map an OS identifier (as in `std::env::consts::OS`) to a profile.
    pub fn from_os(os: &str) -> Self {
        match os {
            "windows" | "win32" => PlatformProfile::Windows,
            _ => PlatformProfile::Unix,
        }
    }

    /// Executable file suffix, including the dot.
    pub fn exe_suffix(&self) -> &'static str {
        match self {
            PlatformProfile::Windows => ".exe",
            PlatformProfile::Unix => "",
        }
    }

    /// Name of the C++ compiler driver searched on PATH.
    pub fn compiler_name(&self) -> &'static str {
        match self {
            PlatformProfile::Windows => "g++.exe",
            PlatformProfile::Unix => "g++",
        }
    }

    /// Append the platform suffix to a binary stem.
    pub fn exe_name(&self, stem: &str) -> String {
        format!("{}{}", stem, self.exe_suffix())
    }

    /// Toolchain package the operator should install when none is found.
    pub fn install_hint(&self) -> &'static str {
        match self {
            PlatformProfile::Windows => "Install MinGW-w64 and make sure `g++.exe` is on PATH",
            PlatformProfile::Unix => {
                "Install build-essential (Debian/Ubuntu) or your distribution's g++ package"
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PlatformProfile::Windows => "windows",
            PlatformProfile::Unix => "unix",
        }
    }
}

impl fmt::Display for PlatformProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
