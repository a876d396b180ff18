//! netan - build and run orchestration for the network analyzer
//!
//! This crate provides the library behind the `netan` binary: preparing the
//! data directories, compiling the analyzer and its visualizers with the
//! system C++ compiler, and launching the built programs.

pub mod builder;
pub mod core;
pub mod ops;
pub mod util;

/// Test utilities and mocks for netan unit tests.
///
/// Only compiled for tests. Provides a mock process executor so commands
/// can be checked without a compiler installed.
#[cfg(test)]
pub mod test_support;

pub use core::{BuildTarget, PlatformProfile};
pub use util::context::GlobalContext;
