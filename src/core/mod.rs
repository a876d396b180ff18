//! Core data structures for netan.
//!
//! - Platform naming conventions (executable suffix, compiler name)
//! - The fixed set of build targets

pub mod platform;
pub mod target;

pub use platform::PlatformProfile;
pub use target::{
    BuildTarget, ANALYZER, BASE_FLAGS, BUILD_TARGETS, DATA_VISUALIZER, SIMPLE_VISUALIZER,
    VISUALIZERS,
};
