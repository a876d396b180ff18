//! Command implementations

pub mod completions;
pub mod run;
pub mod setup;
pub mod viz;
