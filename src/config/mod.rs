//! Run configuration.
//!
//! Flags are parsed once by [`cli::Args`] and turned into an immutable
//! [`ConvertConfig`] that is passed by reference to every stage.

pub mod cli;
pub mod options;

pub use cli::{expand_legacy_flags, Args};
pub use options::{ConvertConfig, OutputMode};
