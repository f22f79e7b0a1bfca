//! Command-line interface definitions and handlers.

/// CLI argument parsing with clap.
pub mod args;

/// Entry point implementations.
pub mod commands;

pub use args::{ContentArgs, LocalArgs};
