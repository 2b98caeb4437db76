//! CLI module for toolshelf - command-line interface and output.
//!
//! Provides the main entry point with subcommands for browsing the tool
//! catalog, comparing tools, reading articles and subscribing.

pub mod commands;
pub mod render;

pub use commands::Cli;
