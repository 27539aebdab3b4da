//! CLI interface for the sananmuunnos binary.

pub mod args;
pub mod commands;

pub use args::Cli;
