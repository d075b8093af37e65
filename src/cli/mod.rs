//! Command-line interface for smartdo.

pub mod args;
pub mod commands;
