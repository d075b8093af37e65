//! Storage layer for smartdo.
//!
//! The task list lives in a single JSON file, `~/.smartdo/tasks.json` unless
//! configured otherwise.

mod store;

pub use store::TaskStore;
