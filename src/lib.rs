//! smartdo - a smart to-do list for the command line
//!
//! Tasks are typed in natural language. A priority, a due date and a clock
//! time are extracted from the text, the remainder becomes the title, and the
//! list is kept in a JSON file.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod features;
pub mod output;
pub mod storage;
pub mod tasks;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::TodoError;
pub use tasks::{Priority, Status, Task, TaskList};
