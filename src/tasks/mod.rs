//! Task records and the task collection.

mod edit;
mod list;
mod types;

pub use edit::{EditField, EditOutcome, TaskEdit};
pub use list::TaskList;
pub use types::{Priority, Status, Task, UNTITLED};
