//! Ordered, position-addressed collection of tasks.

use crate::error::TodoError;

use super::{EditOutcome, Task, TaskEdit};

/// The task collection.
///
/// Positions are zero-based. Updates keep every position stable; a deletion
/// removes one slot and shifts later tasks down by one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    #[must_use]
    pub const fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    /// Build a collection from tasks in the given order.
    #[must_use]
    pub const fn from_tasks(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    /// Append a task and return its position.
    pub fn add(&mut self, task: Task) -> usize {
        self.tasks.push(task);
        self.tasks.len() - 1
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Task] {
        &self.tasks
    }

    /// Remove the task at `index` and return it.
    ///
    /// # Errors
    ///
    /// Returns `TodoError::NotFound` if there is no task at `index`.
    pub fn delete(&mut self, index: usize) -> Result<Task, TodoError> {
        self.check(index)?;
        Ok(self.tasks.remove(index))
    }

    /// Replace the task at `index`, returning the previous one.
    ///
    /// # Errors
    ///
    /// Returns `TodoError::NotFound` if there is no task at `index`.
    pub fn update(&mut self, index: usize, task: Task) -> Result<Task, TodoError> {
        self.check(index)?;
        Ok(std::mem::replace(&mut self.tasks[index], task))
    }

    /// Replace the task at `index` with a copy marked done.
    ///
    /// # Errors
    ///
    /// Returns `TodoError::NotFound` if there is no task at `index`.
    pub fn mark_done(&mut self, index: usize) -> Result<&Task, TodoError> {
        self.check(index)?;
        let done = self.tasks[index].completed();
        self.tasks[index] = done;
        Ok(&self.tasks[index])
    }

    /// Apply `edit` to the task at `index` and store the result in its place.
    ///
    /// # Errors
    ///
    /// Returns `TodoError::NotFound` if there is no task at `index`.
    pub fn edit(&mut self, index: usize, edit: &TaskEdit) -> Result<EditOutcome, TodoError> {
        self.check(index)?;
        let outcome = edit.apply(&self.tasks[index]);
        self.tasks[index] = outcome.task.clone();
        Ok(outcome)
    }

    /// Positions of tasks whose title, due, priority or status contain `term`.
    ///
    /// A blank term matches every task.
    #[must_use]
    pub fn filter(&self, term: &str) -> Vec<usize> {
        self.tasks
            .iter()
            .enumerate()
            .filter(|(_, task)| task.matches_term(term))
            .map(|(i, _)| i)
            .collect()
    }

    fn check(&self, index: usize) -> Result<(), TodoError> {
        if index < self.tasks.len() {
            Ok(())
        } else {
            Err(TodoError::NotFound(format!(
                "no task at position {} (list has {})",
                index + 1,
                self.tasks.len()
            )))
        }
    }
}

impl<'a> IntoIterator for &'a TaskList {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
