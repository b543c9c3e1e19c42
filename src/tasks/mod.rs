//! In-memory task list editing
//!
//! [`TaskEditor`] owns the ordered task labels, the edit cursor and the draft
//! input as one unit. Every operation either applies fully or leaves all three
//! untouched.

mod editor;
mod error;

pub use editor::{EditCursor, Submission, TaskEditor};
pub use error::{Result, TaskError};

/// A single to-do entry. Its only identity is its position in the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub label: String,
}

impl Task {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}
