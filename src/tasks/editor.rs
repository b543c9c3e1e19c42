//! Task list editor state machine

use super::{Result, Task, TaskError};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EditCursor {
    #[default]
    None,
    Editing(usize),
}

/// What a successful submit did to the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    Added { index: usize },
    Updated { index: usize },
}

#[derive(Debug, Default)]
pub struct TaskEditor {
    tasks: Vec<Task>,
    cursor: EditCursor,
    draft: String,
}

impl TaskEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tasks<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tasks: labels.into_iter().map(Task::new).collect(),
            ..Self::default()
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn cursor(&self) -> EditCursor {
        self.cursor
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.cursor, EditCursor::Editing(_))
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    pub fn clear_draft(&mut self) {
        self.draft.clear();
    }

    /// Label for the submit button in the current mode.
    pub fn submit_label(&self) -> &'static str {
        if self.is_editing() {
            "Update Task"
        } else {
            "Add Task"
        }
    }

    /// Loads the task at `index` into the draft and enters edit mode.
    pub fn start_edit(&mut self, index: usize) -> Result<()> {
        let task = self.tasks.get(index).ok_or(TaskError::IndexOutOfRange {
            index,
            len: self.tasks.len(),
        })?;
        self.draft = task.label.clone();
        self.cursor = EditCursor::Editing(index);
        tracing::debug!("Editing task {}", index);
        Ok(())
    }

    /// Adds `text` as a new task, or replaces the task being edited.
    ///
    /// Blank text is rejected silently and nothing changes, draft included.
    pub fn submit(&mut self, text: impl Into<String>) -> Option<Submission> {
        let text = text.into();
        if text.trim().is_empty() {
            return None;
        }

        let submission = match self.cursor {
            EditCursor::Editing(index) if index < self.tasks.len() => {
                self.tasks[index] = Task::new(text);
                Submission::Updated { index }
            }
            // The cursor is reconciled on every delete, so a stale index
            // should not be reachable; treat it as a plain add.
            _ => {
                self.tasks.push(Task::new(text));
                Submission::Added {
                    index: self.tasks.len() - 1,
                }
            }
        };

        self.cursor = EditCursor::None;
        self.draft.clear();
        tracing::debug!("Submitted task: {:?}", submission);
        Some(submission)
    }

    /// Submits the current draft.
    pub fn submit_draft(&mut self) -> Option<Submission> {
        let draft = self.draft.clone();
        self.submit(draft)
    }

    /// Leaves edit mode without touching the list. Clears the draft.
    pub fn cancel_edit(&mut self) {
        if self.is_editing() {
            self.cursor = EditCursor::None;
            self.draft.clear();
            tracing::debug!("Edit cancelled");
        }
    }

    /// Removes the task at `index`, shifting later tasks down by one.
    ///
    /// An edit in progress on the removed task is cancelled. An edit on a
    /// later task follows it to its new position.
    pub fn delete_at(&mut self, index: usize) -> Result<Task> {
        if index >= self.tasks.len() {
            return Err(TaskError::IndexOutOfRange {
                index,
                len: self.tasks.len(),
            });
        }

        let removed = self.tasks.remove(index);

        if let EditCursor::Editing(editing) = self.cursor {
            if editing == index {
                self.cursor = EditCursor::None;
                self.draft.clear();
                tracing::debug!("Edited task {} was deleted, edit cancelled", index);
            } else if editing > index {
                self.cursor = EditCursor::Editing(editing - 1);
            }
        }

        tracing::debug!("Deleted task {}", index);
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(editor: &TaskEditor) -> Vec<&str> {
        editor.tasks().iter().map(|t| t.label.as_str()).collect()
    }

    fn abc() -> TaskEditor {
        TaskEditor::with_tasks(["A", "B", "C"])
    }

    #[test]
    fn test_new_editor_is_empty() {
        let editor = TaskEditor::new();
        assert!(editor.is_empty());
        assert_eq!(editor.cursor(), EditCursor::None);
        assert_eq!(editor.draft(), "");
        assert_eq!(editor.submit_label(), "Add Task");
    }

    #[test]
    fn test_submit_empty_is_rejected() {
        let mut editor = abc();
        editor.set_draft("");
        assert_eq!(editor.submit(""), None);
        assert_eq!(labels(&editor), ["A", "B", "C"]);
        assert_eq!(editor.draft(), "");
    }

    #[test]
    fn test_submit_blank_is_rejected_and_draft_kept() {
        let mut editor = TaskEditor::new();
        editor.set_draft("   ");
        assert_eq!(editor.submit_draft(), None);
        assert!(editor.is_empty());
        assert_eq!(editor.draft().len(), 3);
    }

    #[test]
    fn test_submit_appends() {
        let mut editor = TaskEditor::new();
        editor.set_draft("Buy milk");
        let result = editor.submit_draft();
        assert_eq!(result, Some(Submission::Added { index: 0 }));
        assert_eq!(labels(&editor), ["Buy milk"]);
        assert_eq!(editor.cursor(), EditCursor::None);
        assert_eq!(editor.draft(), "");
    }

    #[test]
    fn test_submit_keeps_text_as_entered() {
        let mut editor = TaskEditor::new();
        editor.submit("  padded ");
        assert_eq!(labels(&editor), ["  padded "]);
    }

    #[test]
    fn test_duplicates_allowed() {
        let mut editor = TaskEditor::new();
        editor.submit("Walk dog");
        editor.submit("Walk dog");
        assert_eq!(labels(&editor), ["Walk dog", "Walk dog"]);
    }

    #[test]
    fn test_start_edit_loads_draft() {
        let mut editor = abc();
        editor.start_edit(1).unwrap();
        assert_eq!(editor.draft(), "B");
        assert_eq!(editor.cursor(), EditCursor::Editing(1));
        assert_eq!(editor.submit_label(), "Update Task");
    }

    #[test]
    fn test_edit_then_submit_replaces_in_place() {
        let mut editor = abc();
        editor.start_edit(1).unwrap();
        let result = editor.submit("B2");
        assert_eq!(result, Some(Submission::Updated { index: 1 }));
        assert_eq!(labels(&editor), ["A", "B2", "C"]);
        assert_eq!(editor.cursor(), EditCursor::None);
        assert_eq!(editor.draft(), "");
    }

    #[test]
    fn test_blank_submit_while_editing_stays_in_edit_mode() {
        let mut editor = abc();
        editor.start_edit(2).unwrap();
        assert_eq!(editor.submit(" "), None);
        assert_eq!(editor.cursor(), EditCursor::Editing(2));
        assert_eq!(labels(&editor), ["A", "B", "C"]);
    }

    #[test]
    fn test_start_edit_switches_target() {
        let mut editor = abc();
        editor.start_edit(0).unwrap();
        editor.start_edit(2).unwrap();
        assert_eq!(editor.cursor(), EditCursor::Editing(2));
        assert_eq!(editor.draft(), "C");
    }

    #[test]
    fn test_start_edit_out_of_range_rejected() {
        let mut editor = abc();
        editor.set_draft("typing");
        let err = editor.start_edit(3).unwrap_err();
        assert_eq!(err, TaskError::IndexOutOfRange { index: 3, len: 3 });
        assert_eq!(editor.cursor(), EditCursor::None);
        assert_eq!(editor.draft(), "typing");
    }

    #[test]
    fn test_delete_preserves_order() {
        let mut editor = abc();
        let removed = editor.delete_at(1).unwrap();
        assert_eq!(removed.label, "B");
        assert_eq!(labels(&editor), ["A", "C"]);
    }

    #[test]
    fn test_delete_out_of_range_rejected() {
        let mut editor = abc();
        assert!(editor.delete_at(5).is_err());
        assert_eq!(labels(&editor), ["A", "B", "C"]);
    }

    #[test]
    fn test_delete_on_empty_rejected() {
        let mut editor = TaskEditor::new();
        assert_eq!(
            editor.delete_at(0),
            Err(TaskError::IndexOutOfRange { index: 0, len: 0 })
        );
    }

    #[test]
    fn test_delete_edited_task_cancels_edit() {
        let mut editor = abc();
        editor.start_edit(1).unwrap();
        editor.delete_at(1).unwrap();
        assert_eq!(editor.cursor(), EditCursor::None);
        assert_eq!(editor.draft(), "");
    }

    #[test]
    fn test_delete_before_edited_task_shifts_cursor() {
        let mut editor = abc();
        editor.start_edit(2).unwrap();
        editor.delete_at(0).unwrap();
        assert_eq!(editor.cursor(), EditCursor::Editing(1));
        assert_eq!(editor.draft(), "C");

        editor.submit("C2");
        assert_eq!(labels(&editor), ["B", "C2"]);
    }

    #[test]
    fn test_delete_after_edited_task_keeps_cursor() {
        let mut editor = abc();
        editor.start_edit(0).unwrap();
        editor.delete_at(2).unwrap();
        assert_eq!(editor.cursor(), EditCursor::Editing(0));
        assert_eq!(editor.draft(), "A");
    }

    #[test]
    fn test_cancel_edit() {
        let mut editor = abc();
        editor.start_edit(1).unwrap();
        editor.cancel_edit();
        assert_eq!(editor.cursor(), EditCursor::None);
        assert_eq!(editor.draft(), "");
        assert_eq!(labels(&editor), ["A", "B", "C"]);
    }

    #[test]
    fn test_cancel_edit_when_not_editing_keeps_draft() {
        let mut editor = TaskEditor::new();
        editor.set_draft("half typed");
        editor.cancel_edit();
        assert_eq!(editor.draft(), "half typed");
    }
}
