//! Task operations for HomeView (submit, edit, delete)

use tui_input::Input;

use crate::tasks::Submission;
use crate::tui::dialogs::DeleteTaskDialog;

use super::{truncate_to_width, Focus, HomeView};

impl HomeView {
    pub(super) fn submit_draft(&mut self) {
        match self.editor.submit_draft() {
            Some(Submission::Added { index }) => {
                tracing::debug!("Added task at {}", index);
                self.list_cursor = index;
            }
            Some(Submission::Updated { index }) => {
                tracing::debug!("Updated task at {}", index);
                self.list_cursor = index;
            }
            None => return,
        }
        self.sync_input();
    }

    pub(super) fn start_edit_selected(&mut self) {
        match self.editor.start_edit(self.list_cursor) {
            Ok(()) => {
                self.sync_input();
                self.focus = Focus::Input;
            }
            Err(e) => tracing::warn!("Cannot edit task: {}", e),
        }
    }

    pub(super) fn request_delete_selected(&mut self) {
        let Some(task) = self.editor.get(self.list_cursor) else {
            return;
        };

        if self.confirm_delete {
            let label = truncate_to_width(&task.label, 36);
            self.delete_dialog = Some(DeleteTaskDialog::new(self.list_cursor, label));
        } else {
            self.delete_task(self.list_cursor);
        }
    }

    pub(super) fn delete_task(&mut self, index: usize) {
        let was_editing = self.editor.is_editing();
        match self.editor.delete_at(index) {
            Ok(removed) => {
                tracing::debug!("Deleted task '{}'", removed.label);
                // An edit on the removed task is cancelled, so the field must follow.
                if was_editing && !self.editor.is_editing() {
                    self.sync_input();
                }
                self.clamp_list_cursor();
                if self.editor.is_empty() {
                    self.focus = Focus::Input;
                }
            }
            Err(e) => tracing::warn!("Cannot delete task: {}", e),
        }
    }

    /// Rebuilds the text field from the editor's draft, cursor at the end.
    pub(super) fn sync_input(&mut self) {
        self.input = Input::new(self.editor.draft().to_string());
    }

    pub(super) fn clamp_list_cursor(&mut self) {
        let len = self.editor.len();
        if self.list_cursor >= len {
            self.list_cursor = len.saturating_sub(1);
        }
    }
}
