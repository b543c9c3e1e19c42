//! TUI dialog components

mod confirm;

pub use confirm::DeleteTaskDialog;

use ratatui::layout::Rect;

pub enum DialogResult<T> {
    Continue,
    Cancel,
    Submit(T),
}

/// A `width` x `height` rect centered in `area`, shrunk to fit if needed.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
