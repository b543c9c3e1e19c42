//! Home view - greeting, task entry and task list

mod operations;

use crossterm::event::{Event, KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::*;
use tui_input::backend::crossterm::EventHandler;
use tui_input::Input;
use unicode_width::UnicodeWidthStr;

use super::app::Action;
use super::components::{render_text_field, HelpOverlay};
use super::dialogs::{DeleteTaskDialog, DialogResult};
use super::styles::Theme;
use crate::config::TasksConfig;
use crate::greeting::Greeting;
use crate::tasks::{EditCursor, TaskEditor};

const TITLE: &str = "What's your planning?";
const PLACEHOLDER: &str = "Enter task";
const EDIT_LABEL: &str = "[Edit]";
const DELETE_LABEL: &str = "[Delete]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Focus {
    Input,
    List,
}

pub struct HomeView {
    editor: TaskEditor,
    input: Input,
    greeting: Greeting,

    // UI state
    focus: Focus,
    list_cursor: usize,

    // Dialogs
    show_help: bool,
    delete_dialog: Option<DeleteTaskDialog>,
    confirm_delete: bool,
}

impl HomeView {
    pub fn new(greeting: Greeting, config: &TasksConfig) -> Self {
        Self {
            editor: TaskEditor::new(),
            input: Input::default(),
            greeting,
            focus: Focus::Input,
            list_cursor: 0,
            show_help: false,
            delete_dialog: None,
            confirm_delete: config.confirm_delete,
        }
    }

    pub fn editor(&self) -> &TaskEditor {
        &self.editor
    }

    pub fn greeting(&self) -> Greeting {
        self.greeting
    }

    pub fn set_greeting(&mut self, greeting: Greeting) {
        self.greeting = greeting;
    }

    pub fn has_dialog(&self) -> bool {
        self.show_help || self.delete_dialog.is_some()
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Action> {
        if self.show_help {
            if matches!(
                key.code,
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')
            ) {
                self.show_help = false;
            }
            return None;
        }

        if let Some(dialog) = &self.delete_dialog {
            match dialog.handle_key(key) {
                DialogResult::Continue => {}
                DialogResult::Cancel => self.delete_dialog = None,
                DialogResult::Submit(index) => {
                    self.delete_dialog = None;
                    self.delete_task(index);
                }
            }
            return None;
        }

        match self.focus {
            Focus::Input => self.handle_input_key(key),
            Focus::List => self.handle_list_key(key),
        }
    }

    fn handle_input_key(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Enter => self.submit_draft(),
            KeyCode::Esc => {
                if self.editor.is_editing() {
                    self.editor.cancel_edit();
                    self.sync_input();
                }
            }
            KeyCode::Tab | KeyCode::Down => {
                if !self.editor.is_empty() {
                    self.focus = Focus::List;
                    self.clamp_list_cursor();
                }
            }
            _ => {
                if self.input.handle_event(&Event::Key(key)).is_some() {
                    self.editor.set_draft(self.input.value());
                }
            }
        }
        None
    }

    fn handle_list_key(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Char('q') => return Some(Action::Quit),
            KeyCode::Char('?') => {
                self.show_help = true;
            }
            KeyCode::Tab | KeyCode::Char('i') | KeyCode::Esc => {
                self.focus = Focus::Input;
            }
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-1),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(1),
            KeyCode::Home | KeyCode::Char('g') => {
                self.list_cursor = 0;
            }
            KeyCode::End | KeyCode::Char('G') => {
                self.list_cursor = self.editor.len().saturating_sub(1);
            }
            KeyCode::Enter | KeyCode::Char('e') => self.start_edit_selected(),
            KeyCode::Delete | KeyCode::Char('d') => self.request_delete_selected(),
            _ => {}
        }
        None
    }

    fn move_cursor(&mut self, delta: i32) {
        let len = self.editor.len();
        if len == 0 {
            return;
        }
        self.list_cursor = if delta < 0 {
            self.list_cursor.saturating_sub(delta.unsigned_abs() as usize)
        } else {
            (self.list_cursor + delta as usize).min(len - 1)
        };
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        frame.render_widget(Block::default().style(Style::default().bg(theme.background)), area);

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .horizontal_margin(2)
            .constraints([
                Constraint::Length(1), // spacing
                Constraint::Length(1), // greeting
                Constraint::Length(2), // title
                Constraint::Length(3), // input
                Constraint::Length(1), // submit button
                Constraint::Length(1), // spacing
                Constraint::Min(0),    // task list
            ])
            .split(main_chunks[0]);

        let greeting = Paragraph::new(Span::styled(
            self.greeting.label(),
            Style::default().fg(theme.heading).bold(),
        ));
        frame.render_widget(greeting, chunks[1]);

        let title = Paragraph::new(Span::styled(TITLE, Style::default().fg(theme.title).bold()));
        frame.render_widget(title, chunks[2]);

        render_text_field(
            frame,
            chunks[3],
            &self.input,
            self.focus == Focus::Input && !self.has_dialog(),
            PLACEHOLDER,
            theme,
        );

        self.render_submit_button(frame, chunks[4], theme);
        self.render_list(frame, chunks[6], theme);
        self.render_status_bar(frame, main_chunks[1], theme);

        if self.show_help {
            HelpOverlay::render(frame, area, theme);
        }

        if let Some(dialog) = &self.delete_dialog {
            dialog.render(frame, area, theme);
        }
    }

    fn render_submit_button(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let button = Paragraph::new(Span::styled(
            self.editor.submit_label(),
            Style::default().fg(theme.button_text).bold(),
        ))
        .alignment(Alignment::Center)
        .style(Style::default().bg(theme.button));
        frame.render_widget(button, area);
    }

    fn render_list(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        if self.editor.is_empty() {
            let hint = Paragraph::new("No tasks yet")
                .style(Style::default().fg(theme.dimmed))
                .alignment(Alignment::Center);
            frame.render_widget(hint, area);
            return;
        }

        let editing = match self.editor.cursor() {
            EditCursor::Editing(index) => Some(index),
            EditCursor::None => None,
        };
        let list_focused = self.focus == Focus::List;
        let actions_width = EDIT_LABEL.len() + 1 + DELETE_LABEL.len();
        let label_width = (area.width as usize).saturating_sub(actions_width + 2);

        // Keep the row the user is acting on in view: the selection while the
        // list has focus, otherwise the task being edited.
        let anchor = match (list_focused, editing) {
            (false, Some(index)) => index,
            _ => self.list_cursor,
        };
        let visible_height = area.height as usize;
        let scroll_offset = scroll_offset_for(anchor, visible_height);

        let items: Vec<ListItem> = self
            .editor
            .tasks()
            .iter()
            .enumerate()
            .skip(scroll_offset)
            .take(visible_height)
            .map(|(idx, task)| {
                let label = truncate_to_width(&task.label, label_width);
                let padding = label_width.saturating_sub(label.width());
                let label_style = if editing == Some(idx) {
                    Style::default().fg(theme.hint).italic()
                } else {
                    Style::default().fg(theme.text)
                };

                let line = Line::from(vec![
                    Span::styled(label, label_style),
                    Span::raw(" ".repeat(padding + 1)),
                    Span::styled(EDIT_LABEL, Style::default().fg(theme.edit).bold()),
                    Span::raw(" "),
                    Span::styled(DELETE_LABEL, Style::default().fg(theme.delete).bold()),
                ]);

                if list_focused && idx == self.list_cursor {
                    ListItem::new(line).style(Style::default().bg(theme.selection))
                } else {
                    ListItem::new(line)
                }
            })
            .collect();

        frame.render_widget(List::new(items), area);
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let key_style = Style::default().fg(theme.accent).bold();
        let desc_style = Style::default().fg(theme.dimmed);
        let sep_style = Style::default().fg(theme.border);

        let bindings: &[(&str, &str)] = match self.focus {
            Focus::Input if self.editor.is_editing() => {
                &[("Enter", "Update"), ("Esc", "Cancel edit"), ("Tab", "Tasks")]
            }
            Focus::Input => &[("Enter", "Add"), ("Tab", "Tasks"), ("Ctrl+C", "Quit")],
            Focus::List => &[
                ("j/k", "Navigate"),
                ("e", "Edit"),
                ("d", "Delete"),
                ("Tab", "Entry"),
                ("?", "Help"),
                ("q", "Quit"),
            ],
        };

        let mut spans = Vec::new();
        for (i, (key, desc)) in bindings.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("│", sep_style));
            }
            spans.push(Span::styled(format!(" {}", key), key_style));
            spans.push(Span::styled(format!(" {} ", desc), desc_style));
        }

        let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(theme.selection));
        frame.render_widget(status, area);
    }
}

fn scroll_offset_for(anchor: usize, visible_height: usize) -> usize {
    if visible_height > 0 && anchor >= visible_height {
        anchor - visible_height + 1
    } else {
        0
    }
}

fn truncate_to_width(s: &str, max: usize) -> String {
    if s.width() <= max {
        return s.to_string();
    }
    // Too narrow for an ellipsis: fit as many columns as possible.
    let (budget, ellipsis) = if max <= 3 { (max, "") } else { (max - 3, "...") };
    let mut out = String::new();
    let mut width = 0;
    for c in s.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if width + w > budget {
            break;
        }
        out.push(c);
        width += w;
    }
    out.push_str(ellipsis);
    out
}
