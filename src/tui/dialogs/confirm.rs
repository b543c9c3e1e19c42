//! Delete confirmation dialog

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::DialogResult;
use crate::tui::styles::Theme;

/// Asks before removing one task. Submitting yields the task's index.
pub struct DeleteTaskDialog {
    index: usize,
    label: String,
}

impl DeleteTaskDialog {
    pub fn new(index: usize, label: impl Into<String>) -> Self {
        Self {
            index,
            label: label.into(),
        }
    }

    pub fn handle_key(&self, key: KeyEvent) -> DialogResult<usize> {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Char('d') => {
                DialogResult::Submit(self.index)
            }
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('n') | KeyCode::Char('N') => {
                DialogResult::Cancel
            }
            _ => DialogResult::Continue,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let dialog_area = super::centered_rect(area, 44, 6);
        frame.render_widget(Clear, dialog_area);

        let block = Block::default()
            .style(Style::default().bg(theme.background))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.delete))
            .title(" Delete Task ")
            .title_style(Style::default().fg(theme.delete).bold());

        let key_style = Style::default().fg(theme.accent).bold();
        let desc_style = Style::default().fg(theme.dimmed);
        let text = vec![
            Line::from(Span::styled(
                format!("\"{}\"", self.label),
                Style::default().fg(theme.text),
            )),
            Line::default(),
            Line::from(vec![
                Span::styled("y", key_style),
                Span::styled(" delete  ", desc_style),
                Span::styled("n/Esc", key_style),
                Span::styled(" keep", desc_style),
            ]),
        ];

        frame.render_widget(
            Paragraph::new(text)
                .block(block)
                .alignment(Alignment::Center),
            dialog_area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn dialog() -> DeleteTaskDialog {
        DeleteTaskDialog::new(3, "Buy milk")
    }

    #[test]
    fn test_confirm_keys_yield_index() {
        for code in [KeyCode::Char('y'), KeyCode::Char('Y'), KeyCode::Char('d')] {
            assert!(matches!(dialog().handle_key(key(code)), DialogResult::Submit(3)));
        }
    }

    #[test]
    fn test_enter_keeps_task() {
        // Enter is the list's edit key; a double press must not delete.
        assert!(matches!(
            dialog().handle_key(key(KeyCode::Enter)),
            DialogResult::Cancel
        ));
    }

    #[test]
    fn test_cancel_keys() {
        for code in [KeyCode::Esc, KeyCode::Char('n'), KeyCode::Char('N')] {
            assert!(matches!(dialog().handle_key(key(code)), DialogResult::Cancel));
        }
    }

    #[test]
    fn test_other_keys_continue() {
        assert!(matches!(
            dialog().handle_key(key(KeyCode::Char('x'))),
            DialogResult::Continue
        ));
    }

    #[test]
    fn test_render_names_the_task() {
        let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
        let theme = Theme::default();
        terminal
            .draw(|f| dialog().render(f, f.area(), &theme))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let mut screen = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                screen.push_str(buffer[(x, y)].symbol());
            }
        }
        assert!(screen.contains("Delete Task"));
        assert!(screen.contains("\"Buy milk\""));
    }
}
