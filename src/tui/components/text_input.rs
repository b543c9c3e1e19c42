//! Bordered task entry field

use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use tui_input::Input;

use crate::tui::styles::Theme;

/// Renders the draft input inside a rounded box.
///
/// The focused field draws an inverse-video cursor and scrolls horizontally
/// so the cursor stays visible. An empty unfocused field shows `placeholder`.
pub fn render_text_field(
    frame: &mut Frame,
    area: Rect,
    input: &Input,
    is_focused: bool,
    placeholder: &str,
    theme: &Theme,
) {
    let border_color = if is_focused { theme.accent } else { theme.border };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let value = input.value();
    let value_style = Style::default().fg(theme.text);

    if value.is_empty() && !is_focused {
        let hint = Paragraph::new(Span::styled(placeholder, Style::default().fg(theme.dimmed)));
        frame.render_widget(hint, inner);
        return;
    }

    if !is_focused {
        frame.render_widget(Paragraph::new(Span::styled(value, value_style)), inner);
        return;
    }

    let width = inner.width.max(1) as usize;
    let cursor_pos = input.visual_cursor();
    let scroll = input.visual_scroll(width.saturating_sub(1));
    let cursor_style = Style::default().fg(theme.background).bg(theme.accent);

    let before: String = value.chars().take(cursor_pos).collect();
    let cursor_char: String = value
        .chars()
        .nth(cursor_pos)
        .map(|c| c.to_string())
        .unwrap_or_else(|| " ".to_string());
    let after: String = value.chars().skip(cursor_pos + 1).collect();

    let line = Line::from(vec![
        Span::styled(before, value_style),
        Span::styled(cursor_char, cursor_style),
        Span::styled(after, value_style),
    ]);
    frame.render_widget(Paragraph::new(line).scroll((0, scroll as u16)), inner);
}
