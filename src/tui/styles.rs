//! TUI theme and styling

use ratatui::style::Color;

#[derive(Debug, Clone)]
pub struct Theme {
    // Background and borders
    pub background: Color,
    pub border: Color,
    pub selection: Color,

    // Text colors
    pub heading: Color,
    pub title: Color,
    pub text: Color,
    pub dimmed: Color,
    pub hint: Color,

    // Task affordances
    pub button: Color,
    pub button_text: Color,
    pub edit: Color,
    pub delete: Color,

    pub accent: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::planner()
    }
}

impl Theme {
    /// Warm light palette.
    pub fn planner() -> Self {
        Self {
            background: Color::Rgb(255, 248, 243),
            border: Color::Rgb(64, 93, 114),
            selection: Color::Rgb(238, 226, 218),

            heading: Color::Rgb(152, 125, 154),
            title: Color::Rgb(64, 93, 114),
            text: Color::Black,
            dimmed: Color::Rgb(140, 140, 140),
            hint: Color::Rgb(117, 134, 148),

            button: Color::Rgb(117, 134, 148),
            button_text: Color::White,
            edit: Color::Green,
            delete: Color::Red,

            accent: Color::Rgb(64, 93, 114),
        }
    }

    pub fn phosphor() -> Self {
        Self {
            background: Color::Rgb(16, 20, 18),
            border: Color::Rgb(45, 70, 55),
            selection: Color::Rgb(30, 50, 40),

            heading: Color::Rgb(100, 220, 160),
            title: Color::Rgb(57, 255, 20),
            text: Color::Rgb(180, 255, 180),
            dimmed: Color::Rgb(80, 120, 90),
            hint: Color::Rgb(100, 160, 120),

            button: Color::Rgb(45, 70, 55),
            button_text: Color::Rgb(180, 255, 200),
            edit: Color::Rgb(0, 255, 180),
            delete: Color::Rgb(255, 100, 80),

            accent: Color::Rgb(57, 255, 20),
        }
    }
}
