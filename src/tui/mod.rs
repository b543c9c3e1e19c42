//! Terminal User Interface module

mod app;
mod components;
pub mod dialogs;
mod home;
mod styles;
pub mod themes;

pub use app::*;
pub use styles::Theme;

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use std::io;
use std::sync::Arc;

use crate::config::Config;
use crate::greeting::SystemClock;

pub async fn run(config: &Config) -> Result<()> {
    let theme = themes::load_theme(&config.theme.name);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(e.into());
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = match Terminal::new(backend) {
        Ok(terminal) => terminal,
        Err(e) => {
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            let _ = disable_raw_mode();
            return Err(e.into());
        }
    };

    // The ticker lives inside the app and stops when it is dropped
    let result = {
        let mut app = App::new(Arc::new(SystemClock), config, theme);
        app.run(&mut terminal).await
    };

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}
