//! Main TUI application

use anyhow::Result;
use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures_util::StreamExt;
use ratatui::prelude::*;
use std::sync::Arc;

use super::home::HomeView;
use super::styles::Theme;
use crate::config::Config;
use crate::greeting::{Clock, GreetingTicker};

pub struct App {
    home: HomeView,
    ticker: GreetingTicker,
    theme: Theme,
    should_quit: bool,
}

impl App {
    /// Must be called from within a tokio runtime; starts the greeting ticker.
    pub fn new(clock: Arc<dyn Clock>, config: &Config, theme: Theme) -> Self {
        let ticker = GreetingTicker::spawn(clock, config.greeting.refresh_interval());
        let home = HomeView::new(ticker.current(), &config.tasks);

        Self {
            home,
            ticker,
            theme,
            should_quit: false,
        }
    }

    pub async fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    ) -> Result<()> {
        terminal.clear()?;
        terminal.draw(|f| self.render(f))?;

        let mut events = EventStream::new();
        let mut greeting_rx = self.ticker.subscribe();
        let mut ticker_alive = true;

        loop {
            tokio::select! {
                maybe_event = events.next() => match maybe_event {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        self.handle_key(key);
                    }
                    Some(Ok(Event::Resize(_, _))) => {}
                    Some(Ok(_)) => continue,
                    Some(Err(e)) => return Err(e.into()),
                    None => break,
                },
                changed = greeting_rx.changed(), if ticker_alive => {
                    if changed.is_err() {
                        tracing::warn!("Greeting ticker ended early");
                        ticker_alive = false;
                        continue;
                    }
                    let greeting = *greeting_rx.borrow_and_update();
                    self.home.set_greeting(greeting);
                }
            }

            if self.should_quit {
                break;
            }

            terminal.draw(|f| self.render(f))?;
        }

        Ok(())
    }

    fn render(&self, frame: &mut Frame) {
        self.home.render(frame, frame.area(), &self.theme);
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if let (KeyCode::Char('c'), KeyModifiers::CONTROL) = (key.code, key.modifiers) {
            self.should_quit = true;
            return;
        }

        if let Some(action) = self.home.handle_key(key) {
            match action {
                Action::Quit => self.should_quit = true,
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
}
