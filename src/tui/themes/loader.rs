use crate::tui::styles::Theme;
use tracing::warn;

pub const AVAILABLE_THEMES: &[&str] = &["planner", "phosphor"];

pub fn load_theme(name: &str) -> Theme {
    match name {
        "planner" => Theme::planner(),
        "phosphor" => Theme::phosphor(),
        _ => {
            warn!("Unknown theme '{}', falling back to planner", name);
            Theme::planner()
        }
    }
}
