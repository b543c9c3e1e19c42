//! Daily Planner library - greeting clock and task list editor behind the `planner` TUI

pub mod cli;
pub mod config;
pub mod greeting;
pub mod logging;
pub mod tasks;
pub mod tui;
