//! Command line definitions

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use super::greeting::GreetingArgs;

/// Terminal to-do list with a time-of-day greeting.
///
/// Run without a subcommand to open the task list.
#[derive(Parser)]
#[command(name = "planner", version, about)]
pub struct Cli {
    /// Color theme for the task list (overrides config)
    #[arg(long, global = true, env = "DAILY_PLANNER_THEME")]
    pub theme: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the greeting for the current hour
    Greeting(GreetingArgs),

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
