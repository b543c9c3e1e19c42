//! Daily Planner - terminal to-do list with a time-of-day greeting

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use daily_planner::cli::{self, Cli, Commands};
use daily_planner::config::Config;
use daily_planner::{logging, tui};

#[tokio::main]
async fn main() -> Result<()> {
    logging::init_from_env()?;

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Completion { shell }) => {
            generate(shell, &mut Cli::command(), "planner", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Greeting(args)) => cli::greeting::run(args),
        None => {
            let mut config = Config::load_or_init()?;
            if let Some(theme) = cli.theme {
                config.theme.name = theme;
            }
            tracing::debug!("Starting TUI with {:?}", config);
            tui::run(&config).await
        }
    }
}
