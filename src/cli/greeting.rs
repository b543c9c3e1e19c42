//! `planner greeting` command implementation

use anyhow::Result;
use clap::Args;

use crate::greeting::{current_greeting, FixedClock, Greeting, SystemClock};

#[derive(Args)]
pub struct GreetingArgs {
    /// Hour of the day to greet for instead of the current one (0-23)
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..24))]
    pub hour: Option<u32>,
}

pub fn resolve(args: &GreetingArgs) -> Greeting {
    match args.hour {
        Some(hour) => current_greeting(&FixedClock::new(hour)),
        None => current_greeting(&SystemClock),
    }
}

pub fn run(args: GreetingArgs) -> Result<()> {
    println!("{}", resolve(&args));
    Ok(())
}
