//! CLI command implementations

pub mod definition;
pub mod greeting;

pub use definition::{Cli, Commands};
