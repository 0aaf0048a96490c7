mod args;
mod commands;
mod handlers;
mod types;

pub use args::{Cli, Commands};
pub use commands::run;
pub use types::OutputFormat;
