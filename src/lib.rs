pub mod cli;
pub mod config;
pub mod error;
pub mod launcher;
pub mod manifest;
pub mod overrides;
pub mod persist;
pub mod resolver;

pub use config::Config;
pub use error::{HaydnError, JsonErrorKind};

/// Run the command line interface and return an exit code.
pub fn run_cli() -> i32 {
    cli::run()
}
