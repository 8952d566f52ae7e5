use std::ffi::OsString;
use std::io::IsTerminal;
use std::iter;

use anyhow::anyhow;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::error::HaydnError;
use crate::launcher::{LaunchEnv, launch};
use crate::manifest::load_document;
use crate::overrides::apply_overrides;
use crate::persist::persist;
use crate::resolver::resolve_command;

/// haydn takes no options of its own; every argument goes to composer.
#[derive(Debug, Parser)]
#[command(
    name = "haydn",
    about = "Run composer against composer.json with overrides from haydn.json",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Cli {
    /// Arguments forwarded verbatim to composer
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<OsString>,
}

impl Cli {
    /// Parse `argv` so that every argument after the program name is kept,
    /// including a leading `--`.
    pub fn from_argv<I>(argv: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = OsString>,
    {
        Self::try_parse_from(escaped(argv))
    }

    pub fn args(&self) -> &[OsString] {
        &self.args
    }
}

/// Insert an escape right after the program name; clap consumes it and takes
/// everything that follows, a user's own `--` included, as plain values.
fn escaped<I>(argv: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut argv = argv.into_iter();
    let program = argv.next().unwrap_or_else(|| OsString::from("haydn"));
    iter::once(program)
        .chain(iter::once(OsString::from("--")))
        .chain(argv)
        .collect()
}

pub fn run() -> i32 {
    if let Err(err) = init_logging() {
        eprintln!("warning: {err:#}");
    }

    let cli = Cli::from_argv(std::env::args_os()).unwrap_or_else(|err| err.exit());
    match execute(&Config::default(), cli.args()) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{err}");
            err.exit_code()
        }
    }
}

/// Load, merge, persist, resolve and launch. Returns the child's exit code.
///
/// Nothing is launched unless every earlier stage succeeds.
pub fn execute(config: &Config, args: &[OsString]) -> Result<i32, HaydnError> {
    let mut document = load_document(&config.base_manifest)?;
    let modifier = load_document(&config.modifier)?;

    apply_overrides(&mut document, &modifier);
    let temp_path = persist(&document, &config.temp_dir(), &config.temp_prefix)?;
    drop(document);

    let command = resolve_command(&config.candidates, config.search_path.as_deref())?;
    let env = LaunchEnv {
        var: &config.env_var,
        config_path: &temp_path,
    };
    let code = launch(&command, &env, args)?;
    debug!(path = %temp_path.display(), "merged manifest left in place");
    Ok(code)
}

fn init_logging() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .without_time()
        .with_target(false)
        .try_init()
        .map_err(|err| anyhow!("could not initialize logging: {err}"))
}
