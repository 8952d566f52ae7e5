use std::ffi::OsString;
use std::path::Path;
use std::process::{Command, ExitStatus};

use tracing::{debug, info};

use crate::error::HaydnError;
use crate::resolver::ResolvedCommand;

/// Environment handed to the package manager on top of the inherited one.
#[derive(Debug, Clone)]
pub struct LaunchEnv<'a> {
    pub var: &'a str,
    pub config_path: &'a Path,
}

/// Run `command` with `args`, streaming through our stdio, and return its exit code.
///
/// `env.var` is set only in the child's environment.
pub fn launch(
    command: &ResolvedCommand,
    env: &LaunchEnv<'_>,
    args: &[OsString],
) -> Result<i32, HaydnError> {
    info!(
        command = %command.name,
        config = %env.config_path.display(),
        args = args.len(),
        "launching package manager"
    );

    let status = Command::new(&command.path)
        .args(args)
        .env(env.var, env.config_path)
        .status()
        .map_err(|source| HaydnError::Launch {
            command: command.name.clone(),
            source,
        })?;

    let code = exit_code(status);
    debug!(command = %command.name, code, "package manager exited");
    Ok(code)
}

#[cfg(unix)]
fn exit_code(status: ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;

    status
        .code()
        .or_else(|| status.signal().map(|signal| 128 + signal))
        .unwrap_or(1)
}

#[cfg(not(unix))]
fn exit_code(status: ExitStatus) -> i32 {
    status.code().unwrap_or(1)
}
