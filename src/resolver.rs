use std::ffi::OsStr;
use std::path::PathBuf;

use tracing::debug;

use crate::error::HaydnError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCommand {
    pub name: String,
    pub path: PathBuf,
}

/// Pick the package manager executable from `candidates`.
///
/// Every candidate is checked and the last one that resolves wins, so with
/// `["composer", "composer.phar"]` a `composer.phar` on the path takes precedence.
pub fn resolve_command(
    candidates: &[String],
    search_path: Option<&OsStr>,
) -> Result<ResolvedCommand, HaydnError> {
    let mut resolved = None;
    for name in candidates {
        match lookup(name, search_path) {
            Some(path) => {
                debug!(candidate = %name, path = %path.display(), "command resolves");
                resolved = Some(ResolvedCommand {
                    name: name.clone(),
                    path,
                });
            }
            None => debug!(candidate = %name, "command not found"),
        }
    }

    resolved.ok_or_else(|| HaydnError::CommandNotFound {
        attempted: candidates.to_vec(),
    })
}

fn lookup(name: &str, search_path: Option<&OsStr>) -> Option<PathBuf> {
    match search_path {
        Some(paths) => {
            let cwd = std::env::current_dir().ok()?;
            which::which_in(name, Some(paths), cwd).ok()
        }
        None => which::which(name).ok(),
    }
}
