use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;
use serde_json::ser::{PrettyFormatter, Serializer};
use tracing::debug;

use crate::error::HaydnError;

const INDENT: &[u8] = b"    ";

/// Render `document` as indented JSON with forward slashes left unescaped.
pub fn render(document: &Value) -> serde_json::Result<Vec<u8>> {
    let mut out = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(INDENT));
    document.serialize(&mut serializer)?;
    Ok(out)
}

/// Write `document` to a fresh `<prefix>XXXXXX` file in `dir` and return its path.
///
/// The file is kept on disk after return.
pub fn persist(document: &Value, dir: &Path, prefix: &str) -> Result<PathBuf, HaydnError> {
    let write_error = |source: io::Error| HaydnError::Write {
        path: dir.to_path_buf(),
        source,
    };

    let rendered = render(document).map_err(|err| write_error(err.into()))?;
    let mut file = tempfile::Builder::new()
        .prefix(prefix)
        .tempfile_in(dir)
        .map_err(write_error)?;
    file.write_all(&rendered).map_err(write_error)?;
    file.flush().map_err(write_error)?;

    let (_, path) = file.keep().map_err(|err| write_error(err.error))?;
    let path = std::path::absolute(&path).unwrap_or(path);
    debug!(path = %path.display(), "wrote merged manifest");
    Ok(path)
}
