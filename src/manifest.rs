use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::error::{HaydnError, JsonErrorKind};

/// Read `path` and parse it as a generic JSON document, keeping object key order.
pub fn load_document(path: &Path) -> Result<Value, HaydnError> {
    let bytes = fs::read(path).map_err(|source| HaydnError::FileUnreadable {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = bytes.len(), "read manifest");

    parse_document(path, &bytes)
}

fn parse_document(path: &Path, bytes: &[u8]) -> Result<Value, HaydnError> {
    let text = std::str::from_utf8(bytes).map_err(|_| HaydnError::JsonParse {
        path: path.to_path_buf(),
        kind: JsonErrorKind::InvalidUtf8,
    })?;

    serde_json::from_str(text).map_err(|err| HaydnError::JsonParse {
        path: path.to_path_buf(),
        kind: JsonErrorKind::classify(&err),
    })
}
