use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Offset added to [`HaydnError::code`] to form the process exit code.
pub const EXIT_CODE_OFFSET: i32 = 100;

#[derive(Debug, Error)]
pub enum HaydnError {
    #[error("File {} cannot be read", path.display())]
    FileUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("JSON error in {}: {kind}", path.display())]
    JsonParse { path: PathBuf, kind: JsonErrorKind },
    #[error("Unable to determine composer command, tried [{}]", attempted.join(", "))]
    CommandNotFound { attempted: Vec<String> },
    #[error("Unable to write merged manifest to {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Unable to launch {command}: {source}")]
    Launch {
        command: String,
        #[source]
        source: io::Error,
    },
}

impl HaydnError {
    /// Internal error code; the process exits with `EXIT_CODE_OFFSET + code`.
    pub fn code(&self) -> i32 {
        match self {
            HaydnError::FileUnreadable { .. } => 1,
            HaydnError::JsonParse { .. } => 2,
            HaydnError::CommandNotFound { .. } => 3,
            HaydnError::Write { .. } => 4,
            HaydnError::Launch { .. } => 5,
        }
    }

    pub fn exit_code(&self) -> i32 {
        EXIT_CODE_OFFSET + self.code()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonErrorKind {
    Syntax,
    UnexpectedEof,
    DepthExceeded,
    ControlCharacter,
    InvalidUtf8,
}

impl JsonErrorKind {
    pub fn classify(err: &serde_json::Error) -> Self {
        use serde_json::error::Category;

        match err.classify() {
            Category::Eof => JsonErrorKind::UnexpectedEof,
            _ => {
                // serde_json has no category for these; prefixes match its
                // messages as of 1.0.108. Nesting stops at 128 levels.
                let message = err.to_string();
                if message.starts_with("recursion limit exceeded") {
                    JsonErrorKind::DepthExceeded
                } else if message.starts_with("control character") {
                    JsonErrorKind::ControlCharacter
                } else {
                    JsonErrorKind::Syntax
                }
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            JsonErrorKind::Syntax => "syntax error",
            JsonErrorKind::UnexpectedEof => "unexpected end of input",
            JsonErrorKind::DepthExceeded => "depth exceeded",
            JsonErrorKind::ControlCharacter => "control character error",
            JsonErrorKind::InvalidUtf8 => "invalid UTF-8",
        }
    }
}

impl fmt::Display for JsonErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
