//! CLI error type.

use std::io;

use thiserror::Error;

use crate::tokenize::TokenizeError;

/// Everything that can stop a `jlscan` command.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("cannot find file '{path}'")]
    NotFound { path: String },

    #[error("permission denied reading '{path}'")]
    PermissionDenied { path: String },

    #[error("'{path}' contains invalid UTF-8 data")]
    InvalidUtf8 { path: String },

    #[error("error reading '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("unknown option '{0}'")]
    UnknownOption(String),

    #[error("missing file path")]
    MissingPath,

    #[error(transparent)]
    Tokenize(#[from] TokenizeError),
}

impl CliError {
    /// Classify an I/O failure while reading `path`.
    pub fn from_read(path: &str, err: io::Error) -> Self {
        let path = path.to_owned();
        match err.kind() {
            io::ErrorKind::NotFound => CliError::NotFound { path },
            io::ErrorKind::PermissionDenied => CliError::PermissionDenied { path },
            io::ErrorKind::InvalidData => CliError::InvalidUtf8 { path },
            _ => CliError::Read { path, source: err },
        }
    }
}
