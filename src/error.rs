//! Error types surfaced by editing commands
//!
//! Every variant is recoverable: the dispatcher reports it on stderr and the
//! read loop keeps going.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::scripting::ScriptError;

#[derive(Debug, Error)]
pub enum EditError {
    /// Reading or writing the backing file failed
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing to the console or reading a confirmation failed
    #[error("console: {0}")]
    Console(#[from] io::Error),

    #[error("no filename available")]
    NoFilename,

    #[error("no path given")]
    MissingPath,

    #[error("keyword missing")]
    KeywordMissing,

    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// Wrong argument count and similar misuse
    #[error("? {0}")]
    Usage(String),

    #[error("script: {0}")]
    Script(#[from] ScriptError),

    #[error("logging: {0}")]
    Logging(String),
}

impl EditError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
