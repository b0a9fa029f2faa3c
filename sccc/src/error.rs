//! Error types for the `sccc` command-line tool.

use camino::Utf8PathBuf;
use thiserror::Error;

use crate::fetch::FetchError;

/// Errors surfaced while running a command.
#[derive(Debug, Error)]
pub enum SccError {
    /// A fetched document could not be composed, resolved or rendered.
    #[error("failed to resolve {source_file}: {source}")]
    Config {
        /// Remote file (or template pair) being processed.
        source_file: String,
        /// Underlying resolution failure.
        #[source]
        source: sccc_config::ConfigError,
    },

    /// A remote file could not be retrieved.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// Runtime settings could not be extracted from their layers.
    #[error("failed to load settings: {0}")]
    Settings(#[from] Box<figment::Error>),

    /// The log filter could not be built or installed.
    #[error("failed to initialise logging: {0}")]
    Logging(String),

    /// A local file operation failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path being read or written.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
}

impl From<figment::Error> for SccError {
    fn from(err: figment::Error) -> Self {
        Self::Settings(Box::new(err))
    }
}

/// Convenience alias for results in this crate.
pub type Result<T> = std::result::Result<T, SccError>;
