//! Tracing subscriber set-up for the `sccc` binary.

use tracing_subscriber::EnvFilter;

use crate::error::{Result, SccError};

/// Environment variable consulted when `--log-level` is absent.
pub const LOG_ENV: &str = "SCCC_LOG";
const DEFAULT_FILTER: &str = "info";

/// Build the event filter.
///
/// An explicit directive wins; otherwise [`LOG_ENV`] is read, falling back to
/// `info` when it is unset or unparsable.
///
/// # Errors
///
/// Returns [`SccError::Logging`] when `directive` is not a valid filter.
pub fn build_filter(directive: Option<&str>) -> Result<EnvFilter> {
    match directive {
        Some(explicit) => {
            EnvFilter::try_new(explicit).map_err(|err| SccError::Logging(err.to_string()))
        }
        None => Ok(EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))),
    }
}

/// Install a formatted subscriber writing to standard error.
///
/// # Errors
///
/// Returns [`SccError::Logging`] when the filter is invalid or a global
/// subscriber is already installed.
pub fn init(directive: Option<&str>) -> Result<()> {
    let filter = build_filter(directive)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|err| SccError::Logging(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("debug")]
    #[case("sccc=trace,warn")]
    fn accepts_valid_directives(#[case] directive: &str) {
        assert!(build_filter(Some(directive)).is_ok());
    }

    #[rstest]
    fn rejects_unknown_levels() {
        let err = build_filter(Some("sccc=loud")).expect_err("invalid level");
        assert!(matches!(err, SccError::Logging(_)));
    }
}
