//! Error types for section resolution.

use thiserror::Error;

/// Errors raised while parsing, resolving or rendering a document.
///
/// A section that is simply absent is never an error; it resolves to an
/// empty mapping.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The document is not valid YAML.
    #[error("failed to parse config: {0}")]
    Parse(#[source] serde_saphyr::Error),

    /// The document bytes are not UTF-8.
    #[error("failed to parse config: {0}")]
    Encoding(#[from] std::str::Utf8Error),

    /// The document parsed, but its root is not a mapping.
    #[error("failed to parse config: expected a mapping at the document root, found a {found}")]
    RootNotMapping {
        /// Kind of value found at the root.
        found: &'static str,
    },

    /// A section path named a value that is not a mapping.
    #[error("section '{section}' is a {found}, expected a mapping")]
    TypeMismatch {
        /// Section identifier being resolved.
        section: String,
        /// Kind of value found where a mapping was required.
        found: &'static str,
    },

    /// The merged mapping could not be rendered back to YAML.
    #[error("failed to serialise merged config: {0}")]
    Serialize(String),
}

/// Convenience alias for results returned by this crate.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Malformed `source=destination` specifiers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SpecifierError {
    /// The `=` separating source and destination is missing.
    #[error("'{0}' must have the form source=destination")]
    MissingSeparator(String),

    /// Nothing precedes the `=`.
    #[error("'{0}' names no source file")]
    EmptySource(String),

    /// Nothing follows the `=`.
    #[error("'{0}' names no destination file")]
    EmptyDestination(String),
}
