//! Core of the `sccc` Spring Cloud Config client.
//!
//! Configuration documents fetched from the server carry several named
//! sections side by side: `default`, `namespace.<ns>` and `version.<v>`.
//! This crate extracts the sections named by a [`SectionList`] and folds them
//! together with an order-sensitive deep merge, later sections overriding
//! earlier ones. It performs no I/O: callers hand in document bytes and get
//! rendered YAML back.
//!
//! # Example
//!
//! ```rust
//! use sccc_config::{SectionList, resolve_document};
//!
//! let doc = b"default:\n  port: 80\nnamespace:\n  dev:\n    port: 8080\n    debug: true\nversion:\n  '1.0':\n    debug: false\n";
//! let rendered = resolve_document(doc, &SectionList::standard("dev", "1.0"))?;
//! let merged = sccc_config::parse_str(&rendered)?;
//! assert_eq!(merged.len(), 2);
//! # Ok::<_, sccc_config::ConfigError>(())
//! ```

mod error;
mod merge;
pub mod properties;
mod resolve;
mod section;
mod specifier;
mod template;
mod value;
mod yaml;

pub use error::{ConfigError, ConfigResult, SpecifierError};
pub use merge::{merge, merge_mapping};
pub use resolve::{locate, resolve_document, resolve_sections};
pub use section::{
    DEFAULT_SECTION, NAMESPACE_SECTION, SectionList, SectionPath, VERSION_SECTION,
};
pub use specifier::{ConfigSource, ConfigSpec, ResourceSpec, SourceFormat};
pub use template::compose;
pub use value::{Mapping, Value};
pub use yaml::{parse_document, parse_str, render};
