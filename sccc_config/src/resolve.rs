//! Section lookup and the precedence fold.
//!
//! A document holds several named sections side by side:
//!
//! ```yaml
//! default:
//!   port: 80
//! namespace:
//!   dev:
//!     port: 8080
//! version:
//!   "1.0.6":
//!     debug: false
//! ```
//!
//! [`resolve_sections`] extracts each section named in a [`SectionList`] and
//! folds them together with [`merge_mapping`], so later sections win.

use tracing::debug;

use crate::error::{ConfigError, ConfigResult};
use crate::merge::merge_mapping;
use crate::section::{SectionList, SectionPath};
use crate::value::{Mapping, Value};
use crate::yaml;

/// Extract the section named by `path` from `doc`.
///
/// Only the first pair matching each key is considered. A missing key at
/// either level yields an empty mapping.
///
/// # Errors
///
/// Returns [`ConfigError::TypeMismatch`] when a matching key holds anything
/// other than a mapping, `null` included.
pub fn locate(doc: &Mapping, path: &SectionPath) -> ConfigResult<Mapping> {
    let Some(found) = doc.get(&Value::from(path.head())) else {
        return Ok(Mapping::new());
    };
    let outer = expect_mapping(found, path)?;
    let Some(rest) = path.rest() else {
        return Ok(outer.clone());
    };
    match outer.get(&Value::from(rest)) {
        Some(inner) => expect_mapping(inner, path).cloned(),
        None => Ok(Mapping::new()),
    }
}

fn expect_mapping<'a>(value: &'a Value, path: &SectionPath) -> ConfigResult<&'a Mapping> {
    value.as_mapping().ok_or_else(|| ConfigError::TypeMismatch {
        section: path.to_string(),
        found: value.kind(),
    })
}

/// Fold every section of `sections` over an empty accumulator, in order.
///
/// # Examples
///
/// ```rust
/// use sccc_config::{SectionList, Value, parse_str, resolve_sections};
///
/// let doc = parse_str(
///     "default: {port: 80}\nnamespace: {dev: {port: 8080, debug: true}}\n",
/// )?;
/// let merged = resolve_sections(&doc, &SectionList::standard("dev", ""))?;
/// assert_eq!(merged.get(&Value::from("port")), Some(&Value::Int(8080)));
/// assert_eq!(merged.get(&Value::from("debug")), Some(&Value::Bool(true)));
/// # Ok::<_, sccc_config::ConfigError>(())
/// ```
///
/// # Errors
///
/// Propagates [`ConfigError::TypeMismatch`] from [`locate`].
pub fn resolve_sections(doc: &Mapping, sections: &SectionList) -> ConfigResult<Mapping> {
    let mut merged = Mapping::new();
    for path in sections.iter() {
        debug!(section = %path, "process section");
        let section = locate(doc, path)?;
        merge_mapping(&mut merged, section);
    }
    Ok(merged)
}

/// Parse `bytes`, resolve `sections`, and render the merged result as YAML.
///
/// # Errors
///
/// Returns parse errors from [`crate::parse_document`], lookup errors from
/// [`locate`] and rendering errors from [`crate::render`].
pub fn resolve_document(bytes: &[u8], sections: &SectionList) -> ConfigResult<String> {
    let doc = yaml::parse_document(bytes)?;
    let merged = resolve_sections(&doc, sections)?;
    yaml::render(&merged)
}
