//! Composition of a base template and an overlay into one sectioned document.
//!
//! A template specifier names two remote files. The first becomes the
//! `default` section; the second is appended as-is and is expected to carry
//! the `namespace` and `version` sections.

use crate::error::ConfigResult;
use crate::properties;
use crate::section::DEFAULT_SECTION;
use crate::specifier::SourceFormat;
use crate::value::Mapping;
use crate::yaml;

/// Build a single document from `base` and an optional `overlay`.
///
/// Properties bases are nested textually, so the result is still properties
/// text and needs [`properties::to_yaml`] before resolution. YAML bases are
/// parsed and re-rendered beneath `default`.
///
/// # Examples
///
/// ```rust
/// use sccc_config::{SectionList, SourceFormat, compose, parse_str, resolve_sections};
///
/// let composed = compose(
///     SourceFormat::Yaml,
///     b"port: 80\n",
///     Some(b"namespace:\n  dev:\n    port: 8080\n".as_slice()),
/// )?;
/// let doc = parse_str(&composed)?;
/// let merged = resolve_sections(&doc, &SectionList::standard("dev", ""))?;
/// assert_eq!(merged.len(), 1);
/// # Ok::<_, sccc_config::ConfigError>(())
/// ```
///
/// # Errors
///
/// Returns [`crate::ConfigError::Encoding`] for non-UTF-8 input and any parse
/// or render error for YAML bases.
pub fn compose(format: SourceFormat, base: &[u8], overlay: Option<&[u8]>) -> ConfigResult<String> {
    let mut composed = match format {
        SourceFormat::Properties => properties::nest_under_default(std::str::from_utf8(base)?),
        SourceFormat::Yaml => nest_yaml(base)?,
    };
    if let Some(extra) = overlay {
        if !composed.ends_with('\n') {
            composed.push('\n');
        }
        composed.push_str(std::str::from_utf8(extra)?);
    }
    Ok(composed)
}

fn nest_yaml(base: &[u8]) -> ConfigResult<String> {
    let template = yaml::parse_document(base)?;
    let mut nested = Mapping::new();
    nested.insert(DEFAULT_SECTION, template);
    yaml::render(&nested)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;
    use rstest::rstest;

    #[rstest]
    fn properties_base_is_indented_under_default() {
        let composed = compose(SourceFormat::Properties, b"a=1\nb=2\n", None)
            .expect("composition succeeds");
        assert_eq!(composed, "default:\n  a=1\n  b=2");
    }

    #[rstest]
    fn properties_overlay_follows_on_a_new_line() {
        let composed = compose(
            SourceFormat::Properties,
            b"a=1\n",
            Some(b"namespace:\n  dev:\n    a=2\n".as_slice()),
        )
        .expect("composition succeeds");
        assert_eq!(composed, "default:\n  a=1\nnamespace:\n  dev:\n    a=2\n");
    }

    #[rstest]
    fn yaml_base_becomes_default_section() {
        let composed =
            compose(SourceFormat::Yaml, b"server:\n  port: 80\n", None).expect("composition");
        let doc = yaml::parse_str(&composed).expect("composed YAML parses");
        let keys: Vec<_> = doc.keys().filter_map(Value::as_str).collect();
        assert_eq!(keys, ["default"]);
        let server = doc
            .get(&Value::from("default"))
            .and_then(Value::as_mapping)
            .and_then(|default| default.get(&Value::from("server")))
            .and_then(Value::as_mapping)
            .expect("server nested under default");
        assert_eq!(server.get(&Value::from("port")), Some(&Value::Int(80)));
    }

    #[rstest]
    fn malformed_yaml_base_is_rejected() {
        assert!(compose(SourceFormat::Yaml, b"a: [", None).is_err());
    }
}
