//! YAML parsing and rendering backed by `serde-saphyr`.
//!
//! Only the exact literals `true` and `false` are read as booleans, so
//! values such as `yes` or `on` stay strings and survive the round trip
//! through properties files unchanged.

use serde::Serialize;
use serde_saphyr::{FlowMap, FlowSeq, Options};

use crate::error::{ConfigError, ConfigResult};
use crate::value::{Mapping, Value};

/// Columns added per nesting level when rendering.
const INDENT: usize = 2;

fn parse_options() -> Options {
    Options {
        strict_booleans: true,
        ..Options::default()
    }
}

/// Parse document bytes into a root mapping.
///
/// Empty documents and a bare `null` yield an empty mapping. Any other
/// non-mapping root is rejected.
///
/// # Errors
///
/// Returns [`ConfigError::Encoding`] for non-UTF-8 input,
/// [`ConfigError::Parse`] for invalid YAML and
/// [`ConfigError::RootNotMapping`] when the root is a scalar or sequence.
pub fn parse_document(bytes: &[u8]) -> ConfigResult<Mapping> {
    let contents = std::str::from_utf8(bytes)?;
    parse_str(contents)
}

/// Parse a YAML string into a root mapping.
///
/// # Errors
///
/// See [`parse_document`].
pub fn parse_str(contents: &str) -> ConfigResult<Mapping> {
    if contents.trim().is_empty() {
        return Ok(Mapping::new());
    }
    let value: Value = serde_saphyr::from_str_with_options(contents, parse_options())
        .map_err(ConfigError::Parse)?;
    match value {
        Value::Mapping(map) => Ok(map),
        Value::Null => Ok(Mapping::new()),
        other => Err(ConfigError::RootNotMapping {
            found: other.kind(),
        }),
    }
}

/// Render a mapping as block-style YAML text.
///
/// Nested mappings and sequences are indented two columns per level. Each
/// scalar is formatted by `serde-saphyr`; strings that would read back as a
/// different value, such as `"80"` or `"a: b"`, are quoted. An empty mapping
/// renders as an empty document.
///
/// # Examples
///
/// ```rust
/// use sccc_config::{parse_str, render};
///
/// let doc = parse_str("server:\n  ssl:\n    enabled: true\n")?;
/// assert_eq!(render(&doc)?, "server:\n  ssl:\n    enabled: true\n");
/// # Ok::<_, sccc_config::ConfigError>(())
/// ```
///
/// # Errors
///
/// Returns [`ConfigError::Serialize`] if a scalar cannot be emitted.
pub fn render(map: &Mapping) -> ConfigResult<String> {
    let mut out = String::new();
    write_mapping(&mut out, map, 0, false)?;
    Ok(out)
}

/// Write `map` with entries at `indent` columns. With `inline` set, the first
/// entry continues a line that already holds a sequence dash.
fn write_mapping(
    out: &mut String,
    map: &Mapping,
    indent: usize,
    inline: bool,
) -> ConfigResult<()> {
    for (position, (key, value)) in map.iter().enumerate() {
        if position > 0 || !inline {
            pad(out, indent);
        }
        out.push_str(&scalar_text(key)?);
        out.push(':');
        match value {
            Value::Mapping(inner) if !inner.is_empty() => {
                out.push('\n');
                write_mapping(out, inner, indent + INDENT, false)?;
            }
            Value::Sequence(items) if !items.is_empty() => {
                out.push('\n');
                write_sequence(out, items, indent + INDENT, false)?;
            }
            scalar => {
                out.push(' ');
                out.push_str(&scalar_text(scalar)?);
                out.push('\n');
            }
        }
    }
    Ok(())
}

fn write_sequence(
    out: &mut String,
    items: &[Value],
    indent: usize,
    inline: bool,
) -> ConfigResult<()> {
    for (position, item) in items.iter().enumerate() {
        if position > 0 || !inline {
            pad(out, indent);
        }
        out.push_str("- ");
        match item {
            Value::Mapping(inner) if !inner.is_empty() => {
                write_mapping(out, inner, indent + INDENT, true)?;
            }
            Value::Sequence(nested) if !nested.is_empty() => {
                write_sequence(out, nested, indent + INDENT, true)?;
            }
            scalar => {
                out.push_str(&scalar_text(scalar)?);
                out.push('\n');
            }
        }
    }
    Ok(())
}

fn pad(out: &mut String, indent: usize) {
    out.extend(std::iter::repeat_n(' ', indent));
}

/// Keys and leaf values. Collections in key position are written as
/// single-line flow nodes.
fn scalar_text(value: &Value) -> ConfigResult<String> {
    match value {
        Value::Mapping(map) if map.is_empty() => Ok("{}".to_owned()),
        Value::Sequence(items) if items.is_empty() => Ok("[]".to_owned()),
        Value::Mapping(map) => emit(&FlowMap(map)),
        Value::Sequence(items) => emit(&FlowSeq(items)),
        Value::String(text) => string_text(text),
        other => emit(other),
    }
}

fn string_text(text: &str) -> ConfigResult<String> {
    let emitted = emit(&text)?;
    if emitted.starts_with(['"', '\'']) || reads_back_as(&emitted, text) {
        return Ok(emitted);
    }
    Ok(format!("'{}'", text.replace('\'', "''")))
}

fn reads_back_as(emitted: &str, text: &str) -> bool {
    matches!(
        serde_saphyr::from_str_with_options::<Value>(emitted, parse_options()),
        Ok(Value::String(parsed)) if parsed == text
    )
}

fn emit<T: Serialize>(value: &T) -> ConfigResult<String> {
    let emitted =
        serde_saphyr::to_string(value).map_err(|err| ConfigError::Serialize(err.to_string()))?;
    Ok(emitted.trim_end_matches('\n').to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("")]
    #[case("   \n")]
    #[case("~")]
    fn blank_documents_are_empty(#[case] contents: &str) {
        let parsed = parse_str(contents).expect("blank document parses");
        assert!(parsed.is_empty());
    }

    #[rstest]
    #[case("- a\n- b\n", "sequence")]
    #[case("just text", "string")]
    fn non_mapping_roots_are_rejected(#[case] contents: &str, #[case] kind: &str) {
        let err = parse_str(contents).expect_err("root must be a mapping");
        assert!(
            matches!(err, ConfigError::RootNotMapping { found } if found == kind),
            "unexpected error: {err}"
        );
    }

    #[rstest]
    fn malformed_yaml_reports_parse_error() {
        let err = parse_str("key: [").expect_err("unterminated flow sequence");
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("failed to parse config"));
    }

    #[rstest]
    fn invalid_utf8_is_an_encoding_error() {
        let err = parse_document(&[0x66, 0xff, 0x3a]).expect_err("not UTF-8");
        assert!(matches!(err, ConfigError::Encoding(_)));
    }

    #[rstest]
    fn parsing_preserves_key_order_and_types() {
        let parsed = parse_str("zeta: 1\nalpha: two\n3: true\n").expect("valid YAML");
        let keys: Vec<_> = parsed.keys().cloned().collect();
        assert_eq!(
            keys,
            vec![Value::from("zeta"), Value::from("alpha"), Value::Int(3)]
        );
        assert_eq!(parsed.get(&Value::Int(3)), Some(&Value::Bool(true)));
    }

    #[rstest]
    fn null_scalars_parse_as_null() {
        let parsed = parse_str("a:\nb: ~\nc: null\nd: '~'\ne: ''\n").expect("valid YAML");
        let values: Vec<_> = parsed.iter().map(|(_, value)| value.clone()).collect();
        assert_eq!(
            values,
            vec![
                Value::Null,
                Value::Null,
                Value::Null,
                Value::from("~"),
                Value::from(""),
            ]
        );
    }

    #[rstest]
    #[case("flag: yes\n", Value::from("yes"))]
    #[case("flag: on\n", Value::from("on"))]
    #[case("flag: true\n", Value::Bool(true))]
    fn only_exact_literals_are_booleans(#[case] contents: &str, #[case] expected: Value) {
        let parsed = parse_str(contents).expect("valid YAML");
        assert_eq!(parsed.get(&Value::from("flag")), Some(&expected));
    }

    #[rstest]
    fn nested_mappings_render_indented() {
        let text = concat!(
            "server:\n",
            "  ssl:\n",
            "    enabled: true\n",
            "    store:\n",
            "      type: pkcs12\n",
            "  port: 80\n",
        );
        let doc = parse_str(text).expect("valid YAML");
        let rendered = render(&doc).expect("render succeeds");
        assert_eq!(rendered, text);
        assert_eq!(parse_str(&rendered).expect("rendered YAML parses"), doc);
    }

    #[rstest]
    fn sequences_and_empty_collections_round_trip() {
        let doc = parse_str(concat!(
            "hosts:\n",
            "  - name: a\n",
            "    ports: [80, 443]\n",
            "  - name: b\n",
            "    ports: []\n",
            "matrix:\n",
            "  - - 1\n",
            "    - 2\n",
            "empty: {}\n",
            "nothing: ~\n",
        ))
        .expect("valid YAML");
        let rendered = render(&doc).expect("render succeeds");
        assert_eq!(parse_str(&rendered).expect("rendered YAML parses"), doc, "{rendered}");
    }

    #[rstest]
    #[case("80")]
    #[case("1.0")]
    #[case("true")]
    #[case("null")]
    #[case("a: b")]
    #[case("it's")]
    #[case("trailing ")]
    #[case("")]
    #[case("line\nbreak")]
    fn strings_keep_their_type_through_render(#[case] text: &str) {
        let mut doc = Mapping::new();
        doc.insert(text, text);
        let rendered = render(&doc).expect("render succeeds");
        let reparsed = parse_str(&rendered).expect("rendered YAML parses");
        assert_eq!(reparsed, doc, "rendered as {rendered:?}");
    }

    #[rstest]
    fn null_renders_as_null_literal() {
        let doc = parse_str("token:\n").expect("valid YAML");
        assert_eq!(render(&doc).expect("render succeeds"), "token: null\n");
    }

    #[rstest]
    fn empty_mapping_renders_as_empty_document() {
        assert_eq!(render(&Mapping::new()).expect("render succeeds"), "");
    }
}
