//! Line-level transcoding between `.properties` text and YAML.
//!
//! Properties sources are rewritten into YAML before section resolution and
//! the merged YAML is rewritten back afterwards. Both directions work one line
//! at a time and only touch the first separator on each line, so values that
//! themselves contain `=` or `: ` survive the round trip.

/// Rewrite `key=value` lines as `key: value`.
///
/// Lines without `=` pass through unchanged, which lets section headers such
/// as `namespace:` and their indentation coexist with properties entries.
///
/// # Examples
///
/// ```rust
/// use sccc_config::properties::to_yaml;
///
/// assert_eq!(
///     to_yaml("default:\n  url=jdbc:h2:mem?a=b\n"),
///     "default:\n  url: jdbc:h2:mem?a=b\n",
/// );
/// ```
#[must_use]
pub fn to_yaml(properties: &str) -> String {
    map_lines(properties, |line| match line.split_once('=') {
        Some((key, value)) => format!("{key}: {value}"),
        None => line.to_owned(),
    })
}

/// Rewrite rendered `key: value` lines back to `key=value`.
///
/// A value that is exactly `null` or `~` collapses to nothing, so an entry
/// that was empty in the source (`key=`) stays empty in the output. Lines that
/// carry no `: ` separator, such as nested mapping headers, are unchanged.
///
/// # Examples
///
/// ```rust
/// use sccc_config::properties::from_yaml;
///
/// assert_eq!(from_yaml("port: 8080\nempty: null\n"), "port=8080\nempty=\n");
/// ```
#[must_use]
pub fn from_yaml(yaml: &str) -> String {
    map_lines(yaml, |line| match line.split_once(": ") {
        Some((key, "null" | "~")) => format!("{key}="),
        Some((key, value)) => format!("{key}={value}"),
        None => line.to_owned(),
    })
}

/// Nest a properties body under a synthetic `default:` heading.
///
/// One trailing newline is dropped and every line is indented by two spaces.
///
/// # Examples
///
/// ```rust
/// use sccc_config::properties::nest_under_default;
///
/// assert_eq!(nest_under_default("a=1\nb=2\n"), "default:\n  a=1\n  b=2");
/// ```
#[must_use]
pub fn nest_under_default(properties: &str) -> String {
    let body = properties.strip_suffix('\n').unwrap_or(properties);
    let mut nested = String::from("default:");
    for line in body.split('\n') {
        nested.push_str("\n  ");
        nested.push_str(line);
    }
    nested
}

fn map_lines<F>(text: &str, mut map: F) -> String
where
    F: FnMut(&str) -> String,
{
    let mut output = String::with_capacity(text.len());
    for segment in text.split_inclusive('\n') {
        let (line, newline) = segment
            .strip_suffix('\n')
            .map_or((segment, ""), |line| (line, "\n"));
        output.push_str(&map(line));
        output.push_str(newline);
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("a=1", "a: 1")]
    #[case("a=", "a: ")]
    #[case("a=b=c", "a: b=c")]
    #[case("# comment", "# comment")]
    #[case("namespace:\n  dev:\n    a=2\n", "namespace:\n  dev:\n    a: 2\n")]
    #[case("", "")]
    fn converts_properties_to_yaml(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(to_yaml(input), expected);
    }

    #[rstest]
    #[case("a: 1\n", "a=1\n")]
    #[case("a: null\n", "a=\n")]
    #[case("a: ~\n", "a=\n")]
    #[case("a: nullable\n", "a=nullable\n")]
    #[case("url: 'http://x: y'\n", "url='http://x: y'\n")]
    #[case("{}\n", "{}\n")]
    fn converts_yaml_to_properties(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(from_yaml(input), expected);
    }

    #[rstest]
    #[case("", "default:\n  ")]
    #[case("a=1", "default:\n  a=1")]
    #[case("a=1\n\n", "default:\n  a=1\n  ")]
    fn nests_body_under_default(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(nest_under_default(input), expected);
    }
}
