//! Parsing of `source=destination` file specifiers.

use std::fmt;
use std::str::FromStr;

use camino::{Utf8Path, Utf8PathBuf};

use crate::error::SpecifierError;

/// How a fetched source is interpreted before resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// `key=value` lines, transcoded to YAML around resolution.
    Properties,
    /// Any other extension is parsed as YAML directly.
    Yaml,
}

impl SourceFormat {
    /// Choose the format from the extension of `source`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sccc_config::SourceFormat;
    ///
    /// assert_eq!(SourceFormat::from_source("conf/app.properties"), SourceFormat::Properties);
    /// assert_eq!(SourceFormat::from_source("conf/app.yml"), SourceFormat::Yaml);
    /// ```
    #[must_use]
    pub fn from_source(source: &str) -> Self {
        match Utf8Path::new(source).extension() {
            Some("properties") => Self::Properties,
            _ => Self::Yaml,
        }
    }
}

/// Where the content of a config file comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// One remote file holding every section.
    Single(String),
    /// A base file that becomes the `default` section, optionally followed by
    /// an overlay file supplying the remaining sections.
    Template {
        /// File nested under `default`.
        base: String,
        /// File appended after the nested base.
        overlay: Option<String>,
    },
}

impl ConfigSource {
    /// The file whose extension decides the [`SourceFormat`].
    #[must_use]
    pub fn primary(&self) -> &str {
        match self {
            Self::Single(source) => source,
            Self::Template { base, .. } => base,
        }
    }

    /// Format of the primary file.
    #[must_use]
    pub fn format(&self) -> SourceFormat {
        SourceFormat::from_source(self.primary())
    }
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(source) => f.write_str(source),
            Self::Template { base, overlay } => {
                write!(f, "{base}:{}", overlay.as_deref().unwrap_or_default())
            }
        }
    }
}

/// A config file to resolve, written as `source[:overlay]=destination`.
///
/// # Examples
///
/// ```rust
/// use sccc_config::{ConfigSource, ConfigSpec};
///
/// let spec: ConfigSpec = "conf/base.yaml:conf/app.yaml=/app/application.yaml".parse()?;
/// assert_eq!(
///     spec.source,
///     ConfigSource::Template {
///         base: "conf/base.yaml".into(),
///         overlay: Some("conf/app.yaml".into()),
///     }
/// );
/// assert_eq!(spec.destination, "/app/application.yaml");
/// # Ok::<_, sccc_config::SpecifierError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigSpec {
    /// Remote file or template pair.
    pub source: ConfigSource,
    /// Local path the resolved file is written to.
    pub destination: Utf8PathBuf,
}

impl FromStr for ConfigSpec {
    type Err = SpecifierError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let (sources, destination) = split_specifier(raw)?;
        let source = match sources.split_once(':') {
            Some((base, overlay)) if !base.is_empty() => ConfigSource::Template {
                base: base.to_owned(),
                overlay: (!overlay.is_empty()).then(|| overlay.to_owned()),
            },
            Some(_) => return Err(SpecifierError::EmptySource(raw.to_owned())),
            None => ConfigSource::Single(sources.to_owned()),
        };
        Ok(Self {
            source,
            destination,
        })
    }
}

impl fmt::Display for ConfigSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.source, self.destination)
    }
}

/// A resource copied verbatim, written as `source=destination`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceSpec {
    /// Remote file path below the application base URL.
    pub source: String,
    /// Local path the resource is written to.
    pub destination: Utf8PathBuf,
}

impl FromStr for ResourceSpec {
    type Err = SpecifierError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let (source, destination) = split_specifier(raw)?;
        Ok(Self {
            source: source.to_owned(),
            destination,
        })
    }
}

impl fmt::Display for ResourceSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.source, self.destination)
    }
}

fn split_specifier(raw: &str) -> Result<(&str, Utf8PathBuf), SpecifierError> {
    let (source, destination) = raw
        .split_once('=')
        .ok_or_else(|| SpecifierError::MissingSeparator(raw.to_owned()))?;
    if source.is_empty() {
        return Err(SpecifierError::EmptySource(raw.to_owned()));
    }
    if destination.is_empty() {
        return Err(SpecifierError::EmptyDestination(raw.to_owned()));
    }
    Ok((source, Utf8PathBuf::from(destination)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn parses_single_source() {
        let spec: ConfigSpec = "conf/app1.properties=/app/application1.properties"
            .parse()
            .expect("valid specifier");
        assert_eq!(
            spec.source,
            ConfigSource::Single("conf/app1.properties".into())
        );
        assert_eq!(spec.source.format(), SourceFormat::Properties);
        assert_eq!(spec.destination, "/app/application1.properties");
    }

    #[rstest]
    fn template_without_overlay_has_no_overlay() {
        let spec: ConfigSpec = "conf/base.yaml:=/out.yaml".parse().expect("valid specifier");
        assert_eq!(
            spec.source,
            ConfigSource::Template {
                base: "conf/base.yaml".into(),
                overlay: None,
            }
        );
        assert_eq!(spec.to_string(), "conf/base.yaml:=/out.yaml");
    }

    #[rstest]
    #[case("conf/app.yaml", SpecifierError::MissingSeparator("conf/app.yaml".into()))]
    #[case("=/out", SpecifierError::EmptySource("=/out".into()))]
    #[case(":b.yaml=/out", SpecifierError::EmptySource(":b.yaml=/out".into()))]
    #[case("conf/app.yaml=", SpecifierError::EmptyDestination("conf/app.yaml=".into()))]
    fn rejects_malformed_config_specifiers(#[case] raw: &str, #[case] expected: SpecifierError) {
        assert_eq!(raw.parse::<ConfigSpec>(), Err(expected));
    }

    #[rstest]
    fn resource_keeps_colons_in_source() {
        let spec: ResourceSpec = "resources/a:b.res=/app/a.res".parse().expect("valid");
        assert_eq!(spec.source, "resources/a:b.res");
        assert_eq!(spec.destination, "/app/a.res");
    }

    #[rstest]
    #[case("app.properties", SourceFormat::Properties)]
    #[case("app.yaml", SourceFormat::Yaml)]
    #[case("app", SourceFormat::Yaml)]
    #[case("app.properties.bak", SourceFormat::Yaml)]
    fn detects_format_from_extension(#[case] source: &str, #[case] expected: SourceFormat) {
        assert_eq!(SourceFormat::from_source(source), expected);
    }
}
