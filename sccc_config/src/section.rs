//! Section identifiers and precedence lists.

use std::fmt;

/// Section that always applies first.
pub const DEFAULT_SECTION: &str = "default";
/// Top-level key holding per-namespace sections.
pub const NAMESPACE_SECTION: &str = "namespace";
/// Top-level key holding per-version sections.
pub const VERSION_SECTION: &str = "version";

/// Dotted identifier naming one section of a document.
///
/// The identifier is split once, on its first dot: the part before the dot is
/// a top-level key and the remainder, when present, is a single literal key
/// inside it. `version.1.0.6` therefore looks up `version` and then the key
/// `1.0.6`, never `1` → `0` → `6`.
///
/// # Examples
///
/// ```rust
/// use sccc_config::SectionPath;
///
/// let path = SectionPath::parse("version.1.0.6");
/// assert_eq!(path.head(), "version");
/// assert_eq!(path.rest(), Some("1.0.6"));
/// assert_eq!(SectionPath::parse("default").rest(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SectionPath {
    head: String,
    rest: Option<String>,
}

impl SectionPath {
    /// Split `raw` on its first dot.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.split_once('.') {
            Some((head, rest)) => Self {
                head: head.to_owned(),
                rest: Some(rest.to_owned()),
            },
            None => Self {
                head: raw.to_owned(),
                rest: None,
            },
        }
    }

    /// Top-level key.
    #[must_use]
    pub fn head(&self) -> &str {
        &self.head
    }

    /// Literal nested key, if the identifier contained a dot.
    ///
    /// This may be empty, as in `version.` when no version was supplied.
    #[must_use]
    pub fn rest(&self) -> Option<&str> {
        self.rest.as_deref()
    }
}

impl fmt::Display for SectionPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.rest {
            Some(rest) => write!(f, "{}.{rest}", self.head),
            None => f.write_str(&self.head),
        }
    }
}

impl From<&str> for SectionPath {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

/// Ordered section precedence: later sections override earlier ones.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SectionList {
    paths: Vec<SectionPath>,
}

impl SectionList {
    /// The `default`, `namespace.<namespace>`, `version.<version>` list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sccc_config::SectionList;
    ///
    /// let sections = SectionList::standard("dev", "1.0.6");
    /// assert_eq!(sections.to_string(), "[default namespace.dev version.1.0.6]");
    /// ```
    #[must_use]
    pub fn standard(namespace: &str, version: &str) -> Self {
        Self {
            paths: vec![
                SectionPath::parse(DEFAULT_SECTION),
                SectionPath {
                    head: NAMESPACE_SECTION.to_owned(),
                    rest: Some(namespace.to_owned()),
                },
                SectionPath {
                    head: VERSION_SECTION.to_owned(),
                    rest: Some(version.to_owned()),
                },
            ],
        }
    }

    /// Sections in precedence order.
    pub fn iter(&self) -> impl Iterator<Item = &SectionPath> {
        self.paths.iter()
    }

    /// Number of sections.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.paths.len()
    }

    /// Whether the list names no sections.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

impl<P: Into<SectionPath>> FromIterator<P> for SectionList {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self {
            paths: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for SectionList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (index, path) in self.paths.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{path}")?;
        }
        f.write_str("]")
    }
}
