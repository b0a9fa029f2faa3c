//! Layered runtime settings for the `get` command.
//!
//! Values are composed with Figment in increasing precedence: built-in
//! defaults, a TOML settings file, `SCCC_`-prefixed environment variables and
//! finally the flags given on the command line.

use std::collections::BTreeMap;

use camino::Utf8Path;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use sccc_config::SectionList;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SccError};

/// Prefix for environment variable overrides, e.g. `SCCC_NAMESPACE`.
pub const ENV_PREFIX: &str = "SCCC_";
/// Settings file read from the working directory when `--settings` is absent.
pub const DEFAULT_SETTINGS_FILE: &str = ".sccc.toml";

const DEFAULT_URI: &str = "http://localhost:8888";
const DEFAULT_APPLICATION: &str = "application";
const DEFAULT_NAMESPACE: &str = "default";
const DEFAULT_BRANCH: &str = "master";

/// Effective settings for one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Base URI of the config server.
    pub uri: String,
    /// Application name, the first path segment on the server.
    pub application: String,
    /// Deployment namespace; selects the `namespace.<ns>` section.
    pub namespace: String,
    /// Application version; selects the `version.<v>` section.
    pub version: String,
    /// Git branch (label) served by the config server.
    pub branch: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            uri: DEFAULT_URI.to_owned(),
            application: DEFAULT_APPLICATION.to_owned(),
            namespace: DEFAULT_NAMESPACE.to_owned(),
            version: String::new(),
            branch: DEFAULT_BRANCH.to_owned(),
        }
    }
}

/// Values supplied explicitly on the command line.
///
/// Unset fields are skipped so lower layers show through.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SettingsOverrides {
    /// `--uri`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    /// `--application`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application: Option<String>,
    /// `--namespace`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    /// `--version`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// `--branch`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
}

impl Settings {
    /// Compose defaults, the settings file, the environment and `overrides`.
    ///
    /// `settings_file` must exist when given; otherwise
    /// [`DEFAULT_SETTINGS_FILE`] is used if present.
    ///
    /// # Errors
    ///
    /// Returns [`SccError::Io`] for a missing explicit settings file and
    /// [`SccError::Settings`] when the layers cannot be extracted.
    pub fn load(overrides: &SettingsOverrides, settings_file: Option<&Utf8Path>) -> Result<Self> {
        let file = match settings_file {
            Some(path) if !path.exists() => {
                return Err(SccError::Io {
                    path: path.to_path_buf(),
                    source: std::io::Error::new(
                        std::io::ErrorKind::NotFound,
                        "settings file not found",
                    ),
                });
            }
            Some(path) => Toml::file(path),
            None => Toml::file(DEFAULT_SETTINGS_FILE),
        };
        let mut settings: Self = Figment::from(Serialized::defaults(Self::default()))
            .merge(file)
            .merge(env_layer())
            .merge(Serialized::defaults(overrides))
            .extract()?;
        settings.apply_fallbacks();
        Ok(settings)
    }

    /// Replace blank values with their defaults.
    ///
    /// `version` is left alone: an empty version selects no version section.
    pub fn apply_fallbacks(&mut self) {
        fallback(&mut self.uri, DEFAULT_URI);
        fallback(&mut self.application, DEFAULT_APPLICATION);
        fallback(&mut self.namespace, DEFAULT_NAMESPACE);
        fallback(&mut self.branch, DEFAULT_BRANCH);
    }

    /// `{uri}/{application}/{namespace}/{branch}`.
    #[must_use]
    pub fn base_url(&self) -> String {
        format!(
            "{}/{}/{}/{}",
            self.uri.trim_end_matches('/'),
            self.application,
            self.namespace,
            self.branch
        )
    }

    /// URL of `file` below [`Settings::base_url`].
    #[must_use]
    pub fn file_url(&self, file: &str) -> String {
        format!("{}/{}", self.base_url(), file.trim_start_matches('/'))
    }

    /// Sections applied to every config file, in precedence order.
    #[must_use]
    pub fn sections(&self) -> SectionList {
        SectionList::standard(&self.namespace, &self.version)
    }
}

/// `SCCC_`-prefixed variables, kept as the literal text that was set so
/// `SCCC_VERSION=1.0` selects `version.1.0` rather than a float.
fn env_layer() -> Serialized<BTreeMap<String, String>> {
    let vars = Env::prefixed(ENV_PREFIX)
        .iter()
        .map(|(key, value)| (key.as_str().to_owned(), value))
        .collect();
    Serialized::defaults(vars)
}

fn fallback(value: &mut String, default: &str) {
    if value.trim().is_empty() {
        default.clone_into(value);
    }
}
