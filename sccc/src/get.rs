//! The `get` command: fetch, resolve and write config files and resources.
//!
//! Config files are processed first, in the order given, then resources.
//! The first failure stops the run; files already written are left in place.

use camino::Utf8PathBuf;
use sccc_config::{
    ConfigError, ConfigSource, ConfigSpec, ResourceSpec, SourceFormat, compose, properties,
    resolve_document,
};
use tracing::{debug, info};

use crate::error::{Result, SccError};
use crate::fetch::Fetch;
use crate::output::write_output;
use crate::settings::Settings;

/// Process every config and resource specifier against the server.
///
/// Returns the destinations written, in order.
///
/// # Errors
///
/// Returns the first fetch, resolution or write failure.
pub fn run_get<F: Fetch>(
    fetcher: &F,
    settings: &Settings,
    configs: &[ConfigSpec],
    resources: &[ResourceSpec],
) -> Result<Vec<Utf8PathBuf>> {
    info!(sections = %settings.sections(), "combine config with sections");
    let mut written = Vec::with_capacity(configs.len() + resources.len());
    for spec in configs {
        let contents = resolve_config(fetcher, settings, &spec.source)?;
        info!(destination = %spec.destination, "save config");
        write_output(&spec.destination, contents.as_bytes())?;
        debug!(destination = %spec.destination, %contents, "config file content");
        written.push(spec.destination.clone());
    }
    for spec in resources {
        let body = fetcher.fetch(&settings.file_url(&spec.source))?;
        info!(destination = %spec.destination, "save resource");
        write_output(&spec.destination, &body)?;
        debug!(
            destination = %spec.destination,
            contents = %String::from_utf8_lossy(&body),
            "resource file content"
        );
        written.push(spec.destination.clone());
    }
    Ok(written)
}

/// Fetch the sources behind `source` and render the resolved file contents.
///
/// # Errors
///
/// Returns fetch failures unchanged and wraps resolution failures in
/// [`SccError::Config`].
pub fn resolve_config<F: Fetch>(
    fetcher: &F,
    settings: &Settings,
    source: &ConfigSource,
) -> Result<String> {
    let config_error = |err: ConfigError| SccError::Config {
        source_file: source.to_string(),
        source: err,
    };
    let format = source.format();
    let body = match source {
        ConfigSource::Single(file) => fetcher.fetch(&settings.file_url(file))?,
        ConfigSource::Template { base, overlay } => {
            let base_body = fetcher.fetch(&settings.file_url(base))?;
            let overlay_body = overlay
                .as_deref()
                .map(|file| fetcher.fetch(&settings.file_url(file)))
                .transpose()?;
            compose(format, &base_body, overlay_body.as_deref())
                .map_err(config_error)?
                .into_bytes()
        }
    };
    let sections = settings.sections();
    match format {
        SourceFormat::Yaml => resolve_document(&body, &sections).map_err(config_error),
        SourceFormat::Properties => {
            let text = std::str::from_utf8(&body).map_err(|err| config_error(err.into()))?;
            let rendered = resolve_document(properties::to_yaml(text).as_bytes(), &sections)
                .map_err(config_error)?;
            Ok(properties::from_yaml(&rendered))
        }
    }
}
