//! Command-line interface definitions for `sccc`.

use camino::Utf8PathBuf;
use clap::{Args as ClapArgs, Parser, Subcommand};
use sccc_config::{ConfigSpec, ResourceSpec};

use crate::settings::SettingsOverrides;

const GET_EXAMPLES: &str = "\
Examples:
  sccc get -u http://localhost:8888 -a app -n dev -v 1.0.6 -b master \\
           -c conf/app1.properties=/app/application1.properties \\
           -c conf/app1.yaml=/app/application1.yaml \\
           -r resources/myres1=/app/myres1.res
  sccc get -a app -n dev -v 1.0.6 \\
           -c conf/app2.properties:conf/app3.properties=/app/application1.properties \\
           -c conf/app2.yaml:conf/app3.yaml=/app/application1.yaml";

/// Parsed command line.
#[derive(Debug, Parser)]
#[command(name = "sccc")]
#[command(about = "Spring Cloud Config client: fetch, resolve and write configuration files")]
#[command(version)]
pub struct Cli {
    /// TOML settings file layered beneath the environment and flags.
    #[arg(long, global = true, value_name = "path")]
    pub settings: Option<Utf8PathBuf>,
    /// Log filter, for example `debug` or `sccc=trace` (overrides `SCCC_LOG`).
    #[arg(long, global = true, value_name = "filter")]
    pub log_level: Option<String>,
    /// Command to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Get config from a Spring Cloud Config server.
    #[command(after_help = GET_EXAMPLES)]
    Get(GetArgs),
}

/// Arguments for `sccc get`.
#[derive(Debug, Clone, ClapArgs)]
pub struct GetArgs {
    /// Spring Cloud Config server URI [default: `http://localhost:8888`].
    #[arg(short, long)]
    pub uri: Option<String>,
    /// Application name [default: application].
    #[arg(short, long)]
    pub application: Option<String>,
    /// Kubernetes namespace [default: default].
    #[arg(short, long)]
    pub namespace: Option<String>,
    /// Application version.
    #[arg(short = 'v', long = "version")]
    pub app_version: Option<String>,
    /// Git branch [default: master].
    #[arg(short, long)]
    pub branch: Option<String>,
    /// Config file, `source[:overlay]=destination` (repeatable, comma separated).
    #[arg(short = 'c', long = "configfile", value_name = "spec", value_delimiter = ',')]
    pub config: Vec<ConfigSpec>,
    /// Resource file, `source=destination` (repeatable, comma separated).
    #[arg(short = 'r', long = "resourcefile", value_name = "spec", value_delimiter = ',')]
    pub resource: Vec<ResourceSpec>,
}

impl GetArgs {
    /// Settings layer holding the flags that were actually supplied.
    #[must_use]
    pub fn overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            uri: self.uri.clone(),
            application: self.application.clone(),
            namespace: self.namespace.clone(),
            version: self.app_version.clone(),
            branch: self.branch.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn parse_get(args: &[&str]) -> GetArgs {
        let cli = Cli::try_parse_from(args.iter().copied()).expect("arguments parse");
        match cli.command {
            Command::Get(get) => get,
        }
    }

    #[rstest]
    fn parses_short_flags_and_repeated_specs() {
        let get = parse_get(&[
            "sccc",
            "get",
            "-u",
            "http://cfg:8888",
            "-n",
            "dev",
            "-v",
            "1.0.6",
            "-c",
            "conf/a.properties=/app/a.properties,conf/b.yaml=/app/b.yaml",
            "-c",
            "conf/base.yaml:conf/c.yaml=/app/c.yaml",
            "-r",
            "resources/r1=/app/r1.res",
        ]);
        assert_eq!(get.config.len(), 3);
        assert_eq!(get.resource.len(), 1);
        let overrides = get.overrides();
        assert_eq!(overrides.namespace.as_deref(), Some("dev"));
        assert_eq!(overrides.version.as_deref(), Some("1.0.6"));
        assert_eq!(overrides.application, None);
    }

    #[rstest]
    fn rejects_specs_without_destination() {
        let result = Cli::try_parse_from(["sccc", "get", "-c", "conf/a.yaml"]);
        assert!(result.is_err());
    }

    #[rstest]
    fn global_flags_follow_the_subcommand() {
        let cli = Cli::try_parse_from([
            "sccc",
            "get",
            "--log-level",
            "debug",
            "--settings",
            "s.toml",
        ])
        .expect("arguments parse");
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
        assert_eq!(
            cli.settings.as_deref().map(camino::Utf8Path::as_str),
            Some("s.toml")
        );
    }
}
