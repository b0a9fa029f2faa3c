//! CLI entrypoint for `sccc`.

use clap::Parser;

use sccc::cli::{Cli, Command};
use sccc::error::Result;
use sccc::fetch::HttpFetcher;
use sccc::get::run_get;
use sccc::logging;
use sccc::settings::Settings;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    run().map_err(color_eyre::eyre::Report::from)
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_level.as_deref())?;
    match cli.command {
        Command::Get(args) => {
            let settings = Settings::load(&args.overrides(), cli.settings.as_deref())?;
            let fetcher = HttpFetcher::default();
            run_get(&fetcher, &settings, &args.config, &args.resource)?;
        }
    }
    Ok(())
}
