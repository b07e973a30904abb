use anyhow::Context;
use clap::Parser;
use ibconv::{print_banner, print_help, BatchProcessor, Cli};
use log::LevelFilter;

fn main() -> anyhow::Result<()> {
    print_banner();

    let cli = Cli::parse();

    // Initialize logger
    env_logger::Builder::new()
        .filter_level(if cli.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        })
        .parse_default_env()
        .format_timestamp(None)
        .init();

    let config = cli.into_config()?;

    if config.verbose {
        config.print_summary();
    }

    if config.help {
        print_help().context("failed to print help")?;
        return Ok(());
    }

    BatchProcessor::new(config).run()?;

    Ok(())
}
