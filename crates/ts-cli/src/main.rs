use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use ts_cli::commands::{check, report};
use ts_cli::{Cli, Commands, Config};

/// Load configuration, honoring an explicit `--config` path.
fn load_config(cli: &Cli) -> Result<Config> {
    let config =
        Config::load_from(cli.config.as_deref()).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    match &cli.command {
        Some(Commands::Report { file, json }) => {
            let config = load_config(&cli)?;
            report::run(file, *json, &config)?;
        }
        Some(Commands::Check { file }) => {
            let config = load_config(&cli)?;
            let clean = check::run(file, &config)?;
            if !clean {
                std::process::exit(1);
            }
        }
        None => {
            // No subcommand, show help
            use clap::CommandFactory;
            Cli::command().print_help()?;
            println!();
        }
    }

    Ok(())
}
