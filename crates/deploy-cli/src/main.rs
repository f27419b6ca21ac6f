use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::debug;

mod commands;
mod logging;

use commands::Commands;

#[derive(Parser)]
#[command(name = "deployctl")]
#[command(about = "Inspect and update per-environment deployment configuration")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Root directory holding one sub-directory per environment
    #[arg(global = true, long, env = "DEPLOY_CONFIG_DIR", default_value = "config")]
    config_dir: PathBuf,

    /// Enable debug logging
    #[arg(global = true, long, env = "DEPLOY_DEBUG")]
    debug: bool,
}

fn main() -> Result<()> {
    // A missing .env file is fine; ENV may come from the shell.
    dotenv::dotenv().ok();

    let cli = Cli::parse();
    logging::init_logging(cli.debug);
    debug!(config_dir = %cli.config_dir.display(), "starting deployctl");

    commands::run(cli.command, &cli.config_dir)
}
