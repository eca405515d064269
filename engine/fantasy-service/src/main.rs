//! F1 Fantasy command line
//!
//! `setup` writes a template data directory, `run` scores the round in it and
//! reports every roster with the highest score.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

use fantasy_service::{
    initialize_logging, load_config, run_round, write_template, RunOverrides, CONFIG_FILE,
};

/// Best F1 fantasy rosters for a race weekend
#[derive(Parser)]
#[command(name = "f1-fantasy", version)]
#[command(about = "Find the highest scoring F1 fantasy rosters within budget")]
struct Cli {
    /// Data directory (default: ./data, or `service.data_dir` from the config)
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    /// Configuration file (default: <data-dir>/config.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a sample round input and configuration
    Setup {
        /// Overwrite existing files
        #[arg(long)]
        force: bool,
    },
    /// Score the round and report the best rosters
    Run {
        /// Score qualifying only
        #[arg(long)]
        qualifying_only: bool,

        /// Play the extra DRS chip
        #[arg(long)]
        extra_drs: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let data_dir = cli.data_dir.clone().unwrap_or_else(|| PathBuf::from("./data"));

    let config_path = cli.config.clone().or_else(|| {
        let default = data_dir.join(CONFIG_FILE);
        default.exists().then_some(default)
    });
    let mut config = load_config(config_path.as_deref()).context("Failed to load configuration")?;
    if let Some(dir) = cli.data_dir {
        config.service.data_dir = dir;
    }

    initialize_logging(&config.logging.level, &config.logging.format)?;
    info!("Starting f1-fantasy v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Setup { force } => {
            let dir = &config.service.data_dir;
            println!("Writing template data to {}", dir.display());
            for path in write_template(dir, force)? {
                println!("  {}", path.display());
            }
        }
        Commands::Run { qualifying_only, extra_drs } => {
            let summary = run_round(&config, RunOverrides { qualifying_only, extra_drs })?;
            for roster in &summary.result.rosters {
                println!("{}", roster);
            }
            println!("{}", summary.result.len());
            info!("Report saved to {}", summary.report_path.display());
        }
    }

    Ok(())
}
