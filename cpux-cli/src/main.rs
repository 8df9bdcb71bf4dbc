//! cpux CLI
//!
//! Prints host CPU and memory information obtained through the cpux C
//! interface.
//!
//! # Usage
//!
//! ```bash
//! cpux-cli                 # CPU and memory, text
//! cpux-cli cpu --format json
//! CPUX_FORMAT=json cpux-cli memory
//! ```

mod config;
mod init;
mod report;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use config::{Config, OutputFormat};
use report::{Report, Section};

#[derive(Parser)]
#[command(name = "cpux-cli", version)]
#[command(about = "Report host CPU model, core/thread counts, and total memory")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Output format (overrides the config file)
    #[arg(long, short, global = true, env = "CPUX_FORMAT", value_enum)]
    format: Option<OutputFormat>,

    /// Path to a TOML config file
    #[arg(long, global = true, env = "CPUX_CONFIG_PATH")]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Clone, Copy)]
enum Commands {
    /// CPU model and topology
    Cpu,
    /// Total physical memory
    Memory,
    /// Everything (default)
    All,
}

impl From<Commands> for Section {
    fn from(command: Commands) -> Self {
        match command {
            Commands::Cpu => Section::Cpu,
            Commands::Memory => Section::Memory,
            Commands::All => Section::All,
        }
    }
}

fn main() -> Result<()> {
    init::init_tracing()?;

    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(format) = cli.format {
        config.output.format = format;
    }

    let section = cli.command.map(Section::from).unwrap_or(Section::All);
    tracing::debug!(?section, "collecting host information");

    let report = Report::collect(section)?;
    println!("{}", report.render(&config.output)?);

    Ok(())
}
