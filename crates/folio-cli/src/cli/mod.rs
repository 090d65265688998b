//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use folio_core::config::Config;

mod commands;

#[derive(Parser)]
#[command(name = "folio")]
#[command(version)]
#[command(about = "Interactive portfolio terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Open the interactive terminal (default)
    Terminal,

    /// Submit a single line and print the resulting output
    Exec {
        /// The input line to submit
        #[arg(short, long)]
        line: String,
    },

    /// List the registered commands
    Commands {
        /// Emit the listing as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load().context("load config")?;

    // default to the interactive terminal
    let Some(command) = cli.command else {
        return commands::terminal::run(&config);
    };

    match command {
        Commands::Terminal => commands::terminal::run(&config),
        Commands::Exec { line } => commands::exec::run(&config, &line),
        Commands::Commands { json } => commands::list::run(json),
        Commands::Config { command } => match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
        },
    }
}
