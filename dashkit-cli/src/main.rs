use std::fs::File;

use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode, WriteLogger};

mod args;
mod commands;
mod output;

use args::{Cli, Commands};

fn init_logging(cli: &Cli) -> Result<()> {
    let level: LevelFilter = cli.log_level.parse().context("invalid log level")?;
    match &cli.log_file {
        Some(path) => {
            let file = File::create(path).with_context(|| format!("creating log file {}", path.display()))?;
            WriteLogger::init(level, Config::default(), file)?;
        }
        None => TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto)?,
    }
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    init_logging(&cli)?;

    match cli.command {
        Commands::Users {
            query,
            status,
            sort,
            page,
            page_size,
            fuzzy,
            select,
            select_all,
            action,
            hide,
            export,
            config,
        } => commands::users(commands::UsersArgs {
            query,
            status,
            sort,
            page,
            page_size,
            fuzzy,
            select: select.unwrap_or_default(),
            select_all,
            action,
            hide: hide.unwrap_or_default(),
            export,
            config,
        }),
        Commands::Date { text, default, time } => commands::date(&text, default.as_deref(), time.as_deref()),
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
