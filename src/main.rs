mod cli;
mod config;
mod convert;
mod convert_cmd;
mod fiscal_cmd;
mod format_cmd;
mod logging;
mod now_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = config::load(cli.config.as_deref())?;
    let table = convert::build_table(&config.calendar)?;
    match cli.command {
        Command::Convert(args) => convert_cmd::run(args, &table, &config),
        Command::Format(args) => format_cmd::run(args, &table, &config),
        Command::Fiscal(args) => fiscal_cmd::run(args, &table, &config),
        Command::Now(args) => now_cmd::run(args, &table, &config),
    }
}
