//! VTS CLI
//!
//! Team formation, workforce analysis and task tracking from the command line.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;

use vts_cli::VtsConfig;
use vts_cli::cli::{Args, Command};
use vts_cli::commands;
use vts_cli::logging::init_logging;

fn main() -> Result<()> {
    let args = Args::parse();

    // `config` subcommands must work even when the file is broken.
    let config = match &args.command {
        Command::Config { .. } => VtsConfig::default(),
        _ => VtsConfig::load(args.config.as_deref())?,
    };
    init_logging(&config.logging.level, args.verbose);

    let output = commands::run(&args, &config)?;
    print!("{output}");
    if !output.is_empty() && !output.ends_with('\n') {
        println!();
    }
    Ok(())
}
