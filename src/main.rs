use anyhow::Result;
use clap::Parser;
use icongen::cli::{Cli, Commands};
use icongen::commands;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        None => commands::generate::run(&cli, false),
        Some(Commands::Generate { dry_run }) => commands::generate::run(&cli, *dry_run),
        Some(Commands::Check) => commands::check::run(&cli),
        Some(Commands::Init) => commands::init::run(&cli),
    }
}
