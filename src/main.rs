//! dilu - project splitter
//!
//! Follows the static imports of an entry file through a JavaScript/TypeScript
//! codebase and copies everything it reaches into a new, self-contained project.

use clap::Parser;

mod cli;
mod commands;
mod config;
mod error;
mod graph;
mod hash;
mod logging;
mod path_utils;
mod split;
mod ui;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Split(args) => commands::split::run(cli.workspace, args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
