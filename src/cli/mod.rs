//! CLI definitions using clap derive API
//!
//! Argument types live in one submodule per command:
//! - split: Split command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod completions;
pub mod split;

pub use completions::CompletionsArgs;
pub use split::SplitArgs;

/// dilu - project splitter
///
/// Extract a self-contained project from a large JavaScript/TypeScript codebase.
#[derive(Parser, Debug)]
#[command(
    name = "dilu",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Split a self-contained project out of a large codebase",
    long_about = "dilu follows the static imports of an entry file, copies every project file \
                  it reaches into a new folder, and reports the npm packages and unresolved \
                  imports the new project needs.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  dilu split -e src/pages/home.tsx              \x1b[90m# Split into ./dilu-cli_split_<timestamp>\x1b[0m\n   \
                  dilu split -e src/main.ts -n checkout         \x1b[90m# Split into ./checkout\x1b[0m\n   \
                  dilu -w ../app split -e src/main.ts -o /tmp   \x1b[90m# Split another project into /tmp\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Project directory holding package.json (defaults to current directory)
    #[arg(long, short = 'w', global = true, env = "DILU_WORKSPACE")]
    pub workspace: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Split the files reachable from an entry into a new project
    Split(SplitArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
