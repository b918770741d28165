//! Split command implementation
//!
//! Resolves the project configuration, runs the split pipeline with the
//! static import scanner, and prints the summary.

use std::path::{Path, PathBuf};

use crate::cli::SplitArgs;
use crate::config::{ProjectConfig, SplitOptions};
use crate::error::{DiluError, Result};
use crate::graph::StaticImportScanner;
use crate::split::{Splitter, report};
use crate::ui::InteractiveProgressReporter;

/// Run split command
pub fn run(workspace: Option<PathBuf>, args: SplitArgs) -> Result<()> {
    let work_dir = resolve_work_dir(workspace)?;
    tracing::debug!(work_dir = %work_dir.display(), "splitting project");

    let options = SplitOptions {
        enter: Some(args.enter),
        project_name: args.project_name,
        output_dir: args.output_dir,
    };
    let config = ProjectConfig::resolve(&options, &work_dir)?;

    let splitter = Splitter::new(config, StaticImportScanner);
    let mut progress = InteractiveProgressReporter::new();
    let outcome = splitter.run(&mut progress)?;

    report::print(&outcome);
    Ok(())
}

/// Workspace argument or current directory, canonicalized
fn resolve_work_dir(workspace: Option<PathBuf>) -> Result<PathBuf> {
    let path = match workspace {
        Some(path) => path,
        None => std::env::current_dir().map_err(|e| DiluError::IoError {
            message: format!("Failed to get current directory: {e}"),
        })?,
    };
    canonical(&path)
}

fn canonical(path: &Path) -> Result<PathBuf> {
    dunce::canonicalize(path).map_err(|e| DiluError::IoError {
        message: format!("Workspace {} is not accessible: {e}", path.display()),
    })
}
