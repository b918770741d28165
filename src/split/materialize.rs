//! Materialization of the extracted project
//!
//! Copies every project file to the same relative path under the output
//! directory. Copy failures are collected per file and never roll back files
//! already written.

use std::path::Path;

use crate::error::{self, Result};
use crate::hash;
use crate::path_utils;
use crate::ui::ProgressReporter;

/// A file that could not be copied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyFailure {
    pub path: String,
    pub reason: String,
}

/// What a materialization run did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaterializeReport {
    /// Files written to the output directory
    pub copied: usize,
    /// Written files whose previous copy already had identical content
    pub unchanged: usize,
    pub failures: Vec<CopyFailure>,
}

impl MaterializeReport {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Copy `file_list` from `work_dir` into `output_dir`
///
/// # Errors
///
/// Only failing to create `output_dir` itself is an error; individual copy
/// failures are recorded in the report.
pub fn materialize(
    file_list: &[String],
    work_dir: &Path,
    output_dir: &Path,
    progress: &mut dyn ProgressReporter,
) -> Result<MaterializeReport> {
    std::fs::create_dir_all(output_dir)
        .map_err(|e| error::fs::write_failed(output_dir.display().to_string(), e.to_string()))?;

    let mut report = MaterializeReport::default();
    progress.init_file_progress(file_list.len() as u64);

    for identifier in file_list {
        progress.update_file(identifier);
        match copy_one(identifier, work_dir, output_dir) {
            Ok(unchanged) => {
                report.copied += 1;
                if unchanged {
                    report.unchanged += 1;
                }
            }
            Err(err) => {
                tracing::warn!(file = %identifier, "{err}");
                report.failures.push(CopyFailure {
                    path: identifier.clone(),
                    reason: failure_reason(err),
                });
            }
        }
    }

    progress.finish_files("Dependency files copied");
    Ok(report)
}

/// Copy one file, returning whether the destination already held the same bytes
fn copy_one(identifier: &str, work_dir: &Path, output_dir: &Path) -> Result<bool> {
    let relative = path_utils::project_relative(identifier)
        .ok_or_else(|| error::fs::copy_failed(identifier, "outside the project directory"))?;

    let source = work_dir.join(&relative);
    let target = output_dir.join(&relative);

    if let Some(parent) = target.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| error::fs::copy_failed(identifier, e.to_string()))?;
    }

    if same_file(&source, &target) {
        return Err(error::fs::copy_failed(
            identifier,
            "source and destination are the same file",
        ));
    }

    let unchanged = target.is_file()
        && matches!(
            (hash::hash_file(&source), hash::hash_file(&target)),
            (Ok(a), Ok(b)) if a == b
        );

    std::fs::copy(&source, &target).map_err(|e| error::fs::copy_failed(identifier, e.to_string()))?;
    Ok(unchanged)
}

fn same_file(source: &Path, target: &Path) -> bool {
    match (dunce::canonicalize(source), dunce::canonicalize(target)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

fn failure_reason(err: error::DiluError) -> String {
    match err {
        error::DiluError::CopyFailed { reason, .. } => reason,
        other => other.to_string(),
    }
}
