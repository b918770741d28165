//! Error types and handling for dilu
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`config`]: Split configuration errors
//! - [`manifest`]: Package manifest errors
//! - [`graph`]: Dependency graph errors
//! - [`fs`]: File system errors

pub mod config;
pub mod fs;
pub mod graph;
pub mod manifest;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for dilu operations
#[derive(Error, Diagnostic, Debug)]
pub enum DiluError {
    // Configuration errors
    #[error("No entry point provided")]
    #[diagnostic(
        code(dilu::config::missing_entry),
        help("Pass --enter <path> or set split.enter in dilu-cli.config.json")
    )]
    MissingEntry,

    #[error("Failed to read configuration file: {path}")]
    #[diagnostic(code(dilu::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(dilu::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Output directory is the project directory itself: {path}")]
    #[diagnostic(
        code(dilu::config::output_is_work_dir),
        help("Pick a --project-name or --output-dir that resolves to a new folder")
    )]
    OutputIsWorkDir { path: String },

    // Manifest errors
    #[error("Package manifest not found: {path}")]
    #[diagnostic(
        code(dilu::manifest::not_found),
        help("Run dilu from the project root, or point --workspace at the directory holding package.json")
    )]
    ManifestNotFound { path: String },

    #[error("Failed to parse package manifest: {path}: {reason}")]
    #[diagnostic(code(dilu::manifest::parse_failed))]
    ManifestParseFailed { path: String, reason: String },

    // Graph errors
    #[error("Entry point not found: {entry}")]
    #[diagnostic(
        code(dilu::graph::entry_not_found),
        help("Entry paths are relative to the workspace directory")
    )]
    EntryNotFound { entry: String },

    #[error("Failed to build dependency graph: {reason}")]
    #[diagnostic(code(dilu::graph::build_failed))]
    GraphBuildFailed { reason: String },

    #[error("Failed to render dependency diagram: {reason}")]
    #[diagnostic(code(dilu::graph::diagram_failed))]
    DiagramRenderFailed { reason: String },

    // File system errors
    #[error("Failed to copy {path}: {reason}")]
    #[diagnostic(code(dilu::fs::copy_failed))]
    CopyFailed { path: String, reason: String },

    #[error("Failed to read file: {path}")]
    #[diagnostic(code(dilu::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(dilu::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(dilu::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for DiluError {
    fn from(err: std::io::Error) -> Self {
        DiluError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for DiluError {
    fn from(err: serde_json::Error) -> Self {
        DiluError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, DiluError>;

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_error_contains {
        ($test_name:ident, $err:expr, $($contains:expr),+ $(,)?) => {
            #[test]
            fn $test_name() {
                let err = $err;
                let error_string = err.to_string();
                $(
                    assert!(error_string.contains($contains),
                        "Error message should contain '{}', got: {}",
                        $contains,
                        error_string
                    );
                )+
            }
        };
    }

    #[test]
    fn test_error_display() {
        let err = DiluError::MissingEntry;
        assert_eq!(err.to_string(), "No entry point provided");
    }

    #[test]
    fn test_error_code() {
        let err = manifest::not_found("/project/package.json");
        assert_eq!(
            err.code().map(|c| c.to_string()),
            Some("dilu::manifest::not_found".to_string())
        );
    }

    #[test]
    fn test_missing_entry_has_help() {
        let err = DiluError::MissingEntry;
        let help = err.help().map(|h| h.to_string()).unwrap_or_default();
        assert!(help.contains("--enter"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: DiluError = io.into();
        assert!(matches!(err, DiluError::IoError { .. }));
        assert!(err.to_string().contains("denied"));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{ nope").unwrap_err();
        let err: DiluError = json_err.into();
        assert!(matches!(err, DiluError::ConfigParseFailed { .. }));
    }

    test_error_contains!(
        test_graph_build_failed_message,
        graph::build_failed("parser crashed"),
        "dependency graph",
        "parser crashed"
    );

    test_error_contains!(
        test_output_is_work_dir_message,
        config::output_is_work_dir("/work/app"),
        "project directory",
        "/work/app"
    );

    test_error_contains!(
        test_entry_not_found_message,
        graph::entry_not_found("src/missing.ts"),
        "src/missing.ts"
    );

    test_error_contains!(
        test_copy_failed_message,
        fs::copy_failed("src/a.ts", "permission denied"),
        "src/a.ts",
        "permission denied"
    );

    test_error_contains!(
        test_manifest_parse_failed_message,
        manifest::parse_failed("package.json", "expected value"),
        "package.json",
        "expected value"
    );

    test_error_contains!(
        test_config_parse_failed_message,
        config::parse_failed("dilu-cli.config.json", "trailing comma"),
        "dilu-cli.config.json",
        "trailing comma"
    );
}
