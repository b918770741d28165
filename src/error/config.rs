//! Configuration errors

use super::DiluError;

/// Creates a missing entry point error
pub fn missing_entry() -> DiluError {
    DiluError::MissingEntry
}

/// Creates a config read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> DiluError {
    DiluError::ConfigReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a config parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> DiluError {
    DiluError::ConfigParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an output directory equals work directory error
pub fn output_is_work_dir(path: impl Into<String>) -> DiluError {
    DiluError::OutputIsWorkDir { path: path.into() }
}
