//! File system errors

use super::DiluError;

/// Creates a copy failed error
pub fn copy_failed(path: impl Into<String>, reason: impl Into<String>) -> DiluError {
    DiluError::CopyFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a file read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> DiluError {
    DiluError::FileReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a file write failed error
pub fn write_failed(path: impl Into<String>, reason: impl Into<String>) -> DiluError {
    DiluError::FileWriteFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
