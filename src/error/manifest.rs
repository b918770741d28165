//! Package manifest errors

use super::DiluError;

/// Creates a manifest not found error
pub fn not_found(path: impl Into<String>) -> DiluError {
    DiluError::ManifestNotFound { path: path.into() }
}

/// Creates a manifest parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> DiluError {
    DiluError::ManifestParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
