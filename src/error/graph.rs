//! Dependency graph errors

use super::DiluError;

/// Creates an entry point not found error
pub fn entry_not_found(entry: impl Into<String>) -> DiluError {
    DiluError::EntryNotFound {
        entry: entry.into(),
    }
}

/// Creates a graph build failed error
pub fn build_failed(reason: impl Into<String>) -> DiluError {
    DiluError::GraphBuildFailed {
        reason: reason.into(),
    }
}

/// Creates a diagram render failed error
pub fn diagram_failed(reason: impl Into<String>) -> DiluError {
    DiluError::DiagramRenderFailed {
        reason: reason.into(),
    }
}
