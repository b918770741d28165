//! Resolution descriptor handed to the graph builder
//!
//! The builder only learns about aliases through this file. It is rewritten on
//! every run under the project's package cache and never read back by the
//! configuration resolver.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{self, Result};

/// Descriptor location relative to the project root
pub const DESCRIPTOR_PATH: &str = "node_modules/.temp/dilu-split-resolve.json";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionDescriptor {
    pub resolve: ResolveSection,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolveSection {
    /// Extensions with a leading dot, in probing order
    pub extensions: Vec<String>,

    /// Alias prefix -> path relative to the project root
    pub alias: IndexMap<String, String>,
}

impl ResolutionDescriptor {
    pub fn new(file_extensions: &[String], alias: &IndexMap<String, String>) -> Self {
        Self {
            resolve: ResolveSection {
                extensions: file_extensions
                    .iter()
                    .map(|ext| format!(".{}", ext.trim_start_matches('.')))
                    .collect(),
                alias: alias.clone(),
            },
        }
    }

    /// Where the descriptor for a project lives
    pub fn path_for(work_dir: &Path) -> PathBuf {
        work_dir.join(DESCRIPTOR_PATH)
    }

    /// Write the descriptor, creating parent directories and replacing any previous file
    pub fn write(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                error::fs::write_failed(parent.display().to_string(), e.to_string())
            })?;
        }

        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)
            .map_err(|e| error::fs::write_failed(path.display().to_string(), e.to_string()))?;

        tracing::debug!(path = %path.display(), "wrote resolution descriptor");
        Ok(())
    }

    /// Read a descriptor written by [`ResolutionDescriptor::write`]
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| error::fs::read_failed(path.display().to_string(), e.to_string()))?;
        let descriptor = serde_json::from_str(&content)?;
        Ok(descriptor)
    }

    /// Extensions without their leading dot
    pub fn bare_extensions(&self) -> Vec<String> {
        self.resolve
            .extensions
            .iter()
            .map(|ext| ext.trim_start_matches('.').to_string())
            .collect()
    }
}
