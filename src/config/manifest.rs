//! Package manifest (package.json) reading
//!
//! Only the two dependency tables are read. The manifest is never written back.

use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{self, Result};

/// Manifest file name at the project root
pub const MANIFEST_FILE: &str = "package.json";

/// Which dependency table a package was declared in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DependencyKind {
    Runtime,
    Development,
}

/// Dependency tables of a package manifest
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageManifest {
    #[serde(default)]
    pub dependencies: IndexMap<String, String>,

    #[serde(default)]
    pub dev_dependencies: IndexMap<String, String>,
}

impl PackageManifest {
    /// Parse manifest JSON, ignoring every field except the dependency tables
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Read `package.json` from the project root
    ///
    /// # Errors
    ///
    /// `ManifestNotFound` when the file is missing or unreadable,
    /// `ManifestParseFailed` when it is not a valid manifest.
    pub fn load(work_dir: &Path) -> Result<Self> {
        let path = work_dir.join(MANIFEST_FILE);
        let content = std::fs::read_to_string(&path)
            .map_err(|_| error::manifest::not_found(path.display().to_string()))?;

        Self::from_json(&content)
            .map_err(|e| error::manifest::parse_failed(path.display().to_string(), e.to_string()))
    }

    /// Look up a package by exact name
    ///
    /// Runtime dependencies are checked before development dependencies.
    pub fn lookup(&self, name: &str) -> Option<(DependencyKind, &str)> {
        if let Some(range) = self.dependencies.get(name) {
            return Some((DependencyKind::Runtime, range.as_str()));
        }
        self.dev_dependencies
            .get(name)
            .map(|range| (DependencyKind::Development, range.as_str()))
    }
}
