//! Module dependency graph
//!
//! The splitter does not parse source files itself. It asks a [`GraphBuilder`]
//! for the static dependency graph of the entry points and treats the answer
//! as authoritative.
//!
//! ## Graph Structure
//!
//! ```text
//! IndexMap<String, Vec<String>>
//!    ↓              ↓
//!  module id    [dep1, dep2, dep3]
//! ```
//!
//! Identifiers are forward-slash paths relative to the base directory.
//! Packages resolved into `node_modules/` appear as leaf nodes.

pub mod diagram;
pub mod resolve;
pub mod scanner;

use std::path::{Path, PathBuf};

use indexmap::IndexMap;

use crate::config::EntryPoints;
use crate::error::Result;

pub use scanner::StaticImportScanner;

/// Module identifier -> ordered direct dependencies
pub type ModuleDependencyGraph = IndexMap<String, Vec<String>>;

/// Resolution settings passed to a graph builder
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Directory identifiers are relative to
    pub base_dir: PathBuf,
    /// Extensions (without leading dot) tried for extensionless specifiers
    pub file_extensions: Vec<String>,
    /// Whether packages resolved into `node_modules` appear as graph nodes
    pub include_external_packages: bool,
    /// Resolution descriptor carrying the alias table
    pub descriptor_path: PathBuf,
}

/// Result of a graph build
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GraphOutput {
    pub graph: ModuleDependencyGraph,
    /// Specifiers that could not be mapped to any file or package
    pub skipped: Vec<String>,
}

/// Builds the static dependency graph of a set of entry points
pub trait GraphBuilder {
    /// Build the graph reachable from `entries`
    ///
    /// # Errors
    ///
    /// Any error is a graph build failure and aborts the split.
    fn build(&self, entries: &EntryPoints, options: &BuildOptions) -> Result<GraphOutput>;

    /// Render a visual diagram of `graph` to `target`
    ///
    /// Best effort: callers are expected to ignore failures.
    fn render_diagram(&self, graph: &ModuleDependencyGraph, target: &Path) -> Result<()> {
        diagram::render_svg(graph, target)
    }
}
