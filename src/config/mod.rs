//! Configuration handling for dilu
//!
//! This module contains data structures for:
//! - `dilu-cli.config.json` - Optional split configuration
//! - `package.json` - Dependency tables of the source project
//! - the resolution descriptor consumed by the graph builder
//! - the effective [`ProjectConfig`] of a run

pub mod descriptor;
pub mod manifest;
pub mod project;
pub mod split;

// Re-export commonly used types
pub use descriptor::ResolutionDescriptor;
pub use manifest::{DependencyKind, PackageManifest};
pub use project::{EntryPoints, ProjectConfig, SplitOptions};
