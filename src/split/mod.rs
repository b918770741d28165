//! Project splitting pipeline
//!
//! ```text
//! ProjectConfig ──► GraphBuilder::build ──► flatten ──► classify ──► materialize
//!                                                                      │
//!                                           render_diagram ◄───────────┘
//! ```
//!
//! The graph build is the only fatal stage after configuration. Unresolved
//! specifiers and copy failures are collected into the [`SplitOutcome`].

pub mod classify;
pub mod flatten;
pub mod materialize;
pub mod report;

use std::path::PathBuf;

use crate::config::ProjectConfig;
use crate::error::{self, DiluError, Result};
use crate::graph::{BuildOptions, GraphBuilder};
use crate::hash;
use crate::ui::ProgressReporter;

pub use classify::{Classification, classify};
pub use flatten::flatten;
pub use materialize::{MaterializeReport, materialize};

/// Diagram file written inside the output directory
pub const DIAGRAM_FILE: &str = "graph.svg";

/// Everything a split run produced
#[derive(Debug, Clone)]
pub struct SplitOutcome {
    pub output_dir: PathBuf,
    pub classification: Classification,
    pub materialized: MaterializeReport,
    /// Digest of the copied tree, excluding the diagram
    pub digest: Option<String>,
    /// Diagram path, when rendering succeeded
    pub diagram: Option<PathBuf>,
}

/// Runs one split of a resolved project
pub struct Splitter<B> {
    config: ProjectConfig,
    builder: B,
}

impl<B: GraphBuilder> Splitter<B> {
    pub fn new(config: ProjectConfig, builder: B) -> Self {
        Self { config, builder }
    }

    pub fn config(&self) -> &ProjectConfig {
        &self.config
    }

    /// Options handed to the graph builder
    pub fn build_options(&self) -> BuildOptions {
        BuildOptions {
            base_dir: self.config.work_dir.clone(),
            file_extensions: self.config.split.file_extensions.clone(),
            include_external_packages: true,
            descriptor_path: self.config.descriptor_path.clone(),
        }
    }

    /// Run the pipeline
    ///
    /// # Errors
    ///
    /// Fails when the graph cannot be built or the output directory cannot be
    /// created. Nothing is written when the graph build fails.
    pub fn run(&self, progress: &mut dyn ProgressReporter) -> Result<SplitOutcome> {
        let split = &self.config.split;
        let options = self.build_options();

        progress.start_stage("Analyzing dependencies...");
        let output = match self.builder.build(&split.enter, &options) {
            Ok(output) => output,
            Err(err) => {
                progress.abandon();
                return Err(as_graph_failure(err));
            }
        };
        progress.finish_stage(&format!(
            "Dependency graph built ({} modules)",
            output.graph.len()
        ));

        let closure = flatten(&output.graph);
        let classification = classify(&closure, &output.skipped, &self.config.manifest);
        tracing::debug!(
            files = classification.file_list.len(),
            packages = classification.delta.len(),
            skipped = classification.skipped.len(),
            "classified dependency closure"
        );

        let materialized = materialize(
            &classification.file_list,
            &self.config.work_dir,
            &split.output_dir,
            progress,
        )?;

        // Best effort: a missing `dot` binary never fails the split, and the
        // error is dropped unreported.
        let diagram_path = split.output_dir.join(DIAGRAM_FILE);
        let diagram = self
            .builder
            .render_diagram(&output.graph, &diagram_path)
            .ok()
            .map(|()| diagram_path);

        let digest = hash::hash_directory(&split.output_dir, &[DIAGRAM_FILE]).ok();

        Ok(SplitOutcome {
            output_dir: split.output_dir.clone(),
            classification,
            materialized,
            digest,
            diagram,
        })
    }
}

fn as_graph_failure(err: DiluError) -> DiluError {
    match err {
        DiluError::GraphBuildFailed { .. } | DiluError::EntryNotFound { .. } => err,
        other => error::graph::build_failed(other.to_string()),
    }
}
