//! Effective split configuration for one run
//!
//! Every field is resolved independently with the precedence
//! CLI argument > `dilu-cli.config.json` > built-in default.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;

use super::descriptor::ResolutionDescriptor;
use super::manifest::PackageManifest;
use super::split::{
    DEFAULT_PROJECT_PREFIX, EnterValue, SplitConfigFile, default_alias, default_file_extensions,
};
use crate::error::{self, Result};
use crate::path_utils;

/// Options supplied on the command line
#[derive(Debug, Clone, Default)]
pub struct SplitOptions {
    pub enter: Option<String>,
    pub project_name: Option<String>,
    pub output_dir: Option<String>,
}

/// Entry points handed to the graph builder
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryPoints {
    /// A single entry, passed through unmodified for the builder to resolve
    Single(String),
    /// A list of entries, each already joined against the work dir
    Many(Vec<PathBuf>),
}

/// Resolved split settings
#[derive(Debug, Clone)]
pub struct SplitConfig {
    pub enter: EntryPoints,
    /// Absolute directory the project folder is created under
    pub output_root: PathBuf,
    /// Absolute project folder, always `output_root/project_name`
    pub output_dir: PathBuf,
    pub project_name: String,
    pub alias: IndexMap<String, String>,
    pub file_extensions: Vec<String>,
}

/// Everything a split run needs to know about the source project
#[derive(Debug, Clone)]
pub struct ProjectConfig {
    pub work_dir: PathBuf,
    pub manifest: PackageManifest,
    pub split: SplitConfig,
    /// Resolution descriptor written for the graph builder
    pub descriptor_path: PathBuf,
}

impl ProjectConfig {
    /// Resolve the configuration for a project rooted at `work_dir`
    ///
    /// Reads the optional config file, reads `package.json`, and writes the
    /// resolution descriptor.
    ///
    /// # Errors
    ///
    /// `MissingEntry` when neither the CLI nor the config file names an entry,
    /// manifest errors when `package.json` is missing or invalid, and write
    /// errors when the descriptor cannot be written.
    pub fn resolve(options: &SplitOptions, work_dir: &Path) -> Result<Self> {
        let file = SplitConfigFile::load_or_default(work_dir);
        let split = SplitConfig::resolve(options, &file, work_dir)?;
        let manifest = PackageManifest::load(work_dir)?;

        let descriptor_path = ResolutionDescriptor::path_for(work_dir);
        ResolutionDescriptor::new(&split.file_extensions, &split.alias).write(&descriptor_path)?;

        Ok(Self {
            work_dir: work_dir.to_path_buf(),
            manifest,
            split,
            descriptor_path,
        })
    }
}

impl SplitConfig {
    /// Merge CLI options, the config file section and defaults
    pub fn resolve(options: &SplitOptions, file: &SplitConfigFile, work_dir: &Path) -> Result<Self> {
        let project_name = options
            .project_name
            .clone()
            .or_else(|| file.project_name.clone())
            .unwrap_or_else(generated_project_name);

        let enter = match (&options.enter, &file.enter) {
            (Some(enter), _) => EntryPoints::Single(enter.clone()),
            (None, Some(EnterValue::Single(enter))) => EntryPoints::Single(enter.clone()),
            (None, Some(EnterValue::Many(entries))) if !entries.is_empty() => EntryPoints::Many(
                entries.iter().map(|entry| work_dir.join(entry)).collect(),
            ),
            _ => return Err(error::config::missing_entry()),
        };

        let root = options
            .output_dir
            .as_deref()
            .or(file.output_dir.as_deref())
            .unwrap_or(".");
        let output_root = path_utils::normalize(&work_dir.join(root));
        let output_dir = path_utils::normalize(&output_root.join(&project_name));
        if output_dir == path_utils::normalize(work_dir) {
            return Err(error::config::output_is_work_dir(
                output_dir.display().to_string(),
            ));
        }

        let split = Self {
            enter,
            output_root,
            output_dir,
            project_name,
            alias: file.alias.clone().unwrap_or_else(default_alias),
            file_extensions: file
                .file_extensions
                .clone()
                .unwrap_or_else(default_file_extensions),
        };

        tracing::debug!(
            output_dir = %split.output_dir.display(),
            project = %split.project_name,
            "resolved split configuration"
        );

        Ok(split)
    }
}

fn generated_project_name() -> String {
    format!(
        "{DEFAULT_PROJECT_PREFIX}{}",
        chrono::Utc::now().timestamp_millis()
    )
}
