//! Split configuration file (dilu-cli.config.json)
//!
//! The file is optional. Only the `split` section is read:
//!
//! ```json
//! {
//!   "split": {
//!     "enter": ["src/pages/home.vue", "src/pages/about.vue"],
//!     "outputDir": "../extracted",
//!     "projectName": "home-page",
//!     "alias": { "@": "./src", "~": "./" },
//!     "fileExtensions": ["js", "ts", "vue"]
//!   }
//! }
//! ```

use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{self, DiluError};

/// File name of the project-local split configuration
pub const CONFIG_FILE: &str = "dilu-cli.config.json";

/// Prefix of generated project names
pub const DEFAULT_PROJECT_PREFIX: &str = "dilu-cli_split_";

/// Default extensions tried when resolving extensionless specifiers
pub const DEFAULT_FILE_EXTENSIONS: &[&str] = &["js", "jsx", "ts", "tsx", "vue", "json"];

/// Default alias table
pub fn default_alias() -> IndexMap<String, String> {
    IndexMap::from([("@".to_string(), "./src".to_string())])
}

/// Default extension list
pub fn default_file_extensions() -> Vec<String> {
    DEFAULT_FILE_EXTENSIONS
        .iter()
        .map(|ext| (*ext).to_string())
        .collect()
}

/// `enter` accepts a single path or a list of paths
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum EnterValue {
    Single(String),
    Many(Vec<String>),
}

/// The `split` section of the configuration file
///
/// Fields are read independently: a field with the wrong type is logged and
/// ignored without affecting the others.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitConfigFile {
    pub enter: Option<EnterValue>,
    pub output_dir: Option<String>,
    pub project_name: Option<String>,
    pub alias: Option<IndexMap<String, String>>,
    pub file_extensions: Option<Vec<String>>,
}

impl SplitConfigFile {
    /// Parse the `split` section out of a configuration file's contents
    ///
    /// A file without a `split` key yields an empty section.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let root: Value = serde_json::from_str(json)?;
        Ok(root.get("split").map(Self::from_section).unwrap_or_default())
    }

    fn from_section(section: &Value) -> Self {
        Self {
            enter: field(section, "enter"),
            output_dir: field(section, "outputDir"),
            project_name: field(section, "projectName"),
            alias: section.get("alias").and_then(alias_table),
            file_extensions: field(section, "fileExtensions"),
        }
    }

    /// Read the configuration file from a project root
    ///
    /// # Errors
    ///
    /// Returns `ConfigReadFailed` when the file exists but cannot be read and
    /// `ConfigParseFailed` when it is not valid JSON. A missing file is `Ok(None)`.
    pub fn load(work_dir: &Path) -> Result<Option<Self>, DiluError> {
        let path = work_dir.join(CONFIG_FILE);
        if !path.is_file() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&path)
            .map_err(|e| error::config::read_failed(path.display().to_string(), e.to_string()))?;

        Self::from_json(&content)
            .map(Some)
            .map_err(|e| error::config::parse_failed(path.display().to_string(), e.to_string()))
    }

    /// Read the configuration file, falling back to an empty section on any failure
    ///
    /// Config problems never abort a split; they are logged and defaults apply.
    pub fn load_or_default(work_dir: &Path) -> Self {
        match Self::load(work_dir) {
            Ok(Some(config)) => config,
            Ok(None) => {
                tracing::debug!(dir = %work_dir.display(), "no {CONFIG_FILE}, using defaults");
                Self::default()
            }
            Err(err) => {
                tracing::warn!("{err}, using defaults");
                Self::default()
            }
        }
    }
}

/// One field of the `split` section, `None` when absent, null or mistyped
fn field<T: DeserializeOwned>(section: &Value, key: &str) -> Option<T> {
    let value = section.get(key).filter(|value| !value.is_null())?;
    match serde_json::from_value(value.clone()) {
        Ok(parsed) => Some(parsed),
        Err(err) => {
            tracing::warn!("ignoring split.{key} in {CONFIG_FILE}: {err}");
            None
        }
    }
}

/// String-valued alias entries; others (`false`, arrays) are skipped
fn alias_table(value: &Value) -> Option<IndexMap<String, String>> {
    let Some(entries) = value.as_object() else {
        if !value.is_null() {
            tracing::warn!("ignoring split.alias in {CONFIG_FILE}: expected an object");
        }
        return None;
    };

    let table = entries
        .iter()
        .filter_map(|(key, target)| match target.as_str() {
            Some(target) => Some((key.clone(), target.to_string())),
            None => {
                tracing::warn!("ignoring split.alias.{key} in {CONFIG_FILE}: not a path");
                None
            }
        })
        .collect();
    Some(table)
}
