//! Specifier resolution for the static import scanner
//!
//! Order of attempts for a specifier found in `importer`:
//! 1. relative (`./x`, `../x`) against the importer's directory
//! 2. alias (`@/x` with alias `@ -> ./src`) against the base directory
//! 3. absolute paths as written
//! 4. bare package names under `base_dir/node_modules`
//!
//! Local candidates are probed as the exact file, then with each extension
//! appended, then as a directory index.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;

use crate::path_utils::{self, PACKAGE_STORE_DIR};

/// What a specifier resolved to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// A file inside the project
    Local(PathBuf),
    /// A file inside external package storage
    Package(PathBuf),
    /// Nothing on disk matches
    Unresolved,
}

/// Resolves import specifiers to files
#[derive(Debug, Clone)]
pub struct Resolver {
    base_dir: PathBuf,
    extensions: Vec<String>,
    alias: IndexMap<String, String>,
}

impl Resolver {
    pub fn new(base_dir: &Path, extensions: Vec<String>, alias: IndexMap<String, String>) -> Self {
        Self {
            base_dir: base_dir.to_path_buf(),
            extensions,
            alias,
        }
    }

    /// Resolve `specifier` as written in the file `importer`
    pub fn resolve(&self, specifier: &str, importer: &Path) -> Resolution {
        if specifier.starts_with("./") || specifier.starts_with("../") {
            let dir = importer.parent().unwrap_or(&self.base_dir);
            return self.probe_local(&dir.join(specifier));
        }

        if let Some(target) = self.expand_alias(specifier) {
            return self.probe_local(&target);
        }

        if Path::new(specifier).is_absolute() {
            return self.probe_local(Path::new(specifier));
        }

        self.resolve_package(specifier)
    }

    /// Resolve an entry point given on the command line or in the config file
    pub fn resolve_entry(&self, entry: &Path) -> Option<PathBuf> {
        let candidate = if entry.is_absolute() {
            entry.to_path_buf()
        } else {
            self.base_dir.join(entry)
        };
        self.probe(&candidate)
    }

    /// Replace a matching alias prefix with its target directory
    ///
    /// `@` matches `@` and `@/x` but not `@scope/pkg`.
    fn expand_alias(&self, specifier: &str) -> Option<PathBuf> {
        self.alias.iter().find_map(|(key, target)| {
            let rest = if specifier == key {
                ""
            } else {
                let tail = specifier.strip_prefix(key.as_str())?;
                if key.ends_with('/') {
                    tail
                } else {
                    tail.strip_prefix('/')?
                }
            };
            Some(self.base_dir.join(target).join(rest))
        })
    }

    fn probe_local(&self, target: &Path) -> Resolution {
        match self.probe(target) {
            Some(path) if path_utils::is_package_path(&path_utils::to_forward_slashes(&path)) => {
                Resolution::Package(path)
            }
            Some(path) => Resolution::Local(path),
            None => Resolution::Unresolved,
        }
    }

    fn resolve_package(&self, specifier: &str) -> Resolution {
        let package_dir = self.base_dir.join(PACKAGE_STORE_DIR).join(specifier);
        if let Some(path) = self.probe(&package_dir) {
            return Resolution::Package(path);
        }
        if package_dir.is_dir() {
            if let Some(main) = package_main(&package_dir).and_then(|main| self.probe(&main)) {
                return Resolution::Package(main);
            }
            return Resolution::Package(package_dir);
        }
        Resolution::Unresolved
    }

    /// Exact file, then `target.<ext>`, then `target/index.<ext>`
    fn probe(&self, target: &Path) -> Option<PathBuf> {
        let target = path_utils::normalize(target);
        if target.is_file() {
            return Some(target);
        }

        let file_name = target.file_name()?.to_string_lossy().into_owned();
        let with_ext = self
            .extensions
            .iter()
            .map(|ext| target.with_file_name(format!("{file_name}.{ext}")))
            .find(|candidate| candidate.is_file());
        if with_ext.is_some() {
            return with_ext;
        }

        if target.is_dir() {
            return self
                .extensions
                .iter()
                .map(|ext| target.join(format!("index.{ext}")))
                .find(|candidate| candidate.is_file());
        }

        None
    }
}

/// Entry file named by a package's `package.json`
fn package_main(package_dir: &Path) -> Option<PathBuf> {
    let content = std::fs::read_to_string(package_dir.join("package.json")).ok()?;
    let manifest: serde_json::Value = serde_json::from_str(&content).ok()?;
    ["module", "main"]
        .iter()
        .find_map(|field| manifest.get(field)?.as_str())
        .map(|main| package_dir.join(main))
}
