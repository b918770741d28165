//! Common test utilities for dilu integration tests

#![allow(clippy::expect_used)]

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;
use walkdir::WalkDir;

/// A source project in a temporary directory
#[allow(dead_code)]
pub struct TestWorkspace {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to project root
    pub path: PathBuf,
}

impl TestWorkspace {
    /// Create an empty project directory
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = dunce::canonicalize(temp.path()).expect("Failed to canonicalize temp directory");
        Self { temp, path }
    }

    /// Project with one page importing a local module, lodash and a virtual module
    #[allow(dead_code)]
    pub fn with_sample_project() -> Self {
        let workspace = Self::new();
        workspace.write_file(
            "package.json",
            r#"{
  "name": "monolith",
  "dependencies": { "lodash": "^4.17.21", "react": "^18.2.0" },
  "devDependencies": { "vitest": "^1.6.0" }
}"#,
        );
        workspace.write_file(
            "src/index.ts",
            "import { double } from './utils';\n\
             import _ from 'lodash';\n\
             import env from 'virtual:env';\n\
             \n\
             export const run = () => _.map([1, 2], double);\n",
        );
        workspace.write_file(
            "src/utils.ts",
            "export const double = (n: number) => n * 2;\n",
        );
        workspace.write_file("src/unused.ts", "export const nobody = true;\n");
        workspace.write_file(
            "node_modules/lodash/package.json",
            r#"{ "name": "lodash", "main": "lodash.js" }"#,
        );
        workspace.write_file("node_modules/lodash/lodash.js", "module.exports = {};\n");
        workspace
    }

    /// Write a file in the project
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from the project
    #[allow(dead_code)]
    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.path.join(path)).expect("Failed to read file")
    }

    /// Check if a file exists in the project
    #[allow(dead_code)]
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// `dilu` command running inside the project
    pub fn dilu(&self) -> Command {
        let mut cmd = dilu_cmd();
        cmd.current_dir(&self.path).env_remove("DILU_WORKSPACE");
        cmd
    }
}

/// Command for the real dilu binary
// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated)]
pub fn dilu_cmd() -> Command {
    let mut cmd = Command::cargo_bin("dilu").expect("dilu binary is built");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Relative paths of every file under `root`, sorted
#[allow(dead_code)]
pub fn list_files(root: &Path) -> Vec<String> {
    let mut files: Vec<String> = WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter_map(|e| {
            e.path()
                .strip_prefix(root)
                .ok()
                .map(|p| p.to_string_lossy().replace('\\', "/"))
        })
        .collect();
    files.sort();
    files
}

/// BLAKE3 digest over the relative paths and contents of every file under `root`
#[allow(dead_code)]
pub fn tree_digest(root: &Path) -> String {
    let mut hasher = blake3::Hasher::new();
    for file in list_files(root) {
        hasher.update(file.as_bytes());
        hasher.update(b"\0");
        hasher.update(&std::fs::read(root.join(&file)).expect("Failed to read file"));
        hasher.update(b"\0");
    }
    hasher.finalize().to_hex().to_string()
}
