//! Static import scanner
//!
//! Default [`GraphBuilder`]: walks source files breadth-first from the entry
//! points and extracts static references with regular expressions. No code is
//! executed, and dynamic `import()` calls are not followed.

use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use indexmap::{IndexMap, IndexSet};
use once_cell::sync::Lazy;
use regex::Regex;

use super::resolve::{Resolution, Resolver};
use super::{BuildOptions, GraphBuilder, GraphOutput, ModuleDependencyGraph};
use crate::config::{EntryPoints, ResolutionDescriptor};
use crate::error::{self, Result};
use crate::path_utils;

/// Files whose contents are scanned for script imports
const SCRIPT_EXTENSIONS: &[&str] = &["js", "jsx", "ts", "tsx", "mjs", "cjs", "mts", "cts", "vue"];

/// Files whose contents are scanned for `@import`
const STYLE_EXTENSIONS: &[&str] = &["css", "scss", "sass", "less"];

static BLOCK_COMMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/\*[\s\S]*?\*/").expect("valid block comment regex"));

static LINE_COMMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^\s*//.*$").expect("valid line comment regex"));

static IMPORT_FROM: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?m)^\s*(?:import|export)\b[^'"`;]*?\bfrom\s*['"]([^'"\n]+)['"]"#)
        .expect("valid import regex")
});

static IMPORT_BARE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?m)^\s*import\s*['"]([^'"\n]+)['"]"#).expect("valid side-effect import regex")
});

static REQUIRE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"\brequire\s*\(\s*['"]([^'"\n]+)['"]\s*\)"#).expect("valid require regex")
});

static STYLE_IMPORT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"@import\s+(?:url\(\s*)?['"]([^'"\n]+)['"]"#).expect("valid @import regex")
});

/// Regex-based graph builder
#[derive(Debug, Clone, Default)]
pub struct StaticImportScanner;

impl StaticImportScanner {
    /// Alias table and extensions from the descriptor, or the plain options
    fn resolver(options: &BuildOptions) -> Resolver {
        match ResolutionDescriptor::load(&options.descriptor_path) {
            Ok(descriptor) => {
                let extensions = if descriptor.resolve.extensions.is_empty() {
                    options.file_extensions.clone()
                } else {
                    descriptor.bare_extensions()
                };
                Resolver::new(&options.base_dir, extensions, descriptor.resolve.alias)
            }
            Err(err) => {
                tracing::debug!("{err}, resolving without aliases");
                Resolver::new(
                    &options.base_dir,
                    options.file_extensions.clone(),
                    IndexMap::new(),
                )
            }
        }
    }
}

impl GraphBuilder for StaticImportScanner {
    fn build(&self, entries: &EntryPoints, options: &BuildOptions) -> Result<GraphOutput> {
        let resolver = Self::resolver(options);

        let entry_paths = match entries {
            EntryPoints::Single(entry) => vec![PathBuf::from(entry)],
            EntryPoints::Many(entries) => entries.clone(),
        };

        let mut queue = VecDeque::new();
        for entry in &entry_paths {
            let path = resolver
                .resolve_entry(entry)
                .ok_or_else(|| error::graph::entry_not_found(entry.display().to_string()))?;
            queue.push_back(path);
        }

        let mut graph = ModuleDependencyGraph::new();
        let mut skipped = IndexSet::new();

        while let Some(path) = queue.pop_front() {
            let id = path_utils::to_identifier(&path, &options.base_dir);
            if graph.contains_key(&id) {
                continue;
            }
            if path_utils::is_package_path(&id) {
                graph.insert(id, Vec::new());
                continue;
            }

            let mut deps = IndexSet::new();
            for specifier in scan_file(&path)? {
                match resolver.resolve(&specifier, &path) {
                    Resolution::Local(dep) => {
                        deps.insert(path_utils::to_identifier(&dep, &options.base_dir));
                        queue.push_back(dep);
                    }
                    Resolution::Package(dep) if options.include_external_packages => {
                        deps.insert(path_utils::to_identifier(&dep, &options.base_dir));
                        queue.push_back(dep);
                    }
                    Resolution::Package(_) => {}
                    Resolution::Unresolved => {
                        tracing::debug!(file = %id, %specifier, "unresolved specifier");
                        skipped.insert(specifier);
                    }
                }
            }
            graph.insert(id, deps.into_iter().collect());
        }

        tracing::debug!(
            modules = graph.len(),
            skipped = skipped.len(),
            "dependency graph built"
        );

        Ok(GraphOutput {
            graph,
            skipped: skipped.into_iter().collect(),
        })
    }
}

/// Specifiers referenced by a file, in source order
///
/// Files that are neither scripts nor styles have no outgoing references.
fn scan_file(path: &Path) -> Result<Vec<String>> {
    let extension = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    let is_script = SCRIPT_EXTENSIONS.contains(&extension.as_str());
    let is_style = STYLE_EXTENSIONS.contains(&extension.as_str());
    if !is_script && !is_style {
        return Ok(Vec::new());
    }

    let bytes = std::fs::read(path).map_err(|e| {
        error::graph::build_failed(format!("cannot read {}: {e}", path.display()))
    })?;
    let source = String::from_utf8_lossy(&bytes);

    Ok(if is_script {
        extract_script_specifiers(&source)
    } else {
        extract_style_specifiers(&source)
    })
}

/// Static `import`/`export ... from`/`require` specifiers
pub fn extract_script_specifiers(source: &str) -> Vec<String> {
    let source = strip_comments(source);
    let mut found: Vec<(usize, String)> = Vec::new();
    for regex in [&*IMPORT_FROM, &*IMPORT_BARE, &*REQUIRE] {
        for captures in regex.captures_iter(&source) {
            if let Some(m) = captures.get(1) {
                found.push((m.start(), m.as_str().to_string()));
            }
        }
    }
    found.sort_by_key(|(offset, _)| *offset);

    let unique: IndexSet<String> = found.into_iter().map(|(_, specifier)| specifier).collect();
    unique.into_iter().collect()
}

/// `@import` specifiers of a stylesheet, with the `~` package prefix removed
pub fn extract_style_specifiers(source: &str) -> Vec<String> {
    let source = BLOCK_COMMENT.replace_all(source, "");
    let unique: IndexSet<String> = STYLE_IMPORT
        .captures_iter(&source)
        .filter_map(|captures| captures.get(1))
        .map(|m| m.as_str().trim_start_matches('~').to_string())
        .filter(|specifier| !specifier.starts_with("http://") && !specifier.starts_with("https://"))
        .collect();
    unique.into_iter().collect()
}

fn strip_comments(source: &str) -> String {
    let without_blocks = BLOCK_COMMENT.replace_all(source, "");
    LINE_COMMENT.replace_all(&without_blocks, "").into_owned()
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use crate::config::split::{default_alias, default_file_extensions};
    use tempfile::TempDir;

    #[test]
    fn test_extract_script_specifiers() {
        let source = r#"
import { a, b } from "./a";
import Default from '@/components/Default.vue'
import {
  multi,
  line,
} from "lodash";
import "./side-effect.css";
export { c } from "./c";
export * from './d';
const e = require("./e");
// import ignored from "./commented";
/* import alsoIgnored from "./block"; */
const lazy = () => import("./lazy");
"#;

        assert_eq!(
            extract_script_specifiers(source),
            vec![
                "./a",
                "@/components/Default.vue",
                "lodash",
                "./side-effect.css",
                "./c",
                "./d",
                "./e",
            ]
        );
    }

    #[test]
    fn test_extract_script_specifiers_dedupes() {
        let source = "import a from './a';\nimport { b } from './a';\n";
        assert_eq!(extract_script_specifiers(source), vec!["./a"]);
    }

    #[test]
    fn test_extract_style_specifiers() {
        let source = r#"
@import "./variables.scss";
@import url("~antd/dist/reset.css");
@import url('https://fonts.example.com/font.css');
/* @import "./commented.css"; */
"#;
        assert_eq!(
            extract_style_specifiers(source),
            vec!["./variables.scss", "antd/dist/reset.css"]
        );
    }

    fn write(root: &Path, file: &str, content: &str) {
        let path = root.join(file);
        std::fs::create_dir_all(path.parent().expect("parent")).expect("mkdir");
        std::fs::write(path, content).expect("write");
    }

    fn options(root: &Path) -> BuildOptions {
        let descriptor_path = ResolutionDescriptor::path_for(root);
        ResolutionDescriptor::new(&default_file_extensions(), &default_alias())
            .write(&descriptor_path)
            .expect("write descriptor");
        BuildOptions {
            base_dir: root.to_path_buf(),
            file_extensions: default_file_extensions(),
            include_external_packages: true,
            descriptor_path,
        }
    }

    #[test]
    fn test_build_graph() {
        let temp = TempDir::new().expect("temp dir");
        let root = temp.path();
        write(
            root,
            "src/index.ts",
            "import { helper } from './utils';\nimport _ from 'lodash';\nimport env from 'virtual:env';\n",
        );
        write(root, "src/utils.ts", "import cfg from '@/config.json';\n");
        write(root, "src/config.json", "{}");
        write(root, "node_modules/lodash/index.js", "module.exports = {};");

        let output = StaticImportScanner
            .build(&EntryPoints::Single("src/index.ts".to_string()), &options(root))
            .expect("graph builds");

        assert_eq!(
            output.graph.get("src/index.ts"),
            Some(&vec![
                "src/utils.ts".to_string(),
                "node_modules/lodash/index.js".to_string()
            ])
        );
        assert_eq!(
            output.graph.get("src/utils.ts"),
            Some(&vec!["src/config.json".to_string()])
        );
        assert_eq!(output.graph.get("src/config.json"), Some(&vec![]));
        assert_eq!(output.graph.get("node_modules/lodash/index.js"), Some(&vec![]));
        assert_eq!(output.skipped, vec!["virtual:env"]);
    }

    #[test]
    fn test_build_excludes_packages_when_disabled() {
        let temp = TempDir::new().expect("temp dir");
        let root = temp.path();
        write(root, "src/index.js", "const _ = require('lodash');\n");
        write(root, "node_modules/lodash/index.js", "");

        let mut opts = options(root);
        opts.include_external_packages = false;
        let output = StaticImportScanner
            .build(&EntryPoints::Single("src/index.js".to_string()), &opts)
            .expect("graph builds");

        assert_eq!(output.graph.len(), 1);
        assert_eq!(output.graph.get("src/index.js"), Some(&vec![]));
        assert!(output.skipped.is_empty());
    }

    #[test]
    fn test_build_handles_cycles() {
        let temp = TempDir::new().expect("temp dir");
        let root = temp.path();
        write(root, "a.js", "import './b';\n");
        write(root, "b.js", "import './a';\n");

        let output = StaticImportScanner
            .build(&EntryPoints::Many(vec![root.join("a.js")]), &options(root))
            .expect("graph builds");

        assert_eq!(output.graph.get("a.js"), Some(&vec!["b.js".to_string()]));
        assert_eq!(output.graph.get("b.js"), Some(&vec!["a.js".to_string()]));
    }

    #[test]
    fn test_build_missing_entry_fails() {
        let temp = TempDir::new().expect("temp dir");
        let result = StaticImportScanner.build(
            &EntryPoints::Single("src/missing.ts".to_string()),
            &options(temp.path()),
        );
        assert!(matches!(
            result,
            Err(crate::error::DiluError::EntryNotFound { .. })
        ));
    }
}
