//! Dependency classification
//!
//! Partitions everything the graph builder reported into three buckets:
//! project files to copy, packages recorded from the manifest, and specifiers
//! nobody can account for.
//!
//! A specifier is matched against the manifest in two stages:
//!
//! ```text
//! "lodash"              exact      -> lodash
//! "antd/dist/reset.css" prefixes   -> antd, antd/dist, antd/dist/reset.css
//!                                     first hit wins
//! "virtual:env"         no match   -> skipped
//! ```
//!
//! The shortest matching prefix wins, so with both `a` and `a/b` declared,
//! `a/b/c` is recorded as `a`.

use indexmap::IndexMap;
use serde::Serialize;

use crate::config::{DependencyKind, PackageManifest};
use crate::path_utils;

/// Packages the extracted project needs, copied out of the source manifest
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestDelta {
    pub dependencies: IndexMap<String, String>,
    pub dev_dependencies: IndexMap<String, String>,
}

impl ManifestDelta {
    fn record(&mut self, kind: DependencyKind, name: &str, range: &str) {
        let bucket = match kind {
            DependencyKind::Runtime => &mut self.dependencies,
            DependencyKind::Development => &mut self.dev_dependencies,
        };
        bucket.insert(name.to_string(), range.to_string());
    }

    pub fn is_empty(&self) -> bool {
        self.dependencies.is_empty() && self.dev_dependencies.is_empty()
    }

    pub fn len(&self) -> usize {
        self.dependencies.len() + self.dev_dependencies.len()
    }
}

/// Outcome of classifying a flattened closure
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    /// Project-local files to materialize
    pub file_list: Vec<String>,
    pub delta: ManifestDelta,
    /// Specifiers matching neither a file nor a manifest entry
    pub skipped: Vec<String>,
}

/// A manifest entry a specifier belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackageMatch<'a> {
    pub name: &'a str,
    pub kind: DependencyKind,
    pub range: &'a str,
}

/// Find the manifest package a specifier refers to
///
/// Exact name first, then path prefixes from the first segment outwards.
pub fn match_package<'a>(
    specifier: &'a str,
    manifest: &'a PackageManifest,
) -> Option<PackageMatch<'a>> {
    let lookup = |name: &'a str| {
        manifest
            .lookup(name)
            .map(|(kind, range)| PackageMatch { name, kind, range })
    };

    if let Some(found) = lookup(specifier) {
        return Some(found);
    }

    specifier
        .match_indices('/')
        .map(|(index, _)| &specifier[..index])
        .filter(|prefix| !prefix.is_empty())
        .find_map(lookup)
}

/// Classify the builder's skipped list and the flattened file list
///
/// Skipped specifiers are classified first, then every file list entry that
/// lives in external package storage. Plain project paths stay in the file
/// list untouched.
pub fn classify(
    file_list: &[String],
    skipped: &[String],
    manifest: &PackageManifest,
) -> Classification {
    let mut result = Classification::default();

    let attribute = |specifier: &str, result: &mut Classification| {
        match match_package(specifier, manifest) {
            Some(found) => {
                tracing::debug!(%specifier, package = found.name, "matched manifest entry");
                result.delta.record(found.kind, found.name, found.range);
            }
            None => result.skipped.push(specifier.to_string()),
        }
    };

    for specifier in skipped {
        attribute(specifier, &mut result);
    }

    for identifier in file_list {
        if path_utils::is_package_path(identifier) {
            let package_path = path_utils::package_subpath(identifier).unwrap_or(identifier);
            attribute(package_path, &mut result);
        } else {
            result.file_list.push(identifier.clone());
        }
    }

    result
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    fn manifest(deps: &[(&str, &str)], dev: &[(&str, &str)]) -> PackageManifest {
        let table = |entries: &[(&str, &str)]| {
            entries
                .iter()
                .map(|(name, range)| ((*name).to_string(), (*range).to_string()))
                .collect()
        };
        PackageManifest {
            dependencies: table(deps),
            dev_dependencies: table(dev),
        }
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_exact_match() {
        let m = manifest(&[("lodash", "^4.17.21")], &[]);
        let found = match_package("lodash", &m).expect("match");
        assert_eq!(found.name, "lodash");
        assert_eq!(found.range, "^4.17.21");
        assert_eq!(found.kind, DependencyKind::Runtime);
    }

    #[test]
    fn test_prefix_match_sub_path() {
        let m = manifest(&[("lodash", "^4.0.0")], &[]);
        assert_eq!(
            match_package("lodash/fp/map", &m).map(|f| f.name),
            Some("lodash")
        );
    }

    #[test]
    fn test_scoped_package_prefix() {
        let m = manifest(&[], &[("@vue/test-utils", "^2.4.0")]);
        let found = match_package("@vue/test-utils/dist/index.js", &m).expect("match");
        assert_eq!(found.name, "@vue/test-utils");
        assert_eq!(found.kind, DependencyKind::Development);
    }

    #[test]
    fn test_shortest_prefix_wins() {
        let both = manifest(&[("a", "1.0.0"), ("a/b", "2.0.0")], &[]);
        assert_eq!(match_package("a/b/c", &both).map(|f| f.name), Some("a"));

        let nested_only = manifest(&[("a/b", "2.0.0")], &[]);
        assert_eq!(
            match_package("a/b/c", &nested_only).map(|f| f.name),
            Some("a/b")
        );
    }

    #[test]
    fn test_exact_match_beats_prefix() {
        let m = manifest(&[("a", "1.0.0"), ("a/b", "2.0.0")], &[]);
        assert_eq!(match_package("a/b", &m).map(|f| f.name), Some("a/b"));
    }

    #[test]
    fn test_no_match() {
        let m = manifest(&[("lodash", "^4.0.0")], &[]);
        assert!(match_package("virtual:env", &m).is_none());
        assert!(match_package("lodashx/fp", &m).is_none());
        assert!(match_package("/lodash/x", &m).is_none());
    }

    #[test]
    fn test_classify_partitions_everything() {
        let m = manifest(
            &[("lodash", "^4.17.21"), ("antd", "^5.0.0")],
            &[("vitest", "^1.0.0")],
        );
        let files = strings(&[
            "src/index.ts",
            "node_modules/lodash/lodash.js",
            "src/utils.ts",
            "node_modules/vitest/dist/index.js",
            "node_modules/left-pad/index.js",
        ]);
        let skipped = strings(&["antd/dist/reset.css", "virtual:env"]);

        let result = classify(&files, &skipped, &m);

        assert_eq!(result.file_list, vec!["src/index.ts", "src/utils.ts"]);
        assert_eq!(
            result.delta.dependencies,
            IndexMap::from([
                ("antd".to_string(), "^5.0.0".to_string()),
                ("lodash".to_string(), "^4.17.21".to_string()),
            ])
        );
        assert_eq!(
            result.delta.dev_dependencies.get("vitest").map(String::as_str),
            Some("^1.0.0")
        );
        assert_eq!(result.skipped, vec!["virtual:env", "left-pad/index.js"]);
    }

    #[test]
    fn test_classify_every_input_lands_exactly_once() {
        let m = manifest(&[("react", "^18.0.0")], &[("jest", "^29.0.0")]);
        let files = strings(&[
            "src/app.tsx",
            "node_modules/react/index.js",
            "node_modules/react/jsx-runtime.js",
            "node_modules/jest/build/index.js",
            "node_modules/unknown/index.js",
        ]);
        let skipped = strings(&["fs", "react/jsx-dev-runtime"]);

        let result = classify(&files, &skipped, &m);

        let local = files.iter().filter(|f| !f.contains("node_modules/")).count();
        let attributed = files.len() + skipped.len() - local - result.skipped.len();
        assert_eq!(result.file_list.len(), local);
        assert_eq!(result.skipped, vec!["fs", "unknown/index.js"]);
        assert_eq!(attributed, 4);
        assert_eq!(result.delta.len(), 2);
        assert!(
            result
                .file_list
                .iter()
                .all(|f| !path_utils::is_package_path(f))
        );
    }

    #[test]
    fn test_classify_delta_is_subset_of_manifest() {
        let m = manifest(&[("lodash", "^4.17.21")], &[("lodash", "^3.0.0")]);
        let result = classify(
            &strings(&["node_modules/lodash/fp.js"]),
            &strings(&["lodash/fp/map"]),
            &m,
        );

        for (name, range) in &result.delta.dependencies {
            assert_eq!(m.dependencies.get(name), Some(range));
        }
        assert!(result.delta.dev_dependencies.is_empty());
    }

    #[test]
    fn test_classify_is_order_independent() {
        let m = manifest(&[("a", "1"), ("b", "2")], &[]);
        let forward = strings(&["node_modules/a/x.js", "node_modules/b/y.js", "src/c.js"]);
        let mut backward = forward.clone();
        backward.reverse();

        let first = classify(&forward, &[], &m);
        let second = classify(&backward, &[], &m);

        let sorted = |map: &IndexMap<String, String>| {
            let mut entries: Vec<_> = map.iter().collect();
            entries.sort();
            entries
                .into_iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect::<Vec<_>>()
        };
        assert_eq!(
            sorted(&first.delta.dependencies),
            sorted(&second.delta.dependencies)
        );
        assert_eq!(first.file_list, second.file_list);
    }
}
