//! Cross-platform path utilities for dilu
//!
//! Module identifiers are plain strings with forward slashes, relative to the
//! project root when the file lives inside it. These helpers convert between
//! identifiers and filesystem paths.

use std::path::{Component, Path, PathBuf};

/// Directory name of external package storage
pub const PACKAGE_STORE_DIR: &str = "node_modules";

/// Convert a path to a string with forward slashes
///
/// # Examples
///
/// ```ignore
/// let path = Path::new("C:\\Users\\file.txt");
/// assert_eq!(to_forward_slashes(path), "C:/Users/file.txt");
/// ```
pub fn to_forward_slashes(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Lexically normalize a path, removing `.` components and folding `..`
///
/// Does not touch the filesystem, so symlinks are not resolved. Leading `..`
/// components of a relative path are kept.
pub fn normalize(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }

    if parts.is_empty() {
        return PathBuf::from(".");
    }
    parts.iter().collect()
}

/// Identifier for a file: relative to `base_dir` when inside it, absolute otherwise
pub fn to_identifier(path: &Path, base_dir: &Path) -> String {
    let path = normalize(path);
    match path.strip_prefix(base_dir) {
        Ok(relative) => to_forward_slashes(relative),
        Err(_) => to_forward_slashes(&path),
    }
}

/// Relative location of an identifier inside the project, if it stays inside
///
/// Returns `None` for absolute identifiers and for identifiers that climb out
/// of the project with `..`.
pub fn project_relative(identifier: &str) -> Option<PathBuf> {
    let path = normalize(Path::new(identifier));
    let escapes = path.components().any(|c| {
        matches!(
            c,
            Component::ParentDir | Component::RootDir | Component::Prefix(_)
        )
    });
    if escapes { None } else { Some(path) }
}

/// Whether an identifier points into external package storage
pub fn is_package_path(identifier: &str) -> bool {
    identifier.contains(&format!("{PACKAGE_STORE_DIR}/"))
}

/// Package path of an identifier inside external package storage
///
/// Takes the text between the first `node_modules/` and the next one, so
/// `node_modules/antd/dist/reset.css` yields `antd/dist/reset.css`.
pub fn package_subpath(identifier: &str) -> Option<&str> {
    let marker = format!("{PACKAGE_STORE_DIR}/");
    let mut pieces = identifier.split(marker.as_str());
    pieces.next()?;
    pieces.next()
}
