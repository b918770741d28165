//! Dependency diagram rendering
//!
//! The graph is written as Graphviz DOT and piped through `dot -Tsvg`.
//! Without Graphviz on `PATH` rendering fails, which callers ignore.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

use super::ModuleDependencyGraph;
use crate::error::{self, Result};

/// Graphviz DOT source for a dependency graph
pub fn to_dot(graph: &ModuleDependencyGraph) -> String {
    let mut dot = String::from("digraph dependencies {\n");
    dot.push_str("  rankdir=LR;\n");
    dot.push_str("  node [shape=box, fontname=\"Arial\", fontsize=10];\n");

    for (module, deps) in graph {
        dot.push_str(&format!("  {};\n", quote(module)));
        for dep in deps {
            dot.push_str(&format!("  {} -> {};\n", quote(module), quote(dep)));
        }
    }

    dot.push_str("}\n");
    dot
}

/// Render the graph to an SVG file with Graphviz
pub fn render_svg(graph: &ModuleDependencyGraph, target: &Path) -> Result<()> {
    let mut child = Command::new("dot")
        .arg("-Tsvg")
        .arg("-o")
        .arg(target)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| error::graph::diagram_failed(format!("cannot run graphviz: {e}")))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(to_dot(graph).as_bytes())
            .map_err(|e| error::graph::diagram_failed(e.to_string()))?;
    }

    let output = child
        .wait_with_output()
        .map_err(|e| error::graph::diagram_failed(e.to_string()))?;
    if !output.status.success() {
        return Err(error::graph::diagram_failed(
            String::from_utf8_lossy(&output.stderr).trim().to_string(),
        ));
    }

    Ok(())
}

fn quote(id: &str) -> String {
    format!("\"{}\"", id.replace('\\', "\\\\").replace('"', "\\\""))
}
