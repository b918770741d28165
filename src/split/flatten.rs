//! Closure flattening
//!
//! Turns the dependency graph into the working set of every module involved:
//! each key followed by its dependencies, deduplicated in first-seen order.
//! External package identifiers are kept; the classifier removes them.

use indexmap::IndexSet;

use crate::graph::ModuleDependencyGraph;

pub fn flatten(graph: &ModuleDependencyGraph) -> Vec<String> {
    let mut seen: IndexSet<&str> = IndexSet::new();
    for (module, deps) in graph {
        seen.insert(module.as_str());
        seen.extend(deps.iter().map(String::as_str));
    }
    seen.into_iter().map(str::to_string).collect()
}
