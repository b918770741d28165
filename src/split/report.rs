//! Final split summary

use std::fmt::Write as _;

use console::Style;

use super::SplitOutcome;

/// Render the summary shown after a split
pub fn render(outcome: &SplitOutcome) -> String {
    let mut out = String::new();
    let bold = Style::new().bold();
    let dim = Style::new().dim();

    let files = &outcome.classification.file_list;
    let _ = writeln!(out, "{} ({}):", bold.apply_to("Files"), files.len());
    for file in files {
        let _ = writeln!(out, "  {}", dim.apply_to(file));
    }

    let delta = &outcome.classification.delta;
    let _ = writeln!(out);
    if delta.is_empty() {
        let _ = writeln!(out, "{} none", bold.apply_to("npm dependencies:"));
    } else {
        let _ = writeln!(out, "{}", bold.apply_to("npm dependencies:"));
        let json = serde_json::to_string_pretty(delta).unwrap_or_default();
        for line in json.lines() {
            let _ = writeln!(out, "  {line}");
        }
    }

    let skipped = &outcome.classification.skipped;
    if !skipped.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "{} ({}):",
            Style::new().bold().yellow().apply_to("Unresolved"),
            skipped.len()
        );
        for specifier in skipped {
            let _ = writeln!(out, "  {specifier}");
        }
        let _ = writeln!(
            out,
            "  {}",
            dim.apply_to("Add an alias to dilu-cli.config.json or a package.json entry to include these")
        );
    }

    let failures = &outcome.materialized.failures;
    if !failures.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "{} ({}):",
            Style::new().bold().red().apply_to("Copy failures"),
            failures.len()
        );
        for failure in failures {
            let _ = writeln!(out, "  {}: {}", failure.path, failure.reason);
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{} {}",
        bold.apply_to("Project:"),
        Style::new().cyan().apply_to(outcome.output_dir.display())
    );
    if let Some(diagram) = &outcome.diagram {
        let _ = writeln!(out, "{} {}", bold.apply_to("Graph:"), diagram.display());
    }
    if let Some(digest) = &outcome.digest {
        let _ = writeln!(out, "{} {}", bold.apply_to("Digest:"), dim.apply_to(digest));
    }

    let _ = writeln!(out);
    let summary = format!(
        "Split {} files ({} unchanged) and {} packages",
        outcome.materialized.copied,
        outcome.materialized.unchanged,
        delta.len()
    );
    if outcome.materialized.is_complete() {
        let _ = writeln!(out, "{}", Style::new().green().bold().apply_to(summary));
    } else {
        let _ = writeln!(out, "{}", Style::new().yellow().bold().apply_to(summary));
    }

    out
}

/// Print the summary to stdout
pub fn print(outcome: &SplitOutcome) {
    print!("{}", render(outcome));
}
