//! Apply command implementation
//!
//! Exports graph noise scale and seed into the document's pattern settings.

use anyhow::Result;
use colored::Colorize;
use skinforge_backend_texture::apply_graph_to_settings;
use skinforge_spec::{Graph, SkinDocument};
use std::path::Path;
use std::process::ExitCode;

use crate::input::{load_document, write_document};

/// Run the apply command. Without `--out` the input file is rewritten.
pub fn run(input: &str, out: Option<&str>) -> Result<ExitCode> {
    let loaded = load_document(Path::new(input))?;
    let (doc, lines) = apply(loaded.doc);
    let target = out.unwrap_or(input);
    write_document(&doc, Path::new(target))?;

    if lines.is_empty() {
        println!("{} graph has no noise node; settings unchanged", "!".yellow());
    }
    for line in &lines {
        println!("  {} {}", "+".green(), line);
    }
    println!("{} {}", "Wrote".green().bold(), target);
    Ok(ExitCode::SUCCESS)
}

/// Apply the export and describe each transferred field.
pub fn apply(mut doc: SkinDocument) -> (SkinDocument, Vec<String>) {
    let graph = doc.graph.clone().unwrap_or_else(Graph::new);
    let outcome = apply_graph_to_settings(&graph, &doc.settings.pattern);
    let lines = outcome
        .transferred
        .iter()
        .map(|t| format!("pattern.{} = {} (from {})", t.field, t.value, t.source))
        .collect();
    doc.settings.pattern = outcome.settings;
    (doc, lines)
}
