//! Validate command implementation
//!
//! Parses a document, reports clamped settings and graph diagnostics.

use anyhow::Result;
use colored::Colorize;
use skinforge_backend_texture::Program;
use skinforge_spec::{canonical_hash, RenderBudget, RenderMode, SkinDocument};
use std::path::Path;
use std::process::ExitCode;

use super::json_output::{error_codes, warning_codes, JsonError, JsonWarning, ValidateOutput};
use super::print_json;
use crate::input::load_document;

/// Run the validate command
///
/// # Returns
/// Exit code: 0 if the document loads, 1 if it does not. Clamped fields
/// and graph diagnostics are warnings.
pub fn run(input: &str, json_output: bool) -> Result<ExitCode> {
    let output = match load_document(Path::new(input)) {
        Ok(loaded) => {
            let mut output = check(&loaded.doc);
            output.source_hash = Some(loaded.source_hash);
            output
        }
        Err(err) => ValidateOutput {
            success: false,
            source_hash: None,
            settings_hash: None,
            adjusted: Vec::new(),
            errors: vec![JsonError::new(error_codes::DOCUMENT_LOAD, format!("{:#}", err))],
            warnings: Vec::new(),
        },
    };

    if json_output {
        print_json(&output)?;
    } else {
        print_human(input, &output);
    }
    Ok(if output.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

/// Validate a parsed document.
pub fn check(doc: &SkinDocument) -> ValidateOutput {
    let (clean, adjusted) = doc.settings.sanitize_report();
    let settings_hash = canonical_hash(&clean).ok();
    let mut warnings = Vec::new();

    match (&doc.mode, &doc.graph) {
        (RenderMode::Graph, None) => warnings.push(JsonWarning::new(
            warning_codes::MISSING_GRAPH,
            "graph mode without a graph renders neutral gray",
        )),
        (_, Some(graph)) => {
            let budget = RenderBudget::default();
            if graph.nodes.len() > budget.max_graph_nodes {
                warnings.push(JsonWarning::new(
                    warning_codes::GRAPH_TOO_LARGE,
                    format!(
                        "graph has {} nodes, max is {}",
                        graph.nodes.len(),
                        budget.max_graph_nodes
                    ),
                ));
            }
            if !graph.nodes.is_empty() && !graph.nodes.iter().any(|n| n.kind.is_output()) {
                warnings.push(JsonWarning::new(
                    warning_codes::NO_OUTPUT_NODE,
                    "no output-pattern node; the output falls back to another node",
                ));
            }
            let program = Program::compile(graph);
            for id in program.excluded() {
                warnings.push(
                    JsonWarning::new(
                        warning_codes::EXCLUDED_NODE,
                        format!("node {} is in a cycle or has a dangling input", id),
                    )
                    .with_node(id.0),
                );
            }
        }
        (RenderMode::Pattern, None) => {}
    }

    ValidateOutput {
        success: true,
        source_hash: None,
        settings_hash,
        adjusted,
        errors: Vec::new(),
        warnings,
    }
}

fn print_human(input: &str, output: &ValidateOutput) {
    println!("{} {}", "Validating:".cyan().bold(), input);
    if let Some(hash) = &output.source_hash {
        println!("{} {}", "Source:".dimmed(), &hash[..16]);
    }
    for err in &output.errors {
        println!("  {} {}: {}", "x".red(), err.code, err.message);
    }
    for field in &output.adjusted {
        println!(
            "  {} {} clamped {} -> {}",
            "!".yellow(),
            field.field,
            field.original,
            field.adjusted
        );
    }
    for warning in &output.warnings {
        println!("  {} {}: {}", "!".yellow(), warning.code, warning.message);
    }
    if output.success {
        println!("{}", "Document is valid".green().bold());
    } else {
        println!("{}", "Document is invalid".red().bold());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skinforge_spec::{Graph, NodeKind};

    #[test]
    fn clean_document_has_no_warnings() {
        let output = check(&SkinDocument::default());
        assert!(output.success);
        assert!(output.warnings.is_empty());
        assert!(output.adjusted.is_empty());
        assert!(output.settings_hash.is_some());
    }

    #[test]
    fn clamped_fields_are_reported() {
        let mut doc = SkinDocument::default();
        doc.settings.pattern.line_width = 0.0;
        let output = check(&doc);
        assert_eq!(output.adjusted.len(), 1);
        assert_eq!(output.adjusted[0].field, "pattern.line_width");
    }

    #[test]
    fn cycles_and_missing_output_are_warned() {
        let mut g = Graph::new();
        let x = g.add_node(NodeKind::MathAdd);
        let y = g.add_node(NodeKind::MathAdd);
        g.connect(x, "value", y, "a").unwrap();
        g.connect(y, "value", x, "a").unwrap();
        let doc = SkinDocument {
            mode: RenderMode::Graph,
            graph: Some(g),
            ..Default::default()
        };
        let output = check(&doc);
        let codes: Vec<&str> = output.warnings.iter().map(|w| w.code.as_str()).collect();
        assert_eq!(
            codes,
            [
                warning_codes::NO_OUTPUT_NODE,
                warning_codes::EXCLUDED_NODE,
                warning_codes::EXCLUDED_NODE
            ]
        );
        assert_eq!(output.warnings[1].node, Some(x.0));
    }

    #[test]
    fn graph_mode_without_graph_is_warned() {
        let doc = SkinDocument {
            mode: RenderMode::Graph,
            ..Default::default()
        };
        assert_eq!(check(&doc).warnings[0].code, warning_codes::MISSING_GRAPH);
    }
}
