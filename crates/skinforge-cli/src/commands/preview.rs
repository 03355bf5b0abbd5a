//! Preview command implementation
//!
//! Renders only the graph output color of a document to one PNG.

use anyhow::{Context, Result};
use colored::Colorize;
use skinforge_backend_texture::png::{write_surface_to_vec_with_hash, PngConfig};
use skinforge_backend_texture::{compile_preview, DEFAULT_PREVIEW_SIZE};
use skinforge_spec::Graph;
use std::path::Path;
use std::process::ExitCode;

use crate::input::load_document;

/// Run the preview command
///
/// A document without a graph previews the empty graph (neutral gray).
pub fn run(input: &str, out: &str, size: Option<u32>) -> Result<ExitCode> {
    let loaded = load_document(Path::new(input))?;
    let graph = loaded.doc.graph.unwrap_or_else(Graph::new);
    let size = size.unwrap_or(DEFAULT_PREVIEW_SIZE);

    let surface = compile_preview(&graph, size)
        .with_context(|| format!("Failed to render preview of {}", input))?;
    let out_path = Path::new(out);
    if let Some(parent) = out_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    let (data, hash) = write_surface_to_vec_with_hash(&surface, &PngConfig::default())?;
    std::fs::write(out_path, data).with_context(|| format!("Failed to write preview: {}", out))?;

    println!(
        "{} {} ({}x{}, {})",
        "Preview:".green().bold(),
        out,
        surface.size(),
        surface.size(),
        &hash[..16]
    );
    Ok(ExitCode::SUCCESS)
}
