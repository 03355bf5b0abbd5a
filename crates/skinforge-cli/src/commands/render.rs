//! Render command implementation
//!
//! Renders all seven maps of a document to PNG files.

use anyhow::{Context, Result};
use colored::Colorize;
use skinforge_backend_texture::render_document;
use skinforge_spec::{BackendError, Preset, RenderMode, SkinDocument};
use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;

use super::json_output::{error_codes, JsonError, RenderOutput, RenderedMap};
use super::print_json;
use crate::input::load_document;

/// Options for the render command.
#[derive(Debug, Clone, Default)]
pub struct RenderArgs<'a> {
    pub input: &'a str,
    pub out_dir: &'a str,
    pub stem: Option<&'a str>,
    pub resolution: Option<u32>,
    pub preset: Option<&'a str>,
    pub json: bool,
}

/// Run the render command
///
/// # Returns
/// Exit code: 0 on success, 1 if the render failed
pub fn run(args: &RenderArgs<'_>) -> Result<ExitCode> {
    let output = execute(args)?;
    if args.json {
        print_json(&output)?;
    } else {
        print_human(args.input, &output);
    }
    Ok(if output.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

/// Load, render and save. Render failures land in the report; only
/// document and preset problems are returned as errors.
pub fn execute(args: &RenderArgs<'_>) -> Result<RenderOutput> {
    let start = Instant::now();
    let loaded = load_document(Path::new(args.input))?;
    let mut doc = loaded.doc;
    if let Some(resolution) = args.resolution {
        doc.resolution = resolution;
    }
    if let Some(name) = args.preset {
        doc = with_preset(doc, name)?;
    }
    let (_, adjusted) = doc.settings.sanitize_report();
    let stem = args.stem.map(str::to_string).unwrap_or_else(|| default_stem(args.input));

    let result = render_document(&doc).and_then(|set| {
        let maps = set.save_pngs(Path::new(args.out_dir), &stem)?;
        Ok((set.fingerprint(), maps))
    });

    let mut output = RenderOutput {
        success: result.is_ok(),
        source_hash: loaded.source_hash,
        resolution: doc.resolution,
        mode: mode_name(doc.mode).to_string(),
        preset: args.preset.map(str::to_string),
        fingerprint: None,
        maps: Vec::new(),
        adjusted,
        errors: Vec::new(),
        duration_ms: 0,
    };
    match result {
        Ok((fingerprint, maps)) => {
            output.fingerprint = Some(fingerprint);
            output.maps = maps
                .into_iter()
                .map(|m| RenderedMap {
                    channel: m.channel.as_str().to_string(),
                    path: m.path.display().to_string(),
                    hash: m.hash,
                })
                .collect();
        }
        Err(err) => {
            tracing::warn!(code = err.code(), "render failed: {}", err);
            output.errors.push(JsonError::new(
                error_codes::RENDER_ERROR,
                format!("[{}] {}", err.code(), err.message()),
            ));
        }
    }
    output.duration_ms = start.elapsed().as_millis() as u64;
    Ok(output)
}

fn print_human(input: &str, output: &RenderOutput) {
    println!("{} {}", "Rendering:".cyan().bold(), input);
    println!(
        "{} {} at {}x{}",
        "Mode:".dimmed(),
        output.mode,
        output.resolution,
        output.resolution
    );
    if let Some(preset) = &output.preset {
        println!("{} {}", "Preset:".dimmed(), preset);
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
    for map in &output.maps {
        println!(
            "  {} {:<13} {} ({})",
            "+".green(),
            map.channel,
            map.path,
            &map.hash[..16]
        );
    }
    for err in &output.errors {
        println!("  {} {}: {}", "x".red(), err.code, err.message);
    }
    if output.success {
        println!(
            "{} {} maps in {}ms",
            "Rendered".green().bold(),
            output.maps.len(),
            output.duration_ms
        );
    } else {
        println!("{}", "Render failed".red().bold());
    }
}

/// Apply a built-in preset over the document's settings.
pub(crate) fn with_preset(mut doc: SkinDocument, name: &str) -> Result<SkinDocument> {
    let preset = Preset::find_builtin(name).ok_or_else(|| {
        anyhow::anyhow!("[{}] unknown preset: {}", error_codes::UNKNOWN_PRESET, name)
    })?;
    doc.settings = preset
        .apply(&doc.settings)
        .with_context(|| format!("[{}] preset {} did not apply", error_codes::PRESET_APPLY, name))?;
    Ok(doc)
}

pub(crate) fn mode_name(mode: RenderMode) -> &'static str {
    match mode {
        RenderMode::Pattern => "pattern",
        RenderMode::Graph => "graph",
    }
}

/// File stem of the input path, or `skin`.
fn default_stem(input: &str) -> String {
    Path::new(input)
        .file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())
        .unwrap_or("skin")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_doc(dir: &Path, json: &str) -> String {
        let path = dir.join("armor.json");
        std::fs::write(&path, json).unwrap();
        path.display().to_string()
    }

    #[test]
    fn renders_seven_maps_named_after_the_input() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_doc(dir.path(), r#"{ "resolution": 16 }"#);
        let out_dir = dir.path().join("maps");
        let args = RenderArgs {
            input: &input,
            out_dir: out_dir.to_str().unwrap(),
            json: true,
            ..Default::default()
        };
        let output = execute(&args).unwrap();
        assert!(output.success);
        assert_eq!(output.maps.len(), 7);
        assert!(output.fingerprint.is_some());
        for channel in ["pattern", "mask", "normal", "roughness", "pearlescence", "ao", "height"] {
            assert!(out_dir.join(format!("armor_{}.png", channel)).exists());
        }
    }

    #[test]
    fn oversize_resolution_fails_with_exit_code() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_doc(dir.path(), r#"{ "resolution": 16 }"#);
        let out_dir = dir.path().join("maps");
        let args = RenderArgs {
            input: &input,
            out_dir: out_dir.to_str().unwrap(),
            resolution: Some(1 << 20),
            json: true,
            ..Default::default()
        };
        let output = execute(&args).unwrap();
        assert!(!output.success);
        assert_eq!(output.errors[0].code, error_codes::RENDER_ERROR);
        assert!(output.errors[0].message.contains("RENDER_001"));
        assert!(!out_dir.exists());
    }

    #[test]
    fn preset_overlays_settings() {
        let doc = with_preset(SkinDocument::default(), "carbon-fiber").unwrap();
        assert_eq!(doc.settings.roughness.base, 20.0);
        assert!(with_preset(SkinDocument::default(), "plaid").is_err());
    }

    #[test]
    fn default_stem_falls_back() {
        assert_eq!(default_stem("dir/hex.json"), "hex");
        assert_eq!(default_stem(""), "skin");
    }
}
