//! Presets command implementation

use anyhow::Result;
use colored::Colorize;
use skinforge_spec::Preset;
use std::process::ExitCode;

use super::json_output::PresetInfo;
use super::print_json;

/// List the built-in presets.
pub fn run(json_output: bool) -> Result<ExitCode> {
    let presets = list();
    if json_output {
        print_json(&presets)?;
    } else {
        println!("{}", "Built-in presets:".cyan().bold());
        for preset in &presets {
            println!("  {:<14} {}", preset.name.bold(), preset.description.dimmed());
        }
    }
    Ok(ExitCode::SUCCESS)
}

pub fn list() -> Vec<PresetInfo> {
    Preset::builtin()
        .into_iter()
        .map(|p| PresetInfo {
            name: p.name,
            description: p.description,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_every_builtin() {
        let names: Vec<String> = list().into_iter().map(|p| p.name).collect();
        assert_eq!(names.len(), Preset::builtin().len());
        assert!(names.iter().any(|n| n == "neon-circuit"));
    }
}
