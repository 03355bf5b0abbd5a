//! Catalog command implementation
//!
//! Prints every node kind with its ports and parameters.

use anyhow::Result;
use colored::Colorize;
use skinforge_spec::{NodeDefinition, NodeKind, ParamValue};
use std::process::ExitCode;

use super::print_json;

pub fn run(json_output: bool) -> Result<ExitCode> {
    let definitions = definitions();
    if json_output {
        print_json(&definitions)?;
        return Ok(ExitCode::SUCCESS);
    }

    let mut category = None;
    for def in &definitions {
        if category != Some(def.category) {
            category = Some(def.category);
            println!("{}", format!("{:?}", def.category).cyan().bold());
        }
        let ports = |ports: &[skinforge_spec::PortDef]| {
            ports.iter().map(|p| p.id).collect::<Vec<_>>().join(", ")
        };
        println!(
            "  {:<26} ({}) -> ({})",
            def.kind.as_str().bold(),
            ports(def.inputs),
            ports(def.outputs)
        );
        for param in def.params {
            println!(
                "      {} = {}",
                param.id.dimmed(),
                format_value(param.default)
            );
        }
    }
    Ok(ExitCode::SUCCESS)
}

/// Every catalog entry in [`NodeKind::ALL`] order.
pub fn definitions() -> Vec<&'static NodeDefinition> {
    NodeKind::ALL.iter().map(|k| k.definition()).collect()
}

fn format_value(value: ParamValue) -> String {
    match value {
        ParamValue::Int(v) => v.to_string(),
        ParamValue::Float(v) => format!("{:.3}", v),
        ParamValue::Color([r, g, b]) => format!("({:.2}, {:.2}, {:.2})", r, g, b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_serializes_with_kind_ids() {
        let json = serde_json::to_value(definitions()).unwrap();
        let kinds: Vec<&str> = json
            .as_array()
            .unwrap()
            .iter()
            .map(|d| d["kind"].as_str().unwrap())
            .collect();
        assert!(kinds.contains(&"noise-perlin"));
        assert!(kinds.contains(&"output-pattern"));
        assert_eq!(kinds.len(), NodeKind::ALL.len());
    }

    #[test]
    fn values_format_compactly() {
        assert_eq!(format_value(ParamValue::Int(4)), "4");
        assert_eq!(format_value(ParamValue::Float(0.5)), "0.500");
    }
}
