//! Top-level render document: what the editor hands the engine.

use serde::{Deserialize, Serialize};

use crate::error::SpecError;
use crate::graph::Graph;
use crate::settings::SkinSettings;

/// Which path produces the primary channel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderMode {
    /// Fixed pattern library driven by `settings.pattern.style`.
    #[default]
    Pattern,
    /// User-authored node graph.
    Graph,
}

/// A complete render request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SkinDocument {
    /// Output edge length in pixels; every channel is `resolution x resolution`.
    pub resolution: u32,
    #[serde(default)]
    pub mode: RenderMode,
    #[serde(default)]
    pub settings: SkinSettings,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graph: Option<Graph>,
}

impl Default for SkinDocument {
    fn default() -> Self {
        Self {
            resolution: 512,
            mode: RenderMode::Pattern,
            settings: SkinSettings::default(),
            graph: None,
        }
    }
}

impl SkinDocument {
    /// Parse a document from JSON.
    pub fn from_json(json: &str) -> Result<Self, SpecError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, SpecError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::NodeKind;
    use crate::settings::PatternStyle;

    #[test]
    fn minimal_document_parses_with_defaults() {
        let doc = SkinDocument::from_json(r#"{ "resolution": 128 }"#).unwrap();
        assert_eq!(doc.resolution, 128);
        assert_eq!(doc.mode, RenderMode::Pattern);
        assert_eq!(doc.settings, SkinSettings::default());
        assert!(doc.graph.is_none());
    }

    #[test]
    fn unknown_root_fields_are_rejected() {
        assert!(SkinDocument::from_json(r#"{ "resolution": 8, "layers": [] }"#).is_err());
    }

    #[test]
    fn graph_document_parses() {
        let doc = SkinDocument::from_json(
            r#"{
                "resolution": 64,
                "mode": "graph",
                "settings": { "pattern": { "style": "hexagon" } },
                "graph": {
                    "nodes": [
                        { "id": 0, "kind": "noise-perlin", "params": { "scale": 4.0 } },
                        { "id": 1, "kind": "output-pattern" }
                    ],
                    "connections": [
                        { "from_node": 0, "from_port": "color", "to_node": 1, "to_port": "color" }
                    ]
                }
            }"#,
        )
        .unwrap();
        assert_eq!(doc.mode, RenderMode::Graph);
        assert_eq!(doc.settings.pattern.style, PatternStyle::Hexagon);
        let graph = doc.graph.unwrap();
        assert_eq!(graph.nodes[1].kind, NodeKind::OutputPattern);
        assert_eq!(graph.connections.len(), 1);
    }

    #[test]
    fn pretty_json_parses_back() {
        let doc = SkinDocument::default();
        let json = doc.to_json_pretty().unwrap();
        assert_eq!(SkinDocument::from_json(&json).unwrap(), doc);
    }
}
