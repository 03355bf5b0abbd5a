//! Export from graph mode back to fixed-pattern settings.
//!
//! Only the first noise node (in graph order) contributes: its `seed`
//! becomes the pattern seed and its `scale` becomes the element size.
//! Everything else in the graph is dropped.

use skinforge_spec::{Graph, Node, NodeId, PatternSettings};

use crate::graph::param_value;

/// Pattern-settings bounds the exported scale is clamped into.
const ELEMENT_SIZE_RANGE: (f64, f64) = (2.0, 200.0);

/// One settings field written by [`apply_graph_to_settings`].
#[derive(Debug, Clone, PartialEq)]
pub struct TransferredField {
    /// Field name on [`PatternSettings`].
    pub field: &'static str,
    /// Value read from the graph.
    pub source: f64,
    /// Value written to the settings.
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApplyOutcome {
    pub settings: PatternSettings,
    pub transferred: Vec<TransferredField>,
    /// The noise node the values came from.
    pub source_node: Option<NodeId>,
}

/// Copy noise `seed` and `scale` from `graph` into a copy of `settings`.
pub fn apply_graph_to_settings(graph: &Graph, settings: &PatternSettings) -> ApplyOutcome {
    let mut out = settings.clone();
    let mut transferred = Vec::new();

    let Some(node) = graph.nodes.iter().find(|n| n.kind.is_noise()) else {
        tracing::debug!("no noise node to export");
        return ApplyOutcome {
            settings: out,
            transferred,
            source_node: None,
        };
    };

    if let Some(seed) = numeric_param(node, "seed") {
        out.seed = seed.clamp(0.0, u32::MAX as f64) as u32;
        transferred.push(TransferredField {
            field: "seed",
            source: seed,
            value: out.seed as f64,
        });
    }
    if let Some(scale) = numeric_param(node, "scale") {
        let (min, max) = ELEMENT_SIZE_RANGE;
        out.element_size = scale.clamp(min, max);
        transferred.push(TransferredField {
            field: "element_size",
            source: scale,
            value: out.element_size,
        });
    }

    tracing::debug!(node = %node.id, kind = %node.kind, fields = transferred.len(), "exported graph noise");
    ApplyOutcome {
        settings: out,
        transferred,
        source_node: Some(node.id),
    }
}

fn numeric_param(node: &Node, id: &str) -> Option<f64> {
    let def = node.definition().param(id)?;
    param_value(node, def).as_f64()
}

#[cfg(test)]
mod tests {
    use super::*;
    use skinforge_spec::{NodeKind, ParamValue};

    #[test]
    fn first_noise_node_wins() {
        let mut g = Graph::new();
        g.add_node(NodeKind::PatternChecker);
        let first = g.add_node(NodeKind::NoiseFbm);
        g.set_param(first, "seed", ParamValue::Int(77)).unwrap();
        g.set_param(first, "scale", ParamValue::Float(30.0)).unwrap();
        let second = g.add_node(NodeKind::NoisePerlin);
        g.set_param(second, "seed", ParamValue::Int(5)).unwrap();

        let outcome = apply_graph_to_settings(&g, &PatternSettings::default());
        assert_eq!(outcome.source_node, Some(first));
        assert_eq!(outcome.settings.seed, 77);
        assert_eq!(outcome.settings.element_size, 30.0);
        let fields: Vec<_> = outcome.transferred.iter().map(|t| t.field).collect();
        assert_eq!(fields, ["seed", "element_size"]);
    }

    #[test]
    fn small_scale_is_clamped_to_element_size_minimum() {
        let mut g = Graph::new();
        let n = g.add_node(NodeKind::NoisePerlin);
        g.set_param(n, "scale", ParamValue::Float(0.5)).unwrap();

        let outcome = apply_graph_to_settings(&g, &PatternSettings::default());
        assert_eq!(outcome.settings.element_size, 2.0);
        assert_eq!(outcome.transferred[1].source, 0.5);
    }

    #[test]
    fn other_settings_are_untouched() {
        let base = PatternSettings {
            density: 90.0,
            ..Default::default()
        };
        let mut g = Graph::new();
        g.add_node(NodeKind::NoiseWorley);
        let outcome = apply_graph_to_settings(&g, &base);
        assert_eq!(outcome.settings.density, 90.0);
        assert_eq!(outcome.settings.style, base.style);
    }

    #[test]
    fn graph_without_noise_changes_nothing() {
        let mut g = Graph::new();
        g.add_node(NodeKind::OutputPattern);
        let base = PatternSettings::default();
        let outcome = apply_graph_to_settings(&g, &base);
        assert_eq!(outcome.settings, base);
        assert!(outcome.transferred.is_empty());
        assert_eq!(outcome.source_node, None);
    }
}
