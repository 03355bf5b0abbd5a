//! Graph compilation and per-sample evaluation.
//!
//! [`Program::compile`] flattens a graph into steps in topological order.
//! Every step owns a contiguous run of value slots, one per declared output
//! port, and every input is resolved once into an [`InputSource`]. A sample
//! then walks the steps exactly once, reading earlier slots and writing its
//! own; no node is visited twice and nothing recurses.

use std::collections::HashMap;

use skinforge_spec::{Graph, Node, NodeId, NodeKind, PortDef, PortType};

use super::operations::{param_value, Op};
use super::order::topological_order;
use super::value::NodeValue;
use crate::color::Color;

/// Upper bound on declared inputs for any catalog kind.
pub const MAX_INPUTS: usize = 3;

/// Where a step input reads from.
#[derive(Debug, Clone, PartialEq)]
pub enum InputSource {
    /// An output slot of an earlier step.
    Connected { step: usize, port: usize },
    /// The edge's source cannot be read; resolves to neutral gray.
    Excluded,
    /// No edge; the node parameter sharing the port id.
    Constant(NodeValue),
    /// No edge and no parameter.
    Unset(Fallback),
}

/// Value of an input with neither an edge nor a parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum Fallback {
    /// The sample coordinate.
    SampleUv,
    Value(NodeValue),
}

/// One compiled node.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub id: NodeId,
    pub kind: NodeKind,
    pub op: Op,
    pub inputs: Vec<InputSource>,
    /// First value slot owned by this step.
    pub base: usize,
    pub outputs: usize,
}

/// A compiled graph, ready to sample.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    steps: Vec<Step>,
    index: HashMap<NodeId, usize>,
    /// Slot of the designated output color.
    output: Option<usize>,
    output_node: Option<NodeId>,
    slots: usize,
    excluded: Vec<NodeId>,
}

impl Program {
    /// Compile `graph`. Never fails: malformed parts degrade to neutral.
    pub fn compile(graph: &Graph) -> Self {
        let order = topological_order(graph);
        if !order.excluded.is_empty() {
            tracing::warn!(
                excluded = ?order.excluded,
                "graph nodes excluded from evaluation (cycle or missing source)"
            );
        }

        let mut steps: Vec<Step> = Vec::with_capacity(order.order.len());
        let mut index = HashMap::with_capacity(order.order.len());
        let mut slots = 0;
        for &i in &order.order {
            let node = &graph.nodes[i];
            let def = node.definition();
            let inputs = def
                .inputs
                .iter()
                .map(|port| resolve_input(graph, node, port, &index, &steps))
                .collect();
            index.insert(node.id, steps.len());
            steps.push(Step {
                id: node.id,
                kind: node.kind,
                op: Op::from_node(node),
                inputs,
                base: slots,
                outputs: def.outputs.len(),
            });
            slots += def.outputs.len();
        }

        let output_node = graph.output_node().map(|n| n.id);
        let output = output_node.and_then(|id| index.get(&id)).map(|&s| steps[s].base);
        match (output_node, output) {
            (None, _) => tracing::warn!("graph has no nodes; rendering neutral gray"),
            (Some(id), None) => {
                tracing::warn!(node = %id, "output node is excluded; rendering neutral gray")
            }
            _ => {}
        }

        Self {
            steps,
            index,
            output,
            output_node,
            slots,
            excluded: order.excluded,
        }
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Nodes that will never be evaluated.
    pub fn excluded(&self) -> &[NodeId] {
        &self.excluded
    }

    /// The node whose color is rendered, if the graph has any nodes.
    pub fn output_node(&self) -> Option<NodeId> {
        self.output_node
    }

    /// Fresh value storage for [`Program::run`].
    pub fn scratch(&self) -> Vec<NodeValue> {
        vec![NodeValue::NEUTRAL; self.slots]
    }

    /// Evaluate every step at `uv` into `values` (from [`Program::scratch`]).
    pub fn run(&self, uv: (f64, f64), values: &mut [NodeValue]) {
        for step in &self.steps {
            let mut args = [NodeValue::NEUTRAL; MAX_INPUTS];
            for (arg, source) in args.iter_mut().zip(&step.inputs) {
                *arg = match source {
                    InputSource::Connected { step, port } => values[self.steps[*step].base + port],
                    InputSource::Excluded => NodeValue::NEUTRAL,
                    InputSource::Constant(v) => *v,
                    InputSource::Unset(Fallback::SampleUv) => NodeValue::Vector2(uv.0, uv.1),
                    InputSource::Unset(Fallback::Value(v)) => *v,
                };
            }
            let n = step.inputs.len().min(MAX_INPUTS);
            let out = &mut values[step.base..step.base + step.outputs];
            step.op.eval(&args[..n], uv, out);
        }
    }

    /// The rendered color at `uv`: the output node's first output.
    pub fn sample(&self, uv: (f64, f64), values: &mut [NodeValue]) -> Color {
        match self.output {
            Some(slot) => {
                self.run(uv, values);
                values[slot].as_color()
            }
            None => Color::NEUTRAL,
        }
    }

    /// Evaluate at `uv` and keep every node's outputs for inspection.
    pub fn evaluate(&self, uv: (f64, f64)) -> Evaluation<'_> {
        let mut values = self.scratch();
        self.run(uv, &mut values);
        Evaluation {
            program: self,
            values,
        }
    }
}

/// Per-node results of one sample.
#[derive(Debug, Clone)]
pub struct Evaluation<'p> {
    program: &'p Program,
    values: Vec<NodeValue>,
}

impl Evaluation<'_> {
    /// Value of `node`'s output `port`. Excluded or unknown nodes and
    /// unknown ports read as neutral gray.
    pub fn get(&self, node: NodeId, port: &str) -> NodeValue {
        self.program
            .index
            .get(&node)
            .map(|&s| &self.program.steps[s])
            .and_then(|step| {
                let p = step.kind.definition().output_index(port)?;
                Some(self.values[step.base + p])
            })
            .unwrap_or(NodeValue::NEUTRAL)
    }

    /// All outputs of `node` keyed by port id; empty when excluded.
    pub fn outputs(&self, node: NodeId) -> Vec<(&'static str, NodeValue)> {
        let Some(&s) = self.program.index.get(&node) else {
            return Vec::new();
        };
        let step = &self.program.steps[s];
        step.kind
            .definition()
            .outputs
            .iter()
            .enumerate()
            .map(|(i, port)| (port.id, self.values[step.base + i]))
            .collect()
    }

    /// The rendered color for this sample.
    pub fn color(&self) -> Color {
        self.program
            .output
            .map_or(Color::NEUTRAL, |slot| self.values[slot].as_color())
    }
}

fn resolve_input(
    graph: &Graph,
    node: &Node,
    port: &PortDef,
    index: &HashMap<NodeId, usize>,
    steps: &[Step],
) -> InputSource {
    if let Some(edge) = graph.incoming(node.id, port.id) {
        return index
            .get(&edge.from_node)
            .and_then(|&s| {
                let p = steps[s].kind.definition().output_index(&edge.from_port)?;
                Some(InputSource::Connected { step: s, port: p })
            })
            .unwrap_or(InputSource::Excluded);
    }
    if let Some(def) = node.definition().param(port.id) {
        return InputSource::Constant(param_value(node, def).into());
    }
    InputSource::Unset(match (node.kind, port.ty) {
        (_, PortType::Vector2) => Fallback::SampleUv,
        (NodeKind::OutputPattern, PortType::Float) => Fallback::Value(NodeValue::Float(1.0)),
        _ => Fallback::Value(NodeValue::NEUTRAL),
    })
}
