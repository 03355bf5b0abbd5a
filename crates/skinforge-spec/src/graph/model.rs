//! Graph instance: nodes, connections, and editing operations.
//!
//! Nodes and connections live in flat vectors and refer to each other only
//! by [`NodeId`], so any topology (including cycles) is representable.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::catalog::{NodeDefinition, NodeKind, ParamValue};
use crate::error::GraphError;

/// Stable node identifier, unique within one graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub u32);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A node instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub kind: NodeKind,
    /// Current parameter values keyed by parameter id.
    #[serde(default)]
    pub params: BTreeMap<String, ParamValue>,
}

impl Node {
    /// Create a node with every parameter at its catalog default.
    pub fn new(id: NodeId, kind: NodeKind) -> Self {
        let params = kind
            .definition()
            .params
            .iter()
            .map(|p| (p.id.to_string(), p.default))
            .collect();
        Self { id, kind, params }
    }

    pub fn definition(&self) -> &'static NodeDefinition {
        self.kind.definition()
    }

    /// Current value of a parameter, falling back to the catalog default.
    pub fn param(&self, id: &str) -> Option<ParamValue> {
        self.params
            .get(id)
            .copied()
            .or_else(|| self.definition().param(id).map(|p| p.default))
    }
}

/// A directed edge from an output port to an input port.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Connection {
    pub from_node: NodeId,
    pub from_port: String,
    pub to_node: NodeId,
    pub to_port: String,
}

impl Connection {
    pub fn new(
        from_node: NodeId,
        from_port: impl Into<String>,
        to_node: NodeId,
        to_port: impl Into<String>,
    ) -> Self {
        Self {
            from_node,
            from_port: from_port.into(),
            to_node,
            to_port: to_port.into(),
        }
    }

    /// Whether this edge feeds the given input.
    pub fn targets(&self, node: NodeId, port: &str) -> bool {
        self.to_node == node && self.to_port == port
    }
}

/// A node graph.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub connections: Vec<Connection>,
    /// Explicit output node, if the editor designated one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<NodeId>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.iter_mut().find(|n| n.id == id)
    }

    /// One past the highest id, or the lowest free id once `u32::MAX` is
    /// taken. `None` only when every id is in use.
    fn next_id(&self) -> Option<NodeId> {
        let Some(max) = self.nodes.iter().map(|n| n.id.0).max() else {
            return Some(NodeId(0));
        };
        if let Some(next) = max.checked_add(1) {
            return Some(NodeId(next));
        }

        let mut used: Vec<u32> = self.nodes.iter().map(|n| n.id.0).collect();
        used.sort_unstable();
        used.dedup();
        let mut candidate = 0u32;
        for id in used {
            if id != candidate {
                return Some(NodeId(candidate));
            }
            candidate = candidate.checked_add(1)?;
        }
        Some(NodeId(candidate))
    }

    /// Add a node with default parameters and return its id.
    ///
    /// # Panics
    ///
    /// Panics if all `u32` ids are in use, the same way `Vec::push` panics
    /// on capacity overflow. Use [`Graph::try_add_node`] to handle that case.
    pub fn add_node(&mut self, kind: NodeKind) -> NodeId {
        match self.try_add_node(kind) {
            Ok(id) => id,
            Err(err) => panic!("{}", err),
        }
    }

    /// Add a node with default parameters, failing when no id is free.
    pub fn try_add_node(&mut self, kind: NodeKind) -> Result<NodeId, GraphError> {
        let id = self.next_id().ok_or(GraphError::IdSpaceExhausted)?;
        self.nodes.push(Node::new(id, kind));
        Ok(id)
    }

    /// Remove a node together with every connection touching it.
    ///
    /// Returns the removed node, or `None` if it did not exist.
    pub fn remove_node(&mut self, id: NodeId) -> Option<Node> {
        let index = self.nodes.iter().position(|n| n.id == id)?;
        let node = self.nodes.remove(index);
        self.connections
            .retain(|c| c.from_node != id && c.to_node != id);
        if self.output == Some(id) {
            self.output = None;
        }
        Some(node)
    }

    /// Connect an output port to an input port.
    ///
    /// An input holds at most one edge: an existing edge into the same
    /// input is removed and returned. Cycles are not rejected here; the
    /// evaluator handles them.
    pub fn connect(
        &mut self,
        from_node: NodeId,
        from_port: &str,
        to_node: NodeId,
        to_port: &str,
    ) -> Result<Option<Connection>, GraphError> {
        let from = self.node(from_node).ok_or(GraphError::UnknownNode(from_node))?;
        if from.definition().output(from_port).is_none() {
            return Err(GraphError::UnknownOutputPort {
                node: from_node,
                kind: from.kind.as_str(),
                port: from_port.to_string(),
            });
        }
        let to = self.node(to_node).ok_or(GraphError::UnknownNode(to_node))?;
        if to.definition().input(to_port).is_none() {
            return Err(GraphError::UnknownInputPort {
                node: to_node,
                kind: to.kind.as_str(),
                port: to_port.to_string(),
            });
        }

        let replaced = self.disconnect(to_node, to_port);
        self.connections
            .push(Connection::new(from_node, from_port, to_node, to_port));
        Ok(replaced)
    }

    /// Remove the edge feeding an input, returning it if there was one.
    pub fn disconnect(&mut self, to_node: NodeId, to_port: &str) -> Option<Connection> {
        let index = self
            .connections
            .iter()
            .position(|c| c.targets(to_node, to_port))?;
        Some(self.connections.remove(index))
    }

    /// The edge currently feeding an input.
    ///
    /// If a deserialized graph carries several edges into one input, the
    /// last one wins, matching what `connect` would have left behind.
    pub fn incoming(&self, to_node: NodeId, to_port: &str) -> Option<&Connection> {
        self.connections
            .iter()
            .rev()
            .find(|c| c.targets(to_node, to_port))
    }

    /// Set a parameter, type-checked and clamped against the catalog.
    pub fn set_param(
        &mut self,
        node: NodeId,
        param: &str,
        value: ParamValue,
    ) -> Result<ParamValue, GraphError> {
        let target = self.node_mut(node).ok_or(GraphError::UnknownNode(node))?;
        let kind = target.kind;
        let def = kind
            .definition()
            .param(param)
            .ok_or_else(|| GraphError::UnknownParam {
                node,
                kind: kind.as_str(),
                param: param.to_string(),
            })?;
        let coerced = def.coerce(value).ok_or_else(|| GraphError::ParamType {
            param: param.to_string(),
            expected: def.kind_name(),
            actual: value.type_name(),
        })?;
        target.params.insert(param.to_string(), coerced);
        Ok(coerced)
    }

    /// Designate the output node.
    pub fn set_output(&mut self, id: NodeId) -> Result<(), GraphError> {
        if self.node(id).is_none() {
            return Err(GraphError::UnknownNode(id));
        }
        self.output = Some(id);
        Ok(())
    }

    /// The node whose color becomes the rendered texel.
    ///
    /// The explicit output if set and present, else the first `output-*`
    /// node, else the first node. `None` for an empty graph.
    pub fn output_node(&self) -> Option<&Node> {
        self.output
            .and_then(|id| self.node(id))
            .or_else(|| self.nodes.iter().find(|n| n.kind.is_output()))
            .or_else(|| self.nodes.first())
    }
}
