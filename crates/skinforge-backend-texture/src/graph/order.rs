//! Evaluation order via Kahn's algorithm.

use std::collections::{HashMap, VecDeque};

use skinforge_spec::{Connection, Graph, NodeId};

/// Nodes in dependency order plus the ones that could not be ordered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvalOrder {
    /// Indices into `graph.nodes`, each after all of its sources.
    pub order: Vec<usize>,
    /// Nodes on a cycle, fed by a missing node, or downstream of either.
    pub excluded: Vec<NodeId>,
}

impl EvalOrder {
    pub fn is_excluded(&self, id: NodeId) -> bool {
        self.excluded.contains(&id)
    }
}

/// The edges that actually feed each declared input: at most one per
/// input, the last one listed when a document carries duplicates. Edges
/// into undeclared ports are dropped.
pub fn effective_edges(graph: &Graph) -> Vec<&Connection> {
    let mut edges = Vec::new();
    for node in &graph.nodes {
        for port in node.definition().inputs {
            if let Some(edge) = graph.incoming(node.id, port.id) {
                edges.push(edge);
            }
        }
    }
    edges
}

/// Order `graph` topologically.
///
/// Zero in-degree nodes seed the queue in graph order. Anything never
/// released (cycles and their dependents, or nodes whose source does not
/// exist) is reported as excluded instead of evaluated.
pub fn topological_order(graph: &Graph) -> EvalOrder {
    let index: HashMap<NodeId, usize> = graph
        .nodes
        .iter()
        .enumerate()
        .map(|(i, n)| (n.id, i))
        .collect();

    let mut in_degree = vec![0usize; graph.nodes.len()];
    let mut outgoing: Vec<Vec<usize>> = vec![Vec::new(); graph.nodes.len()];
    for edge in effective_edges(graph) {
        let Some(&to) = index.get(&edge.to_node) else {
            continue;
        };
        in_degree[to] += 1;
        // A missing source never releases its target.
        if let Some(&from) = index.get(&edge.from_node) {
            outgoing[from].push(to);
        }
    }

    let mut queue: VecDeque<usize> = (0..graph.nodes.len())
        .filter(|&i| in_degree[i] == 0)
        .collect();
    let mut order = Vec::with_capacity(graph.nodes.len());
    while let Some(i) = queue.pop_front() {
        order.push(i);
        for &to in &outgoing[i] {
            in_degree[to] -= 1;
            if in_degree[to] == 0 {
                queue.push_back(to);
            }
        }
    }

    let mut placed = vec![false; graph.nodes.len()];
    for &i in &order {
        placed[i] = true;
    }
    let excluded = graph
        .nodes
        .iter()
        .zip(&placed)
        .filter(|(_, placed)| !**placed)
        .map(|(n, _)| n.id)
        .collect();

    EvalOrder { order, excluded }
}
