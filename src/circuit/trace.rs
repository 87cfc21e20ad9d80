//! Structural queries over the gate graph.
//!
//! These walk the operand and consumer links without evaluating anything,
//! and are mostly useful for explaining why a gate looks miswired.

use super::types::{bus_index, NodeId, NodeKind};
use super::Circuit;

/// Constant inputs that ultimately feed `id`, sorted and de-duplicated.
///
/// An input node is its own single source.
pub fn source_inputs(circuit: &Circuit, id: NodeId) -> Vec<NodeId> {
    let mut visited = vec![false; circuit.len()];
    let mut stack = vec![id];
    let mut sources = Vec::new();

    while let Some(current) = stack.pop() {
        if std::mem::replace(&mut visited[current.0], true) {
            continue;
        }
        match &circuit.node(current).kind {
            NodeKind::Input { .. } => sources.push(current),
            NodeKind::Gate(gate) => stack.extend(gate.inputs),
        }
    }

    sources.sort_unstable();
    sources
}

/// Bus wires on `prefix` that `id` ultimately drives.
///
/// The walk stops at the first bus wire on each path.
pub fn sink_outputs(circuit: &Circuit, id: NodeId, prefix: &str) -> Vec<NodeId> {
    let mut visited = vec![false; circuit.len()];
    let mut stack: Vec<NodeId> = circuit.node(id).consumers.clone();
    let mut sinks = Vec::new();

    while let Some(current) = stack.pop() {
        if std::mem::replace(&mut visited[current.0], true) {
            continue;
        }
        let node = circuit.node(current);
        if bus_index(&node.name, prefix).is_some() {
            sinks.push(current);
        } else {
            stack.extend(node.consumers.iter().copied());
        }
    }

    sinks.sort_unstable();
    sinks
}

/// Gates that read both `a` and `b`.
pub fn common_consumers(circuit: &Circuit, a: NodeId, b: NodeId) -> Vec<NodeId> {
    let left = &circuit.node(a).consumers;
    let right = &circuit.node(b).consumers;
    // Consumer lists are sorted.
    left.iter()
        .filter(|id| right.binary_search(*id).is_ok())
        .copied()
        .collect()
}
