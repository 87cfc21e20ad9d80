//! Circuit graph structure.

use std::collections::{HashMap, VecDeque};

use log::debug;

use super::types::{bus_index, Gate, Node, NodeId, NodeKind};
use crate::dsl::{CircuitAst, GateDef};
use crate::error::{Result, WireError};

/// A gate network, owning every wire in a single arena.
///
/// Gates only ever reference nodes that were added before them, so the
/// graph is acyclic and arena order is a topological order.
#[derive(Debug, Clone, Default)]
pub struct Circuit {
    /// All nodes, indexed by [`NodeId`]
    nodes: Vec<Node>,

    /// Mapping from wire names to node IDs
    node_map: HashMap<String, NodeId>,
}

impl Circuit {
    /// Build a circuit from a parsed AST.
    ///
    /// Gate lines may reference wires defined later in the document. They
    /// are retried in passes until every gate has both operands available;
    /// a pass that resolves nothing means the remaining gates reference
    /// unknown wires (or each other in a loop).
    pub fn from_ast(ast: CircuitAst) -> Result<Self> {
        check_unique_names(&ast)?;

        let mut circuit = Circuit {
            nodes: Vec::with_capacity(ast.inputs.len() + ast.gates.len()),
            node_map: HashMap::with_capacity(ast.inputs.len() + ast.gates.len()),
        };

        for input in ast.inputs {
            circuit.push_node(input.name, NodeKind::Input { value: input.value });
        }

        let mut pending: VecDeque<GateDef> = ast.gates.into();
        let mut pass = 0usize;

        while !pending.is_empty() {
            pass += 1;
            let before = pending.len();

            for _ in 0..before {
                let Some(def) = pending.pop_front() else {
                    break;
                };
                match (circuit.find(&def.lhs), circuit.find(&def.rhs)) {
                    (Some(a), Some(b)) => circuit.push_gate(def, a, b),
                    _ => pending.push_back(def),
                }
            }

            debug!(
                "resolution pass {}: {} gate(s) resolved, {} pending",
                pass,
                before - pending.len(),
                pending.len()
            );

            if pending.len() == before {
                let names: Vec<String> = pending.iter().map(|def| def.output.clone()).collect();
                return Err(WireError::UnresolvedGates {
                    count: names.len(),
                    names,
                });
            }
        }

        Ok(circuit)
    }

    fn push_node(&mut self, name: String, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.node_map.insert(name.clone(), id);
        self.nodes.push(Node {
            name,
            kind,
            consumers: Vec::new(),
        });
        id
    }

    fn push_gate(&mut self, def: GateDef, a: NodeId, b: NodeId) {
        let id = self.push_node(
            def.output,
            NodeKind::Gate(Gate {
                op: def.op,
                inputs: [a, b],
            }),
        );
        // New ids are always the largest so far, which keeps consumer lists sorted.
        self.nodes[a.0].consumers.push(id);
        if b != a {
            self.nodes[b.0].consumers.push(id);
        }
    }

    /// Number of nodes (inputs and gates).
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the circuit has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Get a node by ID.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// Get the name of a node.
    pub fn node_name(&self, id: NodeId) -> &str {
        &self.nodes[id.0].name
    }

    /// Find a node ID by name.
    pub fn find(&self, name: &str) -> Option<NodeId> {
        self.node_map.get(name).copied()
    }

    /// Find a node ID by name, failing if it does not exist.
    pub fn lookup(&self, name: &str) -> Result<NodeId> {
        self.find(name).ok_or_else(|| WireError::NodeNotFound {
            node: name.to_string(),
        })
    }

    /// Iterate over all nodes in arena order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> + '_ {
        self.nodes.iter().enumerate().map(|(i, node)| (NodeId(i), node))
    }

    /// Iterate over gate nodes only.
    pub fn gates(&self) -> impl Iterator<Item = (NodeId, &Node, &Gate)> + '_ {
        self.iter()
            .filter_map(|(id, node)| node.gate().map(|gate| (id, node, gate)))
    }

    /// Number of gate nodes.
    pub fn gate_count(&self) -> usize {
        self.gates().count()
    }

    /// Wires on the bus `prefix`, as `(bit index, node)` pairs sorted by index.
    ///
    /// Fails if two wires spell the same index differently (`z1` and `z01`).
    pub fn bus(&self, prefix: &str) -> Result<Vec<(usize, NodeId)>> {
        let mut bits: Vec<(usize, NodeId)> = self
            .iter()
            .filter_map(|(id, node)| bus_index(&node.name, prefix).map(|index| (index, id)))
            .collect();
        bits.sort_unstable();

        if let Some(pair) = bits.windows(2).find(|pair| pair[0].0 == pair[1].0) {
            return Err(WireError::DuplicateBusBit {
                index: pair[0].0,
                first: self.node_name(pair[0].1).to_string(),
                second: self.node_name(pair[1].1).to_string(),
            });
        }
        Ok(bits)
    }

    /// One past the highest bit index present on the bus `prefix`.
    pub fn bus_width(&self, prefix: &str) -> Result<usize> {
        Ok(self
            .bus(prefix)?
            .last()
            .map_or(0, |(index, _)| index.saturating_add(1)))
    }

    /// Render a node the way it appears in the description.
    pub fn describe(&self, id: NodeId) -> String {
        let node = self.node(id);
        match &node.kind {
            NodeKind::Input { value } => format!("{}: {}", node.name, u8::from(*value)),
            NodeKind::Gate(gate) => format!(
                "{} {} {} -> {}",
                self.node_name(gate.inputs[0]),
                gate.op,
                self.node_name(gate.inputs[1]),
                node.name
            ),
        }
    }
}

fn check_unique_names(ast: &CircuitAst) -> Result<()> {
    let mut seen = HashMap::with_capacity(ast.inputs.len() + ast.gates.len());
    let defined = ast
        .inputs
        .iter()
        .map(|input| (&input.name, input.line))
        .chain(ast.gates.iter().map(|gate| (&gate.output, gate.line)));

    for (name, line) in defined {
        if seen.insert(name.as_str(), line).is_some() {
            return Err(WireError::duplicate(name.clone(), line));
        }
    }
    Ok(())
}
