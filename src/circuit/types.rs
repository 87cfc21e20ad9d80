//! Core types for circuit representation.

use std::fmt;

use crate::dsl::GateOp;

/// Index of a node in the circuit arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "N{}", self.0)
    }
}

/// A two-input gate. Operands are handles into the owning circuit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gate {
    /// Boolean operation
    pub op: GateOp,
    /// Operand handles, in source order
    pub inputs: [NodeId; 2],
}

/// What drives a node's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// Constant supplied by the description
    Input { value: bool },
    /// Output of a gate
    Gate(Gate),
}

/// A named wire in the circuit.
#[derive(Debug, Clone)]
pub struct Node {
    /// Unique wire name
    pub name: String,
    /// Driver of this wire
    pub kind: NodeKind,
    /// Gates that read this wire, sorted and de-duplicated
    pub consumers: Vec<NodeId>,
}

impl Node {
    /// The gate driving this node, if any.
    pub fn gate(&self) -> Option<&Gate> {
        match &self.kind {
            NodeKind::Gate(gate) => Some(gate),
            NodeKind::Input { .. } => None,
        }
    }

    /// The gate operation driving this node, if any.
    pub fn op(&self) -> Option<GateOp> {
        self.gate().map(|g| g.op)
    }

    /// Check if this node is a constant input.
    pub fn is_input(&self) -> bool {
        matches!(self.kind, NodeKind::Input { .. })
    }
}

/// Bit index of a bus wire such as `z07`.
///
/// A bus wire is `prefix` followed by one or more ASCII digits. Returns
/// `None` for any other name. Indices too large for `usize` saturate to
/// `usize::MAX` so the wire stays on the bus.
pub fn bus_index(name: &str, prefix: &str) -> Option<usize> {
    let digits = name.strip_prefix(prefix)?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(digits.parse().unwrap_or(usize::MAX))
}

/// Name of bit `index` on the bus `prefix`, zero-padded to two digits.
pub fn bus_wire(prefix: &str, index: usize) -> String {
    format!("{}{:02}", prefix, index)
}
