//! Local wiring rules of a ripple-carry adder.
//!
//! A correct adder built from AND/OR/XOR gates has a very regular shape:
//!
//! ```text
//! bit 0:   x00 XOR y00 -> z00          x00 AND y00 -> c00
//! bit i:   xi  XOR yi  -> si           xi  AND yi  -> gi
//!          si  XOR c   -> zi           si  AND c   -> pi
//!          gi  OR  pi  -> ci           (last carry drives the top sum bit)
//! ```
//!
//! Each rule below checks one gate against that shape. They are local
//! heuristics: a swap between two gates of the same role (two input XORs
//! of different bits, say) leaves every gate locally well-formed and is not
//! reported.

use std::fmt;

use crate::circuit::{Circuit, NodeId};
use crate::dsl::GateOp;
use crate::error::{Result, WireError};

use super::AdderLayout;

/// Which wiring rule a gate broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rule {
    /// Sum bits come from XOR gates, except the top bit which comes from an OR.
    SumBitDriver,
    /// An XOR either reads addend bits or drives a sum bit.
    XorPlacement,
    /// An XOR never feeds an OR.
    XorIntoOr,
    /// An AND only feeds ORs, unless it reads addend bit 0.
    AndSink,
    /// An OR never feeds another OR.
    OrIntoOr,
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::SumBitDriver => "sum bit driven by the wrong gate kind",
            Self::XorPlacement => "XOR neither reads addend bits nor drives a sum bit",
            Self::XorIntoOr => "XOR feeds an OR",
            Self::AndSink => "AND feeds something other than an OR",
            Self::OrIntoOr => "OR feeds another OR",
        };
        f.write_str(text)
    }
}

/// A gate whose wiring breaks a [`Rule`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Defect {
    /// Offending gate
    pub node: NodeId,
    /// Its output wire name
    pub name: String,
    /// The rule it breaks
    pub rule: Rule,
}

impl Defect {
    fn new(circuit: &Circuit, node: NodeId, rule: Rule) -> Self {
        Self {
            node,
            name: circuit.node_name(node).to_string(),
            rule,
        }
    }
}

fn feeds(circuit: &Circuit, id: NodeId, op: GateOp) -> bool {
    circuit
        .node(id)
        .consumers
        .iter()
        .any(|&c| circuit.node(c).op() == Some(op))
}

/// Every sum bit below the top one must be an XOR; the top one an OR.
pub fn check_sum_bits(
    circuit: &Circuit,
    layout: &AdderLayout,
    defects: &mut Vec<Defect>,
) -> Result<()> {
    let bus = circuit.bus(&layout.sum)?;
    let Some(&(top, _)) = bus.last() else {
        return Err(WireError::InvalidTopology {
            message: format!("no wires on the sum bus '{}'", layout.sum),
        });
    };

    let mut expected = 0;
    for (index, id) in bus {
        if index > expected {
            return Err(WireError::MissingBusBit {
                name: layout.sum_wire(expected),
            });
        }
        expected = index + 1;

        let node = circuit.node(id);
        let op = node.op().ok_or_else(|| WireError::InvalidTopology {
            message: format!("sum wire '{}' is a constant input, not a gate output", node.name),
        })?;
        let wanted = if index == top { GateOp::Or } else { GateOp::Xor };
        if op != wanted {
            defects.push(Defect::new(circuit, id, Rule::SumBitDriver));
        }
    }
    Ok(())
}

/// XOR gates sit either at the addend inputs or at the sum outputs, and never feed an OR.
pub fn check_xor_gates(circuit: &Circuit, layout: &AdderLayout, defects: &mut Vec<Defect>) {
    for (id, node, gate) in circuit.gates() {
        if gate.op != GateOp::Xor {
            continue;
        }
        let reads_addend = gate
            .inputs
            .iter()
            .any(|&input| layout.is_addend(circuit.node_name(input)));
        let drives_sum = layout.sum_index(&node.name).is_some();
        if !reads_addend && !drives_sum {
            defects.push(Defect::new(circuit, id, Rule::XorPlacement));
        }
        if feeds(circuit, id, GateOp::Or) {
            defects.push(Defect::new(circuit, id, Rule::XorIntoOr));
        }
    }
}

/// AND gates only feed ORs, except the bit-0 carry.
pub fn check_and_gates(circuit: &Circuit, layout: &AdderLayout, defects: &mut Vec<Defect>) {
    for (id, node, gate) in circuit.gates() {
        if gate.op != GateOp::And {
            continue;
        }
        // The bit-0 carry feeds bit 1's XOR and AND directly.
        let first_carry = gate
            .inputs
            .iter()
            .any(|&input| layout.addend_index(circuit.node_name(input)) == Some(0));
        if first_carry {
            continue;
        }
        let stray = node
            .consumers
            .iter()
            .any(|&c| circuit.node(c).op() != Some(GateOp::Or));
        if stray {
            defects.push(Defect::new(circuit, id, Rule::AndSink));
        }
    }
}

/// OR gates never feed other ORs.
pub fn check_or_gates(circuit: &Circuit, defects: &mut Vec<Defect>) {
    for (id, _, gate) in circuit.gates() {
        if gate.op == GateOp::Or && feeds(circuit, id, GateOp::Or) {
            defects.push(Defect::new(circuit, id, Rule::OrIntoOr));
        }
    }
}
