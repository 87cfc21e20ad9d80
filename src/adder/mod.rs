//! Ripple-carry adder wiring audit.
//!
//! Treats a circuit as an adder of two addend buses into a sum bus and
//! reports the gates whose local wiring does not match that shape. This is
//! how swapped output wires are located: each swap usually leaves both
//! gates in a position their kind cannot occupy in a correct adder.
//!
//! The audit is a single pass of local rules (see [`rules`]). It is not an
//! equivalence check and does not guarantee that every miswiring is found.

mod layout;
pub mod rules;

use std::collections::BTreeSet;

use log::debug;

pub use layout::AdderLayout;
pub use rules::{Defect, Rule};

use crate::circuit::Circuit;
use crate::error::Result;

/// Run every wiring rule and return each violation found.
///
/// A gate that breaks several rules appears once per rule.
pub fn audit_adder(circuit: &Circuit, layout: &AdderLayout) -> Result<Vec<Defect>> {
    let mut defects = Vec::new();
    rules::check_sum_bits(circuit, layout, &mut defects)?;
    rules::check_xor_gates(circuit, layout, &mut defects);
    rules::check_and_gates(circuit, layout, &mut defects);
    rules::check_or_gates(circuit, &mut defects);

    for defect in &defects {
        debug!("{}: {}", circuit.describe(defect.node), defect.rule);
    }
    Ok(defects)
}

/// Output wire names of every gate that breaks a wiring rule.
pub fn find_structural_defects(
    circuit: &Circuit,
    layout: &AdderLayout,
) -> Result<BTreeSet<String>> {
    Ok(audit_adder(circuit, layout)?
        .into_iter()
        .map(|defect| defect.name)
        .collect())
}

/// Render defect names sorted and comma-separated.
pub fn format_answer(names: &BTreeSet<String>) -> String {
    names.iter().map(String::as_str).collect::<Vec<_>>().join(",")
}
