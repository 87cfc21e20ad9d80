//! # Crossed Wires
//!
//! Evaluation and wiring audit of two-input boolean gate networks.
//!
//! This library provides:
//! - A parser for the `wire: bit` / `a OP b -> out` circuit description
//! - An arena-backed gate graph tolerant of forward references
//! - Memoized evaluation and assembly of output buses into integers
//! - A structural audit that locates miswired gates in a ripple-carry adder
//!
//! ## Architecture
//!
//! - [`dsl`] - Lexer and parser for circuit descriptions
//! - [`circuit`] - Gate graph representation and structural queries
//! - [`solver`] - Memoized evaluation
//! - [`adder`] - Ripple-carry adder wiring rules
//!
//! ## Usage
//!
//! ```bash
//! crossed-wires input.txt
//! ```
//!
//! prints the integer on the `z` bus, then the sorted, comma-separated
//! names of gates whose wiring does not fit an adder.
//!
//! ```
//! use crossed_wires::{dsl, AdderLayout, Circuit, Evaluator};
//!
//! let text = "x00: 1\nx01: 0\ny00: 0\ny01: 1\n\nx00 XOR y00 -> z00\nx01 XOR y01 -> z01\n";
//! let ast = dsl::parse(text)?;
//! let circuit = Circuit::from_ast(ast)?;
//!
//! let mut evaluator = Evaluator::new(&circuit);
//! evaluator.solve_all()?;
//! assert_eq!(evaluator.assemble_output(&AdderLayout::default().sum)?, 3);
//! # Ok::<(), crossed_wires::WireError>(())
//! ```

pub mod adder;
pub mod circuit;
pub mod dsl;
pub mod error;
pub mod solver;

#[cfg(test)]
mod testing;

// Re-export main types for convenience
pub use adder::{find_structural_defects, AdderLayout};
pub use circuit::Circuit;
pub use error::{Result, WireError};
pub use solver::Evaluator;
