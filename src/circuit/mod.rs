//! Gate-network graph representation.
//!
//! This module provides the arena-backed representation of a circuit after
//! parsing. The [`Circuit`] struct owns every wire; gates refer to their
//! operands, and operands to their consumers, through [`NodeId`] handles.

mod graph;
pub mod trace;
mod types;

pub use graph::Circuit;
pub use types::*;
