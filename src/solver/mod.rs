//! Circuit evaluation.
//!
//! Gates are evaluated on demand and memoized, so a gate with many
//! consumers is computed exactly once. Because every gate's operands are
//! defined before it, the dependency walk always terminates.

mod evaluator;

pub use evaluator::{evaluate, Evaluator};
