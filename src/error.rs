//! Error types for the gate-network loader, evaluator and adder audit.
//!
//! This module provides a unified error type [`WireError`] that covers
//! every failure that can occur while parsing a circuit description,
//! building the node graph, evaluating it, and auditing its wiring.

use thiserror::Error;

/// Result type alias using [`WireError`].
pub type Result<T> = std::result::Result<T, WireError>;

/// Unified error type for all circuit operations.
#[derive(Error, Debug)]
pub enum WireError {
    // ============ Parsing Errors ============
    /// Error during lexical analysis
    #[error("Lexer error at line {line}, column {column}: {message}")]
    LexerError {
        line: usize,
        column: usize,
        message: String,
    },

    /// Malformed line
    #[error("Parse error at line {line}: {message}")]
    ParseError { line: usize, message: String },

    // ============ Graph Construction Errors ============
    /// A wire name was defined more than once
    #[error("Duplicate wire name '{name}' at line {line}")]
    DuplicateName { name: String, line: usize },

    /// Gates whose operands never became available
    #[error("{count} gate(s) reference unknown or cyclic wires: {}", .names.join(", "))]
    UnresolvedGates { count: usize, names: Vec<String> },

    /// Two wires name the same bit of a bus, such as `z1` and `z01`
    #[error("Wires '{first}' and '{second}' both name bit {index} of their bus")]
    DuplicateBusBit {
        index: usize,
        first: String,
        second: String,
    },

    /// Node not found in circuit
    #[error("Wire '{node}' not found in circuit")]
    NodeNotFound { node: String },

    // ============ Evaluation Errors ============
    /// A node's value was read before it was evaluated
    #[error("Internal error: wire '{node}' was queried before being solved")]
    Unsolved { node: String },

    /// Output bus bit does not fit the assembled integer
    #[error("Output wire '{name}' has bit index {index}, which does not fit in 64 bits")]
    OutputTooWide { name: String, index: usize },

    // ============ Adder Audit Errors ============
    /// An output bus bit below the highest one is missing
    #[error("Expected output wire '{name}' is missing")]
    MissingBusBit { name: String },

    /// The circuit cannot be interpreted as an adder at all
    #[error("Invalid circuit topology: {message}")]
    InvalidTopology { message: String },

    // ============ I/O Errors ============
    /// Error reading the circuit file
    #[error("Failed to read circuit file '{path}': {source}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl WireError {
    /// Create a lexer error
    pub fn lexer(line: usize, column: usize, message: impl Into<String>) -> Self {
        Self::LexerError {
            line,
            column,
            message: message.into(),
        }
    }

    /// Create a parse error
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::ParseError {
            line,
            message: message.into(),
        }
    }

    /// Create a duplicate name error
    pub fn duplicate(name: impl Into<String>, line: usize) -> Self {
        Self::DuplicateName {
            name: name.into(),
            line,
        }
    }

    /// Create an unsolved-node error
    pub fn unsolved(node: impl Into<String>) -> Self {
        Self::Unsolved { node: node.into() }
    }
}
