//! Parser for gate-network descriptions.
//!
//! The format is line-oriented: a block of constant input wires, one blank
//! separator line, then a block of two-input gates.
//!
//! # Grammar Overview
//!
//! ```text
//! document    = { input_line } blank_line { gate_line | blank_line }
//! input_line  = wire ':' bit
//! gate_line   = wire op wire '->' wire
//!
//! op          = "AND" | "OR" | "XOR"
//! bit         = "0" | "1"
//! wire        = any run of non-whitespace characters
//! ```
//!
//! In the input block ':' always ends a wire name, so input wires cannot
//! contain it. Gate lines have no colon and their wires may.
//!
//! Gate lines may name operands that are only defined further down the
//! document. Resolving those forward references is the job of
//! [`Circuit::from_ast`](crate::circuit::Circuit::from_ast); the parser only
//! checks the shape of each line.
//!
//! # Example
//!
//! ```text
//! x00: 1
//! x01: 0
//! y00: 0
//! y01: 1
//!
//! x00 XOR y00 -> z00
//! x01 XOR y01 -> z01
//! ```

mod ast;
mod lexer;
mod parser;

pub use ast::*;
pub use lexer::{Lexer, Token, TokenKind};
pub use parser::Parser;

use crate::error::Result;

/// Parse a circuit description string into an AST.
pub fn parse(input: &str) -> Result<CircuitAst> {
    let lexer = Lexer::new(input);
    let mut parser = Parser::new(lexer);
    parser.parse()
}

/// Parse a circuit description file.
pub fn parse_file(path: &std::path::Path) -> Result<CircuitAst> {
    let content = std::fs::read_to_string(path).map_err(|e| crate::error::WireError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;
    parse(&content)
}
