//! Abstract Syntax Tree types for the circuit description.

use std::fmt;

/// Complete AST representation of a parsed circuit description.
#[derive(Debug, Clone, Default)]
pub struct CircuitAst {
    /// Constant input wires, in source order
    pub inputs: Vec<InputDef>,
    /// Gate definitions, in source order (operands may be forward references)
    pub gates: Vec<GateDef>,
}

impl CircuitAst {
    /// Create a new empty circuit AST.
    pub fn new() -> Self {
        Self::default()
    }
}

/// A `name: 0|1` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputDef {
    /// Wire name
    pub name: String,
    /// Constant value carried by the wire
    pub value: bool,
    /// Source line number for error reporting
    pub line: usize,
}

/// A `lhs OP rhs -> output` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateDef {
    /// First operand wire
    pub lhs: String,
    /// Boolean operation
    pub op: GateOp,
    /// Second operand wire
    pub rhs: String,
    /// Wire driven by this gate
    pub output: String,
    /// Source line number for error reporting
    pub line: usize,
}

impl fmt::Display for GateDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} -> {}", self.lhs, self.op, self.rhs, self.output)
    }
}

/// Two-input boolean operations supported by the description language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GateOp {
    /// Logical conjunction
    And,
    /// Logical disjunction
    Or,
    /// Exclusive or
    Xor,
}

impl GateOp {
    /// Parse an operation from its keyword. Keywords are case-exact.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "AND" => Some(Self::And),
            "OR" => Some(Self::Or),
            "XOR" => Some(Self::Xor),
            _ => None,
        }
    }

    /// The keyword used for this operation in the description language.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::And => "AND",
            Self::Or => "OR",
            Self::Xor => "XOR",
        }
    }

    /// Apply the operation to two operand values.
    pub fn apply(&self, a: bool, b: bool) -> bool {
        match self {
            Self::And => a & b,
            Self::Or => a | b,
            Self::Xor => a ^ b,
        }
    }
}

impl fmt::Display for GateOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}
