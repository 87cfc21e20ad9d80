//! Parser for the circuit description.

use super::ast::*;
use super::lexer::{Lexer, Token, TokenKind};
use crate::error::{Result, WireError};

/// Which block of the document the parser is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Inputs,
    Gates,
}

/// Parser for circuit descriptions.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
    section: Section,
}

impl<'a> Parser<'a> {
    /// Create a new parser with the given lexer.
    pub fn new(lexer: Lexer<'a>) -> Self {
        Self {
            lexer,
            current: Token {
                kind: TokenKind::Newline,
                text: String::new(),
                line: 0,
                column: 0,
            },
            section: Section::Inputs,
        }
    }

    /// Parse the entire description.
    ///
    /// The first blank line switches from the input block to the gate block;
    /// any further blank lines are ignored. Inside the gate block ':' is an
    /// ordinary wire-name character.
    pub fn parse(&mut self) -> Result<CircuitAst> {
        let mut ast = CircuitAst::new();
        self.advance()?;

        while self.current.kind != TokenKind::Eof {
            if self.current.kind == TokenKind::Newline {
                self.section = Section::Gates;
                self.lexer.set_colon_delimits(false);
                self.advance()?;
                continue;
            }

            match self.section {
                Section::Inputs => ast.inputs.push(self.parse_input()?),
                Section::Gates => ast.gates.push(self.parse_gate()?),
            }

            match self.current.kind {
                TokenKind::Newline => self.advance()?,
                TokenKind::Eof => break,
                _ => {
                    return Err(WireError::parse(
                        self.current.line,
                        format!("unexpected trailing token {:?}", self.current.text),
                    ));
                }
            }
        }

        Ok(ast)
    }

    fn advance(&mut self) -> Result<()> {
        self.current = self.lexer.next_token()?;
        Ok(())
    }

    fn expect(&mut self, kind: TokenKind, what: &str) -> Result<Token> {
        if self.current.kind == kind {
            let tok = self.current.clone();
            self.advance()?;
            Ok(tok)
        } else {
            Err(WireError::parse(
                self.current.line,
                format!("expected {}, got {:?}", what, self.current.text),
            ))
        }
    }

    fn parse_input(&mut self) -> Result<InputDef> {
        let name = self.expect(TokenKind::Word, "wire name")?;
        let line = name.line;
        self.expect(TokenKind::Colon, "':' after input wire name")?;
        let bit = self.expect(TokenKind::Word, "bit value")?;

        let value = match bit.text.as_str() {
            "0" => false,
            "1" => true,
            other => {
                return Err(WireError::parse(
                    line,
                    format!("input value must be 0 or 1, got {:?}", other),
                ));
            }
        };

        Ok(InputDef {
            name: name.text,
            value,
            line,
        })
    }

    fn parse_gate(&mut self) -> Result<GateDef> {
        let lhs = self.expect(TokenKind::Word, "gate operand")?;
        let line = lhs.line;
        let op_token = self.expect(TokenKind::Word, "gate operation")?;
        let op = GateOp::from_keyword(&op_token.text).ok_or_else(|| {
            WireError::parse(line, format!("unknown gate operation {:?}", op_token.text))
        })?;
        let rhs = self.expect(TokenKind::Word, "gate operand")?;
        self.expect(TokenKind::Arrow, "'->' before gate output")?;
        let output = self.expect(TokenKind::Word, "gate output wire")?;

        Ok(GateDef {
            lhs: lhs.text,
            op,
            rhs: rhs.text,
            output: output.text,
            line,
        })
    }
}
