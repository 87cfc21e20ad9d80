//! Lexer (tokenizer) for the circuit description.

use crate::error::{Result, WireError};

/// A token produced by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The kind of token
    pub kind: TokenKind,
    /// The token's text
    pub text: String,
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number (1-indexed)
    pub column: usize,
}

/// Token types in the description language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Any run of non-whitespace characters (wire names, bits, keywords)
    Word,
    /// Colon ':' separating an input wire from its value, while colons delimit
    Colon,
    /// Arrow '->' introducing a gate's output wire
    Arrow,
    /// Newline
    Newline,
    /// End of file
    Eof,
}

/// Lexer for tokenizing circuit descriptions.
pub struct Lexer<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
    line: usize,
    column: usize,
    /// Whether ':' ends a word and forms its own token
    colon_delimits: bool,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input.
    pub fn new(input: &'a str) -> Self {
        Self {
            chars: input.chars().peekable(),
            line: 1,
            column: 1,
            colon_delimits: true,
        }
    }

    /// Choose whether ':' is a token of its own or an ordinary word character.
    ///
    /// Takes effect from the next token on.
    pub fn set_colon_delimits(&mut self, delimits: bool) {
        self.colon_delimits = delimits;
    }

    /// Get the next token.
    pub fn next_token(&mut self) -> Result<Token> {
        self.skip_whitespace();

        let start_line = self.line;
        let start_column = self.column;

        let ch = match self.chars.peek().copied() {
            Some(ch) => ch,
            None => {
                return Ok(Token {
                    kind: TokenKind::Eof,
                    text: String::new(),
                    line: start_line,
                    column: start_column,
                });
            }
        };

        let (kind, text) = match ch {
            '\n' => {
                self.advance();
                (TokenKind::Newline, "\n".to_string())
            }
            ':' if self.colon_delimits => {
                self.advance();
                (TokenKind::Colon, ":".to_string())
            }
            _ if ch.is_control() => {
                return Err(WireError::lexer(
                    start_line,
                    start_column,
                    format!("unexpected character {:?}", ch),
                ));
            }
            _ => {
                let text = self.read_word();
                if text == "->" {
                    (TokenKind::Arrow, text)
                } else {
                    (TokenKind::Word, text)
                }
            }
        };

        Ok(Token {
            kind,
            text,
            line: start_line,
            column: start_column,
        })
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.chars.next()?;
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    fn skip_whitespace(&mut self) {
        while let Some(&ch) = self.chars.peek() {
            if ch != '\n' && ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn read_word(&mut self) -> String {
        let mut text = String::new();
        while let Some(&ch) = self.chars.peek() {
            if ch.is_whitespace() || ch.is_control() || (ch == ':' && self.colon_delimits) {
                break;
            }
            text.push(ch);
            self.advance();
        }
        text
    }
}
