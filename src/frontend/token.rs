//! Token types for the polynomial language.

use crate::utils::location::Span;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A token in the source code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// The kind of token
    pub kind: TokenKind,
    /// The source span
    pub span: Span,
    /// The lexeme (raw text)
    pub lexeme: String,
}

impl Token {
    /// Create a new token.
    pub fn new(kind: TokenKind, span: Span, lexeme: String) -> Self {
        Self { kind, span, lexeme }
    }

    /// Line the token starts on (1-indexed).
    pub fn line(&self) -> usize {
        self.span.line()
    }

    /// Check if this is an EOF token.
    pub fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({})", self.kind, self.lexeme)
    }
}

/// The kind of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    // Section keywords
    /// `TASKS`
    Tasks,
    /// `POLY`
    Poly,
    /// `EXECUTE`
    Execute,
    /// `INPUTS`
    Inputs,

    // Statement keywords
    /// `input`
    Input,
    /// `output`
    Output,

    // Literals and names
    /// Identifier (polynomial, parameter or variable name)
    Identifier,
    /// Non-negative integer literal
    Number,

    // Operators
    /// `=`
    Equal,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `^`
    Power,

    // Delimiters
    /// `;`
    Semicolon,
    /// `,`
    Comma,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,

    /// End of input
    Eof,
}

impl TokenKind {
    /// Check if this kind can start a statement in the EXECUTE section.
    pub fn starts_statement(&self) -> bool {
        matches!(self, TokenKind::Input | TokenKind::Output | TokenKind::Identifier)
    }

    /// Check if this kind can start a factor of a monomial list.
    pub fn starts_primary(&self) -> bool {
        matches!(self, TokenKind::Identifier | TokenKind::LeftParen)
    }

    /// Get the keyword for a string, if it is a keyword.
    ///
    /// Section keywords are upper case only; the statement keywords are
    /// accepted in either all-lower or all-upper case.
    pub fn keyword(s: &str) -> Option<TokenKind> {
        match s {
            "TASKS" => Some(TokenKind::Tasks),
            "POLY" => Some(TokenKind::Poly),
            "EXECUTE" => Some(TokenKind::Execute),
            "INPUTS" => Some(TokenKind::Inputs),
            "input" | "INPUT" => Some(TokenKind::Input),
            "output" | "OUTPUT" => Some(TokenKind::Output),
            _ => None,
        }
    }

    /// Get a human-readable name for this token kind.
    pub fn name(&self) -> &'static str {
        use TokenKind::*;
        match self {
            Tasks => "TASKS",
            Poly => "POLY",
            Execute => "EXECUTE",
            Inputs => "INPUTS",
            Input => "input",
            Output => "output",
            Identifier => "identifier",
            Number => "number",
            Equal => "=",
            Plus => "+",
            Minus => "-",
            Power => "^",
            Semicolon => ";",
            Comma => ",",
            LeftParen => "(",
            RightParen => ")",
            Eof => "end of file",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_lookup() {
        assert_eq!(TokenKind::keyword("POLY"), Some(TokenKind::Poly));
        assert_eq!(TokenKind::keyword("input"), Some(TokenKind::Input));
        assert_eq!(TokenKind::keyword("OUTPUT"), Some(TokenKind::Output));
        assert_eq!(TokenKind::keyword("poly"), None);
        assert_eq!(TokenKind::keyword("Input"), None);
    }

    #[test]
    fn test_statement_starters() {
        assert!(TokenKind::Input.starts_statement());
        assert!(TokenKind::Identifier.starts_statement());
        assert!(!TokenKind::Inputs.starts_statement());
        assert!(TokenKind::LeftParen.starts_primary());
        assert!(!TokenKind::Number.starts_primary());
    }
}
