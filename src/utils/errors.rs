//! Error types for the polynomial language.
//!
//! Errors are organised by the phase that produces them. Lexer and syntax
//! errors are fatal and share one user-facing banner. Semantic errors
//! carry the sorted line list of a single category and render as the
//! exact report line.

use crate::utils::location::Span;
use crate::utils::pretty::line_report;
use std::fmt;
use thiserror::Error;

/// The only text ever printed for a lexer or syntax error.
pub const SYNTAX_ERROR_BANNER: &str = "SYNTAX ERROR !!!!!&%!!";

/// Top-level error type.
#[derive(Error, Debug)]
pub enum PolyError {
    /// Error during lexing/tokenization
    #[error("Lexer error: {0}")]
    Lexer(#[from] LexerError),

    /// Grammar violation
    #[error("Syntax error: {0}")]
    Syntax(#[from] SyntaxError),

    /// Highest-priority non-empty semantic category
    #[error("{0}")]
    Semantic(#[from] SemanticError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl PolyError {
    /// Lexer and syntax errors both terminate with the syntax banner.
    pub fn is_syntax(&self) -> bool {
        matches!(self, PolyError::Lexer(_) | PolyError::Syntax(_))
    }
}

/// Error during lexical analysis.
#[derive(Error, Debug, Clone, PartialEq)]
pub struct LexerError {
    /// The error message
    pub message: String,
    /// Location in source
    pub span: Span,
    /// The kind of lexer error
    pub kind: LexerErrorKind,
}

impl fmt::Display for LexerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.message, self.span)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexerErrorKind {
    /// Character outside the language alphabet
    UnexpectedChar,
    /// Source bytes are not valid UTF-8
    InvalidEncoding,
}

/// Error during parsing.
#[derive(Error, Debug, Clone, PartialEq)]
pub struct SyntaxError {
    /// The error message
    pub message: String,
    /// Location of the offending token
    pub span: Span,
    /// The kind of syntax error
    pub kind: SyntaxErrorKind,
    /// Expected tokens (if applicable)
    pub expected: Vec<String>,
    /// What was found
    pub found: Option<String>,
}

impl SyntaxError {
    /// Line of the offending token.
    pub fn line(&self) -> usize {
        self.span.line()
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.message, self.span)?;
        if !self.expected.is_empty() {
            write!(f, " (expected: {})", self.expected.join(", "))?;
        }
        if let Some(ref found) = self.found {
            write!(f, " (found: {})", found)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxErrorKind {
    /// Token does not fit the grammar here
    UnexpectedToken,
    /// Input ended before the program was complete
    UnexpectedEof,
    /// Parenthesis or call nesting exceeded the configured cap
    NestingTooDeep,
}

/// The four semantic categories, in reporting priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SemanticErrorKind {
    /// A polynomial name declared more than once
    DuplicateDeclaration,
    /// A body identifier missing from its polynomial's parameter list
    InvalidParameter,
    /// A call naming a polynomial that was never declared
    UndeclaredPolynomial,
    /// A call whose argument count differs from the declaration
    ArgumentCount,
}

impl SemanticErrorKind {
    /// All kinds, highest priority first.
    pub const ALL: [SemanticErrorKind; 4] = [
        SemanticErrorKind::DuplicateDeclaration,
        SemanticErrorKind::InvalidParameter,
        SemanticErrorKind::UndeclaredPolynomial,
        SemanticErrorKind::ArgumentCount,
    ];

    /// The numeric code printed in the report.
    pub fn code(&self) -> u8 {
        match self {
            SemanticErrorKind::DuplicateDeclaration => 1,
            SemanticErrorKind::InvalidParameter => 2,
            SemanticErrorKind::UndeclaredPolynomial => 3,
            SemanticErrorKind::ArgumentCount => 4,
        }
    }

    /// Report label, without the trailing colon.
    pub fn label(&self) -> String {
        format!("Semantic Error Code {}", self.code())
    }
}

/// A reported semantic category with its ascending line numbers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub struct SemanticError {
    /// The category being reported
    pub kind: SemanticErrorKind,
    /// Offending lines, sorted ascending
    pub lines: Vec<usize>,
}

impl fmt::Display for SemanticError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&line_report(&self.kind.label(), &self.lines))
    }
}

/// Result type using PolyError.
pub type PolyResult<T> = Result<T, PolyError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::location::SourceLocation;

    #[test]
    fn test_syntax_error_display() {
        let err = SyntaxError {
            message: "Unexpected token".to_string(),
            span: Span::point(SourceLocation::new(3, 7, 20)),
            kind: SyntaxErrorKind::UnexpectedToken,
            expected: vec![";".to_string()],
            found: Some("identifier".to_string()),
        };
        let s = err.to_string();
        assert!(s.contains("Unexpected token"));
        assert!(s.contains("expected: ;"));
        assert_eq!(err.line(), 3);
    }

    #[test]
    fn test_semantic_error_line() {
        let err = SemanticError {
            kind: SemanticErrorKind::UndeclaredPolynomial,
            lines: vec![4, 9],
        };
        assert_eq!(err.to_string(), "Semantic Error Code 3: 4 9");
        assert_eq!(PolyError::from(err).to_string(), "Semantic Error Code 3: 4 9");
    }

    #[test]
    fn test_kind_priority_matches_codes() {
        let codes: Vec<u8> = SemanticErrorKind::ALL.iter().map(|k| k.code()).collect();
        assert_eq!(codes, vec![1, 2, 3, 4]);
        assert!(SemanticErrorKind::DuplicateDeclaration < SemanticErrorKind::ArgumentCount);
    }

    #[test]
    fn test_is_syntax() {
        let lex = LexerError {
            message: "bad".into(),
            span: Span::default(),
            kind: LexerErrorKind::UnexpectedChar,
        };
        assert!(PolyError::from(lex).is_syntax());
        let sem = SemanticError { kind: SemanticErrorKind::ArgumentCount, lines: vec![1] };
        assert!(!PolyError::from(sem).is_syntax());
    }
}
