//! Frontend: lexer, token stream, parser, and AST for the polynomial language.
//!
//! ## Language Overview
//!
//! A program declares its tasks, a set of polynomials, a straight-line
//! EXECUTE section, and the values consumed by `input`:
//!
//! ```text
//! TASKS 2 5
//! POLY
//!     f(x) = x^2 + 1;
//!     g(x, y) = 2 x y - (y + 1)^2;
//! EXECUTE
//!     input a;
//!     b = g(a, f(a));
//!     output b;
//! INPUTS 3
//! ```

pub mod token;
pub mod lexer;
pub mod stream;
pub mod ast;
pub mod parser;
pub mod semantic;

// Re-exports
pub use lexer::{decode_source, Lexer};
pub use parser::{Parser, DEFAULT_MAX_DEPTH};
pub use stream::TokenStream;
pub use ast::*;
pub use semantic::Diagnostics;
pub use token::{Token, TokenKind};

use crate::utils::errors::PolyResult;

/// Parse source code into an AST without gating on semantic diagnostics.
pub fn parse(source: &str, max_depth: usize) -> PolyResult<ast::Program> {
    let tokens = TokenStream::from_source(source)?;
    let program = Parser::new(tokens).with_max_depth(max_depth).parse_program()?;
    Ok(program)
}

/// Lex source code into its token sequence, ending with `Eof`.
pub fn tokenize(source: &str) -> PolyResult<Vec<Token>> {
    Ok(Lexer::new(source).tokenize()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::errors::PolyError;

    const SAMPLE: &str = r#"
        TASKS 2 5
        POLY
            f(x) = x^2 + 1;
            g(x, y) = 2 x y - (y + 1)^2;
        EXECUTE
            input a;
            b = g(a, f(a));
            output b;
        INPUTS 3
    "#;

    #[test]
    fn test_parse_sample() {
        let program = parse(SAMPLE, DEFAULT_MAX_DEPTH).unwrap();
        assert_eq!(program.polys.len(), 2);
        assert_eq!(program.degree_report(), vec![("f", 2), ("g", 2)]);
    }

    #[test]
    fn test_tokenize_ends_with_eof() {
        let tokens = tokenize("TASKS 1").unwrap();
        assert_eq!(tokens.len(), 3);
        assert!(tokens[2].is_eof());
    }

    #[test]
    fn test_lexer_error_is_syntax() {
        let err = parse("TASKS 1 POLY f = x * x; EXECUTE input a; INPUTS 1", 8).unwrap_err();
        assert!(matches!(err, PolyError::Lexer(_)));
        assert!(err.is_syntax());
    }

    #[test]
    fn test_semantic_errors_do_not_fail_parse() {
        let program = parse("TASKS 1 POLY f = y; EXECUTE input a; INPUTS 1", 8).unwrap();
        let err = semantic::check(&program).unwrap_err();
        assert_eq!(err.to_string(), "Semantic Error Code 2: 1");
    }
}
