//! Buffered token stream with arbitrary lookahead.
//!
//! The grammar only needs two tokens of lookahead (`ID (` versus a bare
//! `ID` inside argument lists), but `peek` accepts any distance.

use crate::frontend::lexer::Lexer;
use crate::frontend::token::{Token, TokenKind};
use crate::utils::errors::LexerError;

/// Tokens of one source text, consumed left to right exactly once.
#[derive(Debug, Clone)]
pub struct TokenStream {
    tokens: Vec<Token>,
    pos: usize,
}

impl TokenStream {
    /// Lex the whole source up front.
    pub fn from_source(source: &str) -> Result<Self, LexerError> {
        Ok(Self::new(Lexer::new(source).tokenize()?))
    }

    /// Wrap an already lexed token vector.
    ///
    /// An `Eof` token is appended if the vector does not end with one.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if !tokens.last().is_some_and(Token::is_eof) {
            let span = tokens.last().map(|t| t.span).unwrap_or_default();
            tokens.push(Token::new(TokenKind::Eof, span, String::new()));
        }
        Self { tokens, pos: 0 }
    }

    /// Consume and return the next token. Past the end this keeps
    /// returning the final `Eof`.
    pub fn next_token(&mut self) -> Token {
        let token = self.tokens[self.pos].clone();
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        token
    }

    /// Look `k` tokens ahead without consuming; `peek(1)` is the next token.
    pub fn peek(&self, k: usize) -> &Token {
        let idx = (self.pos + k.saturating_sub(1)).min(self.tokens.len() - 1);
        &self.tokens[idx]
    }

    /// Kind of the next token.
    pub fn peek_kind(&self) -> TokenKind {
        self.peek(1).kind
    }

    /// Number of tokens including the trailing `Eof`.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// True when only `Eof` remains.
    pub fn is_empty(&self) -> bool {
        self.peek(1).is_eof()
    }
}
