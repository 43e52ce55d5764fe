//! Lexer for the polynomial language.
//!
//! The lexer converts source text into a stream of tokens, tracking
//! 1-based line numbers for every token.

use crate::frontend::token::{Token, TokenKind};
use crate::utils::errors::{LexerError, LexerErrorKind};
use crate::utils::location::{SourceLocation, Span};
use std::iter::Peekable;
use std::str::Chars;

/// A lexer for tokenizing source code.
pub struct Lexer<'a> {
    /// The source text
    source: &'a str,
    /// Character iterator
    chars: Peekable<Chars<'a>>,
    /// Current byte offset
    offset: usize,
    /// Current line number (1-indexed)
    line: usize,
    /// Current column number (1-indexed)
    column: usize,
    /// Start of current token
    token_start: SourceLocation,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.chars().peekable(),
            offset: 0,
            line: 1,
            column: 1,
            token_start: SourceLocation::start(),
        }
    }

    fn current_location(&self) -> SourceLocation {
        SourceLocation::new(self.line, self.column, self.offset)
    }

    fn make_span(&self) -> Span {
        Span::new(self.token_start, self.current_location())
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        self.offset += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    /// C `isspace`: ASCII whitespace plus vertical tab.
    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(|c| c.is_ascii_whitespace() || c == '\x0b') {
            self.advance();
        }
    }

    fn make_token(&self, kind: TokenKind) -> Token {
        let span = self.make_span();
        let lexeme = self.source[span.start.offset..span.end.offset].to_string();
        Token::new(kind, span, lexeme)
    }

    fn scan_number(&mut self) -> Token {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }
        self.make_token(TokenKind::Number)
    }

    /// Letters then letters or digits; keywords are matched afterwards.
    fn scan_identifier(&mut self) -> Token {
        while self.peek().is_some_and(|c| c.is_ascii_alphanumeric()) {
            self.advance();
        }
        let span = self.make_span();
        let lexeme = &self.source[span.start.offset..span.end.offset];
        let kind = TokenKind::keyword(lexeme).unwrap_or(TokenKind::Identifier);
        Token::new(kind, span, lexeme.to_string())
    }

    /// Scan the next token.
    pub fn next_token(&mut self) -> Result<Token, LexerError> {
        self.skip_whitespace();
        self.token_start = self.current_location();

        let c = match self.advance() {
            Some(c) => c,
            None => return Ok(self.make_token(TokenKind::Eof)),
        };

        match c {
            '=' => Ok(self.make_token(TokenKind::Equal)),
            ';' => Ok(self.make_token(TokenKind::Semicolon)),
            ',' => Ok(self.make_token(TokenKind::Comma)),
            '(' => Ok(self.make_token(TokenKind::LeftParen)),
            ')' => Ok(self.make_token(TokenKind::RightParen)),
            '+' => Ok(self.make_token(TokenKind::Plus)),
            '-' => Ok(self.make_token(TokenKind::Minus)),
            '^' => Ok(self.make_token(TokenKind::Power)),
            c if c.is_ascii_digit() => Ok(self.scan_number()),
            c if c.is_ascii_alphabetic() => Ok(self.scan_identifier()),
            _ => Err(LexerError {
                message: format!("Unexpected character: '{}'", c),
                span: self.make_span(),
                kind: LexerErrorKind::UnexpectedChar,
            }),
        }
    }

    /// Collect all tokens into a vector, ending with a single `Eof`.
    pub fn tokenize(mut self) -> Result<Vec<Token>, LexerError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let is_eof = token.is_eof();
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        Ok(tokens)
    }
}

/// Check that raw source bytes are UTF-8 text.
///
/// Invalid bytes are reported as a lexer error at the first bad byte.
pub fn decode_source(bytes: &[u8]) -> Result<&str, LexerError> {
    std::str::from_utf8(bytes).map_err(|err| {
        let valid = err.valid_up_to();
        let prefix = std::str::from_utf8(&bytes[..valid]).unwrap_or_default();
        let line = prefix.matches('\n').count() + 1;
        let column = prefix.rsplit('\n').next().map_or(0, |l| l.chars().count()) + 1;
        LexerError {
            message: format!("Invalid UTF-8 byte 0x{:02x}", bytes[valid]),
            span: Span::point(SourceLocation::new(line, column, valid)),
            kind: LexerErrorKind::InvalidEncoding,
        }
    })
}
