//! Parser for the polynomial language.
//!
//! A recursive descent parser that, in one left-to-right pass over the
//! token stream:
//! - validates the grammar, failing on the first mismatch;
//! - builds each polynomial body and computes its degree bottom-up;
//! - resolves parameter, polynomial and variable names, recording
//!   semantic diagnostics without stopping;
//! - tracks uninitialized reads in program order.
//!
//! ```text
//! Program    := TASKS NumList POLY PolyDecl+ EXECUTE Stmt+ INPUTS NumList EOF
//! PolyDecl   := ID ('(' IdList ')')? '=' TermList ';'
//! TermList   := Term (('+'|'-') Term)*
//! Term       := NUM MonoList? | MonoList
//! MonoList   := Mono+
//! Mono       := Primary ('^' NUM)?
//! Primary    := ID | '(' TermList ')'
//! Stmt       := 'input' ID ';' | 'output' ID ';' | ID '=' PolyCall ';'
//! PolyCall   := ID '(' Arg (',' Arg)* ')'
//! Arg        := NUM | ID | PolyCall
//! ```

use crate::analysis::degree::{power_degree, product_degree, sum_degree, PARAM_DEGREE};
use crate::analysis::uninit::InitTracker;
use crate::frontend::ast::*;
use crate::frontend::semantic::Diagnostics;
use crate::frontend::stream::TokenStream;
use crate::frontend::token::{Token, TokenKind};
use crate::pipeline::TaskSet;
use crate::utils::errors::{LexerError, SemanticErrorKind, SyntaxError, SyntaxErrorKind};
use log::{debug, trace};

/// Default cap on parenthesis and nested-call depth. Parsing at this depth
/// stays within a 2 MiB thread stack in unoptimized builds.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Name of the single parameter of a header written without a list.
pub const IMPLICIT_PARAM: &str = "x";

type ParseResult<T> = Result<T, SyntaxError>;

/// A parser for the polynomial language.
pub struct Parser {
    tokens: TokenStream,
    max_depth: usize,
    depth: usize,
    /// Header of the declaration whose body is being parsed
    current_header: Option<PolyHeader>,
    polys: Vec<Polynomial>,
    statements: Vec<Statement>,
    slots: SlotTable,
    diagnostics: Diagnostics,
    init: InitTracker,
}

impl Parser {
    /// Create a parser over an already lexed stream.
    pub fn new(tokens: TokenStream) -> Self {
        Self {
            tokens,
            max_depth: DEFAULT_MAX_DEPTH,
            depth: 0,
            current_header: None,
            polys: Vec::new(),
            statements: Vec::new(),
            slots: SlotTable::new(),
            diagnostics: Diagnostics::new(),
            init: InitTracker::new(),
        }
    }

    /// Lex `source` and create a parser over it.
    pub fn from_source(source: &str) -> Result<Self, LexerError> {
        Ok(Self::new(TokenStream::from_source(source)?))
    }

    /// Set the nesting cap.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Parse a complete program.
    pub fn parse_program(mut self) -> ParseResult<Program> {
        debug!("parsing {} tokens", self.tokens.len());

        let tasks = self.parse_tasks_section()?;
        self.parse_poly_section()?;
        self.parse_execute_section()?;
        let inputs = self.parse_inputs_section()?;
        self.consume(TokenKind::Eof, "Expected end of input after INPUTS")?;

        debug!(
            "parsed {} polynomials, {} statements, {} variable slots, {} inputs",
            self.polys.len(),
            self.statements.len(),
            self.slots.len(),
            inputs.len()
        );

        Ok(Program {
            tasks,
            polys: self.polys,
            statements: self.statements,
            inputs,
            slots: self.slots,
            diagnostics: self.diagnostics,
            uninitialized: self.init.into_warnings(),
        })
    }

    // ------------------------------------------------------------------
    // Sections
    // ------------------------------------------------------------------

    fn parse_tasks_section(&mut self) -> ParseResult<TaskSet> {
        self.consume(TokenKind::Tasks, "Expected 'TASKS'")?;
        let numbers = self.parse_num_list()?;
        Ok(TaskSet::from_numbers(&numbers))
    }

    /// One or more numbers with no separators.
    fn parse_num_list(&mut self) -> ParseResult<Vec<Value>> {
        let first = self.consume(TokenKind::Number, "Expected a number")?;
        let mut numbers = vec![number_value(&first.lexeme)];
        while self.check(TokenKind::Number) {
            let tok = self.advance();
            numbers.push(number_value(&tok.lexeme));
        }
        Ok(numbers)
    }

    fn parse_poly_section(&mut self) -> ParseResult<()> {
        self.consume(TokenKind::Poly, "Expected 'POLY'")?;
        loop {
            self.parse_poly_decl()?;
            if !self.check(TokenKind::Identifier) {
                break;
            }
        }
        Ok(())
    }

    fn parse_execute_section(&mut self) -> ParseResult<()> {
        self.consume(TokenKind::Execute, "Expected 'EXECUTE'")?;
        loop {
            let stmt = self.parse_statement()?;
            trace!("statement at line {}: {}", stmt.line(), stmt);
            self.statements.push(stmt);
            if !self.tokens.peek_kind().starts_statement() {
                break;
            }
        }
        Ok(())
    }

    fn parse_inputs_section(&mut self) -> ParseResult<Vec<Value>> {
        self.consume(TokenKind::Inputs, "Expected 'INPUTS'")?;
        self.parse_num_list()
    }

    // ------------------------------------------------------------------
    // Polynomial declarations
    // ------------------------------------------------------------------

    fn parse_poly_decl(&mut self) -> ParseResult<()> {
        let name_tok = self.consume(TokenKind::Identifier, "Expected polynomial name")?;
        let params = if self.match_token(TokenKind::LeftParen) {
            let params = self.parse_id_list()?;
            self.consume(TokenKind::RightParen, "Expected ')' after parameter list")?;
            params
        } else {
            vec![IMPLICIT_PARAM.to_string()]
        };

        let duplicate = self.polys.iter().any(|p| p.header.name == name_tok.lexeme);
        if duplicate {
            self.diagnostics
                .record(SemanticErrorKind::DuplicateDeclaration, name_tok.line());
        }

        // A duplicate's body is still parsed against its own parameters so
        // grammar and parameter references are checked, then dropped.
        self.current_header = Some(PolyHeader {
            line: name_tok.line(),
            name: name_tok.lexeme,
            params,
            degree: 0,
        });
        self.consume(TokenKind::Equal, "Expected '=' after polynomial header")?;
        let (body, degree) = self.parse_term_list()?;
        self.consume(TokenKind::Semicolon, "Expected ';' after polynomial body")?;

        if let Some(mut header) = self.current_header.take() {
            if !duplicate {
                header.degree = degree;
                debug!("declared {} with degree {}", header, degree);
                self.polys.push(Polynomial { header, body });
            }
        }
        Ok(())
    }

    fn parse_id_list(&mut self) -> ParseResult<Vec<String>> {
        let mut ids = vec![self.consume(TokenKind::Identifier, "Expected parameter name")?.lexeme];
        while self.match_token(TokenKind::Comma) {
            ids.push(self.consume(TokenKind::Identifier, "Expected parameter name after ','")?.lexeme);
        }
        Ok(ids)
    }

    fn parse_term_list(&mut self) -> ParseResult<(TermList, u32)> {
        let (first, mut degree) = self.parse_term()?;
        let mut list = TermList::new(first);
        loop {
            let sign = match self.tokens.peek_kind() {
                TokenKind::Plus => Sign::Plus,
                TokenKind::Minus => Sign::Minus,
                _ => break,
            };
            self.advance();
            let (term, term_degree) = self.parse_term()?;
            list.push(sign, term);
            degree = sum_degree(degree, term_degree);
        }
        Ok((list, degree))
    }

    fn parse_term(&mut self) -> ParseResult<(Term, u32)> {
        if self.check(TokenKind::Number) {
            let coefficient = number_value(&self.advance().lexeme);
            if self.tokens.peek_kind().starts_primary() {
                let (monos, degree) = self.parse_mono_list()?;
                Ok((Term { coefficient, monomials: Some(monos) }, degree))
            } else {
                Ok((Term::constant(coefficient), 0))
            }
        } else if self.tokens.peek_kind().starts_primary() {
            let (monos, degree) = self.parse_mono_list()?;
            Ok((Term { coefficient: 1, monomials: Some(monos) }, degree))
        } else {
            Err(self.error_here("Expected a term", &["number", "identifier", "("]))
        }
    }

    fn parse_mono_list(&mut self) -> ParseResult<(MonoList, u32)> {
        let (first, mut degree) = self.parse_mono()?;
        let mut monos = vec![first];
        while self.tokens.peek_kind().starts_primary() {
            let (mono, mono_degree) = self.parse_mono()?;
            monos.push(mono);
            degree = product_degree(degree, mono_degree);
        }
        Ok((MonoList { monos }, degree))
    }

    fn parse_mono(&mut self) -> ParseResult<(Mono, u32)> {
        let (primary, base_degree) = self.parse_primary()?;
        let exponent = if self.match_token(TokenKind::Power) {
            let tok = self.consume(TokenKind::Number, "Expected exponent after '^'")?;
            // Only an overflowing literal can come out negative.
            u32::try_from(number_value(&tok.lexeme)).unwrap_or(0)
        } else {
            1
        };
        Ok((Mono { primary, exponent }, power_degree(base_degree, exponent)))
    }

    fn parse_primary(&mut self) -> ParseResult<(Primary, u32)> {
        match self.tokens.peek_kind() {
            TokenKind::Identifier => {
                let tok = self.advance();
                let index = self
                    .current_header
                    .as_ref()
                    .and_then(|header| header.param_index(&tok.lexeme));
                if index.is_none() {
                    self.diagnostics
                        .record(SemanticErrorKind::InvalidParameter, tok.line());
                }
                Ok((Primary::Param { name: tok.lexeme, index }, PARAM_DEGREE))
            }
            TokenKind::LeftParen => {
                self.enter_nesting()?;
                self.advance();
                let (inner, degree) = self.parse_term_list()?;
                self.consume(TokenKind::RightParen, "Expected ')' to close sub-expression")?;
                self.leave_nesting();
                Ok((Primary::Group(Box::new(inner)), degree))
            }
            _ => Err(self.error_here("Expected a factor", &["identifier", "("])),
        }
    }

    // ------------------------------------------------------------------
    // Statements
    // ------------------------------------------------------------------

    fn parse_statement(&mut self) -> ParseResult<Statement> {
        match self.tokens.peek_kind() {
            TokenKind::Input => self.parse_input(),
            TokenKind::Output => self.parse_output(),
            TokenKind::Identifier => self.parse_assign(),
            _ => Err(self.error_here("Expected a statement", &["input", "output", "identifier"])),
        }
    }

    fn parse_input(&mut self) -> ParseResult<Statement> {
        self.advance();
        let var = self.parse_var("Expected variable after 'input'")?;
        self.init.mark_initialized(&var.name);
        self.consume(TokenKind::Semicolon, "Expected ';' after input statement")?;
        Ok(Statement::Input { var })
    }

    fn parse_output(&mut self) -> ParseResult<Statement> {
        self.advance();
        let var = self.parse_var("Expected variable after 'output'")?;
        self.init.check_read(&var.name, var.line);
        self.consume(TokenKind::Semicolon, "Expected ';' after output statement")?;
        Ok(Statement::Output { var })
    }

    fn parse_assign(&mut self) -> ParseResult<Statement> {
        let lhs = self.parse_var("Expected variable")?;
        self.consume(TokenKind::Equal, "Expected '=' in assignment")?;
        let rhs = self.parse_poly_call()?;
        self.consume(TokenKind::Semicolon, "Expected ';' after assignment")?;
        // The right-hand side reads happen before the write.
        self.init.mark_initialized(&lhs.name);
        Ok(Statement::Assign { lhs, rhs })
    }

    fn parse_var(&mut self, message: &str) -> ParseResult<VarRef> {
        let tok = self.consume(TokenKind::Identifier, message)?;
        let slot = self.slots.slot_for(&tok.lexeme);
        Ok(VarRef { line: tok.line(), name: tok.lexeme, slot })
    }

    fn parse_poly_call(&mut self) -> ParseResult<PolyCall> {
        let name_tok = self.consume(TokenKind::Identifier, "Expected polynomial name")?;
        let line = name_tok.line();
        let poly = self.polys.iter().position(|p| p.header.name == name_tok.lexeme);
        if poly.is_none() {
            self.diagnostics
                .record(SemanticErrorKind::UndeclaredPolynomial, line);
        }

        self.consume(TokenKind::LeftParen, "Expected '(' after polynomial name")?;
        let mut args = vec![self.parse_arg()?];
        while self.match_token(TokenKind::Comma) {
            args.push(self.parse_arg()?);
        }
        self.consume(TokenKind::RightParen, "Expected ')' after arguments")?;

        if let Some(index) = poly {
            if args.len() != self.polys[index].header.arity() {
                self.diagnostics.record(SemanticErrorKind::ArgumentCount, line);
            }
        }
        Ok(PolyCall { name: name_tok.lexeme, poly, args, line })
    }

    fn parse_arg(&mut self) -> ParseResult<Arg> {
        match self.tokens.peek_kind() {
            TokenKind::Number => Ok(Arg::Num(number_value(&self.advance().lexeme))),
            TokenKind::Identifier if self.tokens.peek(2).kind == TokenKind::LeftParen => {
                self.enter_nesting()?;
                let call = self.parse_poly_call()?;
                self.leave_nesting();
                Ok(Arg::Call(call))
            }
            TokenKind::Identifier => {
                let var = self.parse_var("Expected variable")?;
                self.init.check_read(&var.name, var.line);
                Ok(Arg::Var(var))
            }
            _ => Err(self.error_here("Expected an argument", &["number", "identifier"])),
        }
    }

    // ------------------------------------------------------------------
    // Helper methods
    // ------------------------------------------------------------------

    fn check(&self, kind: TokenKind) -> bool {
        self.tokens.peek_kind() == kind
    }

    fn advance(&mut self) -> Token {
        self.tokens.next_token()
    }

    fn consume(&mut self, kind: TokenKind, message: &str) -> ParseResult<Token> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.error_here(message, &[kind.name()]))
        }
    }

    fn match_token(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn enter_nesting(&mut self) -> ParseResult<()> {
        self.depth += 1;
        if self.depth > self.max_depth {
            let mut err = self.error_here(
                &format!("Nesting deeper than {} levels", self.max_depth),
                &[],
            );
            err.kind = SyntaxErrorKind::NestingTooDeep;
            return Err(err);
        }
        Ok(())
    }

    fn leave_nesting(&mut self) {
        self.depth -= 1;
    }

    fn error_here(&self, message: &str, expected: &[&str]) -> SyntaxError {
        let tok = self.tokens.peek(1);
        let kind = if tok.is_eof() {
            SyntaxErrorKind::UnexpectedEof
        } else {
            SyntaxErrorKind::UnexpectedToken
        };
        SyntaxError {
            message: message.to_string(),
            span: tok.span,
            kind,
            expected: expected.iter().map(|s| s.to_string()).collect(),
            found: Some(format!("{} '{}'", tok.kind, tok.lexeme)),
        }
    }
}

/// Convert a digit run the way C `atoi` does on LP64 targets: a 64-bit
/// parse that saturates, truncated to the value width.
pub fn number_value(lexeme: &str) -> Value {
    lexeme.parse::<i64>().unwrap_or(i64::MAX) as Value
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(source: &str) -> ParseResult<Program> {
        Parser::from_source(source).unwrap().parse_program()
    }

    fn wrap_poly(poly: &str) -> String {
        format!("TASKS 5 POLY {} EXECUTE input a; INPUTS 1", poly)
    }

    fn degree_of(poly: &str) -> u32 {
        parse(&wrap_poly(poly)).unwrap().polys[0].header.degree
    }

    #[test]
    fn test_minimal_program() {
        let program = parse("TASKS 2 5 POLY f(x) = x^2 + 1; EXECUTE input a; b = f(a); output b; INPUTS 3").unwrap();
        assert_eq!(program.polys.len(), 1);
        assert_eq!(program.polys[0].header.name, "f");
        assert_eq!(program.polys[0].header.degree, 2);
        assert_eq!(program.statements.len(), 3);
        assert_eq!(program.inputs, vec![3]);
        assert!(program.diagnostics.is_empty());
        assert!(program.uninitialized.is_empty());
    }

    #[test]
    fn test_degrees() {
        assert_eq!(degree_of("f(x) = 2 x^3 + x x - 5;"), 3);
        assert_eq!(degree_of("f(x, y) = x y^2 + x;"), 3);
        assert_eq!(degree_of("f(x) = (x^2 + 1)^3;"), 6);
        assert_eq!(degree_of("f(x) = 7;"), 0);
        assert_eq!(degree_of("f(x) = x^0;"), 0);
        assert_eq!(degree_of("f(x, y) = (x + y)(x - y) x;"), 3);
    }

    #[test]
    fn test_parsed_degree_matches_structural() {
        let program = parse(&wrap_poly("f(x, y) = 3 x^2 (y + x y)^2 - (x)^4 y;")).unwrap();
        let poly = &program.polys[0];
        assert_eq!(poly.header.degree, crate::analysis::structural_degree(&poly.body));
        assert_eq!(poly.header.degree, 6);
    }

    #[test]
    fn test_implicit_parameter() {
        let program = parse(&wrap_poly("g = x^2 + 2 x;")).unwrap();
        assert_eq!(program.polys[0].header.params, vec!["x".to_string()]);
        assert!(program.diagnostics.is_empty());
    }

    #[test]
    fn test_body_round_trips_through_display() {
        let program = parse(&wrap_poly("f(x) = 2x^3 + x x - 5;")).unwrap();
        assert_eq!(program.polys[0].to_string(), "f(x) = 2 x^3 + x x - 5;");
    }

    #[test]
    fn test_duplicate_declaration_is_dropped() {
        let source = "TASKS 5\nPOLY\nf(x) = x;\ng(y) = y;\nf(z) = z^4;\nEXECUTE input a;\nINPUTS 1";
        let program = parse(source).unwrap();
        assert_eq!(program.polys.len(), 2);
        assert_eq!(program.polys[0].header.degree, 1);
        assert_eq!(program.diagnostics.lines(SemanticErrorKind::DuplicateDeclaration), &[5]);
        // The duplicate's body resolves against its own parameters.
        assert!(program.diagnostics.lines(SemanticErrorKind::InvalidParameter).is_empty());
    }

    #[test]
    fn test_duplicate_body_checked_against_own_parameters() {
        let source = "TASKS 5\nPOLY\nf(x) = x;\nf(y) = x\n + y;\nEXECUTE input a;\nINPUTS 1";
        let program = parse(source).unwrap();
        assert_eq!(program.polys.len(), 1);
        assert_eq!(program.polys[0].header.params, vec!["x".to_string()]);
        assert_eq!(program.diagnostics.lines(SemanticErrorKind::DuplicateDeclaration), &[4]);
        assert_eq!(program.diagnostics.lines(SemanticErrorKind::InvalidParameter), &[4]);
    }

    #[test]
    fn test_duplicate_body_syntax_error_is_fatal() {
        let err = parse("TASKS 5 POLY f = x; f = x +; EXECUTE input a; INPUTS 1").unwrap_err();
        assert_eq!(err.kind, SyntaxErrorKind::UnexpectedToken);
        assert_eq!(err.found.as_deref(), Some("; ';'"));
    }

    #[test]
    fn test_invalid_parameter_inside_parens() {
        let source = "TASKS 1\nPOLY\nf(x) = x +\n (x y);\nEXECUTE input a;\nINPUTS 1";
        let program = parse(source).unwrap();
        assert_eq!(program.diagnostics.lines(SemanticErrorKind::InvalidParameter), &[4]);
        let err = program.diagnostics.check().unwrap_err();
        assert_eq!(err.to_string(), "Semantic Error Code 2: 4");
    }

    #[test]
    fn test_call_resolution_diagnostics() {
        let source = "TASKS 2\nPOLY f(x, y) = x y;\nEXECUTE\ninput a;\nb = f(a);\nc = h(a);\nd = f(a, g(a));\nINPUTS 1";
        let program = parse(source).unwrap();
        assert_eq!(program.diagnostics.lines(SemanticErrorKind::ArgumentCount), &[5]);
        assert_eq!(program.diagnostics.lines(SemanticErrorKind::UndeclaredPolynomial), &[6, 7]);
        match &program.statements[3] {
            Statement::Assign { rhs, .. } => {
                assert_eq!(rhs.poly, Some(0));
                assert!(matches!(&rhs.args[1], Arg::Call(PolyCall { poly: None, .. })));
            }
            other => panic!("Expected assignment, got {:?}", other),
        }
    }

    #[test]
    fn test_uninitialized_reads() {
        let source = "TASKS 3\nPOLY f = x;\nEXECUTE\noutput v;\na = f(a);\ninput v;\nb = f(f(q));\noutput v;\nINPUTS 1";
        let program = parse(source).unwrap();
        assert_eq!(program.uninitialized, vec![4, 5, 7]);
    }

    #[test]
    fn test_slots_first_seen_order() {
        let program = parse("TASKS 2 POLY f = x; EXECUTE b = f(a); input a; output c; INPUTS 1").unwrap();
        assert_eq!(program.slots.get("b"), Some(0));
        assert_eq!(program.slots.get("a"), Some(1));
        assert_eq!(program.slots.get("c"), Some(2));
    }

    #[test]
    fn test_statement_lines_use_variable_token() {
        let program = parse("TASKS 2 POLY f = x; EXECUTE input\n\n a; INPUTS 1").unwrap();
        assert_eq!(program.statements[0].line(), 3);
    }

    #[test]
    fn test_unknown_tasks_ignored() {
        let program = parse("TASKS 9 2 0 POLY f = x; EXECUTE input a; INPUTS 1").unwrap();
        let tasks: Vec<_> = program.tasks.iter().map(|t| t.number()).collect();
        assert_eq!(tasks, vec![2]);
    }

    #[test]
    fn test_syntax_errors() {
        let bad = [
            "",
            "POLY f = x; EXECUTE input a; INPUTS 1",
            "TASKS POLY f = x; EXECUTE input a; INPUTS 1",
            "TASKS 1 POLY EXECUTE input a; INPUTS 1",
            "TASKS 1 POLY f = ; EXECUTE input a; INPUTS 1",
            "TASKS 1 POLY f = x EXECUTE input a; INPUTS 1",
            "TASKS 1 POLY f = x^y; EXECUTE input a; INPUTS 1",
            "TASKS 1 POLY f() = 1; EXECUTE input a; INPUTS 1",
            "TASKS 1 POLY f = x; EXECUTE INPUTS 1",
            "TASKS 1 POLY f = x; EXECUTE a = f(); INPUTS 1",
            "TASKS 1 POLY f = x; EXECUTE a = b; INPUTS 1",
            "TASKS 1 POLY f = x; EXECUTE input a; INPUTS",
            "TASKS 1 POLY f = x; EXECUTE input a; INPUTS 1 x",
            "TASKS 1 POLY f = -x; EXECUTE input a; INPUTS 1",
        ];
        for source in bad {
            assert!(parse(source).is_err(), "should reject: {}", source);
        }
    }

    #[test]
    fn test_syntax_error_at_eof() {
        let err = parse("TASKS 1 POLY f = x; EXECUTE input a;").unwrap_err();
        assert_eq!(err.kind, SyntaxErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_syntax_error_beats_semantic_error() {
        // Duplicate before the grammar violation still yields a syntax error.
        let result = parse("TASKS 1 POLY f = x; f = x; EXECUTE input a INPUTS 1");
        assert!(result.is_err());
    }

    #[test]
    fn test_nesting_cap() {
        let deep = format!("{}x{}", "(".repeat(40), ")".repeat(40));
        let source = wrap_poly(&format!("f = {};", deep));
        let ok = Parser::from_source(&source).unwrap().with_max_depth(40).parse_program();
        assert_eq!(ok.unwrap().polys[0].header.degree, 1);
        let err = Parser::from_source(&source)
            .unwrap()
            .with_max_depth(39)
            .parse_program()
            .unwrap_err();
        assert_eq!(err.kind, SyntaxErrorKind::NestingTooDeep);
    }

    #[test]
    fn test_default_cap_depth_parses() {
        let depth = DEFAULT_MAX_DEPTH;
        let source = wrap_poly(&format!("f = {}x{};", "(".repeat(depth), ")".repeat(depth)));
        assert_eq!(parse(&source).unwrap().polys[0].header.degree, 1);

        let deeper = wrap_poly(&format!("f = {}x{};", "(".repeat(depth + 1), ")".repeat(depth + 1)));
        assert_eq!(parse(&deeper).unwrap_err().kind, SyntaxErrorKind::NestingTooDeep);
    }

    #[test]
    fn test_nested_call_depth_counts() {
        let source = "TASKS 2 POLY f = x; EXECUTE a = f(f(f(1))); INPUTS 1";
        assert!(Parser::from_source(source).unwrap().with_max_depth(2).parse_program().is_ok());
        assert!(Parser::from_source(source).unwrap().with_max_depth(1).parse_program().is_err());
    }

    #[test]
    fn test_number_value_matches_atoi() {
        assert_eq!(number_value("0"), 0);
        assert_eq!(number_value("007"), 7);
        assert_eq!(number_value("2147483647"), i32::MAX);
        assert_eq!(number_value("4294967296"), 0);
        assert_eq!(number_value("99999999999999999999"), -1);
    }
}
