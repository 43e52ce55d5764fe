//! Semantic diagnostics for the polynomial language.
//!
//! The parser records offending line numbers into four independent
//! categories while it runs. Once the whole program has parsed, [`check`]
//! reports only the highest-priority non-empty category.

use crate::frontend::ast::Program;
use crate::utils::errors::{SemanticError, SemanticErrorKind};
use log::debug;
use serde::{Deserialize, Serialize};

/// Gate a parsed program on its semantic diagnostics.
pub fn check(program: &Program) -> Result<(), SemanticError> {
    program.diagnostics.check()
}

/// Line lists for the four semantic categories, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostics {
    duplicate_declarations: Vec<usize>,
    invalid_parameters: Vec<usize>,
    undeclared_polynomials: Vec<usize>,
    argument_counts: Vec<usize>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an offending line under `kind`.
    pub fn record(&mut self, kind: SemanticErrorKind, line: usize) {
        debug!("{} at line {}", kind.label(), line);
        self.lines_mut(kind).push(line);
    }

    /// Lines recorded for `kind`, unsorted.
    pub fn lines(&self, kind: SemanticErrorKind) -> &[usize] {
        match kind {
            SemanticErrorKind::DuplicateDeclaration => &self.duplicate_declarations,
            SemanticErrorKind::InvalidParameter => &self.invalid_parameters,
            SemanticErrorKind::UndeclaredPolynomial => &self.undeclared_polynomials,
            SemanticErrorKind::ArgumentCount => &self.argument_counts,
        }
    }

    fn lines_mut(&mut self, kind: SemanticErrorKind) -> &mut Vec<usize> {
        match kind {
            SemanticErrorKind::DuplicateDeclaration => &mut self.duplicate_declarations,
            SemanticErrorKind::InvalidParameter => &mut self.invalid_parameters,
            SemanticErrorKind::UndeclaredPolynomial => &mut self.undeclared_polynomials,
            SemanticErrorKind::ArgumentCount => &mut self.argument_counts,
        }
    }

    /// True when no category has any line.
    pub fn is_empty(&self) -> bool {
        SemanticErrorKind::ALL.iter().all(|&k| self.lines(k).is_empty())
    }

    /// The first non-empty category in priority order, lines sorted.
    pub fn first_error(&self) -> Option<SemanticError> {
        SemanticErrorKind::ALL.iter().find_map(|&kind| {
            let lines = self.lines(kind);
            if lines.is_empty() {
                return None;
            }
            let mut lines = lines.to_vec();
            lines.sort_unstable();
            Some(SemanticError { kind, lines })
        })
    }

    /// `Ok` when every category is empty.
    pub fn check(&self) -> Result<(), SemanticError> {
        match self.first_error() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}
