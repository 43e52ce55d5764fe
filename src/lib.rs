//! # PolyEval - Polynomial Program Analyzer and Interpreter
//!
//! Reads a small polynomial language and, depending on its task list:
//! - rejects malformed programs with a syntax banner
//! - reports the highest-priority semantic error category
//! - executes the EXECUTE section and prints every `output`
//! - warns about uninitialized reads and useless assignments
//! - reports the degree of every declared polynomial
//!
//! ## Architecture
//!
//! ```text
//! Source → Lexer → TokenStream → Parser (+ degrees, diagnostics, uninit) → Pipeline → Report
//! ```
//!
//! ## Example
//!
//! ```rust
//! use polyeval::RunConfig;
//!
//! let source = r#"
//!     TASKS 2 5
//!     POLY f(x) = x^2 + 1;
//!     EXECUTE input a; b = f(a); output b;
//!     INPUTS 3
//! "#;
//!
//! let report = polyeval::run(source, &RunConfig::default()).unwrap();
//! assert_eq!(report.lines, vec!["10", "f: 2"]);
//! ```

#![warn(clippy::all)]

pub mod frontend;
pub mod analysis;
pub mod interp;
pub mod pipeline;
pub mod utils;

// Re-export commonly used types
pub mod prelude {
    //! Convenient re-exports of commonly used types and traits.

    pub use crate::frontend::ast::*;
    pub use crate::frontend::{Diagnostics, Lexer, Parser, Token, TokenKind, TokenStream};
    pub use crate::analysis::{structural_degree, useless_assignments, InitTracker};
    pub use crate::interp::{Evaluator, Memory};
    pub use crate::pipeline::{Pipeline, Report, Task, TaskSet};
    pub use crate::utils::errors::*;
    pub use crate::RunConfig;
}

use frontend::ast::Program;
use log::{debug, info};
use pipeline::{Pipeline, Report, TaskSet};
use utils::errors::PolyResult;

/// Configuration for a run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Cap on parenthesis and nested-call depth
    pub max_nesting_depth: usize,
    /// Replaces the program's own TASKS list when set
    pub tasks: Option<TaskSet>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            max_nesting_depth: frontend::DEFAULT_MAX_DEPTH,
            tasks: None,
        }
    }
}

impl RunConfig {
    pub fn with_max_depth(mut self, max_nesting_depth: usize) -> Self {
        self.max_nesting_depth = max_nesting_depth;
        self
    }

    pub fn with_tasks(mut self, tasks: TaskSet) -> Self {
        self.tasks = Some(tasks);
        self
    }
}

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Parse source code into a program. Semantic diagnostics are recorded on
/// the program but not reported.
pub fn parse(source: &str, config: &RunConfig) -> PolyResult<Program> {
    info!("Parsing...");
    frontend::parse(source, config.max_nesting_depth)
}

/// Parse, gate on semantic errors, and run the enabled tasks.
pub fn run(source: &str, config: &RunConfig) -> PolyResult<Report> {
    let program = parse(source, config)?;
    let tasks = match &config.tasks {
        Some(tasks) => {
            debug!("TASKS section overridden by configuration");
            tasks.clone()
        }
        None => program.tasks.clone(),
    };
    info!("Running...");
    let report = Pipeline::new(tasks).run(&program)?;
    debug!("report has {} lines", report.lines.len());
    Ok(report)
}
