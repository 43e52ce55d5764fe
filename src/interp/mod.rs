//! Interpreter for the EXECUTE section.

pub mod eval;
pub mod memory;

pub use eval::{eval_term_list, Evaluator};
pub use memory::{InputCursor, Memory};
