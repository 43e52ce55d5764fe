//! Static analyses over parsed programs.
//!
//! - [`uninit`]: forward uninitialized-use tracking, driven by the parser
//! - [`liveness`]: backward useless-assignment detection
//! - [`degree`]: degree combinators and the degree report

pub mod degree;
pub mod liveness;
pub mod uninit;

pub use degree::{report_lines, structural_degree};
pub use liveness::useless_assignments;
pub use uninit::InitTracker;
