//! Utility modules shared by every phase:
//! - Error types
//! - Source location tracking
//! - Report-line formatting

pub mod errors;
pub mod location;
pub mod pretty;

// Re-exports
pub use errors::*;
pub use location::{SourceLocation, Span};
pub use pretty::{format_list, line_report, sorted_line_report};
