//! Forward uninitialized-use tracking.
//!
//! The parser drives this in program order: `input` and assignments mark
//! a variable initialized, while `output` and bare-variable call arguments
//! are reads. There is no control flow, so one forward pass is exact.

use log::trace;
use std::collections::HashSet;

/// Which variables have been written so far, and which reads came first.
#[derive(Debug, Clone, Default)]
pub struct InitTracker {
    initialized: HashSet<String>,
    warnings: Vec<usize>,
}

impl InitTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// `name` holds a value from here on.
    pub fn mark_initialized(&mut self, name: &str) {
        if !self.initialized.contains(name) {
            self.initialized.insert(name.to_string());
        }
    }

    /// Record a read of `name` on `line`; warns if nothing was written yet.
    pub fn check_read(&mut self, name: &str, line: usize) {
        if !self.initialized.contains(name) {
            trace!("read of uninitialized '{}' at line {}", name, line);
            self.warnings.push(line);
        }
    }

    /// Warning lines in recording order.
    pub fn into_warnings(self) -> Vec<usize> {
        self.warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_before_write_warns() {
        let mut tracker = InitTracker::new();
        tracker.check_read("v", 3);
        tracker.mark_initialized("v");
        tracker.check_read("v", 4);
        assert_eq!(tracker.into_warnings(), vec![3]);
    }

    #[test]
    fn test_each_read_is_reported() {
        let mut tracker = InitTracker::new();
        tracker.check_read("a", 2);
        tracker.check_read("a", 2);
        tracker.check_read("b", 5);
        assert_eq!(tracker.into_warnings(), vec![2, 2, 5]);
    }
}
