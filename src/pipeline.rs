//! Task selection and the post-parse pipeline.
//!
//! A parsed program is first gated on its semantic diagnostics. If that
//! passes, the enabled tasks run in a fixed order regardless of how the
//! TASKS section listed them: execute, uninitialized-use warnings,
//! useless-assignment warnings, degree report.

use crate::analysis::{degree, liveness};
use crate::frontend::ast::{Program, Value};
use crate::frontend::semantic;
use crate::interp::Evaluator;
use crate::utils::errors::SemanticError;
use crate::utils::pretty::sorted_line_report;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// One of the five selectable behaviours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Task {
    /// Task 1: semantic checking (always performed)
    SemanticCheck,
    /// Task 2: run the EXECUTE section
    Execute,
    /// Task 3: report reads of uninitialized variables
    UninitializedWarnings,
    /// Task 4: report assignments whose value is never read
    UselessAssignments,
    /// Task 5: report each polynomial's degree
    Degrees,
}

impl Task {
    /// Map a TASKS number to a task.
    pub fn from_number(n: Value) -> Option<Task> {
        match n {
            1 => Some(Task::SemanticCheck),
            2 => Some(Task::Execute),
            3 => Some(Task::UninitializedWarnings),
            4 => Some(Task::UselessAssignments),
            5 => Some(Task::Degrees),
            _ => None,
        }
    }

    /// The number used in the TASKS section.
    pub fn number(&self) -> u8 {
        match self {
            Task::SemanticCheck => 1,
            Task::Execute => 2,
            Task::UninitializedWarnings => 3,
            Task::UselessAssignments => 4,
            Task::Degrees => 5,
        }
    }
}

/// The set of enabled tasks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskSet {
    tasks: BTreeSet<Task>,
}

impl TaskSet {
    /// An empty set. Semantic checking still runs.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from TASKS numbers, ignoring numbers with no task.
    pub fn from_numbers(numbers: &[Value]) -> Self {
        let mut set = Self::new();
        for &n in numbers {
            match Task::from_number(n) {
                Some(task) => set.insert(task),
                None => debug!("ignoring unknown task number {}", n),
            }
        }
        set
    }

    pub fn insert(&mut self, task: Task) {
        self.tasks.insert(task);
    }

    /// Enabled tasks in execution order.
    pub fn iter(&self) -> impl Iterator<Item = Task> + '_ {
        self.tasks.iter().copied()
    }
}

impl FromIterator<Task> for TaskSet {
    fn from_iter<I: IntoIterator<Item = Task>>(iter: I) -> Self {
        Self { tasks: iter.into_iter().collect() }
    }
}

/// Output lines of a successful run, in print order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub lines: Vec<String>,
}

impl Report {
    fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// True when the run printed nothing.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Runs the enabled tasks over a parsed program.
#[derive(Debug, Clone)]
pub struct Pipeline {
    tasks: TaskSet,
}

impl Pipeline {
    /// Create a pipeline for the given task selection.
    pub fn new(tasks: TaskSet) -> Self {
        Self { tasks }
    }

    /// Gate on semantic errors, then run the enabled tasks in order.
    pub fn run(&self, program: &Program) -> Result<Report, SemanticError> {
        semantic::check(program)?;

        let mut report = Report::default();
        for task in self.tasks.iter() {
            info!("running task {}", task.number());
            match task {
                Task::SemanticCheck => {}
                Task::Execute => {
                    let outputs = Evaluator::new(program).execute();
                    report.lines.extend(outputs.iter().map(Value::to_string));
                }
                Task::UninitializedWarnings => {
                    if let Some(line) = sorted_line_report("Warning Code 1", &program.uninitialized) {
                        report.push(line);
                    }
                }
                Task::UselessAssignments => {
                    let useless = liveness::useless_assignments(&program.statements);
                    if let Some(line) = sorted_line_report("Warning Code 2", &useless) {
                        report.push(line);
                    }
                }
                Task::Degrees => report.lines.extend(degree::report_lines(program)),
            }
        }
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_numbers_ignores_unknown() {
        let set = TaskSet::from_numbers(&[5, 9, 2, 0, 2]);
        let tasks: Vec<_> = set.iter().collect();
        assert_eq!(tasks, vec![Task::Execute, Task::Degrees]);
    }

    #[test]
    fn test_task_numbers_round_trip() {
        for n in 1..=5 {
            assert_eq!(Task::from_number(n).map(|t| t.number() as Value), Some(n));
        }
        assert_eq!(Task::from_number(6), None);
    }

    #[test]
    fn test_report_display() {
        let report = Report { lines: vec!["10".into(), "f: 2".into()] };
        assert_eq!(report.to_string(), "10\nf: 2\n");
    }
}
