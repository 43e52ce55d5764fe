//! Backward liveness over the statement list.
//!
//! A write (input or assignment) is useless when the variable is not live
//! right after it, meaning no later statement reads the value before it is
//! overwritten or the program ends.

use crate::frontend::ast::Statement;
use log::trace;
use std::collections::HashSet;

/// Lines of useless writes, in reverse program order.
pub fn useless_assignments(statements: &[Statement]) -> Vec<usize> {
    let mut live: HashSet<&str> = HashSet::new();
    let mut useless = Vec::new();

    for stmt in statements.iter().rev() {
        match stmt {
            Statement::Output { var } => {
                live.insert(&var.name);
            }
            Statement::Assign { lhs, rhs } => {
                // Operands of a dead assignment are not reads.
                if !live.remove(lhs.name.as_str()) {
                    trace!("useless assignment to '{}' at line {}", lhs.name, lhs.line);
                    useless.push(lhs.line);
                } else {
                    live.extend(rhs.variables().into_iter().map(|v| v.name.as_str()));
                }
            }
            Statement::Input { var } => {
                if !live.remove(var.name.as_str()) {
                    trace!("useless input into '{}' at line {}", var.name, var.line);
                    useless.push(var.line);
                }
            }
        }
    }

    useless
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontend::ast::{Arg, PolyCall, VarRef};

    fn var(name: &str, line: usize) -> VarRef {
        VarRef { name: name.into(), slot: 0, line }
    }

    fn assign(lhs: &str, line: usize, args: &[&str]) -> Statement {
        Statement::Assign {
            lhs: var(lhs, line),
            rhs: PolyCall {
                name: "f".into(),
                poly: Some(0),
                args: args.iter().map(|a| Arg::Var(var(a, line))).collect(),
                line,
            },
        }
    }

    #[test]
    fn test_overwritten_assignment_is_useless() {
        let stmts = vec![
            assign("a", 1, &[]),
            assign("a", 2, &[]),
            Statement::Output { var: var("a", 3) },
        ];
        assert_eq!(useless_assignments(&stmts), vec![1]);
    }

    #[test]
    fn test_reads_through_assignment_chain() {
        let stmts = vec![
            Statement::Input { var: var("x", 1) },
            assign("y", 2, &["x"]),
            Statement::Output { var: var("y", 3) },
        ];
        assert!(useless_assignments(&stmts).is_empty());
    }

    #[test]
    fn test_dead_assignment_does_not_keep_operands_alive() {
        let stmts = vec![
            Statement::Input { var: var("x", 1) },
            assign("y", 2, &["x"]),
        ];
        assert_eq!(useless_assignments(&stmts), vec![2, 1]);
    }

    #[test]
    fn test_self_reference_keeps_previous_write() {
        let stmts = vec![
            Statement::Input { var: var("a", 1) },
            assign("a", 2, &["a"]),
            Statement::Output { var: var("a", 3) },
        ];
        assert!(useless_assignments(&stmts).is_empty());
    }

    #[test]
    fn test_unread_input_is_useless() {
        let stmts = vec![
            Statement::Input { var: var("a", 1) },
            Statement::Input { var: var("a", 2) },
            Statement::Output { var: var("a", 3) },
        ];
        assert_eq!(useless_assignments(&stmts), vec![1]);
    }
}
