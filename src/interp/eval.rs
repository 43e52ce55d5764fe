//! Tree-walking evaluator for the EXECUTE section.
//!
//! Each [`Evaluator::execute`] call starts from fresh zeroed memory and
//! the start of the INPUTS list, so repeated runs print the same values.

use crate::frontend::ast::{
    Arg, Mono, MonoList, PolyCall, Primary, Program, Statement, Term, TermList, Value,
};
use crate::interp::memory::{InputCursor, Memory};
use log::{debug, trace};

/// Executes a parsed, semantically valid program.
pub struct Evaluator<'p> {
    program: &'p Program,
}

impl<'p> Evaluator<'p> {
    pub fn new(program: &'p Program) -> Self {
        Self { program }
    }

    /// Run every statement in order and return the `output` values.
    pub fn execute(&self) -> Vec<Value> {
        let mut memory = Memory::new(self.program.slots.len());
        let mut inputs = InputCursor::new(&self.program.inputs);
        let mut outputs = Vec::new();

        for stmt in &self.program.statements {
            trace!("exec line {}: {}", stmt.line(), stmt);
            match stmt {
                Statement::Input { var } => memory.set(var.slot, inputs.read()),
                Statement::Output { var } => outputs.push(memory.get(var.slot)),
                Statement::Assign { lhs, rhs } => {
                    let value = self.eval_call(rhs, &memory);
                    memory.set(lhs.slot, value);
                }
            }
        }

        debug!(
            "executed {} statements, {} outputs, {} inputs unused",
            self.program.statements.len(),
            outputs.len(),
            inputs.remaining()
        );
        outputs
    }

    /// Evaluate a call site against the current memory.
    ///
    /// Calls to an unresolved polynomial evaluate to 0.
    pub fn eval_call(&self, call: &PolyCall, memory: &Memory) -> Value {
        let Some(index) = call.poly else {
            return 0;
        };
        let args: Vec<Value> = call
            .args
            .iter()
            .map(|arg| match arg {
                Arg::Num(n) => *n,
                Arg::Var(var) => memory.get(var.slot),
                Arg::Call(nested) => self.eval_call(nested, memory),
            })
            .collect();
        self.eval_poly(index, &args)
    }

    /// Evaluate polynomial `index` with `args` bound to its parameters by
    /// position. An out-of-range index evaluates to 0.
    pub fn eval_poly(&self, index: usize, args: &[Value]) -> Value {
        match self.program.polys.get(index) {
            Some(poly) => eval_term_list(&poly.body, args),
            None => 0,
        }
    }
}

/// Evaluate a body with positional arguments. Missing arguments and
/// unresolved parameters read as 0.
pub fn eval_term_list(list: &TermList, args: &[Value]) -> Value {
    list.terms.iter().fold(0, |acc: Value, signed| {
        let value = eval_term(&signed.term, args);
        acc.wrapping_add(signed.sign.factor().wrapping_mul(value))
    })
}

fn eval_term(term: &Term, args: &[Value]) -> Value {
    match &term.monomials {
        Some(monos) => term.coefficient.wrapping_mul(eval_mono_list(monos, args)),
        None => term.coefficient,
    }
}

fn eval_mono_list(list: &MonoList, args: &[Value]) -> Value {
    list.monos
        .iter()
        .fold(1, |acc: Value, mono| acc.wrapping_mul(eval_mono(mono, args)))
}

fn eval_mono(mono: &Mono, args: &[Value]) -> Value {
    // wrapping_pow(_, 0) is 1 for every base, 0 included.
    eval_primary(&mono.primary, args).wrapping_pow(mono.exponent)
}

fn eval_primary(primary: &Primary, args: &[Value]) -> Value {
    match primary {
        Primary::Param { index: Some(i), .. } => args.get(*i).copied().unwrap_or(0),
        Primary::Param { index: None, .. } => 0,
        Primary::Group(inner) => eval_term_list(inner, args),
    }
}
