//! Abstract Syntax Tree (AST) for the polynomial language.
//!
//! A parsed [`Program`] owns the polynomial table, where each entry pairs
//! a header with the body tree it was declared with, and the ordered
//! EXECUTE statements. Trees are strict ownership trees; nothing is
//! shared and nothing is mutated after parsing.

use crate::frontend::semantic::Diagnostics;
use crate::pipeline::TaskSet;
use crate::utils::pretty::format_list;
use serde::{Deserialize, Serialize};
use string_interner::{backend::StringBackend, DefaultSymbol, StringInterner, Symbol};
use std::fmt;

/// Runtime value type. Arithmetic wraps on overflow.
pub type Value = i32;

/// A complete parsed program.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Program {
    /// Tasks listed in the TASKS section
    pub tasks: TaskSet,
    /// Declared polynomials in declaration order, duplicates excluded
    pub polys: Vec<Polynomial>,
    /// EXECUTE statements in program order
    pub statements: Vec<Statement>,
    /// Values from the INPUTS section
    pub inputs: Vec<Value>,
    /// Variable name to memory slot mapping
    pub slots: SlotTable,
    /// Semantic diagnostics collected while parsing
    pub diagnostics: Diagnostics,
    /// Lines where a variable was read before any input or assignment
    pub uninitialized: Vec<usize>,
}

impl Program {
    /// Find a polynomial by name.
    pub fn find_poly(&self, name: &str) -> Option<&Polynomial> {
        self.polys.iter().find(|p| p.header.name == name)
    }

    /// `(name, degree)` pairs in declaration order.
    pub fn degree_report(&self) -> Vec<(&str, u32)> {
        self.polys
            .iter()
            .map(|p| (p.header.name.as_str(), p.header.degree))
            .collect()
    }
}

/// Name, formal parameters and computed degree of a declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolyHeader {
    /// Polynomial name
    pub name: String,
    /// Formal parameters, by position
    pub params: Vec<String>,
    /// Line of the name token
    pub line: usize,
    /// Total degree of the body
    pub degree: u32,
}

impl PolyHeader {
    /// Position of a parameter name. The first match wins when a name is
    /// repeated.
    pub fn param_index(&self, name: &str) -> Option<usize> {
        self.params.iter().position(|p| p == name)
    }

    /// Number of declared parameters.
    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

impl fmt::Display for PolyHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name, self.params.join(", "))
    }
}

/// A stored polynomial: header plus the body it was declared with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Polynomial {
    pub header: PolyHeader,
    pub body: TermList,
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {};", self.header, self.body)
    }
}

/// Sign attached to a term in a sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sign {
    Plus,
    Minus,
}

impl Sign {
    /// `+1` or `-1`.
    pub fn factor(&self) -> Value {
        match self {
            Sign::Plus => 1,
            Sign::Minus => -1,
        }
    }
}

/// A term together with the sign it is added with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedTerm {
    pub sign: Sign,
    pub term: Term,
}

/// A sum of terms. The first term is always [`Sign::Plus`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermList {
    pub terms: Vec<SignedTerm>,
}

impl TermList {
    /// A sum with a single positive term.
    pub fn new(first: Term) -> Self {
        Self { terms: vec![SignedTerm { sign: Sign::Plus, term: first }] }
    }

    /// Append a term with the given sign.
    pub fn push(&mut self, sign: Sign, term: Term) {
        self.terms.push(SignedTerm { sign, term });
    }
}

impl fmt::Display for TermList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, signed) in self.terms.iter().enumerate() {
            match (i, signed.sign) {
                (0, _) => {}
                (_, Sign::Plus) => f.write_str(" + ")?,
                (_, Sign::Minus) => f.write_str(" - ")?,
            }
            write!(f, "{}", signed.term)?;
        }
        Ok(())
    }
}

/// A coefficient times an optional product of monomials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    /// Leading coefficient; 1 when the term starts with a factor
    pub coefficient: Value,
    /// Product of factors; `None` for a bare constant
    pub monomials: Option<MonoList>,
}

impl Term {
    /// A constant term.
    pub fn constant(coefficient: Value) -> Self {
        Self { coefficient, monomials: None }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.monomials {
            None => write!(f, "{}", self.coefficient),
            Some(monos) if self.coefficient == 1 => write!(f, "{}", monos),
            Some(monos) => write!(f, "{} {}", self.coefficient, monos),
        }
    }
}

/// Juxtaposed factors, multiplied together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonoList {
    pub monos: Vec<Mono>,
}

impl fmt::Display for MonoList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_list(&self.monos, " "))
    }
}

/// A factor raised to a non-negative integer power.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mono {
    pub primary: Primary,
    pub exponent: u32,
}

impl fmt::Display for Mono {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.primary)?;
        if self.exponent != 1 {
            write!(f, "^{}", self.exponent)?;
        }
        Ok(())
    }
}

/// A parameter reference or a parenthesised sub-expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Primary {
    /// Parameter reference; `index` is `None` when the name is not a
    /// parameter of the enclosing polynomial
    Param { name: String, index: Option<usize> },
    /// `( TermList )`
    Group(Box<TermList>),
}

impl fmt::Display for Primary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Primary::Param { name, .. } => f.write_str(name),
            Primary::Group(inner) => write!(f, "({})", inner),
        }
    }
}

/// A variable occurrence resolved to its memory slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VarRef {
    pub name: String,
    pub slot: usize,
    pub line: usize,
}

/// A polynomial call site in the EXECUTE section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolyCall {
    /// Called name as written
    pub name: String,
    /// Index into the polynomial table, `None` if undeclared
    pub poly: Option<usize>,
    /// Actual arguments
    pub args: Vec<Arg>,
    /// Line of the called name
    pub line: usize,
}

impl PolyCall {
    /// Every variable read by this call, nested calls included, in
    /// left-to-right order.
    pub fn variables(&self) -> Vec<&VarRef> {
        let mut out = Vec::new();
        self.collect_variables(&mut out);
        out
    }

    fn collect_variables<'a>(&'a self, out: &mut Vec<&'a VarRef>) {
        for arg in &self.args {
            match arg {
                Arg::Num(_) => {}
                Arg::Var(var) => out.push(var),
                Arg::Call(nested) => nested.collect_variables(out),
            }
        }
    }
}

impl fmt::Display for PolyCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name, format_list(&self.args, ", "))
    }
}

/// An actual argument of a call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Arg {
    Num(Value),
    Var(VarRef),
    Call(PolyCall),
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Num(n) => write!(f, "{}", n),
            Arg::Var(var) => f.write_str(&var.name),
            Arg::Call(call) => write!(f, "{}", call),
        }
    }
}

/// An EXECUTE statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Statement {
    /// `input ID;`
    Input { var: VarRef },
    /// `output ID;`
    Output { var: VarRef },
    /// `ID = PolyCall;`
    Assign { lhs: VarRef, rhs: PolyCall },
}

impl Statement {
    /// Line of the statement's variable token.
    pub fn line(&self) -> usize {
        match self {
            Statement::Input { var } | Statement::Output { var } => var.line,
            Statement::Assign { lhs, .. } => lhs.line,
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Input { var } => write!(f, "input {};", var.name),
            Statement::Output { var } => write!(f, "output {};", var.name),
            Statement::Assign { lhs, rhs } => write!(f, "{} = {};", lhs.name, rhs),
        }
    }
}

type Backend = StringBackend<DefaultSymbol>;

/// Stable slot numbers, assigned to variable names on first sight.
///
/// Slots are the interner's dense symbol indices. Serializes as the list
/// of names in slot order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct SlotTable {
    interner: StringInterner<Backend>,
}

impl SlotTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self { interner: StringInterner::new() }
    }

    /// Slot of `name`, allocating the next free one if it is new.
    pub fn slot_for(&mut self, name: &str) -> usize {
        self.interner.get_or_intern(name).to_usize()
    }

    /// Slot of an already seen name.
    pub fn get(&self, name: &str) -> Option<usize> {
        self.interner.get(name).map(|sym| sym.to_usize())
    }

    /// Name owning a slot.
    pub fn name(&self, slot: usize) -> Option<&str> {
        let sym = DefaultSymbol::try_from_usize(slot)?;
        self.interner.resolve(sym)
    }

    /// Number of allocated slots.
    pub fn len(&self) -> usize {
        self.interner.len()
    }

    /// True when no variable has been seen.
    pub fn is_empty(&self) -> bool {
        self.interner.is_empty()
    }
}

impl From<Vec<String>> for SlotTable {
    fn from(names: Vec<String>) -> Self {
        let mut table = SlotTable::new();
        for name in &names {
            table.slot_for(name);
        }
        table
    }
}

impl From<SlotTable> for Vec<String> {
    fn from(table: SlotTable) -> Self {
        (0..table.len())
            .filter_map(|slot| table.name(slot).map(str::to_string))
            .collect()
    }
}
