//! Polynomial degree computation and reporting.
//!
//! The parser folds these combinators bottom-up as it builds each body;
//! [`structural_degree`] recomputes the same value from a finished tree.

use crate::frontend::ast::{Mono, MonoList, Primary, Program, Term, TermList};

/// An identifier factor has degree 1.
pub const PARAM_DEGREE: u32 = 1;

/// Degree of `base^exponent`.
pub fn power_degree(base: u32, exponent: u32) -> u32 {
    base.saturating_mul(exponent)
}

/// Degree of a product: the factors' degrees add.
pub fn product_degree(acc: u32, factor: u32) -> u32 {
    acc.saturating_add(factor)
}

/// Degree of a sum: the largest summand degree.
pub fn sum_degree(acc: u32, term: u32) -> u32 {
    acc.max(term)
}

/// Recompute the degree of a body from its tree.
pub fn structural_degree(body: &TermList) -> u32 {
    body.terms
        .iter()
        .map(|signed| term_degree(&signed.term))
        .fold(0, sum_degree)
}

fn term_degree(term: &Term) -> u32 {
    term.monomials.as_ref().map_or(0, mono_list_degree)
}

fn mono_list_degree(list: &MonoList) -> u32 {
    list.monos.iter().map(mono_degree).fold(0, product_degree)
}

fn mono_degree(mono: &Mono) -> u32 {
    let base = match &mono.primary {
        Primary::Param { .. } => PARAM_DEGREE,
        Primary::Group(inner) => structural_degree(inner),
    };
    power_degree(base, mono.exponent)
}

/// `name: degree` lines in declaration order.
pub fn report_lines(program: &Program) -> Vec<String> {
    program
        .degree_report()
        .into_iter()
        .map(|(name, degree)| format!("{}: {}", name, degree))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontend::ast::Sign;

    fn x(exponent: u32) -> Mono {
        Mono { primary: Primary::Param { name: "x".into(), index: Some(0) }, exponent }
    }

    fn term(monos: Vec<Mono>) -> Term {
        Term { coefficient: 1, monomials: Some(MonoList { monos }) }
    }

    #[test]
    fn test_sum_takes_max_product_adds() {
        // 2 x^3 + x x - 5
        let mut body = TermList::new(Term { coefficient: 2, ..term(vec![x(3)]) });
        body.push(Sign::Plus, term(vec![x(1), x(1)]));
        body.push(Sign::Minus, Term::constant(5));
        assert_eq!(structural_degree(&body), 3);
    }

    #[test]
    fn test_group_power_multiplies() {
        // (x^2 + 1)^3 x
        let mut inner = TermList::new(term(vec![x(2)]));
        inner.push(Sign::Plus, Term::constant(1));
        let group = Mono { primary: Primary::Group(Box::new(inner)), exponent: 3 };
        let body = TermList::new(term(vec![group, x(1)]));
        assert_eq!(structural_degree(&body), 7);
    }

    #[test]
    fn test_zero_exponent_and_constants() {
        assert_eq!(structural_degree(&TermList::new(term(vec![x(0)]))), 0);
        assert_eq!(structural_degree(&TermList::new(Term::constant(4))), 0);
    }

    #[test]
    fn test_degree_saturates() {
        assert_eq!(power_degree(u32::MAX, 2), u32::MAX);
        assert_eq!(product_degree(u32::MAX, 1), u32::MAX);
    }
}
