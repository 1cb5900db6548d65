//! Clause representation and literal elimination (§4.2).

use crate::error::DpllError;
use crate::lit::Literal;

/// An ordered disjunction of literals. An empty clause is unsatisfiable; a
/// clause of length one is a unit clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clause(Vec<Literal>);

impl Clause {
    /// Builds a clause from already-validated literals, preserving order.
    pub(crate) fn new(literals: Vec<Literal>) -> Self {
        Clause(literals)
    }

    /// Validates a raw slice of DIMACS-style integers against `num_vars` and
    /// builds a clause from them.
    pub(crate) fn from_raw(values: &[i32], num_vars: u32) -> Result<Self, DpllError> {
        let literals = values
            .iter()
            .map(|&v| Literal::from_raw(v, num_vars))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Clause(literals))
    }

    pub fn literals(&self) -> &[Literal] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the clause's sole literal iff it is a unit clause.
    pub fn unit(&self) -> Option<Literal> {
        match self.0.as_slice() {
            [only] => Some(*only),
            _ => None,
        }
    }

    /// Eliminates `lit` from this clause (§4.2).
    ///
    /// Returns `None` if the clause is satisfied by `lit` (it contains `lit`
    /// itself); otherwise returns `Some(clause)` with every occurrence of
    /// `lit.not()` removed and all other literals kept in original order.
    pub fn eliminate_literal(&self, lit: Literal) -> Option<Clause> {
        let mut kept = Vec::with_capacity(self.0.len());
        for &k in &self.0 {
            if k == lit {
                return None;
            }
            if k.is_same_variable(lit) {
                // k must be lit.not(): resolves to false, drop it.
                continue;
            }
            kept.push(k);
        }
        Some(Clause(kept))
    }
}
