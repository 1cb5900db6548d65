//! The finite-domain constraint layer (§4.7): one-hot encodes integer
//! variables, compiles `distinct` / `equal_to_constant` into CNF, and wraps
//! the SAT result so callers decode integer values instead of literals.

use itertools::Itertools;

use crate::clause::Clause;
use crate::constraints::Constraints;
use crate::dpll::DpllSolver;
use crate::error::DpllError;
use crate::intvar::IntVar;
use crate::model::Model;
use crate::result::SolveResult;

/// Accumulates finite-domain constraints on top of a [`Constraints`] builder
/// and compiles them to CNF on the fly.
#[derive(Debug, Default)]
pub struct ConstraintSolver {
    constraints: Constraints,
}

impl ConstraintSolver {
    pub fn new() -> Self {
        ConstraintSolver::default()
    }

    /// Allocates a fresh [`IntVar`] over the inclusive domain `[from, to]`.
    ///
    /// Posts one at-least-one clause over the `to - from + 1` one-hot
    /// literals and a pairwise at-most-one clause for every pair of them.
    pub fn new_variable(&mut self, from: i64, to: i64) -> Result<IntVar, DpllError> {
        if from > to {
            return Err(DpllError::InvalidRange { from, to });
        }
        let size = (to - from + 1) as usize;
        let values = (0..size)
            .map(|_| self.constraints.new_literal())
            .collect::<Result<Vec<_>, _>>()?;

        self.constraints.add_clause(Clause::new(values.clone()));
        for (a, b) in values.iter().copied().tuple_combinations() {
            self.constraints
                .add_clause(Clause::new(vec![a.not(), b.not()]));
        }

        Ok(IntVar::new(values, from))
    }

    /// Requires every `IntVar` in `vars` to take a pairwise distinct value.
    ///
    /// Every IntVar must share the same `offset` and `size`, else
    /// [`DpllError::InvalidSort`]. No clause is posted for an empty or
    /// singleton input; there is no ordering constraint across domain
    /// indices.
    pub fn distinct(&mut self, vars: &[IntVar]) -> Result<(), DpllError> {
        let Some((first, rest)) = vars.split_first() else {
            return Ok(());
        };
        for other in rest {
            if other.offset() != first.offset() || other.size() != first.size() {
                return Err(DpllError::InvalidSort {
                    expected_offset: first.offset(),
                    expected_size: first.size(),
                    actual_offset: other.offset(),
                    actual_size: other.size(),
                });
            }
        }

        for i in 0..first.size() {
            for (a, b) in vars.iter().tuple_combinations() {
                self.constraints.add_clause(Clause::new(vec![
                    a.values()[i].not(),
                    b.values()[i].not(),
                ]));
            }
        }
        Ok(())
    }

    /// Forces `var` to take the concrete value `k`.
    pub fn equal_to_constant(&mut self, var: &IntVar, k: i64) -> Result<(), DpllError> {
        let lit = var.literal_for(k).ok_or(DpllError::InvalidConstant {
            value: k,
            offset: var.offset(),
            top: var.offset() + var.size() as i64 - 1,
        })?;
        self.constraints.add_clause(Clause::new(vec![lit]));
        Ok(())
    }

    /// Hands the accumulated builder to the DPLL solver and returns the
    /// decoded result.
    ///
    /// This resets the internal builder to a fresh, empty `Constraints` on
    /// entry (`std::mem::take`), matching the distilled spec's explicit
    /// callout: any `IntVar`s minted before this call reference literals
    /// that belonged to the builder just consumed, not the fresh one now in
    /// its place. Calling `new_variable`/`distinct`/`equal_to_constant`
    /// again after `solve` starts an unrelated, independent CNF instance —
    /// this is preserved rather than silently replaced with an
    /// accumulate-forever builder.
    pub fn solve(&mut self) -> CspResult {
        let constraints = std::mem::take(&mut self.constraints);
        let mut solver = DpllSolver::init(constraints);
        match solver.solve() {
            SolveResult::Sat(model) => CspResult::Sat(IntModel(model)),
            SolveResult::Unsat => CspResult::Unsat,
        }
    }
}

/// The outcome of [`ConstraintSolver::solve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CspResult {
    Sat(IntModel),
    Unsat,
}

impl CspResult {
    pub fn is_sat(&self) -> bool {
        matches!(self, CspResult::Sat(_))
    }

    pub fn model(&self) -> Option<&IntModel> {
        match self {
            CspResult::Sat(model) => Some(model),
            CspResult::Unsat => None,
        }
    }
}

/// A [`Model`] wrapped so callers read back integer values rather than raw
/// literal assignments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntModel(Model);

impl IntModel {
    /// Decodes `var`'s concrete value: `offset + i` where `i` is the unique
    /// index with `values[i]` assigned true.
    ///
    /// Panics if the one-hot invariant is violated (no true literal, or more
    /// than one) — that would mean the underlying SAT core returned an
    /// unsound model.
    pub fn get_value(&self, var: &IntVar) -> i64 {
        let mut found = None;
        for (i, &lit) in var.values().iter().enumerate() {
            if self.0.get_assignment(lit.variable()) {
                assert!(
                    found.is_none(),
                    "one-hot invariant violated: more than one value literal is true"
                );
                found = Some(i);
            }
        }
        let i = found.expect("one-hot invariant violated: no value literal is true");
        var.offset() + i as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn s1_single_binary_variable() {
        let mut solver = ConstraintSolver::new();
        let v = solver.new_variable(0, 1).unwrap();
        let result = solver.solve();
        assert!(result.is_sat());
        let value = result.model().unwrap().get_value(&v);
        assert!(value == 0 || value == 1);
    }

    #[test]
    fn s2_distinct_four_over_zero_to_three_is_sat() {
        let mut solver = ConstraintSolver::new();
        let vars: Vec<IntVar> = (0..4).map(|_| solver.new_variable(0, 3).unwrap()).collect();
        solver.distinct(&vars).unwrap();
        let result = solver.solve();
        assert!(result.is_sat());
        let model = result.model().unwrap();
        let values: Vec<i64> = vars.iter().map(|v| model.get_value(v)).collect();
        for i in 0..values.len() {
            for j in (i + 1)..values.len() {
                assert_ne!(values[i], values[j]);
            }
        }
    }

    #[test]
    fn s3_distinct_pigeonhole_is_unsat() {
        let mut solver = ConstraintSolver::new();
        let vars: Vec<IntVar> = (0..5).map(|_| solver.new_variable(0, 3).unwrap()).collect();
        solver.distinct(&vars).unwrap();
        assert_eq!(solver.solve(), CspResult::Unsat);
    }

    #[test]
    fn round_trip_equal_to_constant() {
        let mut solver = ConstraintSolver::new();
        let v = solver.new_variable(-2, 5).unwrap();
        solver.equal_to_constant(&v, 3).unwrap();
        let result = solver.solve();
        assert!(result.is_sat());
        assert_eq!(result.model().unwrap().get_value(&v), 3);
    }

    #[test]
    fn new_variable_rejects_inverted_range() {
        let mut solver = ConstraintSolver::new();
        assert_eq!(
            solver.new_variable(5, 2).unwrap_err(),
            DpllError::InvalidRange { from: 5, to: 2 }
        );
    }

    #[test]
    fn equal_to_constant_rejects_out_of_domain_value() {
        let mut solver = ConstraintSolver::new();
        let v = solver.new_variable(0, 3).unwrap();
        assert!(solver.equal_to_constant(&v, 4).is_err());
        assert!(solver.equal_to_constant(&v, -1).is_err());
    }

    #[test]
    fn distinct_rejects_mismatched_domains() {
        let mut solver = ConstraintSolver::new();
        let a = solver.new_variable(0, 3).unwrap();
        let b = solver.new_variable(0, 4).unwrap();
        assert!(solver.distinct(&[a, b]).is_err());
    }

    #[test]
    fn distinct_on_singleton_posts_no_clause_and_stays_sat() {
        let mut solver = ConstraintSolver::new();
        let a = solver.new_variable(0, 3).unwrap();
        solver.distinct(std::slice::from_ref(&a)).unwrap();
        assert!(solver.solve().is_sat());
    }

    #[test]
    fn solve_resets_builder_for_reuse() {
        let mut solver = ConstraintSolver::new();
        let a = solver.new_variable(0, 1).unwrap();
        solver.equal_to_constant(&a, 1).unwrap();
        assert!(solver.solve().is_sat());

        // The builder consumed by the first `solve()` is gone; constraints
        // posted on `a` afterwards reference stale literals, so this second
        // solve starts a fresh, independent, and trivially satisfiable
        // instance (no clauses posted against the new empty builder).
        let result = solver.solve();
        assert!(result.is_sat());
    }
}
