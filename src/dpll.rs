//! The DPLL solver (§4.5): drives unit propagation, pure-literal
//! elimination, branching and chronological backtracking over a stack of
//! [`Step`]s.

use log::{debug, trace};

use crate::constraints::Constraints;
use crate::lit::{Literal, Variable};
use crate::model::Model;
use crate::result::SolveResult;
use crate::step::{PureScratch, Step, StepStatus};

/// Drives a DPLL search to completion. Consumes a [`Constraints`] builder at
/// construction, adopting its clause list into the root [`Step`].
pub struct DpllSolver {
    stack: Vec<Step>,
    num_vars: u32,
    /// Scratch buffer for `choose_literal`, reused every iteration.
    used_variables: Vec<bool>,
    /// Scratch buffer for `Step::pure_literal`, reused every iteration.
    pure_literal_state: Vec<PureScratch>,
}

impl DpllSolver {
    /// Consumes `constraints`, transferring its clauses and variable count
    /// into the root step.
    pub fn init(constraints: Constraints) -> Self {
        let (clauses, num_vars) = constraints.into_parts();
        DpllSolver {
            stack: vec![Step::root(clauses)],
            num_vars,
            used_variables: vec![false; num_vars as usize],
            pure_literal_state: vec![PureScratch::new(); num_vars as usize],
        }
    }

    /// Runs the search to completion.
    pub fn solve(&mut self) -> SolveResult {
        loop {
            let Some(top) = self.stack.last() else {
                return SolveResult::Unsat;
            };

            match top.is_sat() {
                Some(StepStatus::Sat) => {
                    trace!("step satisfied at depth {}", self.stack.len());
                    return SolveResult::Sat(Model::from_stack(self.num_vars, &self.stack));
                }
                Some(StepStatus::Unsat) => {
                    if top.decision_level() == 0 {
                        trace!("conflict at decision level 0, search exhausted");
                        return SolveResult::Unsat;
                    }
                    debug!(
                        "backtrack: conflict at decision level {}",
                        top.decision_level()
                    );
                    if !self.backtrack() {
                        return SolveResult::Unsat;
                    }
                }
                None => {
                    if let Some(l) = top.unit_propagation() {
                        trace!("unit propagation: {l}");
                        let next = top.eliminate_literal(l, false);
                        self.stack.push(next);
                        continue;
                    }
                    if let Some(l) = top.pure_literal(&mut self.pure_literal_state) {
                        trace!("pure literal: {l}");
                        let next = top.eliminate_literal(l, false);
                        self.stack.push(next);
                        continue;
                    }
                    let l = Self::choose_literal(&self.stack, self.num_vars, &mut self.used_variables);
                    trace!("branching decision: {l}");
                    let next = top.eliminate_literal(l, true);
                    self.stack.push(next);
                }
            }
        }
    }

    /// Marks every variable that already appears as a decision anywhere on
    /// the stack, then returns the positive literal of the lowest-indexed
    /// unmarked variable.
    fn choose_literal(stack: &[Step], num_vars: u32, used_variables: &mut [bool]) -> Literal {
        used_variables.fill(false);
        for step in stack {
            if let Some(decision) = step.decision() {
                used_variables[decision.index()] = true;
            }
        }
        for index in 0..num_vars as usize {
            if !used_variables[index] {
                return Variable::from_index(index).pos();
            }
        }
        unreachable!(
            "choose_literal called with every variable already decided; \
             the preceding is_sat() check should have returned Sat"
        );
    }

    /// Pops steps until one that was freely chosen with a positive decision
    /// is found; pushes its negated-polarity continuation and returns
    /// `true`. Returns `false` if the stack was exhausted instead.
    fn backtrack(&mut self) -> bool {
        while let Some(popped) = self.stack.pop() {
            if popped.freely_chosen() && popped.decision().unwrap().is_positive() {
                let flipped = popped.decision().unwrap().not();
                let new_top = self
                    .stack
                    .last()
                    .expect("a freely-chosen step always has a parent on the stack");
                debug!("retrying decision level {} with {flipped}", new_top.decision_level() + 1);
                let next = new_top.eliminate_literal(flipped, true);
                self.stack.push(next);
                return true;
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraints::Constraints;

    fn solve_clauses(num_vars: u32, clauses: &[&[i32]]) -> SolveResult {
        let mut builder = Constraints::new();
        for _ in 0..num_vars {
            builder.new_literal().unwrap();
        }
        for clause in clauses {
            builder.add(clause).unwrap();
        }
        DpllSolver::init(builder).solve()
    }

    #[test]
    fn s4_implication_chain_is_sat_and_sound() {
        let clauses: [[i32; 2]; 5] = [[-1, 2], [-2, 3], [-3, 4], [-4, 5], [-5, -1]];
        let result = solve_clauses(5, &clauses.iter().map(|c| c.as_slice()).collect::<Vec<_>>());
        assert!(result.is_sat());
        let model = result.model().unwrap();
        let value_of = |lit: i32| {
            let v = Variable::new(lit.unsigned_abs());
            let assigned = model.get_assignment(v);
            if lit > 0 {
                assigned
            } else {
                !assigned
            }
        };
        for clause in clauses {
            assert!(
                clause.iter().any(|&l| value_of(l)),
                "clause {clause:?} not satisfied"
            );
        }
    }

    #[test]
    fn s5_forced_conflict_is_unsat() {
        let result = solve_clauses(
            5,
            &[
                &[-1, -2],
                &[1, 3],
                &[2, -3],
                &[-2, 4],
                &[-3, -4],
                &[3, 5],
                &[3, -5],
            ],
        );
        assert_eq!(result, SolveResult::Unsat);
    }

    #[test]
    fn single_unit_clause_is_sat_and_assigns_forced_value() {
        let result = solve_clauses(1, &[&[1]]);
        assert!(result.is_sat());
        assert!(result
            .model()
            .unwrap()
            .get_assignment(Variable::new(1)));
    }

    #[test]
    fn empty_clause_is_immediately_unsat() {
        let mut builder = Constraints::new();
        builder.new_literal().unwrap();
        builder.add(&[]).unwrap();
        let result = DpllSolver::init(builder).solve();
        assert_eq!(result, SolveResult::Unsat);
    }

    #[test]
    fn determinism_across_runs() {
        let clauses: Vec<&[i32]> = vec![&[1, 2], &[-1, 3], &[-2, -3]];
        let a = solve_clauses(3, &clauses);
        let b = solve_clauses(3, &clauses);
        assert_eq!(a, b);
    }
}
