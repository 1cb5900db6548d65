//! Model decoding (§4.6): a dense boolean assignment reconstructed from a
//! solver's final decision stack.

use crate::lit::Variable;
use crate::step::Step;

/// A total Boolean assignment over the variables of a solved instance.
///
/// Owns its assignment vector independently of the solver that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Model {
    assignments: Vec<bool>,
}

impl Model {
    /// Builds a Model from a solver's decision stack: for every step with a
    /// decision `L`, `assignments[L.index()] = L.is_positive()`. Variables
    /// never decided default to `false`.
    pub(crate) fn from_stack(num_vars: u32, stack: &[Step]) -> Self {
        let mut assignments = vec![false; num_vars as usize];
        for step in stack {
            if let Some(decision) = step.decision() {
                assignments[decision.index()] = decision.is_positive();
            }
        }
        Model { assignments }
    }

    /// The assigned value of `variable`.
    pub fn get_assignment(&self, variable: Variable) -> bool {
        self.assignments[variable.index()]
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }
}
