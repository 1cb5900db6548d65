//! The solve-result tagged union (§3, §5).

use crate::model::Model;

/// The outcome of a DPLL search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveResult {
    Sat(Model),
    Unsat,
}

impl SolveResult {
    pub fn is_sat(&self) -> bool {
        matches!(self, SolveResult::Sat(_))
    }

    pub fn model(&self) -> Option<&Model> {
        match self {
            SolveResult::Sat(model) => Some(model),
            SolveResult::Unsat => None,
        }
    }

    pub fn into_model(self) -> Option<Model> {
        match self {
            SolveResult::Sat(model) => Some(model),
            SolveResult::Unsat => None,
        }
    }
}
