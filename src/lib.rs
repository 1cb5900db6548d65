//! A small DPLL SAT core (§4.1–§4.6) and a finite-domain constraint layer
//! (§4.7) built on top of it.
//!
//! Typical usage goes through [`csp::ConstraintSolver`] for finite-domain
//! problems (see the `sudoku` module and the `dpll sudoku` CLI subcommand),
//! or directly through [`constraints::Constraints`] + [`dpll::DpllSolver`]
//! for raw CNF (see the `dimacs` module and `dpll sat`).

pub mod clause;
pub mod constraints;
pub mod csp;
pub mod dimacs;
pub mod dpll;
pub mod error;
pub mod intvar;
pub mod lit;
pub mod model;
pub mod result;
pub mod step;
pub mod sudoku;

pub use error::DpllError;
pub use result::SolveResult;
