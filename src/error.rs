//! Error taxonomy (§7).
//!
//! Every input-validation error is detected eagerly at its posting call site;
//! `solve` itself cannot fail (see `OutOfMemory`'s doc comment).

use thiserror::Error;

/// Errors surfaced by the DPLL core and the finite-domain constraint layer.
///
/// This is the only error type the library's public API exposes. It never
/// depends on a text format or a CLI argument parser — those concerns live in
/// the `dpll` binary's own `ParseError` (see `src/bin/dpll.rs`).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DpllError {
    /// `new_variable(from, to)` was called with `from > to`.
    #[error("invalid domain range: from ({from}) > to ({to})")]
    InvalidRange { from: i64, to: i64 },

    /// `distinct` was given IntVars whose `offset` or `size` disagree.
    #[error("distinct requires a shared domain: expected offset={expected_offset} size={expected_size}, got offset={actual_offset} size={actual_size}")]
    InvalidSort {
        expected_offset: i64,
        expected_size: usize,
        actual_offset: i64,
        actual_size: usize,
    },

    /// `equal_to_constant(var, k)` was given a `k` outside the variable's domain.
    #[error("constant {value} is outside domain [{offset}, {top}]")]
    InvalidConstant { value: i64, offset: i64, top: i64 },

    /// A clause referenced a literal magnitude greater than the current
    /// variable count.
    #[error("literal {value} is invalid for a universe of {num_vars} variable(s)")]
    InvalidLiteral { value: i32, num_vars: u32 },

    /// Minting another variable would overflow the signed literal
    /// representation.
    #[error("cannot allocate another variable: variable count would exceed {limit}")]
    TooManyVariables { limit: u32 },

    /// Reserved for API completeness. `Vec`/`String` allocation failures abort
    /// the process per Rust's global allocator contract rather than
    /// returning a `Result`, so this implementation never constructs this
    /// variant — see SPEC_FULL.md §5's allocation-discipline note.
    #[error("out of memory")]
    OutOfMemory,
}
