//! Shared CLI plumbing: logging init and the error type the binary (but not
//! the library) can return.
//!
//! Grounded on the teacher crate's `src/cli.rs`/`cli::init_logging` split:
//! a thin helper module shared by every subcommand, kept separate from
//! `main.rs`'s argument parsing.

use thiserror::Error;

use crate::sat::SatError;
use crate::sudoku_cmd::SudokuCliError;

/// Initializes `env_logger` against the `log` facade, controlled by
/// `RUST_LOG`. Must run once before any `log::` call.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
}

/// Errors surfaced at the CLI boundary: the purely syntactic parse/IO
/// failures of each front-end. The library's own [`dpll::DpllError`] never
/// reaches here directly — both front-ends convert it into their own error
/// first, so a failure always carries the file/puzzle context it happened
/// in.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Sat(#[from] SatError),
    #[error(transparent)]
    Sudoku(#[from] SudokuCliError),
}

/// Exit codes follow the sysexits convention referenced by §6: a malformed
/// input file exits `65` (`EX_DATAERR`). Success/unsatisfiable (`0`/`1`)
/// never reach this path — they are returned as `Ok` from the subcommands.
impl CliError {
    pub fn exit_code(&self) -> i32 {
        65
    }
}
