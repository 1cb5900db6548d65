//! `dpll sudoku [<PATH>]`: the illustrative example from §4.9/§6, reading
//! from a file or stdin.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use log::{error, info};
use thiserror::Error;

use dpll::sudoku::{format_grid, parse_givens, solve, SudokuParseError};

#[derive(Debug, Error)]
pub enum SudokuCliError {
    #[error("failed to read puzzle: {0}")]
    Read(#[from] io::Error),
    #[error("failed to parse puzzle: {0}")]
    Parse(#[from] SudokuParseError),
}

/// Returns the process exit code: `0` success, `1` unsatisfiable.
pub fn run(path: Option<&Path>) -> Result<i32, SudokuCliError> {
    let text = match path {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let givens = parse_givens(&text)?;
    info!("solving sudoku puzzle");

    match solve(&givens) {
        Some(grid) => {
            print!("{}", format_grid(&grid));
            Ok(0)
        }
        None => {
            error!("puzzle is unsatisfiable");
            println!("Unsolveable");
            Ok(1)
        }
    }
}
