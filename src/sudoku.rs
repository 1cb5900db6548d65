//! The Sudoku front-end (§4.9, §6): the illustrative example wired up to an
//! actual implementation rather than merely described.

use thiserror::Error;

use crate::csp::ConstraintSolver;
use crate::intvar::IntVar;

const SIZE: usize = 9;
const BOX: usize = 3;

/// A 9x9 grid of givens; `None` denotes a blank cell.
pub type Givens = [[Option<u8>; SIZE]; SIZE];

/// A 9x9 grid of solved digits.
pub type Grid = [[u8; SIZE]; SIZE];

/// Syntactic failures reading a Sudoku puzzle. Never part of the library's
/// core API ([`crate::DpllError`]) — purely a concern of this text format.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SudokuParseError {
    #[error("expected 9 lines, found {found}")]
    WrongLineCount { found: usize },
    #[error("line {line} has {found} characters, expected 9")]
    WrongLineLength { line: usize, found: usize },
    #[error("line {line}, column {column}: '{found}' is not '1'-'9' or '.'")]
    InvalidCell { line: usize, column: usize, found: char },
}

/// Parses exactly 9 lines of 9 characters: `'1'..='9'` are givens, `'.'` is
/// blank, anything else is a parse error.
pub fn parse_givens(text: &str) -> Result<Givens, SudokuParseError> {
    let lines: Vec<&str> = text.lines().filter(|l| !l.is_empty()).collect();
    if lines.len() != SIZE {
        return Err(SudokuParseError::WrongLineCount { found: lines.len() });
    }

    let mut givens: Givens = [[None; SIZE]; SIZE];
    for (row, line) in lines.iter().enumerate() {
        let chars: Vec<char> = line.chars().collect();
        if chars.len() != SIZE {
            return Err(SudokuParseError::WrongLineLength {
                line: row,
                found: chars.len(),
            });
        }
        for (col, &ch) in chars.iter().enumerate() {
            givens[row][col] = match ch {
                '.' => None,
                '1'..='9' => Some(ch as u8 - b'0'),
                other => {
                    return Err(SudokuParseError::InvalidCell {
                        line: row,
                        column: col,
                        found: other,
                    });
                }
            };
        }
    }
    Ok(givens)
}

/// Solves a Sudoku puzzle: 81 `IntVar`s over `[1, 9]`, `distinct` over every
/// row, column and 3x3 box, `equal_to_constant` for every given. Returns
/// `None` if the puzzle (together with the distinctness constraints) is
/// unsatisfiable.
pub fn solve(givens: &Givens) -> Option<Grid> {
    let mut solver = ConstraintSolver::new();

    let cells: Vec<Vec<IntVar>> = (0..SIZE)
        .map(|_| {
            (0..SIZE)
                .map(|_| solver.new_variable(1, 9).unwrap())
                .collect()
        })
        .collect();

    for row in 0..SIZE {
        let vars: Vec<IntVar> = (0..SIZE).map(|col| cells[row][col].clone()).collect();
        solver.distinct(&vars).unwrap();
    }
    for col in 0..SIZE {
        let vars: Vec<IntVar> = (0..SIZE).map(|row| cells[row][col].clone()).collect();
        solver.distinct(&vars).unwrap();
    }
    for box_row in 0..BOX {
        for box_col in 0..BOX {
            let vars: Vec<IntVar> = (0..BOX)
                .flat_map(|r| (0..BOX).map(move |c| (r, c)))
                .map(|(r, c)| cells[box_row * BOX + r][box_col * BOX + c].clone())
                .collect();
            solver.distinct(&vars).unwrap();
        }
    }

    for row in 0..SIZE {
        for col in 0..SIZE {
            if let Some(given) = givens[row][col] {
                solver
                    .equal_to_constant(&cells[row][col], given as i64)
                    .unwrap();
            }
        }
    }

    let result = solver.solve();
    let model = result.model()?;

    let mut grid: Grid = [[0u8; SIZE]; SIZE];
    for row in 0..SIZE {
        for col in 0..SIZE {
            grid[row][col] = model.get_value(&cells[row][col]) as u8;
        }
    }
    Some(grid)
}

/// Renders a solved grid as 9 lines of 9 digits.
pub fn format_grid(grid: &Grid) -> String {
    let mut out = String::with_capacity(SIZE * (SIZE + 1));
    for row in grid {
        for &digit in row {
            out.push((b'0' + digit) as char);
        }
        out.push('\n');
    }
    out
}
