//! `dpll sat <PATH>`: parses a DIMACS CNF file and solves it directly (§4.8,
//! §6 CLI bullets).

use std::fs;
use std::path::Path;

use log::{error, info};
use thiserror::Error;

use dpll::dimacs::{parse_dimacs_cnf, ParseError};
use dpll::dpll::DpllSolver;
use dpll::lit::Literal;
use dpll::SolveResult;

#[derive(Debug, Error)]
pub enum SatError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: ParseError,
    },
}

/// Returns the process exit code: `0` SAT, `1` UNSAT.
pub fn run(path: &Path) -> Result<i32, SatError> {
    let data = fs::read(path).map_err(|source| SatError::Read {
        path: path.display().to_string(),
        source,
    })?;

    info!("parsing {}", path.display());
    let constraints = parse_dimacs_cnf(&data).map_err(|source| SatError::Parse {
        path: path.display().to_string(),
        source,
    })?;
    let num_vars = constraints.num_vars();

    info!("solving ({num_vars} variables, {} clauses)", constraints.clauses().len());
    let mut solver = DpllSolver::init(constraints);
    match solver.solve() {
        SolveResult::Sat(model) => {
            let literals: Vec<String> = (1..=num_vars)
                .map(|v| {
                    let var = Literal::from_raw(v as i32, num_vars).unwrap().variable();
                    if model.get_assignment(var) {
                        v.to_string()
                    } else {
                        format!("-{v}")
                    }
                })
                .collect();
            println!("SAT");
            println!("{}", literals.join(" "));
            Ok(0)
        }
        SolveResult::Unsat => {
            error!("instance is unsatisfiable");
            println!("UNSAT");
            Ok(1)
        }
    }
}
