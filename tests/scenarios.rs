//! Black-box scenario tests S1-S6 from §8, exercising only the public API.

use dpll::csp::{ConstraintSolver, CspResult};
use dpll::intvar::IntVar;

#[test]
fn s1_single_binary_variable() {
    let mut solver = ConstraintSolver::new();
    let v = solver.new_variable(0, 1).unwrap();
    let result = solver.solve();
    assert!(result.is_sat());
    assert!(matches!(result.model().unwrap().get_value(&v), 0 | 1));
}

#[test]
fn s2_distinct_satisfiable() {
    let mut solver = ConstraintSolver::new();
    let vars: Vec<IntVar> = (0..4).map(|_| solver.new_variable(0, 3).unwrap()).collect();
    solver.distinct(&vars).unwrap();

    let result = solver.solve();
    assert!(result.is_sat());
    let model = result.model().unwrap();
    let values: Vec<i64> = vars.iter().map(|v| model.get_value(v)).collect();
    for i in 0..values.len() {
        for j in (i + 1)..values.len() {
            assert_ne!(values[i], values[j], "distinct vars {i} and {j} collided");
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
fn s4_implication_chain_is_sat() {
    let mut builder = dpll::constraints::Constraints::new();
    for _ in 0..5 {
        builder.new_literal().unwrap();
    }
    for clause in [[-1, 2], [-2, 3], [-3, 4], [-4, 5], [-5, -1]] {
        builder.add(&clause).unwrap();
    }
    let result = dpll::dpll::DpllSolver::init(builder).solve();
    assert!(result.is_sat());
}

#[test]
fn s5_forced_conflict_is_unsat() {
    let mut builder = dpll::constraints::Constraints::new();
    for _ in 0..5 {
        builder.new_literal().unwrap();
    }
    for clause in [
        [-1, -2].as_slice(),
        &[1, 3],
        &[2, -3],
        &[-2, 4],
        &[-3, -4],
        &[3, 5],
        &[3, -5],
    ] {
        builder.add(clause).unwrap();
    }
    let result = dpll::dpll::DpllSolver::init(builder).solve();
    assert_eq!(result, dpll::SolveResult::Unsat);
}

#[test]
fn s6_sudoku_givens_are_honored_and_grid_is_valid() {
    const PUZZLE: &str = "\
53..7....
6..195...
.98....6.
8...6...3
4..8.3..1
7...2...6
.6....28.
...419..5
....8..79
";
    let givens = dpll::sudoku::parse_givens(PUZZLE).unwrap();
    let grid = dpll::sudoku::solve(&givens).expect("classic easy puzzle is satisfiable");

    for row in 0..9 {
        for col in 0..9 {
            if let Some(given) = givens[row][col] {
                assert_eq!(grid[row][col], given);
            }
        }
    }
    for row in grid {
        let mut seen = row.to_vec();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), 9, "row {row:?} has a duplicate");
    }
}

#[test]
fn round_trip_equal_to_constant_is_honored() {
    let mut solver = ConstraintSolver::new();
    let v = solver.new_variable(10, 20).unwrap();
    solver.equal_to_constant(&v, 17).unwrap();
    let result = solver.solve();
    assert!(result.is_sat());
    assert_eq!(result.model().unwrap().get_value(&v), 17);
}
