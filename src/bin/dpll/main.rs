mod cli;
mod sat;
mod sudoku_cmd;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use cli::CliError;

#[derive(Parser)]
#[command(name = "dpll", about = "A DPLL SAT solver and finite-domain CSP encoder")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Solve a DIMACS CNF file directly.
    Sat {
        #[arg(value_name = "PATH")]
        path: PathBuf,
    },
    /// Solve a Sudoku puzzle read from a file, or stdin if omitted.
    Sudoku {
        #[arg(value_name = "PATH")]
        path: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    cli::init_logging();

    let args = Args::parse();

    let result: Result<i32, CliError> = match args.command {
        Command::Sat { path } => sat::run(&path).map_err(CliError::from),
        Command::Sudoku { path } => sudoku_cmd::run(path.as_deref()).map_err(CliError::from),
    };

    match result {
        Ok(code) => ExitCode::from(code as u8),
        Err(err) => {
            log::error!("{err}");
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
