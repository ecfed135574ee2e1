use std::path::PathBuf;
use std::time::Instant;

use clap::{Parser, ValueEnum};
use serde::Serialize;

use tilepath::{load_board_from_file, Board, Solver, TwinPrune};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum TwinPruneArg {
    /// Twin search skips its own previous board (default).
    OwnParent,
    /// Twin search compares against the main chain's previous board.
    MainParent,
}

impl From<TwinPruneArg> for TwinPrune {
    fn from(arg: TwinPruneArg) -> Self {
        match arg {
            TwinPruneArg::OwnParent => TwinPrune::OwnParent,
            TwinPruneArg::MainParent => TwinPrune::MainParent,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "solve",
    about = "Solve an N-by-N sliding tile puzzle with dual synchronized A*"
)]
struct Args {
    /// Puzzle file: dimension first, then n*n whitespace-separated tiles
    puzzle: PathBuf,

    /// Which previous board the twin search prunes against
    #[arg(long, value_enum, default_value = "own-parent")]
    twin_prune: TwinPruneArg,

    /// Emit a JSON report instead of the text listing
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct SolveReport {
    dimension: usize,
    solvable: bool,
    moves: i32,
    solution: Option<Vec<Board>>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let initial = load_board_from_file(&args.puzzle)?;
    eprintln!(
        "[solve] loaded {0}x{0} board from {1} (manhattan {2})",
        initial.dimension(),
        args.puzzle.display(),
        initial.manhattan()
    );

    let started = Instant::now();
    let solver = Solver::with_twin_prune(initial.clone(), args.twin_prune.into())?;
    eprintln!(
        "[solve] search done: solvable={} elapsed_ms={}",
        solver.is_solvable(),
        started.elapsed().as_millis()
    );

    if args.json {
        let report = SolveReport {
            dimension: initial.dimension(),
            solvable: solver.is_solvable(),
            moves: solver.moves(),
            solution: solver.solution(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if let Some(path) = solver.solution() {
        println!("Minimum number of moves = {}", solver.moves());
        for board in path {
            println!("{board}");
        }
    } else {
        println!("No solution possible");
    }

    Ok(())
}
