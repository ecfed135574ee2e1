use clap::Parser;

use tilepath::scramble;

#[derive(Parser, Debug)]
#[command(
    name = "scramble",
    about = "Generate a solvable scrambled puzzle in the solve-able text format"
)]
struct Args {
    /// Board dimension N (grid is N-by-N)
    #[arg(long, default_value_t = 3)]
    dim: usize,

    /// Number of random slides applied to the solved board
    #[arg(long, default_value_t = 30)]
    steps: u32,

    /// RNG seed; equal seeds reproduce equal boards
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let board = scramble(args.dim, args.steps, args.seed)?;
    eprintln!(
        "[scramble] {0}x{0} board after {1} steps (seed {2}): manhattan {3}",
        args.dim,
        args.steps,
        args.seed,
        board.manhattan()
    );
    print!("{board}");

    Ok(())
}
