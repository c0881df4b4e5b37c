use clap::Parser;
use npuzzle_solver::engine::{Board, MAX_DIMENSION};
use std::process;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Writes a random sliding-puzzle board", long_about = None)]
struct Args {
    /// Board dimension N
    #[clap(short, long, default_value_t = 3)]
    dimension: usize,

    /// Length of the random walk away from the goal
    #[clap(short, long, default_value_t = 20)]
    moves: usize,

    /// Seed for the random number generator
    #[clap(short, long, default_value_t = 0)]
    seed: u64,

    /// Draw a uniformly random permutation instead (may be unsolvable)
    #[clap(long)]
    any: bool,
}

fn main() {
    let args = Args::parse();

    if args.dimension == 0 || args.dimension > MAX_DIMENSION {
        eprintln!(
            "Error: dimension must be within 1..={}, got {}",
            MAX_DIMENSION, args.dimension
        );
        process::exit(2);
    }

    let board = if args.any {
        Board::shuffled(args.dimension, args.seed)
    } else {
        Board::scrambled(args.dimension, args.moves, args.seed)
    };
    println!("{}", board);
}
