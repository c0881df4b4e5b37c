use clap::Parser;
use npuzzle_solver::solver::Solver;
use npuzzle_solver::utils::{load_board, write_report};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Path to the board file (dimension N, then N*N tile labels, 0 = blank)
    board_file: PathBuf,

    /// Log search progress to stderr (repeat for more detail)
    #[clap(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Print search statistics after the solution
    #[clap(long)]
    stats: bool,
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let board = load_board(&args.board_file)?;
    tracing::info!(file = %args.board_file.display(), dimension = board.dimension(), "loaded board");

    let solver = Solver::solve(&board)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(&solver, &mut out)?;
    if args.stats {
        let stats = solver.stats();
        writeln!(out, "Expanded nodes: {}", stats.expanded)?;
        writeln!(out, "Generated nodes: {}", stats.generated)?;
        writeln!(out, "Largest frontier: {}", stats.max_frontier)?;
    }
    out.flush()?;
    Ok(())
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
