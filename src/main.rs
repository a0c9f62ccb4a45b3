//! Towers of Hanoi
//!
//! Prints the minimal solution for a tower of disks, verifies it, or steps
//! through it interactively one move at a time.

use std::io;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use hanoi::listing::format_plan;
use hanoi::replay::replay;
use hanoi::{interactive, move_count, plan, PegId, Session, TowerHeight, Towers, NUM_PEGS};

/// Solves the Towers of Hanoi and steps through the solution.
#[derive(Parser)]
#[command(name = "hanoi")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print every move of the solution.
    Solve {
        /// Number of disks (1-20).
        #[arg(short = 'n', long, default_value_t)]
        height: TowerHeight,
        /// Peg the tower starts on.
        #[arg(long, default_value_t = 0, value_parser = parse_peg)]
        from: PegId,
        /// Peg the tower ends on.
        #[arg(long, default_value_t = 1, value_parser = parse_peg)]
        to: PegId,
    },
    /// Show the number of moves in the solution.
    Count {
        /// Number of disks (1-20).
        #[arg(short = 'n', long, default_value_t)]
        height: TowerHeight,
    },
    /// Replay the solution and check that it is legal and minimal.
    Check {
        /// Number of disks (1-20).
        #[arg(short = 'n', long, default_value_t)]
        height: TowerHeight,
    },
    /// Step through the solution, reading commands from stdin.
    Play {
        /// Number of disks (1-20).
        #[arg(short = 'n', long, default_value_t)]
        height: TowerHeight,
    },
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Some(Command::Solve { height, from, to }) => run_solve(height, from, to),
        Some(Command::Count { height }) => run_count(height),
        Some(Command::Check { height }) => run_check(height),
        Some(Command::Play { height }) => run_play(height),
        // default: interactive session with the default height
        None => run_play(TowerHeight::default()),
    }
}

/// Sends diagnostics to stderr, filtered by `RUST_LOG`.
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("hanoi=warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn parse_peg(input: &str) -> Result<PegId, String> {
    match input.parse::<PegId>() {
        Ok(peg) if peg < NUM_PEGS => Ok(peg),
        _ => Err(format!("peg must be 0, 1 or 2, got {input:?}")),
    }
}

/// The one peg that is neither `from` nor `to`.
fn spare_peg(from: PegId, to: PegId) -> PegId {
    (0..NUM_PEGS)
        .find(|&peg| peg != from && peg != to)
        .unwrap_or(from)
}

/// Prints the numbered plan for moving the tower from `from` to `to`.
fn run_solve(height: TowerHeight, from: PegId, to: PegId) -> ExitCode {
    if from == to {
        eprintln!("--from and --to must name different pegs");
        return ExitCode::FAILURE;
    }

    let moves = plan(height.get(), from, to, spare_peg(from, to));
    print!("{}", format_plan(&Towers::stacked_on(height.get(), from), &moves));
    println!("{} moves", moves.len());
    ExitCode::SUCCESS
}

/// Prints the length of the minimal solution.
fn run_count(height: TowerHeight) -> ExitCode {
    println!("{} moves", move_count(height.get()));
    ExitCode::SUCCESS
}

/// Replays the plan against a checked peg state.
fn run_check(height: TowerHeight) -> ExitCode {
    let disks = height.get();
    let moves = plan(disks, 0, 1, 2);

    match replay(disks, &moves, 0, 1) {
        Ok(report) if !report.revisits_configuration() => {
            println!(
                "{} moves, {} distinct configurations, no repeats",
                report.moves, report.distinct_configurations
            );
            ExitCode::SUCCESS
        }
        Ok(report) => {
            eprintln!(
                "Plan revisits configurations: {} moves but only {} distinct",
                report.moves, report.distinct_configurations
            );
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Plan failed to replay: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Runs the interactive session on stdin/stdout.
fn run_play(height: TowerHeight) -> ExitCode {
    println!("Controls: next, restart, set <n>, show, help, quit");
    let mut session = Session::new(height);
    let stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();

    if let Err(e) = interactive::run(&mut session, stdin, &mut stdout) {
        eprintln!("Failed to run session: {}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
