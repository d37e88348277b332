//! 15-puzzle solver
//!
//! Finds a shortest sequence of slides for a 4x4 sliding-tile puzzle with A*
//! and the Manhattan-distance heuristic. Boards come from the command line, a
//! built-in demo, or a seeded random scramble; the solution can be listed and
//! replayed in the terminal.

mod terminal;

use std::io::{self, Write};
use std::process::ExitCode;
use std::thread;
use std::time::{Duration, Instant};

use clap::{ArgAction, Args, Parser, Subcommand};
use log::{debug, info, warn, LevelFilter};
use thiserror::Error;

use fifteen::config::{DEFAULT_REPLAY_DELAY_MS, DEFAULT_SHUFFLE_MOVES, DEMO_BOARD};
use fifteen::render::{format_line, format_stats};
use fifteen::shuffle::shuffled;
use fifteen::solvability::parity;
use fifteen::{Board, BoardError, CancelToken, Outcome, SearchResult, Solver};

/// Solves the 15-puzzle optimally with A* search.
#[derive(Parser)]
#[command(name = "fifteen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Solve a board and print the optimal solution.
    Solve(SolveArgs),
    /// Tell whether a board is solvable without searching.
    Check(BoardSource),
    /// Print a random solvable board.
    Shuffle {
        /// Number of random slides applied to the goal board
        #[arg(short, long, default_value_t = DEFAULT_SHUFFLE_MOVES)]
        moves: usize,

        /// Seed for a reproducible board
        #[arg(short, long)]
        seed: Option<u64>,
    },
    /// Slide tiles by number, like clicking them.
    Play {
        #[command(flatten)]
        source: BoardSource,

        /// Tiles to slide into the blank, in order
        #[arg(short, long, value_delimiter = ',', num_args = 1..)]
        tiles: Vec<u8>,
    },
}

/// Where the board comes from.
#[derive(Args, Default)]
struct BoardSource {
    /// Sixteen numbers 0-15, row by row, separated by spaces or commas; 0 is the blank
    #[arg(value_name = "TILE")]
    board: Vec<String>,

    /// Use the built-in demo board
    #[arg(long, conflicts_with = "board")]
    demo: bool,

    /// Scramble the goal board with this many random slides
    #[arg(long, conflicts_with_all = ["board", "demo"])]
    shuffle: Option<usize>,

    /// Seed for --shuffle
    #[arg(long, requires = "shuffle")]
    seed: Option<u64>,
}

impl BoardSource {
    /// The requested board, or `fallback` when none was given.
    fn resolve(&self, fallback: Board) -> Result<Board, CliError> {
        if self.demo {
            return Ok(Board::new(DEMO_BOARD)?);
        }
        if let Some(moves) = self.shuffle {
            return Ok(shuffled(moves, self.seed));
        }
        if self.board.is_empty() {
            return Ok(fallback);
        }
        Ok(self.board.join(" ").parse()?)
    }
}

#[derive(Args, Default)]
struct SolveArgs {
    #[command(flatten)]
    source: BoardSource,

    /// Stop searching after this many seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Animate the solution in place once found
    #[arg(short, long)]
    replay: bool,

    /// Pause between replay frames, in milliseconds
    #[arg(long, default_value_t = DEFAULT_REPLAY_DELAY_MS)]
    delay: u64,

    /// Print only the outcome and statistics
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("invalid board: {0}")]
    Board(#[from] BoardError),

    #[error("tile {tile} is not next to the blank")]
    IllegalSlide { tile: u8 },

    #[error("the search thread panicked")]
    WorkerPanicked,

    #[error(transparent)]
    Io(#[from] io::Error),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Command::Solve(args)) => run_solve(args),
        Some(Command::Check(source)) => run_check(&source),
        Some(Command::Shuffle { moves, seed }) => run_shuffle(moves, seed),
        Some(Command::Play { source, tiles }) => run_play(&source, &tiles),
        // default: solve the demo board
        None => run_solve(SolveArgs {
            delay: DEFAULT_REPLAY_DELAY_MS,
            ..SolveArgs::default()
        }),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!("{e:?}");
            // a failed write to stderr has nowhere else to go
            let _ = report_failure(&mut io::stderr(), &e);
            ExitCode::FAILURE
        }
    }
}

fn report_failure(out: &mut impl Write, error: &CliError) -> io::Result<()> {
    writeln!(out, "error: {error}")
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

/// Solves a board on a worker thread while the main thread watches the keyboard.
fn run_solve(args: SolveArgs) -> Result<(), CliError> {
    let board = args.source.resolve(Board::new(DEMO_BOARD)?)?;
    let mut stdout = io::stdout();
    let styled = terminal::stdout_is_terminal();

    println!("Initial board: {}", format_line(&board));
    terminal::print_board(&mut stdout, &board, styled)?;

    let cancel = CancelToken::new();
    let bar = terminal::spinner(args.quiet);
    let deadline = args
        .timeout
        .map(|secs| Instant::now() + Duration::from_secs(secs));
    let mut observer = terminal::TerminalObserver::new(bar.clone(), cancel.clone(), deadline);

    info!("solving {}", format_line(&board));
    let result: Result<SearchResult, CliError> = thread::scope(|scope| {
        let worker = scope.spawn(move || Solver::new().solve(&board, &mut observer));
        let watched = terminal::watch_for_cancel(&cancel, || worker.is_finished());
        if watched.is_err() {
            cancel.cancel();
        }
        let result = worker.join().map_err(|_| CliError::WorkerPanicked)?;
        watched?;
        Ok(result)
    });
    bar.finish_and_clear();
    let result = result?;

    match &result.outcome {
        Outcome::Solved(path) => {
            println!();
            if !args.quiet {
                terminal::print_solution(&mut stdout, path, styled)?;
            }
            if args.replay && styled {
                terminal::replay(&mut stdout, path, Duration::from_millis(args.delay))?;
                println!();
            } else if args.replay {
                warn!("replay skipped: stdout is not a terminal");
            }
            println!("Optimal solution found.");
        }
        Outcome::Unsolvable => {
            let report = parity(&board);
            println!(
                "This board cannot be solved: {} inversions with the blank on row {} from the bottom.",
                report.inversions, report.blank_row_from_bottom
            );
            return Ok(());
        }
        Outcome::Cancelled => {
            warn!("search cancelled after {} boards", result.stats.explored);
            println!("Search stopped before a solution was found.");
        }
        Outcome::Exhausted => println!("No solution found: every reachable board was explored."),
    }
    print!("{}", format_stats(&result.stats));

    Ok(())
}

fn run_check(source: &BoardSource) -> Result<(), CliError> {
    let board = source.resolve(Board::new(DEMO_BOARD)?)?;
    let report = parity(&board);

    terminal::print_board(&mut io::stdout(), &board, terminal::stdout_is_terminal())?;
    println!("{:<22} {}", "Inversions:", report.inversions);
    println!("{:<22} {}", "Blank row from bottom:", report.blank_row_from_bottom);
    println!("{:<22} {}", "Manhattan distance:", board.manhattan_heuristic());
    if report.solvable {
        println!("Solvable.");
    } else {
        println!("Not solvable: the inversion count has the wrong parity for this blank row.");
    }
    Ok(())
}

fn run_shuffle(moves: usize, seed: Option<u64>) -> Result<(), CliError> {
    let board = shuffled(moves, seed);
    println!("{}", format_line(&board));
    terminal::print_board(&mut io::stdout(), &board, terminal::stdout_is_terminal())?;
    Ok(())
}

fn run_play(source: &BoardSource, tiles: &[u8]) -> Result<(), CliError> {
    let mut board = source.resolve(Board::GOAL)?;
    let mut stdout = io::stdout();
    let styled = terminal::stdout_is_terminal();
    terminal::print_board(&mut stdout, &board, styled)?;

    for (step, &tile) in tiles.iter().enumerate() {
        let (next, slide) = board
            .slide_tile(tile)
            .ok_or(CliError::IllegalSlide { tile })?;
        board = next;
        println!("{}. {slide}", step + 1);
        terminal::print_board(&mut stdout, &board, styled)?;
    }

    if board.is_goal() {
        println!("Solved!");
    } else {
        println!(
            "{} ({} from the goal by Manhattan distance)",
            format_line(&board),
            board.manhattan_heuristic()
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_is_reported_once() {
        let error = CliError::from("1 2 3".parse::<Board>().unwrap_err());
        let mut out = Vec::new();
        report_failure(&mut out, &error).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "error: invalid board: a board needs exactly 16 cells, found 3\n"
        );
    }

    #[test]
    fn test_board_source_falls_back_when_empty() {
        let source = BoardSource::default();
        assert_eq!(source.resolve(Board::GOAL).unwrap(), Board::GOAL);

        let source = BoardSource {
            demo: true,
            ..BoardSource::default()
        };
        assert_eq!(source.resolve(Board::GOAL).unwrap(), Board::new(DEMO_BOARD).unwrap());
    }
}
