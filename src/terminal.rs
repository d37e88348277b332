//! Terminal front end: colored boards, a live progress spinner, key-driven
//! cancellation and in-place solution replay.

use std::io::{self, IsTerminal, Write};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, MoveUp, Show};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::{execute, queue};
use indicatif::{ProgressBar, ProgressStyle};
use log::warn;

use fifteen::board::{Board, BLANK, SIZE};
use fifteen::config::{KEY_POLL_MS, SPINNER_TICK_MS};
use fifteen::render::{format_grid, format_step_header, GRID_LINES};
use fifteen::{CancelToken, Progress, SearchNode, SearchObserver};

/// Whether stdout can show colors and move the cursor.
pub fn stdout_is_terminal() -> bool {
    io::stdout().is_terminal()
}

/// Prints `board` as a boxed grid with tiles already in place in green, or as
/// plain rows of numbers when `styled` is off.
pub fn print_board(out: &mut impl Write, board: &Board, styled: bool) -> io::Result<()> {
    if !styled {
        write!(out, "{board}")?;
        return out.flush();
    }

    let grid = format_grid(board);
    for (line_index, line) in grid.lines().enumerate() {
        // even lines are borders, odd lines hold a row of tiles
        if line_index % 2 == 0 {
            queue!(out, Print(line), Print("\n"))?;
            continue;
        }

        let row = line_index / 2;
        queue!(out, Print("│"))?;
        for col in 0..SIZE {
            let value = board.get(row, col);
            let (text, color) = if value == BLANK {
                ("    ".to_string(), Color::Reset)
            } else if value as usize == row * SIZE + col + 1 {
                (format!(" {value:2} "), Color::Green)
            } else {
                (format!(" {value:2} "), Color::Yellow)
            };
            queue!(
                out,
                SetForegroundColor(color),
                Print(text),
                ResetColor,
                Print("│")
            )?;
        }
        queue!(out, Print("\n"))?;
    }
    out.flush()
}

/// Prints every step of a solution with its label and metrics.
pub fn print_solution(out: &mut impl Write, path: &[SearchNode], styled: bool) -> io::Result<()> {
    for (index, node) in path.iter().enumerate() {
        writeln!(out, "{}", format_step_header(index, node))?;
        print_board(out, &node.board, styled)?;
        writeln!(out)?;
    }
    out.flush()
}

/// Animates a solution in place, one step every `delay`. Needs a terminal.
pub fn replay(out: &mut impl Write, path: &[SearchNode], delay: Duration) -> io::Result<()> {
    execute!(out, Hide)?;
    let result = replay_frames(out, path, delay);
    execute!(out, Show)?;
    result
}

fn replay_frames(out: &mut impl Write, path: &[SearchNode], delay: Duration) -> io::Result<()> {
    // header line plus the grid
    let frame_height = (GRID_LINES + 1) as u16;

    for (index, node) in path.iter().enumerate() {
        if index > 0 {
            thread::sleep(delay);
            queue!(out, MoveUp(frame_height), Clear(ClearType::FromCursorDown))?;
        }
        queue!(out, Print(format_step_header(index, node)), Print("\n"))?;
        print_board(out, &node.board, true)?;
    }
    Ok(())
}

/// Spinner showing live search metrics; hidden when `quiet`.
pub fn spinner(quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }

    let bar = ProgressBar::new_spinner();
    bar.set_style(
        ProgressStyle::with_template("{spinner:.cyan} [{elapsed_precise}] {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    bar.set_message("searching (q or Esc to stop)");
    bar.enable_steady_tick(Duration::from_millis(SPINNER_TICK_MS));
    bar
}

/// Feeds progress into a spinner and stops on request or at a deadline.
pub struct TerminalObserver {
    bar: ProgressBar,
    cancel: CancelToken,
    deadline: Option<Instant>,
}

impl TerminalObserver {
    pub fn new(bar: ProgressBar, cancel: CancelToken, deadline: Option<Instant>) -> Self {
        Self {
            bar,
            cancel,
            deadline,
        }
    }
}

impl SearchObserver for TerminalObserver {
    fn should_stop(&mut self) -> bool {
        if self.deadline.is_some_and(|deadline| Instant::now() >= deadline) {
            self.cancel.cancel();
        }
        self.cancel.is_cancelled()
    }

    fn on_progress(&mut self, progress: &Progress) {
        self.bar.set_message(format!(
            "explored {}  frontier {}  h={}  f={}  (q or Esc to stop)",
            progress.explored, progress.frontier, progress.heuristic, progress.cost
        ));
    }
}

/// Raw mode for the lifetime of the guard.
struct RawMode;

impl RawMode {
    fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        if let Err(e) = terminal::disable_raw_mode() {
            warn!("could not restore terminal mode: {e}");
        }
    }
}

/// Cancels the search when q, Esc or Ctrl-C is pressed.
///
/// Returns once `finished` reports that the search is over. Does nothing when
/// stdin is not a terminal.
pub fn watch_for_cancel(cancel: &CancelToken, finished: impl Fn() -> bool) -> io::Result<()> {
    if !io::stdin().is_terminal() {
        return Ok(());
    }

    let _raw = RawMode::enable()?;
    let poll = Duration::from_millis(KEY_POLL_MS);

    while !finished() {
        if !event::poll(poll)? {
            continue;
        }
        if let Event::Key(KeyEvent {
            code, modifiers, ..
        }) = event::read()?
        {
            let ctrl_c = code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL);
            if ctrl_c || matches!(code, KeyCode::Char('q') | KeyCode::Esc) {
                cancel.cancel();
            }
        }
    }
    Ok(())
}
