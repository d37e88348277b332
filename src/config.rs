//! Search constants and runtime defaults

/// Number of finalized boards between two progress reports.
pub const PROGRESS_INTERVAL: usize = 50;

/// Random slides applied to the goal board by a default shuffle.
pub const DEFAULT_SHUFFLE_MOVES: usize = 1000;

/// Pause between two frames of a solution replay.
pub const DEFAULT_REPLAY_DELAY_MS: u64 = 1000;

/// Refresh period of the progress spinner.
pub const SPINNER_TICK_MS: u64 = 100;

/// How long the key watcher waits for input before checking on the worker.
pub const KEY_POLL_MS: u64 = 50;

/// A solvable demo board: 30 slides from the goal.
pub const DEMO_BOARD: [u8; 16] = [6, 2, 7, 15, 1, 9, 4, 3, 10, 11, 5, 8, 13, 14, 12, 0];
