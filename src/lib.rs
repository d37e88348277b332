//! Optimal solver for the 4x4 sliding-tile puzzle.
//!
//! A board is checked with the parity test first; solvable boards are then
//! searched with A* under the Manhattan-distance heuristic, which returns a
//! shortest sequence of slides together with run statistics. Searches report
//! progress and honour cancellation through a [`SearchObserver`].
//!
//! ## Modules
//! - `board`: the configuration itself, slides and the heuristic.
//! - `node`: search nodes carrying g, h and f.
//! - `moves`: one-slide neighbours of a node.
//! - `solvability`: the inversion parity test.
//! - `solver`: the A* driver, its statistics and observer hooks.
//! - `shuffle`: random scrambles that stay solvable.
//! - `render`: text output for boards and solutions.

pub mod board;
pub mod config;
pub mod error;
pub mod moves;
pub mod node;
pub mod render;
pub mod shuffle;
pub mod solvability;
pub mod solver;

pub use board::{Board, Move, Slide};
pub use error::BoardError;
pub use node::SearchNode;
pub use solvability::is_solvable;
pub use solver::{
    solve, Callbacks, CancelToken, Outcome, Progress, SearchObserver, SearchResult, SearchStats,
    Solver,
};
