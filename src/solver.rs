//! A* search over the slide graph.
//!
//! Key choices:
//! - Binary heap frontier with lazy deletion: a board may be queued several
//!   times and stale copies are skipped when popped
//! - FxHashSet of finalized boards
//! - Nodes live in an arena; parent links are arena indices
//! - Equal-cost entries pop lowest heuristic first, then oldest first, so
//!   runs are reproducible down to the statistics

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::sync::atomic::{AtomicBool, Ordering as AtomicOrdering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use log::{debug, error, trace};
use rustc_hash::FxHashSet;

use crate::board::Board;
use crate::config::PROGRESS_INTERVAL;
use crate::moves::neighbors;
use crate::node::{NodeId, SearchNode};
use crate::solvability::is_solvable;

/// Snapshot handed to [`SearchObserver::on_progress`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// Boards finalized so far.
    pub explored: usize,
    /// Entries waiting in the frontier, stale duplicates included.
    pub frontier: usize,
    /// Heuristic of the node just finalized.
    pub heuristic: usize,
    /// Cost of the node just finalized.
    pub cost: usize,
}

/// Hooks a caller can plug into a running search.
///
/// Both methods are called synchronously from the search loop:
/// `should_stop` once per iteration, `on_progress` every
/// `progress_interval` finalized boards.
pub trait SearchObserver {
    /// Returning `true` ends the search with [`Outcome::Cancelled`].
    fn should_stop(&mut self) -> bool {
        false
    }

    fn on_progress(&mut self, _progress: &Progress) {}
}

/// No reporting, no cancellation.
impl SearchObserver for () {}

impl<T: SearchObserver + ?Sized> SearchObserver for &mut T {
    fn should_stop(&mut self) -> bool {
        (**self).should_stop()
    }

    fn on_progress(&mut self, progress: &Progress) {
        (**self).on_progress(progress)
    }
}

/// Shared flag another thread can raise to stop a search.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, AtomicOrdering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(AtomicOrdering::Relaxed)
    }
}

impl SearchObserver for CancelToken {
    fn should_stop(&mut self) -> bool {
        self.is_cancelled()
    }
}

/// Adapts a pair of closures into a [`SearchObserver`].
pub struct Callbacks<P, S> {
    pub progress: P,
    pub stop: S,
}

impl<P, S> SearchObserver for Callbacks<P, S>
where
    P: FnMut(&Progress),
    S: FnMut() -> bool,
{
    fn should_stop(&mut self) -> bool {
        (self.stop)()
    }

    fn on_progress(&mut self, progress: &Progress) {
        (self.progress)(progress)
    }
}

/// Figures collected during one search run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub solvable: bool,
    pub elapsed: Duration,
    /// Boards finalized.
    pub explored: usize,
    /// Largest frontier seen, stale duplicates included.
    pub max_frontier: usize,
    /// Number of slides in the solution; only set when one was found.
    pub solution_length: Option<usize>,
}

/// How a search run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Path from the initial board to the goal, both included.
    Solved(Vec<SearchNode>),
    /// The parity test rejected the board; nothing was expanded.
    Unsolvable,
    /// The observer asked the search to stop.
    Cancelled,
    /// The frontier ran dry without reaching the goal. Never expected for a
    /// solvable board; indicates a bug in move generation or bookkeeping.
    Exhausted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub outcome: Outcome,
    pub stats: SearchStats,
}

impl SearchResult {
    pub fn path(&self) -> Option<&[SearchNode]> {
        match &self.outcome {
            Outcome::Solved(path) => Some(path),
            _ => None,
        }
    }

    pub fn is_solved(&self) -> bool {
        matches!(self.outcome, Outcome::Solved(_))
    }
}

/// Frontier entry; ordered so that `BinaryHeap` pops the best node first.
#[derive(Debug, PartialEq, Eq)]
struct FrontierEntry {
    cost: usize,
    heuristic: usize,
    sequence: u64,
    node: NodeId,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // reversed: BinaryHeap is a max-heap
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.heuristic.cmp(&self.heuristic))
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Node storage and priority queue for a single run.
struct Frontier {
    arena: Vec<SearchNode>,
    heap: BinaryHeap<FrontierEntry>,
    next_sequence: u64,
}

impl Frontier {
    fn new(root: SearchNode) -> Self {
        let mut frontier = Self {
            arena: Vec::new(),
            heap: BinaryHeap::new(),
            next_sequence: 0,
        };
        frontier.push(root);
        frontier
    }

    fn push(&mut self, node: SearchNode) {
        let id = NodeId(self.arena.len());
        self.heap.push(FrontierEntry {
            cost: node.cost,
            heuristic: node.heuristic,
            sequence: self.next_sequence,
            node: id,
        });
        self.next_sequence += 1;
        self.arena.push(node);
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.heap.pop().map(|entry| entry.node)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn node(&self, id: NodeId) -> &SearchNode {
        &self.arena[id.0]
    }

    /// Follows parent links from `goal` back to the root.
    fn path_to(&self, goal: NodeId) -> Vec<SearchNode> {
        let mut path: Vec<SearchNode> =
            std::iter::successors(Some(goal), |&id| self.node(id).parent())
                .map(|id| self.node(id).clone())
                .collect();
        path.reverse();
        path
    }
}

/// A* solver for the 4x4 puzzle.
///
/// Holds configuration only; every call to [`Solver::solve`] owns its own
/// frontier, explored set and counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Solver {
    progress_interval: usize,
}

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver {
    pub const fn new() -> Self {
        Self {
            progress_interval: PROGRESS_INTERVAL,
        }
    }

    /// Reports progress every `interval` finalized boards instead of the default.
    pub fn with_progress_interval(interval: usize) -> Self {
        Self {
            progress_interval: interval.max(1),
        }
    }

    pub fn progress_interval(&self) -> usize {
        self.progress_interval
    }

    /// Finds a shortest sequence of slides from `board` to the goal.
    pub fn solve<O: SearchObserver + ?Sized>(
        &self,
        board: &Board,
        observer: &mut O,
    ) -> SearchResult {
        let start = Instant::now();

        if !is_solvable(board) {
            debug!("rejecting unsolvable board {:?}", board.cells());
            return SearchResult {
                outcome: Outcome::Unsolvable,
                stats: SearchStats {
                    solvable: false,
                    elapsed: start.elapsed(),
                    ..SearchStats::default()
                },
            };
        }

        let root = SearchNode::root(*board);
        if root.is_goal() {
            return SearchResult {
                outcome: Outcome::Solved(vec![root]),
                stats: SearchStats {
                    solvable: true,
                    elapsed: start.elapsed(),
                    solution_length: Some(0),
                    ..SearchStats::default()
                },
            };
        }

        debug!("starting search, initial heuristic {}", root.heuristic);

        let mut frontier = Frontier::new(root);
        let mut explored: FxHashSet<Board> = FxHashSet::default();
        let mut stats = SearchStats {
            solvable: true,
            ..SearchStats::default()
        };

        let outcome = loop {
            if observer.should_stop() {
                debug!("search cancelled after {} boards", stats.explored);
                break Outcome::Cancelled;
            }

            stats.max_frontier = stats.max_frontier.max(frontier.len());

            let Some(id) = frontier.pop() else {
                error!(
                    "frontier exhausted after {} boards without reaching the goal",
                    stats.explored
                );
                break Outcome::Exhausted;
            };
            let current = frontier.node(id);

            // stale duplicate of a board finalized through a cheaper path
            if !explored.insert(current.board) {
                continue;
            }
            stats.explored += 1;

            if stats.explored % self.progress_interval == 0 {
                let progress = Progress {
                    explored: stats.explored,
                    frontier: frontier.len(),
                    heuristic: current.heuristic,
                    cost: current.cost,
                };
                trace!("{:?}", progress);
                observer.on_progress(&progress);
            }

            if current.is_goal() {
                let path = frontier.path_to(id);
                stats.solution_length = Some(path.len() - 1);
                break Outcome::Solved(path);
            }

            let children: Vec<SearchNode> = neighbors(current, id)
                .filter(|child| !explored.contains(&child.board))
                .collect();
            for child in children {
                frontier.push(child);
            }
        };

        stats.elapsed = start.elapsed();
        debug!(
            "search finished: {} explored, max frontier {}, solution {:?}, {:?}",
            stats.explored, stats.max_frontier, stats.solution_length, stats.elapsed
        );

        SearchResult { outcome, stats }
    }
}

/// Solves `board` with the default configuration and no observer.
pub fn solve(board: &Board) -> SearchResult {
    Solver::default().solve(board, &mut ())
}
