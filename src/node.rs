//! Search nodes: a board plus the metrics A* orders it by.

use crate::board::{Board, Slide};

/// Position of a node inside the arena of one search run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// The initial board always takes the first slot.
    pub const ROOT: NodeId = NodeId(0);
}

/// A board reached during a search, with its path cost and estimate.
///
/// Nodes are owned by the search run that created them. The parent link is an
/// index into that run's arena, so the whole tree is freed in one go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchNode {
    pub board: Board,
    /// Row and column of the blank.
    pub blank: (usize, usize),
    /// Slides taken from the initial board (g).
    pub moves: usize,
    /// Manhattan distance to the goal (h).
    pub heuristic: usize,
    /// `moves + heuristic` (f).
    pub cost: usize,
    /// The slide that produced this board; `None` for the initial board.
    pub last_move: Option<Slide>,
    pub(crate) parent: Option<NodeId>,
}

impl SearchNode {
    /// The node a search starts from.
    pub fn root(board: Board) -> Self {
        Self::with_metrics(board, 0, None, None)
    }

    /// A node one slide further from the root than `parent`.
    pub fn child(&self, parent: NodeId, board: Board, slide: Slide) -> Self {
        Self::with_metrics(board, self.moves + 1, Some(parent), Some(slide))
    }

    fn with_metrics(
        board: Board,
        moves: usize,
        parent: Option<NodeId>,
        last_move: Option<Slide>,
    ) -> Self {
        let heuristic = board.manhattan_heuristic();
        Self {
            board,
            blank: board.find_blank(),
            moves,
            heuristic,
            cost: moves + heuristic,
            last_move,
            parent,
        }
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn is_goal(&self) -> bool {
        self.board.is_goal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Move;

    #[test]
    fn test_root_metrics() {
        let node = SearchNode::root(Board::GOAL);
        assert_eq!(node.moves, 0);
        assert_eq!(node.heuristic, 0);
        assert_eq!(node.cost, 0);
        assert_eq!(node.blank, (3, 3));
        assert!(node.parent().is_none());
        assert!(node.last_move.is_none());
        assert!(node.is_goal());
    }

    #[test]
    fn test_child_adds_one_move() {
        let root = SearchNode::root(Board::GOAL);
        let (board, slide) = Board::GOAL.try_move(Move::Down).unwrap();
        let child = root.child(NodeId::ROOT, board, slide);

        assert_eq!(child.moves, 1);
        assert_eq!(child.heuristic, 1);
        assert_eq!(child.cost, 2);
        assert_eq!(child.blank, (2, 3));
        assert_eq!(child.parent(), Some(NodeId::ROOT));
        assert_eq!(child.last_move, Some(slide));
    }
}
