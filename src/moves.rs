//! Move generation over the slide graph.

use crate::board::Move;
use crate::node::{NodeId, SearchNode};

/// Every node reachable from `node` with one slide.
///
/// Yields two nodes for a corner blank, three on an edge and four in the
/// middle. `parent` is the arena slot `node` lives in.
pub fn neighbors(node: &SearchNode, parent: NodeId) -> impl Iterator<Item = SearchNode> + '_ {
    Move::ALL.into_iter().filter_map(move |movement| {
        node.board
            .try_move(movement)
            .map(|(board, slide)| node.child(parent, board, slide))
    })
}
