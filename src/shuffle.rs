//! Scrambling boards by random legal slides.
//!
//! Walking from the goal only ever produces solvable boards, unlike shuffling
//! the cells directly.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{thread_rng, Rng, SeedableRng};

use crate::board::{Board, Move};

/// Applies `moves` random slides to `board`, never undoing the previous one.
pub fn scramble<R: Rng + ?Sized>(board: &Board, moves: usize, rng: &mut R) -> Board {
    let mut current = *board;
    let mut last: Option<Move> = None;

    for _ in 0..moves {
        let options: Vec<Move> = Move::ALL
            .into_iter()
            .filter(|&m| last.map_or(true, |prev| m != prev.opposite()))
            .filter(|&m| current.try_move(m).is_some())
            .collect();

        // a blank always has at least two neighbours, so one survives the filter
        let Some(&movement) = options.choose(rng) else {
            break;
        };
        if let Some((next, _)) = current.try_move(movement) {
            current = next;
            last = Some(movement);
        }
    }

    current
}

/// A solvable board `moves` random slides away from the goal.
///
/// The same `seed` always gives the same board.
pub fn shuffled(moves: usize, seed: Option<u64>) -> Board {
    match seed {
        Some(seed) => scramble(&Board::GOAL, moves, &mut StdRng::seed_from_u64(seed)),
        None => scramble(&Board::GOAL, moves, &mut thread_rng()),
    }
}
