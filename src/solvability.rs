//! Parity test deciding whether a board can reach the goal at all.
//!
//! Exactly half of all arrangements are solvable. On a 4-wide grid a
//! board is solvable when the inversion count and the blank's row (counted
//! from the bottom, starting at 1) have opposite parity.

use crate::board::{Board, BLANK, SIZE};

/// Everything the parity rule looks at, for callers that want to show it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parity {
    /// Pairs of tiles in the wrong relative order, ignoring the blank.
    pub inversions: usize,
    /// Row of the blank counted from the bottom, starting at 1.
    pub blank_row_from_bottom: usize,
    pub solvable: bool,
}

/// Runs the parity rule on `board`.
pub fn parity(board: &Board) -> Parity {
    let inversions = count_inversions(board.cells());
    let blank_row_from_bottom = SIZE - board.blank_index() / SIZE;

    let solvable = if blank_row_from_bottom % 2 == 1 {
        inversions % 2 == 0
    } else {
        inversions % 2 == 1
    };

    Parity {
        inversions,
        blank_row_from_bottom,
        solvable,
    }
}

/// Whether any sequence of slides turns `board` into the goal.
pub fn is_solvable(board: &Board) -> bool {
    parity(board).solvable
}

/// Counts pairs `i < j` with `cells[i] > cells[j]`, skipping the blank.
pub fn count_inversions(cells: &[u8]) -> usize {
    cells
        .iter()
        .enumerate()
        .filter(|&(_, &val)| val != BLANK)
        .map(|(i, &val)| {
            cells[i + 1..]
                .iter()
                .filter(|&&next| next != BLANK && next < val)
                .count()
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{CELLS, Move};
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::SeedableRng;

    /// Independent characterization: the arrangement's permutation parity
    /// must match the parity of the blank's taxicab distance to its home.
    fn reachable_by_permutation_parity(board: &Board) -> bool {
        // position each cell's value belongs at on the goal board
        let home = |value: u8| {
            if value == BLANK {
                CELLS - 1
            } else {
                value as usize - 1
            }
        };

        let cells = board.cells();
        let mut visited = [false; CELLS];
        let mut transpositions = 0;
        for start in 0..CELLS {
            let mut length = 0;
            let mut at = start;
            while !visited[at] {
                visited[at] = true;
                at = home(cells[at]);
                length += 1;
            }
            if length > 0 {
                transpositions += length - 1;
            }
        }

        let (row, col) = board.find_blank();
        let distance = (SIZE - 1 - row) + (SIZE - 1 - col);
        transpositions % 2 == distance % 2
    }

    fn swap_tiles(board: &Board, a: usize, b: usize) -> Board {
        let mut cells = *board.cells();
        cells.swap(a, b);
        Board::new(cells).unwrap()
    }

    #[test]
    fn test_goal_is_solvable() {
        let report = parity(&Board::GOAL);
        assert_eq!(report.inversions, 0);
        assert_eq!(report.blank_row_from_bottom, 1);
        assert!(report.solvable);
    }

    #[test]
    fn test_swapped_last_tiles_are_unsolvable() {
        let board: Board = "1 2 3 4 5 6 7 8 9 10 11 12 13 15 14 0".parse().unwrap();
        assert_eq!(count_inversions(board.cells()), 1);
        assert!(!is_solvable(&board));
    }

    #[test]
    fn test_swapped_first_tiles_are_unsolvable() {
        let board: Board = "2 1 3 4 5 6 7 8 9 10 11 12 13 14 15 0".parse().unwrap();
        assert!(!is_solvable(&board));
    }

    #[test]
    fn test_blank_row_changes_the_required_parity() {
        // one vertical slide: blank moves to the second row from the bottom
        let (board, _) = Board::GOAL.try_move(Move::Down).unwrap();
        let report = parity(&board);
        assert_eq!(report.blank_row_from_bottom, 2);
        assert_eq!(report.inversions % 2, 1);
        assert!(report.solvable);
    }

    #[test]
    fn test_random_walks_stay_solvable() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut board = Board::GOAL;
        for _ in 0..5000 {
            assert!(is_solvable(&board));
            let options: Vec<Board> = Move::ALL
                .iter()
                .filter_map(|&m| board.try_move(m))
                .map(|(next, _)| next)
                .collect();
            board = *options.choose(&mut rng).unwrap();
        }
    }

    #[test]
    fn test_matches_permutation_parity_on_random_boards() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut cells: Vec<u8> = (0..CELLS as u8).collect();
        let mut solvable = 0;

        for _ in 0..10_000 {
            cells.shuffle(&mut rng);
            let board = Board::from_slice(&cells).unwrap();
            assert_eq!(
                is_solvable(&board),
                reachable_by_permutation_parity(&board),
                "disagreement on {:?}",
                board.cells()
            );
            if is_solvable(&board) {
                solvable += 1;
            }
        }

        // roughly half of all arrangements
        assert!((4000..6000).contains(&solvable), "{solvable} solvable");
    }

    #[test]
    fn test_swapping_two_tiles_flips_solvability() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut cells: Vec<u8> = (0..CELLS as u8).collect();

        for _ in 0..1000 {
            cells.shuffle(&mut rng);
            let board = Board::from_slice(&cells).unwrap();
            let tiles: Vec<usize> = (0..CELLS).filter(|&i| cells[i] != BLANK).collect();
            let picked: Vec<&usize> = tiles.choose_multiple(&mut rng, 2).collect();
            let swapped = swap_tiles(&board, *picked[0], *picked[1]);
            assert_ne!(is_solvable(&board), is_solvable(&swapped));
        }
    }
}
