//! Plain-text formatting of boards, solutions and statistics.

use crate::board::{Board, BLANK, SIZE};
use crate::node::SearchNode;
use crate::solver::SearchStats;

/// Number of lines [`format_grid`] produces.
pub const GRID_LINES: usize = 2 * SIZE + 1;

/// Draws `board` as a boxed 4x4 grid, leaving the blank cell empty.
pub fn format_grid(board: &Board) -> String {
    let border = |left: char, middle: char, right: char| {
        let mut line = String::new();
        line.push(left);
        for col in 0..SIZE {
            line.push_str("────");
            line.push(if col + 1 == SIZE { right } else { middle });
        }
        line.push('\n');
        line
    };

    let mut output = border('┌', '┬', '┐');
    for row in 0..SIZE {
        output.push('│');
        for col in 0..SIZE {
            match board.get(row, col) {
                BLANK => output.push_str("    │"),
                value => output.push_str(&format!(" {value:2} │")),
            }
        }
        output.push('\n');
        if row + 1 < SIZE {
            output.push_str(&border('├', '┼', '┤'));
        }
    }
    output.push_str(&border('└', '┴', '┘'));
    output
}

/// All sixteen cells on one line, in a form [`Board`]'s parser accepts.
pub fn format_line(board: &Board) -> String {
    board
        .cells()
        .iter()
        .map(|value| value.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Header line for one step of a solution: its label and g/h/f.
pub fn format_step_header(index: usize, node: &SearchNode) -> String {
    let label = node
        .last_move
        .map_or_else(|| "initial board".to_string(), |slide| slide.to_string());
    format!(
        "Step {index}: {label}  (g={}, h={}, f={})",
        node.moves, node.heuristic, node.cost
    )
}

/// Every step of a solution path with its board.
pub fn format_solution(path: &[SearchNode]) -> String {
    let mut output = String::new();
    for (index, node) in path.iter().enumerate() {
        output.push_str(&format_step_header(index, node));
        output.push('\n');
        output.push_str(&format_grid(&node.board));
        output.push('\n');
    }
    output
}

/// Summary of a run's statistics.
pub fn format_stats(stats: &SearchStats) -> String {
    let mut output = String::new();
    if let Some(length) = stats.solution_length {
        output.push_str(&format!("Solution length: {length}\n"));
    }
    output.push_str(&format!("Boards explored: {}\n", stats.explored));
    output.push_str(&format!("Max frontier:    {}\n", stats.max_frontier));
    output.push_str(&format!(
        "Time:            {:.3}s\n",
        stats.elapsed.as_secs_f64()
    ));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::solve;
    use std::time::Duration;

    #[test]
    fn test_grid() {
        insta::assert_snapshot!(format_grid(&Board::GOAL), @r###"
        ┌────┬────┬────┬────┐
        │  1 │  2 │  3 │  4 │
        ├────┼────┼────┼────┤
        │  5 │  6 │  7 │  8 │
        ├────┼────┼────┼────┤
        │  9 │ 10 │ 11 │ 12 │
        ├────┼────┼────┼────┤
        │ 13 │ 14 │ 15 │    │
        └────┴────┴────┴────┘
        "###);
        assert_eq!(format_grid(&Board::GOAL).lines().count(), GRID_LINES);
    }

    #[test]
    fn test_line_round_trips_through_parser() {
        let line = format_line(&Board::GOAL);
        assert_eq!(line, "1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 0");
        assert_eq!(line.parse::<Board>(), Ok(Board::GOAL));
    }

    #[test]
    fn test_solution_listing() {
        let board: Board = "1 2 3 4 5 6 7 8 9 10 11 12 13 14 0 15".parse().unwrap();
        let result = solve(&board);
        let path = result.path().unwrap();

        insta::assert_snapshot!(format_solution(path), @r###"
        Step 0: initial board  (g=0, h=1, f=1)
        ┌────┬────┬────┬────┐
        │  1 │  2 │  3 │  4 │
        ├────┼────┼────┼────┤
        │  5 │  6 │  7 │  8 │
        ├────┼────┼────┼────┤
        │  9 │ 10 │ 11 │ 12 │
        ├────┼────┼────┼────┤
        │ 13 │ 14 │    │ 15 │
        └────┴────┴────┴────┘

        Step 1: slide 15 left  (g=1, h=0, f=1)
        ┌────┬────┬────┬────┐
        │  1 │  2 │  3 │  4 │
        ├────┼────┼────┼────┤
        │  5 │  6 │  7 │  8 │
        ├────┼────┼────┼────┤
        │  9 │ 10 │ 11 │ 12 │
        ├────┼────┼────┼────┤
        │ 13 │ 14 │ 15 │    │
        └────┴────┴────┴────┘
        "###);
    }

    #[test]
    fn test_stats_summary() {
        let stats = SearchStats {
            solvable: true,
            elapsed: Duration::from_millis(1250),
            explored: 900,
            max_frontier: 902,
            solution_length: Some(30),
        };
        insta::assert_snapshot!(format_stats(&stats), @r###"
        Solution length: 30
        Boards explored: 900
        Max frontier:    902
        Time:            1.250s
        "###);
    }
}
