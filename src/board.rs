use std::fmt;
use std::str::FromStr;

use crate::error::{BoardError, Result};

/// Width and height of the grid.
pub const SIZE: usize = 4;

/// Number of cells on the grid.
pub const CELLS: usize = SIZE * SIZE;

/// Value of the empty cell.
pub const BLANK: u8 = 0;

/// Direction a tile slides in, as seen on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Up,
    Left,
    Down,
    Right,
}

impl Move {
    pub const ALL: [Move; 4] = [Move::Up, Move::Left, Move::Down, Move::Right];

    /// Offset `(row, col)` from the blank to the tile that slides into it.
    pub fn as_offset(&self) -> (isize, isize) {
        match self {
            Move::Up => (1, 0),
            Move::Left => (0, 1),
            Move::Down => (-1, 0),
            Move::Right => (0, -1),
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Move::Up => Move::Down,
            Move::Down => Move::Up,
            Move::Left => Move::Right,
            Move::Right => Move::Left,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            Move::Up => "up",
            Move::Left => "left",
            Move::Down => "down",
            Move::Right => "right",
        };
        write!(f, "{}", s)
    }
}

/// A single slide: which tile moved into the blank, and which way it went.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slide {
    pub tile: u8,
    pub direction: Move,
}

impl fmt::Display for Slide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "slide {} {}", self.tile, self.direction)
    }
}

/// A 4x4 configuration stored row-major.
///
/// The cells are always a permutation of `0..16`; every constructor that
/// accepts outside data validates this, so the search code can rely on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board([u8; CELLS]);

impl Board {
    /// The solved configuration: `1..=15` followed by the blank.
    pub const GOAL: Board = Board([1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, BLANK]);

    /// Validates that `cells` is a permutation of `0..16`.
    pub fn new(cells: [u8; CELLS]) -> Result<Self> {
        let mut seen = [false; CELLS];
        for &value in &cells {
            let slot = seen
                .get_mut(value as usize)
                .ok_or(BoardError::OutOfRange { value })?;
            if *slot {
                return Err(BoardError::Duplicate { value });
            }
            *slot = true;
        }
        Ok(Self(cells))
    }

    pub fn from_slice(cells: &[u8]) -> Result<Self> {
        let cells: [u8; CELLS] = cells
            .try_into()
            .map_err(|_| BoardError::WrongLength { found: cells.len() })?;
        Self::new(cells)
    }

    pub fn cells(&self) -> &[u8; CELLS] {
        &self.0
    }

    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.0[row * SIZE + col]
    }

    /// Linear index of the blank.
    pub fn blank_index(&self) -> usize {
        // every validated board holds exactly one blank
        self.0
            .iter()
            .position(|&value| value == BLANK)
            .unwrap_or_default()
    }

    /// Row and column of the blank.
    pub fn find_blank(&self) -> (usize, usize) {
        let index = self.blank_index();
        (index / SIZE, index % SIZE)
    }

    pub fn is_goal(&self) -> bool {
        *self == Self::GOAL
    }

    /// Sum over all tiles of the grid distance to their solved position.
    ///
    /// Never overestimates the remaining number of slides and changes by
    /// exactly one per slide, which is what A* needs to stay optimal.
    pub fn manhattan_heuristic(&self) -> usize {
        self.0
            .iter()
            .enumerate()
            .filter(|&(_, &value)| value != BLANK)
            .map(|(index, &value)| {
                let (row, col) = (index / SIZE, index % SIZE);
                let target = (value - 1) as usize;
                let (target_row, target_col) = (target / SIZE, target % SIZE);
                row.abs_diff(target_row) + col.abs_diff(target_col)
            })
            .sum()
    }

    /// Slides the tile that sits in `movement`'s way into the blank.
    ///
    /// Returns `None` when that tile would come from outside the grid.
    pub fn try_move(&self, movement: Move) -> Option<(Self, Slide)> {
        let (row, col) = self.find_blank();
        let (dr, dc) = movement.as_offset();

        let new_row = row.checked_add_signed(dr).filter(|&r| r < SIZE)?;
        let new_col = col.checked_add_signed(dc).filter(|&c| c < SIZE)?;

        let blank = row * SIZE + col;
        let tile = new_row * SIZE + new_col;

        let mut cells = self.0;
        cells.swap(blank, tile);

        Some((
            Self(cells),
            Slide {
                tile: self.0[tile],
                direction: movement,
            },
        ))
    }

    /// Slides `tile` into the blank if the two are orthogonally adjacent.
    pub fn slide_tile(&self, tile: u8) -> Option<(Self, Slide)> {
        Move::ALL
            .iter()
            .filter_map(|&movement| self.try_move(movement))
            .find(|(_, slide)| slide.tile == tile && tile != BLANK)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::GOAL
    }
}

impl TryFrom<&[u8]> for Board {
    type Error = BoardError;

    fn try_from(cells: &[u8]) -> Result<Self> {
        Self::from_slice(cells)
    }
}

impl TryFrom<Vec<u8>> for Board {
    type Error = BoardError;

    fn try_from(cells: Vec<u8>) -> Result<Self> {
        Self::from_slice(&cells)
    }
}

/// Reads sixteen tile numbers separated by whitespace and/or commas.
impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self> {
        let cells = s
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|token| !token.is_empty())
            .map(|token| {
                token.parse::<u8>().map_err(|_| BoardError::Parse {
                    token: token.to_string(),
                })
            })
            .collect::<Result<Vec<u8>>>()?;
        Self::from_slice(&cells)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.0.chunks(SIZE) {
            for &val in row {
                if val == BLANK {
                    write!(f, "   ")?;
                } else {
                    write!(f, "{:2} ", val)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
