//! Errors raised when a raw configuration is turned into a [`Board`](crate::board::Board).

use thiserror::Error;

/// Why a user-supplied configuration is not a valid 4x4 board.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    /// The configuration does not hold exactly sixteen cells.
    #[error("a board needs exactly 16 cells, found {found}")]
    WrongLength { found: usize },

    /// A cell holds a value outside `0..=15`.
    #[error("tile {value} is out of range, tiles are numbered 0 to 15")]
    OutOfRange { value: u8 },

    /// The same tile appears more than once.
    #[error("tile {value} appears more than once")]
    Duplicate { value: u8 },

    /// A token could not be read as a tile number.
    #[error("'{token}' is not a tile number")]
    Parse { token: String },
}

pub type Result<T> = std::result::Result<T, BoardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offending_value() {
        assert_eq!(
            BoardError::WrongLength { found: 15 }.to_string(),
            "a board needs exactly 16 cells, found 15"
        );
        assert_eq!(
            BoardError::Duplicate { value: 7 }.to_string(),
            "tile 7 appears more than once"
        );
        assert_eq!(
            BoardError::Parse {
                token: "x".to_string()
            }
            .to_string(),
            "'x' is not a tile number"
        );
    }
}
