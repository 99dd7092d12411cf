use thiserror::Error;

use crate::board::{Move, Outcome, Player};
use crate::BOARD_SIZE;

/// Errors raised when a move cannot be applied to a board.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("cell ({row}, {column}) is off the {size}x{size} board", size = BOARD_SIZE)]
    OutOfBounds { row: usize, column: usize },

    #[error("position {0} is already occupied")]
    Occupied(Move),

    #[error("the game is already over ({0})")]
    GameOver(Outcome),

    #[error("it is not the {0:?} player's turn")]
    OutOfTurn(Player),
}

/// Errors raised when reading a move written as a row letter and a column digit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseMoveError {
    #[error("please enter a move (e.g., A1)")]
    Empty,

    #[error("invalid format '{0}', use a row letter and a column digit like A1")]
    Format(String),

    #[error("invalid row '{0}', row must be A-H")]
    Row(char),

    #[error("invalid column '{0}', column must be 1-8")]
    Column(char),
}

/// Errors raised when validating game setup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_error_display() {
        let err = BoardError::Occupied(Move::new(2, 4));
        assert_eq!(err.to_string(), "position C5 is already occupied");

        let err = BoardError::OutOfBounds { row: 8, column: 0 };
        assert_eq!(err.to_string(), "cell (8, 0) is off the 8x8 board");
    }

    #[test]
    fn test_parse_error_display() {
        assert_eq!(
            ParseMoveError::Row('J').to_string(),
            "invalid row 'J', row must be A-H"
        );
        assert_eq!(
            ParseMoveError::Column('9').to_string(),
            "invalid column '9', column must be 1-8"
        );
    }
}
