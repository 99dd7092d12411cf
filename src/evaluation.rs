//! Positional scoring for positions the search cannot see to the end of

use crate::board::{Board, Cell};
use crate::LINE_LENGTH;

/// Scores one window for the owner of `marks` cells in it, given `empty` empty cells.
/// Windows holding any opposing mark are dead and are never passed in.
const fn window_score(marks: usize, empty: usize) -> i32 {
    match (marks, empty) {
        (4, 0) => 1000,
        (3, 1) => 100,
        (2, 2) => 10,
        (1, 3) => 1,
        _ => 0,
    }
}

/// Returns the computer's potential minus the human's potential, summed over
/// every horizontal and vertical window
///
/// Positive scores favour the computer. Only meaningful for positions the
/// terminal detector reports as ongoing.
pub fn evaluate(board: &Board) -> i32 {
    let mut computer_score = 0;
    let mut human_score = 0;

    for window in board.windows() {
        let computer = window.iter().filter(|&&cell| cell == Cell::Computer).count();
        let human = window.iter().filter(|&&cell| cell == Cell::Human).count();
        let empty = LINE_LENGTH - computer - human;

        if human == 0 {
            computer_score += window_score(computer, empty);
        }
        if computer == 0 {
            human_score += window_score(human, empty);
        }
    }

    computer_score - human_score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Move, Player};

    #[test]
    fn empty_board_is_level() {
        assert_eq!(evaluate(&Board::new()), 0);
    }

    #[test]
    fn corner_mark_touches_two_windows() {
        // A1 sits in one horizontal and one vertical window, each with three empties
        let mut board = Board::new();
        board.place(Move::new(0, 0), Player::Computer);
        assert_eq!(evaluate(&board), 2);

        board.undo(Move::new(0, 0));
        board.place(Move::new(0, 0), Player::Human);
        assert_eq!(evaluate(&board), -2);
    }

    #[test]
    fn mixed_windows_are_dead() {
        let mut board = Board::new();
        board.place(Move::new(0, 0), Player::Computer);
        board.place(Move::new(0, 1), Player::Human);

        // X at A1 keeps only its column window: 1
        // O at A2 keeps row window A2-A5 and its column window: 2
        assert_eq!(evaluate(&board), -1);
    }

    #[test]
    fn table_values() {
        assert_eq!(window_score(4, 0), 1000);
        assert_eq!(window_score(3, 1), 100);
        assert_eq!(window_score(2, 2), 10);
        assert_eq!(window_score(1, 3), 1);
        assert_eq!(window_score(0, 4), 0);
    }
}
