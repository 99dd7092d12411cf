//! Turn bookkeeping for a single human versus computer game

use crate::board::*;
use crate::config::GameConfig;
use crate::error::BoardError;
use crate::solver::{Clock, SearchResult, Solver, SystemClock};

/// A game in progress: the board, whose turn it is, and the computer's solver
///
/// Moves alternate strictly, so the board is only ever touched by one side at
/// a time. Once [`outcome`](Game::outcome) reports the game is over, further
/// moves are rejected.
pub struct Game<C: Clock = SystemClock> {
    board: Board,
    solver: Solver<C>,
    to_move: Player,
    state: Outcome,
}

impl Game<SystemClock> {
    pub fn new(config: &GameConfig) -> Self {
        Self::with_solver(config, Solver::new(config.time_limit()))
    }
}

impl<C: Clock> Game<C> {
    pub fn with_solver(config: &GameConfig, solver: Solver<C>) -> Self {
        Self {
            board: Board::new(),
            solver,
            to_move: config.first_player(),
            state: Outcome::Ongoing,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Player {
        self.to_move
    }

    pub fn outcome(&self) -> Outcome {
        self.state
    }

    fn check_turn(&self, player: Player) -> Result<(), BoardError> {
        if self.state.is_over() {
            return Err(BoardError::GameOver(self.state));
        }
        if self.to_move != player {
            return Err(BoardError::OutOfTurn(player));
        }
        Ok(())
    }

    /// Plays a human move, returning the state of the game afterwards
    pub fn play_human(&mut self, mv: Move) -> Result<Outcome, BoardError> {
        self.check_turn(Player::Human)?;
        self.board.play_checked(mv, Player::Human)?;

        self.state = self.board.outcome();
        self.to_move = Player::Computer;
        Ok(self.state)
    }

    /// Lets the computer think and play, returning its search result and the
    /// state of the game afterwards
    pub fn play_computer(&mut self) -> Result<(SearchResult, Outcome), BoardError> {
        self.check_turn(Player::Computer)?;
        let result = match self.solver.best_move(&mut self.board) {
            Some(result) => result,
            None => return Err(BoardError::GameOver(self.board.outcome())),
        };
        self.board.play_checked(result.best_move, Player::Computer)?;

        self.state = self.board.outcome();
        self.to_move = Player::Human;
        Ok((result, self.state))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quick_game(computer_first: bool) -> Game {
        let config = GameConfig::new(computer_first, 1).unwrap();
        Game::with_solver(&config, Solver::new(config.time_limit()).with_max_depth(1))
    }

    #[test]
    fn turns_alternate() {
        let mut game = quick_game(false);
        assert_eq!(game.to_move(), Player::Human);
        assert_eq!(
            game.play_computer().unwrap_err(),
            BoardError::OutOfTurn(Player::Computer)
        );

        assert_eq!(game.play_human(Move::new(4, 4)), Ok(Outcome::Ongoing));
        assert_eq!(game.to_move(), Player::Computer);

        let (result, outcome) = game.play_computer().unwrap();
        assert_eq!(outcome, Outcome::Ongoing);
        assert_eq!(game.board().cell(result.best_move), Cell::Computer);
        assert_eq!(game.board().num_moves(), 2);
        assert_eq!(game.to_move(), Player::Human);
    }

    #[test]
    fn occupied_cell_keeps_the_turn() {
        let mut game = quick_game(false);
        game.play_human(Move::new(0, 0)).unwrap();
        let (result, _) = game.play_computer().unwrap();

        assert_eq!(
            game.play_human(result.best_move),
            Err(BoardError::Occupied(result.best_move))
        );
        assert_eq!(game.to_move(), Player::Human);
    }

    #[test]
    fn no_move_reports_the_board_outcome() -> anyhow::Result<()> {
        let mut game = quick_game(true);
        // full board holding a computer line, while the game still thinks play continues
        game.board = Board::from_rows(
            "X X X X O O X X
             O O X X O O X X
             X X O O X X O O
             O O X X O O X X
             X X O O X X O O
             O O X X O O X X
             X X O O X X O O
             O O X X O O X X",
        )?;
        assert_eq!(
            game.play_computer().unwrap_err(),
            BoardError::GameOver(Outcome::ComputerWin)
        );
        Ok(())
    }

    #[test]
    fn finished_game_rejects_moves() {
        let mut game = quick_game(true);
        while !game.outcome().is_over() {
            match game.to_move() {
                Player::Computer => {
                    game.play_computer().unwrap();
                }
                Player::Human => {
                    let mv = game.board().first_empty().unwrap();
                    game.play_human(mv).unwrap();
                }
            }
        }

        let outcome = game.outcome();
        assert_eq!(outcome, game.board().outcome());
        assert_eq!(
            game.play_computer().unwrap_err(),
            BoardError::GameOver(outcome)
        );
        assert_eq!(
            game.play_human(Move::new(0, 0)),
            Err(BoardError::GameOver(outcome))
        );
    }
}
