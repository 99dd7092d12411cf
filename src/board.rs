use anyhow::{anyhow, Result};

use std::fmt;
use std::str::FromStr;

use crate::error::{BoardError, ParseMoveError};
use crate::{BOARD_SIZE, LINE_LENGTH};

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Cell {
    Empty,
    Computer,
    Human,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    fn symbol(&self) -> char {
        match self {
            Cell::Empty => '-',
            Cell::Computer => 'X',
            Cell::Human => 'O',
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::Empty
    }
}

/// One of the two sides of the game
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Player {
    Computer,
    Human,
}

impl Player {
    /// The mark this player leaves on a claimed cell
    pub fn cell(self) -> Cell {
        match self {
            Player::Computer => Cell::Computer,
            Player::Human => Cell::Human,
        }
    }

    pub fn opponent(self) -> Player {
        match self {
            Player::Computer => Player::Human,
            Player::Human => Player::Computer,
        }
    }
}

/// The state of a board as seen by the terminal detector
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Outcome {
    ComputerWin,
    HumanWin,
    Draw,
    Ongoing,
}

impl Outcome {
    pub fn is_over(&self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Outcome::ComputerWin => "computer wins",
            Outcome::HumanWin => "human wins",
            Outcome::Draw => "draw",
            Outcome::Ongoing => "ongoing",
        };
        f.write_str(text)
    }
}

/// A cell to claim, addressed by zero-indexed row and column
///
/// Moves are written as a row letter followed by a column digit, so
/// row 0, column 0 is `A1` and row 2, column 4 is `C5`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Move {
    pub row: usize,
    pub column: usize,
}

impl Move {
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    pub fn in_bounds(&self) -> bool {
        self.row < BOARD_SIZE && self.column < BOARD_SIZE
    }

    /// Every cell of the board in row-major order
    pub fn all() -> impl Iterator<Item = Move> {
        (0..BOARD_SIZE * BOARD_SIZE).map(|i| Move::new(i / BOARD_SIZE, i % BOARD_SIZE))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.in_bounds() {
            return write!(f, "({}, {})", self.row, self.column);
        }
        write!(f, "{}{}", (b'A' + self.row as u8) as char, self.column + 1)
    }
}

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim().to_uppercase();
        let mut chars = text.chars();

        let (row_char, column_char) = match (chars.next(), chars.next(), chars.next()) {
            (None, _, _) => return Err(ParseMoveError::Empty),
            (Some(row), Some(column), None) => (row, column),
            _ => return Err(ParseMoveError::Format(text)),
        };

        let last_row = (b'A' + BOARD_SIZE as u8 - 1) as char;
        if !('A'..=last_row).contains(&row_char) {
            return Err(ParseMoveError::Row(row_char));
        }
        let column = match column_char.to_digit(10).map(|c| c as usize) {
            Some(column @ 1..=BOARD_SIZE) => column - 1,
            _ => return Err(ParseMoveError::Column(column_char)),
        };

        Ok(Move::new(row_char as usize - 'A' as usize, column))
    }
}

/// The playing grid, stored row-major
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Builds a board from a picture of its rows, using `X` for the computer,
    /// `O` for the human and `-` or `.` for empty cells. Whitespace is ignored.
    pub fn from_rows<S: AsRef<str>>(rows: S) -> Result<Self> {
        let mut board = Self::new();
        let mut filled = 0;

        for symbol in rows.as_ref().chars().filter(|c| !c.is_whitespace()) {
            if filled == BOARD_SIZE * BOARD_SIZE {
                return Err(anyhow!("too many cells, expected {}", BOARD_SIZE * BOARD_SIZE));
            }
            let cell = match symbol {
                'X' | 'x' => Cell::Computer,
                'O' | 'o' => Cell::Human,
                '-' | '.' => Cell::Empty,
                _ => return Err(anyhow!("could not parse '{}' as a cell", symbol)),
            };
            board.cells[filled / BOARD_SIZE][filled % BOARD_SIZE] = cell;
            filled += 1;
        }

        if filled != BOARD_SIZE * BOARD_SIZE {
            return Err(anyhow!(
                "expected {} cells, found {}",
                BOARD_SIZE * BOARD_SIZE,
                filled
            ));
        }
        Ok(board)
    }

    pub fn get(&self, row: usize, column: usize) -> Cell {
        self.cells[row][column]
    }

    pub fn cell(&self, mv: Move) -> Cell {
        self.cells[mv.row][mv.column]
    }

    /// Claims a cell for `player`, rejecting moves off the board or onto an occupied cell
    pub fn play_checked(&mut self, mv: Move, player: Player) -> Result<(), BoardError> {
        if !mv.in_bounds() {
            return Err(BoardError::OutOfBounds {
                row: mv.row,
                column: mv.column,
            });
        }
        if !self.cell(mv).is_empty() {
            return Err(BoardError::Occupied(mv));
        }
        self.place(mv, player);
        Ok(())
    }

    /// Claims a cell without validation, for provisional moves during search
    pub(crate) fn place(&mut self, mv: Move, player: Player) {
        debug_assert!(self.cell(mv).is_empty());
        self.cells[mv.row][mv.column] = player.cell();
    }

    /// Reverts a provisional move made by [`place`](Board::place)
    pub(crate) fn undo(&mut self, mv: Move) {
        self.cells[mv.row][mv.column] = Cell::Empty;
    }

    /// Iterates over the empty cells in row-major order
    pub fn empty_cells(&self) -> impl Iterator<Item = Move> + '_ {
        Move::all().filter(move |&mv| self.cell(mv).is_empty())
    }

    pub fn first_empty(&self) -> Option<Move> {
        self.empty_cells().next()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|cell| !cell.is_empty())
    }

    pub fn num_moves(&self) -> usize {
        self.cells.iter().flatten().filter(|cell| !cell.is_empty()).count()
    }

    /// Iterates over every horizontal window, then every vertical window
    pub fn windows(&self) -> impl Iterator<Item = [Cell; LINE_LENGTH]> + '_ {
        let starts = BOARD_SIZE - LINE_LENGTH + 1;

        let horizontal = (0..BOARD_SIZE)
            .flat_map(move |row| (0..starts).map(move |column| (row, column, 0, 1)));
        let vertical = (0..starts)
            .flat_map(move |row| (0..BOARD_SIZE).map(move |column| (row, column, 1, 0)));

        horizontal
            .chain(vertical)
            .map(move |(row, column, d_row, d_column)| {
                let mut window = [Cell::Empty; LINE_LENGTH];
                for (i, cell) in window.iter_mut().enumerate() {
                    *cell = self.cells[row + i * d_row][column + i * d_column];
                }
                window
            })
    }

    /// Scans the whole board for a completed line or a full board
    ///
    /// A computer line takes priority over a human line, and a completed line
    /// takes priority over a full board.
    pub fn outcome(&self) -> Outcome {
        let mut human_line = false;
        for window in self.windows() {
            if window.iter().all(|&cell| cell == Cell::Computer) {
                return Outcome::ComputerWin;
            }
            human_line |= window.iter().all(|&cell| cell == Cell::Human);
        }

        if human_line {
            Outcome::HumanWin
        } else if self.is_full() {
            Outcome::Draw
        } else {
            Outcome::Ongoing
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, " ")?;
        for column in 1..=BOARD_SIZE {
            write!(f, " {}", column)?;
        }
        writeln!(f)?;

        for (row, cells) in self.cells.iter().enumerate() {
            write!(f, "{}", (b'A' + row as u8) as char)?;
            for cell in cells.iter() {
                write!(f, " {}", cell.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
