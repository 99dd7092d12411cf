//! A time-bounded agent to choose the computer's moves

use tracing::{debug, info, warn};

use std::time::{Duration, Instant};

use crate::{board::*, evaluation::evaluate, MAX_DEPTH};

/// The score of a position the computer has won
pub const WIN_SCORE: i32 = 5000;
/// The score of a position the human has won
pub const LOSS_SCORE: i32 = -WIN_SCORE;
/// The score of a full board with no line for either side
pub const DRAW_SCORE: i32 = 1;

/// Maps a finished game to its sentinel score, or `None` while play continues
pub fn terminal_score(outcome: Outcome) -> Option<i32> {
    match outcome {
        Outcome::ComputerWin => Some(WIN_SCORE),
        Outcome::HumanWin => Some(LOSS_SCORE),
        Outcome::Draw => Some(DRAW_SCORE),
        Outcome::Ongoing => None,
    }
}

/// A source of the current time, so searches can run against a fake clock
pub trait Clock {
    fn now(&self) -> Instant;
}

/// The real monotonic clock
#[derive(Copy, Clone, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// The instant after which a search must stop exploring
///
/// Computed once per move selection and shared read-only by every node.
#[derive(Copy, Clone, Debug)]
pub struct Deadline {
    // `None` when the limit is too large to represent, i.e. never
    at: Option<Instant>,
}

impl Deadline {
    pub fn after(start: Instant, limit: Duration) -> Self {
        Self {
            at: start.checked_add(limit),
        }
    }

    pub fn never() -> Self {
        Self { at: None }
    }

    pub fn has_passed<C: Clock + ?Sized>(&self, clock: &C) -> bool {
        match self.at {
            Some(at) => clock.now() >= at,
            None => false,
        }
    }
}

/// The best root move found by one search
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Move,
    pub score: i32,
    /// The depth of the completed search, or 0 for the unsearched fallback move
    pub depth: usize,
}

/// An agent to pick moves for the computer
///
/// # Notes
/// Moves are chosen by minimax search with alpha-beta pruning, deepened one
/// ply at a time until the time limit expires. Candidate moves are always
/// tried in row-major order, and ties go to the earliest candidate.
///
/// # Position Scoring
/// Scores are from the computer's point of view. A won position scores
/// [`WIN_SCORE`], a lost one [`LOSS_SCORE`] and a drawn one [`DRAW_SCORE`].
/// Positions at the search horizon are scored by [`evaluate`].
///
/// The search owns the board exclusively while it runs, making and undoing
/// provisional moves in place.
pub struct Solver<C: Clock = SystemClock> {
    clock: C,
    time_limit: Duration,
    max_depth: usize,

    /// The number of nodes searched by the last move selection (for diagnostics only)
    pub node_count: usize,
}

impl Solver<SystemClock> {
    /// Creates a new `Solver` that thinks for `time_limit` per move
    pub fn new(time_limit: Duration) -> Self {
        Self::with_clock(time_limit, SystemClock)
    }
}

impl<C: Clock> Solver<C> {
    /// Creates a new `Solver` reading time from the given clock
    pub fn with_clock(time_limit: Duration, clock: C) -> Self {
        Self {
            clock,
            time_limit,
            max_depth: MAX_DEPTH,
            node_count: 0,
        }
    }

    /// Caps the iterative deepening at `max_depth` plies
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Searches a position with the computer to move
    ///
    /// Returns the best score the computer can guarantee within `depth` plies
    fn maximize(
        &mut self,
        board: &mut Board,
        depth: usize,
        mut alpha: i32,
        beta: i32,
        deadline: Deadline,
    ) -> i32 {
        self.node_count += 1;

        if let Some(score) = terminal_score(board.outcome()) {
            return score;
        }
        if depth == 0 || deadline.has_passed(&self.clock) {
            return evaluate(board);
        }

        let mut best = i32::MIN;
        for mv in Move::all() {
            if !board.cell(mv).is_empty() {
                continue;
            }
            if deadline.has_passed(&self.clock) {
                break;
            }

            board.place(mv, Player::Computer);
            let score = self.minimize(board, depth - 1, alpha, beta, deadline);
            board.undo(mv);

            best = best.max(score);
            alpha = alpha.max(score);
            // the human will never allow this line
            if beta <= alpha {
                break;
            }
        }
        best
    }

    /// Searches a position with the human to move
    ///
    /// Returns the lowest score the human can hold the computer to within `depth` plies
    fn minimize(
        &mut self,
        board: &mut Board,
        depth: usize,
        alpha: i32,
        mut beta: i32,
        deadline: Deadline,
    ) -> i32 {
        self.node_count += 1;

        if let Some(score) = terminal_score(board.outcome()) {
            return score;
        }
        if depth == 0 || deadline.has_passed(&self.clock) {
            return evaluate(board);
        }

        let mut best = i32::MAX;
        for mv in Move::all() {
            if !board.cell(mv).is_empty() {
                continue;
            }
            if deadline.has_passed(&self.clock) {
                break;
            }

            board.place(mv, Player::Human);
            let score = self.maximize(board, depth - 1, alpha, beta, deadline);
            board.undo(mv);

            best = best.min(score);
            beta = beta.min(score);
            // the computer already has a better option elsewhere
            if beta <= alpha {
                break;
            }
        }
        best
    }

    /// Performs one full root sweep at a fixed depth
    ///
    /// Every root move is searched with a full window so its score is exact.
    /// Returns `None` if there is no empty cell or if the deadline passes
    /// before the sweep finishes, in which case any partial result is discarded.
    pub fn search_depth(
        &mut self,
        board: &mut Board,
        depth: usize,
        deadline: Deadline,
    ) -> Option<SearchResult> {
        let mut best: Option<SearchResult> = None;

        for mv in Move::all() {
            if !board.cell(mv).is_empty() {
                continue;
            }
            if deadline.has_passed(&self.clock) {
                return None;
            }

            board.place(mv, Player::Computer);
            let score =
                self.minimize(board, depth.saturating_sub(1), i32::MIN, i32::MAX, deadline);
            board.undo(mv);

            if best.map_or(true, |best| score > best.score) {
                best = Some(SearchResult {
                    best_move: mv,
                    score,
                    depth,
                });
            }
        }

        if deadline.has_passed(&self.clock) {
            return None;
        }
        best
    }

    /// Chooses the computer's move with iterative deepening, leaving the board unchanged
    ///
    /// Keeps the result of the deepest search that finished before the deadline.
    /// If not even the depth 1 search finishes, falls back to the first empty
    /// cell in row-major order. Returns `None` only for a full board.
    pub fn best_move(&mut self, board: &mut Board) -> Option<SearchResult> {
        let deadline = Deadline::after(self.clock.now(), self.time_limit);
        self.node_count = 0;

        let mut committed = None;
        for depth in 1..=self.max_depth {
            if deadline.has_passed(&self.clock) {
                break;
            }
            match self.search_depth(board, depth, deadline) {
                Some(result) => {
                    debug!(
                        depth,
                        best_move = %result.best_move,
                        score = result.score,
                        nodes = self.node_count,
                        "completed search depth"
                    );
                    committed = Some(result);
                }
                None => {
                    debug!(depth, nodes = self.node_count, "search depth abandoned");
                    break;
                }
            }
        }

        committed.or_else(|| {
            let fallback = board.first_empty()?;
            warn!(best_move = %fallback, "no search depth completed, playing first empty cell");
            Some(SearchResult {
                best_move: fallback,
                score: evaluate(board),
                depth: 0,
            })
        })
    }

    /// Chooses the computer's move and plays it on the board
    ///
    /// Returns the move played, or `None` (leaving the board untouched) if
    /// the board has no empty cell.
    pub fn make_move(&mut self, board: &mut Board) -> Option<Move> {
        let result = self.best_move(board)?;
        board.place(result.best_move, Player::Computer);

        info!(
            best_move = %result.best_move,
            score = result.score,
            depth = result.depth,
            nodes = self.node_count,
            "computer move"
        );
        Some(result.best_move)
    }
}
