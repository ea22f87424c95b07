//! The meta-board: a 3x3 grid of sub-boards with forced targeting.

use crate::coordinate::{Coord, SIZE};
use crate::error::GameError;
use crate::rules;
use crate::sub_board::SubBoard;
use crate::types::Mark;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// An ultimate tic-tac-toe game.
///
/// The meta-board owns nine [`SubBoard`]s and constrains each move to the
/// sub-board named by the previous move's cell coordinate (the `target`).
/// When the previous move sends the opponent to a sub-board that is already
/// decided, the target relaxes and any unfinished sub-board is legal.
///
/// Win detection runs the same four-line algorithm the sub-boards use, one
/// level up: the "mark" of a meta cell is the corresponding sub-board's
/// result, and a tied sub-board never completes a line.
///
/// Like [`SubBoard`], games are value types: [`Uttt::make_move`] validates
/// against the receiver and returns a fresh deep snapshot, so a rejected
/// move leaves observable state untouched.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Uttt {
    board: [[SubBoard; SIZE]; SIZE],
    moves: usize,
    winner: Option<Mark>,
    target: Option<Coord>,
}

impl Uttt {
    /// Creates a new game: empty boards, unconstrained first move.
    pub fn new() -> Self {
        Self::default()
    }

    /// True iff the game has been decided, by a meta line or by all nine
    /// sub-boards finishing without one.
    pub fn is_finished(&self) -> bool {
        self.winner.is_some()
    }

    /// The game's result so far: `None` while in progress.
    pub fn winner(&self) -> Option<Mark> {
        self.winner
    }

    /// The game's result.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::GameNotFinished`] while the game is undecided.
    pub fn result(&self) -> Result<Mark, GameError> {
        self.winner.ok_or(GameError::GameNotFinished)
    }

    /// Number of moves accepted so far, across all sub-boards.
    pub fn moves(&self) -> usize {
        self.moves
    }

    /// The sub-board the next move must target, or `None` when any
    /// unfinished sub-board is legal.
    pub fn target(&self) -> Option<Coord> {
        self.target
    }

    /// The sub-board at `coord`, if in range.
    pub fn sub_board(&self, coord: Coord) -> Option<&SubBoard> {
        self.board.get(coord.row).and_then(|row| row.get(coord.col))
    }

    /// True iff `board` satisfies the forced-target rule: in range,
    /// unfinished, and matching the target unless the target is relaxed.
    pub fn is_valid_board(&self, board: Coord) -> bool {
        board.in_bounds()
            && !self.board[board.row][board.col].is_finished()
            && self.target.is_none_or(|target| target == board)
    }

    /// True iff playing `cell` in `board` would be accepted.
    pub fn is_valid_move(&self, board: Coord, cell: Coord) -> bool {
        self.is_valid_board(board) && self.board[board.row][board.col].is_valid_move(cell)
    }

    /// Plays `cell` in `board` for player one.
    ///
    /// # Errors
    ///
    /// Same as [`Self::make_move`].
    pub fn add_my_move(&self, board: Coord, cell: Coord) -> Result<Self, GameError> {
        self.make_move(Mark::One, board, cell)
    }

    /// Plays `cell` in `board` for player two.
    ///
    /// # Errors
    ///
    /// Same as [`Self::make_move`].
    pub fn add_opponent_move(&self, board: Coord, cell: Coord) -> Result<Self, GameError> {
        self.make_move(Mark::Two, board, cell)
    }

    /// Applies a move and returns the updated game as a new snapshot.
    ///
    /// On success the played cell records the meta move counter as its
    /// game-level ordinal, the target moves to `cell` (or relaxes, if that
    /// sub-board is decided), and the meta lines through `board` are
    /// re-checked against sub-board results. If all nine sub-boards are
    /// finished without a meta line, the game settles as a tie.
    ///
    /// # Errors
    ///
    /// - [`GameError::GameFinished`] if the game is already decided.
    /// - [`GameError::InvalidBoard`] if `board` is out of range or does not
    ///   match the forced target.
    /// - [`GameError::BoardFinished`] if the targeted sub-board is decided.
    /// - [`GameError::InvalidPlayer`] / [`GameError::InvalidMove`],
    ///   propagated unchanged from the targeted sub-board.
    #[instrument(skip(self))]
    pub fn make_move(&self, player: Mark, board: Coord, cell: Coord) -> Result<Self, GameError> {
        if self.is_finished() {
            return Err(GameError::GameFinished);
        }
        if !board.in_bounds() || !self.target.is_none_or(|target| target == board) {
            return Err(GameError::InvalidBoard(board));
        }
        if self.board[board.row][board.col].is_finished() {
            return Err(GameError::BoardFinished);
        }

        let played = self.board[board.row][board.col].make_move(player, cell, Some(self.moves))?;

        let mut next = self.clone();
        next.board[board.row][board.col] = played;
        next.moves += 1;
        next.target = if next.board[cell.row][cell.col].is_finished() {
            None
        } else {
            Some(cell)
        };
        next.evaluate_lines(board);
        if next.winner.is_none() && next.all_finished() {
            next.winner = Some(Mark::Tie);
        }
        if let Some(winner) = next.winner {
            debug!(?winner, moves = next.moves, "game decided");
        }
        Ok(next)
    }

    /// All sub-board coordinates a move may currently target, row-major.
    ///
    /// Lets callers enumerate legal moves without probing every cell of
    /// every board.
    pub fn valid_boards(&self) -> Vec<Coord> {
        Coord::ALL
            .iter()
            .copied()
            .filter(|board| self.is_valid_board(*board))
            .collect()
    }

    /// Renders the full grid with sub-board separators. A convenience for
    /// textual inspection, not a durable format.
    pub fn pretty_print(&self) -> String {
        self.to_string()
    }

    /// Re-checks the meta lines through the sub-board just played in,
    /// comparing sub-board results instead of raw cell marks.
    fn evaluate_lines(&mut self, board: Coord) {
        for line in rules::lines_through(board) {
            if self.winner.is_some() {
                break;
            }
            let marks = line.map(|coord| {
                self.board[coord.row][coord.col]
                    .winner()
                    .unwrap_or(Mark::Unplayed)
            });
            if let Some(winner) = rules::line_winner(marks) {
                self.winner = Some(winner);
            }
        }
    }

    fn all_finished(&self) -> bool {
        self.board.iter().flatten().all(SubBoard::is_finished)
    }
}

impl std::fmt::Display for Uttt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let blocks: Vec<String> = self
            .board
            .iter()
            .map(|board_row| {
                (0..SIZE)
                    .map(|row| {
                        board_row
                            .iter()
                            .map(|sub| sub.render_row(row))
                            .collect::<Vec<_>>()
                            .join(" | ")
                    })
                    .collect::<Vec<_>>()
                    .join("\n")
            })
            .collect();
        let separator = blocks
            .first()
            .and_then(|block| block.lines().next())
            .map(|line| "-".repeat(line.len()))
            .unwrap_or_default();
        write!(f, "{}", blocks.join(&format!("\n{separator}\n")))
    }
}
