//! A single 3x3 tic-tac-toe board.

use crate::coordinate::{Coord, SIZE};
use crate::error::GameError;
use crate::rules;
use crate::types::{Cell, Mark};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A single 3x3 board: cell occupancy, move count and its own result.
///
/// Boards are value types. [`SubBoard::make_move`] validates against the
/// receiver and applies the move to a fresh deep snapshot, so every
/// accepted move yields an independent board and a rejected move changes
/// nothing. Once `winner` is set the board is immutable; further moves are
/// rejected with [`GameError::BoardFinished`].
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubBoard {
    board: [[Cell; SIZE]; SIZE],
    moves: usize,
    winner: Option<Mark>,
}

impl SubBoard {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// True iff the board has been decided, by a win or a tie.
    pub fn is_finished(&self) -> bool {
        self.winner.is_some()
    }

    /// True iff all cells are occupied.
    pub fn is_full(&self) -> bool {
        self.moves == SIZE * SIZE
    }

    /// The board's result so far: `None` while undecided.
    pub fn winner(&self) -> Option<Mark> {
        self.winner
    }

    /// The board's result.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::GameNotFinished`] while the board is undecided.
    pub fn result(&self) -> Result<Mark, GameError> {
        self.winner.ok_or(GameError::GameNotFinished)
    }

    /// Number of moves accepted so far. Always equals the number of
    /// non-unplayed cells.
    pub fn moves(&self) -> usize {
        self.moves
    }

    /// The cell at `coord`, if in range.
    pub fn cell(&self, coord: Coord) -> Option<&Cell> {
        self.board.get(coord.row).and_then(|row| row.get(coord.col))
    }

    /// True iff `cell` is in range and unplayed.
    pub fn is_valid_move(&self, cell: Coord) -> bool {
        cell.in_bounds() && self.board[cell.row][cell.col].is_unplayed()
    }

    /// Plays `cell` for player one, without a game-level move ordinal.
    ///
    /// # Errors
    ///
    /// Same as [`Self::make_move`].
    pub fn add_my_move(&self, cell: Coord) -> Result<Self, GameError> {
        self.make_move(Mark::One, cell, None)
    }

    /// Plays `cell` for player two, without a game-level move ordinal.
    ///
    /// # Errors
    ///
    /// Same as [`Self::make_move`].
    pub fn add_opponent_move(&self, cell: Coord) -> Result<Self, GameError> {
        self.make_move(Mark::Two, cell, None)
    }

    /// Applies a move and returns the updated board as a new snapshot.
    ///
    /// The cell records `player`, its ordinal within this board, and
    /// `main_index` (the move's ordinal within the whole game, when the
    /// caller tracks one). The board then re-checks exactly the lines
    /// through `cell` and settles a tie if it filled up without a winner.
    ///
    /// # Errors
    ///
    /// - [`GameError::BoardFinished`] if the board is full or decided.
    /// - [`GameError::InvalidPlayer`] if `player` is [`Mark::Unplayed`].
    /// - [`GameError::InvalidMove`] if `cell` is out of range or occupied.
    #[instrument(skip(self))]
    pub fn make_move(
        &self,
        player: Mark,
        cell: Coord,
        main_index: Option<usize>,
    ) -> Result<Self, GameError> {
        if self.is_full() || self.is_finished() {
            return Err(GameError::BoardFinished);
        }
        if !player.is_playable() {
            return Err(GameError::InvalidPlayer(player));
        }
        if !self.is_valid_move(cell) {
            return Err(GameError::InvalidMove(cell));
        }

        let mut next = self.clone();
        next.board[cell.row][cell.col].play(player, next.moves, main_index);
        next.moves += 1;
        next.evaluate_lines(cell);
        if next.is_full() && next.winner.is_none() {
            next.winner = Some(Mark::Tie);
        }
        if let Some(winner) = next.winner {
            debug!(?winner, moves = next.moves, "sub-board decided");
        }
        Ok(next)
    }

    /// All unplayed cells, scanned row-major. Recomputed on each call.
    pub fn valid_moves(&self) -> Vec<Coord> {
        Coord::ALL
            .iter()
            .copied()
            .filter(|cell| self.is_valid_move(*cell))
            .collect()
    }

    /// Renders the board: one line per row, space-separated symbols, `-`
    /// for anything that is not a claim mark.
    pub fn pretty_print(&self) -> String {
        self.to_string()
    }

    /// Re-checks the lines through the move just played: row, then column,
    /// then diagonals, stopping as soon as the board is decided.
    fn evaluate_lines(&mut self, cell: Coord) {
        for line in rules::lines_through(cell) {
            if self.winner.is_some() {
                break;
            }
            let marks = line.map(|coord| self.board[coord.row][coord.col].mark());
            if let Some(winner) = rules::line_winner(marks) {
                self.winner = Some(winner);
            }
        }
    }

    pub(crate) fn render_row(&self, row: usize) -> String {
        self.board[row]
            .iter()
            .map(|cell| cell.mark().symbol().to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl std::fmt::Display for SubBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rows: Vec<String> = (0..SIZE).map(|row| self.render_row(row)).collect();
        write!(f, "{}", rows.join("\n"))
    }
}
