//! The closed set of rule violations the engine reports.

use crate::coordinate::Coord;
use crate::types::Mark;

/// Error raised when a query or a move violates the rules.
///
/// Every variant is raised synchronously at the violated precondition and
/// carries the offending value where one exists. Validation order puts the
/// most structurally fundamental violation first: finished-state checks,
/// then player validity, then board/cell validity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// The supplied player mark is not allowed to move.
    #[display("invalid player ({:?}), it must be player one, player two or the tie marker", _0)]
    InvalidPlayer(Mark),

    /// The cell coordinate is out of range or the cell is occupied.
    #[display("invalid move coordinates {}", _0)]
    InvalidMove(Coord),

    /// The sub-board coordinate does not satisfy the forced-target rule.
    #[display("invalid next board {}, it must match the last move's cell coordinates", _0)]
    InvalidBoard(Coord),

    /// The targeted sub-board has already been decided.
    #[display("board already finished")]
    BoardFinished,

    /// The meta-board has already been decided.
    #[display("game already finished")]
    GameFinished,

    /// A result was requested before the board was decided.
    #[display("game not finished")]
    GameNotFinished,
}

impl std::error::Error for GameError {}
