//! Core domain types shared by the sub-board and the meta-board.

use serde::{Deserialize, Serialize};

/// The value recorded in a cell, or carried by a board result.
///
/// `One` is the engine owner's mark ("me") and `Two` the opponent's
/// ("opponent"). `Tie` is primarily a board result, but it is also accepted
/// as the player of a move: the meta layer records sub-board outcomes the
/// same way cells record moves, and a decided-but-drawn sub-board lands as
/// a tie mark.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// No mark recorded yet.
    #[default]
    Unplayed,
    /// A decided board with no winner.
    Tie,
    /// Player one ("me").
    One,
    /// Player two ("opponent").
    Two,
}

impl Mark {
    /// True iff this mark stakes a player's claim: exactly `One` or `Two`.
    ///
    /// Line detection matches claim marks only, so tied boards and unplayed
    /// cells never head or complete a line.
    pub fn is_claim(self) -> bool {
        matches!(self, Mark::One | Mark::Two)
    }

    /// True iff this mark may be supplied as the player of a move.
    pub fn is_playable(self) -> bool {
        !matches!(self, Mark::Unplayed)
    }

    /// Symbol used by the textual rendering: `X`, `O`, or `-`.
    pub fn symbol(self) -> char {
        match self {
            Mark::One => 'X',
            Mark::Two => 'O',
            Mark::Unplayed | Mark::Tie => '-',
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// One playable square.
///
/// Written exactly once, by the accepted move that claims it; constructing
/// a new board is the only way to reset a cell.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    mark: Mark,
    sub_board_index: Option<usize>,
    main_index: Option<usize>,
}

impl Cell {
    /// The mark recorded in this cell.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Ordinal of the claiming move within its sub-board, if played.
    pub fn sub_board_index(&self) -> Option<usize> {
        self.sub_board_index
    }

    /// Ordinal of the claiming move within the whole game, if the caller
    /// tracked one.
    pub fn main_index(&self) -> Option<usize> {
        self.main_index
    }

    /// True iff no move has claimed this cell yet.
    pub fn is_unplayed(&self) -> bool {
        self.mark == Mark::Unplayed
    }

    /// Records the claiming move. Callers validate first; cells are
    /// write-once.
    pub(crate) fn play(&mut self, mark: Mark, sub_board_index: usize, main_index: Option<usize>) {
        self.mark = mark;
        self.sub_board_index = Some(sub_board_index);
        self.main_index = main_index;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claim_marks() {
        assert!(Mark::One.is_claim());
        assert!(Mark::Two.is_claim());
        assert!(!Mark::Tie.is_claim());
        assert!(!Mark::Unplayed.is_claim());
    }

    #[test]
    fn test_playable_marks() {
        assert!(Mark::One.is_playable());
        assert!(Mark::Two.is_playable());
        assert!(Mark::Tie.is_playable());
        assert!(!Mark::Unplayed.is_playable());
    }

    #[test]
    fn test_cell_records_move() {
        let mut cell = Cell::default();
        assert!(cell.is_unplayed());
        assert_eq!(cell.sub_board_index(), None);
        assert_eq!(cell.main_index(), None);

        cell.play(Mark::Two, 4, Some(17));
        assert_eq!(cell.mark(), Mark::Two);
        assert_eq!(cell.sub_board_index(), Some(4));
        assert_eq!(cell.main_index(), Some(17));
    }
}
