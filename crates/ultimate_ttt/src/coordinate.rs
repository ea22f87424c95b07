//! Board coordinates shared by both levels of the game.

use serde::{Deserialize, Serialize};

/// Side length of a board, at either level.
pub const SIZE: usize = 3;

/// A 0-indexed `[row, col]` pair addressing a sub-board on the meta grid
/// or a cell within a sub-board.
///
/// Out-of-range coordinates are representable so that legality queries can
/// answer `false` for them; accepted game state only ever stores in-range
/// values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    /// Row component, valid range `[0, SIZE)`.
    pub row: usize,
    /// Column component, valid range `[0, SIZE)`.
    pub col: usize,
}

impl Coord {
    /// Creates a coordinate. Bounds are not checked here; validity is a
    /// question for the board receiving the coordinate.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// True iff both components are strictly below [`SIZE`].
    pub fn in_bounds(self) -> bool {
        self.row < SIZE && self.col < SIZE
    }

    /// True iff the coordinate lies on the top-left to bottom-right
    /// diagonal.
    pub fn on_main_diagonal(self) -> bool {
        self.row == self.col
    }

    /// True iff the coordinate lies on the top-right to bottom-left
    /// diagonal.
    pub fn on_anti_diagonal(self) -> bool {
        self.row + self.col == SIZE - 1
    }

    /// All in-range coordinates, row-major.
    pub const ALL: [Coord; SIZE * SIZE] = [
        Coord::new(0, 0),
        Coord::new(0, 1),
        Coord::new(0, 2),
        Coord::new(1, 0),
        Coord::new(1, 1),
        Coord::new(1, 2),
        Coord::new(2, 0),
        Coord::new(2, 1),
        Coord::new(2, 2),
    ];
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        assert!(Coord::new(0, 0).in_bounds());
        assert!(Coord::new(2, 2).in_bounds());
        assert!(!Coord::new(3, 0).in_bounds());
        assert!(!Coord::new(0, 3).in_bounds());
    }

    #[test]
    fn test_diagonals() {
        assert!(Coord::new(1, 1).on_main_diagonal());
        assert!(Coord::new(1, 1).on_anti_diagonal());
        assert!(Coord::new(0, 2).on_anti_diagonal());
        assert!(!Coord::new(0, 2).on_main_diagonal());
        assert!(!Coord::new(0, 1).on_main_diagonal());
        assert!(!Coord::new(0, 1).on_anti_diagonal());
    }

    #[test]
    fn test_all_is_row_major() {
        assert_eq!(Coord::ALL.len(), 9);
        assert_eq!(Coord::ALL[0], Coord::new(0, 0));
        assert_eq!(Coord::ALL[5], Coord::new(1, 2));
        assert_eq!(Coord::ALL[8], Coord::new(2, 2));
    }
}
