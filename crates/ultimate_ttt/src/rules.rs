//! Line primitives shared by both levels of win detection.
//!
//! A sub-board checks lines of cell marks; the meta-board checks lines of
//! sub-board results. Both run the same algorithm over the lines touched by
//! the move just played.

use crate::coordinate::{Coord, SIZE};
use crate::types::Mark;

/// Three coordinates forming a row, a column or a diagonal.
pub(crate) type Line = [Coord; SIZE];

/// The winner of a single line, if complete.
///
/// A line is complete when its first mark is a claim and the other two
/// match it. Ties and unplayed marks can never head a line, and a mismatch
/// anywhere aborts.
pub(crate) fn line_winner(marks: [Mark; SIZE]) -> Option<Mark> {
    let first = marks[0];
    if !first.is_claim() {
        return None;
    }
    if marks.iter().all(|mark| *mark == first) {
        Some(first)
    } else {
        None
    }
}

/// The lines a move at `coord` can have completed, in evaluation order:
/// its row, its column, then each diagonal the coordinate lies on.
pub(crate) fn lines_through(coord: Coord) -> Vec<Line> {
    let mut lines = vec![row(coord.row), column(coord.col)];
    if coord.on_main_diagonal() {
        lines.push(main_diagonal());
    }
    if coord.on_anti_diagonal() {
        lines.push(anti_diagonal());
    }
    lines
}

fn row(row: usize) -> Line {
    std::array::from_fn(|col| Coord::new(row, col))
}

fn column(col: usize) -> Line {
    std::array::from_fn(|row| Coord::new(row, col))
}

fn main_diagonal() -> Line {
    std::array::from_fn(|i| Coord::new(i, i))
}

fn anti_diagonal() -> Line {
    std::array::from_fn(|i| Coord::new(i, SIZE - 1 - i))
}
