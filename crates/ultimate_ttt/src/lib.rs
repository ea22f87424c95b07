//! Ultimate tic-tac-toe rules engine.
//!
//! A game is a meta-board of 3x3 sub-boards, each a 3x3 tic-tac-toe board.
//! The cell coordinate of each move names the sub-board the next move must
//! play in; when that sub-board is already decided, any unfinished one is
//! legal. A sub-board is won like ordinary tic-tac-toe, and the meta-board
//! is won by the same line rules applied to sub-board results, where a tied
//! sub-board counts for neither player.
//!
//! The engine covers move legality, the forced-target constraint and
//! two-level win/tie detection. There is no AI, networking or persistence;
//! rendering beyond [`Uttt::pretty_print`] is left to consumers.
//!
//! # Example
//!
//! ```
//! use ultimate_ttt::{Coord, Uttt};
//!
//! # fn main() -> Result<(), ultimate_ttt::GameError> {
//! let game = Uttt::new();
//! // First move is unconstrained; it sends the opponent to board (0, 0).
//! let game = game.add_my_move(Coord::new(1, 0), Coord::new(0, 0))?;
//! let game = game.add_opponent_move(Coord::new(0, 0), Coord::new(2, 1))?;
//! assert_eq!(game.target(), Some(Coord::new(2, 1)));
//! assert!(!game.is_finished());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod coordinate;
mod error;
mod rules;
mod sub_board;
mod types;
mod uttt;

pub use coordinate::{Coord, SIZE};
pub use error::GameError;
pub use sub_board::SubBoard;
pub use types::{Cell, Mark};
pub use uttt::Uttt;
