//! Tic-tac-toe game logic.

mod action;
mod coordinate;
pub mod rules;
mod session;
mod types;

pub use action::{Move, MoveOutcome};
pub use coordinate::{AdjacencyDirection, BOARD_SIDE, CellId, Coordinate, CoordinateError};
pub use rules::check_win;
pub use session::{GameSession, Score};
pub use types::{Board, Cell, Mark, Player, Players};
