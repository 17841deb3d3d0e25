//! First-class move and outcome types for tic-tac-toe.

use super::{Coordinate, Mark};

/// A move: the player at a turn index placing their mark at a coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    /// Turn index (0 or 1) of the player who moved.
    pub player: usize,
    /// Mark that was placed.
    pub mark: Mark,
    /// Where it was placed.
    pub coordinate: Coordinate,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: usize, mark: Mark, coordinate: Coordinate) -> Self {
        Self {
            player,
            mark,
            coordinate,
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.coordinate.cell_id())
    }
}

/// What a cell activation did to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The cell was already marked; nothing changed.
    Ignored,
    /// Mark placed, game continues.
    Placed(Move),
    /// Mark placed and it completed a run. The board has been reset.
    Won {
        /// The winning move.
        winning_move: Move,
        /// Board as it stood when the game was won.
        final_board: super::Board,
    },
    /// Mark placed, board full, no run. The board has been reset.
    Draw {
        /// The last move.
        last_move: Move,
        /// Board as it stood when the game ended.
        final_board: super::Board,
    },
}

impl MoveOutcome {
    /// Returns true if this outcome ended a game.
    pub fn is_game_over(&self) -> bool {
        matches!(self, MoveOutcome::Won { .. } | MoveOutcome::Draw { .. })
    }
}
