//! Two-player tic-tac-toe with adjacency-walk win detection.
//!
//! # Architecture
//!
//! - **Games**: board, coordinates and rules (`games::tictactoe`)
//! - **Session**: the owned game loop, [`GameSession`]
//! - **Front ends**: terminal UI ([`tui`]) and line console ([`console`])
//! - **Config**: TOML game configuration ([`GameConfig`])
//!
//! # Example
//!
//! ```
//! use tictactoe::{Coordinate, GameSession, MoveOutcome};
//!
//! let mut session = GameSession::default();
//! let center = Coordinate::new(2, 2).unwrap();
//! assert!(matches!(session.activate(center), MoveOutcome::Placed(_)));
//! assert_eq!(session.activate(center), MoveOutcome::Ignored);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
pub mod console;
pub mod games;
pub mod tui;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig, LoggingConfig, Messages, PlayerNames};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    AdjacencyDirection, Board, Cell, CellId, Coordinate, CoordinateError, GameSession, Mark,
    Move, MoveOutcome, Player, Players, Score, check_win,
};
