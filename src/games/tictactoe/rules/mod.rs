//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board). Rules are kept apart from
//! the session so they can be tested without a game loop.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{WINNING_RUN, check_win, completes_run};
