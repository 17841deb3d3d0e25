//! The game loop as an owned session object.
//!
//! A [`GameSession`] holds the board, the turn pointer and the running
//! score. Front ends own one session and hand it `&mut` to their input
//! handlers.

use super::action::{Move, MoveOutcome};
use super::rules::{check_win, is_full};
use super::{Board, Coordinate, Player, Players};
use derive_getters::Getters;
use tracing::{debug, info, instrument};

/// Results accumulated over the games of one session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters)]
pub struct Score {
    /// Games won, by turn index.
    wins: [u32; 2],
    /// Games that filled the board without a winner.
    draws: u32,
}

impl Score {
    /// Wins for the player at turn index `player`.
    pub fn wins_for(&self, player: usize) -> u32 {
        self.wins[player % 2]
    }
}

/// A single-page, two-player tic-tac-toe session.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    players: Players,
    turn: usize,
    history: Vec<Move>,
    score: Score,
}

impl GameSession {
    /// Creates a session with an empty board and player 0 to move.
    #[instrument(skip(players))]
    pub fn new(players: Players) -> Self {
        Self {
            board: Board::new(),
            players,
            turn: 0,
            history: Vec::new(),
            score: Score::default(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns both players.
    pub fn players(&self) -> &Players {
        &self.players
    }

    /// Turn index (0 or 1) of the player to move next.
    pub fn turn(&self) -> usize {
        self.turn
    }

    /// The player to move next.
    pub fn current_player(&self) -> &Player {
        self.players.get(self.turn)
    }

    /// Moves played in the current game.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Results of finished games in this session.
    pub fn score(&self) -> &Score {
        &self.score
    }

    /// Handles activation of the cell at `coord`.
    ///
    /// An occupied cell is a no-op. Otherwise the current player's mark is
    /// placed, the win check runs, and the turn passes to the other player.
    /// A win or a full board resets the game before returning.
    #[instrument(skip(self), fields(turn = self.turn, cell = %coord.cell_id()))]
    pub fn activate(&mut self, coord: Coordinate) -> MoveOutcome {
        let mark = *self.current_player().mark();
        if !self.board.place(coord, mark) {
            debug!("Cell already marked, ignoring");
            return MoveOutcome::Ignored;
        }

        let action = Move::new(self.turn, mark, coord);
        self.history.push(action);
        let won = check_win(&self.board, coord, mark);

        // The pointer advances even on a win; reset overrides it.
        self.turn = (self.turn + 1) % 2;

        if won {
            info!(winner = %self.players.get(action.player), "Game won");
            self.score.wins[action.player] += 1;
            let final_board = self.take_board();
            return MoveOutcome::Won {
                winning_move: action,
                final_board,
            };
        }

        if is_full(&self.board) {
            info!("Board full, game drawn");
            self.score.draws += 1;
            let final_board = self.take_board();
            return MoveOutcome::Draw {
                last_move: action,
                final_board,
            };
        }

        MoveOutcome::Placed(action)
    }

    /// Starts a fresh game: empty board, player 0 to move, history cleared.
    ///
    /// The score is kept.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!("Resetting board");
        self.board = Board::new();
        self.turn = 0;
        self.history.clear();
    }

    fn take_board(&mut self) -> Board {
        let final_board = self.board.clone();
        self.reset();
        final_board
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(Players::default())
    }
}

#[cfg(test)]
mod tests {
    use super::super::Mark;
    use super::*;

    fn at(column: u8, row: u8) -> Coordinate {
        Coordinate::new(column, row).unwrap()
    }

    #[test]
    fn test_turn_alternates() {
        let mut session = GameSession::default();
        assert_eq!(session.turn(), 0);
        session.activate(at(1, 1));
        assert_eq!(session.turn(), 1);
        assert_eq!(session.board().get(at(1, 1)).mark(), Some(Mark::X));
        session.activate(at(2, 2));
        assert_eq!(session.turn(), 0);
        assert_eq!(session.board().get(at(2, 2)).mark(), Some(Mark::O));
    }

    #[test]
    fn test_occupied_cell_keeps_turn() {
        let mut session = GameSession::default();
        session.activate(at(1, 1));
        let before = session.board().clone();
        assert_eq!(session.activate(at(1, 1)), MoveOutcome::Ignored);
        assert_eq!(session.board(), &before);
        assert_eq!(session.turn(), 1);
        assert_eq!(session.history().len(), 1);
    }
}
