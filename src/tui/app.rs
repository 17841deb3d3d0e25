//! Application state and logic.

use super::input::{keypad_cell, move_cursor};
use crate::config::Messages;
use crate::games::tictactoe::{Board, Coordinate, GameSession, MoveOutcome};
use crossterm::event::KeyCode;
use tracing::{debug, info};

/// What the event loop should do after an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep running.
    Continue,
    /// Leave the TUI.
    Quit,
}

/// A finished game awaiting acknowledgement.
#[derive(Debug, Clone)]
pub struct Notification {
    /// Text to show.
    pub message: String,
    /// Board as it stood when the game ended.
    pub board: Board,
}

/// Main application state.
pub struct App {
    session: GameSession,
    messages: Messages,
    cursor: Coordinate,
    status_message: String,
    notification: Option<Notification>,
}

impl App {
    /// Creates a new application around `session`.
    pub fn new(session: GameSession, messages: Messages) -> Self {
        let mut app = Self {
            session,
            messages,
            cursor: Coordinate::ALL[4],
            status_message: String::new(),
            notification: None,
        };
        app.prompt();
        app
    }

    /// Gets the session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Cell under the keyboard cursor.
    pub fn cursor(&self) -> Coordinate {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// End-of-game notification, if one is showing.
    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    /// Board to draw: the finished one while a notification is up.
    pub fn displayed_board(&self) -> &Board {
        match &self.notification {
            Some(notification) => &notification.board,
            None => self.session.board(),
        }
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyCode) -> Control {
        if matches!(key, KeyCode::Char('q') | KeyCode::Esc) {
            return Control::Quit;
        }
        if self.dismiss() {
            return Control::Continue;
        }

        match key {
            KeyCode::Char('r') => self.restart(),
            KeyCode::Enter | KeyCode::Char(' ') => self.activate(self.cursor),
            KeyCode::Char(c) => {
                if let Some(coord) = keypad_cell(c) {
                    self.cursor = coord;
                    self.activate(coord);
                }
            }
            arrow => self.cursor = move_cursor(self.cursor, arrow),
        }
        Control::Continue
    }

    /// Handles a left click; `cell` is the cell under the pointer, if any.
    pub fn handle_click(&mut self, cell: Option<Coordinate>) {
        if self.dismiss() {
            return;
        }
        if let Some(coord) = cell {
            self.cursor = coord;
            self.activate(coord);
        }
    }

    /// Activates a cell in the session and updates the status line.
    pub fn activate(&mut self, coord: Coordinate) {
        match self.session.activate(coord) {
            MoveOutcome::Ignored => {
                self.status_message = format!("{} is already taken.", coord.cell_id());
            }
            MoveOutcome::Placed(action) => {
                debug!(%action, "Move applied to UI state");
                self.prompt();
            }
            MoveOutcome::Won {
                winning_move,
                final_board,
            } => {
                let winner = self.session.players().get(winning_move.player);
                info!(%winner, "Showing win notification");
                self.notification = Some(Notification {
                    message: format!("{} {} wins!", self.messages.win(), winner),
                    board: final_board,
                });
                self.status_message = "Press any key to start the next game.".to_string();
            }
            MoveOutcome::Draw { final_board, .. } => {
                self.notification = Some(Notification {
                    message: self.messages.draw().clone(),
                    board: final_board,
                });
                self.status_message = "Press any key to start the next game.".to_string();
            }
        }
    }

    /// Restarts the game.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.session.reset();
        self.notification = None;
        self.prompt();
    }

    fn dismiss(&mut self) -> bool {
        if self.notification.take().is_some() {
            self.prompt();
            true
        } else {
            false
        }
    }

    fn prompt(&mut self) {
        self.status_message = format!("{}'s turn", self.session.current_player());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(GameSession::default(), Messages::default())
    }

    #[test]
    fn test_keypad_marks_cells() {
        let mut app = app();
        app.handle_key(KeyCode::Char('1'));
        assert!(!app.session().board().is_empty(Coordinate::new(1, 1).unwrap()));
        assert_eq!(app.session().turn(), 1);
    }

    #[test]
    fn test_win_notification_then_dismiss() {
        let mut app = app();
        for key in ['1', '4', '2', '5', '3'] {
            app.handle_key(KeyCode::Char(key));
        }
        let notification = app.notification().expect("win should notify");
        assert!(notification.message.starts_with("WINNER WINNER, CHICKEN DINNER!"));
        assert!(!app.displayed_board().is_empty(Coordinate::new(3, 1).unwrap()));
        assert_eq!(app.session().turn(), 0);

        // First key only dismisses.
        assert_eq!(app.handle_key(KeyCode::Char('5')), Control::Continue);
        assert!(app.notification().is_none());
        assert!(app.session().board().is_empty(Coordinate::new(2, 2).unwrap()));
    }

    #[test]
    fn test_click_outside_board_is_ignored() {
        let mut app = app();
        app.handle_click(None);
        assert!(app.session().history().is_empty());
    }

    #[test]
    fn test_quit() {
        let mut app = app();
        assert_eq!(app.handle_key(KeyCode::Char('q')), Control::Quit);
    }
}
