//! Tests for the line-oriented front end.

use std::io::Cursor;
use tictactoe::{GameSession, Messages, Players, console};

fn run_script(session: &mut GameSession, script: &str) -> String {
    let mut output = Vec::new();
    console::run(session, &Messages::default(), Cursor::new(script), &mut output).unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn test_scripted_win() {
    let mut session = GameSession::new(Players::new("Ann", "Bo"));
    let output = run_script(&mut session, "1-1\n1-2\n2-1\n2-2\n3-1\n");

    assert!(output.contains("WINNER WINNER, CHICKEN DINNER! Ann (X) wins!"));
    assert!(output.contains("Score: Ann 1, Bo 0, draws 0"));
    assert!(session.history().is_empty());
    assert_eq!(session.turn(), 0);
}

#[test]
fn test_scripted_win_on_middle_cell() {
    let mut session = GameSession::new(Players::new("Ann", "Bo"));
    let output = run_script(&mut session, "1-1\n1-2\n3-1\n2-2\n2-1\n");

    assert!(output.contains("WINNER WINNER, CHICKEN DINNER! Ann (X) wins!"));
    assert!(output.contains("Score: Ann 1, Bo 0, draws 0"));
    assert!(session.history().is_empty());
}

#[test]
fn test_bad_input_is_reported_and_ignored() {
    let mut session = GameSession::default();
    let output = run_script(&mut session, "9-9\nmiddle\n\n2-2\n2-2\n");

    assert!(output.contains("outside the 3x3 board"));
    assert!(output.contains("'middle' is not a cell id"));
    assert!(output.contains("2-2 is already taken."));
    assert_eq!(session.history().len(), 1);
    assert_eq!(session.turn(), 1);
}

#[test]
fn test_quit_stops_reading() {
    let mut session = GameSession::default();
    run_script(&mut session, "1-1\nquit\n2-2\n");
    assert_eq!(session.history().len(), 1);
}

#[test]
fn test_reset_command() {
    let mut session = GameSession::default();
    let output = run_script(&mut session, "1-1\nreset\n");
    assert!(output.contains("New game."));
    assert!(session.history().is_empty());
    assert_eq!(session.turn(), 0);
}

#[test]
fn test_prompt_names_current_player() {
    let mut session = GameSession::default();
    let output = run_script(&mut session, "3-3\n");
    assert!(output.contains("Player 1 (X) to move"));
    assert!(output.contains("Player 2 (O) to move"));
}
