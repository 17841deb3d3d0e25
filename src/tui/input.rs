//! Keyboard navigation over the board.

use crate::games::tictactoe::Coordinate;
use crossterm::event::KeyCode;

/// Moves the cursor one cell in the arrow's direction, staying put at an
/// edge. Row 1 is drawn at the top.
pub fn move_cursor(cursor: Coordinate, key: KeyCode) -> Coordinate {
    let (dc, dr) = match key {
        KeyCode::Left => (-1, 0),
        KeyCode::Right => (1, 0),
        KeyCode::Up => (0, -1),
        KeyCode::Down => (0, 1),
        _ => return cursor,
    };
    Coordinate::from_signed(
        i16::from(cursor.column()) + dc,
        i16::from(cursor.row()) + dr,
    )
    .unwrap_or(cursor)
}

/// Maps keys 1-9 to cells, numbered left to right from the top row.
pub fn keypad_cell(key: char) -> Option<Coordinate> {
    let digit = key.to_digit(10)?.checked_sub(1)?;
    let (column, row) = (digit % 3 + 1, digit / 3 + 1);
    Coordinate::new(u8::try_from(column).ok()?, u8::try_from(row).ok()?)
}
