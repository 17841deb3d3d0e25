//! Tests for adjacency-walk win detection.

use strum::IntoEnumIterator;
use tictactoe::{AdjacencyDirection, Board, Coordinate, Mark, check_win};

fn at(column: u8, row: u8) -> Coordinate {
    Coordinate::new(column, row).unwrap()
}

fn board_with(marks: &[((u8, u8), Mark)]) -> Board {
    let mut board = Board::new();
    for &((column, row), mark) in marks {
        assert!(board.place(at(column, row), mark));
    }
    board
}

const LINES: [[(u8, u8); 3]; 8] = [
    // Rows
    [(1, 1), (2, 1), (3, 1)],
    [(1, 2), (2, 2), (3, 2)],
    [(1, 3), (2, 3), (3, 3)],
    // Columns
    [(1, 1), (1, 2), (1, 3)],
    [(2, 1), (2, 2), (2, 3)],
    [(3, 1), (3, 2), (3, 3)],
    // Diagonals
    [(1, 1), (2, 2), (3, 3)],
    [(1, 3), (2, 2), (3, 1)],
];

#[test]
fn test_scenario_a_horizontal() {
    let board = board_with(&[((1, 1), Mark::X), ((2, 1), Mark::X), ((3, 1), Mark::X)]);
    assert!(check_win(&board, at(2, 1), Mark::X));
}

#[test]
fn test_scenario_b_diagonal() {
    let board = board_with(&[((1, 1), Mark::O), ((2, 2), Mark::O), ((3, 3), Mark::O)]);
    assert!(check_win(&board, at(2, 2), Mark::O));
}

#[test]
fn test_middle_of_column_and_anti_diagonal() {
    let board = board_with(&[((3, 1), Mark::X), ((3, 2), Mark::X), ((3, 3), Mark::X)]);
    assert!(check_win(&board, at(3, 2), Mark::X));

    let board = board_with(&[((1, 3), Mark::O), ((2, 2), Mark::O), ((3, 1), Mark::O)]);
    assert!(check_win(&board, at(2, 2), Mark::O));
}

#[test]
fn test_scenario_c_broken_row() {
    let board = board_with(&[((1, 1), Mark::X), ((2, 1), Mark::O), ((3, 1), Mark::X)]);
    assert!(!check_win(&board, at(3, 1), Mark::X));
}

#[test]
fn test_scenario_d_empty_board() {
    let board = Board::new();
    for coord in Coordinate::ALL {
        for mark in Mark::iter() {
            assert!(!check_win(&board, coord, mark));
        }
    }
}

#[test]
fn test_every_line_wins_from_every_cell_on_it() {
    for line in LINES {
        for mark in Mark::iter() {
            let marks: Vec<_> = line.iter().map(|&cell| (cell, mark)).collect();
            let board = board_with(&marks);
            for (column, row) in line {
                assert!(
                    check_win(&board, at(column, row), mark),
                    "{line:?} not detected from ({column}, {row})"
                );
            }
        }
    }
}

#[test]
fn test_two_of_three_never_wins() {
    for line in LINES {
        for missing in 0..3 {
            let marks: Vec<_> = line
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != missing)
                .map(|(_, &cell)| (cell, Mark::X))
                .collect();
            let board = board_with(&marks);
            for &((column, row), _) in &marks {
                assert!(!check_win(&board, at(column, row), Mark::X));
            }
        }
    }
}

#[test]
fn test_wrong_mark_does_not_win() {
    let board = board_with(&[((1, 2), Mark::X), ((2, 2), Mark::X), ((3, 2), Mark::X)]);
    assert!(!check_win(&board, at(2, 2), Mark::O));
}

#[test]
fn test_bent_shape_is_not_a_run() {
    // An L of three X marks: adjacent, but on no single axis.
    let board = board_with(&[((1, 1), Mark::X), ((2, 1), Mark::X), ((2, 2), Mark::X)]);
    for (column, row) in [(1, 1), (2, 1), (2, 2)] {
        assert!(!check_win(&board, at(column, row), Mark::X));
    }
}

#[test]
fn test_full_drawn_board_has_no_run() {
    let board = board_with(&[
        ((1, 1), Mark::X),
        ((2, 1), Mark::O),
        ((3, 1), Mark::X),
        ((1, 2), Mark::X),
        ((2, 2), Mark::O),
        ((3, 2), Mark::O),
        ((1, 3), Mark::O),
        ((2, 3), Mark::X),
        ((3, 3), Mark::X),
    ]);
    for coord in Coordinate::ALL {
        let mark = board.get(coord).mark().unwrap();
        assert!(!check_win(&board, coord, mark), "false win at {coord}");
    }
}

#[test]
fn test_direction_order_is_fixed() {
    let order: Vec<_> = AdjacencyDirection::iter().collect();
    assert_eq!(
        order,
        vec![
            AdjacencyDirection::Horizontal,
            AdjacencyDirection::Vertical,
            AdjacencyDirection::ForwardDiagonal,
            AdjacencyDirection::BackDiagonal,
        ]
    );
}
