//! Core domain types for tic-tac-toe.

use super::coordinate::Coordinate;
use derive_getters::Getters;
use strum::EnumIter;

/// Symbol a player places in a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, strum::Display)]
pub enum Mark {
    /// Cross, used by the first player.
    X,
    /// Nought, used by the second player.
    O,
}

/// Contents of one board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    /// No mark yet.
    #[default]
    Empty,
    /// Marked by a player.
    Marked(Mark),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Marked(mark) => Some(mark),
        }
    }
}

/// 3x3 board state keyed by [`Coordinate`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    /// Cells in [`Coordinate::ALL`] order.
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the cell at the given coordinate.
    pub fn get(&self, coord: Coordinate) -> Cell {
        self.cells[coord.index()]
    }

    /// Places `mark` at `coord` if the cell is empty.
    ///
    /// Returns `false` and leaves the board untouched when the cell is
    /// already marked.
    pub fn place(&mut self, coord: Coordinate, mark: Mark) -> bool {
        let cell = &mut self.cells[coord.index()];
        if *cell != Cell::Empty {
            return false;
        }
        *cell = Cell::Marked(mark);
        true
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, coord: Coordinate) -> bool {
        self.get(coord) == Cell::Empty
    }

    /// Iterates `(coordinate, cell)` pairs in grid generation order.
    pub fn iter(&self) -> impl Iterator<Item = (Coordinate, Cell)> + '_ {
        Coordinate::ALL.iter().map(|&coord| (coord, self.get(coord)))
    }

    /// Formats the board as rows of text, row 1 on top.
    ///
    /// Empty cells show their cell id so a console player can see what to
    /// type.
    pub fn display(&self) -> String {
        let mut rows = Vec::with_capacity(3);
        for row in 1..=3 {
            let cells: Vec<String> = (1..=3)
                .filter_map(|column| Coordinate::new(column, row))
                .map(|coord| match self.get(coord) {
                    Cell::Empty => coord.cell_id().to_string(),
                    Cell::Marked(mark) => format!(" {mark} "),
                })
                .collect();
            rows.push(cells.join("|"));
        }
        rows.join("\n---+---+---\n")
    }
}

/// A participant: a mark plus a display label.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Player {
    /// Name shown to the users.
    label: String,
    /// Mark this player places.
    mark: Mark,
}

impl Player {
    /// Creates a player.
    pub fn new(label: impl Into<String>, mark: Mark) -> Self {
        Self {
            label: label.into(),
            mark,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.label, self.mark)
    }
}

/// The fixed ordered pair of players. Index 0 always opens a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Players([Player; 2]);

impl Players {
    /// Pairs two labels with marks X and O respectively.
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self([Player::new(first, Mark::X), Player::new(second, Mark::O)])
    }

    /// Player at turn index `index` (taken modulo 2).
    pub fn get(&self, index: usize) -> &Player {
        &self.0[index % 2]
    }

    /// Both players in turn order.
    pub fn as_slice(&self) -> &[Player; 2] {
        &self.0
    }
}

impl Default for Players {
    fn default() -> Self {
        Self::new("Player 1", "Player 2")
    }
}
