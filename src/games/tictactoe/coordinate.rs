//! Board coordinates, cell identifiers and adjacency directions.
//!
//! A [`Coordinate`] is a 1-indexed `(column, row)` pair bounded to the 3x3
//! grid. It can only be constructed in bounds, so every value of the type
//! names exactly one board cell.

use derive_more::{Display, Error};
use std::str::FromStr;
use strum::EnumIter;
use tracing::instrument;

/// Side length of the board.
pub const BOARD_SIDE: u8 = 3;

/// A cell on the 3x3 board, 1-indexed as `(column, row)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    column: u8,
    row: u8,
}

impl Coordinate {
    /// All nine cells in grid generation order: column 1 rows 1-3, then
    /// column 2, then column 3.
    pub const ALL: [Coordinate; 9] = [
        Coordinate { column: 1, row: 1 },
        Coordinate { column: 1, row: 2 },
        Coordinate { column: 1, row: 3 },
        Coordinate { column: 2, row: 1 },
        Coordinate { column: 2, row: 2 },
        Coordinate { column: 2, row: 3 },
        Coordinate { column: 3, row: 1 },
        Coordinate { column: 3, row: 2 },
        Coordinate { column: 3, row: 3 },
    ];

    /// Creates a coordinate, returning `None` outside `[1,3]x[1,3]`.
    pub fn new(column: u8, row: u8) -> Option<Self> {
        Self::from_signed(i16::from(column), i16::from(row))
    }

    /// Bounds check on raw signed components.
    ///
    /// Neighbor arithmetic can step off the board, so it is done on signed
    /// pairs and filtered through here.
    pub fn from_signed(column: i16, row: i16) -> Option<Self> {
        let side = i16::from(BOARD_SIDE);
        if (1..=side).contains(&column) && (1..=side).contains(&row) {
            Some(Self {
                column: column as u8,
                row: row as u8,
            })
        } else {
            None
        }
    }

    /// Column, 1-3.
    pub fn column(self) -> u8 {
        self.column
    }

    /// Row, 1-3.
    pub fn row(self) -> u8 {
        self.row
    }

    /// Dense storage index in `0..9`, matching the order of [`Coordinate::ALL`].
    pub fn index(self) -> usize {
        usize::from(self.column - 1) * usize::from(BOARD_SIDE) + usize::from(self.row - 1)
    }

    /// Inverse of [`Coordinate::index`].
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// The textual cell identifier, `"{column}-{row}"`.
    pub fn cell_id(self) -> CellId {
        CellId(self)
    }

    fn signed(self) -> (i16, i16) {
        (i16::from(self.column), i16::from(self.row))
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.column, self.row)
    }
}

/// Identifier of a cell, rendered as `column-row`.
///
/// Only ever built from a valid [`Coordinate`], so no identifier exists for
/// an off-board position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellId(Coordinate);

impl std::fmt::Display for CellId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.0.column, self.0.row)
    }
}

impl CellId {
    /// The coordinate this identifier names.
    pub fn coordinate(self) -> Coordinate {
        self.0
    }
}

impl FromStr for CellId {
    type Err = CoordinateError;

    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (column, row) = trimmed
            .split_once('-')
            .or_else(|| trimmed.split_once(char::is_whitespace))
            .ok_or_else(|| CoordinateError::Malformed(trimmed.to_string()))?;
        let column: i64 = column
            .trim()
            .parse()
            .map_err(|_| CoordinateError::Malformed(trimmed.to_string()))?;
        let row: i64 = row
            .trim()
            .parse()
            .map_err(|_| CoordinateError::Malformed(trimmed.to_string()))?;

        let in_range = |v: i64| i16::try_from(v).ok();
        match (in_range(column), in_range(row)) {
            (Some(c), Some(r)) => Coordinate::from_signed(c, r)
                .map(CellId)
                .ok_or(CoordinateError::OutOfBounds { column, row }),
            _ => Err(CoordinateError::OutOfBounds { column, row }),
        }
    }
}

/// Error raised when text does not name a board cell.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum CoordinateError {
    /// Input was not of the form `column-row` with integer parts.
    #[display("'{_0}' is not a cell id (expected column-row, e.g. 2-3)")]
    Malformed(#[error(not(source))] String),
    /// Both parts parsed but name a cell off the 3x3 board.
    #[display("({column}, {row}) is outside the 3x3 board")]
    OutOfBounds {
        /// Requested column.
        column: i64,
        /// Requested row.
        row: i64,
    },
}

/// One of the four axes along which a run of marks is counted.
///
/// Declaration order is the order the win check tries them in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, strum::Display)]
pub enum AdjacencyDirection {
    /// Same row.
    Horizontal,
    /// Same column.
    Vertical,
    /// Column and row grow together.
    ForwardDiagonal,
    /// Column grows as row shrinks.
    BackDiagonal,
}

impl AdjacencyDirection {
    /// The two opposite neighbor offsets along this axis.
    fn offsets(self) -> [(i16, i16); 2] {
        match self {
            AdjacencyDirection::Horizontal => [(-1, 0), (1, 0)],
            AdjacencyDirection::Vertical => [(0, 1), (0, -1)],
            AdjacencyDirection::ForwardDiagonal => [(1, 1), (-1, -1)],
            AdjacencyDirection::BackDiagonal => [(-1, 1), (1, -1)],
        }
    }

    /// The two opposite neighbors of `coord` along this axis.
    ///
    /// A neighbor that would fall off the board is `None`.
    pub fn neighbors(self, coord: Coordinate) -> [Option<Coordinate>; 2] {
        let (column, row) = coord.signed();
        self.offsets()
            .map(|(dc, dr)| Coordinate::from_signed(column + dc, row + dr))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_index_matches_all_order() {
        for (i, coord) in Coordinate::ALL.iter().enumerate() {
            assert_eq!(coord.index(), i);
            assert_eq!(Coordinate::from_index(i), Some(*coord));
        }
        assert_eq!(Coordinate::from_index(9), None);
    }

    #[test]
    fn test_corner_neighbors_fall_off_board() {
        let corner = Coordinate::new(1, 1).unwrap();
        let [left, right] = AdjacencyDirection::Horizontal.neighbors(corner);
        assert_eq!(left, None);
        assert_eq!(right, Coordinate::new(2, 1));

        let [up_left, down_right] = AdjacencyDirection::BackDiagonal.neighbors(corner);
        assert_eq!(up_left, None);
        assert_eq!(down_right, None);
    }

    #[test]
    fn test_center_has_both_neighbors_on_every_axis() {
        let center = Coordinate::new(2, 2).unwrap();
        for direction in AdjacencyDirection::iter() {
            let [a, b] = direction.neighbors(center);
            assert!(a.is_some() && b.is_some(), "{direction} lost a neighbor");
        }
    }

    #[test]
    fn test_cell_id_display() {
        let coord = Coordinate::new(3, 2).unwrap();
        assert_eq!(coord.cell_id().to_string(), "3-2");
    }
}
