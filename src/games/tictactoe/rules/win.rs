//! Win detection for tic-tac-toe.
//!
//! Rather than scanning all eight lines, the check starts at the cell that
//! was just marked and walks same-mark neighbors along each axis. A walk
//! succeeds once its chain reaches [`WINNING_RUN`] cells.

use super::super::{AdjacencyDirection, Board, Cell, Coordinate, Mark};
use strum::IntoEnumIterator;
use tracing::{instrument, trace};

/// Number of consecutive marks needed to win.
pub const WINNING_RUN: usize = 3;

/// Cells already reached during one direction's walk, indexed by
/// [`Coordinate::index`].
type Visited = [bool; 9];

/// Returns true if placing `mark` at `coord` completed a run of three.
///
/// Directions are tried in declaration order and the check stops
/// at the first one that succeeds. The cell at `coord` itself is taken to
/// hold `mark` and is not re-read from the board.
#[instrument(skip(board))]
pub fn check_win(board: &Board, coord: Coordinate, mark: Mark) -> bool {
    AdjacencyDirection::iter().any(|direction| completes_run(board, coord, mark, direction))
}

/// Walks one axis from `origin` and reports whether a run of three was
/// found.
///
/// The visited set is owned here and shared by every branch of the walk, so
/// a cell reached through one neighbor is never explored again through the
/// other. Cells reached on both sides of the origin add up, so a run is
/// found wherever along it the origin sits.
#[instrument(level = "trace", skip(board))]
pub fn completes_run(
    board: &Board,
    origin: Coordinate,
    mark: Mark,
    direction: AdjacencyDirection,
) -> bool {
    let mut visited: Visited = [false; 9];
    let chain = walk(board, origin, mark, direction, &mut visited);
    let found = chain == WINNING_RUN;
    trace!(%direction, chain, found, "direction walk finished");
    found
}

/// Counts `coord` plus every same-mark cell reachable from it along
/// `direction`, stopping once the count reaches [`WINNING_RUN`].
fn walk(
    board: &Board,
    coord: Coordinate,
    mark: Mark,
    direction: AdjacencyDirection,
    visited: &mut Visited,
) -> usize {
    visited[coord.index()] = true;
    let mut chain = 1;

    // Candidates are fixed before descending into any of them.
    let candidates = direction
        .neighbors(coord)
        .map(|n| n.filter(|n| !visited[n.index()]));

    for neighbor in candidates.into_iter().flatten() {
        if chain >= WINNING_RUN {
            break;
        }
        if board.get(neighbor) == Cell::Marked(mark) {
            chain += walk(board, neighbor, mark, direction, visited);
        }
    }

    chain
}
