use smallvec::SmallVec;
use std::convert::From;

use crate::units::{ColumnsCount, RowsCount};

/// A unit square in the logical grid, addressed by `(row, column)`.
///
/// Rows grow downwards and columns grow rightwards, both from zero. A `Cell`
/// has no identity beyond its coordinates.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct Cell {
    pub row: u32,
    pub column: u32,
}

impl Cell {
    pub fn new(row: u32, column: u32) -> Cell {
        Cell { row, column }
    }
}

impl From<(u32, u32)> for Cell {
    fn from(row_column_pair: (u32, u32)) -> Cell {
        Cell::new(row_column_pair.0, row_column_pair.1)
    }
}

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum CompassPrimary {
    North,
    South,
    East,
    West,
}

/// Candidate neighbour order before shuffling: up, right, down, left.
pub const COMPASS_PRIMARIES: [CompassPrimary; 4] = [
    CompassPrimary::North,
    CompassPrimary::East,
    CompassPrimary::South,
    CompassPrimary::West,
];

pub type DirectionSmallVec = SmallVec<[CompassPrimary; 4]>;

/// Creates a new `Cell` offset one step away in the given direction.
///
/// Returns None if the coordinate is not representable (stepping North off
/// row 0 or West off column 0). Offsets beyond the South/East edge of a grid
/// are representable and must be bounds checked against the grid dimensions.
pub fn offset_coordinate(coord: Cell, dir: CompassPrimary) -> Option<Cell> {
    let (row, column) = (coord.row, coord.column);
    match dir {
        CompassPrimary::North => {
            if row > 0 {
                Some(Cell::new(row - 1, column))
            } else {
                None
            }
        }
        CompassPrimary::South => Some(Cell::new(row + 1, column)),
        CompassPrimary::East => Some(Cell::new(row, column + 1)),
        CompassPrimary::West => {
            if column > 0 {
                Some(Cell::new(row, column - 1))
            } else {
                None
            }
        }
    }
}

pub fn is_inside_grid(coord: Cell, rows: RowsCount, columns: ColumnsCount) -> bool {
    (coord.row as usize) < rows.0 && (coord.column as usize) < columns.0
}
