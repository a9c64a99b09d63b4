use crate::cells::{self, Cell, DirectionSmallVec, COMPASS_PRIMARIES};
use crate::errors::*;
use crate::maze::Maze;
use crate::rng::{shuffle, RandomSource};
use crate::units::{ColumnsCount, RowsCount};

/// One suspended visit of the depth first carve: the cell, its shuffled
/// candidate directions and how many of them have been processed so far.
struct Frame {
    cell: Cell,
    candidates: DirectionSmallVec,
    next_candidate: usize,
}

impl Frame {
    fn new<R: RandomSource + ?Sized>(cell: Cell, rng: &mut R) -> Frame {
        let mut candidates: DirectionSmallVec = COMPASS_PRIMARIES.iter().cloned().collect();
        shuffle(&mut candidates, rng);
        Frame {
            cell,
            candidates,
            next_candidate: 0,
        }
    }
}

/// Carve a perfect maze with the recursive backtracker algorithm.
///
/// A randomized depth first traversal of the grid graph: from the current
/// cell the four neighbour directions are shuffled, the first unvisited
/// in-bounds neighbour has the wall between it and the current cell opened
/// and is visited in turn, and the traversal backtracks once a cell has no
/// unvisited neighbours left. Every cell is visited exactly once, so the
/// opened passages form a spanning tree: `rows * columns - 1` passages, no
/// cycles, no unreachable cells.
///
/// The traversal runs on an explicit work stack rather than native recursion,
/// with the same visitation and shuffle order semantics. Branchless mazes
/// (1xN grids, long serpentine paths) reach a traversal depth of
/// `rows * columns` and would otherwise overflow the call stack.
///
/// Fails with `InvalidDimension` when either dimension is zero and with
/// `OutOfBounds` when `start` lies outside the grid, before any carving
/// begins. Given the same `rng` draw sequence and `start` the generated maze
/// is fully deterministic.
pub fn recursive_backtracker<R>(rows: RowsCount,
                                columns: ColumnsCount,
                                start: Cell,
                                rng: &mut R)
                                -> Result<Maze>
    where R: RandomSource + ?Sized
{
    let mut maze = Maze::new(rows, columns)?;
    if !maze.is_valid_coordinate(start) {
        return Err(ErrorKind::OutOfBounds(start.row, start.column, rows.0, columns.0).into());
    }

    let mut visited = vec![false; maze.size()];
    visited[row_major_index(start, columns.0)] = true;
    let mut stack = vec![Frame::new(start, rng)];

    while let Some(frame) = stack.last_mut() {

        let current = frame.cell;
        let mut unvisited_neighbour = None;
        while frame.next_candidate < frame.candidates.len() {
            let dir = frame.candidates[frame.next_candidate];
            frame.next_candidate += 1;

            if let Some(neighbour) = cells::offset_coordinate(current, dir) {
                if cells::is_inside_grid(neighbour, rows, columns) &&
                   !visited[row_major_index(neighbour, columns.0)] {
                    unvisited_neighbour = Some((neighbour, dir));
                    break;
                }
            }
        }

        match unvisited_neighbour {
            Some((neighbour, dir)) => {
                maze.carve(current, dir);
                visited[row_major_index(neighbour, columns.0)] = true;
                stack.push(Frame::new(neighbour, rng));
            }
            None => {
                stack.pop();
            }
        }
    }

    Ok(maze)
}

/// A uniformly random cell of the grid, e.g. to pick a carve starting point.
///
/// Panics if the grid has no cells.
pub fn random_cell<R>(rows: RowsCount, columns: ColumnsCount, rng: &mut R) -> Cell
    where R: RandomSource + ?Sized
{
    let index = rng.gen_below(rows.0 * columns.0);
    Cell::new((index / columns.0) as u32, (index % columns.0) as u32)
}

#[inline]
fn row_major_index(cell: Cell, columns: usize) -> usize {
    (cell.row as usize) * columns + cell.column as usize
}
