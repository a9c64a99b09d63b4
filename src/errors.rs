// Other modules in this crate `use crate::errors::*;` to get access to
// everything `error_chain!` creates: the Error, ErrorKind, ResultExt and
// Result types, plus the From conversions that let `?` work for our `Error`.

use error_chain::*;

error_chain! {

    errors {
        /// A maze must have at least one row and one column.
        InvalidDimension(rows: usize, columns: usize) {
            description("invalid maze dimension")
            display("invalid maze dimension {}x{}: rows and columns must both be at least 1", rows, columns)
        }
        /// The requested start cell lies outside the grid.
        OutOfBounds(row: u32, column: u32, rows: usize, columns: usize) {
            description("cell outside the maze grid")
            display("cell ({}, {}) is outside the {}x{} grid", row, column, rows, columns)
        }
    }
}
