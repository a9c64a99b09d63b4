use std::fmt;

use crate::cells::{Cell, CompassPrimary};
use crate::errors::*;
use crate::units::{ColumnsCount, RowsCount};

/// A carved maze: the two open-flag wall matrices over a `rows x columns` grid.
///
/// A `true` flag means the passage between two adjacent cells is open (no
/// wall), `false` means a wall is present. Flags start all `false` and are
/// flipped to `true` only, never back, so a fully generated `Maze` is an
/// immutable description of which walls exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    rows: usize,
    columns: usize,
    /// One flag per wall between a cell and its east neighbour,
    /// `rows * (columns - 1)` entries in row major order.
    vertical_open: Vec<bool>,
    /// One flag per wall between a cell and its south neighbour,
    /// `(rows - 1) * columns` entries in row major order.
    horizontal_open: Vec<bool>,
}

impl Maze {
    /// An uncarved maze with every wall present.
    pub fn new(rows: RowsCount, columns: ColumnsCount) -> Result<Maze> {
        let (RowsCount(rows), ColumnsCount(columns)) = (rows, columns);
        if rows < 1 || columns < 1 {
            return Err(ErrorKind::InvalidDimension(rows, columns).into());
        }

        Ok(Maze {
            rows,
            columns,
            vertical_open: vec![false; rows * (columns - 1)],
            horizontal_open: vec![false; (rows - 1) * columns],
        })
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.rows * self.columns
    }

    #[inline]
    pub fn is_valid_coordinate(&self, coord: Cell) -> bool {
        (coord.row as usize) < self.rows && (coord.column as usize) < self.columns
    }

    /// Is the wall between `(row, column)` and `(row, column + 1)` open?
    ///
    /// Panics if `row >= rows` or `column >= columns - 1`.
    #[inline]
    pub fn vertical_wall_open(&self, row: usize, column: usize) -> bool {
        self.vertical_open[self.vertical_index(row, column)]
    }

    /// Is the wall between `(row, column)` and `(row + 1, column)` open?
    ///
    /// Panics if `row >= rows - 1` or `column >= columns`.
    #[inline]
    pub fn horizontal_wall_open(&self, row: usize, column: usize) -> bool {
        self.horizontal_open[self.horizontal_index(row, column)]
    }

    /// Is there an open passage from this cell to its east neighbour?
    /// False on the east edge of the grid where no neighbour exists.
    pub fn passage_east(&self, coord: Cell) -> bool {
        let (row, column) = (coord.row as usize, coord.column as usize);
        column + 1 < self.columns && self.vertical_wall_open(row, column)
    }

    /// Is there an open passage from this cell to its south neighbour?
    /// False on the south edge of the grid where no neighbour exists.
    pub fn passage_south(&self, coord: Cell) -> bool {
        let (row, column) = (coord.row as usize, coord.column as usize);
        row + 1 < self.rows && self.horizontal_wall_open(row, column)
    }

    /// Total open passages across both wall matrices.
    ///
    /// A perfect maze has exactly `rows * columns - 1`.
    pub fn passages_count(&self) -> usize {
        let open = |flags: &[bool]| flags.iter().filter(|&&flag| flag).count();
        open(&self.vertical_open) + open(&self.horizontal_open)
    }

    /// Open the wall between `coord` and its neighbour one step in `dir`.
    ///
    /// West/East flips the vertical flag indexed by the smaller column,
    /// North/South the horizontal flag indexed by the smaller row. The caller
    /// must have bounds checked the neighbour.
    pub(crate) fn carve(&mut self, coord: Cell, dir: CompassPrimary) {
        let (row, column) = (coord.row as usize, coord.column as usize);
        match dir {
            CompassPrimary::West => {
                let index = self.vertical_index(row, column - 1);
                self.vertical_open[index] = true;
            }
            CompassPrimary::East => {
                let index = self.vertical_index(row, column);
                self.vertical_open[index] = true;
            }
            CompassPrimary::North => {
                let index = self.horizontal_index(row - 1, column);
                self.horizontal_open[index] = true;
            }
            CompassPrimary::South => {
                let index = self.horizontal_index(row, column);
                self.horizontal_open[index] = true;
            }
        }
    }

    #[inline]
    fn vertical_index(&self, row: usize, column: usize) -> usize {
        debug_assert!(row < self.rows && column < self.columns - 1);
        row * (self.columns - 1) + column
    }

    #[inline]
    fn horizontal_index(&self, row: usize, column: usize) -> usize {
        debug_assert!(row < self.rows - 1 && column < self.columns);
        row * self.columns + column
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {

        const WALL_L: &str = "╴";
        const WALL_R: &str = "╶";
        const WALL_U: &str = "╵";
        const WALL_D: &str = "╷";
        const WALL_LR_3: &str = "───";
        const WALL_LR: &str = "─";
        const WALL_UD: &str = "│";
        const WALL_LD: &str = "┐";
        const WALL_RU: &str = "└";
        const WALL_LU: &str = "┘";
        const WALL_RD: &str = "┌";
        const WALL_LRU: &str = "┴";
        const WALL_LRD: &str = "┬";
        const WALL_LRUD: &str = "┼";
        const WALL_RUD: &str = "├";
        const WALL_LUD: &str = "┤";

        let east_open =
            |row: usize, column: usize| column + 1 < self.columns && self.vertical_wall_open(row, column);
        let south_open =
            |row: usize, column: usize| row + 1 < self.rows && self.horizontal_wall_open(row, column);

        // The north most boundary is a special case, only broken up where a
        // top row cell has no east wall.
        let mut output = String::from(WALL_RD);
        for column in 0..self.columns {
            output.push_str(WALL_LR_3);
            let is_last_column = column == self.columns - 1;
            output.push_str(match (east_open(0, column), is_last_column) {
                (true, _) => WALL_LR,
                (false, true) => WALL_LD,
                (false, false) => WALL_LRD,
            });
        }
        output.push('\n');

        for row in 0..self.rows {

            let is_last_row = row == self.rows - 1;

            // Each cell uses the southern wall of the cell above as its own
            // northern wall, so a row renders as a middle section (cell body
            // and east boundary) and a bottom section (south boundary and the
            // south east corner piece).
            let mut middle_section = String::from(WALL_UD);
            let mut bottom_section = String::from(if is_last_row {
                WALL_RU
            } else if south_open(row, 0) {
                WALL_UD
            } else {
                WALL_RUD
            });

            for column in 0..self.columns {

                let is_last_column = column == self.columns - 1;

                middle_section.push_str("   ");
                middle_section.push_str(if east_open(row, column) { " " } else { WALL_UD });

                bottom_section.push_str(if south_open(row, column) { "   " } else { WALL_LR_3 });

                let corner = match (is_last_row, is_last_column) {
                    (true, true) => WALL_LU,
                    (true, false) => {
                        if east_open(row, column) {
                            WALL_LR
                        } else {
                            WALL_LRU
                        }
                    }
                    (false, true) => {
                        if south_open(row, column) {
                            WALL_UD
                        } else {
                            WALL_LUD
                        }
                    }
                    (false, false) => {
                        let show_left_section = !south_open(row, column);
                        let show_right_section = !south_open(row, column + 1);
                        let show_up_section = !east_open(row, column);
                        let show_down_section = !east_open(row + 1, column);

                        match (show_left_section,
                               show_right_section,
                               show_up_section,
                               show_down_section) {
                            (true, true, true, true) => WALL_LRUD,
                            (true, true, true, false) => WALL_LRU,
                            (true, true, false, true) => WALL_LRD,
                            (true, false, true, true) => WALL_LUD,
                            (false, true, true, true) => WALL_RUD,
                            (true, true, false, false) => WALL_LR,
                            (false, false, true, true) => WALL_UD,
                            (false, true, true, false) => WALL_RU,
                            (true, false, false, true) => WALL_LD,
                            (true, false, true, false) => WALL_LU,
                            (false, true, false, true) => WALL_RD,
                            (true, false, false, false) => WALL_L,
                            (false, true, false, false) => WALL_R,
                            (false, false, true, false) => WALL_U,
                            (false, false, false, true) => WALL_D,
                            _ => " ",
                        }
                    }
                };
                bottom_section.push_str(corner);
            }

            output.push_str(&middle_section);
            output.push('\n');
            output.push_str(&bottom_section);
            output.push('\n');
        }

        write!(f, "{}", output)
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::cells::{Cell, CompassPrimary};
    use crate::units::{ColumnsCount, RowsCount};

    fn maze(rows: usize, columns: usize) -> Maze {
        Maze::new(RowsCount(rows), ColumnsCount(columns)).unwrap()
    }

    #[test]
    fn new_maze_has_every_wall_present() {
        let m = maze(3, 4);
        assert_eq!(m.rows(), 3);
        assert_eq!(m.columns(), 4);
        assert_eq!(m.size(), 12);
        assert_eq!(m.passages_count(), 0);
        for row in 0..3 {
            for column in 0..3 {
                assert!(!m.vertical_wall_open(row, column));
            }
        }
        for row in 0..2 {
            for column in 0..4 {
                assert!(!m.horizontal_wall_open(row, column));
            }
        }
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        for (rows, columns) in &[(0, 5), (5, 0), (0, 0)] {
            let err = Maze::new(RowsCount(*rows), ColumnsCount(*columns)).unwrap_err();
            match *err.kind() {
                ErrorKind::InvalidDimension(r, c) => {
                    assert_eq!((r, c), (*rows, *columns));
                }
                _ => panic!("expected InvalidDimension, got {:?}", err),
            }
        }
    }

    #[test]
    fn single_cell_maze_has_empty_wall_matrices() {
        let m = maze(1, 1);
        assert_eq!(m.passages_count(), 0);
        assert!(!m.passage_east(Cell::new(0, 0)));
        assert!(!m.passage_south(Cell::new(0, 0)));
    }

    #[test]
    fn carving_east_and_west_flip_the_same_vertical_flag() {
        let mut east = maze(2, 3);
        east.carve(Cell::new(1, 1), CompassPrimary::East);
        assert!(east.vertical_wall_open(1, 1));

        let mut west = maze(2, 3);
        west.carve(Cell::new(1, 2), CompassPrimary::West);
        assert!(west.vertical_wall_open(1, 1));

        assert_eq!(east, west);
    }

    #[test]
    fn carving_north_and_south_flip_the_same_horizontal_flag() {
        let mut south = maze(3, 2);
        south.carve(Cell::new(1, 0), CompassPrimary::South);
        assert!(south.horizontal_wall_open(1, 0));

        let mut north = maze(3, 2);
        north.carve(Cell::new(2, 0), CompassPrimary::North);
        assert!(north.horizontal_wall_open(1, 0));

        assert_eq!(south, north);
    }

    #[test]
    fn passages_are_queryable_from_either_side() {
        let mut m = maze(2, 2);
        m.carve(Cell::new(0, 0), CompassPrimary::East);
        assert!(m.passage_east(Cell::new(0, 0)));
        assert!(!m.passage_east(Cell::new(0, 1))); // east edge, no neighbour
        assert!(!m.passage_south(Cell::new(0, 0)));
        assert_eq!(m.passages_count(), 1);
    }

    #[test]
    fn display_renders_walls_and_passages() {
        // Passages: (0,0)-(1,0), (1,0)-(1,1), (1,1)-(0,1).
        let mut m = maze(2, 2);
        m.carve(Cell::new(0, 0), CompassPrimary::South);
        m.carve(Cell::new(1, 0), CompassPrimary::East);
        m.carve(Cell::new(1, 1), CompassPrimary::North);

        let expected = "┌───┬───┐\n\
                        │   │   │\n\
                        │   ╵   │\n\
                        │       │\n\
                        └───────┘\n";
        assert_eq!(format!("{}", m), expected);
    }

    #[test]
    fn display_of_uncarved_single_cell() {
        let m = maze(1, 1);
        assert_eq!(format!("{}", m), "┌───┐\n│   │\n└───┘\n");
    }
}
