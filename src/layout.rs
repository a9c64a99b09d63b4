//! World-space geometry for a carved maze.
//!
//! The rendering/physics collaborator consuming a `Maze` needs solid wall
//! segments wherever an open-flag entry is `false`, plus the outer boundary,
//! a goal region and a ball spawn point. All rectangles are centre anchored
//! (the convention of rectangle-based physics bodies) and one grid cell maps
//! to `world_width / columns` by `world_height / rows` world units.

use itertools::iproduct;

use crate::cells::Cell;
use crate::maze::Maze;
use crate::units::{Height, Width};

/// Thickness of an inner wall segment in world units.
pub const WALL_THICKNESS: f32 = 5.0;
/// Thickness of the four outer boundary segments in world units.
pub const BOUNDARY_THICKNESS: f32 = 2.0;
/// The goal region's side length as a fraction of the cell side.
pub const GOAL_SIDE_SCALE: f32 = 0.7;
/// The ball radius as a fraction of the smaller cell side.
pub const BALL_RADIUS_SCALE: f32 = 0.25;

/// A solid, axis-aligned rectangle, anchored at its centre.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct WallSegment {
    pub centre_x: f32,
    pub centre_y: f32,
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BallSpawn {
    pub centre_x: f32,
    pub centre_y: f32,
    pub radius: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MazeLayout {
    unit_width: f32,
    unit_height: f32,
    boundaries: [WallSegment; 4],
    walls: Vec<WallSegment>,
    goal: WallSegment,
    ball: BallSpawn,
}

impl MazeLayout {
    /// Lay out `maze` over a world of the given pixel/unit dimensions.
    pub fn new(maze: &Maze, world_width: Width, world_height: Height) -> MazeLayout {
        let (Width(world_width), Height(world_height)) = (world_width, world_height);
        let unit_width = world_width / maze.columns() as f32;
        let unit_height = world_height / maze.rows() as f32;

        let boundaries = [
            // top
            WallSegment {
                centre_x: world_width / 2.0,
                centre_y: 0.0,
                width: world_width,
                height: BOUNDARY_THICKNESS,
            },
            // bottom
            WallSegment {
                centre_x: world_width / 2.0,
                centre_y: world_height,
                width: world_width,
                height: BOUNDARY_THICKNESS,
            },
            // left
            WallSegment {
                centre_x: 0.0,
                centre_y: world_height / 2.0,
                width: BOUNDARY_THICKNESS,
                height: world_height,
            },
            // right
            WallSegment {
                centre_x: world_width,
                centre_y: world_height / 2.0,
                width: BOUNDARY_THICKNESS,
                height: world_height,
            },
        ];

        let mut walls = vec![];

        // A closed horizontal flag at (row, column) is a wall between cell
        // (row, column) and (row + 1, column): a cell wide lying segment.
        for (row, column) in iproduct!(0..maze.rows() - 1, 0..maze.columns()) {
            if !maze.horizontal_wall_open(row, column) {
                walls.push(WallSegment {
                    centre_x: column as f32 * unit_width + unit_width / 2.0,
                    centre_y: row as f32 * unit_height + unit_height,
                    width: unit_width,
                    height: WALL_THICKNESS,
                });
            }
        }

        // A closed vertical flag at (row, column) is a wall between cell
        // (row, column) and (row, column + 1): a cell tall standing segment.
        for (row, column) in iproduct!(0..maze.rows(), 0..maze.columns() - 1) {
            if !maze.vertical_wall_open(row, column) {
                walls.push(WallSegment {
                    centre_x: column as f32 * unit_width + unit_width,
                    centre_y: row as f32 * unit_height + unit_height / 2.0,
                    width: WALL_THICKNESS,
                    height: unit_height,
                });
            }
        }

        // Goal region in the bottom right cell, ball spawn in the top left.
        let goal = WallSegment {
            centre_x: world_width - unit_width / 2.0,
            centre_y: world_height - unit_height / 2.0,
            width: unit_width * GOAL_SIDE_SCALE,
            height: unit_height * GOAL_SIDE_SCALE,
        };
        let ball = BallSpawn {
            centre_x: unit_width / 2.0,
            centre_y: unit_height / 2.0,
            radius: unit_width.min(unit_height) * BALL_RADIUS_SCALE,
        };

        MazeLayout {
            unit_width,
            unit_height,
            boundaries,
            walls,
            goal,
            ball,
        }
    }

    #[inline]
    pub fn unit_width(&self) -> f32 {
        self.unit_width
    }

    #[inline]
    pub fn unit_height(&self) -> f32 {
        self.unit_height
    }

    /// The four outer boundary segments: top, bottom, left, right.
    #[inline]
    pub fn boundary_segments(&self) -> &[WallSegment] {
        &self.boundaries
    }

    /// One segment per remaining inner wall, lying walls before standing ones.
    #[inline]
    pub fn wall_segments(&self) -> &[WallSegment] {
        &self.walls
    }

    #[inline]
    pub fn goal(&self) -> WallSegment {
        self.goal
    }

    #[inline]
    pub fn ball_spawn(&self) -> BallSpawn {
        self.ball
    }

    /// The world-space centre of a cell.
    pub fn cell_centre(&self, cell: Cell) -> (f32, f32) {
        (cell.column as f32 * self.unit_width + self.unit_width / 2.0,
         cell.row as f32 * self.unit_height + self.unit_height / 2.0)
    }
}
