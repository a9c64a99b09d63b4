use docopt::Docopt;
use serde_derive::Deserialize;
use wallmaze::{
    cells::Cell,
    generators,
    layout::MazeLayout,
    maze::Maze,
    rng::seeded_rng,
    units::{ColumnsCount, Height, RowsCount, Width},
};
use std::{
    fmt::Write as FmtWrite,
    fs::File,
    io,
    io::prelude::*,
};

const USAGE: &str = "Wallmaze

Usage:
    wallmaze_driver -h | --help
    wallmaze_driver [(--grid-size=<n>|[--grid-width=<w> --grid-height=<h>])] [--seed=<s>] [--start-row=<r> --start-column=<c>] [--text-out=<path>] [--layout-out=<path> --world-width=<x> --world-height=<y>]

Options:
    -h --help            Show this screen.
    --grid-size=<n>      The grid size is n * n.
    --grid-width=<w>     The grid width (columns) in a w*h grid [default: 14].
    --grid-height=<h>    The grid height (rows) in a w*h grid [default: 10].
    --seed=<s>           Seed the random generator. A fixed seed and start cell reproduce the same maze.
    --start-row=<r>      Row of the carve starting cell. Chosen at random if not given.
    --start-column=<c>   Column of the carve starting cell. Chosen at random if not given.
    --text-out=<path>    Output file path for the textual maze rendering, which otherwise goes to stdout.
    --layout-out=<path>  Output file path for the world-space wall layout, one centre-anchored rectangle per line.
    --world-width=<x>    World width in units used by the wall layout [default: 800].
    --world-height=<y>   World height in units used by the wall layout [default: 600].
";

#[derive(Debug, Deserialize)]
struct MazeArgs {
    flag_grid_size: Option<usize>,
    flag_grid_width: usize,
    flag_grid_height: usize,
    flag_seed: Option<u32>,
    flag_start_row: Option<u32>,
    flag_start_column: Option<u32>,
    flag_text_out: String,
    flag_layout_out: String,
    flag_world_width: f32,
    flag_world_height: f32,
}

// We'll put our errors in an `errors` module; `error_chain!` creates the
// Error, ErrorKind, ResultExt and Result types, links in the library's own
// error type and wraps the docopt and io failures.
mod errors {
    use error_chain::*;
    error_chain! {

        links {
            Maze(::wallmaze::errors::Error, ::wallmaze::errors::ErrorKind);
        }
        foreign_links {
            DocOptFailure(::docopt::Error);
            Io(::std::io::Error);
        }
    }
}
use crate::errors::*;

fn main() -> Result<()> {

    let args: MazeArgs = Docopt::new(USAGE).and_then(|d| d.deserialize())?;

    let (columns, rows) = if let Some(square_grid_size) = args.flag_grid_size {
        (square_grid_size, square_grid_size)
    } else {
        (args.flag_grid_width, args.flag_grid_height)
    };

    let mut rng = match args.flag_seed {
        Some(seed) => seeded_rng(seed),
        None => seeded_rng(rand::random::<u32>()),
    };

    let start = match (args.flag_start_row, args.flag_start_column) {
        (Some(start_row), Some(start_column)) => Cell::new(start_row, start_column),
        _ if rows > 0 && columns > 0 => {
            generators::random_cell(RowsCount(rows), ColumnsCount(columns), &mut rng)
        }
        // The dimensions are invalid, let the generator report it.
        _ => Cell::new(0, 0),
    };

    let maze =
        generators::recursive_backtracker(RowsCount(rows), ColumnsCount(columns), start, &mut rng)?;

    if args.flag_text_out.is_empty() {
        println!("{}", maze);
    } else {
        write_text_to_file(&format!("{}", maze), &args.flag_text_out)
            .chain_err(|| format!("Failed to write maze to text file {}", args.flag_text_out))?;
    }

    if !args.flag_layout_out.is_empty() {
        let layout = MazeLayout::new(&maze,
                                     Width(args.flag_world_width),
                                     Height(args.flag_world_height));
        write_text_to_file(&layout_description(&maze, &layout), &args.flag_layout_out)
            .chain_err(|| {
                format!("Failed to write wall layout to text file {}", args.flag_layout_out)
            })?;
    }

    Ok(())
}

/// Serialize the layout as one tagged line per body: `wall x y width height`
/// for the boundary and inner wall rectangles, `goal x y width height` for
/// the goal region and `ball x y radius` for the spawn point, all centre
/// anchored.
fn layout_description(maze: &Maze, layout: &MazeLayout) -> String {
    let mut description = String::new();
    let _ = writeln!(description,
                     "# {}x{} maze, cell unit {}x{}",
                     maze.rows(),
                     maze.columns(),
                     layout.unit_width(),
                     layout.unit_height());

    for segment in layout.boundary_segments().iter().chain(layout.wall_segments()) {
        let _ = writeln!(description,
                         "wall {} {} {} {}",
                         segment.centre_x,
                         segment.centre_y,
                         segment.width,
                         segment.height);
    }

    let goal = layout.goal();
    let _ = writeln!(description,
                     "goal {} {} {} {}",
                     goal.centre_x,
                     goal.centre_y,
                     goal.width,
                     goal.height);

    let ball = layout.ball_spawn();
    let _ = writeln!(description, "ball {} {} {}", ball.centre_x, ball.centre_y, ball.radius);

    description
}

fn write_text_to_file(data: &str, file_name: &str) -> io::Result<()> {
    let mut f = File::create(file_name)?;
    f.write_all(data.as_bytes())?;
    Ok(())
}
