//! Procedural maze generation module.
//!
//! This module contains the perfect-maze generator used by the labyrinth game: randomized
//! depth-first carving over a cell grid, plus the rejection-sampled exit cell near the far edge of
//! the board.

use rand::{seq::SliceRandom as _, Rng};

/// Fixed grid coordinates of the carving origin.
///
/// This constant holds the interior cell from which carving starts. The trail drawn by the player
/// also starts here, so the cell doubles as the start marker of the labyrinth game.
pub(crate) const START_CELL: (usize, usize) = (1, 1);

/// Upper bound on exit-cell sampling attempts.
///
/// This constant caps the rejection-sampling loop that picks the exit cell. Without a cap a
/// pathological band of wall cells could keep the loop spinning forever.
const EXIT_SAMPLE_CAP: usize = 4096;

/// Candidate neighbor offsets used while carving.
///
/// Carving considers the four cells two grid-steps away so that the wall cell between the current
/// cell and the candidate can be opened together with the candidate itself.
const CARVE_OFFSETS: [(isize, isize); 4] = [(0, -2), (2, 0), (0, 2), (-2, 0)];

/// Binary state of one maze grid cell.
///
/// This enumeration distinguishes carved corridor cells from the walls that surround them. Cells
/// start out as walls and are opened during generation; the grid never changes afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Cell {
    /// Solid cell the trail may not enter.
    Wall,
    /// Carved corridor cell.
    Open,
}

/// Errors raised while constructing a maze.
///
/// This enumeration covers the two failure modes of generation: a grid request the carving scheme
/// cannot handle, and an exit-sampling loop that exhausted its attempt budget.
#[derive(Debug, thiserror::Error)]
pub(crate) enum MazeError {
    /// The requested grid dimensions are unusable.
    ///
    /// Carving is parity-aligned to odd coordinates, so both dimensions must be odd and at least
    /// five cells.
    #[error("maze dimensions must be odd and at least 5, got {width}x{height}")]
    InvalidDimension {
        /// Requested grid width in cells.
        width: usize,
        /// Requested grid height in cells.
        height: usize,
    },
    /// Exit sampling exhausted its attempt budget without landing on an open cell.
    #[error("no open exit cell found within {attempts} samples")]
    ExitSelectionFailed {
        /// Number of samples drawn before giving up.
        attempts: usize,
    },
}

/// A generated perfect maze.
///
/// This structure holds the carved cell grid together with the start and exit cells. After
/// [`Maze::generate`] returns, the open cells form a single connected component with no cycles,
/// and the structure is read-only for the rest of the game session.
#[derive(Debug)]
pub(crate) struct Maze {
    /// Grid width in cells.
    width: usize,
    /// Grid height in cells.
    height: usize,
    /// Cell states in row-major order.
    cells: Vec<Cell>,
    /// Exit cell the player has to reach.
    exit: (usize, usize),
}

impl Maze {
    /// Generates a maze of the given odd dimensions.
    ///
    /// All cells start as walls. The carving origin is opened and pushed on an explicit stack;
    /// each iteration shuffles the four two-step neighbor offsets, opens the first in-bounds
    /// still-walled candidate together with the wall cell between them, and descends into it. When
    /// no candidate remains the cell is popped, and generation finishes once the stack drains. An
    /// explicit stack is used instead of recursion so that large grids cannot exhaust the call
    /// stack.
    ///
    /// The exit cell is then drawn by rejection sampling from the last three columns across the
    /// full row range until an open cell distinct from the start turns up, capped at
    /// [`EXIT_SAMPLE_CAP`] attempts.
    ///
    /// # Errors
    ///
    /// - [`MazeError::InvalidDimension`] if either dimension is even or below five
    /// - [`MazeError::ExitSelectionFailed`] if exit sampling exhausts its attempt budget
    #[expect(
        clippy::indexing_slicing,
        reason = "Cell indices are derived from bounds-checked coordinates."
    )]
    pub(crate) fn generate(
        width: usize,
        height: usize,
        rng: &mut impl Rng,
    ) -> Result<Self, MazeError> {
        Self::validate_dimensions(width, height)?;

        let mut cells = vec![Cell::Wall; width * height];
        cells[START_CELL.1 * width + START_CELL.0] = Cell::Open;

        let mut stack = Vec::with_capacity(width * height / 4);
        stack.push(START_CELL);

        while let Some(&(cur_x, cur_y)) = stack.last() {
            let mut offsets = CARVE_OFFSETS;
            offsets.shuffle(rng);

            let mut descended = false;
            for (offset_x, offset_y) in offsets {
                let Some(next_x) = cur_x.checked_add_signed(offset_x) else {
                    continue;
                };
                let Some(next_y) = cur_y.checked_add_signed(offset_y) else {
                    continue;
                };

                if next_x < width && next_y < height && cells[next_y * width + next_x] == Cell::Wall
                {
                    // Open the wall between the two cells along with the candidate itself.
                    let mid_x = cur_x.wrapping_add_signed(offset_x / 2);
                    let mid_y = cur_y.wrapping_add_signed(offset_y / 2);
                    cells[mid_y * width + mid_x] = Cell::Open;
                    cells[next_y * width + next_x] = Cell::Open;

                    stack.push((next_x, next_y));
                    descended = true;
                    break;
                }
            }

            if !descended {
                let _ = stack.pop();
            }
        }

        let exit = Self::select_exit(&cells, width, height, rng)?;

        Ok(Self {
            width,
            height,
            cells,
            exit,
        })
    }

    /// Checks that the given dimensions fit the carving scheme.
    ///
    /// # Errors
    ///
    /// - [`MazeError::InvalidDimension`] if either dimension is even or below five
    pub(crate) fn validate_dimensions(width: usize, height: usize) -> Result<(), MazeError> {
        if width < 5 || height < 5 || width % 2 == 0 || height % 2 == 0 {
            return Err(MazeError::InvalidDimension { width, height });
        }

        Ok(())
    }

    /// Draws the exit cell from the edge band by rejection sampling.
    ///
    /// # Errors
    ///
    /// - [`MazeError::ExitSelectionFailed`] if no open cell turns up within the attempt budget
    #[expect(
        clippy::indexing_slicing,
        reason = "Sampled coordinates are drawn from in-bounds ranges."
    )]
    fn select_exit(
        cells: &[Cell],
        width: usize,
        height: usize,
        rng: &mut impl Rng,
    ) -> Result<(usize, usize), MazeError> {
        for _ in 0..EXIT_SAMPLE_CAP {
            let sample_x = rng.gen_range(width - 3..width);
            let sample_y = rng.gen_range(0..height);

            if (sample_x, sample_y) != START_CELL
                && cells[sample_y * width + sample_x] == Cell::Open
            {
                return Ok((sample_x, sample_y));
            }
        }

        Err(MazeError::ExitSelectionFailed {
            attempts: EXIT_SAMPLE_CAP,
        })
    }

    /// Returns the grid width in cells.
    pub(crate) const fn width(&self) -> usize {
        self.width
    }

    /// Returns the grid height in cells.
    pub(crate) const fn height(&self) -> usize {
        self.height
    }

    /// Returns the start cell.
    pub(crate) const fn start(&self) -> (usize, usize) {
        START_CELL
    }

    /// Returns the exit cell.
    pub(crate) const fn exit(&self) -> (usize, usize) {
        self.exit
    }

    /// Returns the state of the cell at the given coordinates, if in bounds.
    pub(crate) fn cell(&self, cell_x: usize, cell_y: usize) -> Option<Cell> {
        if cell_x < self.width && cell_y < self.height {
            self.cells.get(cell_y * self.width + cell_x).copied()
        } else {
            None
        }
    }

    /// Reports whether the cell at the given coordinates is open.
    ///
    /// Out-of-bounds coordinates count as walls, which lets callers treat the area beyond the
    /// grid edge as impassable.
    pub(crate) fn is_open(&self, cell_x: usize, cell_y: usize) -> bool {
        self.cell(cell_x, cell_y) == Some(Cell::Open)
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng as _};

    use super::*;

    /// Flood fills open cells from the start and returns how many were reached.
    fn flood_fill_count(maze: &Maze) -> usize {
        let mut visited = vec![false; maze.width() * maze.height()];
        let mut stack = vec![maze.start()];
        let mut reached = 0;

        while let Some((cell_x, cell_y)) = stack.pop() {
            let idx = cell_y * maze.width() + cell_x;
            if visited[idx] || !maze.is_open(cell_x, cell_y) {
                continue;
            }
            visited[idx] = true;
            reached += 1;

            for (offset_x, offset_y) in [(0_isize, -1_isize), (0, 1), (1, 0), (-1, 0)] {
                if let (Some(next_x), Some(next_y)) = (
                    cell_x.checked_add_signed(offset_x),
                    cell_y.checked_add_signed(offset_y),
                ) {
                    if maze.is_open(next_x, next_y) {
                        stack.push((next_x, next_y));
                    }
                }
            }
        }

        reached
    }

    /// Counts open cells and the orthogonal adjacencies between them.
    fn open_cells_and_edges(maze: &Maze) -> (usize, usize) {
        let mut open = 0;
        let mut edges = 0;

        for cell_y in 0..maze.height() {
            for cell_x in 0..maze.width() {
                if !maze.is_open(cell_x, cell_y) {
                    continue;
                }
                open += 1;

                // Count each edge once by only looking right and down.
                if maze.is_open(cell_x + 1, cell_y) {
                    edges += 1;
                }
                if maze.is_open(cell_x, cell_y + 1) {
                    edges += 1;
                }
            }
        }

        (open, edges)
    }

    #[test]
    fn test_generate_rejects_even_width() {
        let mut rng = StdRng::seed_from_u64(0);
        let result = Maze::generate(20, 21, &mut rng);

        assert!(matches!(
            result,
            Err(MazeError::InvalidDimension {
                width: 20,
                height: 21
            })
        ));
    }

    #[test]
    fn test_generate_rejects_even_height() {
        let mut rng = StdRng::seed_from_u64(0);
        let result = Maze::generate(21, 8, &mut rng);

        assert!(matches!(result, Err(MazeError::InvalidDimension { .. })));
    }

    #[test]
    fn test_generate_rejects_too_small_dimensions() {
        let mut rng = StdRng::seed_from_u64(0);
        let result = Maze::generate(3, 3, &mut rng);

        assert!(matches!(result, Err(MazeError::InvalidDimension { .. })));
    }

    #[test]
    fn test_validate_dimensions_accepts_minimum() {
        assert!(Maze::validate_dimensions(5, 5).is_ok());
    }

    #[test]
    fn test_start_cell_is_open() {
        let mut rng = StdRng::seed_from_u64(7);
        let maze = Maze::generate(5, 5, &mut rng).expect("generation should succeed");

        assert_eq!(maze.cell(1, 1), Some(Cell::Open));
    }

    #[test]
    fn test_small_maze_is_fully_connected() {
        let mut rng = StdRng::seed_from_u64(42);
        let maze = Maze::generate(5, 5, &mut rng).expect("generation should succeed");

        let (open, _) = open_cells_and_edges(&maze);
        assert_eq!(
            flood_fill_count(&maze),
            open,
            "every open cell must be reachable from the start"
        );
    }

    #[test]
    fn test_large_maze_is_fully_connected() {
        let mut rng = StdRng::seed_from_u64(1234);
        let maze = Maze::generate(21, 21, &mut rng).expect("generation should succeed");

        let (open, _) = open_cells_and_edges(&maze);
        assert_eq!(
            flood_fill_count(&maze),
            open,
            "every open cell must be reachable from the start"
        );
    }

    #[test]
    fn test_maze_is_perfect() {
        // A connected grid graph with exactly one fewer edge than vertices is a spanning tree,
        // which rules out cycles among the carved cells.
        for seed in [0, 1, 99, 4096] {
            let mut rng = StdRng::seed_from_u64(seed);
            let maze = Maze::generate(21, 21, &mut rng).expect("generation should succeed");

            let (open, edges) = open_cells_and_edges(&maze);
            assert_eq!(flood_fill_count(&maze), open, "maze must be connected");
            assert_eq!(edges, open - 1, "open cells must form a spanning tree");
        }
    }

    #[test]
    fn test_exit_is_open_and_distinct_from_start() {
        for seed in [3, 17, 2025] {
            let mut rng = StdRng::seed_from_u64(seed);
            let maze = Maze::generate(21, 21, &mut rng).expect("generation should succeed");

            let (exit_x, exit_y) = maze.exit();
            assert!(maze.is_open(exit_x, exit_y), "exit cell must be open");
            assert_ne!(maze.exit(), maze.start(), "exit must differ from start");
            assert!(
                exit_x >= maze.width() - 3,
                "exit must lie in the edge band of the last three columns"
            );
        }
    }

    #[test]
    fn test_out_of_bounds_cells_count_as_walls() {
        let mut rng = StdRng::seed_from_u64(5);
        let maze = Maze::generate(5, 5, &mut rng).expect("generation should succeed");

        assert_eq!(maze.cell(5, 0), None);
        assert_eq!(maze.cell(0, 5), None);
        assert!(!maze.is_open(99, 99));
    }

    #[test]
    fn test_same_seed_generates_same_maze() {
        let mut first_rng = StdRng::seed_from_u64(77);
        let mut second_rng = StdRng::seed_from_u64(77);

        let first = Maze::generate(9, 9, &mut first_rng).expect("generation should succeed");
        let second = Maze::generate(9, 9, &mut second_rng).expect("generation should succeed");

        assert_eq!(first.cells, second.cells);
        assert_eq!(first.exit(), second.exit());
    }
}
