//! Freehand trail tracking and validation module.
//!
//! This module contains the trail drawn by the player while solving the labyrinth: an append-only
//! sequence of pixel-space points that is validated against maze connectivity on every pointer
//! motion sample, and the pointer-driven state machine around it.

use crate::maze::Maze;

/// Outcome of a single append attempt.
///
/// This enumeration tells the caller whether a candidate point extended the trail or was
/// discarded. A rejected point is simply dropped; the trail does not extend until the next motion
/// sample produces a valid step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Verdict {
    /// The point was appended to the trail.
    Accepted,
    /// The point was discarded without mutating the trail.
    Rejected,
}

/// Pointer-driven state of a trail.
///
/// This enumeration tracks the per-session state machine: the trail waits for a drag, grows while
/// the pointer is held down, and becomes terminal once the exit cell is reached. Lifting the
/// pointer returns to [`TrailState::Idle`] with the trail kept on screen; there is no failure
/// state because invalid moves are rejected in place.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum TrailState {
    /// Awaiting a drag; an existing trail stays rendered.
    Idle,
    /// Pointer held down, appending on motion.
    Drawing,
    /// The exit cell was reached. Terminal.
    Solved,
}

/// The player's drawn trail through the maze.
///
/// This structure holds the ordered pixel-space points of the trail together with its pointer
/// state. Points are only ever appended, and only after validation; consecutive points always map
/// to open maze cells at most one orthogonal grid step apart.
#[derive(Debug)]
pub(crate) struct Trail {
    /// Trail points in pixel space, oldest first.
    points: Vec<(u16, u16)>,
    /// Current pointer-driven state.
    state: TrailState,
}

impl Trail {
    /// Creates a trail seeded with the pixel center of the start cell.
    pub(crate) fn new(start_pixel: (u16, u16)) -> Self {
        Self {
            points: vec![start_pixel],
            state: TrailState::Idle,
        }
    }

    /// Returns the trail points, oldest first.
    pub(crate) fn points(&self) -> &[(u16, u16)] {
        &self.points
    }

    /// Returns the current pointer-driven state.
    pub(crate) const fn state(&self) -> TrailState {
        self.state
    }

    /// Starts a drawing stroke.
    ///
    /// Pointer-down resumes appending; a solved trail stays solved.
    pub(crate) fn begin_stroke(&mut self) {
        if self.state == TrailState::Idle {
            self.state = TrailState::Drawing;
        }
    }

    /// Ends the current drawing stroke.
    ///
    /// Pointer-up suspends appending without discarding the trail.
    pub(crate) fn end_stroke(&mut self) {
        if self.state == TrailState::Drawing {
            self.state = TrailState::Idle;
        }
    }

    /// Validates a candidate point and appends it if it is a legal step.
    ///
    /// The candidate is mapped to a grid cell by floor division by `cell_size` and rejected when
    /// it is more than one orthogonal grid step away from the current head, or when the
    /// destination cell is a wall or out of bounds. Only a point appended to an empty trail skips
    /// validation, and the trail is seeded with the start pixel, so in practice every move is
    /// checked. A candidate equal to the current head is rejected without effect, as is any
    /// candidate once the trail is solved, so repeated rejection never mutates the trail.
    ///
    /// An accepted point that lands on the exit cell makes the trail [`TrailState::Solved`].
    pub(crate) fn try_append(
        &mut self,
        point: (u16, u16),
        maze: &Maze,
        cell_size: u16,
    ) -> Verdict {
        if self.state == TrailState::Solved {
            return Verdict::Rejected;
        }

        let cell_size = cell_size.max(1);
        let (next_x, next_y) = grid_cell(point, cell_size);

        if let Some(&head) = self.points.last() {
            if point == head {
                return Verdict::Rejected;
            }

            let (head_x, head_y) = grid_cell(head, cell_size);

            let manhattan = head_x.abs_diff(next_x) + head_y.abs_diff(next_y);
            if manhattan > 1 {
                return Verdict::Rejected;
            }
            if !maze.is_open(usize::from(next_x), usize::from(next_y)) {
                return Verdict::Rejected;
            }
        }

        self.points.push(point);

        if (usize::from(next_x), usize::from(next_y)) == maze.exit() {
            self.state = TrailState::Solved;
        }

        Verdict::Accepted
    }
}

/// Maps a pixel-space point to its grid cell by floor division.
const fn grid_cell(point: (u16, u16), cell_size: u16) -> (u16, u16) {
    (point.0 / cell_size, point.1 / cell_size)
}
