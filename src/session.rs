//! Labyrinth session glue between the pure maze core and the terminal.
//!
//! This module owns one maze game session: the generated maze, the player's trail, and the
//! mapping from absolute terminal mouse coordinates to the trail's maze-local pixel space. The
//! session records the maze's on-screen area while it is drawn, the same way the menu viewport
//! records its geometry, so pointer events arriving between frames can be translated.

use color_eyre::eyre::Result;
use rand::Rng;
use ratatui::layout::{Position, Rect};

use crate::{
    maze::{Maze, MazeError},
    trail::{Trail, TrailState},
};

/// How many times a failed exit selection may regenerate the maze.
///
/// A failed exit draw is recoverable: a fresh maze redraws the odds. Anything still failing after
/// this many boards is a real problem worth surfacing.
const REGENERATE_CAP: usize = 3;

/// One running labyrinth game.
///
/// This structure bundles the immutable maze with the mutable trail and the screen bookkeeping
/// needed to feed pointer events into it. The maze is generated once when the session starts and
/// never changes; the trail is reset only by starting a new session.
#[derive(Debug)]
pub(crate) struct MazeSession {
    /// The generated maze, read-only for the rest of the session.
    pub(crate) maze: Maze,
    /// The player's drawn trail.
    pub(crate) trail: Trail,
    /// Pixel edge length of one maze cell; one terminal cell per maze cell.
    pub(crate) cell_size: u16,
    /// On-screen area of the maze during the last draw.
    pub(crate) area: Rect,
}

impl MazeSession {
    /// Generates a fresh maze and seeds the trail at the start cell's pixel center.
    ///
    /// # Errors
    ///
    /// This function propagates maze construction failures and coordinate conversion errors for
    /// grids too large to address on a terminal.
    pub(crate) fn new(width: usize, height: usize, rng: &mut impl Rng) -> Result<Self> {
        let maze = generate_with_retry(width, height, rng)?;
        let cell_size = 1;

        let (start_x, start_y) = maze.start();
        let trail = Trail::new((
            u16::try_from(start_x)? * cell_size + cell_size / 2,
            u16::try_from(start_y)? * cell_size + cell_size / 2,
        ));

        Ok(Self {
            maze,
            trail,
            cell_size,
            area: Rect::default(),
        })
    }

    /// Handles a pointer press: the trail starts or resumes drawing.
    pub(crate) fn pointer_down(&mut self) {
        self.trail.begin_stroke();
    }

    /// Handles a pointer release: drawing pauses with the trail kept.
    pub(crate) fn pointer_up(&mut self) {
        self.trail.end_stroke();
    }

    /// Handles pointer motion while the button is held.
    ///
    /// Coordinates outside the maze area are dropped; everything else is translated into the
    /// maze-local pixel space and offered to the trail, which silently discards illegal steps.
    pub(crate) fn pointer_moved(&mut self, column: u16, row: u16) {
        if self.trail.state() != TrailState::Drawing {
            return;
        }

        if let Some(point) = self.to_local(column, row) {
            let _ = self.trail.try_append(point, &self.maze, self.cell_size);
        }
    }

    /// Reports whether the trail has reached the exit cell.
    pub(crate) fn solved(&self) -> bool {
        self.trail.state() == TrailState::Solved
    }

    /// Translates absolute terminal coordinates into maze-local pixel space.
    fn to_local(&self, column: u16, row: u16) -> Option<(u16, u16)> {
        self.area
            .contains(Position::new(column, row))
            .then(|| (column - self.area.x, row - self.area.y))
    }
}

/// Generates a maze, regenerating on a failed exit draw.
///
/// Bad dimensions are fatal and reported immediately; an exhausted exit-sampling budget gets a
/// fresh board up to [`REGENERATE_CAP`] times before the failure is surfaced.
///
/// # Errors
///
/// This function returns the underlying generation error once the retry budget is spent.
fn generate_with_retry(width: usize, height: usize, rng: &mut impl Rng) -> Result<Maze> {
    let mut attempts = 0;
    loop {
        match Maze::generate(width, height, rng) {
            Err(MazeError::ExitSelectionFailed { .. }) if attempts < REGENERATE_CAP => {
                attempts += 1;
            }
            other => return Ok(other?),
        }
    }
}
