//! Command line interface definition.
//!
//! This module declares the flags the binary accepts: the labyrinth grid dimensions and an
//! optional seed that pins the random number generator for reproducible sessions.

use clap::Parser;
use color_eyre::eyre::Result;

use crate::maze::Maze;

/// Command line options for the playroom binary.
#[derive(Debug, Parser)]
#[command(version, about = "A terminal suite of educational mini-games for children.")]
pub struct Cli {
    /// Labyrinth width in cells; must be odd and at least 5.
    #[arg(long, default_value_t = 21)]
    pub maze_width: usize,

    /// Labyrinth height in cells; must be odd and at least 5.
    #[arg(long, default_value_t = 21)]
    pub maze_height: usize,

    /// Seed for the random number generator; random when omitted.
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Cli {
    /// Checks that the requested labyrinth dimensions fit the maze carving scheme.
    ///
    /// Running this before the terminal is taken over turns a bad flag into a plain error message
    /// instead of a mid-game failure.
    ///
    /// # Errors
    ///
    /// This function returns an error when either dimension is even or below five.
    pub fn validate(&self) -> Result<()> {
        Maze::validate_dimensions(self.maze_width, self.maze_height)?;

        Ok(())
    }
}
