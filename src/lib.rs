//! This crate contains the library code for playroom, a terminal suite of educational mini-games
//! for children.
//!
//! Three games share one menu and rendering loop: a picture-memory board, a labyrinth drawn and
//! solved with the mouse, and a shadow-matching game. The labyrinth's maze generator and trail
//! validator form a pure core with no terminal dependencies; the remaining modules adapt that
//! core and the two board games to ratatui and crossterm events.

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]

mod app;
mod board;
mod cli;
mod events;
mod maze;
mod pieces;
mod session;
mod shadows;
mod trail;
mod types;
mod ui;

pub use app::App;
pub use cli::Cli;
