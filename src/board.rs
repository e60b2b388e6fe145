//! Memory game state and bookkeeping module.
//!
//! This module contains the picture-memory board: pair layout, the reveal mask, and the timer
//! that flips a mismatched pair face-down again after a short delay.

use std::time::{Duration, Instant};

use color_eyre::eyre::{ensure, Result};
use rand::{seq::SliceRandom as _, Rng};
use ratatui::layout::Rect;

use crate::pieces;

/// How long a mismatched pair stays face-up, in milliseconds.
///
/// This constant mirrors the reveal window children get to memorize a failed guess before both
/// tiles flip back. Input is locked while the pair is showing.
pub(crate) const MISMATCH_HIDE_DELAY_MS: u64 = 1000;

/// A pair of revealed tiles that did not match.
///
/// This structure remembers which two tiles are face-up on borrowed time and when they were
/// revealed, so the update tick knows when to hide them again.
#[derive(Debug)]
struct Mismatch {
    /// Row-major indices of the two mismatched tiles.
    tiles: [usize; 2],
    /// When the second tile of the pair was revealed.
    shown_at: Instant,
}

/// Picture-memory board state.
///
/// This structure holds everything the memory game tracks between frames: the dealt tiles, which
/// of them are face-up, the first tile of an in-progress guess, and a pending mismatch. The
/// on-screen area of the board is recorded during drawing so mouse clicks can be mapped back to
/// tiles.
#[derive(Debug)]
pub(crate) struct MemoryBoard {
    /// Board side length in tiles.
    size: usize,
    /// Catalog indices of the dealt tiles in row-major order.
    tiles: Vec<usize>,
    /// Face-up mask in row-major order.
    revealed: Vec<bool>,
    /// First tile of an in-progress guess.
    first_selection: Option<usize>,
    /// Mismatched pair currently shown on borrowed time.
    mismatch: Option<Mismatch>,
    /// On-screen area of the board during the last draw.
    pub(crate) area: Rect,
}

impl MemoryBoard {
    /// Deals a new board of the given side length.
    ///
    /// Half of `size * size` distinct pieces are drawn from the catalog, duplicated, shuffled,
    /// and laid out row-major, exactly as many pairs as the board holds.
    ///
    /// # Errors
    ///
    /// This function returns an error if the board would need more distinct pieces than the
    /// catalog offers, or if the side length cannot form pairs.
    pub(crate) fn new(size: usize, rng: &mut impl Rng) -> Result<Self> {
        let pairs = size * size / 2;
        ensure!(
            size > 0 && size * size % 2 == 0,
            "board side length {size} cannot be split into pairs"
        );
        ensure!(
            pairs <= pieces::CATALOG.len(),
            "board needs {pairs} distinct pieces but the catalog holds {}",
            pieces::CATALOG.len()
        );

        let mut picks: Vec<usize> = (0..pieces::CATALOG.len()).collect();
        picks.shuffle(rng);
        picks.truncate(pairs);

        let mut tiles = picks.clone();
        tiles.extend_from_slice(&picks);
        tiles.shuffle(rng);

        Ok(Self {
            size,
            tiles,
            revealed: vec![false; size * size],
            first_selection: None,
            mismatch: None,
            area: Rect::default(),
        })
    }

    /// Returns the board side length in tiles.
    pub(crate) const fn size(&self) -> usize {
        self.size
    }

    /// Returns the catalog index of the tile at the given position, if in bounds.
    pub(crate) fn tile(&self, row: usize, col: usize) -> Option<usize> {
        if row < self.size && col < self.size {
            self.tiles.get(row * self.size + col).copied()
        } else {
            None
        }
    }

    /// Reports whether the tile at the given position is face-up.
    pub(crate) fn is_revealed(&self, row: usize, col: usize) -> bool {
        row < self.size
            && col < self.size
            && self.revealed.get(row * self.size + col) == Some(&true)
    }

    /// Reveals the tile at the given position as part of a guess.
    ///
    /// The click is ignored while a mismatched pair is showing, and on tiles that are already
    /// face-up. Revealing a second tile either locks the pair in place on a match or starts the
    /// mismatch timer.
    pub(crate) fn reveal(&mut self, row: usize, col: usize) {
        if self.mismatch.is_some() || row >= self.size || col >= self.size {
            return;
        }

        let idx = row * self.size + col;
        if self.revealed.get(idx) != Some(&false) {
            return;
        }
        if let Some(tile) = self.revealed.get_mut(idx) {
            *tile = true;
        }

        match self.first_selection.take() {
            None => self.first_selection = Some(idx),
            Some(first) => {
                if self.tiles.get(first) != self.tiles.get(idx) {
                    self.mismatch = Some(Mismatch {
                        tiles: [first, idx],
                        shown_at: Instant::now(),
                    });
                }
            }
        }
    }

    /// Advances the mismatch timer.
    ///
    /// Once the reveal window has elapsed, both tiles of the pending mismatch flip face-down
    /// again and input unlocks.
    pub(crate) fn update(&mut self) {
        let expired = self
            .mismatch
            .as_ref()
            .is_some_and(|pending| {
                pending.shown_at.elapsed() >= Duration::from_millis(MISMATCH_HIDE_DELAY_MS)
            });

        if expired {
            if let Some(pending) = self.mismatch.take() {
                for idx in pending.tiles {
                    if let Some(tile) = self.revealed.get_mut(idx) {
                        *tile = false;
                    }
                }
            }
        }
    }

    /// Reports whether every pair on the board has been matched.
    pub(crate) fn is_complete(&self) -> bool {
        self.mismatch.is_none() && self.revealed.iter().all(|&face_up| face_up)
    }
}
