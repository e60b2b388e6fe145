//! Shadow-matching game state and bookkeeping module.
//!
//! This module contains the match-the-shadows game: a shuffled column of pictures on one side, a
//! shuffled column of silhouettes on the other, and the drag pairing between them.

use color_eyre::eyre::{ensure, Result};
use rand::{seq::SliceRandom as _, Rng};
use ratatui::layout::Rect;

use crate::pieces;

/// Match-the-shadows game state.
///
/// This structure holds both shuffled columns as catalog indices, the recorded matches, and the
/// piece currently being dragged. Slot hit areas are recorded during drawing so pointer events
/// can be mapped back to slots.
#[derive(Debug)]
pub(crate) struct ShadowGame {
    /// Catalog indices of the picture column, top to bottom.
    roster: Vec<usize>,
    /// Catalog indices of the silhouette column, top to bottom.
    silhouettes: Vec<usize>,
    /// Completed pairings as (picture slot, silhouette slot).
    matches: Vec<(usize, usize)>,
    /// Picture slot currently being dragged, if any.
    grabbed: Option<usize>,
    /// On-screen hit areas of the picture slots during the last draw.
    pub(crate) roster_slots: Vec<Rect>,
    /// On-screen hit areas of the silhouette slots during the last draw.
    pub(crate) silhouette_slots: Vec<Rect>,
}

impl ShadowGame {
    /// Deals a new game with the given number of pieces.
    ///
    /// Distinct pieces are drawn from the catalog; both columns hold the same pieces but are
    /// shuffled independently, so slot positions rarely line up.
    ///
    /// # Errors
    ///
    /// This function returns an error if the catalog holds fewer pieces than requested.
    pub(crate) fn new(count: usize, rng: &mut impl Rng) -> Result<Self> {
        ensure!(
            count > 0 && count <= pieces::CATALOG.len(),
            "cannot deal {count} pieces from a catalog of {}",
            pieces::CATALOG.len()
        );

        let mut picks: Vec<usize> = (0..pieces::CATALOG.len()).collect();
        picks.shuffle(rng);
        picks.truncate(count);

        let mut roster = picks.clone();
        roster.shuffle(rng);
        let mut silhouettes = picks;
        silhouettes.shuffle(rng);

        Ok(Self {
            roster,
            silhouettes,
            matches: Vec::new(),
            grabbed: None,
            roster_slots: Vec::new(),
            silhouette_slots: Vec::new(),
        })
    }

    /// Returns the catalog indices of the picture column.
    pub(crate) fn roster(&self) -> &[usize] {
        &self.roster
    }

    /// Returns the catalog indices of the silhouette column.
    pub(crate) fn silhouettes(&self) -> &[usize] {
        &self.silhouettes
    }

    /// Returns the picture slot currently being dragged, if any.
    pub(crate) const fn grabbed(&self) -> Option<usize> {
        self.grabbed
    }

    /// Reports whether the given picture slot has been matched already.
    pub(crate) fn roster_slot_matched(&self, slot: usize) -> bool {
        self.matches.iter().any(|&(roster, _)| roster == slot)
    }

    /// Reports whether the given silhouette slot has been matched already.
    pub(crate) fn silhouette_slot_matched(&self, slot: usize) -> bool {
        self.matches.iter().any(|&(_, silhouette)| silhouette == slot)
    }

    /// Returns the completed pairings as (picture slot, silhouette slot).
    pub(crate) fn matches(&self) -> &[(usize, usize)] {
        &self.matches
    }

    /// Picks up the piece in the given picture slot.
    ///
    /// Already-matched pieces stay put; grabbing replaces any previous grab.
    pub(crate) fn grab(&mut self, slot: usize) {
        if slot < self.roster.len() && !self.roster_slot_matched(slot) {
            self.grabbed = Some(slot);
        }
    }

    /// Drops the dragged piece onto the given silhouette slot.
    ///
    /// The pairing is recorded when the piece and the silhouette name the same catalog entry and
    /// the silhouette has not been matched before. The drag always ends, matched or not.
    pub(crate) fn drop_on(&mut self, slot: usize) {
        if let Some(grabbed) = self.grabbed.take() {
            if slot < self.silhouettes.len()
                && !self.silhouette_slot_matched(slot)
                && self.roster.get(grabbed) == self.silhouettes.get(slot)
            {
                self.matches.push((grabbed, slot));
            }
        }
    }

    /// Cancels an in-progress drag.
    pub(crate) fn release(&mut self) {
        self.grabbed = None;
    }

    /// Reports whether every piece has found its shadow.
    pub(crate) fn is_complete(&self) -> bool {
        self.matches.len() == self.roster.len()
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng as _};

    use super::*;

    /// Builds a deterministic three-piece game.
    fn test_game() -> ShadowGame {
        let mut rng = StdRng::seed_from_u64(11);
        ShadowGame::new(3, &mut rng).expect("game creation should succeed")
    }

    /// Finds the silhouette slot holding the same piece as the given picture slot.
    fn silhouette_for(game: &ShadowGame, roster_slot: usize) -> usize {
        let piece = game.roster()[roster_slot];
        game.silhouettes()
            .iter()
            .position(|&candidate| candidate == piece)
            .expect("both columns hold the same pieces")
    }

    #[test]
    fn test_columns_hold_the_same_pieces() {
        let game = test_game();

        let mut roster: Vec<usize> = game.roster().to_vec();
        let mut silhouettes: Vec<usize> = game.silhouettes().to_vec();
        roster.sort_unstable();
        silhouettes.sort_unstable();

        assert_eq!(roster, silhouettes);
        assert_eq!(game.roster().len(), 3);
    }

    #[test]
    fn test_pieces_are_distinct() {
        let game = test_game();

        let mut seen = game.roster().to_vec();
        seen.sort_unstable();
        seen.dedup();

        assert_eq!(seen.len(), game.roster().len(), "pieces must be distinct");
    }

    #[test]
    fn test_new_rejects_oversized_request() {
        let mut rng = StdRng::seed_from_u64(11);
        assert!(ShadowGame::new(pieces::CATALOG.len() + 1, &mut rng).is_err());
    }

    #[test]
    fn test_correct_drop_records_a_match() {
        let mut game = test_game();
        let target = silhouette_for(&game, 0);

        game.grab(0);
        assert_eq!(game.grabbed(), Some(0));
        game.drop_on(target);

        assert_eq!(game.matches(), &[(0, target)]);
        assert_eq!(game.grabbed(), None, "the drag must end after a drop");
    }

    #[test]
    fn test_wrong_drop_records_nothing() {
        let mut game = test_game();
        let wrong = (0..3)
            .find(|&slot| slot != silhouette_for(&game, 0))
            .expect("three slots leave a wrong one");

        game.grab(0);
        game.drop_on(wrong);

        assert!(game.matches().is_empty());
        assert_eq!(game.grabbed(), None);
    }

    #[test]
    fn test_matched_silhouette_cannot_be_matched_twice() {
        let mut game = test_game();
        let target = silhouette_for(&game, 0);

        game.grab(0);
        game.drop_on(target);

        // A second piece dropped on the same silhouette must bounce off.
        game.grab(1);
        game.drop_on(target);

        assert_eq!(game.matches().len(), 1);
    }

    #[test]
    fn test_matched_piece_cannot_be_grabbed() {
        let mut game = test_game();
        let target = silhouette_for(&game, 0);

        game.grab(0);
        game.drop_on(target);
        game.grab(0);

        assert_eq!(game.grabbed(), None);
    }

    #[test]
    fn test_release_cancels_the_drag() {
        let mut game = test_game();

        game.grab(0);
        game.release();

        assert_eq!(game.grabbed(), None);
        assert!(game.matches().is_empty());
    }

    #[test]
    fn test_game_completion() {
        let mut game = test_game();

        assert!(!game.is_complete());
        for slot in 0..3 {
            let target = silhouette_for(&game, slot);
            game.grab(slot);
            game.drop_on(target);
        }
        assert!(game.is_complete());
    }
}
