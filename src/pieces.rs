//! Piece catalog shared by the memory and shadow games.
//!
//! This module holds the static table of colored shape glyphs the games deal their boards from.
//! The memory game deals pairs out of the catalog and the shadow game shows the same glyphs both
//! in color and as dark silhouettes.

use ratatui::style::Color;

/// One drawable piece.
///
/// This structure pairs a human-readable name with the glyph and color used to render the piece.
/// The name is what the shadow game matches on, so two catalog entries must never share one.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct Piece {
    /// Display name of the piece.
    pub(crate) name: &'static str,
    /// Glyph drawn for the piece.
    pub(crate) glyph: &'static str,
    /// Color the glyph is drawn in.
    pub(crate) color: Color,
}

/// Color applied to silhouette renderings in the shadow game.
pub(crate) const SHADOW_COLOR: Color = Color::DarkGray;

/// The full piece catalog.
///
/// Six shapes crossed with six colors gives the 32 distinct pieces an 8x8 memory board needs,
/// with a little slack.
#[expect(
    clippy::non_ascii_literal,
    reason = "The shape glyphs are the whole point of the catalog."
)]
pub(crate) const CATALOG: [Piece; 36] = [
    Piece { name: "red circle", glyph: "●", color: Color::Red },
    Piece { name: "red square", glyph: "■", color: Color::Red },
    Piece { name: "red triangle", glyph: "▲", color: Color::Red },
    Piece { name: "red diamond", glyph: "◆", color: Color::Red },
    Piece { name: "red star", glyph: "★", color: Color::Red },
    Piece { name: "red heart", glyph: "♥", color: Color::Red },
    Piece { name: "green circle", glyph: "●", color: Color::Green },
    Piece { name: "green square", glyph: "■", color: Color::Green },
    Piece { name: "green triangle", glyph: "▲", color: Color::Green },
    Piece { name: "green diamond", glyph: "◆", color: Color::Green },
    Piece { name: "green star", glyph: "★", color: Color::Green },
    Piece { name: "green heart", glyph: "♥", color: Color::Green },
    Piece { name: "yellow circle", glyph: "●", color: Color::Yellow },
    Piece { name: "yellow square", glyph: "■", color: Color::Yellow },
    Piece { name: "yellow triangle", glyph: "▲", color: Color::Yellow },
    Piece { name: "yellow diamond", glyph: "◆", color: Color::Yellow },
    Piece { name: "yellow star", glyph: "★", color: Color::Yellow },
    Piece { name: "yellow heart", glyph: "♥", color: Color::Yellow },
    Piece { name: "blue circle", glyph: "●", color: Color::Blue },
    Piece { name: "blue square", glyph: "■", color: Color::Blue },
    Piece { name: "blue triangle", glyph: "▲", color: Color::Blue },
    Piece { name: "blue diamond", glyph: "◆", color: Color::Blue },
    Piece { name: "blue star", glyph: "★", color: Color::Blue },
    Piece { name: "blue heart", glyph: "♥", color: Color::Blue },
    Piece { name: "magenta circle", glyph: "●", color: Color::Magenta },
    Piece { name: "magenta square", glyph: "■", color: Color::Magenta },
    Piece { name: "magenta triangle", glyph: "▲", color: Color::Magenta },
    Piece { name: "magenta diamond", glyph: "◆", color: Color::Magenta },
    Piece { name: "magenta star", glyph: "★", color: Color::Magenta },
    Piece { name: "magenta heart", glyph: "♥", color: Color::Magenta },
    Piece { name: "cyan circle", glyph: "●", color: Color::Cyan },
    Piece { name: "cyan square", glyph: "■", color: Color::Cyan },
    Piece { name: "cyan triangle", glyph: "▲", color: Color::Cyan },
    Piece { name: "cyan diamond", glyph: "◆", color: Color::Cyan },
    Piece { name: "cyan star", glyph: "★", color: Color::Cyan },
    Piece { name: "cyan heart", glyph: "♥", color: Color::Cyan },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_covers_largest_memory_board() {
        // An 8x8 board needs 32 distinct pieces.
        assert!(CATALOG.len() >= 32, "catalog too small for an 8x8 board");
    }

    #[test]
    fn test_catalog_names_are_unique() {
        for (idx, piece) in CATALOG.iter().enumerate() {
            for other in CATALOG.iter().skip(idx + 1) {
                assert_ne!(piece.name, other.name, "duplicate piece name");
            }
        }
    }
}
