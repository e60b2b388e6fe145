//! Type definitions and enums for the application state and navigation.

/// Enumeration of available application screens.
///
/// This enumeration holds information about the current screen of the suite. It is used to
/// determine which screen to render and what actions to take based on user input.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Screen {
    /// Main menu screen with one entry per mini-game.
    MainMenu(MainMenuItem),
    /// Board-size selection screen for the memory game.
    BoardMenu(BoardMenuItem),
    /// Piece-count selection screen for the shadow game.
    CountMenu(CountMenuItem),
    /// Picture-memory game screen.
    Memory,
    /// Labyrinth game screen where the maze is displayed and solved.
    Labyrinth,
    /// Match-the-shadows game screen.
    Shadows,
    /// Congratulations screen shown after winning any game.
    Congrats,
}

/// Main menu navigation options.
///
/// This enumeration holds the different items in the main menu. It is used to determine which
/// items can the user select in the main menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum MainMenuItem {
    /// "Memory Pictures" menu option.
    Memory,
    /// "Labyrinth" menu option.
    Labyrinth,
    /// "Match the Shadows" menu option.
    Shadows,
    /// "Quit" menu option.
    Quit,
}

/// Board-size choices for the memory game.
///
/// This enumeration holds the selectable side lengths of the memory board, from the two-by-two
/// starter board up to the eight-by-eight board that uses most of the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum BoardMenuItem {
    /// 2x2 board.
    Two,
    /// 4x4 board.
    Four,
    /// 6x6 board.
    Six,
    /// 8x8 board.
    Eight,
}

impl BoardMenuItem {
    /// Returns the board side length in tiles for the menu item.
    pub(crate) const fn side(self) -> usize {
        match self {
            Self::Two => 2,
            Self::Four => 4,
            Self::Six => 6,
            Self::Eight => 8,
        }
    }
}

/// Piece-count choices for the shadow game.
///
/// This enumeration holds the selectable number of pieces dealt into the shadow game's columns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum CountMenuItem {
    /// Three pieces.
    Three,
    /// Six pieces.
    Six,
    /// Nine pieces.
    Nine,
    /// Twelve pieces.
    Twelve,
}

impl CountMenuItem {
    /// Returns the number of pieces for the menu item.
    pub(crate) const fn count(self) -> usize {
        match self {
            Self::Three => 3,
            Self::Six => 6,
            Self::Nine => 9,
            Self::Twelve => 12,
        }
    }
}

/// Generic menu type configuration.
///
/// This enumeration holds the different specifics particular to each generic menu type in the
/// application's interface. Generic here means they share enough features to be considered worth
/// joining together part of their functionality.
pub(crate) enum MenuType {
    /// Main menu configuration.
    Main(u8),
    /// Board-size menu configuration.
    Board(u8),
    /// Piece-count menu configuration.
    Count(u8),
}

impl MenuType {
    /// Returns the string representation of the menu type.
    ///
    /// This function provides the display name for each menu variant, used as the title in the
    /// menu's border when rendering the interface.
    pub(crate) const fn repr(&self) -> &str {
        match self {
            Self::Main(_) => "Playroom",
            Self::Board(_) => "Board Size",
            Self::Count(_) => "How Many Shadows",
        }
    }

    /// Returns the numeric value stored by the menu type variant.
    ///
    /// This function provides access to the number of menu items for layout calculations, allowing
    /// the UI to properly size the menu containers.
    pub(crate) const fn value(&self) -> u8 {
        match self {
            Self::Main(value) | Self::Board(value) | Self::Count(value) => *value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_variants() {
        let main_menu = Screen::MainMenu(MainMenuItem::Memory);
        let board_menu = Screen::BoardMenu(BoardMenuItem::Two);
        let labyrinth = Screen::Labyrinth;

        assert_eq!(main_menu, Screen::MainMenu(MainMenuItem::Memory));
        assert_eq!(board_menu, Screen::BoardMenu(BoardMenuItem::Two));
        assert_ne!(main_menu, labyrinth);
        assert_ne!(board_menu, Screen::Congrats);
    }

    #[test]
    fn test_board_menu_item_sides() {
        assert_eq!(BoardMenuItem::Two.side(), 2);
        assert_eq!(BoardMenuItem::Four.side(), 4);
        assert_eq!(BoardMenuItem::Six.side(), 6);
        assert_eq!(BoardMenuItem::Eight.side(), 8);
    }

    #[test]
    fn test_count_menu_item_counts() {
        assert_eq!(CountMenuItem::Three.count(), 3);
        assert_eq!(CountMenuItem::Six.count(), 6);
        assert_eq!(CountMenuItem::Nine.count(), 9);
        assert_eq!(CountMenuItem::Twelve.count(), 12);
    }

    #[test]
    fn test_menu_type_repr() {
        assert_eq!(MenuType::Main(4).repr(), "Playroom");
        assert_eq!(MenuType::Board(4).repr(), "Board Size");
        assert_eq!(MenuType::Count(4).repr(), "How Many Shadows");
    }

    #[test]
    fn test_menu_type_value() {
        assert_eq!(MenuType::Main(4).value(), 4);
        assert_eq!(MenuType::Board(4).value(), 4);
        assert_eq!(MenuType::Count(4).value(), 4);
    }
}
