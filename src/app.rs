//! Core application state and logic for the mini-game suite.

use std::io::stdout;

use color_eyre::eyre::Result;
use rand::{rngs::StdRng, SeedableRng as _};
use ratatui::{
    crossterm::{
        event::{DisableMouseCapture, EnableMouseCapture},
        execute,
    },
    layout::Rect,
    DefaultTerminal,
};

use crate::{
    board::MemoryBoard,
    cli::Cli,
    events,
    session::MazeSession,
    shadows::ShadowGame,
    types::{MainMenuItem, Screen},
    ui,
};

/// Application state container for the mini-game suite.
///
/// This structure holds the state of the application, which is to say the structure from which
/// Ratatui will render the games and Crossterm events will help writing to. Each mini-game keeps
/// its session state here while it is being played; leaving a game drops its state.
pub struct App {
    /// Application exit flag.
    ///
    /// This field indicates whether the application should exit. It is set to `true` when the user
    /// wants to quit the suite but it starts off `false`.
    pub(crate) exit: bool,
    /// Current screen being displayed to the user.
    ///
    /// This field holds the current screen of the suite. It is used to determine which screen to
    /// render and what actions to take based on user input.
    pub(crate) screen: Screen,
    /// Random number generator shared by all games.
    ///
    /// This field holds the generator threaded through maze carving, exit selection and board
    /// shuffling. Seeding it from the command line makes whole sessions reproducible.
    pub(crate) rng: StdRng,
    /// Labyrinth grid dimensions requested on the command line.
    pub(crate) maze_dimensions: (usize, usize),
    /// Running labyrinth session, while the labyrinth screen is up.
    pub(crate) maze_session: Option<MazeSession>,
    /// Running memory board, while the memory screen is up.
    pub(crate) memory: Option<MemoryBoard>,
    /// Running shadow game, while the shadows screen is up.
    pub(crate) shadows: Option<ShadowGame>,
    /// Hit areas of the current menu's rows during the last redraw.
    ///
    /// This field holds one rectangle per menu row so mouse clicks between frames can be mapped
    /// back to the row they landed on.
    pub(crate) menu_hits: Vec<Rect>,
}

impl App {
    /// Creates a new instance of the App structure from the parsed command line.
    ///
    /// The generator is seeded from the `--seed` flag when given and from the operating system
    /// otherwise.
    pub fn new(cli: &Cli) -> Self {
        Self {
            exit: false,
            screen: Screen::MainMenu(MainMenuItem::Memory),
            rng: cli.seed.map_or_else(StdRng::from_entropy, StdRng::seed_from_u64),
            maze_dimensions: (cli.maze_width, cli.maze_height),
            maze_session: None,
            memory: None,
            shadows: None,
            menu_hits: Vec::new(),
        }
    }

    /// Runs the main loop of the application.
    ///
    /// This function handles user input and updates the application state. Terminal mouse capture
    /// is enabled for the duration of the loop so the games can follow the pointer. The loop
    /// continues until the exit condition is `true`, after which the function returns to the call
    /// site.
    ///
    /// # Errors
    ///
    /// - [`std::io::Error`]
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        execute!(stdout(), EnableMouseCapture)?;

        let result = self.event_loop(terminal);

        execute!(stdout(), DisableMouseCapture)?;

        result
    }

    /// Drives draw and input handling until the exit flag is set.
    ///
    /// # Errors
    ///
    /// - [`std::io::Error`]
    fn event_loop(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        while !self.exit {
            let _ = terminal.try_draw(|frame| {
                ui::draw(self, frame)
                    .map_err(|err| std::io::Error::new(std::io::ErrorKind::Other, err))
            })?;
            events::handle_events(self)?;
        }

        Ok(())
    }
}
