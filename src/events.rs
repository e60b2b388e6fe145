//! Event handling functions for user input and application state updates.

use std::time::Duration;

use color_eyre::eyre::Result;
use ratatui::{
    crossterm::event::{self, Event, KeyCode, MouseButton, MouseEvent, MouseEventKind},
    layout::Position,
};

use crate::{
    board::MemoryBoard,
    session::MazeSession,
    shadows::ShadowGame,
    types::{BoardMenuItem, CountMenuItem, MainMenuItem, Screen},
    App,
};

/// Event poll timeout in milliseconds.
///
/// This constant paces the main loop at roughly thirty redraws per second: the loop sleeps in the
/// poll for at most this long before drawing the next frame.
pub(crate) const FRAME_POLL_MS: u64 = 33;

/// Handles input events and updates the application state accordingly.
///
/// This function polls for keyboard and mouse events and dispatches them to the appropriate
/// handler functions. It uses a timeout to avoid blocking the UI, then advances the memory game's
/// mismatch timer so a pending pair flips back even without further input.
pub(crate) fn handle_events(app: &mut App) -> Result<()> {
    if event::poll(Duration::from_millis(FRAME_POLL_MS))? {
        match event::read()? {
            Event::Key(key) => handle_key_event(app, key.code)?,
            Event::Mouse(mouse) => handle_mouse_event(app, mouse)?,
            _ => {}
        }
    }

    if matches!(app.screen, Screen::Memory) {
        if let Some(memory) = app.memory.as_mut() {
            memory.update();
        }
    }

    Ok(())
}

/// Dispatches a single key press.
///
/// The 'q' key quits from anywhere; the congratulations screen swallows any other key back to the
/// main menu; the remaining keys are the menu navigation set.
pub(crate) fn handle_key_event(app: &mut App, code: KeyCode) -> Result<()> {
    match code {
        KeyCode::Char('q') => app.exit = true,
        _ if app.screen == Screen::Congrats => return_to_main_menu(app),
        KeyCode::Char('j') => handle_j_events(app),
        KeyCode::Char('k') => handle_k_events(app),
        KeyCode::Char('l') => handle_l_events(app)?,
        KeyCode::Char('h') => handle_h_events(app),
        _ => {}
    }

    Ok(())
}

/// Handles 'j' key press events for downward navigation.
///
/// This function processes the 'j' key press which is used for moving down in menus. The behavior
/// varies depending on the current screen.
pub(crate) fn handle_j_events(app: &mut App) {
    match app.screen {
        Screen::MainMenu(MainMenuItem::Memory) => {
            app.screen = Screen::MainMenu(MainMenuItem::Labyrinth);
        }
        Screen::MainMenu(MainMenuItem::Labyrinth) => {
            app.screen = Screen::MainMenu(MainMenuItem::Shadows);
        }
        Screen::MainMenu(MainMenuItem::Shadows) => {
            app.screen = Screen::MainMenu(MainMenuItem::Quit);
        }
        Screen::BoardMenu(BoardMenuItem::Two) => {
            app.screen = Screen::BoardMenu(BoardMenuItem::Four);
        }
        Screen::BoardMenu(BoardMenuItem::Four) => {
            app.screen = Screen::BoardMenu(BoardMenuItem::Six);
        }
        Screen::BoardMenu(BoardMenuItem::Six) => {
            app.screen = Screen::BoardMenu(BoardMenuItem::Eight);
        }
        Screen::CountMenu(CountMenuItem::Three) => {
            app.screen = Screen::CountMenu(CountMenuItem::Six);
        }
        Screen::CountMenu(CountMenuItem::Six) => {
            app.screen = Screen::CountMenu(CountMenuItem::Nine);
        }
        Screen::CountMenu(CountMenuItem::Nine) => {
            app.screen = Screen::CountMenu(CountMenuItem::Twelve);
        }
        _ => {}
    }
}

/// Handles 'k' key press events for upward navigation.
///
/// This function processes the 'k' key press which is used for moving up in menus, mirroring the
/// 'j' handler.
pub(crate) fn handle_k_events(app: &mut App) {
    match app.screen {
        Screen::MainMenu(MainMenuItem::Quit) => {
            app.screen = Screen::MainMenu(MainMenuItem::Shadows);
        }
        Screen::MainMenu(MainMenuItem::Shadows) => {
            app.screen = Screen::MainMenu(MainMenuItem::Labyrinth);
        }
        Screen::MainMenu(MainMenuItem::Labyrinth) => {
            app.screen = Screen::MainMenu(MainMenuItem::Memory);
        }
        Screen::BoardMenu(BoardMenuItem::Eight) => {
            app.screen = Screen::BoardMenu(BoardMenuItem::Six);
        }
        Screen::BoardMenu(BoardMenuItem::Six) => {
            app.screen = Screen::BoardMenu(BoardMenuItem::Four);
        }
        Screen::BoardMenu(BoardMenuItem::Four) => {
            app.screen = Screen::BoardMenu(BoardMenuItem::Two);
        }
        Screen::CountMenu(CountMenuItem::Twelve) => {
            app.screen = Screen::CountMenu(CountMenuItem::Nine);
        }
        Screen::CountMenu(CountMenuItem::Nine) => {
            app.screen = Screen::CountMenu(CountMenuItem::Six);
        }
        Screen::CountMenu(CountMenuItem::Six) => {
            app.screen = Screen::CountMenu(CountMenuItem::Three);
        }
        _ => {}
    }
}

/// Handles 'l' key press events for selection and forward navigation.
///
/// This function processes the 'l' key press which is used for selecting menu items and moving
/// forward in the application flow. Selecting a game deals its session state here.
///
/// # Errors
///
/// This function may return errors from maze generation or board creation.
pub(crate) fn handle_l_events(app: &mut App) -> Result<()> {
    match app.screen {
        Screen::MainMenu(MainMenuItem::Memory) => {
            app.screen = Screen::BoardMenu(BoardMenuItem::Two);
        }
        Screen::MainMenu(MainMenuItem::Labyrinth) => {
            let (width, height) = app.maze_dimensions;
            app.maze_session = Some(MazeSession::new(width, height, &mut app.rng)?);
            app.screen = Screen::Labyrinth;
        }
        Screen::MainMenu(MainMenuItem::Shadows) => {
            app.screen = Screen::CountMenu(CountMenuItem::Three);
        }
        Screen::MainMenu(MainMenuItem::Quit) => {
            app.exit = true;
        }
        Screen::BoardMenu(item) => {
            app.memory = Some(MemoryBoard::new(item.side(), &mut app.rng)?);
            app.screen = Screen::Memory;
        }
        Screen::CountMenu(item) => {
            app.shadows = Some(ShadowGame::new(item.count(), &mut app.rng)?);
            app.screen = Screen::Shadows;
        }
        Screen::Congrats => return_to_main_menu(app),
        _ => {}
    }

    Ok(())
}

/// Handles 'h' key press events for backward navigation.
///
/// This function processes the 'h' key press which is used for returning to the main menu from
/// any game or selection screen. Leaving a game drops its session state.
pub(crate) fn handle_h_events(app: &mut App) {
    match app.screen {
        Screen::MainMenu(_) => {}
        _ => return_to_main_menu(app),
    }
}

/// Dispatches a single mouse event to the current screen.
///
/// # Errors
///
/// This function may return errors from game session creation triggered by menu clicks.
pub(crate) fn handle_mouse_event(app: &mut App, mouse: MouseEvent) -> Result<()> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            handle_mouse_down(app, mouse.column, mouse.row)?;
        }
        MouseEventKind::Drag(MouseButton::Left) => handle_mouse_drag(app, mouse.column, mouse.row),
        MouseEventKind::Up(MouseButton::Left) => handle_mouse_up(app, mouse.column, mouse.row),
        _ => {}
    }

    Ok(())
}

/// Handles a left button press.
///
/// Menu screens treat the press as a row selection; the labyrinth starts a drawing stroke; the
/// memory board reveals the clicked tile; the shadow game picks up the clicked piece.
///
/// # Errors
///
/// This function may return errors from game session creation triggered by menu clicks.
fn handle_mouse_down(app: &mut App, column: u16, row: u16) -> Result<()> {
    match app.screen {
        Screen::MainMenu(_) => {
            if let Some(idx) = menu_row_at(app, column, row) {
                let items = [
                    MainMenuItem::Memory,
                    MainMenuItem::Labyrinth,
                    MainMenuItem::Shadows,
                    MainMenuItem::Quit,
                ];
                if let Some(&item) = items.get(idx) {
                    app.screen = Screen::MainMenu(item);
                    handle_l_events(app)?;
                }
            }
        }
        Screen::BoardMenu(_) => {
            if let Some(idx) = menu_row_at(app, column, row) {
                let items = [
                    BoardMenuItem::Two,
                    BoardMenuItem::Four,
                    BoardMenuItem::Six,
                    BoardMenuItem::Eight,
                ];
                if let Some(&item) = items.get(idx) {
                    app.screen = Screen::BoardMenu(item);
                    handle_l_events(app)?;
                }
            }
        }
        Screen::CountMenu(_) => {
            if let Some(idx) = menu_row_at(app, column, row) {
                let items = [
                    CountMenuItem::Three,
                    CountMenuItem::Six,
                    CountMenuItem::Nine,
                    CountMenuItem::Twelve,
                ];
                if let Some(&item) = items.get(idx) {
                    app.screen = Screen::CountMenu(item);
                    handle_l_events(app)?;
                }
            }
        }
        Screen::Labyrinth => {
            if let Some(session) = app.maze_session.as_mut() {
                session.pointer_down();
            }
        }
        Screen::Memory => {
            handle_memory_click(app, column, row);
        }
        Screen::Shadows => {
            if let Some(game) = app.shadows.as_mut() {
                if let Some(slot) = slot_at(&game.roster_slots, column, row) {
                    game.grab(slot);
                }
            }
        }
        Screen::Congrats => return_to_main_menu(app),
    }

    Ok(())
}

/// Handles pointer motion with the left button held.
///
/// Only the labyrinth cares about drags: each sample is offered to the trail, and reaching the
/// exit ends the session on the spot no matter what the pointer does afterwards.
fn handle_mouse_drag(app: &mut App, column: u16, row: u16) {
    if app.screen != Screen::Labyrinth {
        return;
    }

    if let Some(session) = app.maze_session.as_mut() {
        session.pointer_moved(column, row);
        if session.solved() {
            app.screen = Screen::Congrats;
        }
    }
}

/// Handles a left button release.
///
/// The labyrinth pauses its stroke with the trail kept; the shadow game drops the dragged piece
/// onto whatever silhouette the pointer is over.
fn handle_mouse_up(app: &mut App, column: u16, row: u16) {
    match app.screen {
        Screen::Labyrinth => {
            if let Some(session) = app.maze_session.as_mut() {
                session.pointer_up();
            }
        }
        Screen::Shadows => {
            if let Some(game) = app.shadows.as_mut() {
                match slot_at(&game.silhouette_slots, column, row) {
                    Some(slot) => game.drop_on(slot),
                    None => game.release(),
                }
                if game.is_complete() {
                    app.screen = Screen::Congrats;
                }
            }
        }
        _ => {}
    }
}

/// Maps a click on the memory board to a tile reveal.
///
/// The board's on-screen area recorded during the last draw anchors the tile grid; a completed
/// board moves straight to the congratulations screen.
fn handle_memory_click(app: &mut App, column: u16, row: u16) {
    if let Some(memory) = app.memory.as_mut() {
        if memory.area.contains(Position::new(column, row)) {
            let tile_col = usize::from((column - memory.area.x) / crate::ui::TILE_WIDTH);
            let tile_row = usize::from((row - memory.area.y) / crate::ui::TILE_HEIGHT);
            memory.reveal(tile_row, tile_col);

            if memory.is_complete() {
                app.screen = Screen::Congrats;
            }
        }
    }
}

/// Finds the menu row whose hit area contains the given point.
fn menu_row_at(app: &App, column: u16, row: u16) -> Option<usize> {
    slot_at(&app.menu_hits, column, row)
}

/// Finds the slot rectangle containing the given point.
fn slot_at(slots: &[ratatui::layout::Rect], column: u16, row: u16) -> Option<usize> {
    slots
        .iter()
        .position(|slot| slot.contains(Position::new(column, row)))
}

/// Drops all game session state and returns to the main menu.
fn return_to_main_menu(app: &mut App) {
    app.maze_session = None;
    app.memory = None;
    app.shadows = None;
    app.menu_hits.clear();
    app.screen = Screen::MainMenu(MainMenuItem::Memory);
}
