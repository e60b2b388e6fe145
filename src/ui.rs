//! User interface rendering functions for all application screens.

use std::rc::Rc;

use color_eyre::eyre::{OptionExt as _, Result};
use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::Line,
    widgets::{
        canvas::{Canvas, Line as CanvasLine, Points},
        Block, BorderType, Borders, Clear,
    },
    Frame,
};

use crate::{
    pieces,
    types::{BoardMenuItem, CountMenuItem, MainMenuItem, MenuType, Screen},
    App,
};

/// Width of one memory tile in terminal cells.
pub(crate) const TILE_WIDTH: u16 = 4;

/// Height of one memory tile in terminal cells.
pub(crate) const TILE_HEIGHT: u16 = 2;

/// Wall colors cycled across maze columns.
///
/// This constant holds the rainbow palette the labyrinth walls are striped with, one color per
/// grid column, wrapping around when the maze is wider than the palette.
const WALL_PALETTE: [Color; 6] = [
    Color::Red,
    Color::Yellow,
    Color::Green,
    Color::Cyan,
    Color::Blue,
    Color::Magenta,
];

/// Updates the application UI based on the persistent state.
///
/// This function renders different screens based on the current state stored in the [`App`]
/// structure, dispatching to the appropriate rendering function for each screen type.
///
/// # Errors
///
/// This function may return errors from drawing operations or data conversion failures.
pub(crate) fn draw(app: &mut App, frame: &mut Frame) -> Result<()> {
    match app.screen {
        Screen::MainMenu(item) => main_menu(app, frame, item),
        Screen::BoardMenu(item) => board_menu(app, frame, item),
        Screen::CountMenu(item) => count_menu(app, frame, item),
        Screen::Memory => memory(app, frame)?,
        Screen::Labyrinth => labyrinth(app, frame)?,
        Screen::Shadows => shadows(app, frame)?,
        Screen::Congrats => congrats(frame),
    }

    Ok(())
}

/// Clears the terminal screen by rendering a [`Clear`] widget.
///
/// This function renders a clear widget over the entire area of the frame to prepare for
/// rendering new content without artifacts from previous buffers rendered on the same frame.
pub(crate) fn clear(frame: &mut Frame) {
    let clear = Clear;
    frame.render_widget(clear, frame.area());
}

/// Renders the generic layout structure shared by the menus.
///
/// This function creates the common layout and block structure used by the main menu and both
/// selection menus. The generic part includes the centered positioning and border styling, while
/// the specific menu content is handled by the caller using the [`MenuType`] parameter.
#[expect(
    clippy::indexing_slicing,
    reason = "The collection is created in-place with few, known elements; there is no risk of bad indexing."
)]
pub(crate) fn init_menu(frame: &mut Frame, menu: MenuType) -> Rc<[Rect]> {
    let space = Layout::vertical([
        Constraint::Percentage(40),
        Constraint::Percentage(20),
        Constraint::Percentage(40),
    ])
    .split(frame.area())[1];
    let space = Layout::horizontal([
        Constraint::Percentage(35),
        Constraint::Percentage(30),
        Constraint::Percentage(35),
    ])
    .split(space)[1];

    let layout = Layout::vertical([Constraint::Max(u16::from(menu.value() + 2))])
        .flex(Flex::Center)
        .split(space)[0];

    let block = Block::bordered()
        .title(menu.repr())
        .title_bottom("(j) down / (k) up / (l) select / click")
        .title_alignment(Alignment::Center)
        .style(Color::Green)
        .border_type(BorderType::Rounded);

    let inner_space = block.inner(layout);

    frame.render_widget(block, layout);

    Layout::vertical(vec![Constraint::Max(1); menu.value() as usize]).split(inner_space)
}

/// Renders the main menu screen with one entry per mini-game.
///
/// This function displays the main menu and highlights the currently selected option. The row
/// rectangles are recorded as mouse hit areas so clicks can land on menu entries.
#[expect(
    clippy::indexing_slicing,
    reason = "The collection is created in-place with few, known elements; there is no risk of bad indexing."
)]
#[expect(
    clippy::missing_asserts_for_indexing,
    reason = "The collection is created in-place with few, known elements; there is no risk of bad indexing."
)]
pub(crate) fn main_menu(app: &mut App, frame: &mut Frame, item: MainMenuItem) {
    clear(frame);

    let inner_layout = init_menu(frame, MenuType::Main(4));
    app.menu_hits = inner_layout.iter().copied().collect();

    let content_style = Style::default().fg(Color::Green);
    let active_content_style = Style::default().fg(Color::White).bg(Color::Green);

    let labels = ["Memory Pictures", "Labyrinth", "Match the Shadows", "Quit"];
    let selected = match item {
        MainMenuItem::Memory => 0,
        MainMenuItem::Labyrinth => 1,
        MainMenuItem::Shadows => 2,
        MainMenuItem::Quit => 3,
    };

    for (idx, label) in labels.into_iter().enumerate() {
        let style = if idx == selected {
            active_content_style
        } else {
            content_style
        };
        frame.render_widget(Line::raw(label).centered().style(style), inner_layout[idx]);
    }
}

/// Renders the board-size selection menu for the memory game.
///
/// This function displays the four selectable board sizes with the same chrome and hit-area
/// bookkeeping as the main menu.
#[expect(
    clippy::indexing_slicing,
    reason = "The collection is created in-place with few, known elements; there is no risk of bad indexing."
)]
#[expect(
    clippy::missing_asserts_for_indexing,
    reason = "The collection is created in-place with few, known elements; there is no risk of bad indexing."
)]
pub(crate) fn board_menu(app: &mut App, frame: &mut Frame, item: BoardMenuItem) {
    clear(frame);

    let inner_layout = init_menu(frame, MenuType::Board(4));
    app.menu_hits = inner_layout.iter().copied().collect();

    let content_style = Style::default().fg(Color::Green);
    let active_content_style = Style::default().fg(Color::White).bg(Color::Green);

    let labels = ["2 x 2", "4 x 4", "6 x 6", "8 x 8"];
    let selected = match item {
        BoardMenuItem::Two => 0,
        BoardMenuItem::Four => 1,
        BoardMenuItem::Six => 2,
        BoardMenuItem::Eight => 3,
    };

    for (idx, label) in labels.into_iter().enumerate() {
        let style = if idx == selected {
            active_content_style
        } else {
            content_style
        };
        frame.render_widget(Line::raw(label).centered().style(style), inner_layout[idx]);
    }
}

/// Renders the piece-count selection menu for the shadow game.
///
/// This function displays the four selectable piece counts with the same chrome and hit-area
/// bookkeeping as the main menu.
#[expect(
    clippy::indexing_slicing,
    reason = "The collection is created in-place with few, known elements; there is no risk of bad indexing."
)]
#[expect(
    clippy::missing_asserts_for_indexing,
    reason = "The collection is created in-place with few, known elements; there is no risk of bad indexing."
)]
pub(crate) fn count_menu(app: &mut App, frame: &mut Frame, item: CountMenuItem) {
    clear(frame);

    let inner_layout = init_menu(frame, MenuType::Count(4));
    app.menu_hits = inner_layout.iter().copied().collect();

    let content_style = Style::default().fg(Color::Green);
    let active_content_style = Style::default().fg(Color::White).bg(Color::Green);

    let labels = ["3 shadows", "6 shadows", "9 shadows", "12 shadows"];
    let selected = match item {
        CountMenuItem::Three => 0,
        CountMenuItem::Six => 1,
        CountMenuItem::Nine => 2,
        CountMenuItem::Twelve => 3,
    };

    for (idx, label) in labels.into_iter().enumerate() {
        let style = if idx == selected {
            active_content_style
        } else {
            content_style
        };
        frame.render_widget(Line::raw(label).centered().style(style), inner_layout[idx]);
    }
}

/// Splits the frame into a centered content area and a bottom tooltip strip.
///
/// This function carves the layout shared by all game screens: the content gets a
/// centered rectangle of the requested size and the tooltip sits in a three-row strip at the
/// bottom, horizontally centered to the same width.
///
/// # Errors
///
/// This function may return errors when the layout collections come back empty, which cannot
/// happen for the constraint sets used here.
fn game_layout(frame: &Frame, content_width: u16, content_height: u16) -> Result<(Rect, Rect)> {
    let overall_layout =
        Layout::vertical([Constraint::Min(1), Constraint::Length(3)]).split(frame.area());

    let content_area = *overall_layout
        .first()
        .ok_or_eyre("failed to get content area from layout")?;
    let tooltip_full_area = *overall_layout
        .last()
        .ok_or_eyre("failed to get tooltip area from layout")?;

    let tooltip_area = Layout::horizontal([
        Constraint::Min(1),
        Constraint::Length(content_width),
        Constraint::Min(1),
    ])
    .split(tooltip_full_area)
    .get(1)
    .copied()
    .ok_or_eyre("failed to get centered tooltip area from horizontal layout")?;

    let vertical = Layout::vertical([
        Constraint::Min(1),
        Constraint::Length(content_height),
        Constraint::Min(1),
    ])
    .split(content_area);
    let space = Layout::horizontal([
        Constraint::Min(1),
        Constraint::Length(content_width),
        Constraint::Min(1),
    ])
    .split(
        *vertical
            .get(1)
            .ok_or_eyre("failed to get content row from layout")?,
    )
    .get(1)
    .copied()
    .ok_or_eyre("failed to get content space from horizontal layout")?;

    Ok((space, tooltip_area))
}

/// Renders the tooltip strip under a game screen.
fn game_tooltip(frame: &mut Frame, area: Rect, text: &str) {
    let tooltip_block = Block::bordered()
        .title(text.to_owned())
        .title_alignment(Alignment::Center)
        .style(Style::default().fg(Color::Green))
        .border_type(BorderType::Plain)
        .borders(Borders::TOP);

    frame.render_widget(tooltip_block, area);
}

/// Renders the picture-memory board.
///
/// This function lays the tile grid out centered on screen, face-down tiles as card backs and
/// face-up tiles as their piece glyphs, and records the board's on-screen area for mouse
/// hit-testing.
///
/// # Errors
///
/// This function may return errors when the memory screen is drawn without a dealt board.
fn memory(app: &mut App, frame: &mut Frame) -> Result<()> {
    clear(frame);

    let board = app
        .memory
        .as_mut()
        .ok_or_eyre("memory screen drawn without a dealt board")?;
    let side = u16::try_from(board.size())?;

    let (space, tooltip_area) = game_layout(frame, side * TILE_WIDTH, side * TILE_HEIGHT)?;
    board.area = space;

    for row in 0..board.size() {
        for col in 0..board.size() {
            let tile_area = Rect::new(
                space.x + u16::try_from(col)? * TILE_WIDTH,
                space.y + u16::try_from(row)? * TILE_HEIGHT,
                TILE_WIDTH,
                TILE_HEIGHT,
            )
            .intersection(space);

            if board.is_revealed(row, col) {
                let piece = board
                    .tile(row, col)
                    .and_then(|idx| pieces::CATALOG.get(idx))
                    .ok_or_eyre("revealed tile without a catalog piece")?;
                let glyph_area = Rect::new(tile_area.x, tile_area.y, tile_area.width, 1)
                    .intersection(space);
                frame.render_widget(
                    Line::styled(piece.glyph, piece.color).centered(),
                    glyph_area,
                );
            } else {
                let back = Block::bordered()
                    .border_type(BorderType::Rounded)
                    .style(Style::default().fg(Color::Blue));
                frame.render_widget(back, tile_area);
            }
        }
    }

    game_tooltip(frame, tooltip_area, "(h) menu / click tiles to find pairs");

    Ok(())
}

/// Renders the labyrinth screen with the maze, the trail and the start and exit markers.
///
/// This function displays the generated maze on a canvas, walls striped in rainbow colors per
/// grid column, the player's trail as a red polyline on top, and the start and exit cells marked
/// with letters. The maze's on-screen area is recorded so pointer events can be translated into
/// the trail's pixel space.
///
/// # Errors
///
/// This function may return errors from coordinate conversion operations or when the labyrinth
/// screen is drawn without a running session.
pub(crate) fn labyrinth(app: &mut App, frame: &mut Frame) -> Result<()> {
    clear(frame);

    let session = app
        .maze_session
        .as_mut()
        .ok_or_eyre("labyrinth screen drawn without a running session")?;

    let maze_columns = session.maze.width();
    let maze_rows = session.maze.height();

    let (space, tooltip_area) = game_layout(
        frame,
        u16::try_from(maze_columns)?,
        u16::try_from(maze_rows)?,
    )?;
    session.area = space;

    // Bucket wall coordinates by palette stripe so each color is drawn in one batch.
    let mut wall_buckets: [Vec<(f64, f64)>; WALL_PALETTE.len()] = Default::default();
    for row in 0..maze_rows {
        for col in 0..maze_columns {
            if !session.maze.is_open(col, row) {
                if let Some(bucket) = wall_buckets.get_mut(col % WALL_PALETTE.len()) {
                    bucket.push(cell_to_screen_coords(col, row, maze_columns, maze_rows)?);
                }
            }
        }
    }

    let trail_coords = session
        .trail
        .points()
        .iter()
        .map(|&point| {
            pixel_to_screen_coords(point, session.cell_size, maze_columns, maze_rows)
        })
        .collect::<Result<Vec<_>>>()?;

    let start_coords = {
        let (start_x, start_y) = session.maze.start();
        cell_to_screen_coords(start_x, start_y, maze_columns, maze_rows)?
    };
    let exit_coords = {
        let (exit_x, exit_y) = session.maze.exit();
        cell_to_screen_coords(exit_x, exit_y, maze_columns, maze_rows)?
    };

    let canvas = Canvas::default()
        .x_bounds([
            (-rounded_div::i32(space.width.into(), 2)).into(),
            (rounded_div::i32(space.width.into(), 2)).into(),
        ])
        .y_bounds([
            (-rounded_div::i32(space.height.into(), 2)).into(),
            (rounded_div::i32(space.height.into(), 2)).into(),
        ])
        .marker(Marker::Dot)
        .paint(|ctx| {
            for (coords, color) in wall_buckets.iter().zip(WALL_PALETTE) {
                ctx.draw(&Points { coords, color });
            }

            for segment in trail_coords.windows(2) {
                if let [(from_x, from_y), (to_x, to_y)] = *segment {
                    ctx.draw(&CanvasLine {
                        x1: from_x,
                        y1: from_y,
                        x2: to_x,
                        y2: to_y,
                        color: Color::Red,
                    });
                }
            }

            ctx.print(
                start_coords.0,
                start_coords.1,
                Line::styled("S", Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
            );
            ctx.print(
                exit_coords.0,
                exit_coords.1,
                Line::styled("E", Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
            );
        });

    frame.render_widget(canvas, space);

    game_tooltip(frame, tooltip_area, "(h) menu / hold the mouse and draw from S to E");

    Ok(())
}

/// Renders the match-the-shadows screen.
///
/// This function lays the picture column out on the left and the silhouette column on the right,
/// draws a connecting line through the middle for every completed pair, and records the slot hit
/// areas for the drag-and-drop handling.
///
/// # Errors
///
/// This function may return errors when the shadows screen is drawn without a dealt game.
#[expect(
    clippy::indexing_slicing,
    reason = "The collection is created in-place with few, known elements; there is no risk of bad indexing."
)]
fn shadows(app: &mut App, frame: &mut Frame) -> Result<()> {
    clear(frame);

    let game = app
        .shadows
        .as_mut()
        .ok_or_eyre("shadows screen drawn without a dealt game")?;
    let count = game.roster().len();
    let rows = u16::try_from(count)?;

    let (space, tooltip_area) = game_layout(frame, 64, rows)?;
    let columns = Layout::horizontal([
        Constraint::Length(20),
        Constraint::Min(1),
        Constraint::Length(20),
    ])
    .split(space);
    let slot_rows = |column: Rect| {
        (0..rows)
            .map(|row| Rect::new(column.x, column.y + row, column.width, 1).intersection(column))
            .collect::<Vec<_>>()
    };

    game.roster_slots = slot_rows(columns[0]);
    game.silhouette_slots = slot_rows(columns[2]);

    for (slot, &piece_idx) in game.roster().iter().enumerate() {
        let piece = pieces::CATALOG
            .get(piece_idx)
            .ok_or_eyre("roster slot without a catalog piece")?;

        let line = if game.roster_slot_matched(slot) {
            Line::styled(
                format!("{} {} (found)", piece.glyph, piece.name),
                Style::default().fg(Color::DarkGray),
            )
        } else if game.grabbed() == Some(slot) {
            Line::styled(
                format!("{} {}", piece.glyph, piece.name),
                Style::default().fg(Color::White).bg(Color::Green),
            )
        } else {
            Line::styled(
                format!("{} {}", piece.glyph, piece.name),
                Style::default().fg(piece.color),
            )
        };

        if let Some(&area) = game.roster_slots.get(slot) {
            frame.render_widget(line, area);
        }
    }

    for (slot, &piece_idx) in game.silhouettes().iter().enumerate() {
        let piece = pieces::CATALOG
            .get(piece_idx)
            .ok_or_eyre("silhouette slot without a catalog piece")?;

        // A matched silhouette gives its secret away; an open one shows only the dark shape.
        let line = if game.silhouette_slot_matched(slot) {
            Line::styled(
                format!("{} {}", piece.glyph, piece.name),
                Style::default().fg(piece.color),
            )
            .right_aligned()
        } else {
            Line::styled(piece.glyph, Style::default().fg(pieces::SHADOW_COLOR)).right_aligned()
        };

        if let Some(&area) = game.silhouette_slots.get(slot) {
            frame.render_widget(line, area);
        }
    }

    let matches = game.matches().to_vec();
    let lines_canvas = Canvas::default()
        .x_bounds([0., 1.])
        .y_bounds([0., f64::from(rows)])
        .marker(Marker::Braille)
        .paint(|ctx| {
            for &(roster_slot, silhouette_slot) in &matches {
                ctx.draw(&CanvasLine {
                    x1: 0.,
                    y1: f64::from(rows) - 0.5 - roster_slot as f64,
                    x2: 1.,
                    y2: f64::from(rows) - 0.5 - silhouette_slot as f64,
                    color: Color::White,
                });
            }
        });
    frame.render_widget(lines_canvas, columns[1]);

    game_tooltip(
        frame,
        tooltip_area,
        "(h) menu / drag a picture onto its shadow",
    );

    Ok(())
}

/// Renders the congratulations screen shown after winning any game.
///
/// This function displays a centered cheer and waits for any key or click, which the event
/// handling turns into a return to the main menu.
#[expect(
    clippy::indexing_slicing,
    reason = "The collection is created in-place with few, known elements; there is no risk of bad indexing."
)]
pub(crate) fn congrats(frame: &mut Frame) {
    clear(frame);

    let space = Layout::vertical([
        Constraint::Percentage(40),
        Constraint::Percentage(20),
        Constraint::Percentage(40),
    ])
    .split(frame.area())[1];
    let space = Layout::horizontal([
        Constraint::Percentage(30),
        Constraint::Percentage(40),
        Constraint::Percentage(30),
    ])
    .split(space)[1];

    let layout = Layout::vertical([Constraint::Max(4)])
        .flex(Flex::Center)
        .split(space)[0];

    let block = Block::bordered()
        .title_bottom("press any key to continue")
        .title_alignment(Alignment::Center)
        .style(Color::Yellow)
        .border_type(BorderType::Rounded);
    let inner_space = block.inner(layout);

    frame.render_widget(block, layout);

    let cheer = Line::styled(
        "Congratulations!",
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )
    .centered();
    let rows = Layout::vertical([Constraint::Max(1), Constraint::Max(1)]).split(inner_space);
    frame.render_widget(cheer, rows[0]);
    frame.render_widget(Line::raw("You did it!").centered(), rows[1]);
}

/// Transforms a maze cell into screen coordinates for canvas rendering.
///
/// This function converts maze coordinates (col, row) to centered canvas coordinates using the
/// transformation `coordinate = (n - 1) / 2 - i` for rows (ascending order) and
/// `coordinate = i - (n - 1) / 2` for columns (descending order).
///
/// # Errors
///
/// This function may return errors from coordinate conversion operations.
fn cell_to_screen_coords(
    col: usize,
    row: usize,
    maze_columns: usize,
    maze_rows: usize,
) -> Result<(f64, f64)> {
    let rows_n = f64::from(u16::try_from(maze_rows)?);
    let cols_n = f64::from(u16::try_from(maze_columns)?);

    let screen_x = f64::from(u16::try_from(col)?) - (cols_n - 1.) / 2.;
    let screen_y = (rows_n - 1.) / 2. - f64::from(u16::try_from(row)?);

    Ok((screen_x, screen_y))
}

/// Transforms a trail pixel point into screen coordinates for canvas rendering.
///
/// This function scales the pixel down to a fractional grid position first, so trails drawn at
/// any cell size land on the same canvas as the maze cells.
///
/// # Errors
///
/// This function may return errors from coordinate conversion operations.
fn pixel_to_screen_coords(
    point: (u16, u16),
    cell_size: u16,
    maze_columns: usize,
    maze_rows: usize,
) -> Result<(f64, f64)> {
    let rows_n = f64::from(u16::try_from(maze_rows)?);
    let cols_n = f64::from(u16::try_from(maze_columns)?);
    let scale = f64::from(cell_size.max(1));

    let screen_x = f64::from(point.0) / scale - (cols_n - 1.) / 2.;
    let screen_y = (rows_n - 1.) / 2. - f64::from(point.1) / scale;

    Ok((screen_x, screen_y))
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng as _};
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::{board::MemoryBoard, cli::Cli, session::MazeSession, shadows::ShadowGame};

    /// Creates a minimal test app for UI testing.
    fn create_test_app() -> App {
        App::new(&Cli {
            maze_width: 9,
            maze_height: 9,
            seed: Some(3),
        })
    }

    /// Creates a test terminal with known dimensions for UI testing.
    fn create_test_terminal() -> Terminal<TestBackend> {
        let backend = TestBackend::new(80, 24);
        Terminal::new(backend).expect("failed to create test terminal")
    }

    #[test]
    fn test_draw_main_menu_records_hit_areas() {
        let mut app = create_test_app();
        let mut terminal = create_test_terminal();

        let result = terminal.draw(|frame| {
            draw(&mut app, frame).expect("drawing should succeed in test");
        });

        assert!(result.is_ok(), "drawing main menu should succeed");
        assert_eq!(app.menu_hits.len(), 4, "one hit area per menu row");
    }

    #[test]
    fn test_draw_board_menu() {
        let mut app = create_test_app();
        let mut terminal = create_test_terminal();
        app.screen = Screen::BoardMenu(BoardMenuItem::Six);

        let result = terminal.draw(|frame| {
            draw(&mut app, frame).expect("drawing should succeed in test");
        });

        assert!(result.is_ok(), "drawing board menu should succeed");
        assert_eq!(app.menu_hits.len(), 4);
    }

    #[test]
    fn test_draw_count_menu() {
        let mut app = create_test_app();
        let mut terminal = create_test_terminal();
        app.screen = Screen::CountMenu(CountMenuItem::Nine);

        let result = terminal.draw(|frame| {
            draw(&mut app, frame).expect("drawing should succeed in test");
        });

        assert!(result.is_ok(), "drawing count menu should succeed");
    }

    #[test]
    fn test_draw_memory_screen_records_board_area() {
        let mut app = create_test_app();
        let mut terminal = create_test_terminal();
        let mut rng = StdRng::seed_from_u64(3);
        app.memory = Some(MemoryBoard::new(4, &mut rng).expect("board should deal"));
        app.screen = Screen::Memory;

        let result = terminal.draw(|frame| {
            draw(&mut app, frame).expect("drawing should succeed in test");
        });

        assert!(result.is_ok(), "drawing memory screen should succeed");
        let board = app.memory.as_ref().expect("board must exist");
        assert!(board.area.width > 0, "board area must be recorded");
    }

    #[test]
    fn test_draw_memory_screen_without_board_fails() {
        let mut app = create_test_app();
        let mut terminal = create_test_terminal();
        app.screen = Screen::Memory;

        let result = terminal.draw(|frame| {
            assert!(
                draw(&mut app, frame).is_err(),
                "memory screen must fail without a dealt board"
            );
        });

        assert!(result.is_ok());
    }

    #[test]
    fn test_draw_labyrinth_records_session_area() {
        let mut app = create_test_app();
        let mut terminal = create_test_terminal();
        let mut rng = StdRng::seed_from_u64(3);
        app.maze_session = Some(MazeSession::new(9, 9, &mut rng).expect("session should start"));
        app.screen = Screen::Labyrinth;

        let result = terminal.draw(|frame| {
            draw(&mut app, frame).expect("drawing should succeed in test");
        });

        assert!(result.is_ok(), "drawing labyrinth should succeed");
        let session = app.maze_session.as_ref().expect("session must exist");
        assert_eq!(session.area.width, 9, "maze area must match the grid");
        assert_eq!(session.area.height, 9);
    }

    #[test]
    fn test_draw_shadows_screen_records_slots() {
        let mut app = create_test_app();
        let mut terminal = create_test_terminal();
        let mut rng = StdRng::seed_from_u64(3);
        app.shadows = Some(ShadowGame::new(3, &mut rng).expect("game should deal"));
        app.screen = Screen::Shadows;

        let result = terminal.draw(|frame| {
            draw(&mut app, frame).expect("drawing should succeed in test");
        });

        assert!(result.is_ok(), "drawing shadows screen should succeed");
        let game = app.shadows.as_ref().expect("game must exist");
        assert_eq!(game.roster_slots.len(), 3);
        assert_eq!(game.silhouette_slots.len(), 3);
    }

    #[test]
    fn test_draw_congrats_screen() {
        let mut app = create_test_app();
        let mut terminal = create_test_terminal();
        app.screen = Screen::Congrats;

        let result = terminal.draw(|frame| {
            draw(&mut app, frame).expect("drawing should succeed in test");
        });

        assert!(result.is_ok(), "drawing congratulations should succeed");
    }

    #[test]
    fn test_cell_to_screen_coords_centers_the_grid() {
        let center = cell_to_screen_coords(4, 4, 9, 9).expect("conversion should succeed");
        assert!((center.0).abs() < f64::EPSILON);
        assert!((center.1).abs() < f64::EPSILON);

        let origin = cell_to_screen_coords(0, 0, 9, 9).expect("conversion should succeed");
        assert!((origin.0 + 4.).abs() < f64::EPSILON);
        assert!((origin.1 - 4.).abs() < f64::EPSILON);
    }

    #[test]
    fn test_pixel_to_screen_coords_matches_cell_transform_at_grid_points() {
        // A pixel on a cell's grid line maps to the same canvas point as the cell itself.
        let from_cell = cell_to_screen_coords(2, 3, 9, 9).expect("conversion should succeed");
        let from_pixel =
            pixel_to_screen_coords((40, 60), 20, 9, 9).expect("conversion should succeed");

        assert!((from_cell.0 - from_pixel.0).abs() < f64::EPSILON);
        assert!((from_cell.1 - from_pixel.1).abs() < f64::EPSILON);
    }
}
