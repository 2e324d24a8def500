// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! # News Reader TUI.
//!
//! A terminal news reader whose layout adapts to the terminal width: wide
//! terminals show the headline list and the article side by side, narrow
//! terminals show one screen at a time and open articles on a separate
//! full-screen view.
//!
//! ## Architecture
//!
//! Navigation decisions live in dedicated controllers that command the UI
//! through display capabilities; the presentation layer reports user
//! actions back to them and renders whatever it is told. The application
//! follows a strict setup-run-teardown pattern so the terminal state is
//! preserved even in the event of a crash, with user input and periodic
//! ticks delivered over `std::sync::mpsc` channels to a single event loop.
//!
//! A terminal resize that crosses the dual-pane width threshold plays the
//! role of a device rotation: the current selection is captured, the
//! controller is rebuilt for the new pane mode, and the selection is
//! restored through the regular lifecycle.

mod components;
mod config;
mod controller;
mod events;
mod model;
mod render;
mod theme;
mod util;

use anyhow::{Context, Result};
use crossterm::{
    event::{self},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    io::{self},
    sync::{
        Arc,
        mpsc::{self, Receiver, Sender},
    },
    thread,
    time::Duration,
};

use crate::{
    components::{ArticleView, CategoryChooser, HeadlinesView},
    config::{AppConfig, SessionState},
    controller::{NavigationController, PaneMode},
    events::{AppEvent, EventDisplay, process_events},
    model::{SharedSource, source::NewsSource},
    theme::Theme,
};

/// Which logical view the single-pane layout currently shows. Dual-pane
/// layouts stay on the headline screen and show articles inline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Screen {
    Headlines,
    Article,
}

/// Application state.
pub(crate) struct App {
    pub(crate) config: AppConfig,
    pub(crate) theme: Theme,

    pub(crate) event_tx: Sender<AppEvent>,
    pub(crate) event_rx: Receiver<AppEvent>,

    pub(crate) source: SharedSource,
    pub(crate) controller: NavigationController<EventDisplay>,

    pub(crate) pane_mode: PaneMode,
    pub(crate) screen: Screen,

    pub(crate) nav_titles: Vec<String>,
    pub(crate) nav_selected: usize,
    pub(crate) headlines_view: HeadlinesView,
    pub(crate) article_view: ArticleView,
    pub(crate) chooser: CategoryChooser,
}

impl App {
    /// Create a new instance of application state.
    pub(crate) fn new(config: AppConfig, pane_mode: PaneMode) -> Self {
        let (event_tx, event_rx) = mpsc::channel();

        let source: SharedSource = Arc::new(NewsSource::new());
        debug_assert_eq!(
            source.category_count(),
            controller::CATEGORY_TITLES.len(),
            "catalogue and category title table out of step"
        );
        let controller = NavigationController::new(Arc::clone(&source));

        Self {
            config,
            theme: Theme::default(),
            event_tx,
            event_rx,
            source,
            controller,
            pane_mode,
            screen: Screen::Headlines,
            nav_titles: vec![],
            nav_selected: 0,
            headlines_view: HeadlinesView::new(),
            article_view: ArticleView::new(),
            chooser: CategoryChooser::new(),
        }
    }
}

/// The entry point of the application.
///
/// Loads configuration and the persisted session, classifies the terminal
/// width into a pane mode, runs the controller lifecycle, manages the
/// terminal, and writes the final selection back for the next session.
fn main() -> Result<()> {
    let config = config::load_config();
    let session = config::load_session();

    let (columns, _) = crossterm::terminal::size().context("Failed to read terminal size")?;
    let pane_mode = PaneMode::from_width(columns, config.dual_pane_min_columns);

    let mut app = App::new(config, pane_mode);

    // Seed the controller lifecycle from the persisted session: create,
    // restore, start. The resulting display commands are already queued on
    // the event channel when the loop takes over.
    app.controller
        .set_display(EventDisplay::new(app.event_tx.clone()));
    app.controller.on_create(pane_mode, session.category_index);
    app.controller
        .on_restore(session.category_index, session.article_selection());
    app.controller.on_start();

    let mut terminal = setup_terminal(&app)?;
    let res = run(&mut terminal, &mut app);
    restore_terminal(&mut terminal);

    // Persist the final selection for the next session.
    let session = SessionState::capture(
        app.controller.category_index(),
        app.controller.article_index(),
    );
    if let Err(e) = config::save_session(&session) {
        eprintln!("newsdeck: {e}");
    }

    res.context("Application error occurred")
}

/// Prepares the terminal for the TUI application.
///
/// Sets the terminal background to the theme colour, enables raw mode to
/// capture all keyboard input, and switches to the alternate screen buffer.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate
/// screen cannot be entered.
fn setup_terminal(app: &App) -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    // Set the background of the entire terminal window, without this we'd
    // get a thin black outline
    util::term::set_terminal_bg(&Theme::to_hex(app.theme.background_colour));

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// Reverses the changes made by [`setup_terminal`]. Best-effort by design;
/// it runs during cleanup paths where failures cannot be acted on.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    util::term::reset_terminal_bg();
    terminal.show_cursor().ok();
}

/// Starts the input and tick threads and enters the main event loop.
///
/// # Errors
///
/// Returns an error if the event processing loop encounters an
/// unrecoverable application error.
fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    // Spawn a thread to translate raw terminal events to application
    // events. Resizes are forwarded so the event loop can react to the
    // terminal crossing the pane-mode threshold.
    let tx_input = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            match event::read() {
                Ok(event::Event::Key(key)) => {
                    tx_input.send(AppEvent::Key(key)).ok();
                }
                Ok(event::Event::Resize(columns, rows)) => {
                    tx_input.send(AppEvent::Resize(columns, rows)).ok();
                }
                _ => {}
            }
        }
    });

    // Spawn a thread to send a periodic tick application event, this is
    // effectively the minimum "frame rate" for rendering the TUI
    // application.
    let tx_tick = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            let _ = tx_tick.send(AppEvent::Tick);
            thread::sleep(Duration::from_millis(250));
        }
    });

    // Application event loop, process events until the user quits
    process_events(terminal, app)
}
