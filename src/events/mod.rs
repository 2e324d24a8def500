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

//! Application event distribution.
//!
//! This module defines the central event loop of the application, bridging
//! user input (keyboard, terminal resize), the navigation controllers, and
//! the UI rendering pipeline.
//!
//! # Architecture
//!
//! Everything rides one `std::sync::mpsc` channel of [`AppEvent`]s:
//!
//! 1. **Capture**: the input and tick threads translate terminal events into
//!    application events.
//! 2. **Decide**: key events invoke controller operations; the controllers
//!    answer with display commands, which arrive back on the same channel
//!    via [`EventDisplay`].
//! 3. **Apply + render**: command events update view state, and the UI is
//!    re-drawn after every event.
//!
//! Because commands and inputs share one queue drained by one thread, every
//! controller operation runs to completion before its commands take effect.

mod handlers;
mod key_handlers;
mod port;

use handlers::*;
use key_handlers::*;
pub(crate) use port::EventDisplay;

use std::io::Stdout;

use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::{Terminal, prelude::CrosstermBackend};

use crate::{
    App,
    controller::PaneMode,
    model::{NewsArticle, NewsCategory},
    render::draw,
};

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),
    Resize(u16, u16),

    // Commands from the navigation controller.
    SetUpNavigation {
        titles: Vec<String>,
        pane_mode: PaneMode,
        selected_index: usize,
    },
    SetCategory {
        title: String,
        category: NewsCategory,
    },
    SetArticle(NewsArticle),
    ShowArticleScreen {
        category_index: usize,
        article_index: usize,
    },
    ShowCategoryChooser(Vec<String>),

    // Commands from the article screen controller.
    DisplayScreenArticle(NewsArticle),
    CloseArticleScreen,

    Tick,

    ExitApplication,
}

/// Runs the main application loop, handling events and rendering the UI in
/// the terminal.
///
/// This function loops until a 'quit' event is received or the event channel
/// is closed.
pub(crate) fn process_events(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    while let Ok(event) = app.event_rx.recv() {
        if matches!(event, AppEvent::ExitApplication) {
            break;
        }

        match event {
            AppEvent::Key(key) => process_key_event(app, key)?,
            AppEvent::Resize(columns, _) => handle_resize(app, columns),

            AppEvent::SetUpNavigation {
                titles,
                pane_mode,
                selected_index,
            } => handle_set_up_navigation(app, titles, pane_mode, selected_index),
            AppEvent::SetCategory { title, category } => handle_set_category(app, title, category),
            AppEvent::SetArticle(article) => handle_set_article(app, article),
            AppEvent::ShowArticleScreen {
                category_index,
                article_index,
            } => handle_show_article_screen(app, category_index, article_index),
            AppEvent::ShowCategoryChooser(titles) => handle_show_category_chooser(app, titles),

            AppEvent::DisplayScreenArticle(article) => handle_display_screen_article(app, article),
            AppEvent::CloseArticleScreen => handle_close_article_screen(app),

            AppEvent::Tick | AppEvent::ExitApplication => {}
        }

        terminal.draw(|f| draw(f, app))?;
    }
    Ok(())
}
