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

//! Keyboard input routing.
//!
//! Raw key events are routed by what currently has the user's attention:
//! the category chooser when it is open, otherwise the article screen or
//! the headline screen. Keys either adjust pure view state (list cursors,
//! article scroll) or re-enter the navigation controller as user actions.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use crate::{App, Screen, controller::CATEGORY_TITLES, events::AppEvent};

pub(super) fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if app.chooser.is_open() {
        return process_chooser_key_event(app, key);
    }

    match app.screen {
        Screen::Article => process_article_key_event(app, key),
        Screen::Headlines => process_headlines_key_event(app, key),
    }
}

fn process_chooser_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.chooser.next(),
        KeyCode::Char('k') | KeyCode::Up => app.chooser.previous(),

        KeyCode::Enter => {
            if let Some(index) = app.chooser.selected() {
                app.chooser.close();
                app.controller.on_category_selected(index);
            }
        }

        KeyCode::Esc | KeyCode::Char('c') => app.chooser.close(),

        _ => {}
    }

    Ok(())
}

fn process_article_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('q') => app.event_tx.send(AppEvent::ExitApplication)?,

        // Back to the headline list.
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('h') => {
            app.event_tx.send(AppEvent::CloseArticleScreen)?;
        }

        KeyCode::Char('j') | KeyCode::Down => app.article_view.scroll_down(),
        KeyCode::Char('k') | KeyCode::Up => app.article_view.scroll_up(),

        _ => {}
    }

    Ok(())
}

fn process_headlines_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('q') => app.event_tx.send(AppEvent::ExitApplication)?,

        // Headline cursor: moving it is view state only, Enter commits the
        // pick to the controller.
        KeyCode::Char('j') | KeyCode::Down => app.headlines_view.next(),
        KeyCode::Char('k') | KeyCode::Up => app.headlines_view.previous(),
        KeyCode::Enter => {
            if let Some(index) = app.headlines_view.selected() {
                app.controller.on_headline_selected(index);
            }
        }

        // Category switching: cycle, or jump straight to a category.
        KeyCode::Tab | KeyCode::Char('l') | KeyCode::Right => {
            let next = (app.controller.category_index() + 1) % CATEGORY_TITLES.len();
            app.controller.on_category_selected(next);
        }
        KeyCode::BackTab | KeyCode::Char('h') | KeyCode::Left => {
            let current = app.controller.category_index();
            let previous = if current == 0 {
                CATEGORY_TITLES.len() - 1
            } else {
                current - 1
            };
            app.controller.on_category_selected(previous);
        }
        KeyCode::Char(digit @ '1'..='4') => {
            app.controller
                .on_category_selected(digit as usize - '1' as usize);
        }

        KeyCode::Char('c') => app.controller.category_button_clicked(),

        // Scroll the inline article pane without moving the headline cursor.
        KeyCode::PageDown => app.article_view.scroll_down(),
        KeyCode::PageUp => app.article_view.scroll_up(),

        _ => {}
    }

    Ok(())
}
