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

//! User interface rendering logic.
//!
//! This module translates the [`App`] state into ratatui widgets. The
//! [`draw`] function runs after every processed event and composes the
//! category bar, the pane-mode-dependent content area, the status line, and
//! the chooser overlay.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Paragraph, Tabs},
};

use crate::{
    App, Screen,
    components::{
        article::render::draw_article, chooser::render::draw_chooser,
        headlines::render::draw_headlines,
    },
    controller::PaneMode,
};

/// Renders the user interface to the terminal frame.
///
/// In dual-pane mode the content area shows the headline list and the
/// article pane side by side; in single-pane mode it shows whichever screen
/// is current. The chooser popup, when open, is drawn last so it overlays
/// the content.
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    // Outer layout: category bar, content, status line
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(f.area());

    draw_category_bar(f, outer[0], app);

    match app.pane_mode {
        PaneMode::Dual => {
            let panes = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(38), Constraint::Percentage(62)])
                .split(outer[1]);
            draw_headlines(f, panes[0], &mut app.headlines_view, &app.theme);
            draw_article(f, panes[1], &app.article_view, &app.theme);
        }
        PaneMode::Single => match app.screen {
            Screen::Headlines => draw_headlines(f, outer[1], &mut app.headlines_view, &app.theme),
            Screen::Article => draw_article(f, outer[1], &app.article_view, &app.theme),
        },
    }

    draw_status(f, outer[2], app);

    if app.chooser.is_open() {
        draw_chooser(f, outer[1], &mut app.chooser, &app.theme);
    }
}

fn draw_category_bar(f: &mut Frame, area: Rect, app: &App) {
    let tabs = Tabs::new(app.nav_titles.clone())
        .select(app.nav_selected)
        .style(Style::default().fg(app.theme.tab_fg))
        .highlight_style(
            Style::default()
                .fg(app.theme.accent_colour)
                .add_modifier(Modifier::BOLD),
        );

    f.render_widget(tabs, area);
}

fn draw_status(f: &mut Frame, area: Rect, app: &App) {
    let hints = if app.chooser.is_open() {
        "j/k move   Enter choose   Esc cancel"
    } else if app.screen == Screen::Article {
        "j/k scroll   Esc back   q quit"
    } else if app.pane_mode == PaneMode::Dual {
        "j/k move   Enter show   Tab/1-4 category   c choose   q quit"
    } else {
        "j/k move   Enter open   Tab/1-4 category   c choose   q quit"
    };

    let status = Paragraph::new(hints).style(Style::default().fg(app.theme.status_fg));
    f.render_widget(status, area);
}
