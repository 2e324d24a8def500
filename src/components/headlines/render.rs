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

//! Render the headline list.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem},
};

use crate::{components::HeadlinesView, theme::Theme};

pub(crate) fn draw_headlines(f: &mut Frame, area: Rect, view: &mut HeadlinesView, theme: &Theme) {
    let items: Vec<ListItem> = view
        .headlines
        .iter()
        .map(|headline| ListItem::new(headline.as_str()))
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", view.category_title))
                .border_style(Style::default().fg(theme.border_colour)),
        )
        .style(Style::default().fg(theme.headline_fg))
        .highlight_style(
            Style::default()
                .bg(theme.accent_colour)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol(">> ");

    f.render_stateful_widget(list, area, &mut view.list_state);
}
