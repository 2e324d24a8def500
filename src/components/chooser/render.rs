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

//! Render the category chooser popup.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, List, ListItem},
};

use crate::{components::CategoryChooser, theme::Theme};

const POPUP_WIDTH: u16 = 30;

pub(crate) fn draw_chooser(f: &mut Frame, area: Rect, chooser: &mut CategoryChooser, theme: &Theme) {
    let height = chooser.titles.len() as u16 + 2;
    let popup = centered_rect(area, POPUP_WIDTH, height);

    // Clear whatever the popup covers so the dialog reads as a layer.
    f.render_widget(Clear, popup);

    let items: Vec<ListItem> = chooser
        .titles
        .iter()
        .map(|title| ListItem::new(title.as_str()))
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Select a Category ")
                .border_style(Style::default().fg(theme.accent_colour)),
        )
        .style(Style::default().fg(theme.headline_fg))
        .highlight_style(
            Style::default()
                .bg(theme.accent_colour)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol(">> ");

    f.render_stateful_widget(list, popup, &mut chooser.list_state);
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
