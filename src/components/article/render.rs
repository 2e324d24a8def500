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

//! Render the article view.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::{components::ArticleView, theme::Theme};

pub(crate) fn draw_article(f: &mut Frame, area: Rect, view: &ArticleView, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_colour))
        .padding(Padding::horizontal(1));

    let Some(article) = &view.article else {
        let placeholder = Paragraph::new("No article selected")
            .block(block)
            .style(Style::default().fg(theme.status_fg))
            .alignment(Alignment::Center);
        f.render_widget(placeholder, area);
        return;
    };

    let mut lines = vec![
        Line::styled(
            article.headline.as_str(),
            Style::default()
                .fg(theme.article_heading_fg)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
    ];
    lines.extend(article.body.lines().map(Line::from));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().fg(theme.article_body_fg))
        .wrap(Wrap { trim: false })
        .scroll((view.scroll, 0));

    f.render_widget(paragraph, area);
}
