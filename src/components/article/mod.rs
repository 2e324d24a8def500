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

//! Article view state.
//!
//! Backs both the inline article pane (dual-pane layout) and the separate
//! full-screen article view (single-pane layout); only one of the two is
//! ever on screen.

pub(crate) mod render;

use crate::model::NewsArticle;

const SCROLL_STEP: u16 = 2;

#[derive(Default)]
pub(crate) struct ArticleView {
    pub(crate) article: Option<NewsArticle>,
    pub(crate) scroll: u16,
}

impl ArticleView {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn show(&mut self, article: NewsArticle) {
        self.article = Some(article);
        self.scroll = 0;
    }

    pub(crate) fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_add(SCROLL_STEP);
    }

    pub(crate) fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(SCROLL_STEP);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn showing_an_article_resets_the_scroll_position() {
        let mut view = ArticleView::new();
        view.scroll_down();
        view.scroll_down();
        assert_eq!(view.scroll, 2 * SCROLL_STEP);

        view.show(NewsArticle {
            headline: "headline".to_string(),
            body: "body".to_string(),
        });

        assert_eq!(view.scroll, 0);
        assert!(view.article.is_some());
    }

    #[test]
    fn scrolling_up_stops_at_the_top() {
        let mut view = ArticleView::new();
        view.scroll_up();
        assert_eq!(view.scroll, 0);
    }
}
