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

//! Headline list state.
//!
//! Holds the currently loaded category's title and headlines together with
//! the list cursor. The cursor is pure view state; a pick only reaches the
//! navigation controller when the user commits it.

pub(crate) mod render;

use ratatui::widgets::ListState;

use crate::model::NewsCategory;

#[derive(Default)]
pub(crate) struct HeadlinesView {
    pub(crate) category_title: String,
    pub(crate) headlines: Vec<String>,
    pub(crate) list_state: ListState,
}

impl HeadlinesView {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Replaces the list contents and puts the cursor back on the first
    /// headline.
    pub(crate) fn load_category(&mut self, title: &str, category: &NewsCategory) {
        self.category_title = title.to_string();
        self.headlines = category
            .articles()
            .iter()
            .map(|article| article.headline.clone())
            .collect();
        self.list_state
            .select((!self.headlines.is_empty()).then_some(0));
    }

    pub(crate) fn selected(&self) -> Option<usize> {
        self.list_state.selected()
    }

    pub(crate) fn next(&mut self) {
        let len = self.headlines.len();
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => if i >= len - 1 { 0 } else { i + 1 },
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    pub(crate) fn previous(&mut self) {
        let len = self.headlines.len();
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => if i == 0 { len - 1 } else { i - 1 },
            None => 0,
        };
        self.list_state.select(Some(i));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NewsArticle;

    fn loaded_view() -> HeadlinesView {
        let category = NewsCategory::new(
            (0..3)
                .map(|i| NewsArticle {
                    headline: format!("headline {i}"),
                    body: String::new(),
                })
                .collect(),
        );
        let mut view = HeadlinesView::new();
        view.load_category("Politics", &category);
        view
    }

    #[test]
    fn loading_a_category_resets_the_cursor() {
        let mut view = loaded_view();
        view.next();
        assert_eq!(view.selected(), Some(1));

        let category = NewsCategory::new(vec![NewsArticle {
            headline: "other".to_string(),
            body: String::new(),
        }]);
        view.load_category("Economy", &category);

        assert_eq!(view.category_title, "Economy");
        assert_eq!(view.headlines, vec!["other".to_string()]);
        assert_eq!(view.selected(), Some(0));
    }

    #[test]
    fn cursor_wraps_in_both_directions() {
        let mut view = loaded_view();
        view.previous();
        assert_eq!(view.selected(), Some(2));
        view.next();
        assert_eq!(view.selected(), Some(0));
    }

    #[test]
    fn empty_list_keeps_the_cursor_unset() {
        let mut view = HeadlinesView::new();
        view.next();
        view.previous();
        assert_eq!(view.selected(), None);
    }
}
