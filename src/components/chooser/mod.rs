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

//! Category chooser dialog state.
//!
//! A modal popup over the current screen. While open it owns keyboard
//! input; a pick re-enters the navigation controller as a category
//! selection, a dismissal restores the screen untouched.

pub(crate) mod render;

use ratatui::widgets::ListState;

#[derive(Default)]
pub(crate) struct CategoryChooser {
    pub(crate) titles: Vec<String>,
    pub(crate) list_state: ListState,
    is_open: bool,
}

impl CategoryChooser {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn open(&mut self, titles: Vec<String>) {
        self.list_state.select((!titles.is_empty()).then_some(0));
        self.titles = titles;
        self.is_open = true;
    }

    pub(crate) fn close(&mut self) {
        self.is_open = false;
    }

    pub(crate) fn is_open(&self) -> bool {
        self.is_open
    }

    pub(crate) fn selected(&self) -> Option<usize> {
        self.list_state.selected()
    }

    pub(crate) fn next(&mut self) {
        let len = self.titles.len();
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
        let len = self.titles.len();
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

    fn titles() -> Vec<String> {
        vec!["One".to_string(), "Two".to_string(), "Three".to_string()]
    }

    #[test]
    fn opening_selects_the_first_title() {
        let mut chooser = CategoryChooser::new();
        assert!(!chooser.is_open());

        chooser.open(titles());

        assert!(chooser.is_open());
        assert_eq!(chooser.selected(), Some(0));
    }

    #[test]
    fn cursor_wraps_around_the_title_list() {
        let mut chooser = CategoryChooser::new();
        chooser.open(titles());

        chooser.previous();
        assert_eq!(chooser.selected(), Some(2));
        chooser.next();
        assert_eq!(chooser.selected(), Some(0));
    }

    #[test]
    fn closing_keeps_the_titles_for_the_next_open() {
        let mut chooser = CategoryChooser::new();
        chooser.open(titles());
        chooser.close();

        assert!(!chooser.is_open());
        assert_eq!(chooser.titles.len(), 3);
    }
}
