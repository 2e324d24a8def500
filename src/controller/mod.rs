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

//! Navigation state and decision logic.
//!
//! This module holds the two controllers that decide what the reader shows:
//!
//! * [`NavigationController`]: owns the current category/article selection
//!   for the headline screen and commands a [`ReaderDisplay`].
//! * [`ArticleScreenController`]: makes the single decision for the separate
//!   article screen and commands an [`ArticleDisplay`].
//!
//! Controllers never query their display. State flows one way: the display
//! layer reports user actions by calling controller operations, and the
//! controller answers with display commands. Each controller is bound to
//! exactly one display for its lifetime, and a pane mode change is handled
//! by dropping the controller and constructing a new one with restored
//! state, never by mutating the mode in place.

mod article;
mod navigation;

pub(crate) use article::ArticleScreenController;
pub(crate) use navigation::NavigationController;

use crate::model::{NewsArticle, NewsCategory};

/// The fixed category line-up. Category indices across the application are
/// indices into this table.
pub(crate) const CATEGORY_TITLES: [&str; 4] =
    ["Top Stories", "Politics", "Economy", "Technology"];

/// Whether the screen shows one logical view at a time or the headline list
/// and article together. Fixed per controller instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PaneMode {
    Single,
    Dual,
}

impl PaneMode {
    /// Classifies a terminal width against the dual-pane threshold.
    pub(crate) fn from_width(columns: u16, dual_min_columns: u16) -> Self {
        if columns >= dual_min_columns {
            PaneMode::Dual
        } else {
            PaneMode::Single
        }
    }
}

/// Command sink for the headline screen, implemented by the presentation
/// layer.
pub(crate) trait ReaderDisplay {
    /// Initializes the category switcher UI.
    fn set_up_navigation(&mut self, titles: &[&str], pane_mode: PaneMode, selected_index: usize);

    /// Shows a category's title and headline list.
    fn set_category(&mut self, title: &str, category: &NewsCategory);

    /// Shows an article in the inline article pane.
    fn set_article(&mut self, article: &NewsArticle);

    /// Launches the separate article screen.
    fn show_article_screen(&mut self, category_index: usize, article_index: usize);

    /// Presents the category chooser.
    fn show_category_chooser(&mut self, titles: &[&str]);
}

/// Command sink for the separate article screen.
pub(crate) trait ArticleDisplay {
    /// Closes the screen without rendering anything.
    fn finish(&mut self);

    /// Renders the given article.
    fn display_article(&mut self, article: &NewsArticle);
}
