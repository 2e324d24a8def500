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

//! Channel-backed display bound to the controllers.
//!
//! [`EventDisplay`] implements both display capabilities by forwarding each
//! command as an [`AppEvent`] onto the application channel. The event loop
//! applies the commands to view state, so controllers stay decoupled from
//! the widgets they drive.

use std::sync::mpsc::Sender;

use crate::{
    controller::{ArticleDisplay, PaneMode, ReaderDisplay},
    events::AppEvent,
    model::{NewsArticle, NewsCategory},
};

pub(crate) struct EventDisplay {
    event_tx: Sender<AppEvent>,
}

impl EventDisplay {
    pub(crate) fn new(event_tx: Sender<AppEvent>) -> Self {
        Self { event_tx }
    }

    fn owned(titles: &[&str]) -> Vec<String> {
        titles.iter().map(|title| title.to_string()).collect()
    }
}

impl ReaderDisplay for EventDisplay {
    fn set_up_navigation(&mut self, titles: &[&str], pane_mode: PaneMode, selected_index: usize) {
        self.event_tx
            .send(AppEvent::SetUpNavigation {
                titles: Self::owned(titles),
                pane_mode,
                selected_index,
            })
            .ok();
    }

    fn set_category(&mut self, title: &str, category: &NewsCategory) {
        self.event_tx
            .send(AppEvent::SetCategory {
                title: title.to_string(),
                category: category.clone(),
            })
            .ok();
    }

    fn set_article(&mut self, article: &NewsArticle) {
        self.event_tx.send(AppEvent::SetArticle(article.clone())).ok();
    }

    fn show_article_screen(&mut self, category_index: usize, article_index: usize) {
        self.event_tx
            .send(AppEvent::ShowArticleScreen {
                category_index,
                article_index,
            })
            .ok();
    }

    fn show_category_chooser(&mut self, titles: &[&str]) {
        self.event_tx
            .send(AppEvent::ShowCategoryChooser(Self::owned(titles)))
            .ok();
    }
}

impl ArticleDisplay for EventDisplay {
    fn finish(&mut self) {
        self.event_tx.send(AppEvent::CloseArticleScreen).ok();
    }

    fn display_article(&mut self, article: &NewsArticle) {
        self.event_tx
            .send(AppEvent::DisplayScreenArticle(article.clone()))
            .ok();
    }
}
