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

//! One-shot controller for the separate article screen.

use std::sync::Arc;

use crate::{
    controller::{ArticleDisplay, PaneMode},
    model::SharedSource,
};

/// Decides, once, whether the separate article screen shows an article or
/// closes itself. A new controller is constructed for every article screen
/// session and dropped with it; nothing happens after the single decision.
pub(crate) struct ArticleScreenController<D> {
    source: SharedSource,
    display: Option<D>,
}

impl<D: ArticleDisplay> ArticleScreenController<D> {
    pub(crate) fn new(source: SharedSource) -> Self {
        Self {
            source,
            display: None,
        }
    }

    pub(crate) fn set_display(&mut self, display: D) {
        self.display = Some(display);
    }

    /// Makes the screen's terminal decision.
    ///
    /// In dual-pane mode the screen is redundant (the headline screen
    /// already shows articles inline), so it is told to finish without
    /// rendering anything. Otherwise the addressed article is looked up and
    /// displayed.
    ///
    /// # Panics
    ///
    /// Panics if no display has been bound, or if the indices do not address
    /// an article in the catalogue.
    pub(crate) fn on_create(
        &mut self,
        pane_mode: PaneMode,
        category_index: usize,
        article_index: usize,
    ) {
        let source = Arc::clone(&self.source);
        let display = self
            .display
            .as_mut()
            .expect("display must be bound before controller use");

        if pane_mode == PaneMode::Dual {
            display.finish();
            return;
        }

        display.display_article(source.category(category_index).article(article_index));
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc, sync::Arc};

    use super::*;
    use crate::model::{ContentSource, NewsArticle, NewsCategory};

    #[derive(Debug, Clone, PartialEq)]
    enum Command {
        Finish,
        DisplayArticle { headline: String },
    }

    #[derive(Clone, Default)]
    struct RecordingDisplay {
        commands: Rc<RefCell<Vec<Command>>>,
    }

    impl RecordingDisplay {
        fn commands(&self) -> Vec<Command> {
            self.commands.borrow().clone()
        }
    }

    impl ArticleDisplay for RecordingDisplay {
        fn finish(&mut self) {
            self.commands.borrow_mut().push(Command::Finish);
        }

        fn display_article(&mut self, article: &NewsArticle) {
            self.commands.borrow_mut().push(Command::DisplayArticle {
                headline: article.headline.clone(),
            });
        }
    }

    struct FakeSource {
        categories: Vec<NewsCategory>,
    }

    impl ContentSource for FakeSource {
        fn category(&self, index: usize) -> &NewsCategory {
            &self.categories[index]
        }

        fn category_count(&self) -> usize {
            self.categories.len()
        }
    }

    fn fake_source() -> Arc<FakeSource> {
        let categories = (0..2)
            .map(|category| {
                let articles = (0..3)
                    .map(|article| NewsArticle {
                        headline: format!("headline {category}-{article}"),
                        body: format!("body {category}-{article}"),
                    })
                    .collect();
                NewsCategory::new(articles)
            })
            .collect();
        Arc::new(FakeSource { categories })
    }

    fn created_controller() -> (ArticleScreenController<RecordingDisplay>, RecordingDisplay) {
        let mut controller = ArticleScreenController::new(fake_source());
        let display = RecordingDisplay::default();
        controller.set_display(display.clone());
        (controller, display)
    }

    #[test]
    fn dual_pane_finishes_immediately_regardless_of_indices() {
        let (mut controller, display) = created_controller();

        controller.on_create(PaneMode::Dual, 1, 2);

        assert_eq!(display.commands(), vec![Command::Finish]);
    }

    #[test]
    fn single_pane_displays_the_addressed_article() {
        let (mut controller, display) = created_controller();

        controller.on_create(PaneMode::Single, 1, 2);

        assert_eq!(
            display.commands(),
            vec![Command::DisplayArticle {
                headline: "headline 1-2".to_string(),
            }]
        );
    }

    #[test]
    #[should_panic(expected = "display must be bound")]
    fn create_before_display_binding_panics() {
        let mut controller: ArticleScreenController<RecordingDisplay> =
            ArticleScreenController::new(fake_source());
        controller.on_create(PaneMode::Single, 0, 0);
    }
}
