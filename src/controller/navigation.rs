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

//! Selection state machine for the headline screen.
//!
//! [`NavigationController`] owns the current category index, the current
//! article selection, and the pane mode, and translates lifecycle and user
//! events into [`ReaderDisplay`] commands. All category changes funnel
//! through one resolution rule so the restore path and the user-selection
//! path cannot drift apart.

use std::sync::Arc;

use crate::{
    controller::{CATEGORY_TITLES, PaneMode, ReaderDisplay},
    model::SharedSource,
};

/// Navigation state and decision logic for the headline screen.
///
/// The controller must have a display bound with
/// [`NavigationController::set_display`] before any lifecycle or user-action
/// operation is invoked, and `on_create`/`on_restore` must run before
/// `on_start`. These orderings are a caller contract, not runtime
/// conditions; violating them panics.
pub(crate) struct NavigationController<D> {
    source: SharedSource,
    display: Option<D>,
    pane_mode: PaneMode,
    category_index: usize,
    article_index: Option<usize>,
}

impl<D: ReaderDisplay> NavigationController<D> {
    pub(crate) fn new(source: SharedSource) -> Self {
        Self {
            source,
            display: None,
            pane_mode: PaneMode::Single,
            category_index: 0,
            article_index: None,
        }
    }

    pub(crate) fn set_display(&mut self, display: D) {
        self.display = Some(display);
    }

    /// Fixes the pane mode for this controller's lifetime and commands the
    /// display to set up its category switcher. No article is resolved yet;
    /// selection state flows in through [`NavigationController::on_restore`]
    /// or stays at the fresh defaults until the first user action.
    pub(crate) fn on_create(&mut self, pane_mode: PaneMode, initial_category_index: usize) {
        self.pane_mode = pane_mode;
        self.display()
            .set_up_navigation(&CATEGORY_TITLES, pane_mode, initial_category_index);
    }

    /// Overwrites the stored indices with externally persisted values.
    ///
    /// No display command is issued here; this primes state for the
    /// subsequent [`NavigationController::on_start`].
    pub(crate) fn on_restore(&mut self, category_index: usize, article_index: Option<usize>) {
        self.category_index = category_index;
        self.article_index = article_index;
    }

    /// Re-applies the stored selection through the category resolution rule,
    /// so the display reflects restored state even when start follows
    /// construction + restore rather than a fresh create.
    pub(crate) fn on_start(&mut self) {
        self.set_category(self.category_index, self.article_index);
    }

    /// Switches to a category with no article selected.
    pub(crate) fn on_category_selected(&mut self, category_index: usize) {
        self.set_category(category_index, None);
    }

    /// Records the picked headline, then either shows the article inline
    /// (dual pane) or launches the separate article screen (single pane).
    /// The launched screen's outcome is not observed.
    pub(crate) fn on_headline_selected(&mut self, article_index: usize) {
        self.article_index = Some(article_index);
        if self.pane_mode == PaneMode::Dual {
            let source = Arc::clone(&self.source);
            let article = source.category(self.category_index).article(article_index);
            self.display().set_article(article);
        } else {
            let category_index = self.category_index;
            self.display()
                .show_article_screen(category_index, article_index);
        }
    }

    /// Commands the display to present the category chooser. A pick from the
    /// chooser re-enters via [`NavigationController::on_category_selected`].
    pub(crate) fn category_button_clicked(&mut self) {
        self.display().show_category_chooser(&CATEGORY_TITLES);
    }

    pub(crate) fn category_index(&self) -> usize {
        self.category_index
    }

    /// The stored article selection, `None` until a headline is explicitly
    /// picked. Read together with the category index for persistence before
    /// teardown.
    pub(crate) fn article_index(&self) -> Option<usize> {
        self.article_index
    }

    // The one piece of non-trivial branching in the system, shared by the
    // restore+start path and user category selection. A `None` selection is
    // normalized to article 0 display-side only; the stored value keeps the
    // distinction between "nothing picked yet" and "picked the first".
    fn set_category(&mut self, category_index: usize, article_index: Option<usize>) {
        self.category_index = category_index;
        self.article_index = article_index;

        let source = Arc::clone(&self.source);
        let category = source.category(category_index);

        let display = self
            .display
            .as_mut()
            .expect("display must be bound before controller use");
        display.set_category(CATEGORY_TITLES[category_index], category);
        if self.pane_mode == PaneMode::Dual {
            display.set_article(category.article(article_index.unwrap_or(0)));
        }
    }

    /// # Panics
    ///
    /// Panics if no display has been bound yet.
    fn display(&mut self) -> &mut D {
        self.display
            .as_mut()
            .expect("display must be bound before controller use")
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc, sync::Arc};

    use super::*;
    use crate::model::{ContentSource, NewsArticle, NewsCategory};

    #[derive(Debug, Clone, PartialEq)]
    enum Command {
        SetUpNavigation {
            titles: Vec<String>,
            pane_mode: PaneMode,
            selected_index: usize,
        },
        SetCategory {
            title: String,
            headlines: Vec<String>,
        },
        SetArticle {
            headline: String,
        },
        ShowArticleScreen {
            category_index: usize,
            article_index: usize,
        },
        ShowCategoryChooser {
            titles: Vec<String>,
        },
    }

    #[derive(Clone, Default)]
    struct RecordingDisplay {
        commands: Rc<RefCell<Vec<Command>>>,
    }

    impl RecordingDisplay {
        fn commands(&self) -> Vec<Command> {
            self.commands.borrow().clone()
        }

        fn clear(&self) {
            self.commands.borrow_mut().clear();
        }
    }

    impl ReaderDisplay for RecordingDisplay {
        fn set_up_navigation(
            &mut self,
            titles: &[&str],
            pane_mode: PaneMode,
            selected_index: usize,
        ) {
            self.commands.borrow_mut().push(Command::SetUpNavigation {
                titles: titles.iter().map(|t| t.to_string()).collect(),
                pane_mode,
                selected_index,
            });
        }

        fn set_category(&mut self, title: &str, category: &NewsCategory) {
            self.commands.borrow_mut().push(Command::SetCategory {
                title: title.to_string(),
                headlines: category
                    .articles()
                    .iter()
                    .map(|a| a.headline.clone())
                    .collect(),
            });
        }

        fn set_article(&mut self, article: &NewsArticle) {
            self.commands.borrow_mut().push(Command::SetArticle {
                headline: article.headline.clone(),
            });
        }

        fn show_article_screen(&mut self, category_index: usize, article_index: usize) {
            self.commands.borrow_mut().push(Command::ShowArticleScreen {
                category_index,
                article_index,
            });
        }

        fn show_category_chooser(&mut self, titles: &[&str]) {
            self.commands
                .borrow_mut()
                .push(Command::ShowCategoryChooser {
                    titles: titles.iter().map(|t| t.to_string()).collect(),
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
        let categories = (0..CATEGORY_TITLES.len())
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

    fn created_controller(
        pane_mode: PaneMode,
    ) -> (NavigationController<RecordingDisplay>, RecordingDisplay) {
        let mut controller = NavigationController::new(fake_source());
        let display = RecordingDisplay::default();
        controller.set_display(display.clone());
        controller.on_create(pane_mode, 0);
        display.clear();
        (controller, display)
    }

    fn category_headlines(category: usize) -> Vec<String> {
        (0..3)
            .map(|article| format!("headline {category}-{article}"))
            .collect()
    }

    #[test]
    fn create_only_sets_up_navigation() {
        let mut controller = NavigationController::new(fake_source());
        let display = RecordingDisplay::default();
        controller.set_display(display.clone());

        controller.on_create(PaneMode::Dual, 2);

        assert_eq!(
            display.commands(),
            vec![Command::SetUpNavigation {
                titles: CATEGORY_TITLES.iter().map(|t| t.to_string()).collect(),
                pane_mode: PaneMode::Dual,
                selected_index: 2,
            }]
        );
        // The initial index seeds the navigation bar only; selection state
        // stays at the fresh default.
        assert_eq!(controller.category_index(), 0);
        assert_eq!(controller.article_index(), None);
    }

    #[test]
    fn dual_category_select_shows_default_article_without_storing_it() {
        let (mut controller, display) = created_controller(PaneMode::Dual);

        controller.on_category_selected(2);

        assert_eq!(
            display.commands(),
            vec![
                Command::SetCategory {
                    title: "Economy".to_string(),
                    headlines: category_headlines(2),
                },
                Command::SetArticle {
                    headline: "headline 2-0".to_string(),
                },
            ]
        );
        assert_eq!(controller.category_index(), 2);
        assert_eq!(controller.article_index(), None);
    }

    #[test]
    fn single_category_select_never_touches_the_article_pane() {
        let (mut controller, display) = created_controller(PaneMode::Single);

        controller.on_category_selected(1);

        assert_eq!(
            display.commands(),
            vec![Command::SetCategory {
                title: "Politics".to_string(),
                headlines: category_headlines(1),
            }]
        );
    }

    #[test]
    fn single_headline_select_launches_the_article_screen() {
        let (mut controller, display) = created_controller(PaneMode::Single);

        controller.on_headline_selected(2);

        assert_eq!(
            display.commands(),
            vec![Command::ShowArticleScreen {
                category_index: 0,
                article_index: 2,
            }]
        );
        assert_eq!(controller.article_index(), Some(2));
    }

    #[test]
    fn dual_headline_select_shows_the_article_inline() {
        let (mut controller, display) = created_controller(PaneMode::Dual);

        controller.on_headline_selected(1);

        assert_eq!(
            display.commands(),
            vec![Command::SetArticle {
                headline: "headline 0-1".to_string(),
            }]
        );
        assert_eq!(controller.article_index(), Some(1));
    }

    #[test]
    fn restore_issues_no_display_commands() {
        let (mut controller, display) = created_controller(PaneMode::Dual);

        controller.on_restore(1, Some(2));

        assert!(display.commands().is_empty());
        assert_eq!(controller.category_index(), 1);
        assert_eq!(controller.article_index(), Some(2));
    }

    #[test]
    fn restore_then_start_reapplies_the_saved_selection() {
        let (mut controller, display) = created_controller(PaneMode::Dual);

        controller.on_restore(1, Some(2));
        controller.on_start();

        assert_eq!(
            display.commands(),
            vec![
                Command::SetCategory {
                    title: "Politics".to_string(),
                    headlines: category_headlines(1),
                },
                Command::SetArticle {
                    headline: "headline 1-2".to_string(),
                },
            ]
        );
    }

    #[test]
    fn restore_without_article_defaults_the_display_to_the_first() {
        let (mut controller, display) = created_controller(PaneMode::Dual);

        controller.on_restore(2, None);
        controller.on_start();

        assert_eq!(
            display.commands(),
            vec![
                Command::SetCategory {
                    title: "Economy".to_string(),
                    headlines: category_headlines(2),
                },
                Command::SetArticle {
                    headline: "headline 2-0".to_string(),
                },
            ]
        );
        assert_eq!(controller.article_index(), None);
    }

    #[test]
    fn fresh_start_eagerly_displays_the_first_article_in_dual_pane() {
        let (mut controller, display) = created_controller(PaneMode::Dual);

        controller.on_start();

        assert_eq!(
            display.commands(),
            vec![
                Command::SetCategory {
                    title: "Top Stories".to_string(),
                    headlines: category_headlines(0),
                },
                Command::SetArticle {
                    headline: "headline 0-0".to_string(),
                },
            ]
        );
        assert_eq!(controller.article_index(), None);
    }

    #[test]
    fn single_pane_start_only_loads_the_headline_list() {
        let (mut controller, display) = created_controller(PaneMode::Single);

        controller.on_restore(1, Some(2));
        controller.on_start();

        assert_eq!(
            display.commands(),
            vec![Command::SetCategory {
                title: "Politics".to_string(),
                headlines: category_headlines(1),
            }]
        );
    }

    #[test]
    fn category_button_presents_the_chooser() {
        let (mut controller, display) = created_controller(PaneMode::Single);

        controller.category_button_clicked();

        assert_eq!(
            display.commands(),
            vec![Command::ShowCategoryChooser {
                titles: CATEGORY_TITLES.iter().map(|t| t.to_string()).collect(),
            }]
        );
    }

    #[test]
    #[should_panic(expected = "display must be bound")]
    fn operations_before_display_binding_panic() {
        let mut controller: NavigationController<RecordingDisplay> =
            NavigationController::new(fake_source());
        controller.on_create(PaneMode::Single, 0);
    }
}
