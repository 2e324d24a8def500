use std::sync::Arc;

use crate::{
    App, Screen,
    config::SessionState,
    controller::{ArticleScreenController, NavigationController, PaneMode},
    events::EventDisplay,
    model::{NewsArticle, NewsCategory},
};

pub(super) fn handle_set_up_navigation(
    app: &mut App,
    titles: Vec<String>,
    pane_mode: PaneMode,
    selected_index: usize,
) {
    app.nav_titles = titles;
    app.nav_selected = selected_index;
    app.pane_mode = pane_mode;
}

pub(super) fn handle_set_category(app: &mut App, title: String, category: NewsCategory) {
    app.headlines_view.load_category(&title, &category);
    app.nav_selected = app.controller.category_index();
}

pub(super) fn handle_set_article(app: &mut App, article: NewsArticle) {
    app.article_view.show(article);
}

pub(super) fn handle_show_article_screen(
    app: &mut App,
    category_index: usize,
    article_index: usize,
) {
    // The article screen session starts here: a fresh one-shot controller
    // reads the pane mode the environment has *now* and either renders or
    // finishes straight away.
    let mut controller = ArticleScreenController::new(Arc::clone(&app.source));
    controller.set_display(EventDisplay::new(app.event_tx.clone()));
    controller.on_create(app.pane_mode, category_index, article_index);
}

pub(super) fn handle_show_category_chooser(app: &mut App, titles: Vec<String>) {
    app.chooser.open(titles);
}

pub(super) fn handle_display_screen_article(app: &mut App, article: NewsArticle) {
    app.screen = Screen::Article;
    app.article_view.show(article);
}

pub(super) fn handle_close_article_screen(app: &mut App) {
    app.screen = Screen::Headlines;
}

pub(super) fn handle_resize(app: &mut App, columns: u16) {
    let pane_mode = PaneMode::from_width(columns, app.config.dual_pane_min_columns);
    if pane_mode == app.pane_mode {
        return;
    }

    // Crossing the width threshold is a destructive layout change, the
    // terminal's version of a device rotation: capture the selection, drop
    // the controller, rebuild it for the new mode, and restore.
    let session = SessionState::capture(
        app.controller.category_index(),
        app.controller.article_index(),
    );

    app.pane_mode = pane_mode;
    app.controller = NavigationController::new(Arc::clone(&app.source));
    app.controller.set_display(EventDisplay::new(app.event_tx.clone()));
    app.controller.on_create(pane_mode, session.category_index);
    app.controller
        .on_restore(session.category_index, session.article_selection());
    app.controller.on_start();

    // An open article screen is recreated under the new mode; its controller
    // finishes it immediately when the layout has become dual-pane.
    if app.screen == Screen::Article {
        let article_index = session.article_selection().unwrap_or(0);
        handle_show_article_screen(app, session.category_index, article_index);
    }
}
