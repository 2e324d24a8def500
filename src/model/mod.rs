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

//! Domain models and the content catalogue contract.
//!
//! This module defines the central entities of the application—news articles
//! grouped into ordered categories—and the [`ContentSource`] trait through
//! which the navigation controllers read them. Controllers receive their
//! catalogue by constructor injection so they can be exercised against a fake
//! catalogue in tests.

pub(crate) mod source;

use std::sync::Arc;

/// A single news story. The navigation core treats this as opaque content;
/// it only ever hands articles to a display.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct NewsArticle {
    pub(crate) headline: String,
    pub(crate) body: String,
}

/// An ordered, non-empty collection of articles addressed by index.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct NewsCategory {
    articles: Vec<NewsArticle>,
}

impl NewsCategory {
    pub(crate) fn new(articles: Vec<NewsArticle>) -> Self {
        Self { articles }
    }

    /// Returns the article at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range. Indices are only ever produced by
    /// enumerating this same category, so an out-of-range index is a broken
    /// caller, not a runtime condition.
    pub(crate) fn article(&self, index: usize) -> &NewsArticle {
        &self.articles[index]
    }

    pub(crate) fn articles(&self) -> &[NewsArticle] {
        &self.articles
    }
}

/// Read-only catalogue of categories addressed by index.
pub(crate) trait ContentSource {
    /// Returns the category at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not below [`ContentSource::category_count`].
    fn category(&self, index: usize) -> &NewsCategory;

    fn category_count(&self) -> usize;
}

/// Shared handle to a catalogue, cloned into each controller.
pub(crate) type SharedSource = Arc<dyn ContentSource>;
