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

//! The built-in news catalogue.
//!
//! [`NewsSource`] fabricates a fixed set of articles for each category at
//! construction time. Article text is assembled from word tables with a
//! seeded generator, so the catalogue is identical on every run while still
//! reading like distinct stories. Nothing here is fetched; the catalogue is
//! the application's whole content universe.

use rand::{RngExt, SeedableRng, rngs::StdRng};

use crate::{
    controller::CATEGORY_TITLES,
    model::{ContentSource, NewsArticle, NewsCategory},
};

const ARTICLES_PER_CATEGORY: usize = 12;

const FILLER_WORDS: [&str; 24] = [
    "report", "sources", "officials", "analysts", "figures", "measures",
    "pressure", "support", "plans", "talks", "growth", "decline", "review",
    "agreement", "dispute", "response", "outlook", "impact", "changes",
    "concerns", "results", "questions", "momentum", "scrutiny",
];

// One topic table per entry in the category title list.
const TOPIC_WORDS: [[&str; 6]; 4] = [
    ["nation", "world", "city", "community", "weather", "courts"],
    ["parliament", "election", "minister", "coalition", "policy", "ballot"],
    ["markets", "inflation", "trade", "banks", "budget", "employment"],
    ["software", "networks", "devices", "research", "startups", "security"],
];

/// In-memory content catalogue with one fabricated category per title.
pub(crate) struct NewsSource {
    categories: Vec<NewsCategory>,
}

impl NewsSource {
    pub(crate) fn new() -> Self {
        let categories = (0..CATEGORY_TITLES.len())
            .map(|category_index| {
                let articles = (0..ARTICLES_PER_CATEGORY)
                    .map(|article_index| fabricate_article(category_index, article_index))
                    .collect();
                NewsCategory::new(articles)
            })
            .collect();

        Self { categories }
    }
}

impl ContentSource for NewsSource {
    fn category(&self, index: usize) -> &NewsCategory {
        &self.categories[index]
    }

    fn category_count(&self) -> usize {
        self.categories.len()
    }
}

/// Builds one article from the word tables.
///
/// The generator is seeded from the article's address so the same text is
/// produced for the same `(category, article)` pair on every run.
fn fabricate_article(category_index: usize, article_index: usize) -> NewsArticle {
    let seed = ((category_index as u64) << 32) | article_index as u64;
    let mut rng = StdRng::seed_from_u64(seed);
    let topics = &TOPIC_WORDS[category_index];

    let headline = fabricate_headline(&mut rng, topics);

    let paragraphs: Vec<String> = (0..rng.random_range(3..6))
        .map(|_| fabricate_paragraph(&mut rng, topics))
        .collect();

    NewsArticle {
        headline,
        body: paragraphs.join("\n\n"),
    }
}

fn fabricate_headline(rng: &mut StdRng, topics: &[&str]) -> String {
    let mut words = vec![topics[rng.random_range(0..topics.len())]];
    for _ in 0..rng.random_range(3..6) {
        words.push(FILLER_WORDS[rng.random_range(0..FILLER_WORDS.len())]);
    }
    capitalize(&words.join(" "))
}

fn fabricate_paragraph(rng: &mut StdRng, topics: &[&str]) -> String {
    let sentences: Vec<String> = (0..rng.random_range(2..5))
        .map(|_| {
            let mut words = Vec::new();
            for _ in 0..rng.random_range(8..16) {
                // Mix a topic word in roughly every fourth position.
                if rng.random_range(0..4) == 0 {
                    words.push(topics[rng.random_range(0..topics.len())]);
                } else {
                    words.push(FILLER_WORDS[rng.random_range(0..FILLER_WORDS.len())]);
                }
            }
            format!("{}.", capitalize(&words.join(" ")))
        })
        .collect();
    sentences.join(" ")
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogue_has_one_category_per_title() {
        let source = NewsSource::new();
        assert_eq!(source.category_count(), CATEGORY_TITLES.len());
    }

    #[test]
    fn every_category_is_non_empty() {
        let source = NewsSource::new();
        for index in 0..source.category_count() {
            assert_eq!(
                source.category(index).articles().len(),
                ARTICLES_PER_CATEGORY
            );
        }
    }

    #[test]
    fn articles_have_headline_and_body() {
        let source = NewsSource::new();
        let article = source.category(0).article(0);
        assert!(!article.headline.is_empty());
        assert!(!article.body.is_empty());
    }

    #[test]
    fn catalogue_is_stable_across_constructions() {
        let first = NewsSource::new();
        let second = NewsSource::new();
        for index in 0..first.category_count() {
            assert_eq!(first.category(index), second.category(index));
        }
    }
}
