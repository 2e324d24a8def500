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

//! Application configuration and persisted session state.
//!
//! Two files live under the same `confy` application name: the configuration
//! proper, and a `session` profile holding the category/article selection
//! that survives across runs. The session keeps the wire form of the
//! selection as two integers, with `-1` meaning "no article selected", and
//! converts to the in-memory optional at the boundary.

use serde::{Deserialize, Serialize};
use thiserror::Error;

const CONFIG_NAME: &str = "newsdeck";
const SESSION_PROFILE: &str = "session";

/// Persisted article index meaning "no selection yet".
const NO_ARTICLE: i64 = -1;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub(crate) struct AppConfig {
    pub(crate) version: u32,
    /// Minimum terminal column count for the dual-pane layout.
    pub(crate) dual_pane_min_columns: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            dual_pane_min_columns: 110,
        }
    }
}

/// The selection carried across sessions and across pane-mode rebuilds.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub(crate) struct SessionState {
    pub(crate) version: u32,
    pub(crate) category_index: usize,
    article_index: i64,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            version: 1,
            category_index: 0,
            article_index: NO_ARTICLE,
        }
    }
}

impl SessionState {
    /// Snapshots a controller's selection for persistence.
    pub(crate) fn capture(category_index: usize, article_index: Option<usize>) -> Self {
        Self {
            version: 1,
            category_index,
            article_index: article_index.map_or(NO_ARTICLE, |index| index as i64),
        }
    }

    /// The stored article selection, `None` when the sentinel is persisted.
    pub(crate) fn article_selection(&self) -> Option<usize> {
        (self.article_index >= 0).then_some(self.article_index as usize)
    }
}

#[derive(Debug, Error)]
pub(crate) enum SessionError {
    #[error("failed to access the session store: {0}")]
    Store(#[from] confy::ConfyError),
}

pub(crate) fn load_config() -> AppConfig {
    confy::load(CONFIG_NAME, None).unwrap_or_default()
}

pub(crate) fn load_session() -> SessionState {
    confy::load(CONFIG_NAME, Some(SESSION_PROFILE)).unwrap_or_default()
}

pub(crate) fn save_session(session: &SessionState) -> Result<(), SessionError> {
    confy::store(CONFIG_NAME, Some(SESSION_PROFILE), session)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capture_keeps_a_real_selection() {
        let session = SessionState::capture(2, Some(5));
        assert_eq!(session.category_index, 2);
        assert_eq!(session.article_selection(), Some(5));
    }

    #[test]
    fn capture_maps_no_selection_to_the_sentinel() {
        let session = SessionState::capture(1, None);
        assert_eq!(session.article_index, NO_ARTICLE);
        assert_eq!(session.article_selection(), None);
    }

    #[test]
    fn default_session_starts_unselected_at_the_first_category() {
        let session = SessionState::default();
        assert_eq!(session.category_index, 0);
        assert_eq!(session.article_selection(), None);
    }
}
