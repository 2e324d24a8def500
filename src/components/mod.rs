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

//! Interactive view components.
//!
//! Each component pairs a state struct with a render module. State is
//! mutated only by the event loop as display commands and key events are
//! applied; rendering reads it back every frame.

pub(crate) mod article;
pub(crate) mod chooser;
pub(crate) mod headlines;

pub(crate) use article::ArticleView;
pub(crate) use chooser::CategoryChooser;
pub(crate) use headlines::HeadlinesView;
