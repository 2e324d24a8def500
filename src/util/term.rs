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

//! Terminal emulator styling helpers.
//!
//! Sets and resets the emulator's own background color through OSC
//! (Operating System Command) escape sequences, so the window matches the
//! application theme beyond the area ratatui paints. Requires an emulator
//! that honors OSC 11/111, which modern terminals do.

use std::io::{self, Write};

/// Sets the terminal background color to the given hex string (for example
/// `"#141a28"`) using an OSC 11 escape sequence. Flushes `stdout` so the
/// change applies immediately.
pub(crate) fn set_terminal_bg(hex_color: &str) {
    print!("\x1b]11;{}\x07", hex_color);
    io::stdout().flush().ok();
}

/// Reverts the terminal background to the user's own configuration (OSC
/// 111). Called during cleanup.
pub(crate) fn reset_terminal_bg() {
    print!("\x1b]111\x07");
    io::stdout().flush().ok();
}
