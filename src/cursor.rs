/*
 *   Licensed under the Apache License, Version 2.0 (the "License");
 *   you may not use this file except in compliance with the License.
 *   You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 *   Unless required by applicable law or agreed to in writing, software
 *   distributed under the License is distributed on an "AS IS" BASIS,
 *   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *   See the License for the specific language governing permissions and
 *   limitations under the License.
 */

//! Cursor position, active glyph template, shape and state (`spec.md` §3).

use crate::attr::{Attr, CursorState};
use crate::charset::CharsetState;
use crate::color::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorShape {
    #[default]
    Block,
    Underline,
    Bar,
}

impl CursorShape {
    /// Decode the DECSCUSR (`CSI N q`) parameter (`spec.md` §4.B).
    pub fn from_decscusr(n: i64) -> Self {
        match n {
            0 | 1 | 2 => CursorShape::Block,
            3 | 4 => CursorShape::Underline,
            5 | 6 => CursorShape::Bar,
            _ => CursorShape::Block,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub x: usize,
    pub y: usize,
    pub attr: Attr,
    pub fg: Color,
    pub bg: Color,
    pub shape: CursorShape,
    pub state: CursorState,
}

impl Cursor {
    pub fn new() -> Self {
        Self {
            x: 0,
            y: 0,
            attr: Attr::empty(),
            fg: Color::default_fg(),
            bg: Color::default_bg(),
            shape: CursorShape::default(),
            state: CursorState::VISIBLE,
        }
    }

    pub fn is_visible(&self) -> bool { self.state.contains(CursorState::VISIBLE) }
    pub fn wrapnext(&self) -> bool { self.state.contains(CursorState::WRAPNEXT) }

    pub fn clear_wrapnext(&mut self) { self.state.remove(CursorState::WRAPNEXT); }
    pub fn set_wrapnext(&mut self) { self.state.insert(CursorState::WRAPNEXT); }
}

impl Default for Cursor {
    fn default() -> Self { Self::new() }
}

/// A saved-cursor slot, one per screen (`spec.md` §3).
#[derive(Debug, Clone, Copy)]
pub struct SavedCursor {
    pub cursor: Cursor,
    pub charset: CharsetState,
}

impl SavedCursor {
    pub fn capture(cursor: &Cursor, charset: &CharsetState) -> Self {
        Self { cursor: *cursor, charset: *charset }
    }

    /// Restore onto `cursor`/`charset`, clearing WRAPNEXT the way a direct
    /// cursor move would (`spec.md` §8 round-trip property).
    pub fn restore(&self, cursor: &mut Cursor, charset: &mut CharsetState) {
        *cursor = self.cursor;
        cursor.clear_wrapnext();
        *charset = self.charset;
    }
}
