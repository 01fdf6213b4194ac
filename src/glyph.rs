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

//! A single terminal cell (`spec.md` §3).

use crate::attr::Attr;
use crate::color::Color;

/// One grid cell: a rune plus its rendition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    /// Unicode scalar; `'\0'` marks an empty/dummy cell.
    pub rune: char,
    pub attr: Attr,
    pub fg: Color,
    pub bg: Color,
}

impl Glyph {
    /// A blank cell carrying the given fg/bg (the "current cursor template"
    /// used by `insert_blanks`/erase operations).
    pub fn blank(fg: Color, bg: Color) -> Self {
        Self { rune: ' ', attr: Attr::empty(), fg, bg }
    }

    pub fn is_empty_cell(&self) -> bool { self.rune == '\0' }
}

impl Default for Glyph {
    fn default() -> Self {
        Self {
            rune: ' ',
            attr: Attr::empty(),
            fg: Color::default_fg(),
            bg: Color::default_bg(),
        }
    }
}
