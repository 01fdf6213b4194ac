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

//! Glyph & Line store (`spec.md` §4.A): a row of cells, fixed at the
//! terminal's column count, with a dirty flag and a WRAP-preserving resize.

use smallvec::SmallVec;

use crate::attr::Attr;
use crate::color::Color;
use crate::glyph::Glyph;

/// Rows up to this width live inline; wider rows spill to the heap. Chosen to
/// cover the common 80/120-column case without an allocation per line.
const INLINE_COLS: usize = 128;

/// A single row of the grid.
#[derive(Debug, Clone)]
pub struct Line {
    cells: SmallVec<[Glyph; INLINE_COLS]>,
    dirty: bool,
}

impl Line {
    /// Allocate a row of `cols` blank cells.
    pub fn new(cols: usize) -> Self {
        Self { cells: SmallVec::from_elem(Glyph::default(), cols), dirty: true }
    }

    pub fn cols(&self) -> usize { self.cells.len() }

    pub fn is_dirty(&self) -> bool { self.dirty }
    pub fn mark_dirty(&mut self) { self.dirty = true; }
    pub fn clear_dirty(&mut self) { self.dirty = false; }

    pub fn get(&self, x: usize) -> &Glyph { &self.cells[x] }
    pub fn get_mut(&mut self, x: usize) -> &mut Glyph {
        self.dirty = true;
        &mut self.cells[x]
    }

    pub fn set(&mut self, x: usize, glyph: Glyph) {
        self.cells[x] = glyph;
        self.dirty = true;
    }

    pub fn cells(&self) -> &[Glyph] { &self.cells }

    /// Resize in place, truncating or padding with default blanks
    /// (`spec.md` §4.A: "resize preserves content column-wise").
    pub fn resize(&mut self, cols: usize) {
        self.cells.resize(cols, Glyph::default());
        self.dirty = true;
    }

    /// Whether the line's last cell carries WRAP (the logical line continues
    /// on the next row).
    pub fn is_wrapped(&self) -> bool {
        self.cells.last().is_some_and(|g| g.attr.contains(Attr::WRAP))
    }

    pub fn set_wrapped(&mut self, wrapped: bool) {
        if let Some(last) = self.cells.last_mut() {
            last.attr.set(Attr::WRAP, wrapped);
            self.dirty = true;
        }
    }

    /// "Effective length" (`spec.md` §4.A): `cols` if wrapped, else the index
    /// just past the last non-space cell.
    pub fn effective_len(&self) -> usize {
        if self.is_wrapped() {
            return self.cols();
        }
        for i in (0..self.cols()).rev() {
            if self.cells[i].rune != ' ' {
                return i + 1;
            }
        }
        0
    }

    /// Shift `[x, cols-n)` right to `[x+n, cols)` and fill `[x, x+n)` with
    /// blanks carrying `fg`/`bg` (`spec.md` §4.A `insert_blanks`).
    pub fn insert_blanks(&mut self, x: usize, n: usize, fg: Color, bg: Color) {
        let cols = self.cols();
        if x >= cols {
            return;
        }
        let n = n.min(cols - x);
        for i in (x + n..cols).rev() {
            self.cells[i] = self.cells[i - n];
        }
        for i in x..x + n {
            self.cells[i] = Glyph::blank(fg, bg);
        }
        self.dirty = true;
    }

    /// Shift `[x+n, cols)` left to `[x, cols-n)` and pad the tail with
    /// blanks (`spec.md` §4.A `delete_chars`).
    pub fn delete_chars(&mut self, x: usize, n: usize, fg: Color, bg: Color) {
        let cols = self.cols();
        if x >= cols {
            return;
        }
        let n = n.min(cols - x);
        for i in x..cols - n {
            self.cells[i] = self.cells[i + n];
        }
        for i in cols - n..cols {
            self.cells[i] = Glyph::blank(fg, bg);
        }
        self.dirty = true;
    }

    /// Clear `[x, x+n)` with blanks carrying `fg`/`bg`, without moving any
    /// other cell (`spec.md` §4.B `ECH`).
    pub fn erase_range(&mut self, x: usize, n: usize, fg: Color, bg: Color) {
        let cols = self.cols();
        let end = (x + n).min(cols);
        for i in x.min(cols)..end {
            self.cells[i] = Glyph::blank(fg, bg);
        }
        self.dirty = true;
    }

    /// Clear a WIDE/WDUMMY pair if `x` is part of one, per the invariant in
    /// `spec.md` §3 ("clearing either must clear the pair").
    pub fn clear_wide_pair(&mut self, x: usize) {
        let cols = self.cols();
        if x < cols && self.cells[x].attr.contains(Attr::WIDE) && x + 1 < cols {
            self.cells[x + 1] = Glyph::default();
        } else if x < cols && self.cells[x].attr.contains(Attr::WDUMMY) && x > 0 {
            self.cells[x - 1] = Glyph::default();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_line_has_cols_blanks() {
        let line = Line::new(10);
        assert_eq!(line.cols(), 10);
        assert_eq!(line.effective_len(), 0);
    }

    #[test]
    fn resize_truncates_and_pads() {
        let mut line = Line::new(10);
        line.set(9, Glyph { rune: 'x', ..Glyph::default() });
        line.resize(5);
        assert_eq!(line.cols(), 5);
        line.resize(8);
        assert_eq!(line.cols(), 8);
        assert_eq!(line.get(7).rune, ' ');
    }

    #[test]
    fn insert_blanks_shifts_right() {
        let mut line = Line::new(5);
        for i in 0..5 {
            line.set(i, Glyph { rune: (b'a' + i as u8) as char, ..Glyph::default() });
        }
        line.insert_blanks(1, 2, Color::default_fg(), Color::default_bg());
        assert_eq!(line.get(0).rune, 'a');
        assert_eq!(line.get(1).rune, ' ');
        assert_eq!(line.get(2).rune, ' ');
        assert_eq!(line.get(3).rune, 'b');
        assert_eq!(line.get(4).rune, 'c');
    }

    #[test]
    fn delete_chars_shifts_left_and_pads() {
        let mut line = Line::new(5);
        for i in 0..5 {
            line.set(i, Glyph { rune: (b'a' + i as u8) as char, ..Glyph::default() });
        }
        line.delete_chars(1, 2, Color::default_fg(), Color::default_bg());
        assert_eq!(line.get(1).rune, 'd');
        assert_eq!(line.get(2).rune, 'e');
        assert_eq!(line.get(3).rune, ' ');
        assert_eq!(line.get(4).rune, ' ');
    }

    #[test]
    fn effective_len_reports_wrap_as_full_width() {
        let mut line = Line::new(5);
        line.set_wrapped(true);
        assert_eq!(line.effective_len(), 5);
    }

    #[test]
    fn clear_wide_pair_clears_both_cells() {
        let mut line = Line::new(5);
        line.set(2, Glyph { rune: '中', attr: Attr::WIDE, ..Glyph::default() });
        line.set(3, Glyph { rune: '\0', attr: Attr::WDUMMY, ..Glyph::default() });
        line.clear_wide_pair(2);
        assert!(line.get(3).is_empty_cell());
    }
}
