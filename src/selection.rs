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

//! Selection engine (`spec.md` §4.D): word/line snap, regular vs.
//! rectangular selection, and text extraction.

use crate::screen::Terminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
    Regular,
    Rectangular,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionSnap {
    Char,
    Word,
    Line,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

/// A live or finished selection. `anchor` is where the gesture started,
/// `point` is the current end (may be before `anchor` in either axis).
#[derive(Debug, Clone, Copy)]
pub struct Selection {
    pub anchor: Point,
    pub point: Point,
    pub mode: SelectionMode,
    pub snap: SelectionSnap,
    active: bool,
}

impl Selection {
    pub fn start(x: usize, y: usize, mode: SelectionMode, snap: SelectionSnap) -> Self {
        Self { anchor: Point { x, y }, point: Point { x, y }, mode, snap, active: true }
    }

    pub fn extend(&mut self, x: usize, y: usize) {
        self.point = Point { x, y };
    }

    pub fn clear(&mut self) { self.active = false; }

    pub fn is_active(&self) -> bool { self.active }

    /// `(top-left, bottom-right)` in row-major order, independent of gesture
    /// direction.
    fn normalized(&self) -> (Point, Point) {
        let (a, b) = (self.anchor, self.point);
        if (a.y, a.x) <= (b.y, b.x) { (a, b) } else { (b, a) }
    }

    /// Snap `normalized()` outward to whole words/lines per `self.snap`
    /// (`spec.md` §4.D).
    fn snapped(&self, term: &Terminal) -> (Point, Point) {
        let (start, end) = self.normalized();
        match self.snap {
            SelectionSnap::Char => (start, end),
            SelectionSnap::Line => (Point { x: 0, y: start.y }, Point { x: term.cols.saturating_sub(1), y: end.y }),
            SelectionSnap::Word => {
                let s = word_start(term, start);
                let e = word_end(term, end);
                (s, e)
            }
        }
    }

    /// Whether cell `(x, y)` falls inside the selection, honoring
    /// regular-vs-rectangular shape (`spec.md` §4.D).
    pub fn contains(&self, term: &Terminal, x: usize, y: usize) -> bool {
        if !self.active {
            return false;
        }
        let (start, end) = self.snapped(term);
        if y < start.y || y > end.y {
            return false;
        }
        match self.mode {
            SelectionMode::Rectangular => x >= start.x.min(end.x) && x <= start.x.max(end.x),
            SelectionMode::Regular => {
                if start.y == end.y {
                    x >= start.x && x <= end.x
                } else if y == start.y {
                    x >= start.x
                } else if y == end.y {
                    x <= end.x
                } else {
                    true
                }
            }
        }
    }

    /// Extracted text, joining wrapped rows without a newline and otherwise
    /// inserting one per row (`spec.md` §4.D).
    pub fn get_text(&self, term: &Terminal) -> String {
        if !self.active {
            return String::new();
        }
        let (start, end) = self.snapped(term);
        let mut out = String::new();
        for y in start.y..=end.y {
            let Some(line) = term.get_line(y) else { continue };
            let row_range = match self.mode {
                SelectionMode::Rectangular => {
                    let s = start.x.min(end.x);
                    let e = start.x.max(end.x);
                    Some(s..=e.min(line.cols().saturating_sub(1)))
                }
                SelectionMode::Regular => {
                    let s = if y == start.y { start.x } else { 0 };
                    // An open-ended row (not the selection's last row) extends
                    // only to its effective content width, not the full
                    // terminal width, or every middle row would end in a run
                    // of trailing blanks.
                    let e = if y == end.y {
                        Some(end.x.min(line.cols().saturating_sub(1)))
                    } else {
                        line.effective_len().checked_sub(1)
                    };
                    e.filter(|&e| e >= s).map(|e| s..=e)
                }
            };
            if let Some(range) = row_range {
                for x in range {
                    let rune = line.get(x).rune;
                    if rune != '\0' {
                        out.push(rune);
                    }
                }
            }
            if y != end.y && !(self.mode == SelectionMode::Regular && line.is_wrapped()) {
                out.push('\n');
            }
        }
        out
    }

    /// Co-move the selection when `n` lines scroll off the top of the
    /// screen (`spec.md` §4.D "Selection ... moves with the content").
    pub fn scroll(&mut self, n: i64) {
        self.anchor.y = shift_row(self.anchor.y, n);
        self.point.y = shift_row(self.point.y, n);
    }
}

fn shift_row(y: usize, n: i64) -> usize {
    (y as i64 - n).max(0) as usize
}

fn is_word_char(term: &Terminal, rune: char) -> bool {
    rune != ' ' && !term.config.delimiters.contains(rune)
}

fn word_start(term: &Terminal, p: Point) -> Point {
    let Some(line) = term.get_line(p.y) else { return p };
    let mut x = p.x;
    while x > 0 && is_word_char(term, line.get(x - 1).rune) {
        x -= 1;
    }
    Point { x, y: p.y }
}

fn word_end(term: &Terminal, p: Point) -> Point {
    let Some(line) = term.get_line(p.y) else { return p };
    let mut x = p.x;
    let last = line.cols().saturating_sub(1);
    while x < last && is_word_char(term, line.get(x + 1).rune) {
        x += 1;
    }
    Point { x, y: p.y }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glyph::Glyph;

    fn fill(term: &mut Terminal, row: usize, text: &str) {
        for (x, ch) in text.chars().enumerate() {
            term.active_screen_mut()[row].set(x, Glyph { rune: ch, ..Glyph::default() });
        }
    }

    #[test]
    fn regular_selection_spans_full_middle_rows() {
        let mut term = Terminal::new(10, 3);
        fill(&mut term, 0, "hello");
        fill(&mut term, 1, "world");
        let sel = Selection::start(2, 0, SelectionMode::Regular, SelectionSnap::Char);
        let mut sel = sel;
        sel.extend(2, 1);
        assert!(sel.contains(&term, 9, 0));
        assert!(!sel.contains(&term, 9, 1));
    }

    #[test]
    fn rectangular_selection_is_a_fixed_column_band() {
        let mut term = Terminal::new(10, 3);
        fill(&mut term, 0, "hello");
        fill(&mut term, 1, "world");
        let mut sel = Selection::start(1, 0, SelectionMode::Rectangular, SelectionSnap::Char);
        sel.extend(3, 1);
        assert!(sel.contains(&term, 2, 1));
        assert!(!sel.contains(&term, 4, 1));
    }

    #[test]
    fn word_snap_expands_to_whole_word() {
        let mut term = Terminal::new(10, 1);
        fill(&mut term, 0, "hi there");
        let mut sel = Selection::start(4, 0, SelectionMode::Regular, SelectionSnap::Word);
        sel.extend(4, 0);
        let text = sel.get_text(&term);
        assert_eq!(text, "there");
    }

    #[test]
    fn scroll_shifts_rows_down_toward_zero() {
        let mut sel = Selection::start(0, 5, SelectionMode::Regular, SelectionSnap::Char);
        sel.extend(0, 6);
        sel.scroll(2);
        assert_eq!(sel.anchor.y, 3);
        assert_eq!(sel.point.y, 4);
    }
}
