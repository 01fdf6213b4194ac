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

//! Erase/insert/delete-character CSI families: `J K X @ P` (`spec.md` §4.B).

use crate::ansi::CsiParams;
use crate::screen::Terminal;

pub fn ed(term: &mut Terminal, p: &CsiParams) { term.erase_display(p.get(0, 0)); }
pub fn el(term: &mut Terminal, p: &CsiParams) { term.erase_line(p.get(0, 0)); }

/// `CSI X` ECH: clear `n` cells starting at the cursor, no shifting.
pub fn ech(term: &mut Terminal, p: &CsiParams) {
    let n = p.get(0, 1).max(1) as usize;
    let (x, y) = (term.cursor.x, term.cursor.y);
    let (fg, bg) = (term.cursor.fg, term.cursor.bg);
    if let Some(line) = term.active_screen_mut().get_mut(y) {
        line.erase_range(x, n, fg, bg);
    }
}

/// `CSI @` ICH: insert `n` blanks at the cursor, shifting the remainder
/// right.
pub fn ich(term: &mut Terminal, p: &CsiParams) {
    let n = p.get(0, 1).max(1) as usize;
    let (x, y) = (term.cursor.x, term.cursor.y);
    let (fg, bg) = (term.cursor.fg, term.cursor.bg);
    if let Some(line) = term.active_screen_mut().get_mut(y) {
        line.insert_blanks(x, n, fg, bg);
    }
}

/// `CSI P` DCH: delete `n` cells at the cursor, shifting the remainder left.
pub fn dch(term: &mut Terminal, p: &CsiParams) {
    let n = p.get(0, 1).max(1) as usize;
    let (x, y) = (term.cursor.x, term.cursor.y);
    let (fg, bg) = (term.cursor.fg, term.cursor.bg);
    if let Some(line) = term.active_screen_mut().get_mut(y) {
        line.delete_chars(x, n, fg, bg);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ech_clears_without_shifting() {
        use crate::glyph::Glyph;
        let mut term = Terminal::new(5, 1);
        for i in 0..5 {
            term.active_screen_mut()[0].set(i, Glyph { rune: 'x', ..Glyph::default() });
        }
        ech(&mut term, &CsiParams::parse(b"2", None));
        assert_eq!(term.get_glyph(0, 0).unwrap().rune, ' ');
        assert_eq!(term.get_glyph(2, 0).unwrap().rune, 'x');
    }
}
