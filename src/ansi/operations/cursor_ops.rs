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

//! Cursor-movement CSI final bytes: `A B C D E F G H f I Z \` a d e`.

use crate::ansi::CsiParams;
use crate::events::Event;
use crate::screen::Terminal;

pub fn cuu(term: &mut Terminal, p: &CsiParams) {
    let n = p.get(0, 1).max(1) as usize;
    term.cursor.y = term.cursor.y.saturating_sub(n).max(term.scroll_top);
    term.cursor.clear_wrapnext();
}

pub fn cud(term: &mut Terminal, p: &CsiParams) {
    let n = p.get(0, 1).max(1) as usize;
    term.cursor.y = (term.cursor.y + n).min(term.scroll_bot);
    term.cursor.clear_wrapnext();
}

pub fn cuf(term: &mut Terminal, p: &CsiParams) {
    let n = p.get(0, 1).max(1) as usize;
    term.cursor.x = (term.cursor.x + n).min(term.cols - 1);
    term.cursor.clear_wrapnext();
}

pub fn cub(term: &mut Terminal, p: &CsiParams) {
    let n = p.get(0, 1).max(1) as usize;
    term.cursor.x = term.cursor.x.saturating_sub(n);
    term.cursor.clear_wrapnext();
}

pub fn cnl(term: &mut Terminal, p: &CsiParams) {
    let n = p.get(0, 1).max(1) as usize;
    term.cursor.y = (term.cursor.y + n).min(term.rows - 1);
    term.cursor.x = 0;
    term.cursor.clear_wrapnext();
}

pub fn cpl(term: &mut Terminal, p: &CsiParams) {
    let n = p.get(0, 1).max(1) as usize;
    term.cursor.y = term.cursor.y.saturating_sub(n);
    term.cursor.x = 0;
    term.cursor.clear_wrapnext();
}

pub fn cha(term: &mut Terminal, p: &CsiParams) {
    let n = (p.get(0, 1).max(1) - 1) as usize;
    term.cursor.x = n.min(term.cols - 1);
    term.cursor.clear_wrapnext();
}

/// `CSI H`/`CSI f` CUP: 1-based row;col, relative to the scroll region when
/// ORIGIN mode is set (`spec.md` §4.B).
pub fn cup(term: &mut Terminal, p: &CsiParams) {
    let row = (p.get(0, 1).max(1) - 1) as usize;
    let col = (p.get(1, 1).max(1) - 1) as usize;
    term.move_to(col, row);
}

pub fn cht(term: &mut Terminal, p: &CsiParams) {
    term.tab_forward(p.get(0, 1).max(1) as usize);
}

pub fn cbt(term: &mut Terminal, p: &CsiParams) {
    term.tab_backward(p.get(0, 1).max(1) as usize);
}

pub fn hpa(term: &mut Terminal, p: &CsiParams) {
    cha(term, p);
}

pub fn hpr(term: &mut Terminal, p: &CsiParams) {
    cuf(term, p);
}

pub fn vpa(term: &mut Terminal, p: &CsiParams) {
    let n = (p.get(0, 1).max(1) - 1) as usize;
    term.move_to(term.cursor.x, n);
}

pub fn vpr(term: &mut Terminal, p: &CsiParams) {
    cud(term, p);
}

/// `CSI c` DA: report "I am a VT102-class terminal with Kitty graphics"
/// (`spec.md` §4.B, §6).
pub fn da(term: &mut Terminal) {
    term.events.push(Event::Response(b"\x1b[?62;22c".to_vec()));
}

/// `CSI n` DSR: `6` asks for the cursor position.
pub fn dsr(term: &mut Terminal, p: &CsiParams) {
    if p.get(0, 0) == 6 {
        let reply = format!("\x1b[{};{}R", term.cursor.y + 1, term.cursor.x + 1);
        term.events.push(Event::Response(reply.into_bytes()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cup_is_one_based() {
        let mut term = Terminal::new(80, 24);
        cup(&mut term, &CsiParams::parse(b"5;10", None));
        assert_eq!((term.cursor.x, term.cursor.y), (9, 4));
    }

    #[test]
    fn dsr_six_reports_cursor_position() {
        let mut term = Terminal::new(80, 24);
        dsr(&mut term, &CsiParams::parse(b"6", None));
        let events = term.events.drain();
        assert_eq!(events.len(), 1);
    }
}
