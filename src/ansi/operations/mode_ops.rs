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

//! `CSI h`/`CSI l` SM/RM and their `?`-prefixed DEC private-mode variants
//! (`spec.md` §4.B).

use crate::ansi::CsiParams;
use crate::attr::{CursorState, Mode};
use crate::screen::Terminal;

pub fn set(term: &mut Terminal, p: &CsiParams) { apply(term, p, true); }
pub fn reset(term: &mut Terminal, p: &CsiParams) { apply(term, p, false); }

fn apply(term: &mut Terminal, p: &CsiParams, on: bool) {
    for n in p.iter() {
        if p.private {
            apply_private(term, n, on);
        } else {
            apply_ansi(term, n, on);
        }
    }
}

fn apply_ansi(term: &mut Terminal, n: i64, on: bool) {
    match n {
        4 => term.mode.set(Mode::INSERT, on),
        20 => term.mode.set(Mode::CRLF, on),
        _ => {}
    }
}

fn apply_private(term: &mut Terminal, n: i64, on: bool) {
    match n {
        1 => term.mode.set(Mode::APPCURSOR, on),
        5 => term.mode.set(Mode::REVERSE, on),
        6 => term.set_origin_mode(on),
        7 => term.mode.set(Mode::WRAP, on),
        9 => term.set_mouse_mode_if(Mode::MOUSE_X10, on),
        25 => term.cursor.state.set(CursorState::VISIBLE, on),
        1000 => term.set_mouse_mode_if(Mode::MOUSE_BTN, on),
        1002 => term.set_mouse_mode_if(Mode::MOUSE_ANY, on),
        1004 => term.mode.set(Mode::FOCUS, on),
        1006 => term.mode.set(Mode::MOUSE_SGR, on),
        1049 => term.altscreen_1049(on),
        2004 => term.mode.set(Mode::BRCKTPASTE, on),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decset_1049_swaps_screen() {
        let mut term = Terminal::new(10, 10);
        let before = term.active;
        set(&mut term, &CsiParams::parse(b"?1049", None));
        assert_ne!(term.active, before);
        reset(&mut term, &CsiParams::parse(b"?1049", None));
        assert_eq!(term.active, before);
    }

    #[test]
    fn cursor_visibility_toggles() {
        let mut term = Terminal::new(10, 10);
        reset(&mut term, &CsiParams::parse(b"?25", None));
        assert!(!term.cursor.is_visible());
    }
}
