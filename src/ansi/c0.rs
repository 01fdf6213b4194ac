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

//! C0/C1 control-code dispatch (`spec.md` §4.B). Reached only when the
//! machine is in `Ground` (not mid-STR-accumulation — the caller filters
//! that case out first).

use crate::ansi::EscapeState;
use crate::attr::Mode;
use crate::events::{Event, StringKind};
use crate::screen::Terminal;

/// Handle one control rune. Returns `true` if it was recognized.
pub fn dispatch(term: &mut Terminal, rune: char) -> bool {
    match rune as u32 {
        0x07 => { term.events.push(Event::Bell); true } // BEL outside STR: just rings.
        0x08 => { // BS
            if term.cursor.x > 0 { term.cursor.x -= 1; }
            term.cursor.clear_wrapnext();
            true
        }
        0x09 => { term.tab_forward(1); true } // HT
        0x0A | 0x0B | 0x0C => { // LF/VT/FF
            term.newline(term.mode.contains(Mode::CRLF));
            true
        }
        0x0D => { term.cursor.x = 0; term.cursor.clear_wrapnext(); true } // CR
        0x1B => { term.esc_state = EscapeState::Escape; term.csi_buf.clear(); true } // ESC
        0x84 => { term.newline(false); true } // IND
        0x85 => { term.newline(true); true } // NEL
        0x88 => { term.set_tabstop_at_cursor(); true } // HTS
        0x8D => { term.reverse_index(); true } // RI
        0x90 => { start_str(term, StringKind::Dcs); true } // DCS
        0x9B => { term.esc_state = EscapeState::Csi; term.csi_buf.clear(); term.csi_intermediate = None; true } // CSI (8-bit)
        0x9D => { start_str(term, StringKind::Osc); true } // OSC
        0x9E => { start_str(term, StringKind::Pm); true } // PM
        0x9F => { start_str(term, StringKind::Apc); true } // APC
        _ => false,
    }
}

fn start_str(term: &mut Terminal, kind: StringKind) {
    term.esc_state = EscapeState::Str;
    term.str_kind = Some(kind);
    term.str_buf.clear();
    term.str_end = false;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bell_pushes_event() {
        let mut term = Terminal::new(10, 10);
        dispatch(&mut term, '\u{07}');
        assert_eq!(term.events.drain(), vec![Event::Bell]);
    }

    #[test]
    fn backspace_moves_left_and_clamps() {
        let mut term = Terminal::new(10, 10);
        dispatch(&mut term, '\u{08}');
        assert_eq!(term.cursor.x, 0);
    }
}
