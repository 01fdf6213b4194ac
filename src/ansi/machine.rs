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

//! Byte-level entry point: UTF-8 decode, then drive the escape-sequence
//! state machine one rune at a time (`spec.md` §4.B).

use crate::ansi::operations::{cursor_ops, erase_ops, line_ops, mode_ops, scroll_ops, sgr_ops, tab_ops};
use crate::ansi::{c0, osc, CsiParams, EscapeState};
use crate::attr::CursorState;
use crate::charset::Charset;
use crate::events::StringKind;
use crate::screen::{Terminal, CSI_BUF_CAP, STR_BUF_CAP};

/// Feed a chunk of raw bytes through UTF-8 decoding and the state machine.
pub fn feed(term: &mut Terminal, bytes: &[u8]) {
    let runes = term.utf8.feed(bytes);
    for rune in runes {
        process_rune(term, rune);
    }
}

fn is_control(rune: char) -> bool {
    matches!(rune as u32, 0x00..=0x1F | 0x7F | 0x80..=0x9F)
}

fn process_rune(term: &mut Terminal, rune: char) {
    if term.esc_state == EscapeState::Str {
        process_str_byte(term, rune);
        return;
    }

    if is_control(rune) && c0::dispatch(term, rune) {
        return;
    }

    match term.esc_state {
        EscapeState::Ground => term.put_char(rune),
        EscapeState::Escape => process_escape_byte(term, rune),
        EscapeState::Csi => process_csi_byte(term, rune),
        EscapeState::Altcharset { slot } => process_altcharset_byte(term, slot, rune),
        EscapeState::Test => process_test_byte(term, rune),
        EscapeState::Utf8Toggle => process_utf8_toggle_byte(term, rune),
        EscapeState::Str => unreachable!("handled above"),
    }
}

fn process_escape_byte(term: &mut Terminal, rune: char) {
    term.esc_state = EscapeState::Ground;
    match rune {
        '[' => {
            term.esc_state = EscapeState::Csi;
            term.csi_buf.clear();
            term.csi_intermediate = None;
        }
        ']' => start_str(term, StringKind::Osc),
        'P' => start_str(term, StringKind::Dcs),
        '^' => start_str(term, StringKind::Pm),
        '_' => start_str(term, StringKind::Apc),
        '(' => term.esc_state = EscapeState::Altcharset { slot: 0 },
        ')' => term.esc_state = EscapeState::Altcharset { slot: 1 },
        '*' => term.esc_state = EscapeState::Altcharset { slot: 2 },
        '+' => term.esc_state = EscapeState::Altcharset { slot: 3 },
        '#' => term.esc_state = EscapeState::Test,
        '%' => term.esc_state = EscapeState::Utf8Toggle,
        'D' => term.newline(false),
        'E' => term.newline(true),
        'H' => term.set_tabstop_at_cursor(),
        'M' => term.reverse_index(),
        'Z' => cursor_ops::da(term),
        'c' => *term = Terminal::with_config(term.cols, term.rows, term.config.clone()),
        '7' => term.cursor_save(),
        '8' => term.cursor_restore(),
        'n' => term.charset.invoke_gl(2),
        'o' => term.charset.invoke_gl(3),
        _ => {}
    }
}

fn start_str(term: &mut Terminal, kind: StringKind) {
    term.esc_state = EscapeState::Str;
    term.str_kind = Some(kind);
    term.str_buf.clear();
    term.str_end = false;
}

fn process_str_byte(term: &mut Terminal, rune: char) {
    match rune as u32 {
        0x07 | 0x18 | 0x1A => finalize_str(term),
        0x1B if !term.str_end => term.str_end = true,
        _ if term.str_end => {
            // Anything other than `\` after ESC aborts the string silently.
            let dispatch_first = rune == '\\';
            if dispatch_first {
                finalize_str(term);
            } else {
                term.esc_state = EscapeState::Ground;
                term.str_end = false;
            }
        }
        _ => {
            if term.str_buf.len() + 4 <= STR_BUF_CAP {
                let mut encoded = [0u8; 4];
                let bytes = rune.encode_utf8(&mut encoded).as_bytes();
                term.str_buf.extend_from_slice(bytes);
            }
        }
    }
}

fn finalize_str(term: &mut Terminal) {
    term.esc_state = EscapeState::Ground;
    term.str_end = false;
    let kind = term.str_kind.take();
    let body = std::mem::take(&mut term.str_buf);
    if let Some(kind) = kind {
        osc::finalize(term, kind, &body);
    }
}

fn process_csi_byte(term: &mut Terminal, rune: char) {
    let Ok(byte) = u8::try_from(rune as u32) else {
        term.esc_state = EscapeState::Ground;
        return;
    };
    match byte {
        0x20..=0x2F => term.csi_intermediate = Some(byte),
        0x30..=0x3F => {
            if term.csi_buf.len() < CSI_BUF_CAP {
                term.csi_buf.push(byte);
            }
        }
        0x40..=0x7E => {
            term.esc_state = EscapeState::Ground;
            let params = CsiParams::parse(&term.csi_buf, term.csi_intermediate.take());
            term.csi_buf.clear();
            dispatch_csi(term, byte, &params);
        }
        _ => term.esc_state = EscapeState::Ground,
    }
}

fn dispatch_csi(term: &mut Terminal, final_byte: u8, p: &CsiParams) {
    match final_byte {
        b'A' => cursor_ops::cuu(term, p),
        b'B' | b'e' => cursor_ops::cud(term, p),
        b'C' | b'a' => cursor_ops::cuf(term, p),
        b'D' => cursor_ops::cub(term, p),
        b'E' => cursor_ops::cnl(term, p),
        b'F' => cursor_ops::cpl(term, p),
        b'G' | b'`' => cursor_ops::cha(term, p),
        b'H' | b'f' => cursor_ops::cup(term, p),
        b'I' => cursor_ops::cht(term, p),
        b'J' => erase_ops::ed(term, p),
        b'K' => erase_ops::el(term, p),
        b'L' => line_ops::il(term, p),
        b'M' => line_ops::dl(term, p),
        b'P' => erase_ops::dch(term, p),
        b'S' => scroll_ops::su(term, p),
        b'T' => scroll_ops::sd(term, p),
        b'X' => erase_ops::ech(term, p),
        b'Z' => cursor_ops::cbt(term, p),
        b'@' => erase_ops::ich(term, p),
        b'b' => term.repeat_last(p.get(0, 1).max(1) as usize),
        b'c' => cursor_ops::da(term),
        b'd' => cursor_ops::vpa(term, p),
        b'g' => tab_ops::tbc(term, p),
        b'h' => mode_ops::set(term, p),
        b'l' => mode_ops::reset(term, p),
        b'm' => sgr_ops::apply(term, p),
        b'n' => cursor_ops::dsr(term, p),
        b'q' if p.intermediate == Some(b' ') => {
            term.cursor.shape = crate::cursor::CursorShape::from_decscusr(p.get(0, 0));
        }
        b'r' => scroll_ops::decstbm(term, p),
        b's' => term.cursor_save(),
        b'u' => term.cursor_restore(),
        _ => {}
    }
}

fn process_altcharset_byte(term: &mut Terminal, slot: usize, rune: char) {
    term.esc_state = EscapeState::Ground;
    let charset = if rune == '0' { Charset::DecSpecialGraphics } else { Charset::Ascii };
    term.charset.set_slot(slot, charset);
}

fn process_test_byte(term: &mut Terminal, rune: char) {
    term.esc_state = EscapeState::Ground;
    if rune == '8' {
        term.decaln();
    }
}

fn process_utf8_toggle_byte(term: &mut Terminal, rune: char) {
    term.esc_state = EscapeState::Ground;
    use crate::attr::Mode;
    match rune {
        'G' => term.mode.insert(Mode::UTF8),
        '@' => term.mode.remove(Mode::UTF8),
        _ => {}
    }
}

/// Whether the cursor is currently showing as hidden via `ESC[?25l`, used by
/// hosts rendering the cursor overlay themselves.
pub fn cursor_hidden(term: &Terminal) -> bool { !term.cursor.state.contains(CursorState::VISIBLE) }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sgr_and_text_apply_attribute_then_print() {
        let mut term = Terminal::new(20, 5);
        feed(&mut term, b"\x1b[1;31mHi");
        let g0 = term.get_glyph(0, 0).unwrap();
        assert_eq!(g0.rune, 'H');
        assert!(g0.attr.contains(crate::attr::Attr::BOLD));
    }

    #[test]
    fn cup_moves_cursor_one_based() {
        let mut term = Terminal::new(20, 5);
        feed(&mut term, b"\x1b[2;3H");
        assert_eq!((term.cursor.x, term.cursor.y), (2, 1));
    }

    #[test]
    fn decaln_fills_screen_with_e() {
        let mut term = Terminal::new(5, 2);
        feed(&mut term, b"\x1b#8");
        assert_eq!(term.get_glyph(0, 0).unwrap().rune, 'E');
        assert_eq!(term.get_glyph(4, 1).unwrap().rune, 'E');
    }

    #[test]
    fn osc_title_is_queued_as_event() {
        let mut term = Terminal::new(20, 5);
        feed(&mut term, b"\x1b]0;hello\x07");
        assert!(!term.events.is_empty());
    }

    #[test]
    fn wide_char_wraps_at_last_column() {
        let mut term = Terminal::new(5, 3);
        feed(&mut term, "aaaa中".as_bytes());
        // 'a' x4 fills columns 0..3, leaving column 4; the wide char can't
        // split so it wraps to the next row entirely.
        assert_eq!(term.cursor.y, 1);
        assert_eq!(term.get_glyph(0, 1).unwrap().rune, '中');
    }

    #[test]
    fn altscreen_1049_restores_cursor_on_exit() {
        let mut term = Terminal::new(10, 5);
        feed(&mut term, b"hello");
        let pos_before = (term.cursor.x, term.cursor.y);
        feed(&mut term, b"\x1b[?1049h");
        feed(&mut term, b"\x1b[?1049l");
        assert_eq!((term.cursor.x, term.cursor.y), pos_before);
        assert_eq!(term.get_glyph(0, 0).unwrap().rune, 'h');
    }
}
