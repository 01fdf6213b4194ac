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

//! `CSI m` SGR: classic attribute/color codes plus the 256-color and
//! 24-bit-RGB extensions (`spec.md` §4.B).

use crate::ansi::CsiParams;
use crate::attr::Attr;
use crate::color::Color;
use crate::screen::Terminal;

pub fn apply(term: &mut Terminal, p: &CsiParams) {
    if p.is_empty() {
        term.cursor.attr = Attr::empty();
        term.cursor.fg = Color::default_fg();
        term.cursor.bg = Color::default_bg();
        return;
    }

    let values: Vec<i64> = p.iter().collect();
    let mut i = 0;
    while i < values.len() {
        match values[i] {
            0 => {
                term.cursor.attr = Attr::empty();
                term.cursor.fg = Color::default_fg();
                term.cursor.bg = Color::default_bg();
            }
            1 => term.cursor.attr.insert(Attr::BOLD),
            2 => term.cursor.attr.insert(Attr::FAINT),
            3 => term.cursor.attr.insert(Attr::ITALIC),
            4 => term.cursor.attr.insert(Attr::UNDERLINE),
            5 | 6 => term.cursor.attr.insert(Attr::BLINK),
            7 => term.cursor.attr.insert(Attr::REVERSE),
            8 => term.cursor.attr.insert(Attr::INVISIBLE),
            9 => term.cursor.attr.insert(Attr::STRUCK),
            21 => term.cursor.attr.insert(Attr::DUNDERLINE),
            22 => term.cursor.attr.remove(Attr::BOLD | Attr::FAINT),
            23 => term.cursor.attr.remove(Attr::ITALIC),
            24 => term.cursor.attr.remove(Attr::UNDERLINE | Attr::DUNDERLINE | Attr::UNDERCURL),
            25 => term.cursor.attr.remove(Attr::BLINK),
            27 => term.cursor.attr.remove(Attr::REVERSE),
            28 => term.cursor.attr.remove(Attr::INVISIBLE),
            29 => term.cursor.attr.remove(Attr::STRUCK),
            30..=37 => term.cursor.fg = Color::palette((values[i] - 30) as u32),
            38 => {
                if let Some((color, consumed)) = extended_color(&values[i + 1..]) {
                    term.cursor.fg = color;
                    i += consumed;
                }
            }
            39 => term.cursor.fg = Color::default_fg(),
            40..=47 => term.cursor.bg = Color::palette((values[i] - 40) as u32),
            48 => {
                if let Some((color, consumed)) = extended_color(&values[i + 1..]) {
                    term.cursor.bg = color;
                    i += consumed;
                }
            }
            49 => term.cursor.bg = Color::default_bg(),
            53 => term.cursor.attr.insert(Attr::OVERLINE),
            55 => term.cursor.attr.remove(Attr::OVERLINE),
            58 => {
                // Underline color: parsed and discarded (no dedicated cell slot).
                if let Some((_, consumed)) = extended_color(&values[i + 1..]) {
                    i += consumed;
                }
            }
            90..=97 => term.cursor.fg = Color::palette((values[i] - 90 + 8) as u32),
            100..=107 => term.cursor.bg = Color::palette((values[i] - 100 + 8) as u32),
            _ => {}
        }
        i += 1;
    }
}

/// Parse the tail of a `38;...`/`48;...` extended-color sequence. Returns the
/// color and how many extra params it consumed (not counting the `5`/`2`
/// mode selector itself).
fn extended_color(rest: &[i64]) -> Option<(Color, usize)> {
    match rest.first()? {
        5 => rest.get(1).map(|&idx| (Color::palette(idx as u32), 2)),
        2 => {
            let r = *rest.get(1)? as u8;
            let g = *rest.get(2)? as u8;
            let b = *rest.get(3)? as u8;
            Some((Color::rgb(r, g, b), 4))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_clears_attrs_and_colors() {
        let mut term = Terminal::new(10, 10);
        term.cursor.attr.insert(Attr::BOLD);
        apply(&mut term, &CsiParams::parse(b"0", None));
        assert_eq!(term.cursor.attr, Attr::empty());
    }

    #[test]
    fn bold_and_palette_fg_compose() {
        let mut term = Terminal::new(10, 10);
        apply(&mut term, &CsiParams::parse(b"1;31", None));
        assert!(term.cursor.attr.contains(Attr::BOLD));
        assert_eq!(term.cursor.fg, Color::palette(1));
    }

    #[test]
    fn extended_rgb_foreground() {
        let mut term = Terminal::new(10, 10);
        apply(&mut term, &CsiParams::parse(b"38;2;10;20;30", None));
        assert_eq!(term.cursor.fg.as_rgb(), Some((10, 20, 30)));
    }

    #[test]
    fn extended_256_background() {
        let mut term = Terminal::new(10, 10);
        apply(&mut term, &CsiParams::parse(b"48;5;200", None));
        assert_eq!(term.cursor.bg.as_palette(), Some(200));
    }
}
