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

//! Display width of a rune (`spec.md` §4.B "wcwidth"). Uses `unicode-width`,
//! falling back to the general-category rule the spec lays out, and honoring
//! `TerminalConfig::wcwidth_ambiguous_is_wide` for the ambiguous-width set.

use unicode_width::UnicodeWidthChar;

/// Width of `rune`: 0 for combining marks, 1 or 2 otherwise.
///
/// `ambiguous_is_wide` picks which of `unicode-width`'s two tables to use:
/// `width()` treats East-Asian-Ambiguous runes as narrow (1), `width_cjk()`
/// treats them as wide (2). The spec's open question (§9) says these must
/// default to narrow so private-use Powerline glyphs aren't rendered wide.
pub fn width(rune: char, ambiguous_is_wide: bool) -> usize {
    if rune == '\0' || is_combining(rune) {
        return 0;
    }
    let w = if ambiguous_is_wide {
        UnicodeWidthChar::width_cjk(rune)
    } else {
        UnicodeWidthChar::width(rune)
    };
    w.unwrap_or(1)
}

fn is_combining(rune: char) -> bool {
    matches!(
        rune as u32,
        0x0300..=0x036F   // Combining Diacritical Marks
        | 0x1AB0..=0x1AFF // Combining Diacritical Marks Extended
        | 0x1DC0..=0x1DFF // Combining Diacritical Marks Supplement
        | 0x20D0..=0x20FF // Combining Diacritical Marks for Symbols
        | 0xFE20..=0xFE2F // Combining Half Marks
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_is_width_one() {
        assert_eq!(width('a', false), 1);
    }

    #[test]
    fn cjk_is_width_two() {
        assert_eq!(width('中', false), 2);
    }

    #[test]
    fn combining_mark_is_width_zero() {
        assert_eq!(width('\u{0301}', false), 0);
    }

    #[test]
    fn null_is_width_zero() {
        assert_eq!(width('\0', false), 0);
    }
}
