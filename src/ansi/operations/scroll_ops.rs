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

//! `CSI S`/`CSI T` SU/SD and `CSI r` DECSTBM (`spec.md` §4.B).

use crate::ansi::CsiParams;
use crate::screen::Terminal;

pub fn su(term: &mut Terminal, p: &CsiParams) {
    let n = p.get(0, 1).max(1) as usize;
    term.scroll_up(term.scroll_top, n);
}

pub fn sd(term: &mut Terminal, p: &CsiParams) {
    let n = p.get(0, 1).max(1) as usize;
    term.scroll_down(term.scroll_top, n);
}

/// `CSI r` DECSTBM: set the scroll region to `[top, bot]` (1-based,
/// inclusive); resets to full screen if the range is degenerate.
pub fn decstbm(term: &mut Terminal, p: &CsiParams) {
    let top = p.get(0, 1).max(1) as usize - 1;
    let bot = p.get(1, term.rows as i64).max(1) as usize - 1;
    term.set_scroll_region(Some(top), Some(bot));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decstbm_narrows_region() {
        let mut term = Terminal::new(80, 24);
        decstbm(&mut term, &CsiParams::parse(b"5;10", None));
        assert_eq!((term.scroll_top, term.scroll_bot), (4, 9));
    }

    #[test]
    fn decstbm_degenerate_range_resets_full_screen() {
        let mut term = Terminal::new(80, 24);
        decstbm(&mut term, &CsiParams::parse(b"10;5", None));
        assert_eq!((term.scroll_top, term.scroll_bot), (0, 23));
    }
}
