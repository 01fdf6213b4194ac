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

//! `CSI L`/`CSI M` IL/DL: insert/delete whole lines within the scroll
//! region, pivoting at the cursor row (`spec.md` §4.B).

use crate::ansi::CsiParams;
use crate::line::Line;
use crate::screen::Terminal;

pub fn il(term: &mut Terminal, p: &CsiParams) {
    if term.cursor.y < term.scroll_top || term.cursor.y > term.scroll_bot {
        return;
    }
    let n = (p.get(0, 1).max(1) as usize).min(term.scroll_bot - term.cursor.y + 1);
    let (fg, bg) = (term.cursor.fg, term.cursor.bg);
    let cols = term.cols;
    let bot = term.scroll_bot;
    let row = term.cursor.y;
    for _ in 0..n {
        term.active_screen_mut().remove(bot);
        let mut fresh = Line::new(cols);
        fresh.erase_range(0, cols, fg, bg);
        term.active_screen_mut().insert(row, fresh);
    }
    term.mark_dirty_all();
}

pub fn dl(term: &mut Terminal, p: &CsiParams) {
    if term.cursor.y < term.scroll_top || term.cursor.y > term.scroll_bot {
        return;
    }
    let n = (p.get(0, 1).max(1) as usize).min(term.scroll_bot - term.cursor.y + 1);
    let (fg, bg) = (term.cursor.fg, term.cursor.bg);
    let cols = term.cols;
    let bot = term.scroll_bot;
    let row = term.cursor.y;
    for _ in 0..n {
        term.active_screen_mut().remove(row);
        let mut fresh = Line::new(cols);
        fresh.erase_range(0, cols, fg, bg);
        term.active_screen_mut().insert(bot, fresh);
    }
    term.mark_dirty_all();
}
