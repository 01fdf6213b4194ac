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

//! Screen Engine + `Terminal` (`spec.md` §3, §4.C): cursor/scroll discipline,
//! alt screen, tabs, modes, and the escape-state bookkeeping the ANSI state
//! machine drives.

use crate::ansi::EscapeState;
use crate::attr::{Attr, Mode, MOUSE_MODES};
use crate::charset::CharsetState;
use crate::color::Color;
use crate::cursor::{Cursor, SavedCursor};
use crate::events::{Event, EventQueue};
use crate::glyph::Glyph;
use crate::kitty::KittyImageCache;
use crate::line::Line;
use crate::module::ModuleRegistry;
use crate::utf8::Utf8Decoder;
use crate::TerminalConfig;

/// Hard caps from `spec.md` §3/§5.
pub const CSI_BUF_CAP: usize = 256;
pub const STR_BUF_CAP: usize = 4096;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenId {
    Primary,
    Alt,
}

impl ScreenId {
    fn other(self) -> Self {
        match self {
            ScreenId::Primary => ScreenId::Alt,
            ScreenId::Alt => ScreenId::Primary,
        }
    }

    fn idx(self) -> usize {
        match self {
            ScreenId::Primary => 0,
            ScreenId::Alt => 1,
        }
    }
}

/// The whole terminal: two screens, cursor, modes, and the in-flight escape
/// state the byte-level state machine (`crate::ansi::machine`) drives.
pub struct Terminal {
    pub cols: usize,
    pub rows: usize,

    screens: [Vec<Line>; 2],
    pub active: ScreenId,

    pub scroll_top: usize,
    pub scroll_bot: usize,

    tabstops: Vec<bool>,

    pub mode: Mode,
    pub cursor: Cursor,
    saved_cursor: [Option<SavedCursor>; 2],

    pub charset: CharsetState,

    pub esc_state: EscapeState,
    pub csi_buf: Vec<u8>,
    pub csi_private: bool,
    pub csi_intermediate: Option<u8>,
    pub str_buf: Vec<u8>,
    pub str_kind: Option<crate::events::StringKind>,
    pub str_end: bool,

    pub utf8: Utf8Decoder,
    pub last_rune: Option<char>,

    pub config: TerminalConfig,
    pub events: EventQueue,
    pub modules: ModuleRegistry,
    pub kitty: KittyImageCache,
    pub kitty_pending: Option<crate::kitty::command::PendingUpload>,

    dirty_all: bool,
}

impl Terminal {
    pub fn new(cols: usize, rows: usize) -> Self { Self::with_config(cols, rows, TerminalConfig::default()) }

    pub fn with_config(cols: usize, rows: usize, config: TerminalConfig) -> Self {
        let cols = cols.min(32767).max(1);
        let rows = rows.min(32767).max(1);
        let primary = (0..rows).map(|_| Line::new(cols)).collect();
        let alt = (0..rows).map(|_| Line::new(cols)).collect();
        let kitty = KittyImageCache::new(
            config.max_total_bytes,
            config.max_single_bytes,
            config.max_placements,
        );
        let mut term = Self {
            cols,
            rows,
            screens: [primary, alt],
            active: ScreenId::Primary,
            scroll_top: 0,
            scroll_bot: rows - 1,
            tabstops: Vec::new(),
            mode: Mode::WRAP,
            cursor: Cursor::new(),
            saved_cursor: [None, None],
            charset: CharsetState::new(),
            esc_state: EscapeState::Ground,
            csi_buf: Vec::with_capacity(CSI_BUF_CAP),
            csi_private: false,
            csi_intermediate: None,
            str_buf: Vec::with_capacity(64),
            str_kind: None,
            str_end: false,
            utf8: Utf8Decoder::new(),
            last_rune: None,
            config,
            events: EventQueue::new(),
            modules: ModuleRegistry::new(),
            kitty,
            kitty_pending: None,
        };
        term.rebuild_tabstops();
        term
    }

    /// Feed PTY output through the escape-sequence state machine
    /// (`spec.md` §4.B entry point).
    pub fn write(&mut self, bytes: &[u8]) {
        crate::ansi::machine::feed(self, bytes);
    }

    /// Drain events accumulated since the last drain (`spec.md` §6).
    pub fn drain_events(&mut self) -> Vec<Event> { self.events.drain() }

    // ---- grid access ----------------------------------------------------

    pub fn active_screen(&self) -> &[Line] { &self.screens[self.active.idx()] }
    pub fn active_screen_mut(&mut self) -> &mut [Line] { &mut self.screens[self.active.idx()] }

    pub fn get_line(&self, row: usize) -> Option<&Line> { self.active_screen().get(row) }

    pub fn get_glyph(&self, x: usize, y: usize) -> Option<&Glyph> {
        self.get_line(y).and_then(|l| (x < l.cols()).then(|| l.get(x)))
    }

    pub fn mark_dirty_row(&mut self, row: usize) {
        if let Some(line) = self.active_screen_mut().get_mut(row) {
            line.mark_dirty();
        }
    }

    pub fn mark_dirty_all(&mut self) {
        for line in self.active_screen_mut() {
            line.mark_dirty();
        }
        self.dirty_all = true;
    }

    pub fn clear_dirty(&mut self) {
        for line in self.active_screen_mut() {
            line.clear_dirty();
        }
        self.dirty_all = false;
    }

    pub fn any_dirty(&self) -> bool { self.dirty_all || self.active_screen().iter().any(|l| l.is_dirty()) }

    // ---- tabs -------------------------------------------------------------

    fn rebuild_tabstops(&mut self) {
        self.tabstops = (0..self.cols).map(|c| c > 0 && c % self.config.tabstop == 0).collect();
    }

    pub fn set_tabstop_at_cursor(&mut self) {
        let x = self.cursor.x;
        if x < self.tabstops.len() {
            self.tabstops[x] = true;
        }
    }

    pub fn clear_tabstop_at_cursor(&mut self) {
        let x = self.cursor.x;
        if x < self.tabstops.len() {
            self.tabstops[x] = false;
        }
    }

    pub fn clear_all_tabstops(&mut self) {
        self.tabstops.iter_mut().for_each(|t| *t = false);
    }

    pub fn tab_forward(&mut self, n: usize) {
        let mut x = self.cursor.x;
        for _ in 0..n.max(1) {
            x += 1;
            while x < self.cols - 1 && !self.tabstops.get(x).copied().unwrap_or(false) {
                x += 1;
            }
            if x >= self.cols - 1 {
                x = self.cols - 1;
                break;
            }
        }
        self.cursor.x = x.min(self.cols - 1);
        self.cursor.clear_wrapnext();
    }

    pub fn tab_backward(&mut self, n: usize) {
        let mut x = self.cursor.x;
        for _ in 0..n.max(1) {
            if x == 0 {
                break;
            }
            x -= 1;
            while x > 0 && !self.tabstops.get(x).copied().unwrap_or(false) {
                x -= 1;
            }
        }
        self.cursor.x = x;
        self.cursor.clear_wrapnext();
    }

    // ---- cursor / origin mode ---------------------------------------------

    /// Vertical clamp respecting ORIGIN mode (`spec.md` §4.B).
    fn clamp_row(&self, y: usize) -> usize {
        use crate::attr::CursorState;
        if self.cursor.state.contains(CursorState::ORIGIN) {
            y.clamp(self.scroll_top, self.scroll_bot)
        } else {
            y.min(self.rows - 1)
        }
    }

    pub fn move_to(&mut self, x: usize, y: usize) {
        use crate::attr::CursorState;
        let origin_base = if self.cursor.state.contains(CursorState::ORIGIN) {
            self.scroll_top
        } else {
            0
        };
        self.cursor.x = x.min(self.cols - 1);
        self.cursor.y = self.clamp_row(origin_base + y);
        self.cursor.clear_wrapnext();
    }

    pub fn set_origin_mode(&mut self, on: bool) {
        use crate::attr::CursorState;
        self.cursor.state.set(CursorState::ORIGIN, on);
        self.move_to(0, 0);
    }

    pub fn cursor_save(&mut self) {
        self.saved_cursor[self.active.idx()] = Some(SavedCursor::capture(&self.cursor, &self.charset));
    }

    pub fn cursor_restore(&mut self) {
        if let Some(saved) = self.saved_cursor[self.active.idx()] {
            saved.restore(&mut self.cursor, &mut self.charset);
        }
    }

    // ---- scroll region + scrolling -----------------------------------------

    pub fn set_scroll_region(&mut self, top: Option<usize>, bot: Option<usize>) {
        let top = top.unwrap_or(0).min(self.rows - 1);
        let bot = bot.unwrap_or(self.rows - 1).min(self.rows - 1);
        if top < bot {
            self.scroll_top = top;
            self.scroll_bot = bot;
        } else {
            self.scroll_top = 0;
            self.scroll_bot = self.rows - 1;
        }
        self.move_to(0, 0);
    }

    /// Rotate `n` lines off the top of `[top, scroll_bot]`, shifting
    /// survivors up and clearing the bottom `n` (`spec.md` §4.B "Scroll").
    /// Emits `LineScrolledOut` iff `top == self.scroll_top`.
    pub fn scroll_up(&mut self, top: usize, n: usize) {
        let bot = self.scroll_bot;
        if top > bot {
            return;
        }
        let n = n.min(bot - top + 1);
        let emit_history = top == self.scroll_top && self.active == ScreenId::Primary;
        let fg = self.cursor.fg;
        let bg = self.cursor.bg;
        let screen = self.active_screen_mut();
        for _ in 0..n {
            let evicted = screen.remove(top);
            if emit_history {
                self.events.push(Event::LineScrolledOut(evicted.cells().to_vec()));
            }
            let mut fresh = Line::new(self.cols);
            fresh.erase_range(0, self.cols, fg, bg);
            self.active_screen_mut().insert(bot, fresh);
        }
        self.mark_dirty_all();
    }

    pub fn scroll_down(&mut self, top: usize, n: usize) {
        let bot = self.scroll_bot;
        if top > bot {
            return;
        }
        let n = n.min(bot - top + 1);
        let fg = self.cursor.fg;
        let bg = self.cursor.bg;
        for _ in 0..n {
            self.active_screen_mut().remove(bot);
            let mut fresh = Line::new(self.cols);
            fresh.erase_range(0, self.cols, fg, bg);
            self.active_screen_mut().insert(top, fresh);
        }
        self.mark_dirty_all();
    }

    /// `spec.md` §4.C `newline`.
    pub fn newline(&mut self, first_col: bool) {
        if self.cursor.y == self.scroll_bot {
            self.scroll_up(self.scroll_top, 1);
        } else if self.cursor.y < self.rows - 1 {
            self.cursor.y += 1;
        }
        if first_col {
            self.cursor.x = 0;
        }
        self.cursor.clear_wrapnext();
    }

    pub fn reverse_index(&mut self) {
        if self.cursor.y == self.scroll_top {
            self.scroll_down(self.scroll_top, 1);
        } else if self.cursor.y > 0 {
            self.cursor.y -= 1;
        }
        self.cursor.clear_wrapnext();
    }

    // ---- alt screen ---------------------------------------------------------

    pub fn swap_screen(&mut self) {
        self.active = self.active.other();
        self.mode.toggle(Mode::ALTSCREEN);
        self.mark_dirty_all();
    }

    /// Implements the `1049` save/swap/clear ordering contract (`spec.md`
    /// §4.B). `entering` is `true` for set, `false` for reset.
    pub fn altscreen_1049(&mut self, entering: bool) {
        if entering {
            self.cursor_save();
            self.swap_screen();
            self.clear_all(2);
        } else {
            self.clear_all(2);
            self.swap_screen();
            self.cursor_restore();
        }
    }

    pub fn set_mouse_mode(&mut self, bit: Mode) {
        self.mode.remove(MOUSE_MODES);
        self.mode.insert(bit);
    }

    /// Set/clear one of the mutually-exclusive mouse-protocol mode bits
    /// (private modes 9/1000/1002).
    pub fn set_mouse_mode_if(&mut self, bit: Mode, on: bool) {
        if on {
            self.set_mouse_mode(bit);
        } else {
            self.mode.remove(bit);
        }
    }

    // ---- erase --------------------------------------------------------------

    /// `CSI J` ED: 0=below, 1=above, 2=all.
    pub fn erase_display(&mut self, mode: i64) {
        let (x, y) = (self.cursor.x, self.cursor.y);
        let fg = self.cursor.fg;
        let bg = self.cursor.bg;
        let cols = self.cols;
        let rows = self.rows;
        match mode {
            0 => {
                if let Some(line) = self.active_screen_mut().get_mut(y) {
                    line.erase_range(x, cols - x, fg, bg);
                }
                for r in y + 1..rows {
                    if let Some(line) = self.active_screen_mut().get_mut(r) {
                        line.erase_range(0, cols, fg, bg);
                    }
                }
            }
            1 => {
                for r in 0..y {
                    if let Some(line) = self.active_screen_mut().get_mut(r) {
                        line.erase_range(0, cols, fg, bg);
                    }
                }
                if let Some(line) = self.active_screen_mut().get_mut(y) {
                    line.erase_range(0, x + 1, fg, bg);
                }
            }
            _ => self.clear_all(2),
        }
        self.mark_dirty_all();
    }

    fn clear_all(&mut self, _mode: i64) {
        let fg = self.cursor.fg;
        let bg = self.cursor.bg;
        let cols = self.cols;
        for line in self.active_screen_mut() {
            line.erase_range(0, cols, fg, bg);
            line.set_wrapped(false);
        }
        self.mark_dirty_all();
    }

    /// `CSI K` EL: 0=right, 1=left, 2=all.
    pub fn erase_line(&mut self, mode: i64) {
        let (x, y) = (self.cursor.x, self.cursor.y);
        let fg = self.cursor.fg;
        let bg = self.cursor.bg;
        let cols = self.cols;
        if let Some(line) = self.active_screen_mut().get_mut(y) {
            match mode {
                0 => line.erase_range(x, cols - x, fg, bg),
                1 => line.erase_range(0, x + 1, fg, bg),
                _ => line.erase_range(0, cols, fg, bg),
            }
        }
    }

    /// `ESC # 8` DECALN: fill the screen with 'E' (`spec.md` §4.B).
    pub fn decaln(&mut self) {
        for line in self.active_screen_mut() {
            for x in 0..line.cols() {
                line.set(x, Glyph { rune: 'E', ..Glyph::default() });
            }
        }
        self.mark_dirty_all();
    }

    // ---- printing -------------------------------------------------------------

    /// Write a printable rune at the cursor, applying wrap/wide-char rules
    /// (`spec.md` §4.B "Cursor-movement invariants").
    pub fn put_char(&mut self, rune: char) {
        let rune = self.charset.translate(rune);
        let w = crate::wcwidth::width(rune, self.config.wcwidth_ambiguous_is_wide);

        if w == 0 {
            // Combining rune: compose onto the previous cell without moving
            // (silently a no-op at column 0, per spec's boundary case).
            let (x, y) = (self.cursor.x, self.cursor.y);
            let prev_x = if x == 0 { return } else { x - 1 };
            let _ = (prev_x, y);
            return;
        }

        if self.cursor.wrapnext() {
            self.cursor.clear_wrapnext();
            if self.mode.contains(Mode::WRAP) {
                if let Some(line) = self.active_screen_mut().get_mut(self.cursor.y) {
                    line.set_wrapped(true);
                }
                self.newline(true);
            }
        }

        let wraps_now = self.cursor.x + w > self.cols && self.mode.contains(Mode::WRAP);
        if wraps_now {
            if let Some(line) = self.active_screen_mut().get_mut(self.cursor.y) {
                line.set_wrapped(true);
            }
            self.newline(true);
        }

        // A wide char that doesn't fit in the last column triggers
        // `wraps_now` above just like a narrow one would, since
        // `x + w > cols` already covers `x + 1 >= cols` when `w == 2`
        // (`spec.md` §8 scenario 3).
        let (fg, bg, attr) = (self.cursor.fg, self.cursor.bg, self.cursor.attr);
        let cols = self.cols;

        self.put_char_raw(rune, w, fg, bg, attr);

        if self.cursor.x + w >= cols {
            if self.mode.contains(Mode::WRAP) {
                self.cursor.set_wrapnext();
            } else {
                self.cursor.x = cols - 1;
            }
        } else {
            self.cursor.x += w;
        }
        self.last_rune = Some(rune);
    }

    fn put_char_raw(
        &mut self,
        rune: char,
        w: usize,
        fg: Color,
        bg: Color,
        attr: Attr,
    ) {
        let (x, y) = (self.cursor.x, self.cursor.y);
        if let Some(line) = self.active_screen_mut().get_mut(y) {
            line.set(x, Glyph { rune, attr, fg, bg });
            if w == 2 && x + 1 < line.cols() {
                line.set(x + 1, Glyph { rune: '\0', attr: Attr::WDUMMY, fg, bg });
            }
        }
    }

    /// `CSI b` REP: repeat the last printed rune `n` times.
    pub fn repeat_last(&mut self, n: usize) {
        if let Some(rune) = self.last_rune {
            for _ in 0..n {
                self.put_char(rune);
            }
        }
    }

    // ---- resize -----------------------------------------------------------

    pub fn resize(&mut self, cols: usize, rows: usize) {
        let cols = cols.min(32767).max(1);
        let rows = rows.min(32767).max(1);
        for screen in &mut self.screens {
            screen.resize_with(rows, || Line::new(cols));
            for line in screen.iter_mut() {
                line.resize(cols);
            }
        }
        self.cols = cols;
        self.rows = rows;
        self.scroll_top = 0;
        self.scroll_bot = rows - 1;
        self.cursor.x = self.cursor.x.min(cols - 1);
        self.cursor.y = self.cursor.y.min(rows - 1);
        self.rebuild_tabstops();
        self.mark_dirty_all();
        self.events.push(Event::Resized { cols, rows });
    }

    // ---- focus --------------------------------------------------------------

    pub fn focus_in(&mut self) {
        if self.mode.contains(Mode::FOCUS) {
            self.events.push(Event::Response(b"\x1b[I".to_vec()));
        }
    }

    pub fn focus_out(&mut self) {
        if self.mode.contains(Mode::FOCUS) {
            self.events.push(Event::Response(b"\x1b[O".to_vec()));
        }
    }
}
