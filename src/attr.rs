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

//! Cell-attribute and terminal-mode bitmasks.

use bitflags::bitflags;

bitflags! {
    /// Per-cell rendition attributes (`spec.md` §3).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Attr: u16 {
        const BOLD        = 1 << 0;
        const FAINT       = 1 << 1;
        const ITALIC      = 1 << 2;
        const UNDERLINE   = 1 << 3;
        const BLINK       = 1 << 4;
        const REVERSE     = 1 << 5;
        const INVISIBLE   = 1 << 6;
        const STRUCK      = 1 << 7;
        const WRAP        = 1 << 8;
        const WIDE        = 1 << 9;
        const WDUMMY      = 1 << 10;
        const DUNDERLINE  = 1 << 11;
        const UNDERCURL   = 1 << 12;
        const OVERLINE    = 1 << 13;
    }
}

bitflags! {
    /// Terminal-wide mode bitset (`spec.md` §3).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Mode: u32 {
        const WRAP        = 1 << 0;
        const UTF8        = 1 << 1;
        const ALTSCREEN   = 1 << 2;
        const CRLF        = 1 << 3;
        const INSERT      = 1 << 4;
        const ECHO        = 1 << 5;
        const APPCURSOR   = 1 << 6;
        const APPKEYPAD   = 1 << 7;
        const HIDE        = 1 << 8;
        const FOCUS       = 1 << 9;
        const BRCKTPASTE  = 1 << 10;
        const MOUSE_X10   = 1 << 11;
        const MOUSE_BTN   = 1 << 12;
        const MOUSE_ANY   = 1 << 13;
        const MOUSE_SGR   = 1 << 14;
        const REVERSE     = 1 << 15;
        const KBDLOCK     = 1 << 16;
        const BIT8        = 1 << 17;
    }
}

bitflags! {
    /// Cursor state bitset (`spec.md` §3).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct CursorState: u8 {
        const VISIBLE  = 1 << 0;
        const WRAPNEXT = 1 << 1;
        const ORIGIN   = 1 << 2;
    }
}

/// Mouse-protocol mode bits that are mutually exclusive: setting one clears
/// the others (`spec.md` §4.B, private mode 1000/1002/1003).
pub const MOUSE_MODES: Mode =
    Mode::MOUSE_X10.union(Mode::MOUSE_BTN).union(Mode::MOUSE_ANY);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_and_wdummy_are_distinct_bits() {
        assert!(!Attr::WIDE.intersects(Attr::WDUMMY));
    }

    #[test]
    fn mouse_modes_mask_covers_all_three() {
        assert!(MOUSE_MODES.contains(Mode::MOUSE_X10));
        assert!(MOUSE_MODES.contains(Mode::MOUSE_BTN));
        assert!(MOUSE_MODES.contains(Mode::MOUSE_ANY));
        assert!(!MOUSE_MODES.contains(Mode::MOUSE_SGR));
    }
}
