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

//! The renderer contract (`spec.md` §4.G): this crate owns no pixels — a
//! host implements [`Renderer`] against whatever backend it has (a TUI
//! widget, a GPU glyph atlas, a test harness that just records calls).

use crate::color::Color;
use crate::cursor::CursorShape;
use crate::glyph::Glyph;
use crate::kitty::placement::Placement;

/// One dirty row, handed to the host renderer in left-to-right cell order.
pub struct RenderRow<'a> {
    pub row: usize,
    pub cells: &'a [Glyph],
}

/// Extra (non-grid) paint data a [`crate::module::RenderOverlay`]
/// contributes — e.g. a module-drawn indicator at a specific cell.
#[derive(Debug, Clone, Copy)]
pub struct OverlayCell {
    pub x: usize,
    pub y: usize,
    pub glyph: Glyph,
}

/// Everything a host needs to paint one frame.
pub struct RenderContext<'a> {
    pub cols: usize,
    pub rows: usize,
    pub cursor_x: usize,
    pub cursor_y: usize,
    pub cursor_visible: bool,
    pub cursor_shape: CursorShape,
    pub cursor_fg: Color,
    pub cursor_bg: Color,
    pub placements: &'a [Placement],
}

/// A host-implemented paint backend. The core drives this with dirty rows
/// only — `begin_frame`/`end_frame` bracket a batch so a host can double
/// buffer or issue one GPU command list per frame.
pub trait Renderer {
    fn begin_frame(&mut self, ctx: &RenderContext<'_>);
    fn draw_row(&mut self, row: RenderRow<'_>);
    fn draw_overlay(&mut self, cell: OverlayCell);
    fn end_frame(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    struct RecordingRenderer {
        rows_drawn: usize,
    }

    impl Renderer for RecordingRenderer {
        fn begin_frame(&mut self, _ctx: &RenderContext<'_>) {}
        fn draw_row(&mut self, _row: RenderRow<'_>) { self.rows_drawn += 1; }
        fn draw_overlay(&mut self, _cell: OverlayCell) {}
        fn end_frame(&mut self) {}
    }

    #[test]
    fn renderer_receives_one_call_per_dirty_row() {
        use crate::screen::Terminal;
        let mut term = Terminal::new(10, 3);
        crate::ansi::machine::feed(&mut term, b"hi");
        let mut renderer = RecordingRenderer { rows_drawn: 0 };
        let ctx = RenderContext {
            cols: term.cols,
            rows: term.rows,
            cursor_x: term.cursor.x,
            cursor_y: term.cursor.y,
            cursor_visible: term.cursor.is_visible(),
            cursor_shape: term.cursor.shape,
            cursor_fg: term.cursor.fg,
            cursor_bg: term.cursor.bg,
            placements: &[],
        };
        renderer.begin_frame(&ctx);
        for row in 0..term.rows {
            if let Some(line) = term.get_line(row) {
                renderer.draw_row(RenderRow { row, cells: line.cells() });
            }
        }
        renderer.end_frame();
        assert_eq!(renderer.rows_drawn, 3);
    }
}
