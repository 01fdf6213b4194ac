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

//! A VT100/ANSI/xterm-compatible terminal emulator core: the escape-sequence
//! state machine, the screen/cursor/scroll model, the selection engine, a
//! pluggable module-dispatch layer, the Kitty graphics protocol, and an
//! abstract renderer contract a host implements against its own backend.
//!
//! This crate owns no PTY, no pixels, and no window-system integration
//! (`spec.md` §1 Non-goals) — it's the part of a terminal emulator that's
//! portable across all of those.

pub mod ansi;
pub mod attr;
pub mod charset;
pub mod color;
pub mod config;
pub mod cursor;
pub mod error;
pub mod events;
pub mod glyph;
pub mod kitty;
pub mod line;
pub mod log;
pub mod module;
pub mod renderer;
pub mod screen;
pub mod selection;
pub mod utf8;
pub mod wcwidth;

pub use attr::{Attr, CursorState, Mode};
pub use color::Color;
pub use config::TerminalConfig;
pub use cursor::{Cursor, CursorShape};
pub use error::KittyError;
pub use events::Event;
pub use glyph::Glyph;
pub use line::Line;
pub use renderer::{OverlayCell, RenderContext, RenderRow, Renderer};
pub use screen::Terminal;
pub use selection::{Selection, SelectionMode, SelectionSnap};
