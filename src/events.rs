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

//! Outbound events (`spec.md` §6, §9: "Dynamic signal connections → explicit
//! outbound channels"). The core appends these to a per-write queue instead
//! of calling back into host code directly, the same way `r3bl_tui`'s ANSI
//! processor accumulates a `pending_osc_events` queue for its host to drain.

use crate::glyph::Glyph;

/// Which OSC code produced a title/icon update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleKind {
    Title,
    Icon,
    Both,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Bytes to write back to the PTY (DA/DSR replies, Kitty APC responses,
    /// focus in/out reports).
    Response(Vec<u8>),
    /// OSC 0/1/2 (`spec.md` §4.B/§6).
    TitleChanged { kind: TitleKind, text: String },
    /// BEL, or an APC body closing a pending STR accumulation via BEL.
    Bell,
    /// Emitted by `scroll_up` when it originates at `scroll_top`
    /// (`spec.md` §4.B "Scroll", §6).
    LineScrolledOut(Vec<Glyph>),
    /// A string escape (OSC code not recognized by the core, or any
    /// DCS/PM/APC body) forwarded to the module layer.
    EscapeString { kind: StringKind, raw: Vec<u8> },
    /// The grid was resized; carries the new (cols, rows).
    Resized { cols: usize, rows: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StringKind {
    Osc,
    Dcs,
    Apc,
    Pm,
}

/// A simple append-only outbound queue, drained once per host tick.
#[derive(Debug, Default)]
pub struct EventQueue {
    events: Vec<Event>,
}

impl EventQueue {
    pub fn new() -> Self { Self { events: Vec::new() } }

    pub fn push(&mut self, event: Event) { self.events.push(event); }

    pub fn drain(&mut self) -> Vec<Event> { std::mem::take(&mut self.events) }

    pub fn is_empty(&self) -> bool { self.events.is_empty() }
}
