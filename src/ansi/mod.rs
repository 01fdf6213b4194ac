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

//! The escape-sequence state machine (`spec.md` §4.B). Hand-rolled rather
//! than built on the `vte` crate: `vte`'s `Perform::unhook`/`osc_dispatch`
//! never hand a callback the *raw* APC body bytes it needs for Kitty
//! graphics (see `DESIGN.md`), so the state table lives here instead.

pub mod c0;
pub mod csi;
pub mod machine;
pub mod operations;
pub mod osc;

pub use csi::CsiParams;

/// States the byte/rune-level machine moves through. Named after the classic
/// `st`/`gst`-lineage parser this crate's teacher descends from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscapeState {
    Ground,
    /// Just saw ESC; waiting for the byte that picks the next state.
    Escape,
    Csi,
    /// Collecting an OSC/DCS/PM/APC string body until ST or a C0 terminator.
    Str,
    /// Saw `ESC (`/`)`/`*`/`+`; waiting for the charset-designator byte.
    Altcharset { slot: usize },
    /// Saw `ESC #`; waiting for the DEC test byte (`8` = DECALN).
    Test,
    /// Saw `ESC %`; waiting for the UTF-8 toggle byte (`G`/`@`).
    Utf8Toggle,
}
