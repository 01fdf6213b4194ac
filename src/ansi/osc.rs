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

//! Routes a finished STR-state body (OSC/DCS/PM/APC) to its handler
//! (`spec.md` §4.B/§4.F).

use crate::ansi::operations::osc_ops;
use crate::events::{Event, StringKind};
use crate::screen::Terminal;

pub fn finalize(term: &mut Terminal, kind: StringKind, body: &[u8]) {
    match kind {
        StringKind::Osc => osc_ops::dispatch(term, body),
        StringKind::Apc => crate::kitty::command::handle_apc(term, body),
        StringKind::Dcs | StringKind::Pm => {
            term.events.push(Event::EscapeString { kind, raw: body.to_vec() });
        }
    }
}
