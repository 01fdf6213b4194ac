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

//! OSC body dispatch: `0`/`1`/`2` (title/icon) are handled here; everything
//! else is forwarded to the module layer as `Event::EscapeString`
//! (`spec.md` §4.B, §6).

use crate::events::{Event, StringKind, TitleKind};
use crate::screen::Terminal;

pub fn dispatch(term: &mut Terminal, body: &[u8]) {
    let text = String::from_utf8_lossy(body);
    let mut parts = text.splitn(2, ';');
    let code = parts.next().unwrap_or("");
    let rest = parts.next();

    match (code, rest) {
        ("0", Some(title)) => emit_title(term, TitleKind::Both, title),
        ("1", Some(title)) => emit_title(term, TitleKind::Icon, title),
        ("2", Some(title)) => emit_title(term, TitleKind::Title, title),
        _ => term.events.push(Event::EscapeString { kind: StringKind::Osc, raw: body.to_vec() }),
    }
}

fn emit_title(term: &mut Terminal, kind: TitleKind, text: &str) {
    term.events.push(Event::TitleChanged { kind, text: text.to_string() });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screen::Terminal;

    #[test]
    fn osc_0_sets_both_title_and_icon() {
        let mut term = Terminal::new(10, 10);
        dispatch(&mut term, b"0;hello");
        match term.events.drain().as_slice() {
            [Event::TitleChanged { kind: TitleKind::Both, text }] => assert_eq!(text, "hello"),
            other => panic!("unexpected events: {other:?}"),
        }
    }

    #[test]
    fn unknown_osc_code_is_forwarded() {
        let mut term = Terminal::new(10, 10);
        dispatch(&mut term, b"9;payload");
        match term.events.drain().as_slice() {
            [Event::EscapeString { kind: StringKind::Osc, .. }] => {}
            other => panic!("unexpected events: {other:?}"),
        }
    }
}
