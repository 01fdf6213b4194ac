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

//! APC command grammar: `key=value,key=value,...;base64_payload`
//! (`spec.md` §4.F). Handles chunked transmission (`m=1` continuation, a
//! final chunk with `m` absent or `0`) by buffering across APC commands
//! until the payload is complete.

use rustc_hash::FxHashMap;

use crate::events::Event;
use crate::kitty::placement::{DeleteTarget, Placement};
use crate::kitty::{image, response};
use crate::module::StringEscape;
use crate::screen::Terminal;

/// In-flight chunked upload, keyed by the image id the first chunk declared.
pub struct PendingUpload {
    pub image_id: u32,
    pub format: u32,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub compressed: bool,
    pub quiet: u8,
    pub display: bool,
    pub placement_id: Option<u32>,
    pub payload: Vec<u8>,
}

fn parse_kv(head: &str) -> FxHashMap<&str, &str> {
    head.split(',')
        .filter_map(|pair| pair.split_once('='))
        .map(|(k, v)| (k.trim(), v.trim()))
        .collect()
}

/// Entry point from the ANSI string-escape dispatcher (`crate::ansi::osc`).
/// Claims the command itself first; anything that isn't a recognized Kitty
/// verb is forwarded to the module layer (`spec.md` §4.E).
pub fn handle_apc(term: &mut Terminal, body: &[u8]) {
    // A locally-echoing PTY can bounce our own response back as input; drop
    // it before it's parsed as a new command (`spec.md` §4.F, §7).
    if term.modules.echo_guard_mut().is_echo(body) {
        return;
    }

    let text = String::from_utf8_lossy(body);
    let (head, payload) = text.split_once(';').unwrap_or((text.as_ref(), ""));
    let kv = parse_kv(head);

    let Some(&action) = kv.get("a") else {
        forward_unclaimed(term, body);
        return;
    };

    match action {
        "t" | "T" => transmit(term, &kv, payload, action == "T"),
        "p" => display(term, &kv),
        "d" => delete(term, &kv),
        "q" => query(term, &kv),
        _ => forward_unclaimed(term, body),
    }
}

fn forward_unclaimed(term: &mut Terminal, body: &[u8]) {
    let escape = StringEscape { kind: crate::events::StringKind::Apc, body };
    if !term.modules.dispatch_escape(&escape) {
        term.events.push(Event::EscapeString { kind: crate::events::StringKind::Apc, raw: body.to_vec() });
    }
}

fn transmit(term: &mut Terminal, kv: &FxHashMap<&str, &str>, payload: &str, display_after: bool) {
    let more = kv.get("m").copied() == Some("1");
    let image_id: u32 = kv.get("i").and_then(|s| s.parse().ok()).unwrap_or(0);
    let quiet: u8 = kv.get("q").and_then(|s| s.parse().ok()).unwrap_or(0);
    let placement_id: Option<u32> = kv.get("p").and_then(|s| s.parse().ok());

    let pending = term.kitty_pending.get_or_insert_with(|| PendingUpload {
        image_id,
        format: kv.get("f").and_then(|s| s.parse().ok()).unwrap_or(32),
        width: kv.get("s").and_then(|s| s.parse().ok()),
        height: kv.get("v").and_then(|s| s.parse().ok()),
        compressed: kv.get("o").copied() == Some("z"),
        quiet,
        display: display_after,
        placement_id,
        payload: Vec::new(),
    });
    pending.payload.extend_from_slice(payload.as_bytes());

    if more {
        return;
    }

    let Some(pending) = term.kitty_pending.take() else { return };
    let result = image::decode(pending.format, pending.compressed, pending.width, pending.height, &pending.payload);
    match result {
        Ok(decoded) => {
            let (w, h) = (decoded.width, decoded.height);
            match term.kitty.insert(pending.image_id, decoded) {
                Ok(()) => {
                    if pending.display {
                        place(term, pending.image_id, pending.placement_id, 0, 0);
                    }
                    let _ = (w, h);
                    respond(term, pending.image_id, pending.placement_id, "OK", pending.quiet);
                }
                Err(e) => respond(term, pending.image_id, pending.placement_id, &e.wire_status(), pending.quiet),
            }
        }
        Err(e) => respond(term, pending.image_id, pending.placement_id, &e.wire_status(), pending.quiet),
    }
}

fn display(term: &mut Terminal, kv: &FxHashMap<&str, &str>) {
    let image_id: u32 = kv.get("i").and_then(|s| s.parse().ok()).unwrap_or(0);
    let placement_id = kv.get("p").and_then(|s| s.parse().ok());
    let quiet: u8 = kv.get("q").and_then(|s| s.parse().ok()).unwrap_or(0);
    if !term.kitty.contains(image_id) {
        respond(term, image_id, placement_id, &crate::error::KittyError::ImageNotFound.wire_status(), quiet);
        return;
    }
    place(term, image_id, placement_id, term.cursor.x, term.cursor.y);
    respond(term, image_id, placement_id, "OK", quiet);
}

fn place(term: &mut Terminal, image_id: u32, placement_id: Option<u32>, col: usize, row: usize) {
    term.kitty.touch(image_id);
    term.kitty.add_placement(Placement { image_id, placement_id: placement_id.unwrap_or(0), col, row });
}

fn delete(term: &mut Terminal, kv: &FxHashMap<&str, &str>) {
    let target = match kv.get("d").copied().unwrap_or("a") {
        "a" | "A" => DeleteTarget::All,
        _ => DeleteTarget::Image {
            image_id: kv.get("i").and_then(|s| s.parse().ok()).unwrap_or(0),
            placement_id: kv.get("p").and_then(|s| s.parse().ok()),
        },
    };
    term.kitty.delete(target);
}

fn query(term: &mut Terminal, kv: &FxHashMap<&str, &str>) {
    let image_id: u32 = kv.get("i").and_then(|s| s.parse().ok()).unwrap_or(0);
    let quiet: u8 = kv.get("q").and_then(|s| s.parse().ok()).unwrap_or(0);
    respond(term, image_id, None, "OK", quiet);
}

fn respond(term: &mut Terminal, image_id: u32, placement_id: Option<u32>, status: &str, quiet: u8) {
    // Record the bare APC body we'd see echoed back, not the ESC-wrapped
    // wire bytes, since that's what `handle_apc` receives on the way in.
    let inner = response::inner(image_id, placement_id, status);
    term.modules.echo_guard_mut().record_sent(inner.as_bytes());
    if let Some(bytes) = response::format(image_id, placement_id, status, quiet) {
        term.events.push(Event::Response(bytes));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine;

    fn b64(bytes: &[u8]) -> String { base64::engine::general_purpose::STANDARD.encode(bytes) }

    #[test]
    fn single_chunk_rgba_upload_and_display() {
        let mut term = Terminal::new(20, 5);
        let pixels = vec![1u8, 2, 3, 255];
        let body = format!("a=T,f=32,s=1,v=1,i=5;{}", b64(&pixels));
        handle_apc(&mut term, body.as_bytes());
        assert!(term.kitty.contains(5));
        assert_eq!(term.kitty.placements().len(), 1);
        let events = term.events.drain();
        assert!(matches!(events.as_slice(), [Event::Response(_)]));
    }

    #[test]
    fn chunked_upload_assembles_across_commands() {
        let mut term = Terminal::new(20, 5);
        let pixels = vec![9u8; 16]; // 2x2 RGBA
        let encoded = b64(&pixels);
        let (first, second) = encoded.split_at(encoded.len() / 2);
        handle_apc(&mut term, format!("a=t,f=32,s=2,v=2,i=9,m=1;{first}").as_bytes());
        assert!(!term.kitty.contains(9));
        handle_apc(&mut term, format!("a=t,i=9,m=0;{second}").as_bytes());
        assert!(term.kitty.contains(9));
    }

    #[test]
    fn delete_all_clears_cache() {
        let mut term = Terminal::new(20, 5);
        let pixels = vec![1u8, 2, 3, 255];
        handle_apc(&mut term, format!("a=T,f=32,s=1,v=1,i=3;{}", b64(&pixels)).as_bytes());
        handle_apc(&mut term, b"a=d,d=a");
        assert!(term.kitty.is_empty());
    }
}
