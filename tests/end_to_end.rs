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

//! End-to-end scenarios (`spec.md` §8).

use vterm_core::kitty::cache::KittyImageCache;
use vterm_core::kitty::image::DecodedImage;
use vterm_core::{Attr, Color, Selection, SelectionMode, SelectionSnap, Terminal};

#[test]
fn sgr_and_text() {
    let mut term = Terminal::new(80, 24);
    term.write(b"\x1b[1;31mABC \x1b[0m D");

    for col in 0..3 {
        let g = term.get_glyph(col, 0).unwrap();
        assert!(g.attr.contains(Attr::BOLD));
        assert_eq!(g.fg, Color::palette(1));
    }
    // The space printed before the reset still carries the active SGR.
    let trailing_space = term.get_glyph(3, 0).unwrap();
    assert_eq!(trailing_space.rune, ' ');
    assert!(trailing_space.attr.contains(Attr::BOLD));

    let reset_space = term.get_glyph(4, 0).unwrap();
    assert_eq!(reset_space.rune, ' ');
    assert_eq!(reset_space.attr, Attr::empty());
    assert_eq!(reset_space.fg, Color::default_fg());

    let d = term.get_glyph(5, 0).unwrap();
    assert_eq!(d.rune, 'D');
    assert_eq!(d.attr, Attr::empty());
}

#[test]
fn csi_cup_is_one_based_and_origin_zero() {
    let mut term = Terminal::new(80, 24);
    term.write(b"\x1b[10;40H*");
    assert_eq!(term.get_glyph(39, 9).unwrap().rune, '*');
    assert_eq!((term.cursor.x, term.cursor.y), (40, 9));
}

#[test]
fn wide_char_wraps_at_last_column_leaving_a_space_behind() {
    let mut term = Terminal::new(10, 2);
    term.cursor.x = 9;
    term.cursor.y = 0;
    term.write("中".as_bytes());

    assert_eq!(term.get_glyph(9, 0).unwrap().rune, ' ');
    assert_eq!(term.get_glyph(0, 1).unwrap().rune, '中');
    assert!(term.get_glyph(0, 1).unwrap().attr.contains(Attr::WIDE));
    assert!(term.get_glyph(1, 1).unwrap().attr.contains(Attr::WDUMMY));
    assert_eq!((term.cursor.x, term.cursor.y), (2, 1));
}

#[test]
fn altscreen_1049_preserves_primary_and_restores_cursor() {
    let mut term = Terminal::new(20, 5);
    term.write(b"before");
    let cursor_before = (term.cursor.x, term.cursor.y);

    term.write(b"\x1b[?1049h");
    term.write(b"hello");
    term.write(b"\x1b[?1049l");

    assert_eq!((term.cursor.x, term.cursor.y), cursor_before);
    for (i, ch) in "before".chars().enumerate() {
        assert_eq!(term.get_glyph(i, 0).unwrap().rune, ch);
    }
}

#[test]
fn selection_multi_line_text() {
    let mut term = Terminal::new(80, 24);
    term.write(b"AAA\r\n");
    term.write(b"BBB\r\n");
    term.write(b"CCC");

    let mut sel = Selection::start(0, 0, SelectionMode::Regular, SelectionSnap::Char);
    sel.extend(2, 2);
    assert_eq!(sel.get_text(&term), "AAA\nBBB\nCCC");
}

#[test]
fn kitty_chunked_upload_and_display() {
    let mut term = Terminal::new(20, 5);
    // RGBA rather than PNG to keep the fixture self-contained (no hand-built
    // PNG byte stream): a 2x1 image split across three APC chunks.
    use base64::Engine;
    let pixels = vec![1u8, 2, 3, 255, 4, 5, 6, 255];
    let encoded = base64::engine::general_purpose::STANDARD.encode(&pixels);
    let (a, rest) = encoded.split_at(encoded.len() / 3);
    let (b, c) = rest.split_at(rest.len() / 2);

    term.write(format!("\x1b_Ga=T,f=32,s=2,v=1,i=17,m=1;{a}\x1b\\").as_bytes());
    term.write(format!("\x1b_Ga=T,i=17,m=1;{b}\x1b\\").as_bytes());
    term.write(format!("\x1b_Ga=T,i=17,m=0;{c}\x1b\\").as_bytes());

    assert!(term.kitty.contains(17));
    assert_eq!(term.kitty.get(17).unwrap().rgba, pixels);
    assert_eq!(term.kitty.placements().len(), 1);
    assert_eq!(term.kitty.placements()[0].image_id, 17);

    let events = term.drain_events();
    let responses: Vec<_> = events
        .iter()
        .filter_map(|e| match e {
            vterm_core::Event::Response(bytes) => Some(bytes.clone()),
            _ => None,
        })
        .collect();
    assert_eq!(responses, vec![b"\x1b_Gi=17;OK\x1b\\".to_vec()]);
}

#[test]
fn lru_eviction_keeps_recently_touched_entries() {
    let one_mb = 1024 * 1024;
    let mut cache = KittyImageCache::new(3 * one_mb, one_mb, 512);
    let img = |n: u8| DecodedImage { width: 512, height: 512, rgba: vec![n; one_mb] };

    cache.insert(1, img(1)).unwrap(); // A
    cache.insert(2, img(2)).unwrap(); // B
    cache.insert(3, img(3)).unwrap(); // C
    cache.touch(1); // display A again, making B the least-recently-used
    cache.insert(4, img(4)).unwrap(); // D, evicts B

    assert!(cache.contains(1));
    assert!(!cache.contains(2));
    assert!(cache.contains(3));
    assert!(cache.contains(4));
}

#[test]
fn echo_cascade_defense_drops_a_reflected_response() {
    let mut term = Terminal::new(20, 5);
    let pixels = vec![9u8; 4];
    use base64::Engine;
    let encoded = base64::engine::general_purpose::STANDARD.encode(&pixels);
    term.write(format!("\x1b_Ga=T,f=32,s=1,v=1,i=31,p=1;{encoded}\x1b\\").as_bytes());
    let _ = term.drain_events(); // the initial OK response and its placement

    let placements_before = term.kitty.placements().len();

    // A locally-echoing PTY bounces our own response body back as input.
    term.write(b"\x1b_Gi=31,p=1;OK\x1b\\");

    assert!(term.drain_events().is_empty());
    assert_eq!(term.kitty.placements().len(), placements_before);
}
