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

//! Streaming UTF-8 decoder that tolerates sequences split across write
//! boundaries (`spec.md` §4.B, §9).

/// Decodes a byte stream into runes, carrying at most 3 pending bytes of an
/// incomplete multi-byte sequence between calls to [`Utf8Decoder::feed`].
#[derive(Debug, Default)]
pub struct Utf8Decoder {
    pending: Vec<u8>,
}

impl Utf8Decoder {
    pub fn new() -> Self { Self { pending: Vec::with_capacity(4) } }

    /// Decode `bytes`, appending any carried-over partial sequence first.
    /// Invalid bytes are reported as `'\u{FFFD}'` and the decoder advances by
    /// one byte past them.
    pub fn feed(&mut self, bytes: &[u8]) -> Vec<char> {
        let mut buf = std::mem::take(&mut self.pending);
        buf.extend_from_slice(bytes);

        let mut out = Vec::with_capacity(buf.len());
        let mut i = 0;
        while i < buf.len() {
            let b0 = buf[i];
            if b0 < 0x80 {
                out.push(b0 as char);
                i += 1;
                continue;
            }
            let seq_len = utf8_seq_len(b0);
            let Some(seq_len) = seq_len else {
                out.push('\u{FFFD}');
                i += 1;
                continue;
            };
            if i + seq_len > buf.len() {
                // Incomplete sequence: might just be split across a write
                // boundary, or might be genuinely invalid once the rest
                // arrives. Cap at 4 bytes (spec's `Saved partial-UTF-8 bytes
                // (<=4)`); if it can never complete, drop one byte.
                if buf.len() - i <= 4 {
                    self.pending = buf[i..].to_vec();
                    return out;
                }
                out.push('\u{FFFD}');
                i += 1;
                continue;
            }
            match std::str::from_utf8(&buf[i..i + seq_len]) {
                Ok(s) => {
                    out.push(s.chars().next().unwrap());
                    i += seq_len;
                }
                Err(_) => {
                    out.push('\u{FFFD}');
                    i += 1;
                }
            }
        }
        out
    }
}

/// Expected total sequence length for a UTF-8 lead byte, or `None` if `b` is
/// not a valid lead byte (a stray continuation byte or an invalid prefix).
fn utf8_seq_len(b: u8) -> Option<usize> {
    if b & 0b1110_0000 == 0b1100_0000 {
        Some(2)
    } else if b & 0b1111_0000 == 0b1110_0000 {
        Some(3)
    } else if b & 0b1111_1000 == 0b1111_0000 {
        Some(4)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_decodes_directly() {
        let mut d = Utf8Decoder::new();
        assert_eq!(d.feed(b"abc"), vec!['a', 'b', 'c']);
    }

    #[test]
    fn four_byte_sequence_fed_one_byte_at_a_time() {
        let mut d = Utf8Decoder::new();
        let bytes = "\u{1F600}".as_bytes(); // 4-byte emoji
        assert!(d.feed(&bytes[0..1]).is_empty());
        assert!(d.feed(&bytes[1..2]).is_empty());
        assert!(d.feed(&bytes[2..3]).is_empty());
        let out = d.feed(&bytes[3..4]);
        assert_eq!(out, vec!['\u{1F600}']);
    }

    #[test]
    fn invalid_lead_byte_emits_replacement_char() {
        let mut d = Utf8Decoder::new();
        let out = d.feed(&[0xFF, b'a']);
        assert_eq!(out, vec!['\u{FFFD}', 'a']);
    }

    #[test]
    fn stray_continuation_byte_emits_replacement_char() {
        let mut d = Utf8Decoder::new();
        let out = d.feed(&[0x80]);
        assert_eq!(out, vec!['\u{FFFD}']);
    }
}
