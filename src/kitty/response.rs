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

//! Kitty response envelope: `ESC _G i=<id>[,p=<pid>];<status> ESC \`
//! (`spec.md` §4.F, §7). Quiet levels: `0` always responds, `1` suppresses
//! the `OK` success response (errors still report), `2` suppresses both.

/// The APC body alone (`i=<id>[,p=<pid>];<status>`), with no `ESC _G`/`ST`
/// wrapper — this is what a terminal would see if a locally-echoing PTY
/// bounced our own response back as input, so it's what `EchoGuard` compares
/// against (`spec.md` §4.F, §7).
pub fn inner(image_id: u32, placement_id: Option<u32>, status: &str) -> String {
    let mut out = format!("i={image_id}");
    if let Some(pid) = placement_id {
        out.push_str(&format!(",p={pid}"));
    }
    out.push(';');
    out.push_str(status);
    out
}

pub fn format(image_id: u32, placement_id: Option<u32>, status: &str, quiet: u8) -> Option<Vec<u8>> {
    let is_ok = status == "OK";
    if quiet >= 2 || (quiet == 1 && is_ok) {
        return None;
    }
    let mut out = String::from("\x1b_G");
    out.push_str(&inner(image_id, placement_id, status));
    out.push_str("\x1b\\");
    Some(out.into_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_response_has_expected_envelope() {
        let bytes = format(7, None, "OK", 0).unwrap();
        assert_eq!(bytes, b"\x1b_Gi=7;OK\x1b\\");
    }

    #[test]
    fn quiet_one_suppresses_ok_but_not_errors() {
        assert!(format(7, None, "OK", 1).is_none());
        assert!(format(7, None, "EINVAL:bad", 1).is_some());
    }

    #[test]
    fn quiet_two_suppresses_everything() {
        assert!(format(7, None, "EINVAL:bad", 2).is_none());
    }
}
