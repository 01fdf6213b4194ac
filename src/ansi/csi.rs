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

//! CSI parameter parsing: up to 16 signed integer parameters, a private `?`
//! marker, and a single intermediate byte (`spec.md` §4.B, §5).

use smallvec::SmallVec;

/// Parsed CSI parameter list. `spec.md` caps this at 16 params; extras are
/// dropped rather than erroring.
#[derive(Debug, Clone, Default)]
pub struct CsiParams {
    values: SmallVec<[i64; 16]>,
    pub private: bool,
    pub intermediate: Option<u8>,
}

const MAX_PARAMS: usize = 16;

impl CsiParams {
    /// Parse the bytes collected between `CSI` and the final byte. `buf` may
    /// contain a leading `?` (private marker, stripped here) and at most one
    /// trailing intermediate byte (0x20..=0x2F), tracked separately by the
    /// caller and passed in as `intermediate`.
    pub fn parse(buf: &[u8], intermediate: Option<u8>) -> Self {
        let (private, digits) = match buf.split_first() {
            Some((b'?', rest)) => (true, rest),
            _ => (false, buf),
        };

        let mut values = SmallVec::new();
        for field in digits.split(|&b| b == b';') {
            if values.len() >= MAX_PARAMS {
                break;
            }
            let text = std::str::from_utf8(field).unwrap_or("");
            let n: i64 = text.parse().unwrap_or(0);
            values.push(n);
        }
        Self { values, private, intermediate }
    }

    /// `params[i]`, defaulting both missing and explicit-zero entries to
    /// `default` (the CSI convention: `0` and omitted mean the same thing).
    pub fn get(&self, i: usize, default: i64) -> i64 {
        match self.values.get(i) {
            Some(&0) | None => default,
            Some(&v) => v,
        }
    }

    /// Like `get`, but `0` is a meaningful value (used by a handful of
    /// sequences, e.g. SGR color-index subparameters).
    pub fn get_raw(&self, i: usize, default: i64) -> i64 {
        self.values.get(i).copied().unwrap_or(default)
    }

    pub fn len(&self) -> usize { self.values.len() }
    pub fn is_empty(&self) -> bool { self.values.is_empty() }
    pub fn iter(&self) -> impl Iterator<Item = i64> + '_ { self.values.iter().copied() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_param_defaults() {
        let p = CsiParams::parse(b"", None);
        assert_eq!(p.get(0, 1), 1);
    }

    #[test]
    fn private_marker_is_stripped() {
        let p = CsiParams::parse(b"?1049", None);
        assert!(p.private);
        assert_eq!(p.get(0, 0), 1049);
    }

    #[test]
    fn multiple_params_split_on_semicolon() {
        let p = CsiParams::parse(b"1;31", None);
        assert_eq!(p.get(0, 0), 1);
        assert_eq!(p.get(1, 0), 31);
    }

    #[test]
    fn explicit_zero_falls_back_to_default() {
        let p = CsiParams::parse(b"0", None);
        assert_eq!(p.get(0, 5), 5);
    }

    #[test]
    fn excess_params_are_dropped_not_errored() {
        let many = (0..20).map(|n| n.to_string()).collect::<Vec<_>>().join(";");
        let p = CsiParams::parse(many.as_bytes(), None);
        assert_eq!(p.len(), MAX_PARAMS);
    }
}
