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

//! In-memory terminal configuration. No YAML/file loading and no CLI parsing
//! happen here — those are explicitly out of this crate's scope
//! (`spec.md` §1); this is a plain value type a host can plug into whatever
//! config layer it owns.

use serde::{Deserialize, Serialize};

/// Default Kitty image cache total RAM cap: 320 MiB.
pub const DEFAULT_MAX_TOTAL_BYTES: usize = 320 * 1024 * 1024;
/// Default Kitty single-image RAM cap: 64 MiB.
pub const DEFAULT_MAX_SINGLE_BYTES: usize = 64 * 1024 * 1024;
/// Default Kitty placement count cap.
pub const DEFAULT_MAX_PLACEMENTS: usize = 512;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerminalConfig {
    /// Tab stop spacing used by `resize`'s tab-stop rebuild (`spec.md` §4.C).
    pub tabstop: usize,
    /// Selection word-snap delimiter set (`spec.md` §4.D). Defaults to ASCII
    /// space only.
    pub delimiters: String,
    /// Resolves the open wcwidth question in `spec.md` §9: ambiguous-width
    /// runes (e.g. private-use Powerline glyphs) are width 1 unless this is
    /// set, matching the fix the original source applied.
    pub wcwidth_ambiguous_is_wide: bool,
    pub max_total_bytes: usize,
    pub max_single_bytes: usize,
    pub max_placements: usize,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            tabstop: 8,
            delimiters: " ".to_string(),
            wcwidth_ambiguous_is_wide: false,
            max_total_bytes: DEFAULT_MAX_TOTAL_BYTES,
            max_single_bytes: DEFAULT_MAX_SINGLE_BYTES,
            max_placements: DEFAULT_MAX_PLACEMENTS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_delimiters_is_ascii_space_only() {
        assert_eq!(TerminalConfig::default().delimiters, " ");
    }
}
