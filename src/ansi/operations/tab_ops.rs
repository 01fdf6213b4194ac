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

//! `CSI g` TBC: clear tab stops (`spec.md` §4.B).

use crate::ansi::CsiParams;
use crate::screen::Terminal;

pub fn tbc(term: &mut Terminal, p: &CsiParams) {
    match p.get(0, 0) {
        3 => term.clear_all_tabstops(),
        _ => term.clear_tabstop_at_cursor(),
    }
}
