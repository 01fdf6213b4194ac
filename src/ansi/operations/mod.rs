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

//! CSI/OSC dispatch, split by concern the way the teacher's ANSI parser
//! splits `sgr_ops`/`cursor_ops` (`examples/r3bl-org-r3bl-open-core`).

pub mod cursor_ops;
pub mod erase_ops;
pub mod line_ops;
pub mod mode_ops;
pub mod osc_ops;
pub mod scroll_ops;
pub mod sgr_ops;
pub mod tab_ops;
