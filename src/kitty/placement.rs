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

//! A single image placement: which image, at which cell, tracked so a host
//! renderer can look placements up without re-parsing APC commands
//! (`spec.md` §4.F).

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub image_id: u32,
    pub placement_id: u32,
    pub col: usize,
    pub row: usize,
}

/// What a `a=d` delete command targets (`spec.md` §4.F).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteTarget {
    /// `d=a`/`d=A`: every placement.
    All,
    /// `d=i`/`d=I`: a specific image id (and, if given, placement id).
    Image { image_id: u32, placement_id: Option<u32> },
}
