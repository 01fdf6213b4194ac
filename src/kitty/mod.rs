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

//! Kitty terminal graphics protocol (`spec.md` §4.F): APC command parsing,
//! chunked transmission, pixel decode, an LRU-evicted image cache, and
//! placement tracking. No pixel rendering happens here — that's the host
//! [`crate::renderer::Renderer`]'s job; this module only tracks what image
//! data and placements exist.

pub mod cache;
pub mod command;
pub mod image;
pub mod placement;
pub mod response;

pub use cache::KittyImageCache;
pub use placement::Placement;
