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

//! Tracing setup, collapsed from `r3bl_tui`'s `core::log::tracing_init` down
//! to the single stderr layer this library needs — a terminal core doesn't
//! own the host's log destination, so it offers one convenience installer
//! rather than the teacher's full `SharedWriter`/file-rotation stack.

use tracing_subscriber::fmt;

/// Install a stderr `tracing_subscriber::fmt` layer at `level`. Intended for
/// examples, tests, and simple host binaries; a full application composes
/// its own subscriber around this crate's `tracing` events instead.
pub fn init_tracing(level: tracing::Level) {
    let _ = fmt().with_writer(std::io::stderr).with_max_level(level).try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_tracing_does_not_panic() {
        init_tracing(tracing::Level::DEBUG);
        tracing::debug!("vterm_core tracing initialized");
    }
}
