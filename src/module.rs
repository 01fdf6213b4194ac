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

//! Module dispatch (`spec.md` §4.E, §9 REDESIGN FLAGS: "global singletons"
//! and "dynamic signal connections" replace with an explicit, ordered
//! registry a host builds once and hands to the terminal).
//!
//! Three extension points, each tried in registration order with the first
//! claim short-circuiting the rest:
//! - [`StringEscapeHook`] — claim an OSC/DCS/PM/APC body the core didn't
//!   recognize itself (Kitty graphics claims APC before any host hook runs).
//! - [`RenderOverlay`] — contribute extra paint data a [`crate::renderer::Renderer`]
//!   can draw after the base grid.
//! - [`GlyphTransformer`] — rewrite a glyph just before it lands in the grid.

use crate::glyph::Glyph;

/// A string-escape body a host module may want to claim.
pub struct StringEscape<'a> {
    pub kind: crate::events::StringKind,
    pub body: &'a [u8],
}

pub trait StringEscapeHook {
    /// Return `true` to claim this body (stop trying later hooks).
    fn handle(&mut self, escape: &StringEscape<'_>) -> bool;
}

/// Extra paint data contributed alongside the base grid.
pub trait RenderOverlay {
    fn overlay(&self) -> Vec<crate::renderer::OverlayCell>;
}

pub trait GlyphTransformer {
    fn transform(&self, glyph: Glyph) -> Glyph;
}

/// Ordered, first-claim-wins registry of module extension points. Built once
/// by the host and handed to the terminal, replacing per-event
/// signal/callback wiring.
#[derive(Default)]
pub struct ModuleRegistry {
    escape_hooks: Vec<Box<dyn StringEscapeHook>>,
    overlays: Vec<Box<dyn RenderOverlay>>,
    transformers: Vec<Box<dyn GlyphTransformer>>,
    echo_guard: EchoGuard,
}

impl ModuleRegistry {
    pub fn new() -> Self { Self::default() }

    pub fn register_escape_hook(&mut self, hook: Box<dyn StringEscapeHook>) {
        self.escape_hooks.push(hook);
    }

    pub fn register_overlay(&mut self, overlay: Box<dyn RenderOverlay>) {
        self.overlays.push(overlay);
    }

    pub fn register_transformer(&mut self, transformer: Box<dyn GlyphTransformer>) {
        self.transformers.push(transformer);
    }

    /// Try each registered hook in order; stop at the first that claims it.
    pub fn dispatch_escape(&mut self, escape: &StringEscape<'_>) -> bool {
        self.escape_hooks.iter_mut().any(|hook| hook.handle(escape))
    }

    pub fn overlays(&self) -> impl Iterator<Item = &Box<dyn RenderOverlay>> { self.overlays.iter() }

    pub fn transform(&self, glyph: Glyph) -> Glyph {
        self.transformers.iter().fold(glyph, |g, t| t.transform(g))
    }

    pub fn echo_guard_mut(&mut self) -> &mut EchoGuard { &mut self.echo_guard }
}

/// Bounded record of recently-sent `Response` bytes (`spec.md` §4.F, §7:
/// "echo-cascade defense"). A Kitty client that blindly echoes the
/// terminal's own response back as input would otherwise loop forever;
/// recognizing and dropping an exact echo of something we *just* sent
/// breaks the cycle.
pub struct EchoGuard {
    recent: std::collections::VecDeque<Vec<u8>>,
    cap: usize,
}

impl EchoGuard {
    pub fn new(cap: usize) -> Self { Self { recent: std::collections::VecDeque::with_capacity(cap), cap } }

    pub fn record_sent(&mut self, bytes: &[u8]) {
        if self.recent.len() == self.cap {
            self.recent.pop_front();
        }
        self.recent.push_back(bytes.to_vec());
    }

    /// Returns `true` if `bytes` exactly matches something we sent
    /// ourselves recently, meaning the remote end is echoing it back.
    pub fn is_echo(&self, bytes: &[u8]) -> bool {
        self.recent.iter().any(|sent| sent == bytes)
    }
}

impl Default for EchoGuard {
    fn default() -> Self { Self::new(64) }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Claims(bool);
    impl StringEscapeHook for Claims {
        fn handle(&mut self, _escape: &StringEscape<'_>) -> bool { self.0 }
    }

    #[test]
    fn first_claiming_hook_short_circuits() {
        let mut registry = ModuleRegistry::new();
        registry.register_escape_hook(Box::new(Claims(false)));
        registry.register_escape_hook(Box::new(Claims(true)));
        let escape = StringEscape { kind: crate::events::StringKind::Osc, body: b"x" };
        assert!(registry.dispatch_escape(&escape));
    }

    #[test]
    fn echo_guard_recognizes_recent_sends() {
        let mut guard = EchoGuard::new(2);
        guard.record_sent(b"abc");
        assert!(guard.is_echo(b"abc"));
        assert!(!guard.is_echo(b"xyz"));
    }

    #[test]
    fn echo_guard_evicts_oldest_past_cap() {
        let mut guard = EchoGuard::new(1);
        guard.record_sent(b"first");
        guard.record_sent(b"second");
        assert!(!guard.is_echo(b"first"));
        assert!(guard.is_echo(b"second"));
    }
}
