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

//! Error kinds for the core's fallible operations (`spec.md` §7). Everything
//! else in the core absorbs malformed input silently or via a `tracing::warn!`,
//! per the same table.

/// Failures from Kitty graphics command finalization (`spec.md` §4.F, §7).
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum KittyError {
    #[error("base64 payload decode failed")]
    #[diagnostic(code(vterm_core::kitty::base64_decode))]
    Base64Decode,

    #[error("zlib inflate failed")]
    #[diagnostic(code(vterm_core::kitty::inflate_failed))]
    InflateFailed,

    #[error("PNG decode failed")]
    #[diagnostic(code(vterm_core::kitty::png_decode))]
    PngDecode,

    #[error("unsupported transmission format {format}")]
    #[diagnostic(code(vterm_core::kitty::unsupported_format))]
    UnsupportedFormat { format: u32 },

    #[error("missing declared source dimensions for raw pixel format")]
    #[diagnostic(code(vterm_core::kitty::missing_dimensions))]
    MissingDimensions,

    #[error("decoded payload size does not match declared dimensions")]
    #[diagnostic(code(vterm_core::kitty::size_mismatch))]
    SizeMismatch,

    #[error("image exceeds the single-image size cap")]
    #[diagnostic(
        code(vterm_core::kitty::oversize_image),
        help("Raise `TerminalConfig::max_single_bytes`, or transmit a smaller image.")
    )]
    OversizeImage,

    #[error("image not found in cache")]
    #[diagnostic(code(vterm_core::kitty::image_not_found))]
    ImageNotFound,
}

impl KittyError {
    /// The wire status string used in the `ESC_Gi=...;<status>ESC\\` response
    /// envelope (`spec.md` §4.F/§7).
    pub fn wire_status(&self) -> String {
        match self {
            KittyError::ImageNotFound => format!("ENOENT:{self}"),
            _ => format!("EINVAL:{self}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_enoent() {
        assert!(KittyError::ImageNotFound.wire_status().starts_with("ENOENT:"));
    }

    #[test]
    fn other_errors_map_to_einval() {
        assert!(KittyError::Base64Decode.wire_status().starts_with("EINVAL:"));
    }
}
