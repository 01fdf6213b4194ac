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

//! Pixel decode: base64 → optional zlib inflate → RGBA (`spec.md` §4.F).
//! Supports the three transmission formats the protocol defines: `32`
//! (RGBA), `24` (RGB), and `100` (PNG).

use std::io::Read;

use crate::error::KittyError;

pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

/// `format`: 24, 32, or 100 (PNG). `width`/`height` are the sender-declared
/// dimensions, required for 24/32 and ignored for 100 (PNG carries its own).
pub fn decode(
    format: u32,
    compressed: bool,
    width: Option<u32>,
    height: Option<u32>,
    payload_b64: &[u8],
) -> Result<DecodedImage, KittyError> {
    use base64::Engine;
    let raw = base64::engine::general_purpose::STANDARD
        .decode(payload_b64)
        .map_err(|_| KittyError::Base64Decode)?;

    let raw = if compressed { inflate(&raw)? } else { raw };

    match format {
        100 => decode_png(&raw),
        32 => decode_raw(&raw, width, height, 4),
        24 => decode_raw(&raw, width, height, 3).map(|mut img| {
            img.rgba = rgb_to_rgba(&img.rgba);
            img
        }),
        other => Err(KittyError::UnsupportedFormat { format: other }),
    }
}

fn inflate(bytes: &[u8]) -> Result<Vec<u8>, KittyError> {
    let mut decoder = flate2::read::ZlibDecoder::new(bytes);
    let mut out = Vec::new();
    decoder.read_to_end(&mut out).map_err(|_| KittyError::InflateFailed)?;
    Ok(out)
}

fn decode_png(bytes: &[u8]) -> Result<DecodedImage, KittyError> {
    let decoder = png::Decoder::new(bytes);
    let mut reader = decoder.read_info().map_err(|_| KittyError::PngDecode)?;
    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf).map_err(|_| KittyError::PngDecode)?;
    let bytes = &buf[..info.buffer_size()];
    let rgba = match info.color_type {
        png::ColorType::Rgba => bytes.to_vec(),
        png::ColorType::Rgb => rgb_to_rgba(bytes),
        png::ColorType::Grayscale => bytes.iter().flat_map(|&g| [g, g, g, 255]).collect(),
        png::ColorType::GrayscaleAlpha => {
            bytes.chunks_exact(2).flat_map(|p| [p[0], p[0], p[0], p[1]]).collect()
        }
        png::ColorType::Indexed => return Err(KittyError::PngDecode),
    };
    Ok(DecodedImage { width: info.width, height: info.height, rgba })
}

fn decode_raw(
    bytes: &[u8],
    width: Option<u32>,
    height: Option<u32>,
    bytes_per_pixel: usize,
) -> Result<DecodedImage, KittyError> {
    let width = width.ok_or(KittyError::MissingDimensions)?;
    let height = height.ok_or(KittyError::MissingDimensions)?;
    let expected = width as usize * height as usize * bytes_per_pixel;
    if bytes.len() != expected {
        return Err(KittyError::SizeMismatch);
    }
    Ok(DecodedImage { width, height, rgba: bytes.to_vec() })
}

fn rgb_to_rgba(rgb: &[u8]) -> Vec<u8> {
    rgb.chunks_exact(3).flat_map(|p| [p[0], p[1], p[2], 255]).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_rgba_round_trips() {
        use base64::Engine;
        let pixels = vec![10u8, 20, 30, 255, 40, 50, 60, 255];
        let encoded = base64::engine::general_purpose::STANDARD.encode(&pixels);
        let img = decode(32, false, Some(2), Some(1), encoded.as_bytes()).unwrap();
        assert_eq!(img.rgba, pixels);
        assert_eq!((img.width, img.height), (2, 1));
    }

    #[test]
    fn rgb_gains_opaque_alpha() {
        use base64::Engine;
        let pixels = vec![10u8, 20, 30];
        let encoded = base64::engine::general_purpose::STANDARD.encode(&pixels);
        let img = decode(24, false, Some(1), Some(1), encoded.as_bytes()).unwrap();
        assert_eq!(img.rgba, vec![10, 20, 30, 255]);
    }

    #[test]
    fn missing_dimensions_errors_for_raw_formats() {
        use base64::Engine;
        let encoded = base64::engine::general_purpose::STANDARD.encode([0u8; 4]);
        let err = decode(32, false, None, None, encoded.as_bytes()).unwrap_err();
        assert!(matches!(err, KittyError::MissingDimensions));
    }

    #[test]
    fn size_mismatch_is_rejected() {
        use base64::Engine;
        let encoded = base64::engine::general_purpose::STANDARD.encode([0u8; 3]);
        let err = decode(32, false, Some(1), Some(1), encoded.as_bytes()).unwrap_err();
        assert!(matches!(err, KittyError::SizeMismatch));
    }
}
