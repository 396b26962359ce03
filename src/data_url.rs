//! Decoding of images embedded as `data:` URLs.
//!
//! The capture tool exports `data:[<mediatype>][;base64],<payload>` strings.
//! Everything after the first comma is treated as base64, whether or not the
//! header carries the `;base64` marker. Bytes outside the base64 alphabet
//! (line breaks, spaces) are dropped, decoding stops after the first padded
//! quantum, and the padding itself must be complete.

use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine as _;
use image::RgbImage;
use log::debug;

use crate::error::DecodeError;

const DATA_URL_SCHEME: &str = "data:";

// Standard alphabet, padding required
const PAYLOAD_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::RequireCanonical)
        .with_decode_allow_trailing_bits(true),
);

fn is_payload_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'+' | b'/' | b'=')
}

/// Keep alphabet bytes and cut the payload after its first padded quantum.
fn normalize_payload(payload: &str) -> Vec<u8> {
    let mut filtered: Vec<u8> = payload.bytes().filter(|&b| is_payload_byte(b)).collect();
    if let Some(data_end) = filtered.iter().position(|&b| b == b'=') {
        let needed = (4 - data_end % 4) % 4;
        let present = filtered[data_end..]
            .iter()
            .take_while(|&&b| b == b'=')
            .count();
        filtered.truncate(data_end + needed.min(present));
    }
    filtered
}

/// Extract and base64-decode the payload of a data URL.
pub fn decode_data_url(data_url: &str) -> Result<Vec<u8>, DecodeError> {
    if !data_url.starts_with(DATA_URL_SCHEME) {
        return Err(DecodeError::NotADataUrl);
    }
    let (_header, payload) = data_url
        .split_once(',')
        .ok_or(DecodeError::MissingPayload)?;
    Ok(PAYLOAD_ENGINE.decode(normalize_payload(payload))?)
}

/// The media type declared in a data URL header, if any.
pub fn media_type(data_url: &str) -> Option<&str> {
    let header = data_url.strip_prefix(DATA_URL_SCHEME)?.split(',').next()?;
    let media_type = header.split(';').next()?;
    (!media_type.is_empty()).then_some(media_type)
}

/// Decode a data URL all the way to 3-channel pixels.
///
/// Alpha and palette images are flattened to RGB so the result can go
/// straight to a JPEG encoder.
pub fn decode_embedded_image(data_url: &str) -> Result<RgbImage, DecodeError> {
    let bytes = decode_data_url(data_url)?;
    debug!(
        "Decoding {} bytes of {}",
        bytes.len(),
        media_type(data_url).unwrap_or("unspecified media type")
    );
    let image = image::load_from_memory(&bytes)?;
    Ok(image.to_rgb8())
}
