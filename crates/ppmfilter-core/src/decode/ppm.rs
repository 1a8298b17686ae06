//! Plain (`P3`) PPM decoding.
//!
//! The whole input is split on ASCII whitespace into a flat token stream.
//! Tokens 0..4 form the header (tag, width, height, max value) and the next
//! `width * height * 3` tokens are the channel values, read row by row.

use std::fs;
use std::path::Path;

use log::{debug, trace};

use super::DecodeError;
use crate::grid::{Grid, Rgb};

/// Format tag for plain-text PPM.
pub const PPM_TAG: &str = "P3";

const HEADER_TOKENS: usize = 4;

/// Decode a plain PPM image from text.
///
/// # Errors
///
/// Returns a format error ([`DecodeError::is_format_error`]) if the header
/// is missing or malformed, if the pixel stream is shorter than the declared
/// dimensions require, or if any required token is not an integer in range.
/// Tokens past the last pixel are ignored.
pub fn decode_ppm(text: &str) -> Result<Grid, DecodeError> {
    let tokens: Vec<&str> = text.split_ascii_whitespace().collect();
    trace!("ppm: {} tokens", tokens.len());

    if tokens.len() < HEADER_TOKENS {
        return Err(DecodeError::MissingHeader {
            found: tokens.len(),
        });
    }
    if tokens[0] != PPM_TAG {
        return Err(DecodeError::UnsupportedFormat(tokens[0].to_string()));
    }

    let width = parse_number(&tokens, 1)?;
    let height = parse_number(&tokens, 2)?;
    // Max value must be numeric but is not otherwise used.
    parse_number(&tokens, 3)?;

    if width == 0 || height == 0 {
        return Err(DecodeError::InvalidDimensions { width, height });
    }

    let pixel_count = (width as usize)
        .checked_mul(height as usize)
        .filter(|n| n.checked_mul(3).is_some())
        .ok_or(DecodeError::InvalidDimensions { width, height })?;
    let expected = pixel_count * 3;
    let found = tokens.len() - HEADER_TOKENS;
    if found < expected {
        return Err(DecodeError::TruncatedPixelData { expected, found });
    }

    let mut pixels = Vec::with_capacity(pixel_count);
    let mut index = HEADER_TOKENS;
    for _ in 0..pixel_count {
        let r = parse_channel(&tokens, index)?;
        let g = parse_channel(&tokens, index + 1)?;
        let b = parse_channel(&tokens, index + 2)?;
        pixels.push(Rgb::new(r, g, b));
        index += 3;
    }

    debug!("ppm: decoded {}x{} image", width, height);

    // Dimensions and pixel count were validated above.
    Grid::new(width, height, pixels).map_err(|_| DecodeError::InvalidDimensions { width, height })
}

/// Decode a plain PPM image from raw bytes.
///
/// Input that is not valid UTF-8 is rejected with [`DecodeError::NotText`].
pub fn decode_ppm_bytes(bytes: &[u8]) -> Result<Grid, DecodeError> {
    let text = std::str::from_utf8(bytes).map_err(|_| DecodeError::NotText)?;
    decode_ppm(text)
}

/// Read and decode a plain PPM file.
///
/// The file is read in full and closed before decoding starts.
///
/// # Errors
///
/// Returns [`DecodeError::Access`] if the file cannot be opened or read, and
/// a format error if its content is malformed.
pub fn read_ppm_file(path: &Path) -> Result<Grid, DecodeError> {
    let bytes = fs::read(path).map_err(|source| DecodeError::Access {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("ppm: read {} bytes from {}", bytes.len(), path.display());
    decode_ppm_bytes(&bytes)
}

fn parse_number(tokens: &[&str], index: usize) -> Result<u32, DecodeError> {
    let token = tokens[index];
    token.parse::<u32>().map_err(|_| DecodeError::InvalidToken {
        index,
        token: token.to_string(),
    })
}

fn parse_channel(tokens: &[&str], index: usize) -> Result<u8, DecodeError> {
    let value = parse_number(tokens, index)?;
    u8::try_from(value).map_err(|_| DecodeError::ChannelOutOfRange { index, value })
}
