//! Error types for PPM decoding.

use std::path::PathBuf;

use thiserror::Error;

/// Error types for PPM decoding operations.
///
/// Errors fall into two kinds: access failures (the source could not be
/// read) and format failures (the token stream does not describe a valid
/// image). See [`DecodeError::is_access_error`] and
/// [`DecodeError::is_format_error`].
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The source file could not be opened or read.
    #[error("Cannot read {}: {source}", path.display())]
    Access {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input is not valid UTF-8 text.
    #[error("Input is not valid UTF-8 text")]
    NotText,

    /// The format tag is not `P3`.
    #[error("Unsupported format tag {0:?}, expected \"P3\"")]
    UnsupportedFormat(String),

    /// Fewer than four header tokens.
    #[error("Incomplete header: expected 4 tokens, found {found}")]
    MissingHeader { found: usize },

    /// Width or height is zero.
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// The pixel stream is shorter than the header requires.
    #[error("Truncated pixel data: expected {expected} channel values, found {found}")]
    TruncatedPixelData { expected: usize, found: usize },

    /// A token is not a non-negative integer.
    #[error("Invalid token {token:?} at position {index}")]
    InvalidToken { index: usize, token: String },

    /// A channel value does not fit in a byte.
    #[error("Channel value {value} at position {index} exceeds 255")]
    ChannelOutOfRange { index: usize, value: u32 },
}

impl DecodeError {
    /// True if the source itself could not be read.
    pub fn is_access_error(&self) -> bool {
        matches!(self, DecodeError::Access { .. })
    }

    /// True if the source was read but its content is malformed.
    pub fn is_format_error(&self) -> bool {
        !self.is_access_error()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_error_display() {
        let err = DecodeError::UnsupportedFormat("P6".to_string());
        assert_eq!(err.to_string(), "Unsupported format tag \"P6\", expected \"P3\"");

        let err = DecodeError::TruncatedPixelData {
            expected: 18,
            found: 17,
        };
        assert_eq!(
            err.to_string(),
            "Truncated pixel data: expected 18 channel values, found 17"
        );

        assert_eq!(DecodeError::NotText.to_string(), "Input is not valid UTF-8 text");
    }

    #[test]
    fn test_decode_error_kinds() {
        let access = DecodeError::Access {
            path: PathBuf::from("missing.ppm"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(access.is_access_error());
        assert!(!access.is_format_error());

        let format = DecodeError::MissingHeader { found: 2 };
        assert!(format.is_format_error());
        assert!(!format.is_access_error());
    }
}
