//! Image encoding for ppmfilter.
//!
//! This module provides functionality for:
//! - Rendering a [`Grid`](crate::Grid) as plain-text (`P3`) PPM
//! - Streaming the encoded text to any writer or to a file on disk
//!
//! The output is deterministic and preserves every channel value, but not the
//! whitespace layout of whatever file the grid was decoded from.

mod ppm;

pub use ppm::{encode_ppm, write_ppm, write_ppm_file, EncodeError, MAX_CHANNEL_VALUE};
