//! Image decoding for ppmfilter.
//!
//! This module provides functionality for:
//! - Parsing plain-text (`P3`) PPM content into a [`Grid`](crate::Grid)
//! - Reading PPM files from disk
//!
//! Decoding is all-or-nothing: any malformed or missing token aborts with a
//! [`DecodeError`] and no partial image is returned.
//!
//! # Examples
//!
//! ```ignore
//! use ppmfilter_core::decode::decode_ppm;
//!
//! let grid = decode_ppm("P3\n1 1\n255\n10 20 30\n").unwrap();
//! assert_eq!((grid.width(), grid.height()), (1, 1));
//! ```

mod ppm;
mod types;

pub use ppm::{decode_ppm, decode_ppm_bytes, read_ppm_file, PPM_TAG};
pub use types::DecodeError;
