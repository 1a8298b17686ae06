//! ppmfilter Core - plain PPM image filtering library
//!
//! This crate provides the core of ppmfilter: the in-memory image grid,
//! plain-text (`P3`) PPM decoding and encoding, and a small set of pixel-wise
//! and geometric transforms applied in a fixed order.
//!
//! # Data Flow
//!
//! ```text
//! text -> decode -> Grid -> Transforms::apply -> Grid -> encode -> text
//! ```
//!
//! Grids move between stages by value; no stage holds on to a grid after
//! handing it to the next.

pub mod decode;
pub mod encode;
pub mod grid;
pub mod pipeline;
pub mod transform;

#[cfg(test)]
mod test_support;

pub use decode::{decode_ppm, read_ppm_file, DecodeError};
pub use encode::{encode_ppm, write_ppm_file, EncodeError};
pub use grid::{Grid, GridError, Rgb};
pub use pipeline::{Transform, Transforms};
pub use transform::ChannelMask;
