//! Image transformations: mirroring and per-pixel color filters.
//!
//! Every transform takes ownership of a [`Grid`](crate::Grid) and returns a
//! grid of the same dimensions, so stages compose by moving the image from
//! one call to the next without aliasing.
//!
//! # Transform Order
//!
//! When several transforms are requested, the pipeline applies them in this
//! order (see [`Transforms`](crate::pipeline::Transforms)):
//! 1. Horizontal flip
//! 2. Vertical flip
//! 3. Grayscale
//! 4. Color inversion
//! 5. Color flattening
//! 6. Extreme contrast
//!
//! Most of these do not commute, so the order is part of the output contract.

mod color;
mod flip;
mod mask;

pub use color::{
    extreme_contrast, flatten_colors, gray_value, grayscale, invert_colors, CONTRAST_THRESHOLD,
};
pub use flip::{flip_horizontal, flip_vertical};
pub use mask::ChannelMask;
