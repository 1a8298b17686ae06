//! Per-pixel color filters.
//!
//! Each filter maps every pixel independently, so results never depend on
//! pixel position and dimensions are preserved.

use super::ChannelMask;
use crate::grid::{Grid, Rgb};

/// Channels below this value go to 0 under [`extreme_contrast`], the rest to 255.
pub const CONTRAST_THRESHOLD: u8 = 128;

fn map_pixels(mut grid: Grid, f: impl Fn(Rgb) -> Rgb) -> Grid {
    for px in grid.pixels_mut() {
        *px = f(*px);
    }
    grid
}

/// Truncated mean of a pixel's three channels.
#[inline]
pub fn gray_value(px: Rgb) -> u8 {
    let sum = px.r as u16 + px.g as u16 + px.b as u16;
    // sum <= 765, so the mean fits in a byte
    (sum / 3) as u8
}

/// Convert to grayscale: all three channels become `(r + g + b) / 3`.
pub fn grayscale(grid: Grid) -> Grid {
    map_pixels(grid, |px| {
        let v = gray_value(px);
        Rgb::new(v, v, v)
    })
}

/// Invert every channel: `c -> 255 - c`.
pub fn invert_colors(grid: Grid) -> Grid {
    map_pixels(grid, |px| px.map(|c| 255 - c))
}

/// Zero the channels selected by `mask` in every pixel.
///
/// An empty mask leaves the grid untouched.
pub fn flatten_colors(grid: Grid, mask: ChannelMask) -> Grid {
    if mask.is_empty() {
        return grid;
    }
    map_pixels(grid, |px| Rgb {
        r: if mask.red { 0 } else { px.r },
        g: if mask.green { 0 } else { px.g },
        b: if mask.blue { 0 } else { px.b },
    })
}

/// Threshold each channel independently to 0 or 255.
pub fn extreme_contrast(grid: Grid) -> Grid {
    map_pixels(grid, |px| {
        px.map(|c| if c < CONTRAST_THRESHOLD { 0 } else { 255 })
    })
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::test_support::grid_strategy;
    use proptest::prelude::*;

    proptest! {
        /// Property: inverting twice is the identity.
        #[test]
        fn prop_invert_involution(grid in grid_strategy()) {
            prop_assert_eq!(invert_colors(invert_colors(grid.clone())), grid);
        }

        /// Property: grayscale is idempotent.
        #[test]
        fn prop_grayscale_idempotent(grid in grid_strategy()) {
            let once = grayscale(grid);
            prop_assert_eq!(grayscale(once.clone()), once);
        }

        /// Property: grayscale output has equal channels.
        #[test]
        fn prop_grayscale_equal_channels(grid in grid_strategy()) {
            for px in grayscale(grid).pixels() {
                prop_assert!(px.r == px.g && px.g == px.b);
            }
        }

        /// Property: extreme contrast is idempotent.
        #[test]
        fn prop_extreme_contrast_idempotent(grid in grid_strategy()) {
            let once = extreme_contrast(grid);
            prop_assert_eq!(extreme_contrast(once.clone()), once);
        }

        /// Property: extreme contrast only yields 0 or 255.
        #[test]
        fn prop_extreme_contrast_binary(grid in grid_strategy()) {
            for px in extreme_contrast(grid).pixels() {
                for c in px.channels() {
                    prop_assert!(c == 0 || c == 255);
                }
            }
        }

        /// Property: flattening zeroes selected channels and keeps the others.
        #[test]
        fn prop_flatten_selected_only(
            grid in grid_strategy(),
            red in any::<bool>(),
            green in any::<bool>(),
            blue in any::<bool>(),
        ) {
            let mask = ChannelMask { red, green, blue };
            let out = flatten_colors(grid.clone(), mask);
            for (before, after) in grid.pixels().iter().zip(out.pixels()) {
                prop_assert_eq!(after.r, if red { 0 } else { before.r });
                prop_assert_eq!(after.g, if green { 0 } else { before.g });
                prop_assert_eq!(after.b, if blue { 0 } else { before.b });
            }
        }
    }
}
