//! In-memory image representation.
//!
//! A [`Grid`] is a rectangular, row-major array of [`Rgb`] triples. Row 0 is
//! the top row of the source image. Channels are stored as `u8`, so every
//! value stays within 0..=255 by construction.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when a grid is assembled from raw parts.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    /// Width or height is zero.
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// Pixel count doesn't match the declared dimensions.
    #[error("Invalid pixel data: expected {expected} pixels (width * height), got {actual}")]
    SizeMismatch { expected: usize, actual: usize },
}

/// One pixel: red, green and blue channel bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels in red, green, blue order.
    #[inline]
    pub fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Apply `f` to each channel independently.
    #[inline]
    pub fn map(self, f: impl Fn(u8) -> u8) -> Self {
        Self::new(f(self.r), f(self.g), f(self.b))
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(px: Rgb) -> Self {
        px.channels()
    }
}

/// A decoded image: `width * height` pixels in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: u32,
    height: u32,
    pixels: Vec<Rgb>,
}

impl Grid {
    /// Create a grid from row-major pixels.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidDimensions`] if either dimension is zero and
    /// [`GridError::SizeMismatch`] if `pixels.len() != width * height`.
    pub fn new(width: u32, height: u32, pixels: Vec<Rgb>) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::InvalidDimensions { width, height });
        }
        let expected = (width as usize) * (height as usize);
        if pixels.len() != expected {
            return Err(GridError::SizeMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Create a grid where every pixel has the same color.
    pub fn filled(width: u32, height: u32, color: Rgb) -> Result<Self, GridError> {
        let count = (width as usize) * (height as usize);
        Self::new(width, height, vec![color; count])
    }

    /// Create a grid from an `image::RgbImage`.
    pub fn from_rgb_image(img: &image::RgbImage) -> Result<Self, GridError> {
        let (width, height) = img.dimensions();
        let pixels = img.pixels().map(|p| Rgb::from(p.0)).collect();
        Self::new(width, height, pixels)
    }

    /// Convert to an `image::RgbImage` for further processing.
    pub fn to_rgb_image(&self) -> image::RgbImage {
        image::RgbImage::from_fn(self.width, self.height, |x, y| {
            image::Rgb(self.pixel(y, x).channels())
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of pixels.
    pub fn pixel_count(&self) -> usize {
        self.pixels.len()
    }

    /// All pixels in row-major order.
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    pub(crate) fn pixels_mut(&mut self) -> &mut [Rgb] {
        &mut self.pixels
    }

    pub fn into_pixels(self) -> Vec<Rgb> {
        self.pixels
    }

    /// Pixel at (`row`, `col`).
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are outside the grid.
    pub fn pixel(&self, row: u32, col: u32) -> Rgb {
        assert!(
            row < self.height && col < self.width,
            "pixel ({row}, {col}) outside {}x{} grid",
            self.width,
            self.height
        );
        self.pixels[(row as usize) * (self.width as usize) + col as usize]
    }

    /// One row of pixels, left to right.
    ///
    /// # Panics
    ///
    /// Panics if `row` is not below the grid height.
    pub fn row(&self, row: u32) -> &[Rgb] {
        assert!(
            row < self.height,
            "row {row} outside {}x{} grid",
            self.width,
            self.height
        );
        let w = self.width as usize;
        let start = (row as usize) * w;
        &self.pixels[start..start + w]
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> std::slice::ChunksExact<'_, Rgb> {
        self.pixels.chunks_exact(self.width as usize)
    }

    pub(crate) fn rows_mut(&mut self) -> std::slice::ChunksExactMut<'_, Rgb> {
        self.pixels.chunks_exact_mut(self.width as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Grid {
        // 3x2, each pixel encodes its own position
        let pixels = (0..6u8).map(|i| Rgb::new(i, i * 10, i * 20)).collect();
        Grid::new(3, 2, pixels).unwrap()
    }

    #[test]
    fn test_grid_creation() {
        let grid = sample();
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.pixel_count(), 6);
    }

    #[test]
    fn test_grid_rejects_zero_dimensions() {
        assert_eq!(
            Grid::new(0, 2, vec![]),
            Err(GridError::InvalidDimensions {
                width: 0,
                height: 2
            })
        );
        assert!(Grid::filled(4, 0, Rgb::BLACK).is_err());
    }

    #[test]
    fn test_grid_rejects_size_mismatch() {
        let err = Grid::new(2, 2, vec![Rgb::BLACK; 3]).unwrap_err();
        assert_eq!(
            err,
            GridError::SizeMismatch {
                expected: 4,
                actual: 3
            }
        );
        assert_eq!(
            err.to_string(),
            "Invalid pixel data: expected 4 pixels (width * height), got 3"
        );
    }

    #[test]
    fn test_grid_row_major_access() {
        let grid = sample();
        assert_eq!(grid.pixel(0, 0), Rgb::new(0, 0, 0));
        assert_eq!(grid.pixel(0, 2), Rgb::new(2, 20, 40));
        assert_eq!(grid.pixel(1, 0), Rgb::new(3, 30, 60));
        assert_eq!(grid.row(1), &[Rgb::new(3, 30, 60), Rgb::new(4, 40, 80), Rgb::new(5, 50, 100)]);
        assert_eq!(grid.rows().count(), 2);
    }

    #[test]
    #[should_panic]
    fn test_grid_pixel_out_of_bounds() {
        sample().pixel(2, 0);
    }

    #[test]
    #[should_panic(expected = "row 2 outside 3x2 grid")]
    fn test_grid_row_out_of_bounds() {
        sample().row(2);
    }

    #[test]
    fn test_rgb_image_conversion() {
        let grid = sample();
        let img = grid.to_rgb_image();
        assert_eq!(img.dimensions(), (3, 2));
        assert_eq!(img.get_pixel(2, 1).0, [5, 50, 100]);

        let back = Grid::from_rgb_image(&img).unwrap();
        assert_eq!(back, grid);
    }

    #[test]
    fn test_rgb_map() {
        let px = Rgb::new(1, 2, 3).map(|c| c * 2);
        assert_eq!(px, Rgb::new(2, 4, 6));
        assert_eq!(<[u8; 3]>::from(px), [2, 4, 6]);
    }

    #[test]
    fn test_rgb_serde_roundtrip() {
        let px = Rgb::new(10, 20, 30);
        let json = serde_json::to_string(&px).unwrap();
        assert_eq!(json, r#"{"r":10,"g":20,"b":30}"#);
        assert_eq!(serde_json::from_str::<Rgb>(&json).unwrap(), px);
    }
}
