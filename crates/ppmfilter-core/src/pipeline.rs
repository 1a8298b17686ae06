//! Transform selection and the fixed order it is applied in.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::grid::Grid;
use crate::transform::{
    extreme_contrast, flatten_colors, flip_horizontal, flip_vertical, grayscale, invert_colors,
    ChannelMask,
};

/// A single transform step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Transform {
    FlipHorizontal,
    FlipVertical,
    Grayscale,
    InvertColors,
    FlattenColors(ChannelMask),
    ExtremeContrast,
}

impl Transform {
    pub fn apply(self, grid: Grid) -> Grid {
        match self {
            Transform::FlipHorizontal => flip_horizontal(grid),
            Transform::FlipVertical => flip_vertical(grid),
            Transform::Grayscale => grayscale(grid),
            Transform::InvertColors => invert_colors(grid),
            Transform::FlattenColors(mask) => flatten_colors(grid, mask),
            Transform::ExtremeContrast => extreme_contrast(grid),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Transform::FlipHorizontal => "flip-horizontal",
            Transform::FlipVertical => "flip-vertical",
            Transform::Grayscale => "grayscale",
            Transform::InvertColors => "invert-colors",
            Transform::FlattenColors(_) => "flatten-colors",
            Transform::ExtremeContrast => "extreme-contrast",
        }
    }
}

/// Which transforms to run.
///
/// The selection is order-free; [`Transforms::apply`] always runs the enabled
/// steps as horizontal flip, vertical flip, grayscale, inversion, flattening,
/// extreme contrast.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transforms {
    pub flip_horizontal: bool,
    pub flip_vertical: bool,
    pub grayscale: bool,
    pub invert: bool,
    /// Channels to zero; an empty mask disables flattening.
    pub flatten: ChannelMask,
    pub extreme_contrast: bool,
}

impl Transforms {
    pub fn new() -> Self {
        Self::default()
    }

    /// True if no transform is selected.
    pub fn is_identity(&self) -> bool {
        self.steps().is_empty()
    }

    /// Enabled steps in application order.
    pub fn steps(&self) -> Vec<Transform> {
        let candidates = [
            (self.flip_horizontal, Transform::FlipHorizontal),
            (self.flip_vertical, Transform::FlipVertical),
            (self.grayscale, Transform::Grayscale),
            (self.invert, Transform::InvertColors),
            (!self.flatten.is_empty(), Transform::FlattenColors(self.flatten)),
            (self.extreme_contrast, Transform::ExtremeContrast),
        ];
        candidates
            .into_iter()
            .filter_map(|(enabled, step)| enabled.then_some(step))
            .collect()
    }

    /// Run every enabled step on `grid`.
    pub fn apply(&self, grid: Grid) -> Grid {
        self.steps().into_iter().fold(grid, |grid, step| {
            debug!("pipeline: applying {}", step.name());
            step.apply(grid)
        })
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
