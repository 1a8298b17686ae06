//! Proptest strategies shared by the module test suites.

use proptest::prelude::*;

use crate::grid::{Grid, Rgb};

pub fn rgb_strategy() -> impl Strategy<Value = Rgb> {
    any::<[u8; 3]>().prop_map(Rgb::from)
}

/// Small grids with arbitrary content (keep small for speed).
pub fn grid_strategy() -> impl Strategy<Value = Grid> {
    (1u32..=12, 1u32..=12).prop_flat_map(|(width, height)| {
        let count = (width * height) as usize;
        prop::collection::vec(rgb_strategy(), count..=count)
            .prop_map(move |pixels| Grid::new(width, height, pixels).unwrap())
    })
}
