//! Channel selection for color flattening.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Set of color channels to zero out.
///
/// Parsed from free text: the letters `r`, `g` and `b` (any case, any order,
/// repeats allowed) select red, green and blue. Every other character is
/// ignored, so parsing never fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelMask {
    pub red: bool,
    pub green: bool,
    pub blue: bool,
}

impl ChannelMask {
    pub const NONE: ChannelMask = ChannelMask {
        red: false,
        green: false,
        blue: false,
    };

    pub fn parse(spec: &str) -> Self {
        spec.chars().fold(Self::NONE, |mut mask, c| {
            match c.to_ascii_lowercase() {
                'r' => mask.red = true,
                'g' => mask.green = true,
                'b' => mask.blue = true,
                _ => {}
            }
            mask
        })
    }

    /// True if no channel is selected.
    pub fn is_empty(&self) -> bool {
        !(self.red || self.green || self.blue)
    }
}

impl FromStr for ChannelMask {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for ChannelMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (on, letter) in [(self.red, 'r'), (self.green, 'g'), (self.blue, 'b')] {
            if on {
                write!(f, "{letter}")?;
            }
        }
        Ok(())
    }
}
