//! 2D dimensions for windows and screens

use serde::{Deserialize, Serialize};

use crate::Vec2;

/// Width and height in screen units
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    /// Create a new size
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Scale both dimensions by a factor
    pub fn scale(self, factor: f32) -> Size {
        Size::new(self.width * factor, self.height * factor)
    }

    /// Convert to a vector (width → x, height → y)
    pub fn as_vec2(self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}
