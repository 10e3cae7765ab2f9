use serde::Deserialize;

use crate::geometry::Rect;

/// RGB color; deserializes from a `[r, g, b]` array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Color(pub u8, pub u8, pub u8);

impl Color {
    pub const BLACK: Color = Color(0, 0, 0);
    pub const WHITE: Color = Color(255, 255, 255);
    pub const RED: Color = Color(255, 0, 0);
    pub const YELLOW: Color = Color(255, 255, 0);
    pub const GREEN: Color = Color(0, 255, 0);
}

/// Anything that occupies a rectangle in the arena and can be drawn.
pub trait Entity {
    fn rect(&self) -> &Rect;

    fn color(&self) -> Color;
}
