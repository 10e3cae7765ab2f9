use glam::Vec2;

/// Axis-aligned rectangle. The size is fixed once created; only the position
/// moves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    position: Vec2,
    size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::from_parts(Vec2::new(x, y), Vec2::new(width, height))
    }

    pub fn from_parts(position: Vec2, size: Vec2) -> Self {
        Self {
            position,
            size: size.max(Vec2::ZERO),
        }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn x(&self) -> f32 {
        self.position.x
    }

    pub fn y(&self) -> f32 {
        self.position.y
    }

    pub fn width(&self) -> f32 {
        self.size.x
    }

    pub fn height(&self) -> f32 {
        self.size.y
    }

    pub fn area(&self) -> f32 {
        self.size.x * self.size.y
    }

    pub fn is_empty(&self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    pub fn max(&self) -> Vec2 {
        self.position + self.size
    }

    /// True when the intersection has a strictly positive area. Rectangles
    /// that only share an edge or a corner do not overlap, and an empty
    /// rectangle overlaps nothing.
    pub fn overlaps(&self, other: &Rect) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        let (a_min, a_max) = (self.position, self.max());
        let (b_min, b_max) = (other.position, other.max());

        a_min.x < b_max.x && b_min.x < a_max.x && a_min.y < b_max.y && b_min.y < a_max.y
    }

    /// Area of the intersection, zero when the rectangles do not overlap.
    pub fn overlap_area(&self, other: &Rect) -> f32 {
        let extent = (self.max().min(other.max()) - self.position.max(other.position))
            .max(Vec2::ZERO);
        extent.x * extent.y
    }

    /// Half-open containment: the left and top edges are inside, the right
    /// and bottom edges are not.
    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x >= self.position.x
            && point.y >= self.position.y
            && point.x < self.position.x + self.size.x
            && point.y < self.position.y + self.size.y
    }
}

/// The play field, spanning `[0, width] x [0, height]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Arena {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    /// Largest top-left corner that keeps a rectangle of `size` inside the
    /// arena, or `None` when it cannot fit at all.
    pub fn max_origin(&self, size: Vec2) -> Option<Vec2> {
        let max = Vec2::new(self.width, self.height) - size;
        if max.x < 0.0 || max.y < 0.0 {
            None
        } else {
            Some(max)
        }
    }

    pub fn contains(&self, rect: &Rect) -> bool {
        match self.max_origin(rect.size()) {
            Some(max) => {
                let pos = rect.position();
                pos.x >= 0.0 && pos.y >= 0.0 && pos.x <= max.x && pos.y <= max.y
            }
            None => false,
        }
    }
}
