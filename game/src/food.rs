use std::fmt;

use rand::Rng;

use crate::entity::{Color, Entity};
use crate::geometry::{Arena, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoodKind {
    Good,
    Bad,
}

impl fmt::Display for FoodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FoodKind::Good => "good",
            FoodKind::Bad => "bad",
        })
    }
}

/// A scoring target. Food is never removed from a session; eating it moves it
/// somewhere else.
#[derive(Debug, Clone, PartialEq)]
pub struct FoodItem {
    rect: Rect,
    points: i32,
    color: Color,
}

impl FoodItem {
    pub fn new(rect: Rect, points: i32, color: Color) -> Self {
        Self {
            rect,
            points,
            color,
        }
    }

    /// Creates an item at a uniformly random spot inside the arena, ignoring
    /// everything else. Items that cannot fit start at the origin.
    pub fn scattered<R: Rng + ?Sized>(
        arena: Arena,
        width: f32,
        height: f32,
        points: i32,
        color: Color,
        rng: &mut R,
    ) -> Self {
        let mut rect = Rect::new(0.0, 0.0, width, height);
        if let Some(max) = arena.max_origin(rect.size()) {
            rect.set_position(glam::Vec2::new(
                rng.gen_range(0.0..=max.x),
                rng.gen_range(0.0..=max.y),
            ));
        }
        Self::new(rect, points, color)
    }

    pub fn points(&self) -> i32 {
        self.points
    }

    pub fn kind(&self) -> FoodKind {
        if self.points < 0 {
            FoodKind::Bad
        } else {
            FoodKind::Good
        }
    }

    pub fn rect_mut(&mut self) -> &mut Rect {
        &mut self.rect
    }
}

impl Entity for FoodItem {
    fn rect(&self) -> &Rect {
        &self.rect
    }

    fn color(&self) -> Color {
        self.color
    }
}
