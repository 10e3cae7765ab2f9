use glam::Vec2;
use log::debug;
use rand::Rng;

use crate::entity::{Color, Entity};
use crate::error::PlacementError;
use crate::food::FoodItem;
use crate::geometry::{Arena, Rect};
use crate::placement::Placer;

/// Movement intent with each axis in `{-1, 0, 1}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Direction {
    x: i8,
    y: i8,
}

impl Direction {
    pub const NONE: Direction = Direction { x: 0, y: 0 };

    pub fn new(x: i8, y: i8) -> Self {
        Self {
            x: x.signum(),
            y: y.signum(),
        }
    }

    /// Combines held keys; opposing keys cancel out.
    pub fn from_keys(left: bool, right: bool, up: bool, down: bool) -> Self {
        Self::new(right as i8 - left as i8, down as i8 - up as i8)
    }

    pub fn x(&self) -> i8 {
        self.x
    }

    pub fn y(&self) -> i8 {
        self.y
    }

    pub fn as_vec2(&self) -> Vec2 {
        Vec2::new(self.x as f32, self.y as f32)
    }
}

/// Which entities a consumed food item must avoid when it is moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RelocationPolicy {
    /// Treat the player as an obstacle too. When off, relocated food may land
    /// on the player and be eaten again on the next frame.
    pub avoid_player: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    rect: Rect,
    speed: f32,
    score: i32,
    color: Color,
}

impl Player {
    pub fn new(rect: Rect, speed: f32, color: Color) -> Self {
        Self {
            rect,
            speed,
            score: 0,
            color,
        }
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn reset_score(&mut self) {
        self.score = 0;
    }

    /// Advances by `direction * speed * delta_time`. Each axis is committed
    /// only if the rectangle stays inside the arena on that axis; a blocked
    /// axis keeps its old coordinate instead of being clamped to the wall.
    pub fn move_by(&mut self, direction: Direction, delta_time: f32, arena: Arena) {
        let Some(max) = arena.max_origin(self.rect.size()) else {
            return;
        };
        let current = self.rect.position();
        let target = current + direction.as_vec2() * self.speed * delta_time;

        let x = if (0.0..=max.x).contains(&target.x) { target.x } else { current.x };
        let y = if (0.0..=max.y).contains(&target.y) { target.y } else { current.y };

        self.rect.set_position(Vec2::new(x, y));
    }

    pub fn touches(&self, food: &FoodItem) -> bool {
        self.rect.overlaps(food.rect())
    }

    /// Eats `foods[index]` if the player touches it, or unconditionally when
    /// `force` is set: the item is moved to a free spot and its points are
    /// added to the score. Returns whether the item was eaten; an index past
    /// the end eats nothing.
    ///
    /// Obstacles for the move are all the other food items, plus the player
    /// when the policy asks for it. On a placement error the score is left
    /// untouched.
    pub fn resolve_contact<R: Rng + ?Sized>(
        &mut self,
        index: usize,
        foods: &mut [FoodItem],
        placer: &Placer,
        policy: RelocationPolicy,
        rng: &mut R,
        force: bool,
    ) -> Result<bool, PlacementError> {
        let Some(target) = foods.get(index) else {
            return Ok(false);
        };
        if !force && !self.touches(target) {
            return Ok(false);
        }

        let mut obstacles: Vec<Rect> = foods
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != index)
            .map(|(_, food)| *food.rect())
            .collect();
        if policy.avoid_player {
            obstacles.push(self.rect);
        }

        let food = &mut foods[index];
        let from = food.rect().position();
        placer.place(food.rect_mut(), &obstacles, rng)?;
        self.score += food.points();

        debug!(
            "{} food #{index} ({:+}) moved {from} -> {}, score {}",
            food.kind(),
            food.points(),
            food.rect().position(),
            self.score
        );
        Ok(true)
    }
}

impl Entity for Player {
    fn rect(&self) -> &Rect {
        &self.rect
    }

    fn color(&self) -> Color {
        self.color
    }
}
