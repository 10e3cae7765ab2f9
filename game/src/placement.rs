//! Rejection-sampling placement of a rectangle into free space.
//!
//! Candidate positions are drawn uniformly over every origin that keeps the
//! rectangle inside the arena. The first candidate that overlaps none of the
//! obstacles wins. The number of draws is capped; what happens when the cap is
//! hit depends on the [`Fallback`].

use glam::Vec2;
use log::{trace, warn};
use rand::Rng;
use serde::Deserialize;

use crate::error::PlacementError;
use crate::geometry::{Arena, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Fallback {
    /// Report [`PlacementError::Exhausted`].
    Fail,
    /// Keep the candidate with the smallest total overlap area.
    LeastOverlap,
}

/// Outcome of a successful placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub attempts: u32,
    /// False when the fallback had to accept an overlapping position.
    pub clean: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct Placer {
    arena: Arena,
    max_attempts: u32,
    fallback: Fallback,
}

impl Placer {
    pub fn new(arena: Arena, max_attempts: u32, fallback: Fallback) -> Self {
        Self {
            arena,
            max_attempts,
            fallback,
        }
    }

    /// Same bounds and cap, but never settles for an overlapping position.
    pub fn strict(&self) -> Self {
        Self {
            fallback: Fallback::Fail,
            ..*self
        }
    }

    pub fn arena(&self) -> Arena {
        self.arena
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn fallback(&self) -> Fallback {
        self.fallback
    }

    /// Moves `item` to a random position inside the arena that overlaps none
    /// of `obstacles`. The obstacle set must not contain `item` itself.
    ///
    /// On error the item is left at the last rejected candidate.
    pub fn place<R: Rng + ?Sized>(
        &self,
        item: &mut Rect,
        obstacles: &[Rect],
        rng: &mut R,
    ) -> Result<Placement, PlacementError> {
        let max = self
            .arena
            .max_origin(item.size())
            .ok_or(PlacementError::DoesNotFit {
                width: item.width(),
                height: item.height(),
                arena_width: self.arena.width,
                arena_height: self.arena.height,
            })?;

        let mut best: Option<(f32, Vec2)> = None;

        for attempt in 1..=self.max_attempts {
            let candidate = Vec2::new(rng.gen_range(0.0..=max.x), rng.gen_range(0.0..=max.y));
            item.set_position(candidate);

            if !obstacles.iter().any(|o| item.overlaps(o)) {
                trace!("placed {:?} after {attempt} attempt(s)", candidate);
                return Ok(Placement {
                    attempts: attempt,
                    clean: true,
                });
            }

            if self.fallback == Fallback::LeastOverlap {
                let overlap: f32 = obstacles.iter().map(|o| item.overlap_area(o)).sum();
                if best.map_or(true, |(least, _)| overlap < least) {
                    best = Some((overlap, candidate));
                }
            }
        }

        match best {
            Some((overlap, position)) => {
                warn!(
                    "no free spot after {} attempts, settling for {position:?} with overlap {overlap}",
                    self.max_attempts
                );
                item.set_position(position);
                Ok(Placement {
                    attempts: self.max_attempts,
                    clean: false,
                })
            }
            None => Err(PlacementError::Exhausted {
                attempts: self.max_attempts,
            }),
        }
    }
}
