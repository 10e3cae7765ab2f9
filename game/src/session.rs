use log::info;
use rand::Rng;

use crate::config::GameConfig;
use crate::entity::Entity;
use crate::error::PlacementError;
use crate::food::FoodItem;
use crate::geometry::Arena;
use crate::placement::Placer;
use crate::player::{Direction, Player, RelocationPolicy};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    Running,
    Expired,
}

/// One timed play-through. Owns the player and every food item; nothing
/// survives into the next session.
#[derive(Debug, Clone)]
pub struct Session {
    arena: Arena,
    placer: Placer,
    policy: RelocationPolicy,
    player: Player,
    foods: Vec<FoodItem>,
    elapsed: f32,
    time_limit: f32,
}

impl Session {
    /// Builds fresh entities from `config` and primes them: every food item
    /// is relocated once, in order, clear of the player and of every other
    /// item. The score picked up while priming is discarded.
    ///
    /// Priming never accepts an overlapping fallback position, so a crowded
    /// configuration fails here instead of during play.
    pub fn new<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> Result<Self, PlacementError> {
        let arena = config.arena();
        let player = Player::new(config.player_rect(), config.player.speed, config.player.color);
        let foods = config
            .foods
            .iter()
            .map(|f| FoodItem::scattered(arena, f.width, f.height, f.points, f.color, rng))
            .collect();

        let mut session = Self::from_parts(
            config.placer(),
            config.relocation(),
            player,
            foods,
            config.session.time_limit_secs,
        );
        session.prime(rng)?;

        info!(
            "session started: {} food items, {}s on the clock",
            session.foods.len(),
            session.time_limit
        );
        Ok(session)
    }

    /// Assembles a session from ready-made entities, without priming.
    pub fn from_parts(
        placer: Placer,
        policy: RelocationPolicy,
        player: Player,
        foods: Vec<FoodItem>,
        time_limit: f32,
    ) -> Self {
        Self {
            arena: placer.arena(),
            placer,
            policy,
            player,
            foods,
            elapsed: 0.0,
            time_limit,
        }
    }

    fn prime<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), PlacementError> {
        let strict = self.placer.strict();
        // the relocation policy only governs contact; spawn always avoids the player
        let spawn = RelocationPolicy { avoid_player: true };
        for index in 0..self.foods.len() {
            self.player
                .resolve_contact(index, &mut self.foods, &strict, spawn, rng, true)?;
        }
        self.player.reset_score();
        Ok(())
    }

    /// One frame of play: move, eat whatever the player touches (in food
    /// order), then advance the clock.
    pub fn tick<R: Rng + ?Sized>(
        &mut self,
        direction: Direction,
        delta_time: f32,
        rng: &mut R,
    ) -> Result<Tick, PlacementError> {
        self.player.move_by(direction, delta_time, self.arena);

        for index in 0..self.foods.len() {
            self.player
                .resolve_contact(index, &mut self.foods, &self.placer, self.policy, rng, false)?;
        }

        self.elapsed += delta_time.max(0.0);
        Ok(if self.is_expired() {
            Tick::Expired
        } else {
            Tick::Running
        })
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn foods(&self) -> &[FoodItem] {
        &self.foods
    }

    /// Player first, then food in order; later entities draw on top.
    pub fn entities(&self) -> impl Iterator<Item = &dyn Entity> {
        std::iter::once(&self.player as &dyn Entity)
            .chain(self.foods.iter().map(|f| f as &dyn Entity))
    }

    pub fn score(&self) -> i32 {
        self.player.score()
    }

    pub fn arena(&self) -> Arena {
        self.arena
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn time_limit(&self) -> f32 {
        self.time_limit
    }

    pub fn remaining(&self) -> f32 {
        (self.time_limit - self.elapsed).max(0.0)
    }

    pub fn is_expired(&self) -> bool {
        self.elapsed >= self.time_limit
    }
}
