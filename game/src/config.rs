//! Game configuration, read from an optional TOML file.
//!
//! Every section has defaults, so a file only needs the values it changes:
//!
//! ```toml
//! seed = 7
//!
//! [session]
//! time_limit_secs = 60.0
//!
//! [placement]
//! avoid_player = true
//! ```
//!
//! A `[[foods]]` table replaces the whole default food list.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::entity::Color;
use crate::error::ConfigError;
use crate::geometry::{Arena, Rect};
use crate::placement::{Fallback, Placer};
use crate::player::RelocationPolicy;

pub const DEFAULT_CONFIG_FILE: &str = "snack_arena.toml";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Fixed RNG seed; a fresh one is drawn from the OS when absent.
    pub seed: Option<u64>,
    pub window: WindowConfig,
    pub arena: ArenaConfig,
    pub session: SessionConfig,
    pub player: PlayerConfig,
    pub foods: Vec<FoodConfig>,
    pub placement: PlacementConfig,
    pub colors: ColorConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub fps: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub time_limit_secs: f32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub speed: f32,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FoodConfig {
    pub width: f32,
    pub height: f32,
    pub points: i32,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlacementConfig {
    pub max_attempts: u32,
    pub fallback: Fallback,
    pub avoid_player: bool,
    /// Upper bound on the share of the arena covered by entities.
    pub max_fill_ratio: f32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ColorConfig {
    pub background: Color,
    pub text: Color,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            window: WindowConfig::default(),
            arena: ArenaConfig::default(),
            session: SessionConfig::default(),
            player: PlayerConfig::default(),
            foods: default_foods(),
            placement: PlacementConfig::default(),
            colors: ColorConfig::default(),
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Snack Arena".to_string(),
            fps: 60,
        }
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 500.0,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            time_limit_secs: 30.0,
        }
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            x: 100.0,
            y: 100.0,
            width: 40.0,
            height: 40.0,
            speed: 300.0,
            color: Color(100, 40, 20),
        }
    }
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            max_attempts: 10_000,
            fallback: Fallback::LeastOverlap,
            avoid_player: false,
            max_fill_ratio: 0.5,
        }
    }
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            background: Color(36, 200, 255),
            text: Color::BLACK,
        }
    }
}

/// Three good items and six bad ones.
fn default_foods() -> Vec<FoodConfig> {
    let good = |points, color| FoodConfig {
        width: 50.0,
        height: 50.0,
        points,
        color,
    };
    let bad = |points| FoodConfig {
        width: 80.0,
        height: 80.0,
        points,
        color: Color::WHITE,
    };

    vec![
        good(1, Color::RED),
        good(2, Color::YELLOW),
        good(3, Color::GREEN),
        bad(-1),
        bad(-1),
        bad(-2),
        bad(-2),
        bad(-3),
        bad(-3),
    ]
}

fn invalid(msg: impl Into<String>) -> ConfigError {
    ConfigError::Invalid(msg.into())
}

impl GameConfig {
    /// Loads and validates a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Loads `path` if it exists, otherwise falls back to the defaults.
    /// Returns whether the file was used.
    pub fn load_or_default(path: &Path) -> Result<(Self, bool), ConfigError> {
        if path.exists() {
            Ok((Self::load(path)?, true))
        } else {
            let config = Self::default();
            config.validate()?;
            Ok((config, false))
        }
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn arena(&self) -> Arena {
        Arena::new(self.arena.width, self.arena.height)
    }

    pub fn placer(&self) -> Placer {
        Placer::new(
            self.arena(),
            self.placement.max_attempts,
            self.placement.fallback,
        )
    }

    pub fn relocation(&self) -> RelocationPolicy {
        RelocationPolicy {
            avoid_player: self.placement.avoid_player,
        }
    }

    pub fn player_rect(&self) -> Rect {
        let p = &self.player;
        Rect::new(p.x, p.y, p.width, p.height)
    }

    /// Rejects configurations that cannot produce a playable session, most
    /// importantly ones too crowded for food placement to succeed reliably.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let arena = self.arena();
        if !(arena.width > 0.0 && arena.height > 0.0)
            || !arena.width.is_finite()
            || !arena.height.is_finite()
        {
            return Err(invalid(format!(
                "arena must have a positive size, got {}x{}",
                arena.width, arena.height
            )));
        }
        if self.window.fps == 0 {
            return Err(invalid("window.fps must be at least 1"));
        }
        if !(self.session.time_limit_secs > 0.0) {
            return Err(invalid("session.time_limit_secs must be positive"));
        }

        let player = self.player_rect();
        if player.is_empty() || !arena.contains(&player) {
            return Err(invalid(format!(
                "player {}x{} at ({}, {}) must lie inside the {}x{} arena",
                player.width(),
                player.height(),
                player.x(),
                player.y(),
                arena.width,
                arena.height
            )));
        }
        if !(self.player.speed >= 0.0) {
            return Err(invalid("player.speed must not be negative"));
        }

        if self.foods.is_empty() {
            return Err(invalid("at least one [[foods]] entry is required"));
        }
        for (i, food) in self.foods.iter().enumerate() {
            let fits = food.width > 0.0
                && food.height > 0.0
                && food.width <= arena.width
                && food.height <= arena.height;
            if !fits {
                return Err(invalid(format!(
                    "food #{i} ({}x{}) does not fit in the arena",
                    food.width, food.height
                )));
            }
        }

        if self.placement.max_attempts == 0 {
            return Err(invalid("placement.max_attempts must be at least 1"));
        }
        let ratio = self.placement.max_fill_ratio;
        if !(ratio > 0.0 && ratio <= 1.0) {
            return Err(invalid("placement.max_fill_ratio must be in (0, 1]"));
        }

        let covered = player.area()
            + self
                .foods
                .iter()
                .map(|f| f.width * f.height)
                .sum::<f32>();
        if covered > ratio * arena.area() {
            return Err(invalid(format!(
                "entities cover {covered} of {} arena area, above the {ratio} fill limit",
                arena.area()
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = GameConfig::default();
        config.validate().unwrap();
        assert_eq!(config.foods.len(), 9);
        assert_eq!(config.foods.iter().filter(|f| f.points > 0).count(), 3);
        assert_eq!(config.session.time_limit_secs, 30.0);
    }

    #[test]
    fn empty_file_yields_defaults() {
        let config = GameConfig::from_toml_str("").unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = GameConfig::from_toml_str(
            r#"
            seed = 7

            [session]
            time_limit_secs = 60.0

            [placement]
            avoid_player = true
            fallback = "fail"
            "#,
        )
        .unwrap();

        assert_eq!(config.seed, Some(7));
        assert_eq!(config.session.time_limit_secs, 60.0);
        assert!(config.relocation().avoid_player);
        assert_eq!(config.placement.fallback, Fallback::Fail);
        assert_eq!(config.placement.max_attempts, 10_000);
        assert_eq!(config.arena, ArenaConfig::default());
    }

    #[test]
    fn foods_table_replaces_default_list() {
        let config = GameConfig::from_toml_str(
            r#"
            [[foods]]
            width = 30.0
            height = 30.0
            points = 5
            color = [1, 2, 3]
            "#,
        )
        .unwrap();

        assert_eq!(
            config.foods,
            vec![FoodConfig {
                width: 30.0,
                height: 30.0,
                points: 5,
                color: Color(1, 2, 3),
            }]
        );
    }

    #[test]
    fn parse_errors_are_reported() {
        let err = GameConfig::from_toml_str("[arena]\nwidth = \"wide\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn oversized_food_is_rejected() {
        let mut config = GameConfig::default();
        config.foods[0].width = 801.0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn crowded_arena_is_rejected() {
        let mut config = GameConfig::default();
        config.foods = (0..40)
            .map(|_| FoodConfig {
                width: 80.0,
                height: 80.0,
                points: -1,
                color: Color::WHITE,
            })
            .collect();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("fill limit"));
    }

    #[test]
    fn player_outside_arena_is_rejected() {
        let mut config = GameConfig::default();
        config.player.x = 790.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_attempts_is_rejected() {
        let mut config = GameConfig::default();
        config.placement.max_attempts = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn example_file_matches_defaults() {
        let path = Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/snack_arena.example.toml"));
        let config = GameConfig::load(path).unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let (config, from_file) =
            GameConfig::load_or_default(Path::new("does/not/exist.toml")).unwrap();
        assert!(!from_file);
        assert_eq!(config, GameConfig::default());
    }
}
