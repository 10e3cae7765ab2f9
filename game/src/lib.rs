//! Snack Arena: steer a block around a walled arena, eat the good food, dodge
//! the bad food, and beat the clock.
//!
//! Everything except [`app`] is independent of the windowing engine and can
//! be driven directly, e.g. from tests.

pub mod app;
pub mod config;
pub mod entity;
pub mod error;
pub mod food;
pub mod geometry;
pub mod placement;
pub mod player;
pub mod session;
pub mod state;

pub use config::GameConfig;
pub use error::{ConfigError, GameError, PlacementError};
pub use state::{FrameInput, Game, Phase};
