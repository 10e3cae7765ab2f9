use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Error, PartialEq)]
pub enum PlacementError {
    #[error("no free spot found after {attempts} attempts; the arena is too crowded")]
    Exhausted { attempts: u32 },

    #[error("a {width}x{height} item does not fit in a {arena_width}x{arena_height} arena")]
    DoesNotFit {
        width: f32,
        height: f32,
        arena_width: f32,
        arena_height: f32,
    },
}

#[derive(Debug, Error, PartialEq)]
pub enum GameError {
    #[error("food placement failed: {0}")]
    Placement(#[from] PlacementError),
}
