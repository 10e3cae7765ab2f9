use std::path::Path;

use anyhow::Context;
use engine::EngineContext;
use log::info;

use snack_arena::app::ArenaScene;
use snack_arena::config::{GameConfig, DEFAULT_CONFIG_FILE};
use snack_arena::Game;

fn main() -> anyhow::Result<()> {
    engine::init_logging();

    let (config, from_file) = GameConfig::load_or_default(Path::new(DEFAULT_CONFIG_FILE))
        .with_context(|| format!("failed to load {DEFAULT_CONFIG_FILE}"))?;
    if from_file {
        info!("loaded {DEFAULT_CONFIG_FILE}");
    } else {
        info!("no {DEFAULT_CONFIG_FILE} found, using built-in defaults");
    }

    // ---- Create engine context (game owns this) ----
    let ctx = EngineContext::new(ArenaScene::window_settings(&config))
        .context("failed to create the event loop")?;
    ctx.run(ArenaScene::new(Game::new(config)))
        .context("game loop stopped")?;

    Ok(())
}
