//! Binds the game to the engine: keys in, rectangles and text out.

use engine::{Canvas, Flow, InputState, KeyCode, Rgb888, Scene, WindowSettings};

use crate::config::GameConfig;
use crate::entity::{Color, Entity};
use crate::player::Direction;
use crate::state::{FrameInput, Game, Phase};

const START_PROMPT: &str = "Press 'SPACE' To Start";
const GLYPH_WIDTH: i32 = 10;

pub struct ArenaScene {
    game: Game,
}

fn rgb(color: Color) -> Rgb888 {
    Rgb888::new(color.0, color.1, color.2)
}

impl ArenaScene {
    pub fn new(game: Game) -> Self {
        Self { game }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn window_settings(config: &GameConfig) -> WindowSettings {
        WindowSettings {
            title: config.window.title.clone(),
            width: config.arena.width.ceil() as u32,
            height: config.arena.height.ceil() as u32,
            fps: config.window.fps,
        }
    }

    /// Arrow keys steer, Space starts a session.
    pub fn frame_input(input: &InputState, delta_time: f32) -> FrameInput {
        FrameInput {
            direction: Direction::from_keys(
                input.is_held(KeyCode::ArrowLeft),
                input.is_held(KeyCode::ArrowRight),
                input.is_held(KeyCode::ArrowUp),
                input.is_held(KeyCode::ArrowDown),
            ),
            start: input.was_pressed(KeyCode::Space),
            delta_time,
        }
    }
}

fn centered_x(canvas: &Canvas, text: &str) -> i32 {
    (canvas.width() as i32 - text.len() as i32 * GLYPH_WIDTH) / 2
}

impl Scene for ArenaScene {
    fn update(&mut self, input: &InputState, delta_time: f32) -> anyhow::Result<Flow> {
        self.game.update(&Self::frame_input(input, delta_time))?;
        Ok(Flow::Continue)
    }

    fn draw(&self, canvas: &mut Canvas) {
        let colors = &self.game.config().colors;
        let text = rgb(colors.text);
        canvas.fill(rgb(colors.background));

        match self.game.phase() {
            Phase::Start { last_score } => {
                let x = centered_x(canvas, START_PROMPT);
                canvas.text(START_PROMPT, x, 100, text);
                if let Some(score) = last_score {
                    let line = format!("Last score: {score}");
                    let x = centered_x(canvas, &line);
                    canvas.text(&line, x, 140, text);
                }
            }
            Phase::Play(session) => {
                for entity in session.entities() {
                    let r = entity.rect();
                    canvas.fill_rect(r.x(), r.y(), r.width(), r.height(), rgb(entity.color()));
                }
                canvas.text(&format!("Points: {}", session.score()), 0, 0, text);
                canvas.text(&format!("Time: {}", session.elapsed() as u32), 0, 30, text);
            }
        }
    }
}
