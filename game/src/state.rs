use log::{debug, info};
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::config::GameConfig;
use crate::error::GameError;
use crate::player::Direction;
use crate::session::{Session, Tick};

/// Everything the game needs from the shell for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInput {
    pub direction: Direction,
    /// The start key went down this frame.
    pub start: bool,
    pub delta_time: f32,
}

impl FrameInput {
    pub fn idle(delta_time: f32) -> Self {
        Self {
            direction: Direction::NONE,
            start: false,
            delta_time,
        }
    }
}

#[derive(Debug)]
pub enum Phase {
    /// Waiting for the start signal.
    Start { last_score: Option<i32> },
    Play(Box<Session>),
}

/// `Start -> Play` on the start signal, `Play -> Start` when the clock runs
/// out. Each `Play` gets a brand new session.
pub struct Game<R = StdRng> {
    config: GameConfig,
    rng: R,
    phase: Phase,
    sessions_played: u32,
}

impl Game<StdRng> {
    /// Seeds from `config.seed` when set, from the OS otherwise.
    pub fn new(config: GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> Game<R> {
    pub fn with_rng(config: GameConfig, rng: R) -> Self {
        Self {
            config,
            rng,
            phase: Phase::Start { last_score: None },
            sessions_played: 0,
        }
    }

    pub fn update(&mut self, input: &FrameInput) -> Result<(), GameError> {
        if let Phase::Play(session) = &mut self.phase {
            let tick = session.tick(input.direction, input.delta_time, &mut self.rng)?;
            if tick == Tick::Expired {
                let score = session.score();
                info!("time is up, final score {score}");
                self.phase = Phase::Start {
                    last_score: Some(score),
                };
            }
        } else if input.start {
            self.start_session()?;
        }
        Ok(())
    }

    /// Throws away whatever is running and begins a fresh session.
    pub fn start_session(&mut self) -> Result<(), GameError> {
        let session = Session::new(&self.config, &mut self.rng)?;
        self.sessions_played += 1;
        debug!("session #{} underway", self.sessions_played);
        self.phase = Phase::Play(Box::new(session));
        Ok(())
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn session(&self) -> Option<&Session> {
        match &self.phase {
            Phase::Play(session) => Some(&**session),
            Phase::Start { .. } => None,
        }
    }

    pub fn is_playing(&self) -> bool {
        matches!(self.phase, Phase::Play(_))
    }

    pub fn last_score(&self) -> Option<i32> {
        match self.phase {
            Phase::Start { last_score } => last_score,
            Phase::Play(_) => None,
        }
    }

    pub fn sessions_played(&self) -> u32 {
        self.sessions_played
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}
