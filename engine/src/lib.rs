//! Thin windowing shell: opens a fixed-size window, paces frames, tracks
//! keyboard state and presents a software framebuffer.

pub mod canvas;
pub mod clock;
pub mod context;
pub mod error;
pub mod input;

pub use canvas::Canvas;
pub use clock::FrameClock;
pub use context::{EngineContext, Flow, Scene, WindowSettings};
pub use error::EngineError;
pub use input::InputState;

pub use embedded_graphics::pixelcolor::Rgb888;
pub use winit::event::ElementState;
pub use winit::keyboard::KeyCode;

/// Allows the setting of the log level through the RUST_LOG env var.
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();
}
