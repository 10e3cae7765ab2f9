use thiserror::Error;
use winit::error::{EventLoopError, OsError};

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("event loop failed: {0}")]
    EventLoop(#[from] EventLoopError),

    #[error("failed to create a window: {0}")]
    Window(#[from] OsError),

    #[error("framebuffer surface error: {0}")]
    Surface(String),

    #[error("scene update failed: {0:#}")]
    Scene(anyhow::Error),
}

// softbuffer's platform errors are not `Send`, keep only the message
impl From<softbuffer::SoftBufferError> for EngineError {
    fn from(e: softbuffer::SoftBufferError) -> Self {
        EngineError::Surface(e.to_string())
    }
}
