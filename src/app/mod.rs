mod frame_clock;
mod input;
mod session;
mod window;

#[cfg(test)]
mod tests;

use thiserror::Error;
use winit::error::{EventLoopError, OsError};

pub use frame_clock::FrameClock;
pub use input::InputHandler;
pub use session::{settle, SessionEnd, SessionRecord, TickOutcome};
pub use window::run;

/// Failures that stop the launcher from showing its window at all, or keep it from drawing.
#[derive(Debug, Error)]
pub enum LauncherError {
    #[error("event loop failed: {0}")]
    EventLoop(#[from] EventLoopError),

    #[error("could not open window: {0}")]
    Window(#[from] OsError),

    #[error("graphics surface failed: {0}")]
    Surface(#[from] pixels::Error),

    #[error("could not resize surface: {0}")]
    Resize(#[from] pixels::TextureError),
}
