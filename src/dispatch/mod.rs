mod launcher;

#[cfg(test)]
pub(crate) mod tests;

use crate::ui::DispatchRequest;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub use launcher::ProcessLauncher;

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("simulator {target} not found at {}", path.display())]
    NotFound { target: String, path: PathBuf },

    #[error("could not start simulator {target}: {source}")]
    Spawn {
        target: String,
        #[source]
        source: io::Error,
    },
}

/// Starts an external program by identifier and returns as soon as it is running.
pub trait ProgramLauncher {
    fn start(&self, target: &str) -> Result<(), LaunchError>;
}

/**
 * Hands a dispatch request to the launcher. The started simulator is never awaited; on success the
 * caller is expected to tear the window down and end the process. On failure nothing has changed
 * and the caller may keep running.
 */
pub struct Dispatcher<L: ProgramLauncher> {
    launcher: L,
}

impl<L: ProgramLauncher> Dispatcher<L> {
    pub fn new(launcher: L) -> Dispatcher<L> {
        Dispatcher { launcher }
    }

    pub fn launch(&self, request: DispatchRequest) -> Result<(), LaunchError> {
        log::info!("dispatching to simulator {}", request.target);
        self.launcher.start(&request.target)
    }
}
