use crate::dispatch::{LaunchError, ProgramLauncher};
use std::env::consts::EXE_SUFFIX;
use std::path::{Path, PathBuf};
use std::process::Command;

/**
 * Resolves a simulator identifier to an executable in `simulator_dir` and spawns it with no
 * arguments. The child inherits the launcher's working directory, environment and stdio, and is
 * detached: dropping the handle neither kills nor waits for it.
 */
pub struct ProcessLauncher {
    simulator_dir: PathBuf,
}

impl ProcessLauncher {
    pub fn new(simulator_dir: impl Into<PathBuf>) -> ProcessLauncher {
        ProcessLauncher {
            simulator_dir: simulator_dir.into(),
        }
    }

    /* the directory holding the launcher itself, where the simulators are installed next to it */
    pub fn beside_current_exe() -> ProcessLauncher {
        let simulator_dir = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .unwrap_or_else(|| PathBuf::from("."));
        ProcessLauncher::new(simulator_dir)
    }

    pub fn simulator_dir(&self) -> &Path {
        &self.simulator_dir
    }

    pub fn resolve(&self, target: &str) -> PathBuf {
        self.simulator_dir.join(format!("{target}{EXE_SUFFIX}"))
    }
}

impl ProgramLauncher for ProcessLauncher {
    fn start(&self, target: &str) -> Result<(), LaunchError> {
        let path = self.resolve(target);
        if !path.is_file() {
            return Err(LaunchError::NotFound {
                target: String::from(target),
                path,
            });
        }

        let child = Command::new(&path)
            .spawn()
            .map_err(|source| LaunchError::Spawn {
                target: String::from(target),
                source,
            })?;
        log::info!("started {} (pid {})", path.display(), child.id());
        Ok(())
    }
}
