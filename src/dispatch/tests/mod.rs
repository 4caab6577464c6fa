use crate::dispatch::{LaunchError, ProgramLauncher};
use std::cell::RefCell;
use std::fs;
use std::path::PathBuf;
use std::rc::Rc;


/* a fresh, empty directory per test so parallel tests don't see each other's files */
fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "planificador-launcher-{}-{name}",
        std::process::id()
    ));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).expect("could not create scratch directory");
    dir
}

pub(crate) type StartedTargets = Rc<RefCell<Vec<String>>>;

/* remembers what it was asked to start; optionally refuses */
pub(crate) struct FakeLauncher {
    started: StartedTargets,
    fail: bool,
}

impl FakeLauncher {
    pub(crate) fn accepting() -> (FakeLauncher, StartedTargets) {
        FakeLauncher::new(false)
    }

    pub(crate) fn refusing() -> (FakeLauncher, StartedTargets) {
        FakeLauncher::new(true)
    }

    fn new(fail: bool) -> (FakeLauncher, StartedTargets) {
        let started = Rc::new(RefCell::new(Vec::new()));
        let launcher = FakeLauncher {
            started: started.clone(),
            fail,
        };
        (launcher, started)
    }
}

impl ProgramLauncher for FakeLauncher {
    fn start(&self, target: &str) -> Result<(), LaunchError> {
        self.started.borrow_mut().push(String::from(target));
        if self.fail {
            Err(LaunchError::NotFound {
                target: String::from(target),
                path: PathBuf::from(target),
            })
        } else {
            Ok(())
        }
    }
}
