use crate::app::LauncherError;
use crate::dispatch::{Dispatcher, ProgramLauncher};
use crate::ui::RunState;

/// How a launcher session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEnd {
    Closed,
    Dispatched(String),
}

/// What the window loop does with the frame after a controller tick.
#[derive(Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// A fresh frame was drawn: show it.
    Present,
    /// Nothing new was drawn and the menu keeps running.
    Hold,
    Finish(SessionEnd),
}

/**
 * Turns the controller's run state into what the window loop should do next. A dispatch is handed
 * to the launcher here; if the launch fails the error is logged and the session carries on.
 */
pub fn settle<L: ProgramLauncher>(state: RunState, dispatcher: &Dispatcher<L>) -> TickOutcome {
    match state {
        RunState::Running => TickOutcome::Present,
        RunState::Exiting => {
            log::info!("exit requested");
            TickOutcome::Finish(SessionEnd::Closed)
        }
        RunState::Dispatching(request) => {
            let target = request.target.clone();
            match dispatcher.launch(request) {
                Ok(()) => TickOutcome::Finish(SessionEnd::Dispatched(target)),
                /* no retry and no on-screen notice */
                Err(error) => {
                    log::error!("{error}");
                    TickOutcome::Hold
                }
            }
        }
    }
}

/**
 * Remembers how the session ended while the event loop winds down. A failure outranks any normal
 * ending, so a fatal error is never reported as a plain close.
 */
#[derive(Default)]
pub struct SessionRecord {
    end: Option<SessionEnd>,
    failure: Option<LauncherError>,
}

impl SessionRecord {
    pub fn finish(&mut self, end: SessionEnd) {
        self.end.get_or_insert(end);
    }

    pub fn fail(&mut self, error: impl Into<LauncherError>) {
        let error = error.into();
        log::error!("{error}");
        self.failure.get_or_insert(error);
    }

    pub fn into_result(self) -> Result<SessionEnd, LauncherError> {
        match self.failure {
            Some(error) => Err(error),
            None => Ok(self.end.unwrap_or(SessionEnd::Closed)),
        }
    }
}
