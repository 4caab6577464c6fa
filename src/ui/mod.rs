mod control;
mod controller;
mod screen;

#[cfg(test)]
pub(crate) mod tests;

pub use control::{ControlAction, ControlColors, InteractiveControl};
pub use controller::{DispatchRequest, InputEvent, RunState, ScreenController};
pub use screen::{Screen, ScreenId};

#[cfg(test)]
pub use screen::MainMenu;
