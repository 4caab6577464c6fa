use crate::palette::Palette;
use crate::render::Renderer;
use crate::ui::{ControlAction, Screen, ScreenId};
use embedded_graphics::prelude::Point;

/// Discrete input, drained once per tick. Pointer motion is not an event; it is sampled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    PointerPressed(Point),
}

/// A request to hand the session over to an external simulator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchRequest {
    pub target: String,
}

/**
 * Where the run loop stands after a tick. `Exiting` and `Dispatching` are terminal: once either is
 * returned the loop stops ticking the controller.
 */
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunState {
    Running,
    Exiting,
    Dispatching(DispatchRequest),
}

impl RunState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, RunState::Running)
    }
}

pub struct ScreenController {
    screen: Screen,
    palette: Palette,
}

impl ScreenController {
    pub fn new(palette: Palette) -> ScreenController {
        let screen = Screen::build(ScreenId::MainMenu, &palette);
        ScreenController::with_screen(screen, palette)
    }

    pub fn with_screen(screen: Screen, palette: Palette) -> ScreenController {
        ScreenController { screen, palette }
    }

    #[cfg(test)]
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /**
     * Runs one tick: interprets the drained `events`, then (if still running) samples hover from
     * `pointer` and draws the full frame. A terminal result leaves the previous frame untouched.
     */
    pub fn tick<R: Renderer>(
        &mut self,
        events: impl IntoIterator<Item = InputEvent>,
        pointer: Point,
        renderer: &mut R,
    ) -> RunState {
        let mut state = RunState::Running;

        for event in events {
            /* first terminal event wins, everything after it in the queue is dropped */
            if state.is_terminal() {
                continue;
            }
            state = match event {
                InputEvent::Quit => RunState::Exiting,
                InputEvent::PointerPressed(position) => self.press(position),
            };
        }

        if state.is_terminal() {
            return state;
        }

        for control in self.screen.controls_mut() {
            control.update_hover(pointer);
        }
        self.screen.draw(renderer, &self.palette);

        state
    }

    fn press(&mut self, position: Point) -> RunState {
        let Some(action) = self.screen.hit(position).map(|control| control.action().clone())
        else {
            return RunState::Running;
        };

        match action {
            ControlAction::Launch(target) => RunState::Dispatching(DispatchRequest {
                target: String::from(target),
            }),
            ControlAction::Exit => RunState::Exiting,
            ControlAction::Navigate(id) => {
                log::info!("switching screen {:?} -> {:?}", self.screen.id(), id);
                self.screen = Screen::build(id, &self.palette);
                RunState::Running
            }
        }
    }
}
