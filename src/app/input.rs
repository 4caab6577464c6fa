use crate::ui::InputEvent;
use embedded_graphics::prelude::Point;

/* somewhere no control can be, used once the pointer leaves the window */
const OUTSIDE: Point = Point::new(-1, -1);

/**
 * Collects window input between ticks. Presses and close requests queue up as discrete events;
 * pointer motion just overwrites the sampled position.
 */
pub struct InputHandler {
    pending: Vec<InputEvent>,
    pointer: Point,
}

impl InputHandler {
    pub fn new() -> InputHandler {
        InputHandler {
            pending: Vec::new(),
            pointer: OUTSIDE,
        }
    }

    pub fn close_requested(&mut self) {
        self.pending.push(InputEvent::Quit);
    }

    pub fn pointer_moved(&mut self, position: Point) {
        self.pointer = position;
    }

    pub fn pointer_left(&mut self) {
        self.pointer = OUTSIDE;
    }

    /// A press lands wherever the pointer was last seen.
    pub fn pointer_pressed(&mut self) {
        self.pending.push(InputEvent::PointerPressed(self.pointer));
    }

    pub fn pointer(&self) -> Point {
        self.pointer
    }

    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.pending)
    }
}
