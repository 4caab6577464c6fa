use crate::render::{FontRole, Renderer};
use crate::ui::ScreenId;
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

const CORNER_RADIUS: u32 = 10;
const BORDER_WIDTH: u32 = 2;

/// What selecting a control asks the run loop to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlAction {
    /// Start the named external simulator and hand over to it.
    Launch(&'static str),
    /// Switch to another screen. Only one screen is populated so far, so nothing builds this yet.
    #[cfg_attr(not(test), allow(dead_code))]
    Navigate(ScreenId),
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlColors {
    pub normal: Rgb888,
    pub hover: Rgb888,
    pub text: Rgb888,
}

/**
 * A labelled, clickable rectangle. Hit testing is half-open: the top and left edges belong to the
 * control, the bottom and right edges do not.
 */
#[derive(Debug, Clone)]
pub struct InteractiveControl {
    region: Rectangle,
    label: String,
    colors: ControlColors,
    action: ControlAction,
    hovered: bool,
}

impl InteractiveControl {
    pub fn new(
        region: Rectangle,
        label: &str,
        colors: ControlColors,
        action: ControlAction,
    ) -> InteractiveControl {
        InteractiveControl {
            region,
            label: String::from(label),
            colors,
            action,
            hovered: false,
        }
    }

    pub fn region(&self) -> Rectangle {
        self.region
    }

    #[cfg(test)]
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn action(&self) -> &ControlAction {
        &self.action
    }

    #[cfg(test)]
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn draw<R: Renderer>(&self, renderer: &mut R) {
        let fill = if self.hovered {
            self.colors.hover
        } else {
            self.colors.normal
        };
        renderer.fill_rect(self.region, fill, CORNER_RADIUS);
        renderer.stroke_rect(self.region, self.colors.text, BORDER_WIDTH, CORNER_RADIUS);
        renderer.text(
            &self.label,
            self.region.center(),
            FontRole::Button,
            self.colors.text,
        );
    }

    /* hover only ever reflects the latest pointer position */
    pub fn update_hover(&mut self, pointer: Point) {
        self.hovered = self.region.contains(pointer);
    }

    pub fn is_clicked(&self, pointer: Point) -> bool {
        self.region.contains(pointer)
    }
}
