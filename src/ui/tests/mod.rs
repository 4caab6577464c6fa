use crate::palette::Palette;
use crate::ui::{ControlAction, ControlColors, InteractiveControl};
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;


const TEST_COLORS: ControlColors = ControlColors {
    normal: Rgb888::new(10, 10, 10),
    hover: Rgb888::new(20, 20, 20),
    text: Rgb888::new(255, 255, 255),
};

fn control_for_testing(
    x: i32,
    y: i32,
    width: u32,
    height: u32,
    action: ControlAction,
) -> InteractiveControl {
    InteractiveControl::new(
        Rectangle::new(Point::new(x, y), Size::new(width, height)),
        "test",
        TEST_COLORS,
        action,
    )
}

fn palette_for_testing() -> Palette {
    Palette::default()
}
