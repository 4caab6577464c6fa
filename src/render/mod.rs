mod frame_buffer;
mod frame_renderer;
mod scaled;

#[cfg(test)]
mod tests;

use embedded_graphics::mono_font::iso_8859_1::{FONT_10X20, FONT_9X15, FONT_9X18_BOLD};
use embedded_graphics::mono_font::MonoFont;
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

pub use frame_buffer::FrameBuffer;
pub use frame_renderer::FrameRenderer;
pub use scaled::Scaled;

/**
 * The drawing capability the screens are written against. Everything the launcher puts on screen
 * goes through one of these calls, so a frame is fully described by the sequence of calls made.
 */
pub trait Renderer {
    /// Fills the whole canvas with a top-to-bottom gradient.
    fn vertical_gradient(&mut self, top: Rgb888, bottom: Rgb888);

    fn fill_rect(&mut self, area: Rectangle, color: Rgb888, corner_radius: u32);

    /// Draws a border inside `area`, `stroke_width` pixels thick.
    fn stroke_rect(
        &mut self,
        area: Rectangle,
        color: Rgb888,
        stroke_width: u32,
        corner_radius: u32,
    );

    fn line(&mut self, start: Point, end: Point, color: Rgb888, stroke_width: u32);

    /// Draws `text` centred both ways on `center`.
    fn text(&mut self, text: &str, center: Point, role: FontRole, color: Rgb888);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontRole {
    Title,
    Subtitle,
    Button,
    Body,
}

#[derive(Clone, Copy)]
pub struct ScaledFont {
    pub font: &'static MonoFont<'static>,
    pub scale: u32,
}

/* bitmap fonts only come in a handful of sizes, the title is pixel-doubled */
pub struct FontSet {
    title: ScaledFont,
    subtitle: ScaledFont,
    button: ScaledFont,
    body: ScaledFont,
}

impl FontSet {
    pub fn load() -> FontSet {
        FontSet {
            title: ScaledFont { font: &FONT_10X20, scale: 2 },
            subtitle: ScaledFont { font: &FONT_10X20, scale: 1 },
            button: ScaledFont { font: &FONT_9X18_BOLD, scale: 1 },
            body: ScaledFont { font: &FONT_9X15, scale: 1 },
        }
    }

    pub fn font(&self, role: FontRole) -> ScaledFont {
        match role {
            FontRole::Title => self.title,
            FontRole::Subtitle => self.subtitle,
            FontRole::Button => self.button,
            FontRole::Body => self.body,
        }
    }
}

/**
 * Colour of one row of a vertical gradient: each channel moves linearly from `top` at row 0
 * towards `bottom` at row `height`, truncating toward zero.
 */
pub fn gradient_row(top: Rgb888, bottom: Rgb888, row: u32, height: u32) -> Rgb888 {
    if height == 0 {
        return top;
    }
    let channel = |from: u8, to: u8| -> u8 {
        let delta = to as i32 - from as i32;
        (from as i32 + delta * row as i32 / height as i32) as u8
    };
    Rgb888::new(
        channel(top.r(), bottom.r()),
        channel(top.g(), bottom.g()),
        channel(top.b(), bottom.b()),
    )
}
