use crate::render::{gradient_row, FontRole, FontSet, FrameBuffer, Renderer, Scaled};
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{
    Line, PrimitiveStyle, PrimitiveStyleBuilder, Rectangle, RoundedRectangle, StrokeAlignment,
};
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyleBuilder};

/**
 * Rasterises renderer calls into a frame buffer with embedded-graphics. Drawing into a
 * `FrameBuffer` cannot fail, so draw results are discarded.
 */
pub struct FrameRenderer<'a, 'f> {
    target: FrameBuffer<'a>,
    fonts: &'f FontSet,
}

impl<'a, 'f> FrameRenderer<'a, 'f> {
    pub fn new(frame: &'a mut [u8], size: Size, fonts: &'f FontSet) -> FrameRenderer<'a, 'f> {
        FrameRenderer {
            target: FrameBuffer::new(frame, size),
            fonts,
        }
    }

    #[cfg(test)]
    pub fn target(&self) -> &FrameBuffer<'a> {
        &self.target
    }
}

fn rounded(area: Rectangle, corner_radius: u32) -> RoundedRectangle {
    RoundedRectangle::with_equal_corners(area, Size::new_equal(corner_radius))
}

impl Renderer for FrameRenderer<'_, '_> {
    fn vertical_gradient(&mut self, top: Rgb888, bottom: Rgb888) {
        let size = self.target.size();
        for row in 0..size.height {
            let color = gradient_row(top, bottom, row, size.height);
            let line = Rectangle::new(Point::new(0, row as i32), Size::new(size.width, 1));
            let _ = self.target.fill_solid(&line, color);
        }
    }

    fn fill_rect(&mut self, area: Rectangle, color: Rgb888, corner_radius: u32) {
        let _ = rounded(area, corner_radius)
            .into_styled(PrimitiveStyle::with_fill(color))
            .draw(&mut self.target);
    }

    fn stroke_rect(
        &mut self,
        area: Rectangle,
        color: Rgb888,
        stroke_width: u32,
        corner_radius: u32,
    ) {
        let style = PrimitiveStyleBuilder::new()
            .stroke_color(color)
            .stroke_width(stroke_width)
            .stroke_alignment(StrokeAlignment::Inside)
            .build();
        let _ = rounded(area, corner_radius)
            .into_styled(style)
            .draw(&mut self.target);
    }

    fn line(&mut self, start: Point, end: Point, color: Rgb888, stroke_width: u32) {
        let _ = Line::new(start, end)
            .into_styled(PrimitiveStyle::with_stroke(color, stroke_width))
            .draw(&mut self.target);
    }

    fn text(&mut self, text: &str, center: Point, role: FontRole, color: Rgb888) {
        let scaled_font = self.fonts.font(role);
        let character_style = MonoTextStyle::new(scaled_font.font, color);
        let text_style = TextStyleBuilder::new()
            .alignment(Alignment::Center)
            .baseline(Baseline::Middle)
            .build();
        let text = Text::with_text_style(text, center, character_style, text_style);

        if scaled_font.scale > 1 {
            let mut scaled = Scaled::new(&mut self.target, center, scaled_font.scale);
            let _ = text.draw(&mut scaled);
        } else {
            let _ = text.draw(&mut self.target);
        }
    }
}
