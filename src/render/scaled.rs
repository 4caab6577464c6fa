use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

/**
 * Wraps a draw target so that every pixel drawn through it becomes a `factor` x `factor` block.
 * Points are scaled away from `anchor`, which therefore stays fixed: drawing text centred on the
 * anchor yields the same text, bigger, still centred on the anchor.
 */
pub struct Scaled<'a, D> {
    target: &'a mut D,
    anchor: Point,
    factor: u32,
}

impl<'a, D: DrawTarget> Scaled<'a, D> {
    pub fn new(target: &'a mut D, anchor: Point, factor: u32) -> Scaled<'a, D> {
        Scaled {
            target,
            anchor,
            factor: factor.max(1),
        }
    }

    fn block(&self, point: Point) -> Rectangle {
        let top_left = self.anchor + (point - self.anchor) * self.factor as i32;
        Rectangle::new(top_left, Size::new_equal(self.factor))
    }
}

impl<D: DrawTarget> Dimensions for Scaled<'_, D> {
    fn bounding_box(&self) -> Rectangle {
        self.target.bounding_box()
    }
}

impl<D: DrawTarget> DrawTarget for Scaled<'_, D> {
    type Color = D::Color;
    type Error = D::Error;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            let block = self.block(point);
            self.target.fill_solid(&block, color)?;
        }
        Ok(())
    }
}
