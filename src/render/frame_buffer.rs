use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use std::convert::Infallible;

pub const BYTES_PER_PIXEL: usize = 4;

/**
 * An RGBA8 frame, row-major, borrowed from whoever owns the pixels (the window surface in the
 * running launcher, a plain Vec in tests). Drawing outside the frame is clipped silently.
 */
pub struct FrameBuffer<'a> {
    frame: &'a mut [u8],
    size: Size,
}

impl<'a> FrameBuffer<'a> {
    pub fn new(frame: &'a mut [u8], size: Size) -> FrameBuffer<'a> {
        debug_assert_eq!(
            frame.len(),
            size.width as usize * size.height as usize * BYTES_PER_PIXEL
        );
        FrameBuffer { frame, size }
    }

    #[cfg(test)]
    pub fn pixel(&self, point: Point) -> Option<Rgb888> {
        let index = self.index(point)?;
        Some(Rgb888::new(
            self.frame[index],
            self.frame[index + 1],
            self.frame[index + 2],
        ))
    }

    fn index(&self, point: Point) -> Option<usize> {
        if point.x < 0
            || point.y < 0
            || point.x as u32 >= self.size.width
            || point.y as u32 >= self.size.height
        {
            return None;
        }
        Some((point.y as usize * self.size.width as usize + point.x as usize) * BYTES_PER_PIXEL)
    }

    fn write(&mut self, index: usize, color: Rgb888) {
        let pixel = &mut self.frame[index..index + BYTES_PER_PIXEL];
        pixel.copy_from_slice(&[color.r(), color.g(), color.b(), 0xff]);
    }
}

impl OriginDimensions for FrameBuffer<'_> {
    fn size(&self) -> Size {
        self.size
    }
}

impl DrawTarget for FrameBuffer<'_> {
    type Color = Rgb888;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if let Some(index) = self.index(point) {
                self.write(index, color);
            }
        }
        Ok(())
    }

    /* row-at-a-time fill; the gradient background alone is a full-screen fill every tick */
    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let area = area.intersection(&self.bounding_box());
        let Some(bottom_right) = area.bottom_right() else {
            return Ok(());
        };
        let pattern = [color.r(), color.g(), color.b(), 0xff];
        for y in area.top_left.y..=bottom_right.y {
            let (Some(start), Some(end)) = (
                self.index(Point::new(area.top_left.x, y)),
                self.index(Point::new(bottom_right.x, y)),
            ) else {
                continue;
            };
            let row = &mut self.frame[start..end + BYTES_PER_PIXEL];
            for pixel in row.chunks_exact_mut(BYTES_PER_PIXEL) {
                pixel.copy_from_slice(&pattern);
            }
        }
        Ok(())
    }
}
