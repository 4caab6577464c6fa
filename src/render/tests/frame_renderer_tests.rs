use crate::render::tests::blank_frame;
use crate::render::{FontRole, FontSet, FrameRenderer, Renderer};
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

const BLACK: Rgb888 = Rgb888::new(0, 0, 0);

#[test]
fn test_gradient_covers_every_row() {
    let size = Size::new(8, 100);
    let mut frame = blank_frame(size);
    let fonts = FontSet::load();
    let mut renderer = FrameRenderer::new(&mut frame, size, &fonts);

    let top = Rgb888::new(0, 0, 0);
    let bottom = Rgb888::new(100, 200, 100);
    renderer.vertical_gradient(top, bottom);

    let buffer = renderer.target();
    assert_eq!(buffer.pixel(Point::new(0, 0)), Some(top));
    assert_eq!(buffer.pixel(Point::new(7, 50)), Some(Rgb888::new(50, 100, 50)));
    assert_eq!(buffer.pixel(Point::new(3, 99)), Some(Rgb888::new(99, 198, 99)));
}

#[test]
fn test_fill_and_border() {
    let size = Size::new(40, 40);
    let mut frame = blank_frame(size);
    let fonts = FontSet::load();
    let mut renderer = FrameRenderer::new(&mut frame, size, &fonts);

    let area = Rectangle::new(Point::new(10, 10), Size::new(20, 20));
    let fill = Rgb888::new(50, 60, 70);
    let border = Rgb888::new(200, 200, 200);
    renderer.fill_rect(area, fill, 0);
    renderer.stroke_rect(area, border, 2, 0);

    let buffer = renderer.target();
    assert_eq!(buffer.pixel(Point::new(10, 10)), Some(border));
    assert_eq!(buffer.pixel(Point::new(11, 20)), Some(border));
    assert_eq!(buffer.pixel(Point::new(12, 12)), Some(fill));
    assert_eq!(buffer.pixel(Point::new(20, 20)), Some(fill));
    assert_eq!(buffer.pixel(Point::new(29, 29)), Some(border));
    /* border is drawn inside the area */
    assert_eq!(buffer.pixel(Point::new(30, 30)), Some(BLACK));
    assert_eq!(buffer.pixel(Point::new(9, 9)), Some(BLACK));
}

#[test]
fn test_rounded_corners_leave_corner_pixel() {
    let size = Size::new(40, 40);
    let mut frame = blank_frame(size);
    let fonts = FontSet::load();
    let mut renderer = FrameRenderer::new(&mut frame, size, &fonts);

    let fill = Rgb888::new(50, 60, 70);
    renderer.fill_rect(Rectangle::new(Point::new(0, 0), Size::new(40, 40)), fill, 10);

    let buffer = renderer.target();
    assert_eq!(buffer.pixel(Point::new(0, 0)), Some(BLACK));
    assert_eq!(buffer.pixel(Point::new(20, 20)), Some(fill));
}

#[test]
fn test_text_is_centred() {
    let size = Size::new(200, 100);
    let mut frame = blank_frame(size);
    let fonts = FontSet::load();
    let mut renderer = FrameRenderer::new(&mut frame, size, &fonts);

    let white = Rgb888::new(255, 255, 255);
    renderer.text("FCFS", Point::new(100, 50), FontRole::Title, white);

    let buffer = renderer.target();
    let lit: Vec<Point> = (0..200)
        .flat_map(|x| (0..100).map(move |y| Point::new(x, y)))
        .filter(|point| buffer.pixel(*point) == Some(white))
        .collect();
    assert!(!lit.is_empty());

    /* four glyphs of a 10px font doubled: 80px wide around x=100 */
    let min_x = lit.iter().map(|p| p.x).min().unwrap();
    let max_x = lit.iter().map(|p| p.x).max().unwrap();
    assert!(min_x >= 60 && max_x < 140);
    assert!(min_x < 100 && max_x > 100);
}

#[test]
fn test_non_ascii_label_draws() {
    let size = Size::new(200, 40);
    let mut frame = blank_frame(size);
    let fonts = FontSet::load();
    let mut renderer = FrameRenderer::new(&mut frame, size, &fonts);

    let white = Rgb888::new(255, 255, 255);
    renderer.text("Estática", Point::new(100, 20), FontRole::Button, white);

    assert!(frame.chunks_exact(4).any(|pixel| pixel[..3] == [255, 255, 255]));
}
