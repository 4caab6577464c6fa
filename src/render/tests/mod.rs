use crate::render::frame_buffer::BYTES_PER_PIXEL;
use embedded_graphics::prelude::Size;

mod frame_renderer_tests;

fn blank_frame(size: Size) -> Vec<u8> {
    vec![0; size.width as usize * size.height as usize * BYTES_PER_PIXEL]
}
