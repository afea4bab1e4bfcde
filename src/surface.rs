// The drawing surface the driver paints on, and its framebuffer implementation.
// Visual: the framebuffer is what the window shows; black fill, white dots.

use crate::types::{Color, FrameBuffer};

/// What the driver needs from a canvas. Painting is additive: single pixels
/// are never erased, only the whole surface is cleared on restart.
pub trait Surface {
    /// False while there is nothing to paint on (e.g. a minimized window).
    fn is_attached(&self) -> bool;
    fn resize(&mut self, width: usize, height: usize);
    fn clear(&mut self, color: Color);
    /// Out-of-bounds coordinates are ignored.
    fn draw_pixel(&mut self, x: i32, y: i32, color: Color);
}

/// Put a pixel on the framebuffer if (x,y) is inside bounds.
#[inline]
fn put_pixel(fb: &mut FrameBuffer, x: i32, y: i32, color: u32) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as usize, y as usize);
    if x >= fb.width || y >= fb.height {
        return;
    }
    let idx = y * fb.width + x;
    fb.pixels[idx] = color;
}

impl Surface for FrameBuffer {
    fn is_attached(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    fn resize(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.pixels.resize(width * height, 0);
    }

    fn clear(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    fn draw_pixel(&mut self, x: i32, y: i32, color: Color) {
        put_pixel(self, x, y, color);
    }
}
