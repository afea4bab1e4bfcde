// Window host: shows the framebuffer and reports size changes and quit requests.
// Visual: a resizable window; the framebuffer is blitted 1:1 into it.

use crate::error::Error;
use crate::types::FrameBuffer;
use minifb::{Key, Window, WindowOptions};

pub struct Drawer {
    window: Window, // the on-screen window you see
}

impl Drawer {
    /// Create a resizable window.
    /// Visual: a new empty window appears with your chosen title.
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self, Error> {
        let options = WindowOptions { resize: true, ..WindowOptions::default() };
        let mut window = Window::new(title, width, height, options)
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        // No frame-rate cap; the main loop paces itself on the point timer.
        window.set_target_fps(0);
        Ok(Self { window })
    }

    /// Push the pixels for this frame to the screen.
    /// An empty framebuffer (minimized window) only pumps window events.
    pub fn present(&mut self, framebuffer: &FrameBuffer) -> Result<(), Error> {
        if framebuffer.pixels.is_empty() {
            self.window.update();
            return Ok(());
        }
        self.window
            .update_with_buffer(&framebuffer.pixels, framebuffer.width, framebuffer.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))?;
        Ok(())
    }

    /// Current client area in pixels; this is the viewport size source.
    pub fn size(&self) -> (usize, usize) {
        self.window.get_size()
    }

    /// Returns false when the user closes the window (so we can stop the loop).
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    /// True while ESC is held down (we’ll exit when this is pressed).
    pub fn esc_pressed(&self) -> bool {
        self.window.is_key_down(Key::Escape)
    }
}
