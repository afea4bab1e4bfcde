// Core types shared by the engine, the driver and the surface.

/// A pixel position on the surface. Can be negative when the window is
/// smaller than the triangle; such points are clipped when painted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// The three anchors of the chaos game, fixed for one render cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Triangle {
    pub top: Point,
    pub left: Point,
    pub right: Point,
}

impl Triangle {
    /// Vertices in pick order: index 0 = top, 1 = left, 2 = right.
    pub fn vertices(&self) -> [Point; 3] {
        [self.top, self.left, self.right]
    }
}

/// Pixel color in the framebuffer format, 0x00RRGGBB.
pub type Color = u32;

#[derive(Clone)]
pub struct FrameBuffer {
    pub width: usize,      // how wide the frame is on screen (pixels)
    pub height: usize,     // how tall the frame is on screen (pixels)
    pub pixels: Vec<u32>,  // each entry is 0x00RRGGBB for minifb
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, pixels: vec![0u32; width * height] }
    }
}
