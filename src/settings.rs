// Fixed parameters of the demo. There is no runtime configuration;
// `Settings::default()` is the only source of these values.

use crate::types::Color;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct Settings {
    pub triangle_height: i32,       // pixels from top vertex to base
    pub max_points: u32,            // cycle halts once the counter exceeds this
    pub tick_interval: Duration,    // lower bound between two generated points
    pub background: Color,          // fill on every (re)start
    pub foreground: Color,          // anchors and generated points
    pub window_title: &'static str,
    pub initial_width: usize,
    pub initial_height: usize,
    pub present_interval: Duration, // how often the framebuffer reaches the screen
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            triangle_height: 400,
            max_points: 5000,
            tick_interval: Duration::from_millis(1),
            background: 0x00_00_00_00,
            foreground: 0x00_FF_FF_FF,
            window_title: "Chaos Game: Sierpinski Triangle",
            initial_width: 800,
            initial_height: 600,
            present_interval: Duration::from_millis(16),
        }
    }
}
