// What you SEE:
// • A black window; three white dots mark the corners of a triangle.
// • White dots appear one by one and fill in a Sierpinski triangle.
// • After 5001 dots the picture freezes.
// • Resizing the window starts over from a fresh triangle. ESC quits.
// • RUST_LOG=debug prints throughput once per second.

mod draw;
mod driver;
mod engine;
mod error;
mod settings;
mod surface;
mod timer;
mod types;

use draw::Drawer;
use driver::{CycleState, Driver, DriverEvent};
use error::Error;
use log::{debug, info};
use settings::Settings;
use std::time::{Duration, Instant};
use timer::IntervalTimer;
use types::FrameBuffer;

fn main() -> Result<(), Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = Settings::default();
    let present_interval = settings.present_interval;

    /* --- Window setup ---
       Visual: window opens black at the initial size. */
    let mut drawer = Drawer::new(settings.window_title, settings.initial_width, settings.initial_height)?;

    let mut driver = Driver::new(
        FrameBuffer::new(0, 0),
        IntervalTimer::new(),
        rand::thread_rng(),
        settings,
    );

    let mut last_size = drawer.size();
    driver.handle(DriverEvent::Mount { width: last_size.0, height: last_size.1 });

    let mut last_present = Instant::now();
    let mut last_rate_time = Instant::now();
    let mut points_at_last_rate = 0u32;

    /* ------------------------------ Main loop ------------------------------ */
    while drawer.is_open() && !drawer.esc_pressed() {
        let now = Instant::now();

        /* 1) At most one point per poll; missed ticks are not replayed. */
        if let Some(handle) = driver.timer_mut().poll(now) {
            driver.handle(DriverEvent::Tick(handle));
        }

        /* 2) Present at ~60 Hz and watch the viewport size.
           Visual: new dots show up; a resize clears and restarts. */
        if now.duration_since(last_present) >= present_interval {
            drawer.present(driver.surface())?;
            last_present = now;

            let size = drawer.size();
            if size != last_size {
                last_size = size;
                driver.handle(DriverEvent::Resize { width: size.0, height: size.1 });
            }
        }

        /* 3) Throughput while drawing (terminal only, RUST_LOG=debug) */
        if matches!(driver.state(), CycleState::Running(_))
            && now.duration_since(last_rate_time) >= Duration::from_secs(1)
        {
            let points = driver.points_rendered();
            let secs = now.duration_since(last_rate_time).as_secs_f32();
            debug!(
                "points: {} ({:.1}/s)",
                points,
                points.saturating_sub(points_at_last_rate) as f32 / secs
            );
            points_at_last_rate = points;
            last_rate_time = now;
        }

        /* 4) Sleep until the next tick or the next present, whichever is first. */
        let until_present = present_interval.saturating_sub(Instant::now().duration_since(last_present));
        let nap = driver
            .timer()
            .until_next_due(Instant::now())
            .map_or(until_present, |d| d.min(until_present));
        if !nap.is_zero() {
            std::thread::sleep(nap);
        }
    }

    driver.handle(DriverEvent::Unmount);
    info!("window closed");
    Ok(())
}
