// Render/lifecycle driver: turns mount/resize/tick/unmount events into paint calls.
// Visual: on (re)start the window goes black and three white anchors appear,
// then one more white dot per tick until the point budget runs out.

use crate::engine;
use crate::settings::Settings;
use crate::surface::Surface;
use crate::timer::{Timer, TimerHandle};
use crate::types::{Point, Triangle};
use log::{debug, info, trace};
use rand::Rng;

/// Everything that can happen to the driver from the outside.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DriverEvent {
    Mount { width: usize, height: usize },
    Resize { width: usize, height: usize },
    Tick(TimerHandle),
    Unmount,
}

/// The one mutable value the chaos game threads through its ticks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SamplingState {
    pub previous: Point,
}

/// One render cycle: created whole on mount/resize, dropped whole on restart.
#[derive(Debug)]
pub struct Cycle {
    pub triangle: Triangle,
    pub sampling: SamplingState,
    pub points_rendered: u32,
    timer: TimerHandle,
}

#[derive(Debug)]
pub enum CycleState {
    Idle,
    Running(Cycle),
    Halted { points_rendered: u32 },
    TornDown,
}

pub struct Driver<S: Surface, T: Timer, R: Rng> {
    surface: S,
    timer: T,
    rng: R,
    settings: Settings,
    state: CycleState,
}

impl<S: Surface, T: Timer, R: Rng> Driver<S, T, R> {
    pub fn new(surface: S, timer: T, rng: R, settings: Settings) -> Self {
        Self { surface, timer, rng, settings, state: CycleState::Idle }
    }

    pub fn state(&self) -> &CycleState {
        &self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn timer(&self) -> &T {
        &self.timer
    }

    pub fn timer_mut(&mut self) -> &mut T {
        &mut self.timer
    }

    pub fn points_rendered(&self) -> u32 {
        match &self.state {
            CycleState::Running(cycle) => cycle.points_rendered,
            CycleState::Halted { points_rendered } => *points_rendered,
            CycleState::Idle | CycleState::TornDown => 0,
        }
    }

    pub fn handle(&mut self, event: DriverEvent) {
        if matches!(self.state, CycleState::TornDown) {
            trace!("ignoring {event:?} after teardown");
            return;
        }

        match event {
            DriverEvent::Mount { width, height } | DriverEvent::Resize { width, height } => {
                self.start_cycle(width, height)
            }
            DriverEvent::Tick(handle) => self.tick(handle),
            DriverEvent::Unmount => {
                self.cancel_timer();
                self.state = CycleState::TornDown;
                info!("torn down");
            }
        }
    }

    /// Cancels the running cycle's timer, if any. Must run before any new
    /// cycle state exists so two loops never share the surface.
    fn cancel_timer(&mut self) {
        if let CycleState::Running(cycle) = &self.state {
            self.timer.cancel(cycle.timer);
        }
    }

    fn start_cycle(&mut self, width: usize, height: usize) {
        self.cancel_timer();
        self.state = CycleState::Idle;

        self.surface.resize(width, height);
        if !self.surface.is_attached() {
            debug!("surface unavailable at {width}x{height}, staying idle");
            return;
        }
        self.surface.clear(self.settings.background);

        let triangle = engine::compute_triangle(width, height, self.settings.triangle_height);
        for anchor in triangle.vertices() {
            self.paint(anchor);
        }

        let previous = engine::seed_initial_point(&mut self.rng, &triangle);
        let timer = self.timer.schedule_repeating(self.settings.tick_interval);
        info!("cycle started at {width}x{height}: {triangle:?}, seed {previous:?}");

        self.state = CycleState::Running(Cycle {
            triangle,
            sampling: SamplingState { previous },
            points_rendered: 0,
            timer,
        });
    }

    fn tick(&mut self, handle: TimerHandle) {
        let cycle = match &mut self.state {
            CycleState::Running(cycle) if cycle.timer == handle => cycle,
            _ => {
                trace!("stale tick {handle:?}");
                return;
            }
        };
        if !self.surface.is_attached() {
            return;
        }

        let next = engine::step(&mut self.rng, &cycle.triangle, cycle.sampling.previous);
        cycle.sampling.previous = next;
        cycle.points_rendered += 1;
        let points_rendered = cycle.points_rendered;
        self.surface.draw_pixel(next.x, next.y, self.settings.foreground);

        if points_rendered > self.settings.max_points {
            self.timer.cancel(handle);
            self.state = CycleState::Halted { points_rendered };
            info!("halted after {points_rendered} points");
        }
    }

    fn paint(&mut self, point: Point) {
        self.surface.draw_pixel(point.x, point.y, self.settings.foreground);
    }
}
