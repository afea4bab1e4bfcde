// Sampling engine for the chaos game.
// Visual outcome: given a triangle, every `step` yields the next white dot;
// after a few thousand steps the dots settle onto the Sierpinski triangle.
//
// Rounding always happens after interpolation, never on the inputs, so the
// pixel path is exactly reproducible from the same random draws.

use crate::types::{Point, Triangle};
use rand::Rng;

/// Linear interpolation between two scalars by fraction `t`.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Nearest integer, ties toward +infinity (2.5 -> 3, -2.5 -> -2).
#[inline]
pub fn round_half_up(v: f64) -> i32 {
    (v + 0.5).floor() as i32
}

/// Uniform integer in the inclusive range [min, max].
pub fn random_int_between<R: Rng + ?Sized>(rng: &mut R, min: i32, max: i32) -> i32 {
    let u: f64 = rng.gen_range(0.0..1.0);
    (u * f64::from(max - min + 1) + f64::from(min)).floor() as i32
}

/// Anchors for a surface of `width` x `height`: a triangle `triangle_height`
/// tall and as wide as it is tall, centered on the surface.
pub fn compute_triangle(width: usize, height: usize, triangle_height: i32) -> Triangle {
    let half = f64::from(triangle_height) / 2.0;

    let top = Point::new(
        round_half_up(width as f64 / 2.0),
        round_half_up(height as f64 / 2.0 - half),
    );
    let base_y = round_half_up(f64::from(top.y) + f64::from(triangle_height));
    let left = Point::new(round_half_up(f64::from(top.x) - half), base_y);
    let right = Point::new(round_half_up(f64::from(top.x) + half), base_y);

    Triangle { top, left, right }
}

pub fn pick_random_vertex<R: Rng + ?Sized>(rng: &mut R, triangle: &Triangle) -> Point {
    let vertices = triangle.vertices();
    let idx = random_int_between(rng, 0, vertices.len() as i32 - 1) as usize;
    vertices[idx]
}

/// Point at fraction `t` along the segment a -> b, rounded per component.
pub fn interpolate(a: Point, b: Point, t: f64) -> Point {
    Point::new(
        round_half_up(lerp(f64::from(a.x), f64::from(b.x), t)),
        round_half_up(lerp(f64::from(a.y), f64::from(b.y), t)),
    )
}

/// The chaos-game rule: halfway from `vertex` to `previous`.
pub fn midpoint_toward(vertex: Point, previous: Point) -> Point {
    interpolate(vertex, previous, 0.5)
}

/// Two vertices for the seed segment. The end is resampled until it differs
/// from the start; with three equally likely picks this ends almost surely.
pub fn pick_seed_anchors<R: Rng + ?Sized>(rng: &mut R, triangle: &Triangle) -> (Point, Point) {
    let start = pick_random_vertex(rng, triangle);
    loop {
        let end = pick_random_vertex(rng, triangle);
        if end != start {
            return (start, end);
        }
    }
}

/// First "previous point" of a cycle: somewhere on a random edge, usually
/// neither on a vertex nor on an edge midpoint.
pub fn seed_initial_point<R: Rng + ?Sized>(rng: &mut R, triangle: &Triangle) -> Point {
    let (start, end) = pick_seed_anchors(rng, triangle);
    let factor: f64 = rng.gen_range(0.0..1.0);
    interpolate(start, end, factor)
}

/// One iteration. The caller stores the result as the next `previous`.
pub fn step<R: Rng + ?Sized>(rng: &mut R, triangle: &Triangle, previous: Point) -> Point {
    let vertex = pick_random_vertex(rng, triangle);
    midpoint_toward(vertex, previous)
}
