//! Looping motion curves
//!
//! All functions take the time since the window opened and return pixel
//! offsets or factors; negative offsets move things up.

use std::f32::consts::{PI, TAU};
use std::time::Duration;

/// One full float cycle
const FLOAT_PERIOD: f32 = 3.0;
/// How far a floating element rises
const FLOAT_HEIGHT: f32 = 10.0;
/// One bounce (up, down, up)
const BOUNCE_PERIOD: f32 = 1.0;
/// One ping pulse
const PING_PERIOD: f32 = 1.0;
/// Fraction of the ping period spent growing; the rest is invisible
const PING_ACTIVE: f32 = 0.75;

/// Seconds into a loop that starts after `delay`, `None` before it starts
fn local_time(elapsed: Duration, delay: Duration) -> Option<f32> {
    elapsed
        .checked_sub(delay)
        .map(|t| t.as_secs_f32())
}

/// Gentle up-and-down drift used for decorations and the photo
pub fn float_offset(elapsed: Duration, delay: Duration) -> f32 {
    let Some(t) = local_time(elapsed, delay) else {
        return 0.0;
    };
    let phase = (t / FLOAT_PERIOD).fract();
    -FLOAT_HEIGHT * (1.0 - (TAU * phase).cos()) / 2.0
}

/// Bounce of an element of the given height: a quarter of its height at the
/// top, resting in the middle of the cycle
pub fn bounce_offset(elapsed: Duration, delay: Duration, height: f32) -> f32 {
    let Some(t) = local_time(elapsed, delay) else {
        return 0.0;
    };
    let phase = (t / BOUNCE_PERIOD).fract();
    -0.25 * height * (PI * phase).cos().abs()
}

/// Expanding, fading pulse: returns `(scale, opacity)`
pub fn ping(elapsed: Duration) -> (f32, f32) {
    let phase = (elapsed.as_secs_f32() / PING_PERIOD).fract();
    if phase >= PING_ACTIVE {
        return (2.0, 0.0);
    }
    let t = phase / PING_ACTIVE;
    (1.0 + t, 1.0 - t)
}
