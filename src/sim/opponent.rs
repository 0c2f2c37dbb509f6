//! Reactive opponent steering
//!
//! A memoryless bang-bang controller: every tick it nudges the car's
//! velocity toward the ball on each axis independently. Friction is the only
//! damping, so the car overshoots and orbits a resting ball instead of
//! parking on it.

use super::state::Body;

/// Nudge a car's velocity toward the ball, `gain` units per axis per tick.
/// An exactly matching coordinate counts as "past the ball" and steers
/// negative.
pub fn steer(car: &mut Body, ball: &Body, gain: f32) {
    if car.pos.y < ball.pos.y {
        car.vel.y += gain;
    } else {
        car.vel.y -= gain;
    }
    if car.pos.x < ball.pos.x {
        car.vel.x += gain;
    } else {
        car.vel.x -= gain;
    }
}
