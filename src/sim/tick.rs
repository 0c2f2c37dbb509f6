//! Fixed timestep simulation tick
//!
//! The single entry point that advances a match. Update order is fixed every
//! tick: steering, integration, bounds, car-ball contacts, goals. Same
//! starting state and input script, same resulting states.

use super::collision::resolve_car_ball;
use super::opponent;
use super::state::{ControlSource, MatchState};
use crate::consts::*;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Accelerate toward the top edge
    pub up: bool,
    /// Accelerate toward the bottom edge
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

/// Advance the match by one fixed timestep
pub fn tick(state: &mut MatchState, input: &TickInput) {
    state.time_ticks += 1;

    // Steering first, so velocity changes land before this tick's movement
    let gain = state.difficulty.gain();
    let ball_body = state.ball.body;
    for car in [&mut state.player, &mut state.opponent] {
        match car.control {
            ControlSource::Human => {
                if input.up {
                    car.body.vel.y -= CAR_INPUT_ACCEL;
                }
                if input.down {
                    car.body.vel.y += CAR_INPUT_ACCEL;
                }
                if input.left {
                    car.body.vel.x -= CAR_INPUT_ACCEL;
                }
                if input.right {
                    car.body.vel.x += CAR_INPUT_ACCEL;
                }
            }
            ControlSource::Policy => opponent::steer(&mut car.body, &ball_body, gain),
        }
    }

    // Integrate, then keep everything on the field
    state.player.body.integrate();
    state.opponent.body.integrate();
    state.ball.body.integrate();
    state.arena.clamp_car(&mut state.player.body);
    state.arena.clamp_car(&mut state.opponent.body);
    state.arena.reflect_ball(&mut state.ball.body);

    // Car-ball contacts in fixed order, player first
    let player_body = state.player.body;
    let opponent_body = state.opponent.body;
    resolve_car_ball(&player_body, &mut state.ball.body);
    resolve_car_ball(&opponent_body, &mut state.ball.body);

    state.check_goals();
}
