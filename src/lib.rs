//! Car Soccer - a top-down two-car soccer arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, match state)
//! - `menu`: Pre-match selection flow (color scheme, difficulty)
//! - `settings`: Session parameters handed from the menu to the simulation

pub mod menu;
pub mod settings;
pub mod sim;

pub use menu::{Menu, MenuInput, MenuStage};
pub use settings::{ColorScheme, Difficulty, Palette, SessionConfig};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation tick rate (Hz)
    pub const TICK_RATE: u32 = 60;
    /// Fixed simulation timestep in seconds, for frame pacing in the driver
    pub const SIM_DT: f32 = 1.0 / TICK_RATE as f32;

    /// Arena dimensions
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    /// Car defaults - square footprint, anchored at its top-left corner
    pub const CAR_SIZE: f32 = 20.0;
    /// Per-tick multiplicative velocity decay for cars
    pub const CAR_FRICTION: f32 = 0.9;
    /// Velocity delta added per tick by one held input axis
    pub const CAR_INPUT_ACCEL: f32 = 0.3;

    /// Ball defaults - circle, anchored at its center
    pub const BALL_RADIUS: f32 = 10.0;
    /// Per-tick multiplicative velocity decay for the ball
    pub const BALL_FRICTION: f32 = 0.99;
    /// Per-axis speed of the ball right after a reset
    pub const BALL_RESET_SPEED: f32 = 2.0;

    /// Half-height of each goal mouth, centered on the arena midline
    pub const GOAL_HALF_HEIGHT: f32 = 50.0;
    /// How far each goal rect extends into the field (rendering only)
    pub const GOAL_DEPTH: f32 = 10.0;

    /// Fraction of the car's speed transferred to the ball on contact
    pub const CAR_SPEED_TRANSFER: f32 = 0.5;

    /// Kickoff x position of the player car
    pub const PLAYER_SPAWN_X: f32 = 100.0;
    /// Kickoff inset of the opponent car from the right edge
    pub const OPPONENT_SPAWN_INSET: f32 = 120.0;
}
