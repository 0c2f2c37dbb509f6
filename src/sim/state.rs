//! Match state and core simulation types
//!
//! Everything the simulation reads or writes lives here, owned by a single
//! [`MatchState`] aggregate that [`tick`](super::tick::tick) mutates in place.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::*;
use crate::settings::{ColorScheme, Difficulty, SessionConfig};

use super::arena::Arena;
use super::snapshot::Snapshot;

/// Which side a car plays for. Routes input and attributes goals, nothing
/// else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Team {
    Player,
    Opponent,
}

/// Who drives a car each tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlSource {
    /// Steered by [`TickInput`](super::tick::TickInput)
    Human,
    /// Steered by the built-in chase policy
    Policy,
}

/// A point mass with a footprint
///
/// `extent` is the full side length for box bodies (cars, anchored at their
/// top-left corner) and the radius for circular bodies (the ball, anchored
/// at its center). Velocities are in units per tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub pos: Vec2,
    pub vel: Vec2,
    pub extent: f32,
    pub friction: f32,
}

impl Body {
    pub fn new(pos: Vec2, extent: f32, friction: f32) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            extent,
            friction,
        }
    }

    /// Advance one tick: move, then bleed speed. Position moves before
    /// friction applies, so a velocity change this tick is felt this tick.
    pub fn integrate(&mut self) {
        self.pos += self.vel;
        self.vel *= self.friction;
    }
}

/// A car entity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Car {
    pub body: Body,
    pub team: Team,
    pub control: ControlSource,
}

impl Car {
    pub fn new(pos: Vec2, team: Team, control: ControlSource) -> Self {
        Self {
            body: Body::new(pos, CAR_SIZE, CAR_FRICTION),
            team,
            control,
        }
    }
}

/// The ball entity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub body: Body,
}

impl Ball {
    pub fn new(arena: &Arena) -> Self {
        Self {
            body: Body::new(arena.center(), BALL_RADIUS, BALL_FRICTION),
        }
    }

    /// Put the ball back at center with a fresh diagonal kick. Each axis
    /// draws its sign independently, so all four diagonals are equally
    /// likely.
    pub fn reset(&mut self, arena: &Arena, rng: &mut Pcg32) {
        self.body.pos = arena.center();
        let vx = if rng.random_bool(0.5) {
            BALL_RESET_SPEED
        } else {
            -BALL_RESET_SPEED
        };
        let vy = if rng.random_bool(0.5) {
            BALL_RESET_SPEED
        } else {
            -BALL_RESET_SPEED
        };
        self.body.vel = Vec2::new(vx, vy);
    }
}

/// Complete match state (deterministic: same seed and input script, same
/// states)
#[derive(Debug, Clone)]
pub struct MatchState {
    /// Session seed for reproducibility
    pub seed: u64,
    /// All randomness (ball kicks) flows through here
    rng: Pcg32,
    /// Opponent steering strength, fixed for the session
    pub difficulty: Difficulty,
    /// Carried for the renderer; the simulation never reads it
    pub colors: ColorScheme,
    /// Playfield bounds and goal geometry
    pub arena: Arena,
    /// Left-side car, driven by input
    pub player: Car,
    /// Right-side car, driven by the chase policy
    pub opponent: Car,
    pub ball: Ball,
    pub player_score: u32,
    pub opponent_score: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl MatchState {
    /// Create a new match from session settings and a seed. The opening
    /// ball kick comes from the same seeded reset path as every goal reset.
    pub fn new(config: SessionConfig, seed: u64) -> Self {
        let arena = config.arena;
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut ball = Ball::new(&arena);
        ball.reset(&arena, &mut rng);

        let mid_y = arena.height / 2.0;
        Self {
            seed,
            rng,
            difficulty: config.difficulty,
            colors: config.colors,
            arena,
            player: Car::new(
                Vec2::new(PLAYER_SPAWN_X, mid_y),
                Team::Player,
                ControlSource::Human,
            ),
            opponent: Car::new(
                Vec2::new(arena.width - OPPONENT_SPAWN_INSET, mid_y),
                Team::Opponent,
                ControlSource::Policy,
            ),
            ball,
            player_score: 0,
            opponent_score: 0,
            time_ticks: 0,
        }
    }

    /// Score any end-line crossing and restart play from center, all within
    /// the current tick.
    ///
    /// A goal needs the ball past the end line AND strictly inside the goal
    /// window. Past the end line outside the window never happens for more
    /// than a tick (the edge reflection already flipped the velocity), and
    /// scores nothing.
    pub(crate) fn check_goals(&mut self) {
        let pos = self.ball.body.pos;
        if !self.arena.in_goal_mouth(pos.y) {
            return;
        }
        if pos.x < 0.0 {
            self.opponent_score += 1;
            log::info!(
                "goal for opponent, score {}-{} at tick {}",
                self.player_score,
                self.opponent_score,
                self.time_ticks
            );
            self.ball.reset(&self.arena, &mut self.rng);
        } else if pos.x > self.arena.width {
            self.player_score += 1;
            log::info!(
                "goal for player, score {}-{} at tick {}",
                self.player_score,
                self.opponent_score,
                self.time_ticks
            );
            self.ball.reset(&self.arena, &mut self.rng);
        }
    }

    /// Capture a serializable view of the current state for rendering
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(self)
    }
}
