//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one `tick` call = one 60 Hz step)
//! - Seeded RNG only
//! - Fixed update order (player car, opponent car, ball)
//! - No rendering or platform dependencies

pub mod arena;
pub mod collision;
pub mod opponent;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use arena::{Arena, Rect};
pub use collision::{car_ball_overlap, resolve_car_ball};
pub use snapshot::{BodySnapshot, Snapshot};
pub use state::{Ball, Body, Car, ControlSource, MatchState, Team};
pub use tick::{TickInput, tick};
