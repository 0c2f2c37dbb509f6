//! Frame snapshots of match state
//!
//! A [`Snapshot`] is the complete per-frame view a renderer or headless
//! consumer needs: body poses, scores, goal geometry, and the session's
//! color scheme. It borrows nothing from the live aggregate and serializes
//! with `serde`, so it can cross a thread or process boundary freely.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::settings::ColorScheme;

use super::arena::{Arena, Rect};
use super::state::{Body, MatchState};

/// Pose of a single body at capture time
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodySnapshot {
    pub pos: Vec2,
    pub vel: Vec2,
    pub extent: f32,
}

impl From<&Body> for BodySnapshot {
    fn from(body: &Body) -> Self {
        Self {
            pos: body.pos,
            vel: body.vel,
            extent: body.extent,
        }
    }
}

/// One frame of match state, ready to draw or ship elsewhere
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub tick: u64,
    pub player: BodySnapshot,
    pub opponent: BodySnapshot,
    pub ball: BodySnapshot,
    pub player_score: u32,
    pub opponent_score: u32,
    pub arena: Arena,
    /// Goal mouths, left then right
    pub goals: [Rect; 2],
    pub colors: ColorScheme,
}

impl Snapshot {
    pub fn capture(state: &MatchState) -> Self {
        Self {
            tick: state.time_ticks,
            player: (&state.player.body).into(),
            opponent: (&state.opponent.body).into(),
            ball: (&state.ball.body).into(),
            player_score: state.player_score,
            opponent_score: state.opponent_score,
            arena: state.arena,
            goals: state.arena.goal_rects(),
            colors: state.colors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::SessionConfig;

    #[test]
    fn test_capture_mirrors_state() {
        let mut state = MatchState::new(SessionConfig::default(), 9);
        state.player_score = 2;
        state.opponent_score = 5;
        state.time_ticks = 1234;

        let snap = state.snapshot();
        assert_eq!(snap.tick, 1234);
        assert_eq!(snap.player.pos, state.player.body.pos);
        assert_eq!(snap.opponent.pos, state.opponent.body.pos);
        assert_eq!(snap.ball.vel, state.ball.body.vel);
        assert_eq!(snap.player_score, 2);
        assert_eq!(snap.opponent_score, 5);
        assert_eq!(snap.goals, state.arena.goal_rects());
        assert_eq!(snap.colors, state.colors);
    }

    #[test]
    fn test_capture_is_repeatable() {
        let state = MatchState::new(SessionConfig::default(), 9);
        assert_eq!(state.snapshot(), state.snapshot());
    }

    #[test]
    fn test_snapshot_survives_json() {
        let state = MatchState::new(SessionConfig::default(), 3);
        let snap = state.snapshot();
        let json = serde_json::to_string(&snap).unwrap();
        let back: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snap);
    }
}
