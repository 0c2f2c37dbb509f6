//! Playfield bounds and goal geometry
//!
//! Cars and ball are kept on the field in different ways: cars get their
//! position clamped and keep their velocity, the ball keeps its position and
//! gets its velocity mirrored. The two goal mouths punch holes in the ball's
//! x-axis reflection so it can leave the field where scoring applies.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

use super::state::Body;

/// An axis-aligned rectangle, anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

/// The bounded playfield
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Default for Arena {
    fn default() -> Self {
        Self {
            width: ARENA_WIDTH,
            height: ARENA_HEIGHT,
        }
    }
}

impl Arena {
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Upper edge of the goal window
    pub fn goal_top(&self) -> f32 {
        self.height / 2.0 - GOAL_HALF_HEIGHT
    }

    /// Lower edge of the goal window
    pub fn goal_bottom(&self) -> f32 {
        self.height / 2.0 + GOAL_HALF_HEIGHT
    }

    /// Whether a y coordinate falls inside the goal window. Bounds are
    /// exclusive; a ball dead on the goal post edge is not in the mouth.
    pub fn in_goal_mouth(&self, y: f32) -> bool {
        y > self.goal_top() && y < self.goal_bottom()
    }

    /// Goal rects for rendering, left then right. The rect height equals the
    /// scoring window height so the drawn goal and the scored goal agree.
    pub fn goal_rects(&self) -> [Rect; 2] {
        let y = self.goal_top();
        let h = 2.0 * GOAL_HALF_HEIGHT;
        [
            Rect { x: 0.0, y, w: GOAL_DEPTH, h },
            Rect { x: self.width - GOAL_DEPTH, y, w: GOAL_DEPTH, h },
        ]
    }

    /// Keep a box-footprint body on the field. Position only: the wall-ward
    /// velocity component stays until friction eats it.
    pub fn clamp_car(&self, body: &mut Body) {
        body.pos.x = body.pos.x.clamp(0.0, self.width - body.extent);
        body.pos.y = body.pos.y.clamp(0.0, self.height - body.extent);
    }

    /// Bounce a circular body off the field edges. Velocity only: the
    /// position is left where integration put it, so a fast ball may sit a
    /// little past the edge for one tick before the flipped velocity brings
    /// it back. The goal mouths are exempt from the x test.
    pub fn reflect_ball(&self, body: &mut Body) {
        let r = body.extent;
        if !self.in_goal_mouth(body.pos.y) && (body.pos.x < r || body.pos.x > self.width - r) {
            body.vel.x = -body.vel.x;
        }
        if body.pos.y < r || body.pos.y > self.height - r {
            body.vel.y = -body.vel.y;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn ball_body(pos: Vec2, vel: Vec2) -> Body {
        let mut body = Body::new(pos, BALL_RADIUS, BALL_FRICTION);
        body.vel = vel;
        body
    }

    #[test]
    fn test_goal_rects_match_scoring_window() {
        let arena = Arena::default();
        let [left, right] = arena.goal_rects();
        assert_eq!(left.x, 0.0);
        assert_eq!(right.x, arena.width - GOAL_DEPTH);
        for rect in [left, right] {
            assert_eq!(rect.y, arena.goal_top());
            assert_eq!(rect.y + rect.h, arena.goal_bottom());
        }
    }

    #[test]
    fn test_ball_reflects_on_left_edge_outside_goal_mouth() {
        let arena = Arena::default();
        let mut body = ball_body(Vec2::new(BALL_RADIUS - 1.0, 100.0), Vec2::new(-1.0, 0.0));
        arena.reflect_ball(&mut body);
        assert_eq!(body.vel.x, 1.0);
        // no position correction
        assert_eq!(body.pos, Vec2::new(BALL_RADIUS - 1.0, 100.0));
    }

    #[test]
    fn test_ball_reflects_on_right_edge_and_both_y_edges() {
        let arena = Arena::default();

        let mut body = ball_body(Vec2::new(795.0, 100.0), Vec2::new(2.0, 0.0));
        arena.reflect_ball(&mut body);
        assert_eq!(body.vel.x, -2.0);

        let mut body = ball_body(Vec2::new(400.0, 5.0), Vec2::new(0.0, -3.0));
        arena.reflect_ball(&mut body);
        assert_eq!(body.vel.y, 3.0);

        let mut body = ball_body(Vec2::new(400.0, 595.0), Vec2::new(0.0, 3.0));
        arena.reflect_ball(&mut body);
        assert_eq!(body.vel.y, -3.0);
    }

    #[test]
    fn test_ball_sails_through_goal_mouth() {
        let arena = Arena::default();
        let mut body = ball_body(Vec2::new(5.0, arena.height / 2.0), Vec2::new(-1.5, 0.0));
        arena.reflect_ball(&mut body);
        assert_eq!(body.vel.x, -1.5);
    }

    #[test]
    fn test_goal_mouth_bounds_are_exclusive() {
        let arena = Arena::default();
        assert!(arena.in_goal_mouth(arena.height / 2.0));
        assert!(!arena.in_goal_mouth(arena.goal_top()));
        assert!(!arena.in_goal_mouth(arena.goal_bottom()));

        // dead on the post edge the ball still bounces
        let mut body = ball_body(Vec2::new(5.0, arena.goal_top()), Vec2::new(-1.0, 0.0));
        arena.reflect_ball(&mut body);
        assert_eq!(body.vel.x, 1.0);
    }

    #[test]
    fn test_car_clamp_keeps_velocity() {
        let arena = Arena::default();
        let mut body = Body::new(Vec2::new(-40.0, 700.0), CAR_SIZE, CAR_FRICTION);
        body.vel = Vec2::new(-5.0, 5.0);
        arena.clamp_car(&mut body);
        assert_eq!(body.pos, Vec2::new(0.0, arena.height - CAR_SIZE));
        assert_eq!(body.vel, Vec2::new(-5.0, 5.0));
    }

    proptest! {
        #[test]
        fn car_contained_after_arbitrary_tick(
            px in -1000.0f32..2000.0,
            py in -1000.0f32..2000.0,
            vx in -300.0f32..300.0,
            vy in -300.0f32..300.0,
        ) {
            let arena = Arena::default();
            let mut body = Body::new(Vec2::new(px, py), CAR_SIZE, CAR_FRICTION);
            body.vel = Vec2::new(vx, vy);
            body.integrate();
            arena.clamp_car(&mut body);
            prop_assert!(body.pos.x >= 0.0 && body.pos.x <= arena.width - CAR_SIZE);
            prop_assert!(body.pos.y >= 0.0 && body.pos.y <= arena.height - CAR_SIZE);
        }
    }
}
