//! Car-ball collision detection and response
//!
//! Detection is a coarse per-axis check between anchor points; response
//! overwrites the ball's velocity entirely along the separation direction,
//! arcade-style. Cars are infinitely heavy as far as the ball is concerned
//! and never react to the hit themselves.

use crate::consts::CAR_SPEED_TRANSFER;

use super::state::Body;

/// Whether a car body and the ball body overlap
///
/// Compares anchor points directly (car top-left against ball center) with a
/// strict `size + radius` threshold per axis. The effective hit region is a
/// box centered on the car's anchor, so it reaches a little further past the
/// car's top-left than its bottom-right.
#[inline]
pub fn car_ball_overlap(car: &Body, ball: &Body) -> bool {
    let delta = ball.pos - car.pos;
    let reach = car.extent + ball.extent;
    delta.x.abs() < reach && delta.y.abs() < reach
}

/// Redirect the ball off a car. Returns whether a response was applied.
///
/// The outgoing velocity points from the car's anchor through the ball's
/// center with speed `|ball.vel| + |car.vel| / 2`, so a moving car shoves
/// the ball harder than a parked one. If the two anchors coincide there is
/// no direction to push along; the ball is left untouched for this tick and
/// the next tick's separation resolves it.
pub fn resolve_car_ball(car: &Body, ball: &mut Body) -> bool {
    if !car_ball_overlap(car, ball) {
        return false;
    }

    let Some(normal) = (ball.pos - car.pos).try_normalize() else {
        log::debug!("degenerate car-ball contact at {:?}, skipping response", ball.pos);
        return false;
    };

    let speed = ball.vel.length() + car.vel.length() * CAR_SPEED_TRANSFER;
    ball.vel = normal * speed;
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use glam::Vec2;

    fn car_at(pos: Vec2, vel: Vec2) -> Body {
        let mut body = Body::new(pos, CAR_SIZE, CAR_FRICTION);
        body.vel = vel;
        body
    }

    fn ball_at(pos: Vec2, vel: Vec2) -> Body {
        let mut body = Body::new(pos, BALL_RADIUS, BALL_FRICTION);
        body.vel = vel;
        body
    }

    #[test]
    fn test_overlap_threshold_is_strict() {
        let car = car_at(Vec2::new(100.0, 100.0), Vec2::ZERO);

        // reach is size + radius = 30 on each axis
        let touching = ball_at(Vec2::new(130.0, 100.0), Vec2::ZERO);
        assert!(!car_ball_overlap(&car, &touching));

        let inside = ball_at(Vec2::new(129.9, 100.0), Vec2::ZERO);
        assert!(car_ball_overlap(&car, &inside));

        let diagonal = ball_at(Vec2::new(125.0, 125.0), Vec2::ZERO);
        assert!(car_ball_overlap(&car, &diagonal));
    }

    #[test]
    fn test_redirect_along_separation() {
        let car = car_at(Vec2::new(100.0, 100.0), Vec2::ZERO);
        let mut ball = ball_at(Vec2::new(110.0, 105.0), Vec2::new(3.0, 0.0));

        assert!(resolve_car_ball(&car, &mut ball));

        // Direction is normalize((10, 5)), speed stays 3 for a parked car
        let expected = Vec2::new(10.0, 5.0).normalize() * 3.0;
        assert!((ball.vel.x - expected.x).abs() < 1e-4);
        assert!((ball.vel.y - expected.y).abs() < 1e-4);
        assert!((ball.vel.length() - 3.0).abs() < 1e-4);
    }

    #[test]
    fn test_moving_car_transfers_half_its_speed() {
        let car = car_at(Vec2::new(100.0, 100.0), Vec2::new(4.0, 0.0));
        let mut ball = ball_at(Vec2::new(120.0, 100.0), Vec2::new(1.0, 0.0));

        assert!(resolve_car_ball(&car, &mut ball));
        assert!((ball.vel.length() - 3.0).abs() < 1e-4);
        // Straight push to the right
        assert!((ball.vel.x - 3.0).abs() < 1e-4);
        assert!(ball.vel.y.abs() < 1e-4);
    }

    #[test]
    fn test_coincident_anchors_skip_response() {
        let car = car_at(Vec2::new(100.0, 100.0), Vec2::new(2.0, 0.0));
        let mut ball = ball_at(Vec2::new(100.0, 100.0), Vec2::new(1.5, -0.5));

        assert!(!resolve_car_ball(&car, &mut ball));
        assert_eq!(ball.vel, Vec2::new(1.5, -0.5));
    }

    #[test]
    fn test_clear_miss_leaves_ball_alone() {
        let car = car_at(Vec2::new(100.0, 100.0), Vec2::ZERO);
        let mut ball = ball_at(Vec2::new(400.0, 300.0), Vec2::new(1.0, 1.0));

        assert!(!resolve_car_ball(&car, &mut ball));
        assert_eq!(ball.vel, Vec2::new(1.0, 1.0));
        assert_eq!(ball.pos, Vec2::new(400.0, 300.0));
    }
}
