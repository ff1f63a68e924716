//! Collision classification and reflection angles
//!
//! One collision outcome is produced per frame. The predicates are checked
//! in a strict priority order: walls first (so a ball level with both a wall
//! and a paddle edge bounces instead of double-counting a point), then
//! misses (so a ball passing beside a paddle scores rather than bounces),
//! then paddle hits.

use serde::{Deserialize, Serialize};
use std::f32::consts::PI;

use super::state::{Ball, Paddle, Playfield};
use crate::consts::MAX_BOUNCE_ANGLE;

/// Outcome of the per-frame collision check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Collision {
    #[default]
    None,
    TopWall,
    BottomWall,
    /// Ball crossed the left paddle's line without meeting the paddle
    LeftOut,
    /// Ball crossed the right paddle's line without meeting the paddle
    RightOut,
    LeftPaddle,
    RightPaddle,
}

/// Classify the ball's position against walls and paddles.
pub fn classify(left: &Paddle, right: &Paddle, ball: &Ball, field: &Playfield) -> Collision {
    if ball.y <= 0.0 {
        Collision::TopWall
    } else if ball.y + ball.height >= field.height {
        Collision::BottomWall
    } else if ball.x <= left.x && !left.span_overlaps(ball) {
        Collision::LeftOut
    } else if ball.x + ball.width >= right.x + right.width && !right.span_overlaps(ball) {
        Collision::RightOut
    } else if ball.x <= left.x + left.width && left.span_overlaps(ball) {
        Collision::LeftPaddle
    } else if ball.x + ball.width >= right.x && right.span_overlaps(ball) {
        Collision::RightPaddle
    } else {
        Collision::None
    }
}

/// Signed fraction in roughly [-1, 1] describing where on the paddle's
/// height the ball struck, positive when the ball is above the center.
fn normalized_intersect(paddle: &Paddle, ball: &Ball) -> f32 {
    (paddle.center_y() - ball.y) / (paddle.height / 2.0)
}

/// Compute the ball's travel angle after this frame's collision outcome.
///
/// Wall hits mirror the angle vertically. Paddle hits deflect up to
/// [`MAX_BOUNCE_ANGLE`] from the horizontal, scaled linearly by where the
/// ball struck the paddle. A dead-center hit on the right paddle returns
/// exactly `PI` (angle 0 would send the ball back through the paddle); the
/// left paddle has no such special case and returns 0 naturally.
pub fn bounce_angle(collision: Collision, left: &Paddle, right: &Paddle, ball: &Ball) -> f32 {
    match collision {
        Collision::TopWall | Collision::BottomWall => -ball.angle,
        Collision::LeftPaddle => {
            let normalized = normalized_intersect(left, ball);
            if normalized == 0.0 {
                0.0
            } else {
                normalized * MAX_BOUNCE_ANGLE
            }
        }
        Collision::RightPaddle => {
            let normalized = normalized_intersect(right, ball);
            if normalized == 0.0 {
                PI
            } else {
                PI - normalized * MAX_BOUNCE_ANGLE
            }
        }
        // Out-of-bounds keeps flying for one frame; the status machine
        // scores it off the same outcome.
        Collision::None | Collision::LeftOut | Collision::RightOut => ball.angle,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn field() -> Playfield {
        Playfield::new(640.0, 480.0).unwrap()
    }

    fn setup() -> (Paddle, Paddle, Ball, Playfield) {
        let field = field();
        let left = Paddle::left(&field);
        let right = Paddle::right(&field);
        let ball = Ball::serve(&field, 0.0);
        (left, right, ball, field)
    }

    #[test]
    fn test_classify_none_mid_field() {
        let (left, right, ball, field) = setup();
        assert_eq!(classify(&left, &right, &ball, &field), Collision::None);
    }

    #[test]
    fn test_classify_walls() {
        let (left, right, mut ball, field) = setup();

        ball.y = 0.0;
        assert_eq!(classify(&left, &right, &ball, &field), Collision::TopWall);

        ball.y = field.height - ball.height;
        assert_eq!(classify(&left, &right, &ball, &field), Collision::BottomWall);
    }

    #[test]
    fn test_wall_beats_paddle_hit() {
        let (mut left, right, mut ball, field) = setup();

        // Paddle hugging the top wall, ball level with both
        left.y = 0.0;
        ball.x = left.x;
        ball.y = 0.0;
        assert_eq!(classify(&left, &right, &ball, &field), Collision::TopWall);
    }

    #[test]
    fn test_miss_beats_hit() {
        let (mut left, right, mut ball, field) = setup();

        // Paddle span [100, 170], ball at y=50: past the paddle line but
        // vertically clear of it
        left.y = 100.0;
        ball.x = left.x;
        ball.y = 50.0;
        assert_eq!(classify(&left, &right, &ball, &field), Collision::LeftOut);

        // Same position but overlapping the span is a hit
        ball.y = 120.0;
        assert_eq!(classify(&left, &right, &ball, &field), Collision::LeftPaddle);
    }

    #[test]
    fn test_classify_right_out() {
        let (left, mut right, mut ball, field) = setup();

        right.y = 100.0;
        ball.x = right.x + right.width;
        ball.y = 300.0;
        assert_eq!(classify(&left, &right, &ball, &field), Collision::RightOut);
    }

    #[test]
    fn test_left_center_hit_goes_straight_back() {
        let (left, right, mut ball, _) = setup();

        // Ball's top edge level with the paddle center: normalized == 0
        ball.x = left.x;
        ball.y = left.center_y();
        let angle = bounce_angle(Collision::LeftPaddle, &left, &right, &ball);
        assert_eq!(angle, 0.0);
    }

    #[test]
    fn test_right_center_hit_forces_pi() {
        let (left, right, mut ball, _) = setup();

        ball.x = right.x - ball.width;
        ball.y = right.center_y();
        let angle = bounce_angle(Collision::RightPaddle, &left, &right, &ball);
        assert_eq!(angle, PI);
    }

    #[test]
    fn test_left_above_center_deflects_upward() {
        let (left, right, mut ball, _) = setup();

        // Strike half a paddle-height above center: normalized = 0.5... but
        // measured from ball.y, so place the ball's top edge above center.
        ball.y = left.center_y() - left.height / 4.0;
        let angle = bounce_angle(Collision::LeftPaddle, &left, &right, &ball);
        let expected = 0.5 * MAX_BOUNCE_ANGLE;
        assert!((angle - expected).abs() < 1e-6);
    }

    #[test]
    fn test_out_of_bounds_keeps_angle() {
        let (left, right, mut ball, _) = setup();
        ball.angle = 1.25;
        assert_eq!(bounce_angle(Collision::LeftOut, &left, &right, &ball), 1.25);
        assert_eq!(bounce_angle(Collision::RightOut, &left, &right, &ball), 1.25);
        assert_eq!(bounce_angle(Collision::None, &left, &right, &ball), 1.25);
    }

    proptest! {
        #[test]
        fn prop_wall_reflection_negates_angle(theta in -PI..PI) {
            let (left, right, mut ball, _) = setup();
            ball.angle = theta;
            prop_assert_eq!(bounce_angle(Collision::TopWall, &left, &right, &ball), -theta);
            prop_assert_eq!(bounce_angle(Collision::BottomWall, &left, &right, &ball), -theta);
        }

        #[test]
        fn prop_paddle_deflection_bounded(offset in -1.0f32..1.0) {
            let (left, right, mut ball, _) = setup();
            ball.y = left.center_y() - offset * (left.height / 2.0);

            let angle = bounce_angle(Collision::LeftPaddle, &left, &right, &ball);
            prop_assert!(angle.abs() <= MAX_BOUNCE_ANGLE + 1e-5);

            let angle = bounce_angle(Collision::RightPaddle, &left, &right, &ball);
            prop_assert!((angle - PI).abs() <= MAX_BOUNCE_ANGLE + 1e-5);
        }
    }
}
