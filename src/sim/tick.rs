//! Per-frame simulation tick
//!
//! `tick` derives the next full game state from the previous snapshot plus
//! this frame's input. The browser drives it once per display refresh; tests
//! drive it with synthetic inputs.

use glam::Vec2;
use std::f32::consts::PI;

use super::collision::{Collision, bounce_angle, classify};
use super::state::{Ball, GameState, Paddle, Playfield};
use crate::consts::*;

/// One paddle's movement signals for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaddleInput {
    pub up: bool,
    pub down: bool,
}

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: PaddleInput,
    pub right: PaddleInput,
    /// Start/serve signal
    pub start: bool,
}

/// Move a paddle one step in the requested direction.
///
/// Up wins when both signals are asserted (the `(true, _)` arm is checked
/// first). A move is only attempted while there is room on that side, and
/// the result is clamped so `0 <= y` and `y + height <= field.height` hold
/// even when the step grid does not land exactly on the boundary.
pub fn move_paddle(input: PaddleInput, paddle: &Paddle, field: &Playfield) -> Paddle {
    match (input.up, input.down) {
        (true, _) if paddle.y > 0.0 => Paddle {
            y: (paddle.y - PADDLE_STEP).max(0.0),
            ..*paddle
        },
        (_, true) if paddle.y + paddle.height < field.height => Paddle {
            y: (paddle.y + PADDLE_STEP).min(field.height - paddle.height),
            ..*paddle
        },
        _ => *paddle,
    }
}

/// Advance the ball one frame along `angle` at its current speed.
///
/// Speed grows a little every active frame and saturates at
/// [`BALL_MAX_SPEED`] instead of running away over a long rally.
pub fn integrate(angle: f32, ball: &Ball) -> Ball {
    let step = Vec2::new(angle.cos(), -angle.sin()) * ball.speed;
    Ball {
        x: ball.x + step.x,
        y: ball.y + step.y,
        speed: (ball.speed + BALL_ACCEL).min(BALL_MAX_SPEED),
        angle,
        ..*ball
    }
}

/// Derive the next game state from the previous one plus this frame's input.
///
/// Idle frames hold everything at the serve layout and alternate the serve
/// direction; the frame that sees the start press still renders that layout,
/// so motion begins on the following frame. While a rally is active the
/// start signal takes priority over scoring: a miss in the same frame as a
/// start press does not count.
pub fn tick(state: &GameState, input: &TickInput) -> GameState {
    let field = state.field;
    let mut status = state.status;
    if input.start {
        status.active = true;
    }

    if !state.status.active {
        // Alternate the intended serve direction every idle frame
        let serve_angle = if state.ball.angle == 0.0 { PI } else { 0.0 };
        return GameState {
            field,
            left: Paddle::left(&field),
            right: Paddle::right(&field),
            ball: Ball::serve(&field, serve_angle),
            status,
        };
    }

    let left = move_paddle(input.left, &state.left, &field);
    let right = move_paddle(input.right, &state.right, &field);

    let outcome = classify(&left, &right, &state.ball, &field);
    let angle = bounce_angle(outcome, &left, &right, &state.ball);
    let ball = integrate(angle, &state.ball);

    if !input.start {
        match outcome {
            Collision::LeftOut => {
                status.score_right += 1;
                status.active = false;
                log::debug!(
                    "point to right, score {}:{}",
                    status.score_left,
                    status.score_right
                );
            }
            Collision::RightOut => {
                status.score_left += 1;
                status.active = false;
                log::debug!(
                    "point to left, score {}:{}",
                    status.score_left,
                    status.score_right
                );
            }
            _ => {}
        }
    }

    GameState {
        field,
        left,
        right,
        ball,
        status,
    }
}
