//! Game state and core simulation types
//!
//! Everything here is a value snapshot: each frame derives a new state from
//! the previous one, nothing is mutated in place.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Fixed playfield dimensions, supplied once at startup from the drawing
/// surface and treated as immutable configuration after that.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

/// Rejected playfield configuration
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PlayfieldError {
    #[error("playfield dimensions must be positive and finite, got {width}x{height}")]
    InvalidDimensions { width: f32, height: f32 },
}

impl Playfield {
    /// Validate dimensions up front; a zero or negative surface is a
    /// composition bug, not something to limp along with.
    pub fn new(width: f32, height: f32) -> Result<Self, PlayfieldError> {
        if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
            return Err(PlayfieldError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }
}

/// One player's paddle
///
/// Invariant: `0 <= y` and `y + height <= playfield.height`, maintained by
/// the paddle controller in [`crate::sim::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Paddle {
    /// Left paddle at its centered serve position
    pub fn left(field: &Playfield) -> Self {
        Self {
            x: PADDLE_MARGIN,
            y: (field.height - PADDLE_HEIGHT) / 2.0,
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
        }
    }

    /// Right paddle at its centered serve position
    pub fn right(field: &Playfield) -> Self {
        Self {
            x: field.width - PADDLE_MARGIN - PADDLE_WIDTH,
            y: (field.height - PADDLE_HEIGHT) / 2.0,
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
        }
    }

    /// Vertical center of the paddle face
    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    /// Whether the ball's vertical span overlaps this paddle's span
    pub fn span_overlaps(&self, ball: &Ball) -> bool {
        ball.y <= self.y + self.height && ball.y + ball.height >= self.y
    }
}

/// The ball
///
/// `angle` is in radians with `cos(angle)` driving horizontal motion and
/// `-sin(angle)` driving vertical motion (y grows downward on screen).
/// Position is deliberately unbounded: a ball past a side wall survives for
/// exactly one frame so the status machine can score the miss.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub speed: f32,
    pub angle: f32,
}

impl Ball {
    /// Ball held at the center of the field, ready to serve at `angle`
    pub fn serve(field: &Playfield, angle: f32) -> Self {
        Self {
            x: (field.width - BALL_SIZE) / 2.0,
            y: (field.height - BALL_SIZE) / 2.0,
            width: BALL_SIZE,
            height: BALL_SIZE,
            speed: BALL_SERVE_SPEED,
            angle,
        }
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }
}

/// Per-side score plus the rally on/off toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GameStatus {
    pub score_left: u32,
    pub score_right: u32,
    /// `true` only while a rally is in progress
    pub active: bool,
}

/// Complete game state for one frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub field: Playfield,
    pub left: Paddle,
    pub right: Paddle,
    pub ball: Ball,
    pub status: GameStatus,
}

impl GameState {
    /// Initial state: idle, paddles centered, ball waiting to serve rightward
    pub fn new(field: Playfield) -> Self {
        Self {
            field,
            left: Paddle::left(&field),
            right: Paddle::right(&field),
            ball: Ball::serve(&field, 0.0),
            status: GameStatus::default(),
        }
    }
}
