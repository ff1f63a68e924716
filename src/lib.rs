//! Rally Pong - classic two-player Pong for the browser
//!
//! Core modules:
//! - `sim`: Deterministic simulation (paddle movement, collisions, scoring)
//! - `renderer`: Canvas 2D rendering
//! - `platform`: Keyboard input abstraction

pub mod platform;
pub mod renderer;
pub mod sim;

/// Game configuration constants
pub mod consts {
    use std::f32::consts::PI;

    /// Paddle dimensions (playfield units)
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 70.0;
    /// Horizontal inset of each paddle from its side wall
    pub const PADDLE_MARGIN: f32 = 10.0;
    /// Paddle displacement per frame while a movement key is held
    pub const PADDLE_STEP: f32 = 5.0;

    /// Ball is drawn as a circle but collides as a square of this size
    pub const BALL_SIZE: f32 = 10.0;
    /// Ball speed at the start of every rally
    pub const BALL_SERVE_SPEED: f32 = 5.0;
    /// Per-frame speed gain while a rally is in progress
    pub const BALL_ACCEL: f32 = 0.005;
    /// Speed saturates here rather than growing without bound
    pub const BALL_MAX_SPEED: f32 = 40.0;

    /// Maximum deflection off a paddle, measured from the horizontal axis
    pub const MAX_BOUNCE_ANGLE: f32 = 75.0 * PI / 180.0;
}
