//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One update per display frame, fixed per-frame constants
//! - State is a value snapshot; `tick` derives the next snapshot
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{Collision, bounce_angle, classify};
pub use state::{Ball, GameState, GameStatus, Paddle, Playfield, PlayfieldError};
pub use tick::{PaddleInput, TickInput, integrate, move_paddle, tick};
