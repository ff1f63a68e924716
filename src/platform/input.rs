//! Keyboard input state
//!
//! Tracks which keys are currently held, keyed by `KeyboardEvent.code`.
//! `keydown`/`keyup` listeners (installed in `main.rs`) are the only
//! writers; the frame loop reads the set once per tick through the pure
//! accessors below, so the simulation stays testable without synthesizing
//! real browser events.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::sim::{PaddleInput, TickInput};

/// Which physical keys drive which signals
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBindings {
    pub left_up: String,
    pub left_down: String,
    pub right_up: String,
    pub right_down: String,
    pub start: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            left_up: "KeyW".into(),
            left_down: "KeyS".into(),
            right_up: "ArrowUp".into(),
            right_down: "ArrowDown".into(),
            start: "Space".into(),
        }
    }
}

impl KeyBindings {
    /// Whether `code` is bound to any game signal
    pub fn binds(&self, code: &str) -> bool {
        code == self.left_up
            || code == self.left_down
            || code == self.right_up
            || code == self.right_down
            || code == self.start
    }
}

/// The set of currently-pressed key codes
#[derive(Debug, Default)]
pub struct InputState {
    pressed: HashSet<String>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, code: &str) {
        self.pressed.insert(code.to_owned());
    }

    pub fn release(&mut self, code: &str) {
        self.pressed.remove(code);
    }

    pub fn is_pressed(&self, code: &str) -> bool {
        self.pressed.contains(code)
    }

    /// (up, down) for the left player
    pub fn left_controls(&self, bindings: &KeyBindings) -> (bool, bool) {
        (
            self.is_pressed(&bindings.left_up),
            self.is_pressed(&bindings.left_down),
        )
    }

    /// (up, down) for the right player
    pub fn right_controls(&self, bindings: &KeyBindings) -> (bool, bool) {
        (
            self.is_pressed(&bindings.right_up),
            self.is_pressed(&bindings.right_down),
        )
    }

    /// Whether the start/serve key is held
    pub fn start_pressed(&self, bindings: &KeyBindings) -> bool {
        self.is_pressed(&bindings.start)
    }

    /// Snapshot the current key state into one frame's simulation input
    pub fn tick_input(&self, bindings: &KeyBindings) -> TickInput {
        let (left_up, left_down) = self.left_controls(bindings);
        let (right_up, right_down) = self.right_controls(bindings);
        TickInput {
            left: PaddleInput {
                up: left_up,
                down: left_down,
            },
            right: PaddleInput {
                up: right_up,
                down: right_down,
            },
            start: self.start_pressed(bindings),
        }
    }
}
