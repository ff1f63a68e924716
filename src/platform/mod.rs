//! Platform abstraction layer
//!
//! The simulation never talks to the browser directly. Input events land in
//! a process-wide pressed-key set (written only from the event-dispatch
//! context, read once per frame), and the simulation consumes a pure
//! [`crate::sim::TickInput`] built from it.

pub mod input;

pub use input::{InputState, KeyBindings};
