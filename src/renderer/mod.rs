//! Canvas 2D rendering module
//!
//! The simulation only supplies geometry and score strings; everything that
//! touches the drawing surface lives here.

#[cfg(target_arch = "wasm32")]
pub mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;
