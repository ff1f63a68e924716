//! Canvas 2D renderer
//!
//! Draws one frame from a [`GameState`] snapshot: background, both paddles,
//! the scores, the ball, and the serve prompt while no rally is running.

use std::f64::consts::TAU;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::sim::GameState;

const BACKGROUND: &str = "#000000";
const FOREGROUND: &str = "#ffffff";
const SCORE_FONT: &str = "30px sans-serif";

pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl CanvasRenderer {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        Ok(Self {
            ctx,
            width: canvas.width() as f64,
            height: canvas.height() as f64,
        })
    }

    /// Render one frame
    pub fn render(&self, state: &GameState) -> Result<(), JsValue> {
        self.ctx.set_fill_style_str(BACKGROUND);
        self.ctx.fill_rect(0.0, 0.0, self.width, self.height);

        self.ctx.set_fill_style_str(FOREGROUND);
        for paddle in [&state.left, &state.right] {
            self.ctx.fill_rect(
                paddle.x as f64,
                paddle.y as f64,
                paddle.width as f64,
                paddle.height as f64,
            );
        }

        self.ctx.set_font(SCORE_FONT);
        self.ctx.fill_text(
            &state.status.score_left.to_string(),
            self.width / 4.0,
            40.0,
        )?;
        self.ctx.fill_text(
            &state.status.score_right.to_string(),
            self.width / 1.25 - 30.0,
            40.0,
        )?;

        let ball = &state.ball;
        self.ctx.begin_path();
        self.ctx.arc(
            ball.center_x() as f64,
            ball.center_y() as f64,
            (ball.width / 2.0) as f64,
            0.0,
            TAU,
        )?;
        self.ctx.fill();

        if !state.status.active {
            self.ctx.fill_text(
                "Press SPACE to serve - W/S and arrow keys move",
                self.width / 2.0 - 230.0,
                self.height / 2.0 + 40.0,
            )?;
        }

        Ok(())
    }
}
