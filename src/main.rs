//! Rally Pong entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent};

    use rally_pong::platform::{InputState, KeyBindings};
    use rally_pong::renderer::CanvasRenderer;
    use rally_pong::sim::{GameState, Playfield, tick};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        input: InputState,
        bindings: KeyBindings,
        renderer: CanvasRenderer,
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("failed to init logger");

        log::info!("Rally Pong starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or_else(|| JsValue::from_str("no canvas element"))?
            .dyn_into()?;

        // Fail fast on a degenerate drawing surface
        let field = Playfield::new(canvas.width() as f32, canvas.height() as f32)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        let renderer = CanvasRenderer::new(&canvas)?;
        let game = Rc::new(RefCell::new(Game {
            state: GameState::new(field),
            input: InputState::new(),
            bindings: KeyBindings::default(),
            renderer,
        }));

        setup_key_listeners(game.clone());
        request_animation_frame(game);

        log::info!("Rally Pong running ({}x{})", field.width, field.height);
        Ok(())
    }

    fn setup_key_listeners(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");

        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                let code = event.code();
                if g.bindings.binds(&code) {
                    event.prevent_default();
                    g.input.press(&code);
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().input.release(&event.code());
            });
            let _ =
                window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        {
            let mut g = game.borrow_mut();
            let input = g.input.tick_input(&g.bindings);
            g.state = tick(&g.state, &input);
            if let Err(e) = g.renderer.render(&g.state) {
                log::warn!("render error: {:?}", e);
            }
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Rally Pong (native) starting...");
    log::info!("The playable build targets the browser - this runs a headless demo rally");

    demo_rally();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Drive a few hundred frames with both paddles chasing the ball and log
/// how the score develops.
#[cfg(not(target_arch = "wasm32"))]
fn demo_rally() {
    use rally_pong::sim::{GameState, PaddleInput, Playfield, TickInput, tick};

    let field = Playfield::new(640.0, 480.0).expect("demo playfield is valid");
    let mut state = GameState::new(field);

    // Serve
    state = tick(
        &state,
        &TickInput {
            start: true,
            ..Default::default()
        },
    );

    for frame in 0..2000 {
        let chase = |paddle_center: f32| PaddleInput {
            up: state.ball.center_y() < paddle_center,
            down: state.ball.center_y() > paddle_center,
        };
        let input = TickInput {
            left: chase(state.left.center_y()),
            right: chase(state.right.center_y()),
            start: !state.status.active,
        };

        let prev = state.status;
        state = tick(&state, &input);
        if state.status != prev {
            log::info!(
                "frame {}: score {}:{} active={}",
                frame,
                state.status.score_left,
                state.status.score_right,
                state.status.active
            );
        }
    }

    log::info!(
        "demo finished at {}:{}",
        state.status.score_left,
        state.status.score_right
    );
}
