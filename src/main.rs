//! Canvas Pong entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent, MouseEvent};

    use canvas_pong::Settings;
    use canvas_pong::consts::{CANVAS_HEIGHT, CANVAS_WIDTH};
    use canvas_pong::platform::{Driver, SharedInput};
    use canvas_pong::renderer::CanvasSink;

    type Game = Driver<SharedInput, CanvasSink>;

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Canvas Pong starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");
        canvas.set_width(CANVAS_WIDTH as u32);
        canvas.set_height(CANVAS_HEIGHT as u32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        let settings = Settings::load_or_default(canvas.get_attribute("data-settings").as_deref());

        let input = SharedInput::new();
        setup_input_handlers(&canvas, input.clone());

        let sink = CanvasSink::new(&canvas, ctx, settings);
        let game = Rc::new(RefCell::new(Driver::new(input, sink)));

        request_animation_frame(game);

        log::info!("Canvas Pong running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, input: SharedInput) {
        let document = web_sys::window().unwrap().document().unwrap();

        // Arrow keys: held state
        {
            let input = input.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                match event.key().as_str() {
                    "ArrowUp" => input.set_up(true),
                    "ArrowDown" => input.set_down(true),
                    _ => {}
                }
            });
            let _ = document
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        {
            let input = input.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                match event.key().as_str() {
                    "ArrowUp" => input.set_up(false),
                    "ArrowDown" => input.set_down(false),
                    _ => {}
                }
            });
            let _ = document
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse move: y relative to the canvas top; the sim ignores positions off the field
        {
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let y = event.client_y() - canvas_clone.offset_top();
                input.pointer_moved(y as f32);
            });
            let _ = document
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        game.borrow_mut().frame();
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use canvas_pong::Settings;
    use canvas_pong::platform::{Driver, ReplayInput};
    use canvas_pong::renderer::HeadlessSink;
    use canvas_pong::sim::GameEvent;

    env_logger::init();
    log::info!("Canvas Pong (native) starting...");
    log::info!("Native mode runs headless - build for wasm32 to play in a browser");

    let settings = Settings::from_env();
    let frames = settings.headless_frames;
    let mut driver = Driver::new(ReplayInput::idle(), HeadlessSink::new(settings));

    let mut paddle_hits = 0u64;
    for _ in 0..frames {
        paddle_hits += driver
            .frame()
            .iter()
            .filter(|e| matches!(e, GameEvent::PaddleHit { .. }))
            .count() as u64;
    }

    let score = driver.state().score;
    log::info!(
        "Ran {} frames: {} paddle hits, {} matches finished, current score {} - {}",
        driver.sink().frames(),
        paddle_hits,
        driver.sink().results().len(),
        score.player,
        score.opponent
    );

    match serde_json::to_string_pretty(&driver.state().snapshot()) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to serialize snapshot: {}", e),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
